// crates/accounts/src/domain/services/verification_policy.rs

use crate::domain::models::UserData;
use crate::domain::value_objects::{PropertyName, VerificationStatus};

pub fn email_changed(old: &UserData, new: &UserData) -> bool {
    old.value_of(&PropertyName::Email) != new.value_of(&PropertyName::Email)
}

/// Recalcule le statut de chaque propriété présente dans `new` :
/// valeur inchangée -> statut précédent, valeur modifiée -> `NotVerified`.
/// Un email modifié est laissé tel quel, son statut relève de la vérification email.
pub fn update_verify_status(old: &UserData, mut new: UserData) -> UserData {
    let email_modified = email_changed(old, &new);

    for (name, data) in new.iter_mut() {
        if *name == PropertyName::Email && email_modified {
            continue;
        }

        let previous = old.get(name);
        let unchanged = previous.map_or("", |p| p.value.as_str()) == data.value;

        data.verified = if unchanged {
            Some(previous.and_then(|p| p.verified).unwrap_or_default())
        } else {
            Some(VerificationStatus::NotVerified)
        };
    }

    new
}
