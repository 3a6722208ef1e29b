// crates/accounts/src/domain/builders/user_data_builder.rs

use crate::domain::models::{PropertyData, UserData};
use crate::domain::value_objects::{PropertyName, Scope, VerificationStatus};

pub struct UserDataBuilder {
    data: UserData,
}

impl UserDataBuilder {
    /// Chemin 1 : SAISIE (Via API / tests)
    pub fn new() -> Self {
        Self { data: UserData::new() }
    }

    /// Chemin 2 : RECORD PAR DÉFAUT (premier accès d'un utilisateur)
    /// Toutes les propriétés connues, valeur vide, scope par défaut, non vérifiées.
    pub fn defaults() -> UserData {
        PropertyName::ALL
            .into_iter()
            .map(|name| {
                let data = PropertyData::new("", name.default_scope())
                    .verified(VerificationStatus::NotVerified);
                (name, data)
            })
            .collect()
    }

    pub fn with_property(mut self, name: PropertyName, value: impl Into<String>, scope: Scope) -> Self {
        self.data.insert(name, PropertyData::new(value, scope));
        self
    }

    /// Scope brut, non normalisé (alias hérités, valeurs invalides)
    pub fn with_raw_property(mut self, name: PropertyName, value: impl Into<String>, scope: impl Into<String>) -> Self {
        self.data.insert(name, PropertyData::with_raw_scope(value, scope));
        self
    }

    /// Sans effet si la propriété n'a pas encore été ajoutée
    pub fn with_verified(mut self, name: PropertyName, status: VerificationStatus) -> Self {
        if let Some(data) = self.data.get_mut(&name) {
            data.verified = Some(status);
        }
        self
    }

    pub fn build(self) -> UserData {
        self.data
    }
}

impl Default for UserDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}
