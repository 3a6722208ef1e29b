// crates/accounts/src/domain/services/property_sanitizer.rs

use shared_kernel::errors::Result;
use crate::domain::models::UserData;
use crate::domain::value_objects::{DataPolicy, PhoneNumber, PhoneRegion, PropertyName, Scope, Website};

/// Met un jeu de propriétés sous forme canonique avant comparaison et écriture :
/// scopes résolus, téléphone en E.164, site web contrôlé.
pub struct PropertySanitizer {
    default_region: Option<PhoneRegion>,
}

impl PropertySanitizer {
    pub fn new(default_region: Option<PhoneRegion>) -> Self {
        Self { default_region }
    }

    /// Strict : première donnée invalide = erreur, rien n'est modifié.
    /// Lenient : scope invalide -> `Local`, téléphone / site web invalide -> "".
    pub fn sanitize(&self, mut data: UserData, policy: DataPolicy) -> Result<UserData> {
        for (name, property) in data.iter_mut() {
            let scope = Scope::normalize(*name, &property.scope, policy)?;
            property.scope = scope.as_str().to_string();

            if property.value.is_empty() {
                continue;
            }

            property.value = match name {
                PropertyName::Phone => policy.recover(
                    PhoneNumber::parse(&property.value, self.default_region.as_ref()).map(String::from),
                    |_| String::new(),
                )?,
                PropertyName::Website => policy.recover(
                    Website::parse(property.value.as_str()).map(String::from),
                    |_| String::new(),
                )?,
                _ => continue,
            };
        }

        Ok(data)
    }
}
