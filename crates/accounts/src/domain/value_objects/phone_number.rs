// crates/accounts/src/domain/value_objects/phone_number.rs

use std::sync::LazyLock;
use serde::{Deserialize, Serialize};
use regex::Regex;
use phonenumber::Mode;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use crate::domain::value_objects::PhoneRegion;

// Regex E.164 : un '+' suivi de 7 à 15 chiffres (pas de 0 après le +)
static E164_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+[1-9]\d{6,14}$").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Analyse une saisie libre ("0711 / 25 24 28-90") et la normalise en E.164.
    /// `default_region` n'est utilisé que si la saisie n'a pas d'indicatif.
    pub fn parse(raw: &str, default_region: Option<&PhoneRegion>) -> Result<Self> {
        let region = default_region.and_then(PhoneRegion::country);

        let number = phonenumber::parse(region, raw).map_err(|e| DomainError::Validation {
            field: "phone",
            reason: format!("Unable to parse phone number '{}': {}", raw, e),
        })?;

        if !phonenumber::is_valid(&number) {
            return Err(DomainError::Validation {
                field: "phone",
                reason: format!("'{}' is not a valid phone number for the resolved region", raw),
            });
        }

        // E.164 ne porte pas de poste : on refuse plutôt que de le perdre
        if number.extension().is_some() {
            return Err(DomainError::Validation {
                field: "phone",
                reason: format!("'{}' contains an extension, which cannot be stored", raw),
            });
        }

        let phone = Self(number.format().mode(Mode::E164).to_string());
        phone.validate()?;

        Ok(phone)
    }

    /// Reconstruction rapide (Infrastructure / DB), la valeur est déjà en E.164
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for PhoneNumber {
    fn validate(&self) -> Result<()> {
        if !E164_REGEX.is_match(&self.0) {
            return Err(DomainError::Validation {
                field: "phone",
                reason: "Must be in E.164 format (e.g., +4971125242890)".into(),
            });
        }
        Ok(())
    }
}

// --- CONVERSIONS ---

impl TryFrom<String> for PhoneNumber {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        let phone = Self::from_raw(value);
        phone.validate()?;
        Ok(phone)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
