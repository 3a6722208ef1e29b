// crates/accounts/src/domain/value_objects/phone_region.rs

use std::fmt;
use phonenumber::country;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Région ISO 3166 ("DE", "FR") appliquée aux numéros saisis sans indicatif.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneRegion(String);

impl PhoneRegion {
    /// Constructeur sécurisé : normalise en majuscules et valide
    pub fn try_new(code: impl Into<String>) -> Result<Self> {
        let region = Self(code.into().trim().to_uppercase());
        region.validate()?;
        Ok(region)
    }

    /// Lecture depuis la configuration : vide ou inconnue = aucune région
    pub fn from_config(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        match Self::try_new(raw) {
            Ok(region) => Some(region),
            Err(e) => {
                tracing::warn!("⚠️ Default phone region ignored: {}", e);
                None
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub(crate) fn country(&self) -> Option<country::Id> {
        self.0.parse().ok()
    }
}

impl ValueObject for PhoneRegion {
    fn validate(&self) -> Result<()> {
        let well_formed = self.0.len() == 2 && self.0.chars().all(|c| c.is_ascii_uppercase());
        if !well_formed || self.country().is_none() {
            return Err(DomainError::Validation {
                field: "phone_region",
                reason: format!("Region '{}' is not a known ISO 3166 country code", self.0),
            });
        }
        Ok(())
    }
}

impl fmt::Display for PhoneRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
