// crates/accounts/src/domain/value_objects/website.rs

use std::fmt;
use serde::{Deserialize, Serialize};
use url::Url;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

/// Site web d'un profil. La saisie est conservée telle quelle une fois validée.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Website(String);

impl Website {
    /// Constructeur sécurisé (Domaine / API)
    pub fn parse(value: impl Into<String>) -> Result<Self> {
        let website = Self(value.into());
        website.validate()?;
        Ok(website)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Website {
    fn validate(&self) -> Result<()> {
        // Le parseur ignore les blancs (bords, tabulations, retours ligne) : on les refuse avant
        if self.0.chars().any(char::is_whitespace) {
            return Err(DomainError::Validation {
                field: "website",
                reason: "Website must not contain whitespace".into(),
            });
        }

        // URL absolue obligatoire : "//host/" (relative au protocole) est rejetée ici
        let parsed = Url::parse(&self.0).map_err(|e| DomainError::Validation {
            field: "website",
            reason: format!("Invalid URL format '{}': {}", self.0, e),
        })?;

        // On restreint les protocoles
        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(DomainError::Validation {
                field: "website",
                reason: "Only http and https protocols are allowed".into(),
            });
        }

        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(DomainError::Validation {
                field: "website",
                reason: "Website must contain a host".into(),
            });
        }

        Ok(())
    }
}

impl fmt::Display for Website {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Website {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<Website> for String {
    fn from(website: Website) -> Self {
        website.0
    }
}
