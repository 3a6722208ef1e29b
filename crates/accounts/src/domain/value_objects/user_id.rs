// crates/accounts/src/domain/value_objects/user_id.rs

use std::fmt;
use std::sync::LazyLock;
use serde::{Deserialize, Serialize};
use regex::Regex;
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};

// Caractères autorisés dans un uid : alphanumérique, espace, _ . @ - '
static USER_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9 _.@\-']+$").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    pub const MAX_LEN: usize = 64;

    /// Constructeur sécurisé (API / Domaine)
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let id = Self(value.into().trim().to_string());
        id.validate()?;
        Ok(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for UserId {
    fn validate(&self) -> Result<()> {
        let len = self.0.chars().count();

        if len == 0 || len > Self::MAX_LEN {
            return Err(DomainError::Validation {
                field: "user_id",
                reason: format!("User id length must be between 1 and {} chars", Self::MAX_LEN),
            });
        }

        if !USER_ID_REGEX.is_match(&self.0) {
            return Err(DomainError::Validation {
                field: "user_id",
                reason: "Only a-z, A-Z, 0-9, spaces and \"_.@-'\" are allowed".into(),
            });
        }

        Ok(())
    }
}

// --- CONVERSIONS ---

impl TryFrom<String> for UserId {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
