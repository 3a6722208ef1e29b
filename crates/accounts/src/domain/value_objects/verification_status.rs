// crates/accounts/src/domain/value_objects/verification_status.rs

use serde::{Deserialize, Serialize};
use shared_kernel::errors::DomainError;

/// Statut de vérification d'une propriété, stocké sous la forme "0" / "1" / "2".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "RawVerificationStatus", into = "String")]
pub enum VerificationStatus {
    #[default]
    NotVerified,
    VerificationInProgress,
    Verified,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotVerified => "0",
            Self::VerificationInProgress => "1",
            Self::Verified => "2",
        }
    }
}

/// Les anciens records stockent parfois le statut sous forme d'entier
#[derive(Deserialize)]
#[serde(untagged)]
enum RawVerificationStatus {
    Text(String),
    Number(u8),
}

impl TryFrom<RawVerificationStatus> for VerificationStatus {
    type Error = DomainError;
    fn try_from(raw: RawVerificationStatus) -> Result<Self, DomainError> {
        let code = match raw {
            RawVerificationStatus::Text(s) => s,
            RawVerificationStatus::Number(n) => n.to_string(),
        };

        match code.as_str() {
            "0" => Ok(Self::NotVerified),
            "1" => Ok(Self::VerificationInProgress),
            "2" => Ok(Self::Verified),
            other => Err(DomainError::Validation {
                field: "verified",
                reason: format!("Unknown verification status '{}'", other),
            }),
        }
    }
}

impl From<VerificationStatus> for String {
    fn from(status: VerificationStatus) -> Self {
        status.as_str().to_string()
    }
}
