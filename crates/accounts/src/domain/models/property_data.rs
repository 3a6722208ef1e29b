// crates/accounts/src/domain/models/property_data.rs

use serde::{Deserialize, Serialize};
use crate::domain::value_objects::{Scope, VerificationStatus};

/// Forme stockée d'une propriété de profil.
/// `scope` reste une chaîne : les anciens records portent encore des alias hérités.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PropertyData {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub scope: String,
    /// Absent dans les records antérieurs au suivi de vérification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<VerificationStatus>,
}

impl PropertyData {
    pub fn new(value: impl Into<String>, scope: Scope) -> Self {
        Self {
            value: value.into(),
            scope: scope.as_str().to_string(),
            verified: None,
        }
    }

    /// Conserve la chaîne de scope telle quelle (alias hérité, valeur inconnue...)
    pub fn with_raw_scope(value: impl Into<String>, scope: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            scope: scope.into(),
            verified: None,
        }
    }

    pub fn verified(mut self, status: VerificationStatus) -> Self {
        self.verified = Some(status);
        self
    }
}
