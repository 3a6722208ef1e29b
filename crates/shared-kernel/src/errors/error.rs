// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Argument invalide (ex: numéro de téléphone, site web)
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// Scope de visibilité inconnu ou interdit pour la propriété
    #[error("Invalid scope '{scope}' for property '{property}'")]
    InvalidScope {
        property: &'static str,
        scope: String,
    },

    #[error("{entity} not found with id '{id}'")]
    NotFound {
        entity: &'static str,
        id: String,
    },

    #[error("{entity} already exists with {field} = '{value}'")]
    AlreadyExists {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Erreur liée à l'infrastructure (DB, bus d'événements)
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),

    #[error("Internal domain error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Erreurs dues aux données fournies par l'appelant (jamais à l'infrastructure)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::InvalidScope { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Internal(format!("Serialization error: {}", err))
    }
}
