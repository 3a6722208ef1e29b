use crate::errors::DomainError;

/// RESULT DU DOMAINE
/// Utilisé par : Value Objects, Use Cases, Repositories (Ports).
pub type Result<T> = std::result::Result<T, DomainError>;

/// Helper pour les erreurs de type "Internal" rapides
pub fn internal_err(msg: impl Into<String>) -> DomainError {
    DomainError::Internal(msg.into())
}
