// crates/accounts/src/domain/value_objects/data_policy.rs

use shared_kernel::errors::{DomainError, Result};

/// Conduite à tenir face à une donnée invalide (scope, téléphone, site web).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataPolicy {
    /// Toute donnée invalide annule l'opération entière
    #[default]
    Strict,
    /// La donnée invalide est remplacée par une valeur de repli
    Lenient,
}

impl DataPolicy {
    /// Strict : propage l'erreur. Lenient : journalise et retourne le repli.
    pub fn recover<T>(self, result: Result<T>, fallback: impl FnOnce(&DomainError) -> T) -> Result<T> {
        match (result, self) {
            (Ok(value), _) => Ok(value),
            (Err(e), Self::Strict) => Err(e),
            (Err(e), Self::Lenient) => {
                tracing::warn!("⚠️ Invalid account data replaced by fallback: {}", e);
                Ok(fallback(&e))
            }
        }
    }
}
