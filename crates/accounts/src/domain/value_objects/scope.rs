// crates/accounts/src/domain/value_objects/scope.rs

use std::fmt;
use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Result};
use crate::domain::value_objects::{DataPolicy, PropertyName};

/// Niveau de visibilité d'une propriété, par exposition croissante.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Scope {
    Private,
    #[default]
    Local,
    Federated,
    Published,
}

/// Valeurs acceptées en entrée : scopes canoniques puis alias de visibilité hérités.
const SCOPE_ALIASES: [(&str, Scope); 7] = [
    (Scope::PRIVATE, Scope::Private),
    (Scope::LOCAL, Scope::Local),
    (Scope::FEDERATED, Scope::Federated),
    (Scope::PUBLISHED, Scope::Published),
    ("private", Scope::Local),
    ("contacts", Scope::Federated),
    ("public", Scope::Published),
];

impl Scope {
    pub const PRIVATE: &'static str = "v2-private";
    pub const LOCAL: &'static str = "v2-local";
    pub const FEDERATED: &'static str = "v2-federated";
    pub const PUBLISHED: &'static str = "v2-published";

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => Self::PRIVATE,
            Self::Local => Self::LOCAL,
            Self::Federated => Self::FEDERATED,
            Self::Published => Self::PUBLISHED,
        }
    }

    /// Résout une valeur canonique ou un alias hérité, sans règle métier
    pub fn resolve(raw: &str) -> Option<Scope> {
        SCOPE_ALIASES
            .iter()
            .find(|(alias, _)| *alias == raw)
            .map(|(_, scope)| *scope)
    }

    /// Scope effectif d'une propriété.
    /// Valeur inconnue, ou `Private` sur le nom / l'email : erreur en Strict, `Local` en Lenient.
    pub fn normalize(property: PropertyName, requested: &str, policy: DataPolicy) -> Result<Scope> {
        let resolved = Self::resolve(requested)
            .filter(|scope| *scope != Scope::Private || property.allows_private_scope())
            .ok_or_else(|| DomainError::InvalidScope {
                property: property.as_str(),
                scope: requested.to_string(),
            });

        policy.recover(resolved, |_| Scope::Local)
    }
}

// --- CONVERSIONS ---

impl TryFrom<String> for Scope {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::resolve(&value).ok_or_else(|| DomainError::Validation {
            field: "scope",
            reason: format!("Unknown scope '{}'", value),
        })
    }
}

impl From<Scope> for String {
    fn from(scope: Scope) -> Self {
        scope.as_str().to_string()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
