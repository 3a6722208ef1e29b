// crates/accounts/src/domain/entities/account_property.rs

use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Result};
use crate::domain::value_objects::{PropertyName, Scope, VerificationStatus};

/// Propriété typée d'un compte : le scope est toujours canonique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountProperty {
    name: PropertyName,
    value: String,
    scope: Scope,
    verified: VerificationStatus,
}

impl AccountProperty {
    pub fn new(name: PropertyName, value: impl Into<String>, scope: Scope) -> Result<Self> {
        if scope == Scope::Private && !name.allows_private_scope() {
            return Err(DomainError::InvalidScope {
                property: name.as_str(),
                scope: scope.to_string(),
            });
        }

        Ok(Self {
            name,
            value: value.into(),
            scope,
            verified: VerificationStatus::NotVerified,
        })
    }

    pub fn with_verified(mut self, status: VerificationStatus) -> Self {
        self.verified = status;
        self
    }

    // --- GETTERS ---

    pub fn name(&self) -> PropertyName {
        self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn verified(&self) -> VerificationStatus {
        self.verified
    }
}
