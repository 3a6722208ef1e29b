// crates/accounts/src/domain/value_objects/property_name.rs

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Result};
use crate::domain::value_objects::Scope;

/// Propriétés de profil connues. L'ordre de déclaration fixe l'ordre de sérialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyName {
    DisplayName,
    Address,
    Website,
    Email,
    Avatar,
    Phone,
    Twitter,
}

impl PropertyName {
    pub const ALL: [PropertyName; 7] = [
        Self::DisplayName,
        Self::Address,
        Self::Website,
        Self::Email,
        Self::Avatar,
        Self::Phone,
        Self::Twitter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DisplayName => "displayname",
            Self::Address => "address",
            Self::Website => "website",
            Self::Email => "email",
            Self::Avatar => "avatar",
            Self::Phone => "phone",
            Self::Twitter => "twitter",
        }
    }

    /// Scope appliqué au record par défaut
    pub fn default_scope(&self) -> Scope {
        match self {
            Self::DisplayName | Self::Email | Self::Avatar => Scope::Federated,
            Self::Address | Self::Website | Self::Phone | Self::Twitter => Scope::Local,
        }
    }

    /// Le nom et l'email restent toujours visibles au moins localement
    pub fn allows_private_scope(&self) -> bool {
        !matches!(self, Self::DisplayName | Self::Email)
    }
}

impl FromStr for PropertyName {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| DomainError::Validation {
                field: "property",
                reason: format!("Unknown account property '{}'", s),
            })
    }
}

impl fmt::Display for PropertyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
