// crates/accounts/src/domain/entities/account.rs

use shared_kernel::errors::Result;
use crate::domain::entities::AccountProperty;
use crate::domain::models::{PropertyData, UserData};
use crate::domain::value_objects::{DataPolicy, PropertyName, Scope, UserId, VerificationStatus};

/// Vue typée des propriétés d'un utilisateur.
///
/// Les propriétés gardent leur ordre d'insertion, chaque nom apparaît au plus une fois.
/// Le nom et l'email ne sont jamais en scope privé.
#[derive(Debug, Clone)]
pub struct Account {
    user_id: UserId,
    properties: Vec<AccountProperty>,
}

impl Account {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id, properties: Vec::new() }
    }

    /// Reconstruit un compte depuis un record stocké.
    /// Les scopes inconnus ou interdits retombent sur `Local`, les statuts absents sur `NotVerified`.
    pub fn from_user_data(user_id: UserId, data: &UserData) -> Result<Self> {
        let mut account = Self::new(user_id);

        for (name, property) in data {
            let scope = Scope::normalize(*name, &property.scope, DataPolicy::Lenient)?;
            account.set_property(
                *name,
                property.value.clone(),
                scope,
                property.verified.unwrap_or_default(),
            )?;
        }

        Ok(account)
    }

    pub fn to_user_data(&self) -> UserData {
        self.properties
            .iter()
            .map(|p| {
                let data = PropertyData::new(p.value(), p.scope()).verified(p.verified());
                (p.name(), data)
            })
            .collect()
    }

    // ==========================================
    // GESTION DES PROPRIÉTÉS
    // ==========================================

    /// Ajoute ou remplace une propriété. Un remplacement conserve la position d'origine.
    pub fn set_property(
        &mut self,
        name: PropertyName,
        value: impl Into<String>,
        scope: Scope,
        verified: VerificationStatus,
    ) -> Result<()> {
        let property = AccountProperty::new(name, value, scope)?.with_verified(verified);

        match self.properties.iter_mut().find(|p| p.name() == name) {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }

        Ok(())
    }

    pub fn property(&self, name: PropertyName) -> Option<&AccountProperty> {
        self.properties.iter().find(|p| p.name() == name)
    }

    pub fn properties(&self) -> &[AccountProperty] {
        &self.properties
    }

    pub fn filter_by_scope(&self, scope: Scope) -> Vec<&AccountProperty> {
        self.properties.iter().filter(|p| p.scope() == scope).collect()
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

// Égalité structurelle : l'ordre des propriétés n'entre pas en compte
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
            && self.properties.len() == other.properties.len()
            && self.properties.iter().all(|p| other.property(p.name()) == Some(p))
    }
}

impl Eq for Account {}
