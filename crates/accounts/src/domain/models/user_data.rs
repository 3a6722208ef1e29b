// crates/accounts/src/domain/models/user_data.rs

use std::collections::btree_map::{self, BTreeMap};
use serde::{Deserialize, Serialize};
use crate::domain::models::PropertyData;
use crate::domain::value_objects::{PropertyName, VerificationStatus};

/// Ensemble des propriétés d'un utilisateur, tel que stocké.
///
/// L'ordre des clés est celui de `PropertyName`, l'égalité est structurelle :
/// deux records portant les mêmes paires sont égaux quel que soit l'ordre de saisie.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserData(BTreeMap<PropertyName, PropertyData>);

impl UserData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &PropertyName) -> Option<&PropertyData> {
        self.0.get(name)
    }

    pub fn get_mut(&mut self, name: &PropertyName) -> Option<&mut PropertyData> {
        self.0.get_mut(name)
    }

    pub fn insert(&mut self, name: PropertyName, data: PropertyData) -> Option<PropertyData> {
        self.0.insert(name, data)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, PropertyName, PropertyData> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> btree_map::IterMut<'_, PropertyName, PropertyData> {
        self.0.iter_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Valeur d'une propriété, "" si elle est absente
    pub fn value_of(&self, name: &PropertyName) -> &str {
        self.0.get(name).map_or("", |p| p.value.as_str())
    }

    /// Complète les statuts de vérification absents des anciens records.
    /// N'ajoute jamais de propriété.
    pub fn add_missing_default_values(mut self) -> Self {
        for data in self.0.values_mut() {
            data.verified.get_or_insert(VerificationStatus::NotVerified);
        }
        self
    }
}

impl FromIterator<(PropertyName, PropertyData)> for UserData {
    fn from_iter<I: IntoIterator<Item = (PropertyName, PropertyData)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for UserData {
    type Item = (PropertyName, PropertyData);
    type IntoIter = btree_map::IntoIter<PropertyName, PropertyData>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a UserData {
    type Item = (&'a PropertyName, &'a PropertyData);
    type IntoIter = btree_map::Iter<'a, PropertyName, PropertyData>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
