// crates/accounts/src/domain/repositories/account_repository.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;
use crate::domain::models::UserData;
use crate::domain::value_objects::UserId;

/// Stockage des records de propriétés, un record par utilisateur.
/// Chaque écriture est atomique sur le record, le dernier écrivain l'emporte.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// `None` si l'utilisateur n'a encore aucun record.
    /// Un record existant peut être vide.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<UserData>>;

    /// Création du record. Échoue avec `AlreadyExists` si un record existe déjà.
    async fn insert(&self, user_id: &UserId, data: &UserData) -> Result<()>;

    /// Remplacement complet du record. Échoue avec `NotFound` si aucun record n'existe.
    async fn update(&self, user_id: &UserId, data: &UserData) -> Result<()>;
}
