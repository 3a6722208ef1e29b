// crates/accounts/src/domain/services/verification_initiator.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;
use crate::domain::models::UserData;
use crate::domain::value_objects::UserId;

/// Démarre la vérification d'une nouvelle adresse email.
/// Annule les jetons en cours, en émet un nouveau et retourne le jeu de propriétés à persister.
#[async_trait]
pub trait VerificationInitiator: Send + Sync {
    async fn initiate(&self, user_id: &UserId, old: &UserData, new: UserData) -> Result<UserData>;
}
