use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use shared_kernel::errors::{DomainError, Result};
use crate::domain::models::UserData;
use crate::domain::services::VerificationInitiator;
use crate::domain::value_objects::{PropertyName, UserId, VerificationStatus};

pub struct VerificationInitiatorStub {
    /// Adresses pour lesquelles une vérification a été lancée
    pub initiated: Arc<Mutex<Vec<(UserId, String)>>>,
    /// Statut posé sur l'email avant de rendre la main
    pub status_to_apply: VerificationStatus,
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
}

impl VerificationInitiatorStub {
    pub fn new() -> Self {
        Self {
            initiated: Arc::new(Mutex::new(Vec::new())),
            status_to_apply: VerificationStatus::VerificationInProgress,
            error_to_return: Arc::new(Mutex::new(None)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.initiated.lock().unwrap().len()
    }
}

#[async_trait]
impl VerificationInitiator for VerificationInitiatorStub {
    async fn initiate(&self, user_id: &UserId, _old: &UserData, mut new: UserData) -> Result<UserData> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }

        let email = new.value_of(&PropertyName::Email).to_string();
        self.initiated.lock().unwrap().push((user_id.clone(), email));

        if let Some(data) = new.get_mut(&PropertyName::Email) {
            data.verified = Some(self.status_to_apply);
        }
        Ok(new)
    }
}
