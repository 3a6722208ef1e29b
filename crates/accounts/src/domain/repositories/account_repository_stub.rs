use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use shared_kernel::errors::{DomainError, Result};
use crate::domain::models::UserData;
use crate::domain::repositories::AccountRepository;
use crate::domain::value_objects::UserId;

#[derive(Default)]
pub struct AccountRepositoryStub {
    /// Stockage en mémoire : UserId -> UserData
    pub records: Arc<Mutex<HashMap<UserId, UserData>>>,
    /// Permet de simuler une erreur spécifique retournée par n'importe quelle méthode
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
    pub insert_calls: Arc<Mutex<usize>>,
    pub update_calls: Arc<Mutex<usize>>,
    /// Lectures à venir qui ne voient pas le record (création concurrente)
    pub missed_reads: Arc<Mutex<usize>>,
}

impl AccountRepositoryStub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Helper pour injecter un record manuellement avant un test
    pub fn add_record(&self, user_id: UserId, data: UserData) {
        self.records.lock().unwrap().insert(user_id, data);
    }

    pub fn stored(&self, user_id: &UserId) -> Option<UserData> {
        self.records.lock().unwrap().get(user_id).cloned()
    }

    /// Nombre total d'écritures (insert + update)
    pub fn write_count(&self) -> usize {
        *self.insert_calls.lock().unwrap() + *self.update_calls.lock().unwrap()
    }

    fn check_error(&self) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(())
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryStub {
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Option<UserData>> {
        self.check_error()?;

        let mut missed = self.missed_reads.lock().unwrap();
        if *missed > 0 {
            *missed -= 1;
            return Ok(None);
        }
        Ok(self.stored(user_id))
    }

    async fn insert(&self, user_id: &UserId, data: &UserData) -> Result<()> {
        self.check_error()?;
        *self.insert_calls.lock().unwrap() += 1;

        let mut records = self.records.lock().unwrap();
        if records.contains_key(user_id) {
            return Err(DomainError::AlreadyExists {
                entity: "Account",
                field: "uid",
                value: user_id.to_string(),
            });
        }
        records.insert(user_id.clone(), data.clone());
        Ok(())
    }

    async fn update(&self, user_id: &UserId, data: &UserData) -> Result<()> {
        self.check_error()?;
        *self.update_calls.lock().unwrap() += 1;

        match self.records.lock().unwrap().get_mut(user_id) {
            Some(record) => {
                *record = data.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound {
                entity: "Account",
                id: user_id.to_string(),
            }),
        }
    }
}
