// crates/accounts/tests/repositories/update_user_it.rs

use std::sync::Arc;
use async_trait::async_trait;
use accounts::application::get_user::{GetUserQuery, GetUserUseCase};
use accounts::application::update_user::{UpdateUserCommand, UpdateUserUseCase};
use accounts::domain::models::UserData;
use accounts::domain::services::VerificationInitiator;
use accounts::domain::value_objects::{DataPolicy, PropertyName, UserId};
use accounts::infrastructure::postgres::repositories::PostgresAccountRepository;
use shared_kernel::clock::SystemClock;
use shared_kernel::errors::Result;
use shared_kernel::infrastructure::config::StaticConfigProvider;
use shared_kernel::infrastructure::postgres::dispatchers::PostgresOutboxDispatcher;

struct NoopVerifier;

#[async_trait]
impl VerificationInitiator for NoopVerifier {
    async fn initiate(&self, _user_id: &UserId, _old: &UserData, new: UserData) -> Result<UserData> {
        Ok(new)
    }
}

#[tokio::test]
async fn test_update_user_writes_record_and_outbox_event() {
    let (pool, _c) = crate::common::setup_postgres_test_db().await;
    let repo = Arc::new(PostgresAccountRepository::new(pool.clone()));
    let outbox = Arc::new(PostgresOutboxDispatcher::new(pool.clone()));

    let get_user = GetUserUseCase::new(repo.clone());
    let update_user = UpdateUserUseCase::new(
        repo.clone(),
        outbox.clone(),
        Arc::new(NoopVerifier),
        Arc::new(StaticConfigProvider::new().with("default_phone_region", "DE")),
        Arc::new(SystemClock),
    );

    let uid = UserId::try_new("it_user").unwrap();

    // 1. Premier accès : record par défaut, pas d'événement
    let mut data = get_user.execute(GetUserQuery { user_id: uid.clone() }).await.unwrap();
    assert!(outbox.find_pending(10).await.unwrap().is_empty());

    // 2. Modification du téléphone
    data.get_mut(&PropertyName::Phone).unwrap().value = "0711 / 25 24 28-90".into();
    let request = uuid::Uuid::now_v7();
    let saved = update_user
        .execute(UpdateUserCommand::new(uid.clone(), data, DataPolicy::Strict).with_correlation_id(request))
        .await
        .unwrap();
    assert_eq!(saved.value_of(&PropertyName::Phone), "+4971125242890");

    // 3. Relecture et outbox
    let reloaded = get_user.execute(GetUserQuery { user_id: uid.clone() }).await.unwrap();
    assert_eq!(reloaded, saved);

    let pending = outbox.find_pending(10).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].event_type, "AccountManager::userUpdated");
    assert_eq!(pending[0].aggregate_id, "it_user");
    assert_eq!(pending[0].correlation_id, Some(request));

    // 4. Même données : aucune écriture, aucun nouvel événement
    update_user
        .execute(UpdateUserCommand::new(uid, reloaded, DataPolicy::Strict))
        .await
        .unwrap();
    assert_eq!(outbox.find_pending(10).await.unwrap().len(), 1);
}
