// crates/accounts/tests/repositories/account_repository_it.rs

use accounts::domain::builders::UserDataBuilder;
use accounts::domain::repositories::AccountRepository;
use accounts::domain::value_objects::{PropertyName, Scope, UserId, VerificationStatus};
use accounts::infrastructure::postgres::repositories::PostgresAccountRepository;
use shared_kernel::errors::DomainError;

#[tokio::test]
async fn test_account_record_lifecycle() {
    let (pool, _c) = crate::common::setup_postgres_test_db().await;
    let repo = PostgresAccountRepository::new(pool);
    let uid = UserId::try_new("uid").unwrap();

    // 1. Aucun record au départ
    assert_eq!(repo.find_by_user_id(&uid).await.unwrap(), None);

    // 2. Insertion
    let data = UserDataBuilder::defaults();
    repo.insert(&uid, &data).await.unwrap();
    assert_eq!(repo.find_by_user_id(&uid).await.unwrap(), Some(data));

    // 3. Remplacement complet
    let updated = UserDataBuilder::new()
        .with_property(PropertyName::Twitter, "@uid", Scope::Published)
        .with_verified(PropertyName::Twitter, VerificationStatus::Verified)
        .build();
    repo.update(&uid, &updated).await.unwrap();
    assert_eq!(repo.find_by_user_id(&uid).await.unwrap(), Some(updated));
}

#[tokio::test]
async fn test_insert_twice_is_rejected() {
    let (pool, _c) = crate::common::setup_postgres_test_db().await;
    let repo = PostgresAccountRepository::new(pool);
    let uid = UserId::try_new("dup").unwrap();

    repo.insert(&uid, &UserDataBuilder::defaults()).await.unwrap();
    let result = repo.insert(&uid, &UserDataBuilder::defaults()).await;

    assert!(matches!(result, Err(DomainError::AlreadyExists { field: "uid", .. })));
}

#[tokio::test]
async fn test_update_unknown_user_is_not_found() {
    let (pool, _c) = crate::common::setup_postgres_test_db().await;
    let repo = PostgresAccountRepository::new(pool);

    let result = repo
        .update(&UserId::try_new("ghost").unwrap(), &UserDataBuilder::defaults())
        .await;

    assert!(result.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_legacy_json_record_is_readable() {
    let (pool, _c) = crate::common::setup_postgres_test_db().await;

    // Record écrit par une ancienne version : alias de visibilité, statut absent ou numérique
    sqlx::query("INSERT INTO accounts (uid, data) VALUES ($1, $2::jsonb)")
        .bind("legacy")
        .bind(r#"{"phone":{"value":"+491601231212","scope":"contacts"},"website":{"value":"","scope":"public","verified":2}}"#)
        .execute(&pool)
        .await
        .unwrap();

    let repo = PostgresAccountRepository::new(pool);
    let data = repo
        .find_by_user_id(&UserId::try_new("legacy").unwrap())
        .await
        .unwrap()
        .expect("Should find legacy record");

    assert_eq!(data.get(&PropertyName::Phone).unwrap().scope, "contacts");
    assert_eq!(data.get(&PropertyName::Phone).unwrap().verified, None);
    assert_eq!(data.get(&PropertyName::Website).unwrap().verified, Some(VerificationStatus::Verified));
}
