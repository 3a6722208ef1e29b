#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use shared_kernel::application::ports::EventDispatcherStub;
    use shared_kernel::clock::SystemClock;
    use shared_kernel::infrastructure::config::StaticConfigProvider;

    use crate::application::update_account::{UpdateAccountCommand, UpdateAccountUseCase};
    use crate::application::update_user::UpdateUserUseCase;
    use crate::domain::builders::UserDataBuilder;
    use crate::domain::entities::Account;
    use crate::domain::repositories::AccountRepositoryStub;
    use crate::domain::services::VerificationInitiatorStub;
    use crate::domain::value_objects::{DataPolicy, PropertyName, Scope, UserId, VerificationStatus};

    fn setup() -> (UpdateAccountUseCase, Arc<AccountRepositoryStub>, Arc<EventDispatcherStub>) {
        let repo = Arc::new(AccountRepositoryStub::new());
        let dispatcher = Arc::new(EventDispatcherStub::new());
        let update_user = UpdateUserUseCase::new(
            repo.clone(),
            dispatcher.clone(),
            Arc::new(VerificationInitiatorStub::new()),
            Arc::new(StaticConfigProvider::new().with("default_phone_region", "DE")),
            Arc::new(SystemClock),
        );
        (UpdateAccountUseCase::new(Arc::new(update_user)), repo, dispatcher)
    }

    #[tokio::test]
    async fn test_account_is_persisted_in_canonical_form() {
        let (use_case, repo, dispatcher) = setup();
        let user_id = UserId::try_new("alice").unwrap();

        let mut account = Account::new(user_id.clone());
        account.set_property(PropertyName::Phone, "0711 / 25 24 28-90", Scope::Private, VerificationStatus::NotVerified).unwrap();
        account.set_property(PropertyName::DisplayName, "Alice", Scope::Published, VerificationStatus::NotVerified).unwrap();

        let saved = use_case
            .execute(UpdateAccountCommand::new(account, DataPolicy::Strict))
            .await
            .unwrap();

        assert_eq!(saved.property(PropertyName::Phone).unwrap().value(), "+4971125242890");
        assert_eq!(saved.property(PropertyName::Phone).unwrap().scope(), Scope::Private);
        assert_eq!(repo.stored(&user_id).unwrap().get(&PropertyName::Phone).unwrap().scope, "v2-private");
        assert_eq!(dispatcher.dispatched_count(), 1);
    }

    #[tokio::test]
    async fn test_unchanged_account_is_not_written_again() {
        let (use_case, repo, dispatcher) = setup();
        let user_id = UserId::try_new("alice").unwrap();
        repo.add_record(
            user_id.clone(),
            UserDataBuilder::new()
                .with_property(PropertyName::Twitter, "@alice", Scope::Federated)
                .with_verified(PropertyName::Twitter, VerificationStatus::Verified)
                .build(),
        );

        let mut account = Account::new(user_id);
        account.set_property(PropertyName::Twitter, "@alice", Scope::Federated, VerificationStatus::Verified).unwrap();

        use_case
            .execute(UpdateAccountCommand::new(account, DataPolicy::Strict))
            .await
            .unwrap();

        assert_eq!(repo.write_count(), 0);
        assert_eq!(dispatcher.dispatched_count(), 0);
    }
}
