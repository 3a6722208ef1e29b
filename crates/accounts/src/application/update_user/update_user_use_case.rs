// crates/accounts/src/application/update_user/update_user_use_case.rs

use std::sync::Arc;
use async_trait::async_trait;
use shared_kernel::application::ports::{ConfigProvider, EventDispatcher};
use shared_kernel::application::CommandHandler;
use shared_kernel::clock::Clock;
use shared_kernel::errors::{DomainError, Result};

use crate::application::update_user::UpdateUserCommand;
use crate::application::DEFAULT_PHONE_REGION_KEY;
use crate::domain::events::AccountEvent;
use crate::domain::models::UserData;
use crate::domain::repositories::AccountRepository;
use crate::domain::services::{email_changed, update_verify_status, PropertySanitizer, VerificationInitiator};
use crate::domain::value_objects::{PhoneRegion, PropertyName, UserId, VerificationStatus};

enum Outcome {
    Unchanged(UserData),
    Written(UserData),
}

pub struct UpdateUserUseCase {
    account_repo: Arc<dyn AccountRepository>,
    dispatcher: Arc<dyn EventDispatcher>,
    verifier: Arc<dyn VerificationInitiator>,
    config: Arc<dyn ConfigProvider>,
    clock: Arc<dyn Clock>,
}

impl UpdateUserUseCase {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        dispatcher: Arc<dyn EventDispatcher>,
        verifier: Arc<dyn VerificationInitiator>,
        config: Arc<dyn ConfigProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { account_repo, dispatcher, verifier, config, clock }
    }

    pub async fn execute(&self, cmd: UpdateUserCommand) -> Result<UserData> {
        // 1. LECTURE DU RECORD EXISTANT
        let stored = self.account_repo.find_by_user_id(&cmd.user_id).await?;

        // 2. NORMALISATION (aucune écriture si la saisie est refusée)
        let region = self.config
            .get_string(DEFAULT_PHONE_REGION_KEY)
            .and_then(|raw| PhoneRegion::from_config(&raw));
        let data = PropertySanitizer::new(region).sanitize(cmd.data, cmd.policy)?;

        // 3. INSERTION / MISE À JOUR / RIEN
        let outcome = match stored {
            None => self.insert_or_merge(&cmd.user_id, data).await?,
            Some(old) => self.merge(&cmd.user_id, old.add_missing_default_values(), data).await?,
        };
        let data = match outcome {
            Outcome::Unchanged(data) => return Ok(data),
            Outcome::Written(data) => data,
        };

        // 4. NOTIFICATION (une seule fois par écriture)
        let event = AccountEvent::UserUpdated {
            user_id: cmd.user_id,
            properties: data.clone(),
            occurred_at: self.clock.now(),
            correlation_id: cmd.correlation_id,
        };
        self.dispatcher.dispatch(&event).await?;

        Ok(data)
    }

    async fn insert_or_merge(&self, user_id: &UserId, data: UserData) -> Result<Outcome> {
        match self.account_repo.insert(user_id, &data).await {
            Ok(()) => {
                tracing::info!("👤 Account record created for {}", user_id);
                Ok(Outcome::Written(data))
            }
            // Créé entre-temps par une autre requête : on repasse par la mise à jour
            Err(e) if e.is_already_exists() => {
                tracing::debug!("Account record for {} created concurrently, merging", user_id);
                let old = self.account_repo
                    .find_by_user_id(user_id)
                    .await?
                    .ok_or_else(|| DomainError::NotFound {
                        entity: "Account",
                        id: user_id.to_string(),
                    })?;
                self.merge(user_id, old.add_missing_default_values(), data).await
            }
            Err(e) => Err(e),
        }
    }

    async fn merge(&self, user_id: &UserId, old: UserData, data: UserData) -> Result<Outcome> {
        if data == old {
            tracing::debug!("Account data unchanged for {}, nothing to write", user_id);
            return Ok(Outcome::Unchanged(data));
        }

        // Record vide : écrasé tel quel, sans passe de vérification
        if old.is_empty() {
            self.account_repo.update(user_id, &data).await?;
            return Ok(Outcome::Written(data));
        }

        let data = self.check_email_verification(user_id, &old, data).await?;
        let data = update_verify_status(&old, data);
        self.account_repo.update(user_id, &data).await?;
        tracing::info!("👤 Account record updated for {}", user_id);
        Ok(Outcome::Written(data))
    }

    /// Un email modifié repasse en non vérifié, une nouvelle adresse lance la vérification.
    async fn check_email_verification(&self, user_id: &UserId, old: &UserData, mut new: UserData) -> Result<UserData> {
        if !email_changed(old, &new) {
            return Ok(new);
        }

        if let Some(email) = new.get_mut(&PropertyName::Email) {
            email.verified = Some(VerificationStatus::NotVerified);
        }

        if new.value_of(&PropertyName::Email).is_empty() {
            return Ok(new);
        }

        self.verifier.initiate(user_id, old, new).await
    }
}

#[async_trait]
impl CommandHandler<UpdateUserCommand> for UpdateUserUseCase {
    type Output = UserData;

    async fn handle(&self, command: UpdateUserCommand) -> Result<UserData> {
        self.execute(command).await
    }
}
