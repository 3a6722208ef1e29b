// crates/shared-kernel/src/infrastructure/config/env_config_provider.rs

use crate::application::ports::ConfigProvider;

/// Lit la configuration dans les variables d'environnement.
/// La clé `default_phone_region` avec le préfixe `ACCOUNTS` devient `ACCOUNTS_DEFAULT_PHONE_REGION`.
#[derive(Debug, Clone)]
pub struct EnvConfigProvider {
    prefix: String,
}

impl EnvConfigProvider {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    pub fn env_key(&self, key: &str) -> String {
        let key = key.to_uppercase().replace(['.', '-'], "_");
        if self.prefix.is_empty() {
            key
        } else {
            format!("{}_{}", self.prefix.to_uppercase(), key)
        }
    }
}

impl ConfigProvider for EnvConfigProvider {
    fn get_string(&self, key: &str) -> Option<String> {
        let var = self.env_key(key);
        match std::env::var(&var) {
            Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
            Ok(_) => None,
            Err(std::env::VarError::NotPresent) => None,
            Err(e) => {
                tracing::warn!("⚠️ Ignoring unreadable config variable {}: {}", var, e);
                None
            }
        }
    }
}
