// crates/shared-kernel/src/infrastructure/config/static_config_provider.rs

use std::collections::HashMap;
use crate::application::ports::ConfigProvider;

/// Configuration en mémoire (tests, embarqué)
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    values: HashMap<String, String>,
}

impl StaticConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .filter(|v| !v.trim().is_empty())
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_treated_as_unset() {
        let config = StaticConfigProvider::new()
            .with("default_phone_region", "DE")
            .with("blank", "  ");

        assert_eq!(config.get_string("default_phone_region").as_deref(), Some("DE"));
        assert_eq!(config.get_string("blank"), None);
        assert_eq!(config.get_string("missing"), None);
    }
}
