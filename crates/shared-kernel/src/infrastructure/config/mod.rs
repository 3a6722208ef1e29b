mod env_config_provider;
mod static_config_provider;

pub use env_config_provider::EnvConfigProvider;
pub use static_config_provider::StaticConfigProvider;
