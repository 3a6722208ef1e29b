pub mod get_account;
pub mod get_user;
pub mod update_account;
pub mod update_user;

/// Clé de configuration de la région utilisée pour les numéros sans indicatif
pub const DEFAULT_PHONE_REGION_KEY: &str = "default_phone_region";
