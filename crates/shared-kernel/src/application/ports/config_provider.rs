// crates/shared-kernel/src/application/ports/config_provider.rs

/// Accès en lecture à la configuration système.
/// Une clé absente ou vide est traitée comme non configurée.
pub trait ConfigProvider: Send + Sync {
    fn get_string(&self, key: &str) -> Option<String>;
}
