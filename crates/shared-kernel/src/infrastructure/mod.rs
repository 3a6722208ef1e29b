// crates/shared-kernel/src/infrastructure/mod.rs

pub mod config;

#[cfg(feature = "postgres")]
pub mod postgres;
