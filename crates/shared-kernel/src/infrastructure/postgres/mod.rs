// crates/shared-kernel/src/infrastructure/postgres/mod.rs

pub mod dispatchers;
pub mod factories;
pub mod mappers;
pub mod rows;
pub mod utils;
