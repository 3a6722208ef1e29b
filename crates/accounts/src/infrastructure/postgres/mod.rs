pub mod bootstrap;
pub mod repositories;
pub mod rows;
