pub mod builders;
pub mod entities;
pub mod events;
pub mod models;
pub mod repositories;
pub mod services;
pub mod value_objects;
