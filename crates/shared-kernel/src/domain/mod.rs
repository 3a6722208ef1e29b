pub mod events;
pub mod value_objects;
