mod property_data;
mod user_data;

pub use property_data::PropertyData;
pub use user_data::UserData;
