mod user_data_builder;

pub use user_data_builder::UserDataBuilder;
