mod value_object;

pub use value_object::ValueObject;
