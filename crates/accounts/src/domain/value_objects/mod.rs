mod data_policy;
mod phone_number;
mod phone_region;
mod property_name;
mod scope;
mod user_id;
mod verification_status;
mod website;

pub use data_policy::DataPolicy;
pub use phone_number::PhoneNumber;
pub use phone_region::PhoneRegion;
pub use property_name::PropertyName;
pub use scope::Scope;
pub use user_id::UserId;
pub use verification_status::VerificationStatus;
pub use website::Website;

#[cfg(test)]
mod tests;
