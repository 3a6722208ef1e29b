mod property_sanitizer;
mod verification_initiator;
mod verification_policy;

pub use property_sanitizer::PropertySanitizer;
pub use verification_initiator::VerificationInitiator;
pub use verification_policy::{email_changed, update_verify_status};

#[cfg(test)]
mod verification_initiator_stub;

#[cfg(test)]
pub use verification_initiator_stub::VerificationInitiatorStub;
