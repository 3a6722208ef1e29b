#[cfg(test)]
mod tests {
    use crate::domain::value_objects::VerificationStatus;

    #[test]
    fn test_status_is_stored_as_string_code() {
        assert_eq!(serde_json::to_string(&VerificationStatus::NotVerified).unwrap(), "\"0\"");
        assert_eq!(serde_json::to_string(&VerificationStatus::Verified).unwrap(), "\"2\"");
    }

    #[test]
    fn test_legacy_numeric_codes_are_accepted() {
        let status: VerificationStatus = serde_json::from_str("1").unwrap();
        assert_eq!(status, VerificationStatus::VerificationInProgress);

        let status: VerificationStatus = serde_json::from_str("\"2\"").unwrap();
        assert_eq!(status, VerificationStatus::Verified);

        assert!(serde_json::from_str::<VerificationStatus>("\"7\"").is_err());
    }
}
