use super::*;

#[test]
fn validate_profile_name_trims_surrounding_whitespace() {
    assert_eq!(
        validate_profile_name("  FlowMaster Flex  "),
        Some("FlowMaster Flex".to_owned())
    );
}

#[test]
fn validate_profile_name_rejects_empty_input() {
    assert_eq!(validate_profile_name(""), None);
    assert_eq!(validate_profile_name("   "), None);
    assert_eq!(validate_profile_name("\t\n"), None);
}

#[test]
fn validate_profile_name_keeps_interior_whitespace() {
    assert_eq!(validate_profile_name("MC  Double  Space"), Some("MC  Double  Space".to_owned()));
}
