use super::*;

#[test]
fn dom_error_names_the_operation() {
    let err = SiteError::Dom { op: "setAttribute", message: "InvalidCharacterError".into() };
    assert_eq!(err.to_string(), "DOM operation `setAttribute` failed: InvalidCharacterError");
}

#[test]
fn config_error_wraps_serde_json() {
    let parse = serde_json::from_str::<serde_json::Value>("{").map(|_| ());
    let Err(source) = parse else {
        panic!("expected a parse failure");
    };
    let err = SiteError::from(source);
    assert!(err.to_string().starts_with("invalid site configuration:"));
}

#[test]
fn report_passes_values_through() {
    assert_eq!(report::<u8>(Ok(7)), Some(7));
}

#[test]
fn report_swallows_errors() {
    assert_eq!(report::<u8>(Err(SiteError::NoBody)), None);
}
