use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RevealError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(RevealError::config("x").to_string().contains("config error:"));
    assert!(RevealError::render("x").to_string().contains("render error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RevealError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_config() {
    let err: RevealError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, RevealError::Config(_)));
}
