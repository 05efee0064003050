use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScrollscapeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ScrollscapeError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        ScrollscapeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn path_error_reports_offset() {
    let err = ScrollscapeError::path(7, "unexpected character 'x'");
    assert_eq!(
        err.to_string(),
        "path error at byte 7: unexpected character 'x'"
    );
}

#[test]
fn json_errors_map_to_serde() {
    let err: ScrollscapeError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, ScrollscapeError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ScrollscapeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
