use super::*;

#[test]
fn display_includes_variant_context() {
    assert_eq!(
        FolioError::Storage("quota exceeded".into()).to_string(),
        "preference store error: quota exceeded"
    );
    assert_eq!(FolioError::Config("threshold".into()).to_string(), "invalid config: threshold");
}

#[test]
fn unknown_preference_values_are_quoted() {
    assert_eq!(FolioError::UnknownTheme("blue".into()).to_string(), "unknown theme: \"blue\"");
    assert_eq!(FolioError::UnknownLanguage("fr".into()).to_string(), "unknown language: \"fr\"");
}
