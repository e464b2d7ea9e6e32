//! Identifier shape checks shared by type names, paths and member names.

/// Ensure a single identifier segment is non-empty, ASCII, and starts with
/// a letter or underscore.
pub fn validate_segment(segment: &str) -> Result<(), String> {
    if segment.is_empty() {
        return Err("segment is empty".to_string());
    }
    if !segment.is_ascii() {
        return Err(format!("segment '{segment}' must be ASCII"));
    }

    let mut chars = segment.chars();
    if let Some(first) = chars.next()
        && !(first.is_ascii_alphabetic() || first == '_')
    {
        return Err(format!(
            "segment '{segment}' must start with a letter or underscore"
        ));
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(format!("segment '{segment}' contains invalid character '{bad}'"));
    }

    Ok(())
}

/// Validate a `::`-separated path, segment by segment.
pub fn validate_path(path: &str) -> Result<(), String> {
    if path.is_empty() {
        return Err("path is empty".to_string());
    }

    for segment in path.split("::") {
        validate_segment(segment).map_err(|e| format!("in '{path}': {e}"))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_malformed_segments() {
        assert!(validate_segment("").is_err(), "empty segments should fail");
        assert!(validate_segment("1note").is_err(), "leading digit should fail");
        assert!(validate_segment("no-te").is_err(), "dash should fail");
        assert!(validate_segment("nöte").is_err(), "non-ascii should fail");
    }

    #[test]
    fn long_segments_are_accepted() {
        let long = "N".repeat(200);
        assert!(validate_segment(&long).is_ok());
        assert!(validate_path(&format!("app::{long}Cloneable")).is_ok());
    }

    #[test]
    fn accepts_paths_of_valid_segments() {
        assert!(validate_path("app::domain::Note").is_ok());
        assert!(validate_path("_private::Note2").is_ok());
    }

    #[test]
    fn rejects_paths_with_empty_segments() {
        assert!(validate_path("app::::Note").is_err());
        assert!(validate_path("::Note").is_err());
        assert!(validate_path("app::").is_err());
    }
}
