/// Converts a raw attribute value to its canonical token, or `None` if the
/// value is absent or empty after trimming. The only transformation applied
/// to attribute values before storage or key construction — callers must
/// never index or match against raw values.
pub fn normalize(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(normalize(Some("  Alice  ")), Some("alice".to_string()));
        assert_eq!(normalize(Some("SMITH")), Some("smith".to_string()));
    }

    #[test]
    fn empty_and_whitespace_are_absent() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some("")), None);
        assert_eq!(normalize(Some("   ")), None);
    }

    #[test]
    fn unicode_whitespace_and_case_folding() {
        assert_eq!(normalize(Some("\u{00A0}Ana\u{00A0}")), Some("ana".to_string()));
        assert_eq!(normalize(Some("İstanbul")), Some("i̇stanbul".to_string()));
    }
}
