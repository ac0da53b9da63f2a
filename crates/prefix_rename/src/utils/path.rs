use std::ffi::OsStr;

/// Compute the new base name for `name`, or `None` when it does not start with `prefix`
///
/// Only the first occurrence of `prefix` is replaced. An empty prefix matches
/// every name, so the replacement ends up in front of it. Names that are not
/// valid UTF-8 never match.
pub fn replace_prefix(name: &OsStr, prefix: &str, replacement: &str) -> Option<String> {
    let name = name.to_str()?;
    if !name.starts_with(prefix) {
        return None;
    }
    Some(name.replacen(prefix, replacement, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replace(name: &str, prefix: &str, replacement: &str) -> Option<String> {
        replace_prefix(OsStr::new(name), prefix, replacement)
    }

    #[test]
    fn test_replace_prefix_match() {
        assert_eq!(
            replace("test_prefix_1.txt", "test_prefix", "renamed"),
            Some("renamed_1.txt".to_string())
        );
    }

    #[test]
    fn test_only_first_occurrence_is_replaced() {
        assert_eq!(
            replace("ab_ab_ab.txt", "ab", "x"),
            Some("x_ab_ab.txt".to_string())
        );
    }

    #[test]
    fn test_name_equal_to_prefix() {
        assert_eq!(
            replace("report", "report", "summary"),
            Some("summary".to_string())
        );
    }

    #[test]
    fn test_non_matching_names() {
        // Prefix appearing later in the name is not a match
        assert_eq!(replace("unrelated_test_prefix.txt", "test_prefix", "x"), None);
        // Case-sensitive
        assert_eq!(replace("Test_prefix.txt", "test_prefix", "x"), None);
        // Prefix longer than the name
        assert_eq!(replace("test", "test_prefix", "x"), None);
    }

    #[test]
    fn test_empty_prefix_matches_everything() {
        assert_eq!(replace("notes.md", "", "new_"), Some("new_notes.md".to_string()));
        assert_eq!(replace("", "", ""), Some(String::new()));
    }

    #[test]
    fn test_non_ascii_names() {
        assert_eq!(
            replace("été_photo.jpg", "été_", "summer_"),
            Some("summer_photo.jpg".to_string())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_never_matches() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"prefix_\xff.txt");
        assert_eq!(replace_prefix(name, "prefix_", "x"), None);
        assert_eq!(replace_prefix(name, "", "x"), None);
    }
}
