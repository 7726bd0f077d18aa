//! Canonical-key derivation for duplicate comparison.

/// Collapse whitespace runs to single spaces, trim, and lowercase.
///
/// The result is used only as a comparison key and is never shown to the
/// user. No Unicode case folding or diacritic stripping is applied.
pub fn normalize(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_and_lowercases() {
        assert_eq!(normalize("  Hello   World  "), "hello world");
        assert_eq!(normalize("Hello\tWorld"), "hello world");
        assert_eq!(normalize("Hello\n World"), "hello world");
    }

    #[test]
    fn test_idempotent() {
        for s in ["  Hello   World  ", "already normal", "", "   ", "MiXeD Case"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_case_and_run_length_variants_collapse() {
        assert_eq!(normalize("HELLO world"), normalize("hello WORLD"));
        assert_eq!(normalize("a  b"), normalize("a b"));
        assert_eq!(normalize("a \t b"), normalize("A B"));
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t  "), "");
    }
}
