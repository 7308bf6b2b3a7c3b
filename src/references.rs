//! Classification of asset references that cannot be resolved locally.

use regex::Regex;

fn external_reference_patterns() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^https?://").expect("invalid http(s) regex"),
                Regex::new(r"^//").expect("invalid protocol-relative regex"),
                Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
            ]
        })
        .as_slice()
}

/// Determine whether an asset reference points outside the local asset root.
///
/// External URLs and data URIs cannot be resolved against the filesystem, so
/// the tag helpers pass them through verbatim without a mount prefix or a
/// cache-busting parameter.
pub fn is_external_reference(value: &str) -> bool {
    external_reference_patterns()
        .iter()
        .any(|pattern| pattern.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::is_external_reference;

    #[test]
    fn recognises_http_urls() {
        assert!(is_external_reference("https://example.com/app.css"));
        assert!(is_external_reference("HTTP://example.com/app.css"));
    }

    #[test]
    fn recognises_protocol_relative_urls() {
        assert!(is_external_reference("//cdn.example.com/app.js"));
    }

    #[test]
    fn recognises_data_uris() {
        assert!(is_external_reference("data:image/png;base64,abc"));
    }

    #[test]
    fn keeps_local_paths() {
        assert!(!is_external_reference("/images/photo.png"));
        assert!(!is_external_reference("images/photo.png"));
    }
}
