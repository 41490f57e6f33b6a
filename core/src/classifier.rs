use crate::model::InputType;

/// Tag raw input as a URL or plain text.
///
/// Purely a prefix check after trimming. Anything that does not start with
/// `http://` or `https://` is treated as text, even if it looks like a
/// malformed URL; the engine never validates well-formedness.
pub fn classify(raw_input: &str) -> InputType {
    let trimmed = raw_input.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        InputType::Url
    } else {
        InputType::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_plain_text() {
        assert_eq!(classify("Quantum entanglement"), InputType::Text);
        assert_eq!(classify("how do magnets work"), InputType::Text);
    }

    #[test]
    fn test_classify_http_and_https() {
        assert_eq!(classify("http://example.com"), InputType::Url);
        assert_eq!(classify("https://example.com/article"), InputType::Url);
    }

    #[test]
    fn test_classify_trims_whitespace() {
        assert_eq!(classify("   https://example.com  "), InputType::Url);
        assert_eq!(classify("\nhttp://example.com"), InputType::Url);
    }

    #[test]
    fn test_classify_is_permissive_about_url_lookalikes() {
        // No well-formedness checks: these all fall through to text.
        assert_eq!(classify("htp://typo.example"), InputType::Text);
        assert_eq!(classify("www.example.com"), InputType::Text);
        assert_eq!(classify("ftp://example.com"), InputType::Text);
        assert_eq!(classify("example.com/https://"), InputType::Text);
    }

    #[test]
    fn test_classify_empty_is_text() {
        assert_eq!(classify(""), InputType::Text);
        assert_eq!(classify("   "), InputType::Text);
    }
}
