//! Short code derivation.
//!
//! A short code is a pure function of the URL: the first [`CODE_LENGTH`]
//! characters of the lowercase hex encoding of its SHA-256 digest. Identical
//! URLs always map to the same code, which makes re-shortening idempotent
//! without any coordination between callers.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest.
pub const CODE_LENGTH: usize = 8;

/// Derives the short code for a URL.
///
/// Computes SHA-256 over the UTF-8 bytes of `url` and keeps the first
/// [`CODE_LENGTH`] characters of the lowercase hex digest. The input is
/// hashed exactly as given: URLs that differ in case, trailing slashes, or
/// query strings produce unrelated codes.
///
/// This is a total function with no error conditions. Distinct URLs are not
/// guaranteed distinct codes; collision handling is a store-level policy.
///
/// # Examples
///
/// ```
/// use hexlink::utils::code_generator::generate_code;
///
/// assert_eq!(generate_code("https://example.com/a/b"), "ed1d4137");
/// ```
pub fn generate_code(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let mut code = hex::encode(digest);
    code.truncate(CODE_LENGTH);
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_code_is_deterministic() {
        let a = generate_code("https://example.com/a/b");
        let b = generate_code("https://example.com/a/b");
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_code_has_correct_length() {
        assert_eq!(generate_code("https://example.com").len(), CODE_LENGTH);
        assert_eq!(generate_code("x").len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_is_lowercase_hex() {
        let code = generate_code("https://example.com/Some/Path?q=1");
        assert!(
            code.chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_generate_code_matches_reference_digest() {
        // First 8 hex chars of sha256("https://example.com/a/b").
        assert_eq!(generate_code("https://example.com/a/b"), "ed1d4137");
        assert_eq!(generate_code("https://example.com"), "100680ad");
    }

    #[test]
    fn test_generate_code_applies_no_normalization() {
        // Trailing slash, scheme, and case each change the digest.
        assert_ne!(
            generate_code("https://example.com"),
            generate_code("https://example.com/")
        );
        assert_ne!(
            generate_code("https://example.com/a/b"),
            generate_code("http://example.com/a/b")
        );
        assert_ne!(
            generate_code("https://example.com/a/b"),
            generate_code("https://example.com/A/B")
        );
    }

    #[test]
    fn test_generate_code_accepts_any_non_empty_string() {
        // Total function: not restricted to well-formed URLs.
        assert_eq!(generate_code("not a url at all").len(), CODE_LENGTH);
        assert_eq!(generate_code("héllo wörld 🦀").len(), CODE_LENGTH);
    }
}
