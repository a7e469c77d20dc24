//! Utility functions and helpers

use chrono::Utc;

/// Serde helpers for u64 values the node encodes as decimal strings
pub mod u64_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Str(String),
        Num(u64),
    }

    impl Repr {
        fn into_u64<E: de::Error>(self) -> Result<u64, E> {
            match self {
                Repr::Str(s) => s.parse().map_err(de::Error::custom),
                Repr::Num(n) => Ok(n),
            }
        }
    }

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        Repr::deserialize(deserializer)?.into_u64()
    }

    pub mod option {
        use super::Repr;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            value: &Option<u64>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(v) => serializer.collect_str(v),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<u64>, D::Error> {
            Option::<Repr>::deserialize(deserializer)?
                .map(Repr::into_u64)
                .transpose()
        }
    }
}

/// Generate a correlation ID for request tracing
pub fn generate_correlation_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Unix timestamp `seconds` from now
pub fn expiration_from_now(seconds: u64) -> u64 {
    let now = Utc::now().timestamp().max(0) as u64;
    now.saturating_add(seconds)
}

/// Check a Move identifier: a letter, or `_` followed by at least one more
/// character, then letters, digits and underscores
pub fn is_valid_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let valid_tail = |c: char| c.is_ascii_alphanumeric() || c == '_';
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => chars.all(valid_tail),
        Some('_') => s.len() > 1 && chars.all(valid_tail),
        _ => false,
    }
}

/// Sanitize string for logging (remove sensitive data)
pub fn sanitize_for_logging(s: &str) -> String {
    let char_count = s.chars().count();
    if char_count <= 10 {
        return s.to_string();
    }

    // Show first 6 and last 4 characters for hashes/addresses
    if s.starts_with("0x") && char_count > 20 {
        let head = byte_offset(s, 6);
        let tail = byte_offset(s, char_count - 4);
        format!("{}...{}", &s[..head], &s[tail..])
    } else {
        format!("{}...", &s[..byte_offset(s, 10)])
    }
}

/// Byte index of the `n`th character, or the string length
fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len())
}

/// Join a base URL and a path with exactly one slash
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_validation() {
        assert!(is_valid_identifier("borrowlend"));
        assert!(is_valid_identifier("initiate_create_pool"));
        assert!(is_valid_identifier("_x1"));
        assert!(!is_valid_identifier("_"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1pool"));
        assert!(!is_valid_identifier("lender offer"));
        assert!(!is_valid_identifier("borrowlend::update_pool"));
    }

    #[test]
    fn test_sanitize_for_logging() {
        let address = "0x147e4d3a5b10eaed2a93536e284c23096dfcea9ac61f0a8420e5d01fbd8f0ea8";
        assert_eq!(sanitize_for_logging(address), "0x147e...0ea8");
        assert_eq!(sanitize_for_logging("short"), "short");
        assert_eq!(sanitize_for_logging("verylongstring"), "verylongst...");
    }

    #[test]
    fn test_sanitize_for_logging_multibyte() {
        let hashlike = format!("0x{}é€", "é".repeat(20));
        assert_eq!(sanitize_for_logging(&hashlike), "0xéééé...ééé€");
        assert_eq!(sanitize_for_logging("ééééééééééé"), "éééééééééé...");
        assert_eq!(sanitize_for_logging("éééééééééé"), "éééééééééé");
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://node/v1/", "/accounts"), "http://node/v1/accounts");
        assert_eq!(join_url("http://node/v1", "accounts"), "http://node/v1/accounts");
    }

    #[test]
    fn test_expiration_is_in_the_future() {
        let now = Utc::now().timestamp() as u64;
        let exp = expiration_from_now(20);
        assert!(exp >= now + 20 && exp <= now + 22);
    }

    #[test]
    fn test_u64_string_accepts_both_encodings() {
        #[derive(serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "u64_string")]
            n: u64,
        }
        let a: Wrapper = serde_json::from_str(r#"{"n": "18446744073709551615"}"#).unwrap();
        let b: Wrapper = serde_json::from_str(r#"{"n": 5}"#).unwrap();
        assert_eq!(a.n, u64::MAX);
        assert_eq!(b.n, 5);
        assert!(serde_json::from_str::<Wrapper>(r#"{"n": "x"}"#).is_err());
    }
}
