//! Form decoding module
//!
//! Minimal `application/x-www-form-urlencoded` decoder for the contact
//! form. Pairs keep their submission order; repeated keys are preserved.

/// Parse a urlencoded body into (key, value) pairs.
pub fn parse(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

/// First value submitted under a key, if any.
pub fn first<'a>(fields: &'a [(String, String)], key: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Decode percent-escapes and '+' as space.
///
/// Malformed escapes pass through verbatim rather than failing the whole
/// submission.
fn decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                match (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi * 16 + lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

const fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_pairs() {
        let fields = parse("name=alex&email=alex%40example.com");
        assert_eq!(fields.len(), 2);
        assert_eq!(first(&fields, "name"), Some("alex"));
        assert_eq!(first(&fields, "email"), Some("alex@example.com"));
    }

    #[test]
    fn test_plus_decodes_to_space() {
        let fields = parse("message=hello+there");
        assert_eq!(first(&fields, "message"), Some("hello there"));
    }

    #[test]
    fn test_percent_escapes() {
        let fields = parse("message=a%20b%2Bc%0Ad");
        assert_eq!(first(&fields, "message"), Some("a b+c\nd"));
    }

    #[test]
    fn test_malformed_escape_passes_through() {
        let fields = parse("v=100%&w=%zz");
        assert_eq!(first(&fields, "v"), Some("100%"));
        assert_eq!(first(&fields, "w"), Some("%zz"));
    }

    #[test]
    fn test_missing_value_and_empty_pairs() {
        let fields = parse("flag&&name=");
        assert_eq!(first(&fields, "flag"), Some(""));
        assert_eq!(first(&fields, "name"), Some(""));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn test_missing_key_returns_none() {
        let fields = parse("name=alex");
        assert_eq!(first(&fields, "email"), None);
    }

    #[test]
    fn test_repeated_keys_first_wins() {
        let fields = parse("tag=a&tag=b");
        assert_eq!(first(&fields, "tag"), Some("a"));
        assert_eq!(fields.len(), 2);
    }
}
