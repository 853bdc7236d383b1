//! Label validation logic.
//!
//! Labels are measured in Unicode code points, not storage units. A
//! decorative emoji label occupies four UTF-8 bytes per character but
//! still counts one code point per character, so "\u{1F4A9}\u{1F4A9}\u{1F4A9}"
//! is a valid three-character label while a two-character kana label is not.

use soroban_sdk::Bytes;

/// Minimum label length in code points.
pub const MIN_LABEL_LENGTH: u32 = 3;

/// Validate a label for registration.
///
/// Returns true iff the label contains at least [`MIN_LABEL_LENGTH`] code
/// points. There is no character-class restriction.
pub fn valid(label: &Bytes) -> bool {
    code_point_length(label) >= MIN_LABEL_LENGTH
}

/// Count the Unicode code points in a UTF-8 encoded label.
///
/// Every code point contributes exactly one non-continuation byte
/// (a byte not of the form `0b10xxxxxx`), so counting those counts
/// code points without decoding.
pub fn code_point_length(label: &Bytes) -> u32 {
    let mut count: u32 = 0;
    for b in label.iter() {
        if b & 0xC0 != 0x80 {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::Env;

    #[test]
    fn test_ascii_labels() {
        let env = Env::default();

        assert!(valid(&Bytes::from_slice(&env, b"testing")));
        assert!(valid(&Bytes::from_slice(&env, b"longname12345678")));
        assert!(valid(&Bytes::from_slice(&env, b"four")));
        assert!(valid(&Bytes::from_slice(&env, b"iii")));

        assert!(!valid(&Bytes::from_slice(&env, b"ii")));
        assert!(!valid(&Bytes::from_slice(&env, b"i")));
        assert!(!valid(&Bytes::from_slice(&env, b"")));
    }

    #[test]
    fn test_multibyte_labels() {
        let env = Env::default();

        // { ni } { hao } { ma } (chinese; simplified): 3 code points, 9 bytes
        assert!(valid(&Bytes::from_slice(&env, "你好吗".as_bytes())));

        // { ta } { ko } (japanese; hiragana): 2 code points
        assert!(!valid(&Bytes::from_slice(&env, "たこ".as_bytes())));

        // poop emoji: 1 code point each, 4 bytes each
        assert!(valid(&Bytes::from_slice(&env, "💩💩💩".as_bytes())));
        assert!(!valid(&Bytes::from_slice(&env, "💩💩".as_bytes())));
    }

    #[test]
    fn test_code_point_length() {
        let env = Env::default();

        assert_eq!(code_point_length(&Bytes::from_slice(&env, b"")), 0);
        assert_eq!(code_point_length(&Bytes::from_slice(&env, b"foo")), 3);
        assert_eq!(
            code_point_length(&Bytes::from_slice(&env, "你好吗".as_bytes())),
            3
        );
        assert_eq!(
            code_point_length(&Bytes::from_slice(&env, "💩💩".as_bytes())),
            2
        );
    }
}
