//! ASCII hexadecimal codec.
//!
//! Each byte is written as two hexadecimal digits. The decoder accepts upper
//! and lower case digits and ignores whitespace (`' '`, `\t`, `\n`, `\r`)
//! anywhere in the input.

mod decode;
mod encode;
mod factory;

pub use decode::HexDecodeInputStream;
pub use encode::HexEncodeOutputStream;
pub use factory::HexDecodeFactory;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Check if `byte` is whitespace skipped by the decoder.
#[inline]
pub const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Check if `bytes` contains anything but hexadecimal digits, whitespace
/// included.
pub fn has_non_hexadecimal_character(bytes: &[u8]) -> bool {
    bytes.iter().any(|byte| !byte.is_ascii_hexdigit())
}

/// Value of a hexadecimal digit.
#[inline]
pub(crate) const fn digit_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Uppercase digits of `byte`.
#[inline]
pub(crate) const fn digits(byte: u8) -> [u8; 2] {
    [DIGITS[(byte >> 4) as usize], DIGITS[(byte & 0x0F) as usize]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_space() {
        for byte in [b' ', b'\t', b'\n', b'\r'] {
            assert!(is_space(byte));
        }
        assert!(!is_space(b'0'));
        assert!(!is_space(0x0B));
    }

    #[test]
    fn test_has_non_hexadecimal_character() {
        let cases: [(&[u8], bool); 6] = [
            (b"0123456789abcdefABCDEF", false),
            (b"0123456789abcdefABCDEF ", true),
            (b"GHIJK", true),
            (b"X0123456789abcdefABCDEF", true),
            (b"0123456789XabcdefABCDEF", true),
            (b"0123456789abcdefABCDEFX", true),
        ];

        for (bytes, expected) in cases {
            assert_eq!(has_non_hexadecimal_character(bytes), expected);
        }
    }

    #[test]
    fn test_digits() {
        for byte in 0..=255u8 {
            let [high, low] = digits(byte);
            assert_eq!(digit_value(high).unwrap() << 4 | digit_value(low).unwrap(), byte);
        }
        assert_eq!(digit_value(b'g'), None);
    }
}
