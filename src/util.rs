//! Utility functions for hex colors, terminal color conversion and padding.

use crate::error::ThemeError;

/// Returns true if `s` is `#` followed by exactly 6 or 8 hex digits.
///
/// # Example
///
/// ```rust
/// use rippleshot_theme::is_hex_color;
///
/// assert!(is_hex_color("#0069B1"));
/// assert!(is_hex_color("#0069b1cc"));
/// assert!(!is_hex_color("#fff"));
/// assert!(!is_hex_color("0069B1"));
/// ```
pub fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(digits) => {
            matches!(digits.len(), 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => false,
    }
}

/// Parses the RGB channels of a `#rrggbb` or `#rrggbbaa` literal.
///
/// The alpha channel, if present, is validated but discarded.
pub(crate) fn parse_hex_rgb(s: &str) -> Result<(u8, u8, u8), ThemeError> {
    let invalid = |reason: &'static str| ThemeError::InvalidColor {
        value: s.to_string(),
        reason,
    };

    let digits = s.strip_prefix('#').ok_or_else(|| invalid("missing '#' prefix"))?;
    if !matches!(digits.len(), 6 | 8) {
        return Err(invalid("expected 6 or 8 hex digits"));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid("contains a non-hex digit"));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid("contains a non-hex digit"))
    };
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// # Example
///
/// ```rust
/// use rippleshot_theme::rgb_to_ansi256;
///
/// // Pure red maps to ANSI 196
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Pads `s` with trailing spaces to `width` display columns.
///
/// Strings already at or beyond `width` are returned unchanged.
pub(crate) fn pad_to_width(s: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthStr;

    let current = s.width();
    if current >= width {
        return s.to_string();
    }
    let mut padded = String::with_capacity(s.len() + width - current);
    padded.push_str(s);
    padded.extend(std::iter::repeat(' ').take(width - current));
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hex_color_accepts_six_and_eight_digits() {
        assert!(is_hex_color("#fafafa"));
        assert!(is_hex_color("#FF9E1B"));
        assert!(is_hex_color("#00000080"));
    }

    #[test]
    fn test_is_hex_color_rejects_malformed() {
        assert!(!is_hex_color(""));
        assert!(!is_hex_color("#"));
        assert!(!is_hex_color("#abc"));
        assert!(!is_hex_color("#abcde"));
        assert!(!is_hex_color("#abcdefg"));
        assert!(!is_hex_color("#ggggggg"));
        assert!(!is_hex_color("rgba(0, 0, 0, 0.1)"));
    }

    #[test]
    fn test_parse_hex_rgb() {
        assert_eq!(parse_hex_rgb("#0069B1").unwrap(), (0x00, 0x69, 0xb1));
        assert_eq!(parse_hex_rgb("#ffffff80").unwrap(), (255, 255, 255));
    }

    #[test]
    fn test_parse_hex_rgb_errors() {
        let err = parse_hex_rgb("0069B1").unwrap_err();
        assert!(err.to_string().contains("'#'"));

        let err = parse_hex_rgb("#0069B").unwrap_err();
        assert!(err.to_string().contains("6 or 8"));

        let err = parse_hex_rgb("#0069BZ").unwrap_err();
        assert!(err.to_string().contains("non-hex"));
    }

    #[test]
    fn test_rgb_to_ansi256_grayscale() {
        assert_eq!(rgb_to_ansi256((0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256((255, 255, 255)), 231);
        let mid = rgb_to_ansi256((128, 128, 128));
        assert!((232..=255).contains(&mid));
    }

    #[test]
    fn test_rgb_to_ansi256_color_cube() {
        assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
        assert_eq!(rgb_to_ansi256((0, 0, 255)), 21);
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width("main", 6), "main  ");
        assert_eq!(pad_to_width("primary", 4), "primary");
        assert_eq!(pad_to_width("", 2), "  ");
    }
}
