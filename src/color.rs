//! Hex color literals used throughout the themes.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::ThemeError;
use crate::util::{is_hex_color, parse_hex_rgb};

/// A hand-authored hex color literal such as `#0069B1`.
///
/// Colors keep the exact text they were written with, so serializing a
/// theme reproduces the authored casing. Use [`Color::rgb`] to read the
/// channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(&'static str);

impl Color {
    /// Wraps a hex literal. The value is not checked here; see [`Color::is_valid`].
    pub const fn new(hex: &'static str) -> Self {
        Self(hex)
    }

    /// Returns the literal as written.
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Returns true if the literal is `#rrggbb` or `#rrggbbaa`.
    pub fn is_valid(&self) -> bool {
        is_hex_color(self.0)
    }

    /// Parses the red, green and blue channels.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidColor`] if the literal is malformed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rippleshot_theme::Color;
    ///
    /// assert_eq!(Color::new("#FF9E1B").rgb().unwrap(), (255, 158, 27));
    /// assert!(Color::new("orange").rgb().is_err());
    /// ```
    pub fn rgb(&self) -> Result<(u8, u8, u8), ThemeError> {
        parse_hex_rgb(self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_preserves_literal() {
        let color = Color::new("#0069B1");
        assert_eq!(color.as_str(), "#0069B1");
        assert_eq!(color.to_string(), "#0069B1");
    }

    #[test]
    fn test_color_serializes_as_string() {
        let json = serde_json::to_string(&Color::new("#fafafa")).unwrap();
        assert_eq!(json, "\"#fafafa\"");
    }

    #[test]
    fn test_color_validity() {
        assert!(Color::new("#4d4d4f").is_valid());
        assert!(!Color::new("#4d4d4").is_valid());
    }

    #[test]
    fn test_color_rgb_error_carries_value() {
        match Color::new("blue").rgb() {
            Err(ThemeError::InvalidColor { value, .. }) => assert_eq!(value, "blue"),
            other => panic!("expected InvalidColor, got {:?}", other),
        }
    }
}
