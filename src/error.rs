//! Errors from color parsing, mode parsing and theme export.

use thiserror::Error;

/// Error returned by the fallible helpers of this crate.
///
/// Building and selecting a theme never fails; only parsing user input
/// and serializing a theme can.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A color literal is not a `#rrggbb` or `#rrggbbaa` hex string.
    #[error("invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: &'static str },

    /// A mode name is neither `light` nor `dark`.
    #[error("unknown color mode '{value}' (expected 'light' or 'dark')")]
    UnknownMode { value: String },

    /// Serializing a theme to JSON failed.
    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_color_display() {
        let err = ThemeError::InvalidColor {
            value: "#12".to_string(),
            reason: "expected 6 or 8 hex digits",
        };
        let msg = err.to_string();
        assert!(msg.contains("#12"));
        assert!(msg.contains("6 or 8"));
    }

    #[test]
    fn test_unknown_mode_display() {
        let err = ThemeError::UnknownMode {
            value: "sepia".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown color mode 'sepia' (expected 'light' or 'dark')"
        );
    }
}
