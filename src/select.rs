//! Theme selection.

use crate::mode::ColorMode;
use crate::theme::ThemeRecord;

/// Returns the theme for a mode name.
///
/// `"dark"` selects the dark theme; every other value, recognized or not,
/// selects the light theme. The returned reference always points at the
/// same shared record for a given mode.
///
/// # Example
///
/// ```rust
/// use rippleshot_theme::{resolve_theme, ColorMode};
///
/// assert_eq!(resolve_theme("dark").palette.mode, ColorMode::Dark);
/// assert_eq!(resolve_theme("banana").palette.mode, ColorMode::Light);
/// assert!(std::ptr::eq(resolve_theme("dark"), resolve_theme("dark")));
/// ```
pub fn resolve_theme(mode: &str) -> &'static ThemeRecord {
    ColorMode::from_name(mode).theme()
}

/// Returns the theme matching the operating system's color preference.
pub fn system_theme() -> &'static ThemeRecord {
    ColorMode::detect().theme()
}

/// Either a fixed mode or one that follows the OS preference.
///
/// Lets hosts store "what the user picked" and resolve it per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChoice {
    /// Always the given mode.
    Fixed(ColorMode),
    /// Whatever [`ColorMode::detect`] reports at resolve time.
    System,
}

impl ThemeChoice {
    /// Resolves to a concrete mode.
    pub fn mode(&self) -> ColorMode {
        match self {
            ThemeChoice::Fixed(mode) => *mode,
            ThemeChoice::System => ColorMode::detect(),
        }
    }

    /// Resolves to the shared theme record.
    pub fn resolve(&self) -> &'static ThemeRecord {
        self.mode().theme()
    }
}

impl Default for ThemeChoice {
    fn default() -> Self {
        ThemeChoice::Fixed(ColorMode::Light)
    }
}

impl From<ColorMode> for ThemeChoice {
    fn from(mode: ColorMode) -> Self {
        ThemeChoice::Fixed(mode)
    }
}
