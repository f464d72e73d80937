//! Light/dark color mode, parsing, and OS preference detection.

use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::ThemeError;
use crate::theme::{ThemeRecord, DARK_THEME, LIGHT_THEME};

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Maps a mode name to a mode, treating anything but `"dark"` as light.
    ///
    /// This never fails. Use [`str::parse`] instead when unknown names
    /// should be rejected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rippleshot_theme::ColorMode;
    ///
    /// assert_eq!(ColorMode::from_name("dark"), ColorMode::Dark);
    /// assert_eq!(ColorMode::from_name("light"), ColorMode::Light);
    /// assert_eq!(ColorMode::from_name("sepia"), ColorMode::Light);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => ColorMode::Dark,
            "light" => ColorMode::Light,
            other => {
                tracing::debug!(mode = other, "unrecognized color mode, using light");
                ColorMode::Light
            }
        }
    }

    /// Returns the mode name as the UI framework spells it.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }

    /// Returns the shared theme record for this mode.
    pub fn theme(self) -> &'static ThemeRecord {
        match self {
            ColorMode::Light => &*LIGHT_THEME,
            ColorMode::Dark => &*DARK_THEME,
        }
    }

    /// Detects the operating system's light/dark preference.
    ///
    /// Goes through the detector installed with [`set_mode_detector`], which
    /// defaults to querying the OS.
    pub fn detect() -> Self {
        let detector = *MODE_DETECTOR
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mode = detector();
        tracing::debug!(mode = mode.as_str(), "detected color mode");
        mode
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ThemeError;

    /// Strict parse: accepts `light` or `dark` in any case, surrounding
    /// whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("light") {
            Ok(ColorMode::Light)
        } else if trimmed.eq_ignore_ascii_case("dark") {
            Ok(ColorMode::Dark)
        } else {
            Err(ThemeError::UnknownMode {
                value: s.to_string(),
            })
        }
    }
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> = Lazy::new(|| Mutex::new(os_mode_detector));

/// Overrides the detector used by [`ColorMode::detect`].
///
/// Useful for tests, or for hosts that track the preference themselves.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores the OS-backed detector.
pub fn reset_mode_detector() {
    set_mode_detector(os_mode_detector);
}

fn os_mode_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        _ => ColorMode::Light,
    }
}
