//! # Rippleshot Theme
//!
//! Light and dark UI themes for the Rippleshot brand, and the selector that
//! picks one by mode.
//!
//! Each theme is a [`ThemeRecord`]: a palette of semantic color roles, a
//! typography scale, per-component style overrides, a corner radius and a
//! spacing unit. Serialized, a record is exactly the theme-options object a
//! Material-style component framework's theme provider consumes, so field,
//! role, preset, component and slot names are part of the contract.
//!
//! ## Quick Start
//!
//! ```rust
//! use rippleshot_theme::{resolve_theme, ColorMode};
//!
//! let theme = resolve_theme("dark");
//! assert_eq!(theme.palette.mode, ColorMode::Dark);
//!
//! // Anything other than "dark" is the light theme.
//! let fallback = resolve_theme("sepia");
//! assert_eq!(fallback.palette.mode, ColorMode::Light);
//!
//! let json = theme.to_json().unwrap();
//! assert_eq!(json["palette"]["primary"]["main"], "#0084d5");
//! ```
//!
//! ## Concepts
//!
//! - [`brand`]: the named brand colors and neutral ramp both themes draw from
//! - [`ThemeRecord`]: one complete theme; [`LIGHT_THEME`] and [`DARK_THEME`]
//!   are built once on first access and shared by every caller
//! - [`resolve_theme`]: mode name to theme, defaulting to light
//! - [`ColorMode`]: typed mode with strict parsing and OS detection
//! - [`ThemeChoice`]: a fixed mode, or one that follows the OS
//!
//! ## Following the OS
//!
//! ```rust
//! use rippleshot_theme::{set_mode_detector, ColorMode, ThemeChoice};
//!
//! set_mode_detector(|| ColorMode::Dark);
//! assert_eq!(ThemeChoice::System.resolve().palette.mode, ColorMode::Dark);
//! ```

pub mod brand;
mod color;
mod error;
mod mode;
mod select;
mod swatch;
pub mod theme;
mod util;

pub use color::Color;
pub use error::ThemeError;
pub use mode::{reset_mode_detector, set_mode_detector, ColorMode};
pub use select::{resolve_theme, system_theme, ThemeChoice};
pub use swatch::render_swatches;
pub use theme::{
    ComponentOverrides, Palette, PaletteColor, ThemeRecord, Typography, TypographyPreset,
    TypographyVariant, DARK_THEME, LIGHT_THEME,
};
pub use util::{is_hex_color, rgb_to_ansi256};
