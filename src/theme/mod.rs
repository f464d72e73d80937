//! Theme records and their sections.
//!
//! This module provides:
//!
//! - [`ThemeRecord`]: palette, typography, component overrides, shape and spacing
//! - [`LIGHT_THEME`] / [`DARK_THEME`]: the two shared, lazily built records
//! - [`Palette`], [`Typography`], [`ComponentOverrides`]: the record sections
//!
//! Both records use the same typography scale, corner radius and spacing
//! unit; only colors differ between them.

mod components;
mod dark;
mod light;
mod palette;
mod record;
mod typography;

pub use components::{
    ComponentOverrides, StyleRule, BUTTON, CARD, CHIP, CHIP_SEMANTIC_SLOTS, CSS_BASELINE,
    TABLE_CELL, TABLE_HEAD,
};
pub use palette::{BackgroundColors, Palette, PaletteColor, TextColors};
pub use record::{Shape, ThemeRecord, BORDER_RADIUS, DARK_THEME, LIGHT_THEME, SPACING};
pub use typography::{Typography, TypographyPreset, TypographyVariant, FONT_FAMILY};
