//! Typography section: font family and the text-style presets.
//!
//! The scale is shared by both themes; only colors change with mode.

use serde::Serialize;

/// Font stack used by every preset.
pub const FONT_FAMILY: &str = r#""Inter", "Roboto", "Helvetica", "Arial", sans-serif"#;

/// The closed set of text-style presets, in framework order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypographyVariant {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Subtitle1,
    Body1,
    Body2,
}

impl TypographyVariant {
    /// All presets in order.
    pub const ALL: [TypographyVariant; 9] = [
        TypographyVariant::H1,
        TypographyVariant::H2,
        TypographyVariant::H3,
        TypographyVariant::H4,
        TypographyVariant::H5,
        TypographyVariant::H6,
        TypographyVariant::Subtitle1,
        TypographyVariant::Body1,
        TypographyVariant::Body2,
    ];

    /// The preset key the UI framework matches on.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TypographyVariant::H1 => "h1",
            TypographyVariant::H2 => "h2",
            TypographyVariant::H3 => "h3",
            TypographyVariant::H4 => "h4",
            TypographyVariant::H5 => "h5",
            TypographyVariant::H6 => "h6",
            TypographyVariant::Subtitle1 => "subtitle1",
            TypographyVariant::Body1 => "body1",
            TypographyVariant::Body2 => "body2",
        }
    }
}

/// Size, weight and line height of one preset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyPreset {
    /// CSS length, e.g. `"2.5rem"`.
    pub font_size: &'static str,
    pub font_weight: u16,
    /// Unitless multiplier of the font size.
    pub line_height: f64,
}

impl TypographyPreset {
    fn new(font_size: &'static str, font_weight: u16, line_height: f64) -> Self {
        Self {
            font_size,
            font_weight,
            line_height,
        }
    }
}

/// Font family plus one preset per [`TypographyVariant`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: &'static str,
    pub h1: TypographyPreset,
    pub h2: TypographyPreset,
    pub h3: TypographyPreset,
    pub h4: TypographyPreset,
    pub h5: TypographyPreset,
    pub h6: TypographyPreset,
    pub subtitle1: TypographyPreset,
    pub body1: TypographyPreset,
    pub body2: TypographyPreset,
}

impl Typography {
    /// The Rippleshot type scale.
    pub fn standard() -> Self {
        Self {
            font_family: FONT_FAMILY,
            h1: TypographyPreset::new("2.5rem", 600, 1.2),
            h2: TypographyPreset::new("2rem", 600, 1.3),
            h3: TypographyPreset::new("1.75rem", 600, 1.3),
            h4: TypographyPreset::new("1.5rem", 600, 1.4),
            h5: TypographyPreset::new("1.25rem", 600, 1.4),
            h6: TypographyPreset::new("1.125rem", 600, 1.4),
            subtitle1: TypographyPreset::new("1rem", 500, 1.5),
            body1: TypographyPreset::new("0.875rem", 400, 1.6),
            body2: TypographyPreset::new("0.8125rem", 400, 1.5),
        }
    }

    /// Returns the preset for `variant`.
    pub fn preset(&self, variant: TypographyVariant) -> &TypographyPreset {
        match variant {
            TypographyVariant::H1 => &self.h1,
            TypographyVariant::H2 => &self.h2,
            TypographyVariant::H3 => &self.h3,
            TypographyVariant::H4 => &self.h4,
            TypographyVariant::H5 => &self.h5,
            TypographyVariant::H6 => &self.h6,
            TypographyVariant::Subtitle1 => &self.subtitle1,
            TypographyVariant::Body1 => &self.body1,
            TypographyVariant::Body2 => &self.body2,
        }
    }

    /// Iterates presets in framework order.
    pub fn presets(&self) -> impl Iterator<Item = (TypographyVariant, &TypographyPreset)> {
        TypographyVariant::ALL
            .into_iter()
            .map(move |variant| (variant, self.preset(variant)))
    }
}
