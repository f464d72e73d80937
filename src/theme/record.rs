//! The complete theme record handed to the UI framework.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::ThemeError;
use crate::mode::ColorMode;

use super::components::{ComponentOverrides, StyleRule};
use super::palette::Palette;
use super::typography::Typography;

/// Corner radius shared by both themes, in pixels.
pub const BORDER_RADIUS: u32 = 8;

/// Base spacing unit shared by both themes, in pixels.
pub const SPACING: u32 = 8;

/// Global corner rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub border_radius: u32,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            border_radius: BORDER_RADIUS,
        }
    }
}

/// Palette, typography, component overrides and structural constants of
/// one theme.
///
/// The two records live in [`LIGHT_THEME`] and [`DARK_THEME`]; they are
/// built on first access and never change afterwards. Serializing a record
/// yields the theme-options object the UI framework's theme provider
/// expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeRecord {
    pub palette: Palette,
    pub typography: Typography,
    pub components: ComponentOverrides,
    pub shape: Shape,
    pub spacing: u32,
}

impl ThemeRecord {
    /// The mode this theme was built for.
    pub fn mode(&self) -> ColorMode {
        self.palette.mode
    }

    /// Serializes the record into a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Serialize`] if serialization fails.
    pub fn to_json(&self) -> Result<serde_json::Value, ThemeError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serializes the record into pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Serialize`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every hex color literal in the record, labelled with its path.
    ///
    /// Covers the palette and, in component overrides, every value of a
    /// color property (`color`, `backgroundColor`, `borderColor`, ...)
    /// whatever it looks like, plus each `#` token inside other string
    /// values such as `"1px solid #333333"`. Values are reported as written,
    /// so a malformed literal shows up here instead of being skipped.
    pub fn hex_values(&self) -> Vec<(String, &str)> {
        let mut out: Vec<(String, &str)> = self
            .palette
            .colors()
            .into_iter()
            .map(|(path, color)| (format!("palette.{}", path), color.as_str()))
            .collect();
        for component in self.components.components() {
            for slot in self.components.slots(component) {
                if let Some(rule) = self.components.style(component, slot) {
                    let prefix = format!("components.{}.{}", component, slot);
                    collect_hex(rule, prefix, &mut out);
                }
            }
        }
        out
    }
}

fn collect_hex<'a>(rule: &'a StyleRule, prefix: String, out: &mut Vec<(String, &'a str)>) {
    for (key, value) in rule {
        let path = format!("{}.{}", prefix, key);
        match value {
            serde_json::Value::String(s) if is_color_property(key) => out.push((path, s.as_str())),
            serde_json::Value::String(s) => {
                for token in s.split_whitespace().filter(|t| t.starts_with('#')) {
                    out.push((path.clone(), token.trim_end_matches([',', ')', ';'])));
                }
            }
            serde_json::Value::Object(nested) => collect_hex(nested, path, out),
            _ => {}
        }
    }
}

fn is_color_property(key: &str) -> bool {
    key == "color" || key.ends_with("Color")
}

/// The light theme, built on first access.
pub static LIGHT_THEME: Lazy<ThemeRecord> = Lazy::new(super::light::build);

/// The dark theme, built on first access.
pub static DARK_THEME: Lazy<ThemeRecord> = Lazy::new(super::dark::build);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::theme::components::{chip_tint, table_cell_root, CHIP, TABLE_CELL};
    use crate::util::is_hex_color;

    #[test]
    fn test_shape_default() {
        assert_eq!(Shape::default().border_radius, BORDER_RADIUS);
    }

    #[test]
    fn test_top_level_keys() {
        let json = LIGHT_THEME.to_json().unwrap();
        let keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["palette", "typography", "components", "shape", "spacing"]);
        assert_eq!(json["shape"]["borderRadius"], 8);
        assert_eq!(json["spacing"], 8);
    }

    #[test]
    fn test_to_json_pretty_round_trips_to_value() {
        let text = DARK_THEME.to_json_pretty().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, DARK_THEME.to_json().unwrap());
        assert_eq!(parsed["palette"]["mode"], "dark");
    }

    #[test]
    fn test_hex_values_include_nested_rules() {
        let values = LIGHT_THEME.hex_values();
        assert!(values
            .iter()
            .any(|(path, hex)| path == "palette.primary.main" && *hex == "#0069B1"));
        assert!(values.iter().any(|(path, hex)| {
            path == "components.MuiTableHead.root.& .MuiTableCell-head.color" && *hex == "#616161"
        }));
        assert!(!values.iter().any(|(path, _)| path.ends_with("padding")));
    }

    #[test]
    fn test_hex_values_split_compound_values() {
        let values = DARK_THEME.hex_values();
        assert!(values.iter().any(|(path, hex)| {
            path == "components.MuiTableCell.root.borderBottom" && *hex == "#333333"
        }));
        assert!(values
            .iter()
            .any(|(path, hex)| path == "components.MuiCard.root.border" && *hex == "#333333"));
        assert!(!values.iter().any(|(path, _)| path.ends_with("boxShadow")));
    }

    #[test]
    fn test_hex_values_report_malformed_override_colors() {
        let mut theme = LIGHT_THEME.clone();
        theme.components = theme
            .components
            .add(
                CHIP,
                "colorError",
                chip_tint(Color::new("ffebee"), Color::new("#E1060")),
            )
            .add(TABLE_CELL, "root", table_cell_root(Color::new("#eeeee")));

        let bad: Vec<(String, &str)> = theme
            .hex_values()
            .into_iter()
            .filter(|(_, hex)| !is_hex_color(hex))
            .collect();
        let paths: Vec<&str> = bad.iter().map(|(path, _)| path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "components.MuiChip.colorError.backgroundColor",
                "components.MuiChip.colorError.color",
                "components.MuiTableCell.root.borderBottom",
            ]
        );
        assert!(LIGHT_THEME.hex_values().iter().all(|(_, hex)| is_hex_color(hex)));
    }

    #[test]
    fn test_mode_accessor() {
        assert_eq!(LIGHT_THEME.mode(), ColorMode::Light);
        assert_eq!(DARK_THEME.mode(), ColorMode::Dark);
    }
}
