//! Component override section: per-widget style patches.
//!
//! Rules are opaque CSS-like objects handed to the UI framework untouched.
//! Component and slot names must match the framework's exactly, since it
//! pattern-matches on them.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::color::Color;

pub const CSS_BASELINE: &str = "MuiCssBaseline";
pub const CARD: &str = "MuiCard";
pub const BUTTON: &str = "MuiButton";
pub const CHIP: &str = "MuiChip";
pub const TABLE_HEAD: &str = "MuiTableHead";
pub const TABLE_CELL: &str = "MuiTableCell";

/// Chip slots for the semantic colors.
pub const CHIP_SEMANTIC_SLOTS: [&str; 3] = ["colorError", "colorWarning", "colorSuccess"];

const STYLE_OVERRIDES: &str = "styleOverrides";

/// A single style rule: CSS property (or nested selector) to value.
pub type StyleRule = Map<String, Value>;

/// Style overrides keyed by component name, then by style slot.
///
/// Serializes as `{ "<Component>": { "styleOverrides": { "<slot>": {..} } } }`
/// with components and slots in insertion order.
///
/// # Example
///
/// ```rust
/// use rippleshot_theme::ComponentOverrides;
/// use serde_json::json;
///
/// let overrides = ComponentOverrides::new()
///     .add("MuiCard", "root", json!({ "borderRadius": 12 }))
///     .add("MuiCard", "outlined", json!({ "borderWidth": 2 }));
///
/// assert_eq!(overrides.style("MuiCard", "root").unwrap()["borderRadius"], 12);
/// assert!(overrides.style("MuiCard", "elevation1").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ComponentOverrides(Map<String, Value>);

impl ComponentOverrides {
    /// Creates an empty override set.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Sets the rule for `slot` of `component`, returning the updated set
    /// for chaining. A later call for the same slot replaces the rule.
    pub fn add(mut self, component: &str, slot: &str, rule: Value) -> Self {
        let entry = self
            .0
            .entry(component.to_string())
            .or_insert_with(|| json!({ STYLE_OVERRIDES: {} }));
        entry[STYLE_OVERRIDES][slot] = rule;
        self
    }

    /// Returns the rule for `slot` of `component`.
    pub fn style(&self, component: &str, slot: &str) -> Option<&StyleRule> {
        self.0
            .get(component)?
            .get(STYLE_OVERRIDES)?
            .get(slot)?
            .as_object()
    }

    /// Component names in insertion order.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Slot names of `component` in insertion order.
    pub fn slots(&self, component: &str) -> Vec<&str> {
        self.0
            .get(component)
            .and_then(|c| c.get(STYLE_OVERRIDES))
            .and_then(Value::as_object)
            .map(|slots| slots.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Returns true if no component has overrides.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub(crate) fn button_root() -> Value {
    json!({
        "borderRadius": 8,
        "textTransform": "none",
        "fontWeight": 500,
        "fontSize": "0.875rem",
        "padding": "8px 16px",
    })
}

pub(crate) fn button_contained(hover_shadow: &str) -> Value {
    json!({
        "boxShadow": "none",
        "&:hover": {
            "boxShadow": hover_shadow,
        },
    })
}

pub(crate) fn chip_root() -> Value {
    json!({
        "borderRadius": 6,
        "fontSize": "0.75rem",
        "height": 24,
    })
}

/// A tinted chip: `background` behind `foreground` text.
pub(crate) fn chip_tint(background: Color, foreground: Color) -> Value {
    json!({
        "backgroundColor": background,
        "color": foreground,
    })
}

pub(crate) fn table_head_root(background: Color, header_text: Color) -> Value {
    json!({
        "backgroundColor": background,
        "& .MuiTableCell-head": {
            "fontWeight": 600,
            "fontSize": "0.75rem",
            "textTransform": "uppercase",
            "letterSpacing": "0.5px",
            "color": header_text,
        },
    })
}

pub(crate) fn table_cell_root(border: Color) -> Value {
    json!({
        "borderBottom": format!("1px solid {}", border),
        "padding": "12px 16px",
    })
}
