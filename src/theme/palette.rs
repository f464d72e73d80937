//! Palette section: semantic color roles.

use serde::Serialize;

use crate::color::Color;
use crate::mode::ColorMode;

/// One action role: a main color with lighter and darker companions and
/// the text color used on top of `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteColor {
    pub main: Color,
    pub light: Color,
    pub dark: Color,
    pub contrast_text: Color,
}

impl PaletteColor {
    /// Returns the four colors in `main, light, dark, contrastText` order.
    pub fn colors(&self) -> [Color; 4] {
        [self.main, self.light, self.dark, self.contrast_text]
    }
}

/// Surface colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackgroundColors {
    pub default: Color,
    pub paper: Color,
}

/// Text colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextColors {
    pub primary: Color,
    pub secondary: Color,
}

/// The palette of one theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub mode: ColorMode,
    pub primary: PaletteColor,
    pub secondary: PaletteColor,
    pub error: PaletteColor,
    pub warning: PaletteColor,
    pub info: PaletteColor,
    pub success: PaletteColor,
    pub background: BackgroundColors,
    pub text: TextColors,
    pub divider: Color,
}

impl Palette {
    /// Action roles by name, in declaration order.
    pub fn roles(&self) -> [(&'static str, &PaletteColor); 6] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("error", &self.error),
            ("warning", &self.warning),
            ("info", &self.info),
            ("success", &self.success),
        ]
    }

    /// Looks up an action role by name.
    pub fn role(&self, name: &str) -> Option<&PaletteColor> {
        self.roles()
            .into_iter()
            .find(|(role, _)| *role == name)
            .map(|(_, color)| color)
    }

    /// Every color in the palette, labelled with its dotted path.
    pub fn colors(&self) -> Vec<(String, Color)> {
        let mut out = Vec::with_capacity(6 * 4 + 5);
        for (role, color) in self.roles() {
            for (slot, value) in ["main", "light", "dark", "contrastText"]
                .into_iter()
                .zip(color.colors())
            {
                out.push((format!("{}.{}", role, slot), value));
            }
        }
        out.push(("background.default".to_string(), self.background.default));
        out.push(("background.paper".to_string(), self.background.paper));
        out.push(("text.primary".to_string(), self.text.primary));
        out.push(("text.secondary".to_string(), self.text.secondary));
        out.push(("divider".to_string(), self.divider));
        out
    }
}
