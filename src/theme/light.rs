//! The light theme.

use crate::brand::{
    BRIGHT_BLUE, DARK_BLUE, NEUTRAL_200, NEUTRAL_600, NEUTRAL_700, NEUTRAL_900, RIPPLESHOT_BLUE,
    RIPPLESHOT_GREEN, RIPPLESHOT_ORANGE, RIPPLESHOT_PURPLE, RIPPLESHOT_RED,
};
use crate::color::Color;
use crate::mode::ColorMode;

use super::components::{self as c, ComponentOverrides};
use super::palette::{BackgroundColors, Palette, PaletteColor, TextColors};
use super::record::{Shape, ThemeRecord, SPACING};
use super::typography::Typography;

const WHITE: Color = Color::new("#ffffff");
const BACKGROUND: Color = Color::new("#fafafa");

pub(crate) fn build() -> ThemeRecord {
    ThemeRecord {
        palette: palette(),
        typography: Typography::standard(),
        components: components(),
        shape: Shape::default(),
        spacing: SPACING,
    }
}

fn palette() -> Palette {
    Palette {
        mode: ColorMode::Light,
        primary: PaletteColor {
            main: RIPPLESHOT_BLUE,
            light: BRIGHT_BLUE,
            dark: DARK_BLUE,
            contrast_text: WHITE,
        },
        secondary: PaletteColor {
            main: RIPPLESHOT_PURPLE,
            light: Color::new("#6d5fa7"),
            dark: Color::new("#362d5c"),
            contrast_text: WHITE,
        },
        error: PaletteColor {
            main: RIPPLESHOT_RED,
            light: Color::new("#ff4444"),
            dark: Color::new("#b71c1c"),
            contrast_text: WHITE,
        },
        warning: PaletteColor {
            main: RIPPLESHOT_ORANGE,
            light: Color::new("#ffb74d"),
            dark: Color::new("#e65100"),
            contrast_text: NEUTRAL_900,
        },
        info: PaletteColor {
            main: BRIGHT_BLUE,
            light: Color::new("#4fb3ff"),
            dark: RIPPLESHOT_BLUE,
            contrast_text: WHITE,
        },
        success: PaletteColor {
            main: RIPPLESHOT_GREEN,
            light: Color::new("#4db6ac"),
            dark: Color::new("#004d40"),
            contrast_text: WHITE,
        },
        background: BackgroundColors {
            default: BACKGROUND,
            paper: WHITE,
        },
        text: TextColors {
            primary: NEUTRAL_900,
            secondary: NEUTRAL_600,
        },
        divider: NEUTRAL_200,
    }
}

fn components() -> ComponentOverrides {
    ComponentOverrides::new()
        .add(
            c::CSS_BASELINE,
            "body",
            serde_json::json!({ "backgroundColor": BACKGROUND }),
        )
        .add(
            c::CARD,
            "root",
            serde_json::json!({
                "borderRadius": 12,
                "boxShadow": "0 2px 8px 0 rgba(0, 0, 0, 0.1)",
                "border": "1px solid #f0f0f0",
            }),
        )
        .add(c::BUTTON, "root", c::button_root())
        .add(
            c::BUTTON,
            "contained",
            c::button_contained("0 2px 4px 0 rgba(0, 0, 0, 0.2)"),
        )
        .add(c::CHIP, "root", c::chip_root())
        .add(
            c::CHIP,
            "colorError",
            c::chip_tint(Color::new("#ffebee"), RIPPLESHOT_RED),
        )
        .add(
            c::CHIP,
            "colorWarning",
            c::chip_tint(Color::new("#fff8e1"), RIPPLESHOT_ORANGE),
        )
        .add(
            c::CHIP,
            "colorSuccess",
            c::chip_tint(Color::new("#e8f5e8"), RIPPLESHOT_GREEN),
        )
        .add(
            c::TABLE_HEAD,
            "root",
            c::table_head_root(Color::new("#f8f9fa"), NEUTRAL_700),
        )
        .add(c::TABLE_CELL, "root", c::table_cell_root(NEUTRAL_200))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_is_brand_blue() {
        let theme = build();
        assert_eq!(theme.palette.mode, ColorMode::Light);
        assert_eq!(theme.palette.primary.main, RIPPLESHOT_BLUE);
        assert_eq!(theme.palette.primary.dark, DARK_BLUE);
    }

    #[test]
    fn test_chips_use_role_mains() {
        let theme = build();
        for (slot, role) in c::CHIP_SEMANTIC_SLOTS
            .into_iter()
            .zip([theme.palette.error, theme.palette.warning, theme.palette.success])
        {
            let rule = theme.components.style(c::CHIP, slot).unwrap();
            assert_eq!(rule["color"], role.main.as_str(), "{}", slot);
        }
    }

    #[test]
    fn test_baseline_matches_background() {
        let theme = build();
        let body = theme.components.style(c::CSS_BASELINE, "body").unwrap();
        assert_eq!(body["backgroundColor"], theme.palette.background.default.as_str());
    }
}
