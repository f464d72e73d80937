//! The dark theme.
//!
//! Role mains move to lighter shades; the brand color that is `main` in the
//! light theme usually becomes the `dark` companion here.

use crate::brand::{
    BRIGHT_BLUE, DARK_BLUE, NEUTRAL_900, RIPPLESHOT_GREEN, RIPPLESHOT_ORANGE, RIPPLESHOT_PURPLE,
    RIPPLESHOT_RED,
};
use crate::color::Color;
use crate::mode::ColorMode;

use super::components::{self as c, ComponentOverrides};
use super::palette::{BackgroundColors, Palette, PaletteColor, TextColors};
use super::record::{Shape, ThemeRecord, SPACING};
use super::typography::Typography;

const WHITE: Color = Color::new("#ffffff");
const BACKGROUND: Color = Color::new("#121212");
const PAPER: Color = Color::new("#1e1e1e");
const MUTED_TEXT: Color = Color::new("#b3b3b3");
const DIVIDER: Color = Color::new("#333333");

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
        mode: ColorMode::Dark,
        primary: PaletteColor {
            main: BRIGHT_BLUE,
            light: Color::new("#42a5f5"),
            dark: DARK_BLUE,
            contrast_text: WHITE,
        },
        secondary: PaletteColor {
            main: Color::new("#8e7cc3"),
            light: Color::new("#b39ddb"),
            dark: RIPPLESHOT_PURPLE,
            contrast_text: WHITE,
        },
        error: PaletteColor {
            main: Color::new("#f44336"),
            light: Color::new("#ff6659"),
            dark: RIPPLESHOT_RED,
            contrast_text: WHITE,
        },
        warning: PaletteColor {
            main: Color::new("#ff9800"),
            light: RIPPLESHOT_ORANGE,
            dark: Color::new("#e65100"),
            contrast_text: NEUTRAL_900,
        },
        info: PaletteColor {
            main: Color::new("#29b6f6"),
            light: Color::new("#4fc3f7"),
            dark: BRIGHT_BLUE,
            contrast_text: NEUTRAL_900,
        },
        success: PaletteColor {
            main: Color::new("#4caf50"),
            light: Color::new("#81c784"),
            dark: RIPPLESHOT_GREEN,
            contrast_text: NEUTRAL_900,
        },
        background: BackgroundColors {
            default: BACKGROUND,
            paper: PAPER,
        },
        text: TextColors {
            primary: WHITE,
            secondary: MUTED_TEXT,
        },
        divider: DIVIDER,
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
                "backgroundColor": PAPER,
                "border": format!("1px solid {}", DIVIDER),
                "boxShadow": "0 4px 12px 0 rgba(0, 0, 0, 0.3)",
            }),
        )
        .add(c::BUTTON, "root", c::button_root())
        .add(
            c::BUTTON,
            "contained",
            c::button_contained("0 2px 8px 0 rgba(0, 132, 213, 0.3)"),
        )
        .add(c::CHIP, "root", c::chip_root())
        .add(
            c::CHIP,
            "colorError",
            c::chip_tint(Color::new("#3d1a1a"), Color::new("#f48fb1")),
        )
        .add(
            c::CHIP,
            "colorWarning",
            c::chip_tint(Color::new("#3d2f1a"), Color::new("#ffcc80")),
        )
        .add(
            c::CHIP,
            "colorSuccess",
            c::chip_tint(Color::new("#1a3d1a"), Color::new("#a5d6a7")),
        )
        .add(
            c::TABLE_HEAD,
            "root",
            c::table_head_root(Color::new("#2a2a2a"), MUTED_TEXT),
        )
        .add(c::TABLE_CELL, "root", c::table_cell_root(DIVIDER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_brand_mains_become_dark_variants() {
        let theme = build();
        assert_eq!(theme.palette.mode, ColorMode::Dark);
        assert_eq!(theme.palette.secondary.dark, RIPPLESHOT_PURPLE);
        assert_eq!(theme.palette.error.dark, RIPPLESHOT_RED);
        assert_eq!(theme.palette.success.dark, RIPPLESHOT_GREEN);
    }

    #[test]
    fn test_card_sits_on_paper() {
        let theme = build();
        let card = theme.components.style(c::CARD, "root").unwrap();
        assert_eq!(card["backgroundColor"], "#1e1e1e");
        assert_eq!(card["border"], "1px solid #333333");
    }

    #[test]
    fn test_chip_tints_are_dark() {
        let theme = build();
        for slot in c::CHIP_SEMANTIC_SLOTS {
            let rule = theme.components.style(c::CHIP, slot).unwrap();
            let bg = rule["backgroundColor"].as_str().unwrap();
            let (r, g, b) = crate::util::parse_hex_rgb(bg).unwrap();
            assert!(r.max(g).max(b) < 0x40, "{} background {}", slot, bg);
        }
    }
}
