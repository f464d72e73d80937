//! Terminal preview of a theme's palette.
//!
//! Each palette role is printed on its own row with its colors in slot
//! order. With color enabled every hex value is preceded by a block painted
//! in the nearest ANSI 256-color index.

use console::Style;

use crate::color::Color;
use crate::theme::ThemeRecord;
use crate::util::{pad_to_width, rgb_to_ansi256};

const BLOCK: &str = "██";

/// Renders the palette of `theme` as aligned rows.
///
/// # Example
///
/// ```rust
/// use rippleshot_theme::{render_swatches, resolve_theme};
///
/// let plain = render_swatches(resolve_theme("light"), false);
/// assert!(plain.starts_with("primary"));
/// assert!(plain.contains("#0069B1"));
/// ```
pub fn render_swatches(theme: &ThemeRecord, use_color: bool) -> String {
    let palette = &theme.palette;
    let mut rows: Vec<(&str, Vec<Color>)> = palette
        .roles()
        .into_iter()
        .map(|(name, role)| (name, role.colors().to_vec()))
        .collect();
    rows.push((
        "background",
        vec![palette.background.default, palette.background.paper],
    ));
    rows.push(("text", vec![palette.text.primary, palette.text.secondary]));
    rows.push(("divider", vec![palette.divider]));

    let label_width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0) + 1;

    let mut out = String::new();
    for (name, colors) in rows {
        out.push_str(&pad_to_width(name, label_width));
        let cells: Vec<String> = colors
            .iter()
            .map(|color| swatch_cell(*color, use_color))
            .collect();
        out.push_str(&cells.join("  "));
        out.push('\n');
    }
    out
}

fn swatch_cell(color: Color, use_color: bool) -> String {
    if !use_color {
        return color.to_string();
    }
    match color.rgb() {
        Ok(rgb) => {
            let block = Style::new()
                .color256(rgb_to_ansi256(rgb))
                .force_styling(true)
                .apply_to(BLOCK);
            format!("{} {}", block, color)
        }
        Err(_) => color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{DARK_THEME, LIGHT_THEME};

    #[test]
    fn test_plain_rows() {
        let out = render_swatches(&LIGHT_THEME, false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "primary    #0069B1  #0084d5  #002F6C  #ffffff");
        assert_eq!(lines[8], "divider    #eeeeee");
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_colored_rows_paint_blocks() {
        let out = render_swatches(&DARK_THEME, true);
        assert!(out.contains("\x1b[38;5;"));
        assert!(out.contains(BLOCK));
        assert!(out.contains("#121212"));
    }

    #[test]
    fn test_invalid_color_renders_plain() {
        assert_eq!(swatch_cell(Color::new("teal"), true), "teal");
    }
}
