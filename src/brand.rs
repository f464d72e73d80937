//! Rippleshot brand color tokens.
//!
//! Both themes draw their role colors from this table. Tokens are looked up
//! by their camelCase design names with [`lookup`], and the neutral ramp by
//! shade step with [`neutral`].

use crate::color::Color;

// Primary palette
pub const RIPPLESHOT_BLUE: Color = Color::new("#0069B1");
pub const RIPPLESHOT_PURPLE: Color = Color::new("#4C4184");
pub const DARK_BLUE: Color = Color::new("#002F6C");
pub const BRIGHT_BLUE: Color = Color::new("#0084d5");
pub const GRAYSCALE: Color = Color::new("#4d4d4f");

// Secondary palette (accents)
pub const RIPPLESHOT_GREEN: Color = Color::new("#007681");
pub const RIPPLESHOT_ORANGE: Color = Color::new("#FF9E1B");
pub const RIPPLESHOT_RED: Color = Color::new("#E10600");

/// Neutral grayscale ramp, lightest first, keyed by shade step.
pub const NEUTRAL: [(u16, Color); 10] = [
    (50, Color::new("#fafafa")),
    (100, Color::new("#f5f5f5")),
    (200, Color::new("#eeeeee")),
    (300, Color::new("#e0e0e0")),
    (400, Color::new("#bdbdbd")),
    (500, Color::new("#9e9e9e")),
    (600, Color::new("#757575")),
    (700, Color::new("#616161")),
    (800, Color::new("#424242")),
    (900, Color::new("#212121")),
];

/// Named brand tokens in design-document order.
pub const BRAND_COLORS: [(&str, Color); 8] = [
    ("rippleshotBlue", RIPPLESHOT_BLUE),
    ("rippleshotPurple", RIPPLESHOT_PURPLE),
    ("darkBlue", DARK_BLUE),
    ("brightBlue", BRIGHT_BLUE),
    ("grayscale", GRAYSCALE),
    ("rippleshotGreen", RIPPLESHOT_GREEN),
    ("rippleshotOrange", RIPPLESHOT_ORANGE),
    ("rippleshotRed", RIPPLESHOT_RED),
];

/// Looks up a named brand token.
///
/// # Example
///
/// ```rust
/// use rippleshot_theme::brand;
///
/// assert_eq!(brand::lookup("rippleshotBlue"), Some(brand::RIPPLESHOT_BLUE));
/// assert_eq!(brand::lookup("mauve"), None);
/// ```
pub fn lookup(name: &str) -> Option<Color> {
    BRAND_COLORS
        .iter()
        .find(|(token, _)| *token == name)
        .map(|(_, color)| *color)
}

/// Looks up a neutral shade by step (50, 100, 200, ..., 900).
pub fn neutral(step: u16) -> Option<Color> {
    NEUTRAL
        .iter()
        .find(|(shade, _)| *shade == step)
        .map(|(_, color)| *color)
}

/// Neutral shades the themes reference directly.
pub(crate) const NEUTRAL_200: Color = NEUTRAL[2].1;
pub(crate) const NEUTRAL_600: Color = NEUTRAL[6].1;
pub(crate) const NEUTRAL_700: Color = NEUTRAL[7].1;
pub(crate) const NEUTRAL_900: Color = NEUTRAL[9].1;
