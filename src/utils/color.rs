use ratatui::style::Color;

/// Convert a "#RRGGBB" hex token to a terminal color
///
/// Returns `None` for anything that is not a six-digit hex color so the
/// caller can fall back to its built-in default.
#[must_use]
pub fn parse_hex_color(token: &str) -> Option<Color> {
    let hex = token.trim().strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Resolve an optional hex token against a fallback color.
#[must_use]
pub fn color_or(token: Option<&str>, fallback: Color) -> Color {
    token.and_then(parse_hex_color).unwrap_or(fallback)
}
