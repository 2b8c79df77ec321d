//! Hex color parsing and brightness adjustment for handle gradients.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// Parse `#RGB` or `#RRGGBB` values into RGB channels.
#[must_use]
pub fn parse_hex_rgb(raw: &str) -> Option<(u8, u8, u8)> {
    let trimmed = raw.trim();
    if !trimmed.starts_with('#') {
        return None;
    }
    let hex = &trimmed[1..];
    match hex.len() {
        3 => {
            let Ok(r) = u8::from_str_radix(&hex[0..1].repeat(2), 16) else {
                return None;
            };
            let Ok(g) = u8::from_str_radix(&hex[1..2].repeat(2), 16) else {
                return None;
            };
            let Ok(b) = u8::from_str_radix(&hex[2..3].repeat(2), 16) else {
                return None;
            };
            Some((r, g, b))
        }
        6 => {
            let Ok(r) = u8::from_str_radix(&hex[0..2], 16) else {
                return None;
            };
            let Ok(g) = u8::from_str_radix(&hex[2..4], 16) else {
                return None;
            };
            let Ok(b) = u8::from_str_radix(&hex[4..6], 16) else {
                return None;
            };
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Lighten (or darken, for negative `amount`) a hex color by adding `amount`
/// to each channel, clamped to `[0, 255]`. Non-parsable input is returned
/// unchanged so callers can pass colors straight through to the canvas.
#[must_use]
pub fn lighten(color: &str, amount: i16) -> String {
    let Some((r, g, b)) = parse_hex_rgb(color) else {
        return color.to_owned();
    };
    let adjust = |channel: u8| -> u8 {
        let shifted = i16::from(channel) + amount;
        shifted.clamp(0, 255) as u8
    };
    format!("#{:02x}{:02x}{:02x}", adjust(r), adjust(g), adjust(b))
}
