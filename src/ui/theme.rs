//! Status colors and glyphs.

use ratatui::style::Color;

use crate::dataset::{Status, StatusTone};

/// Color of application nodes on the network canvas.
pub const APPLICATION_COLOR: Color = Color::Rgb(100, 149, 237); // Cornflower blue

/// Orange, used for the warning tone.
const ORANGE: Color = Color::Rgb(255, 165, 0);

/// Get the color for a status tone
///
/// - Good: Green
/// - Warning: Orange
/// - Critical: Red
/// - Pending: Blue
pub fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Good => Color::Green,
        StatusTone::Warning => ORANGE,
        StatusTone::Critical => Color::Red,
        StatusTone::Pending => Color::Blue,
    }
}

pub fn status_color(status: Status) -> Color {
    tone_color(status.tone())
}

/// Get the glyph shown before a status label
pub fn tone_icon(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Good => "✔",
        StatusTone::Warning => "⚠",
        StatusTone::Critical => "✖",
        StatusTone::Pending => "◷",
    }
}

pub fn status_icon(status: Status) -> &'static str {
    tone_icon(status.tone())
}

/// Legend entries, in footer order.
pub fn legend() -> [(StatusTone, &'static str); 4] {
    [
        (StatusTone::Good, "Compatible/Stable"),
        (StatusTone::Warning, "Deprecated"),
        (StatusTone::Critical, "Incompatible/EOL"),
        (StatusTone::Pending, "Testing/Planned"),
    ]
}
