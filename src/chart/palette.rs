//! Chart color palettes and round-robin series color assignment.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use ratatui::style::Color;

use super::ChartKind;

/// General-purpose categorical palette.
pub const CATEGORICAL: [Color; 6] = [
    Color::Rgb(0, 122, 204),   // blue
    Color::Rgb(4, 181, 117),   // green
    Color::Rgb(230, 166, 35),  // amber
    Color::Rgb(203, 75, 109),  // rose
    Color::Rgb(137, 107, 222), // violet
    Color::Rgb(64, 185, 190),  // teal
];

/// Cool-toned palette, default for line and scatter charts.
pub const COOL: [Color; 4] = [
    Color::Rgb(0, 122, 204),
    Color::Rgb(64, 185, 190),
    Color::Rgb(137, 107, 222),
    Color::Rgb(90, 150, 220),
];

/// Warm-toned palette.
pub const WARM: [Color; 4] = [
    Color::Rgb(230, 166, 35),
    Color::Rgb(203, 75, 109),
    Color::Rgb(220, 120, 60),
    Color::Rgb(190, 90, 160),
];

/// Named palettes addressable from chart configuration.
static PALETTES: Lazy<BTreeMap<&'static str, &'static [Color]>> = Lazy::new(|| {
    let mut map: BTreeMap<&'static str, &'static [Color]> = BTreeMap::new();
    map.insert("categorical", &CATEGORICAL[..]);
    map.insert("cool", &COOL[..]);
    map.insert("warm", &WARM[..]);
    map
});

/// Look up a palette by name, falling back to the categorical palette.
pub fn palette(name: &str) -> &'static [Color] {
    PALETTES.get(name).copied().unwrap_or(&CATEGORICAL[..])
}

/// Default palette name for a chart kind.
pub fn default_palette_for(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Bar | ChartKind::HorizontalBar => "categorical",
        ChartKind::Line | ChartKind::Scatter => "cool",
        ChartKind::Composed => "categorical",
    }
}

/// Round-robin color for a series index.
pub fn pick(colors: &[Color], index: usize) -> Color {
    if colors.is_empty() {
        Color::White
    } else {
        colors[index % colors.len()]
    }
}

/// Dim a color toward the background.
///
/// Terminal cells have no alpha channel, so the alpha-reduced fill of the
/// original design maps to darkening RGB values and graying named colors.
pub fn dim_color(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(r / 3, g / 3, b / 3),
        Color::Reset => Color::DarkGray,
        _ => Color::DarkGray,
    }
}
