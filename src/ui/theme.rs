//! Color theme constants for datadeck components.
//!
//! Defines the minimal dark palette shared by every component; chart series
//! palettes live in `chart::palette`.

use ratatui::style::Color;

// ============================================================================
// Base Colors
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header row text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Selected row background
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 40, 60);

/// Hovered row background
pub const COLOR_HOVER_BG: Color = Color::Rgb(22, 28, 42);

// ============================================================================
// Table Colors
// ============================================================================

/// Sort indicator color in sorted headers
pub const COLOR_SORT: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Pinned column separator color
pub const COLOR_PIN_SEPARATOR: Color = Color::Gray;

/// Group header row color
pub const COLOR_GROUP: Color = Color::Rgb(230, 166, 35); // amber

// ============================================================================
// Status Colors
// ============================================================================

/// Success / positive state - green
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Warning state - yellow
pub const COLOR_WARNING: Color = Color::Yellow;

/// Danger / error state - red
pub const COLOR_DANGER: Color = Color::Red;

/// Informational state - cyan
pub const COLOR_INFO: Color = Color::Cyan;

/// Progress bar fill color
pub const COLOR_PROGRESS: Color = Color::White;

/// Progress bar background
pub const COLOR_PROGRESS_BG: Color = Color::DarkGray;

/// Skeleton shimmer base color
pub const COLOR_SKELETON: Color = Color::Rgb(45, 45, 55);
