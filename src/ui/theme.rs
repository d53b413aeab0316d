//! Color theme constants for the console UI.

use ratatui::style::Color;

/// Pane borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Product name and focused elements
pub const COLOR_ACCENT: Color = Color::Cyan;

/// Header text
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Connection phase badges
pub const COLOR_PHASE_CONNECTING: Color = Color::Yellow;
pub const COLOR_PHASE_OPEN: Color = Color::LightGreen;
pub const COLOR_PHASE_CLOSED: Color = Color::Red;

/// Log entry bodies
pub const COLOR_JSON: Color = Color::White;
pub const COLOR_RAW: Color = Color::LightRed;

/// Template key hints
pub const COLOR_KEY_HINT: Color = Color::Black;
pub const COLOR_KEY_HINT_BG: Color = Color::Gray;

/// Close dialog
pub const COLOR_DIALOG_BORDER: Color = Color::Red;
