// Theme module
// Four-color presentation theme attached to calendar events

use serde::Serialize;

/// Presentation colors for one study's events. Values are CSS color
/// strings taken from a fixed build-time palette; the struct is `Copy`
/// so events can carry it by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorTheme {
    pub primary: &'static str,
    pub background: &'static str,
    pub border: &'static str,
    pub glow: &'static str,
}

impl ColorTheme {
    pub const fn new(
        primary: &'static str,
        background: &'static str,
        border: &'static str,
        glow: &'static str,
    ) -> Self {
        Self {
            primary,
            background,
            border,
            glow,
        }
    }
}
