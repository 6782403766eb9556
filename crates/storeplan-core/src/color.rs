//! RGBA color value type.
//!
//! Replaces ad-hoc `rgba(...)` string interpolation with a small value type
//! so alpha toggling (e.g. hiding a border without forgetting its color) is a
//! single field change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGBA color. Alpha is 0.0 (transparent) to 1.0 (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Returns the same color with a different alpha channel.
    pub fn with_alpha(&self, a: f32) -> Color {
        debug_assert!((0.0..=1.0).contains(&a), "alpha must be in [0, 1], got {a}");
        Color { a, ..*self }
    }

    /// Fully transparent rendering of this color; RGB channels are kept so the
    /// color can be restored later.
    pub fn transparent(&self) -> Color {
        self.with_alpha(0.0)
    }

    /// CSS `rgba(...)` rendering used by the canvas layer.
    pub fn to_css_string(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_string() {
        let c = Color::opaque(51, 51, 51);
        assert_eq!(c.to_css_string(), "rgba(51,51,51,1)");
    }

    #[test]
    fn test_transparent_keeps_rgb() {
        let c = Color::new(200, 100, 0, 0.8);
        let t = c.transparent();
        assert_eq!(t.a, 0.0);
        assert_eq!((t.r, t.g, t.b), (200, 100, 0));
        // The original is untouched and can be re-applied.
        assert_eq!(c.a, 0.8);
    }

    #[test]
    fn test_with_alpha() {
        let c = Color::opaque(0, 0, 0).with_alpha(0.5);
        assert_eq!(c.to_css_string(), "rgba(0,0,0,0.5)");
    }
}
