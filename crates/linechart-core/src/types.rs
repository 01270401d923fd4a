// File: crates/linechart-core/src/types.rs
// Summary: Shared types and constants (colors, default sizes, label offsets).

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

/// Marker diameter in density-independent pixels.
pub const DEFAULT_CIRCLE_SIZE: f32 = 8.0;
/// Curve stroke width in density-independent pixels.
pub const DEFAULT_STROKE_SIZE: f32 = 2.0;
/// Axis label text size, in raw pixels (not density scaled).
pub const DEFAULT_TEXT_SIZE: f32 = 40.0;
/// Tangent scale used until a valid smoothing factor is set.
pub const DEFAULT_SMOOTH_SIZE: f32 = 0.3;
/// Upper bound (inclusive) for the smoothing factor.
pub const MAX_SMOOTH_SIZE: f32 = 0.5;

/// Packed 32-bit ARGB color (`0xAARRGGBB`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xFFFF_FFFF);
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const GRAY: Color = Color(0xFF88_8888);
    pub const DARK_GRAY: Color = Color(0xFF44_4444);
    /// Default chart line color.
    pub const CHART_BLUE: Color = Color(0xFF00_99CC);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn a(self) -> u8 { (self.0 >> 24) as u8 }
    pub const fn r(self) -> u8 { (self.0 >> 16) as u8 }
    pub const fn g(self) -> u8 { (self.0 >> 8) as u8 }
    pub const fn b(self) -> u8 { self.0 as u8 }

    /// Same hue, alpha channel replaced.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Parses `#RRGGBB` (opaque) or `#AARRGGBB`. The leading `#` is optional.
impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        let bad = || ChartError::InvalidColor(s.to_string());
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        match hex.len() {
            6 => u32::from_str_radix(hex, 16).map(|rgb| Color(0xFF00_0000 | rgb)).map_err(|_| bad()),
            8 => u32::from_str_radix(hex, 16).map(Color).map_err(|_| bad()),
            _ => Err(bad()),
        }
    }
}

/// Margins reserved around the plot for axis labels, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutBox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl LayoutBox {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    /// Same margin on every side.
    pub const fn uniform(v: f32) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal offset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical offset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}

impl Default for LayoutBox {
    fn default() -> Self {
        Self::uniform(DEFAULT_CIRCLE_SIZE / 2.0)
    }
}
