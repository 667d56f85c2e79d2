/// Rendering parameters for background images.
use crate::annotate::GridPattern;
use image::Rgb;

/// Canvas width in pixels.
pub const WIDTH: u32 = 1920;

/// Canvas height in pixels.
pub const HEIGHT: u32 = 1080;

/// Background color (#1a1a1a).
pub const DARK_BG: Rgb<u8> = Rgb([26, 26, 26]);

/// Grid line color before opacity is applied.
pub const LINE_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Directory the generator writes into by default.
pub const OUTPUT_DIR: &str = "backgrounds";

/// Spacing of the diagonal variant.
pub const DIAGONAL_SPACING: u32 = 70;
/// Opacity of the diagonal variant's lines.
pub const DIAGONAL_OPACITY: u8 = 8;

/// Spacing of the jittered-opacity variant.
pub const RANDOM_OPACITY_SPACING: u32 = 50;
/// Opacity range (half-open) of the jittered-opacity variant's lines.
pub const RANDOM_OPACITY_RANGE: std::ops::Range<u8> = 5..20;

/// Line layout of an axis-aligned grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Distance between lines in pixels; 0 disables the grid
    pub spacing: u32,
    /// Line alpha over the background, 0-255
    pub opacity: u8,
    /// Line width in pixels
    pub line_width: u32,
}

impl GridConfig {
    /// Whether this configuration draws anything at all.
    #[inline]
    pub const fn is_blank(&self) -> bool {
        self.spacing == 0 || self.opacity == 0 || self.line_width == 0
    }
}

impl GridPattern {
    /// Line layout used to render this pattern's background.
    pub const fn grid_config(self) -> GridConfig {
        let (spacing, opacity, line_width) = match self {
            GridPattern::Fine => (40, 15, 1),
            GridPattern::Medium => (60, 10, 1),
            GridPattern::Coarse => (80, 5, 1),
            GridPattern::Dense => (25, 18, 1),
            GridPattern::Sparse => (100, 8, 1),
            GridPattern::None => (0, 0, 0),
        };
        GridConfig {
            spacing,
            opacity,
            line_width,
        }
    }
}
