//! Raster rendering of grid backgrounds.
//!
//! Lines are white, alpha-blended over the dark background one line at a
//! time, so crossings come out slightly brighter than plain line pixels.

use super::config::{
    DARK_BG, DIAGONAL_OPACITY, DIAGONAL_SPACING, GridConfig, LINE_COLOR, RANDOM_OPACITY_RANGE,
    RANDOM_OPACITY_SPACING,
};
use image::{Rgb, RgbImage};
use rand::Rng;

/// Blend `LINE_COLOR` at `opacity` into one pixel.
#[inline]
fn blend(pixel: &mut Rgb<u8>, opacity: u8) {
    let alpha = u32::from(opacity);
    for (channel, line) in pixel.0.iter_mut().zip(LINE_COLOR.0) {
        let mixed = u32::from(line) * alpha + u32::from(*channel) * (255 - alpha);
        *channel = ((mixed + 127) / 255) as u8;
    }
}

/// Blend a pixel given signed coordinates, ignoring anything off-canvas.
#[inline]
fn blend_at(img: &mut RgbImage, x: i64, y: i64, opacity: u8) {
    if x < 0 || y < 0 || x >= i64::from(img.width()) || y >= i64::from(img.height()) {
        return;
    }
    blend(img.get_pixel_mut(x as u32, y as u32), opacity);
}

/// Pixel offsets covered by a line of `width` centered on its coordinate.
fn thickness(width: u32) -> std::ops::Range<i64> {
    let width = i64::from(width.max(1));
    let start = -(width - 1) / 2;
    start..start + width
}

/// Full-height vertical line at `x`.
fn draw_vertical_line(img: &mut RgbImage, x: u32, line_width: u32, opacity: u8) {
    for dx in thickness(line_width) {
        for y in 0..img.height() {
            blend_at(img, i64::from(x) + dx, i64::from(y), opacity);
        }
    }
}

/// Full-width horizontal line at `y`.
fn draw_horizontal_line(img: &mut RgbImage, y: u32, line_width: u32, opacity: u8) {
    for dy in thickness(line_width) {
        for x in 0..img.width() {
            blend_at(img, i64::from(x), i64::from(y) + dy, opacity);
        }
    }
}

/// A blank canvas in the background color.
pub fn blank_canvas(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, DARK_BG)
}

/// Render an axis-aligned grid.
///
/// Lines sit at every multiple of `config.spacing`, starting at 0, in both
/// directions. A blank configuration yields a plain canvas.
pub fn render_grid(width: u32, height: u32, config: GridConfig) -> RgbImage {
    let mut img = blank_canvas(width, height);
    if config.is_blank() {
        return img;
    }

    let step = config.spacing as usize;
    for x in (0..width).step_by(step) {
        draw_vertical_line(&mut img, x, config.line_width, config.opacity);
    }
    for y in (0..height).step_by(step) {
        draw_horizontal_line(&mut img, y, config.line_width, config.opacity);
    }
    img
}

/// Render two crossing families of 45° lines.
///
/// Line offsets run from `-height` up to `width` in steps of `spacing`, so
/// the lines reach every corner of the canvas.
pub fn render_diagonal_grid(width: u32, height: u32, spacing: u32, opacity: u8) -> RgbImage {
    let mut img = blank_canvas(width, height);
    if spacing == 0 || opacity == 0 {
        return img;
    }

    let h = i64::from(height);
    for offset in (-h..i64::from(width)).step_by(spacing as usize) {
        // bottom-left to top-right
        for t in 0..=h {
            blend_at(&mut img, offset + t, h - t, opacity);
        }
    }
    for offset in (-h..i64::from(width)).step_by(spacing as usize) {
        // top-left to bottom-right
        for t in 0..=h {
            blend_at(&mut img, offset + t, t, opacity);
        }
    }
    img
}

/// [`render_diagonal_grid`] with the stock spacing and opacity.
pub fn render_default_diagonal_grid(width: u32, height: u32) -> RgbImage {
    render_diagonal_grid(width, height, DIAGONAL_SPACING, DIAGONAL_OPACITY)
}

/// Render an axis-aligned grid whose lines each get a random opacity.
pub fn render_random_opacity_grid<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    spacing: u32,
    rng: &mut R,
) -> RgbImage {
    let mut img = blank_canvas(width, height);
    if spacing == 0 {
        return img;
    }

    for x in (0..width).step_by(spacing as usize) {
        let opacity = rng.random_range(RANDOM_OPACITY_RANGE);
        draw_vertical_line(&mut img, x, 1, opacity);
    }
    for y in (0..height).step_by(spacing as usize) {
        let opacity = rng.random_range(RANDOM_OPACITY_RANGE);
        draw_horizontal_line(&mut img, y, 1, opacity);
    }
    img
}

/// [`render_random_opacity_grid`] with the stock spacing.
pub fn render_default_random_opacity_grid<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    rng: &mut R,
) -> RgbImage {
    render_random_opacity_grid(width, height, RANDOM_OPACITY_SPACING, rng)
}
