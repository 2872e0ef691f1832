//! Shape primitives and pure rasterization functions
//!
//! Every function takes a source buffer by reference and returns a freshly
//! drawn copy; the input is never mutated. Out-of-bounds pixel writes are
//! silently clipped.

use crate::raster::buffer::ColorBuffer;
use crate::raster::color::Color;

/// A drawing primitive produced by one user gesture
///
/// Ephemeral: built from a stroke, rasterized immediately, not persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Straight segment between two points
    Line {
        /// Segment start
        from: [i32; 2],
        /// Segment end
        to: [i32; 2],
        /// Fill color
        color: Color,
    },
    /// Axis-aligned filled rectangle between two corners
    Rect {
        /// First corner
        corner_a: [i32; 2],
        /// Opposite corner
        corner_b: [i32; 2],
        /// Fill color
        color: Color,
    },
    /// Filled circle around a center point
    Circle {
        /// Circle center
        center: [i32; 2],
        /// Radius in pixels
        radius: i32,
        /// Fill color
        color: Color,
    },
}

/// Rasterize a shape onto a copy of the buffer
pub fn draw_shape(buffer: &ColorBuffer, shape: &Shape) -> ColorBuffer {
    match *shape {
        Shape::Line { from, to, color } => draw_line(buffer, from, to, color),
        Shape::Rect {
            corner_a,
            corner_b,
            color,
        } => draw_rect(buffer, corner_a, corner_b, color),
        Shape::Circle {
            center,
            radius,
            color,
        } => draw_circle(buffer, center, radius, color),
    }
}

/// Draw a line segment
///
/// Vertical segments paint the half-open run `[min_y, max_y)` at the shared
/// x. Other segments paint, for each integer x in the half-open domain
/// `[min_x, max_x)`, a vertical block of height `|slope| + 1` centered on
/// the line. The block closes the gaps a single-pixel scan would leave when
/// the slope magnitude exceeds 1. Spans are intersected with the canvas in
/// 64-bit arithmetic, so endpoints anywhere in the i32 range clip instead
/// of overflowing.
pub fn draw_line(buffer: &ColorBuffer, from: [i32; 2], to: [i32; 2], color: Color) -> ColorBuffer {
    let mut out = buffer.clone();
    let [x1, y1] = from;
    let [x2, y2] = to;
    let width = i64::from(out.width());
    let height = i64::from(out.height());

    if x1 == x2 {
        let y_lo = i64::from(y1.min(y2)).max(0);
        let y_hi = i64::from(y1.max(y2)).min(height);
        for y in y_lo..y_hi {
            out.set(x1, y as i32, color);
        }
        return out;
    }

    let slope = (f64::from(y2) - f64::from(y1)) / (f64::from(x2) - f64::from(x1));
    let intercept = slope.mul_add(-f64::from(x1), f64::from(y1));
    let block_height = (slope.abs() as i64).saturating_add(1);

    let x_lo = i64::from(x1.min(x2)).max(0);
    let x_hi = i64::from(x1.max(x2)).min(width);
    for x in x_lo..x_hi {
        let center_y = slope.mul_add(x as f64, intercept).round() as i64;
        let top = center_y.saturating_sub(block_height / 2);
        let y_lo = top.max(0);
        let y_hi = top.saturating_add(block_height).min(height);
        for y in y_lo..y_hi {
            out.set(x as i32, y as i32, color);
        }
    }
    out
}

/// Draw a filled axis-aligned rectangle, inclusive of both corners
///
/// Corners are clamped to the canvas before filling, so a rectangle partly
/// outside the buffer paints only its visible portion.
pub fn draw_rect(
    buffer: &ColorBuffer,
    corner_a: [i32; 2],
    corner_b: [i32; 2],
    color: Color,
) -> ColorBuffer {
    let mut out = buffer.clone();
    let max_x = out.width() as i32 - 1;
    let max_y = out.height() as i32 - 1;

    let x_start = corner_a[0].min(corner_b[0]).clamp(0, max_x);
    let x_end = corner_a[0].max(corner_b[0]).clamp(0, max_x);
    let y_start = corner_a[1].min(corner_b[1]).clamp(0, max_y);
    let y_end = corner_a[1].max(corner_b[1]).clamp(0, max_y);

    for x in x_start..=x_end {
        for y in y_start..=y_end {
            out.set(x, y, color);
        }
    }
    out
}

/// Draw a filled circle
///
/// For each x-offset up to the radius the vertical extent is
/// `ceil(sqrt(r^2 - x^2))`, and every pixel within that extent of the
/// center row is painted, symmetrically in all four quadrants. This fills a
/// slightly blocky disk, an approximation kept for visual compatibility
/// with textures drawn by earlier versions of the tool. Spans are
/// intersected with the canvas in 64-bit arithmetic, so extreme centers
/// and radii clip instead of overflowing.
pub fn draw_circle(
    buffer: &ColorBuffer,
    center: [i32; 2],
    radius: i32,
    color: Color,
) -> ColorBuffer {
    let mut out = buffer.clone();
    let cx = i64::from(center[0]);
    let cy = i64::from(center[1]);
    let radius = i64::from(radius.max(0));

    let x_lo = (cx - radius).max(0);
    let x_hi = (cx + radius).min(i64::from(out.width()) - 1);
    for x in x_lo..=x_hi {
        let dx = x - cx;
        let extent = ((radius * radius - dx * dx) as f64).sqrt().ceil() as i64;
        let y_lo = (cy - extent).max(0);
        let y_hi = (cy + extent).min(i64::from(out.height()) - 1);
        for y in y_lo..=y_hi {
            out.set(x as i32, y as i32, color);
        }
    }
    out
}
