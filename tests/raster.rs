//! Validates primitive rasterization and buffer transforms against the
//! documented pixel-exact behavior

use texturetk::raster::draw::{draw_circle, draw_line, draw_rect, draw_shape};
use texturetk::raster::transform::{composite_layers, flip_y, grayscale_to_gradient, rotate90};
use texturetk::raster::{Color, ColorBuffer, Shape};

const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

fn black_canvas(width: u32, height: u32) -> ColorBuffer {
    match ColorBuffer::filled(width, height, Color::BLACK) {
        Ok(buffer) => buffer,
        Err(e) => unreachable!("canvas construction failed: {e}"),
    }
}

fn checkered(width: u32, height: u32) -> ColorBuffer {
    let result = ColorBuffer::from_fn(width, height, |x, y| {
        Color::new(
            (x % 2) as f32,
            (y % 2) as f32,
            ((x + y) % 3) as f32 / 2.0,
            1.0,
        )
    });
    match result {
        Ok(buffer) => buffer,
        Err(e) => unreachable!("canvas construction failed: {e}"),
    }
}

#[test]
fn test_rect_fills_inclusive_block() {
    let canvas = black_canvas(10, 10);
    let drawn = draw_rect(&canvas, [2, 2], [4, 4], RED);

    for x in 0..10 {
        for y in 0..10 {
            let expected = if (2..=4).contains(&x) && (2..=4).contains(&y) {
                RED
            } else {
                Color::BLACK
            };
            assert_eq!(drawn.get(x, y), Some(expected), "pixel ({x}, {y})");
        }
    }
    // The input buffer is untouched
    assert!(canvas.pixels().all(|&px| px == Color::BLACK));
}

#[test]
fn test_rect_corners_any_order_and_clamped() {
    let canvas = black_canvas(8, 8);
    let a = draw_rect(&canvas, [5, 5], [2, 2], RED);
    let b = draw_rect(&canvas, [2, 2], [5, 5], RED);
    assert_eq!(a, b);

    // A rectangle spilling past the canvas paints only the visible part
    let clipped = draw_rect(&canvas, [6, 6], [20, 20], RED);
    assert_eq!(clipped.get(7, 7), Some(RED));
    assert_eq!(clipped.get(5, 7), Some(Color::BLACK));
}

#[test]
fn test_vertical_line_is_half_open() {
    let canvas = black_canvas(10, 10);
    let drawn = draw_line(&canvas, [0, 0], [0, 5], RED);

    for y in 0..5 {
        assert_eq!(drawn.get(0, y), Some(RED), "pixel (0, {y})");
    }
    // The endpoint row is excluded
    assert_eq!(drawn.get(0, 5), Some(Color::BLACK));
    assert_eq!(drawn.get(1, 2), Some(Color::BLACK));
}

#[test]
fn test_shallow_line_paints_each_column_once() {
    let canvas = black_canvas(10, 10);
    // Slope 0: one pixel per column over the half-open x domain
    let drawn = draw_line(&canvas, [1, 3], [6, 3], RED);
    let painted = drawn.pixels().filter(|&&px| px == RED).count();
    assert_eq!(painted, 5);
    assert_eq!(drawn.get(1, 3), Some(RED));
    assert_eq!(drawn.get(6, 3), Some(Color::BLACK));
}

#[test]
fn test_steep_line_closes_gaps_with_blocks() {
    let canvas = black_canvas(10, 10);
    // Slope 3: every x column paints a block of |m| + 1 = 4 pixels
    let drawn = draw_line(&canvas, [2, 3], [4, 9], RED);
    let painted = drawn.pixels().filter(|&&px| px == RED).count();
    assert_eq!(painted, 8);
}

#[test]
fn test_line_clips_outside_canvas() {
    let canvas = black_canvas(4, 4);
    let drawn = draw_line(&canvas, [-5, -5], [20, 20], RED);
    assert_eq!(drawn.dimensions(), (4, 4));
    // Diagonal through the canvas must paint something, without faulting
    assert!(drawn.pixels().any(|&px| px == RED));
}

#[test]
fn test_circle_symmetry_and_radius_zero() {
    let canvas = black_canvas(21, 21);
    let drawn = draw_circle(&canvas, [10, 10], 5, RED);

    // All four quadrants paint symmetrically
    for (dx, dy) in [(3, 2), (5, 0), (0, 5), (1, 4)] {
        for (sx, sy) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
            let x = 10 + dx * sx;
            let y = 10 + dy * sy;
            assert_eq!(drawn.get(x, y), Some(RED), "pixel ({x}, {y})");
        }
    }
    // Corners of the bounding box stay unpainted
    assert_eq!(drawn.get(15, 15), Some(Color::BLACK));

    let dot = draw_circle(&canvas, [3, 3], 0, RED);
    assert_eq!(dot.get(3, 3), Some(RED));

    // A circle centered off-canvas clips silently
    let clipped = draw_circle(&canvas, [-10, -10], 4, RED);
    assert!(clipped.pixels().all(|&px| px == Color::BLACK));
}

#[test]
fn test_extreme_coordinates_clip_without_fault() {
    let canvas = black_canvas(4, 4);

    // A radius far beyond the canvas floods it completely
    let flooded = draw_circle(&canvas, [2, 2], 50_000, RED);
    assert!(flooded.pixels().all(|&px| px == RED));

    // Center and radius at the i32 extremes must clip, not fault
    let far = draw_circle(&canvas, [i32::MIN, i32::MAX], i32::MAX, RED);
    assert_eq!(far.dimensions(), (4, 4));

    // Line endpoints spanning the full i32 range
    let diagonal = draw_line(&canvas, [i32::MIN, i32::MAX], [i32::MAX, i32::MIN], RED);
    assert_eq!(diagonal.dimensions(), (4, 4));

    // A nearly-vertical line whose block height exceeds i32
    let steep = draw_line(&canvas, [0, i32::MIN], [3, i32::MAX], RED);
    assert_eq!(steep.dimensions(), (4, 4));

    // Vertical span covering the whole i32 range paints the full column
    let column = draw_line(&canvas, [1, i32::MIN], [1, i32::MAX], RED);
    for y in 0..4 {
        assert_eq!(column.get(1, y), Some(RED), "pixel (1, {y})");
    }
}

#[test]
fn test_draw_shape_dispatch() {
    let canvas = black_canvas(10, 10);
    let via_shape = draw_shape(
        &canvas,
        &Shape::Rect {
            corner_a: [1, 1],
            corner_b: [3, 3],
            color: RED,
        },
    );
    let direct = draw_rect(&canvas, [1, 1], [3, 3], RED);
    assert_eq!(via_shape, direct);
}

#[test]
fn test_flip_roundtrip_identity() {
    let buffer = checkered(7, 5);
    assert_eq!(flip_y(&flip_y(&buffer)), buffer);

    // A single flip moves the top row to the bottom
    let flipped = flip_y(&buffer);
    assert_eq!(flipped.get(3, 0), buffer.get(3, 4));
}

#[test]
fn test_rotate_four_times_identity() {
    let square = checkered(6, 6);
    let mut rotated = square.clone();
    for _ in 0..4 {
        rotated = rotate90(&rotated);
    }
    assert_eq!(rotated, square);

    // Non-square buffers swap dimensions and still close the cycle
    let wide = checkered(8, 3);
    let once = rotate90(&wide);
    assert_eq!(once.dimensions(), (3, 8));
    let mut cycled = wide.clone();
    for _ in 0..4 {
        cycled = rotate90(&cycled);
    }
    assert_eq!(cycled, wide);
}

#[test]
fn test_rotate_moves_top_left_to_top_right() {
    let buffer = checkered(4, 4);
    let rotated = rotate90(&buffer);
    assert_eq!(rotated.get(3, 0), buffer.get(0, 0));
}

#[test]
fn test_gradient_with_equal_endpoints_is_constant() {
    let buffer = checkered(5, 5);
    let tint = Color::new(0.2, 0.4, 0.6, 1.0);
    let recolored = grayscale_to_gradient(&buffer, tint, tint);
    assert!(recolored.pixels().all(|&px| px == tint));
}

#[test]
fn test_gradient_maps_black_and_white_to_endpoints() {
    let Ok(buffer) = ColorBuffer::from_fn(2, 1, |x, _| {
        if x == 0 { Color::BLACK } else { Color::WHITE }
    }) else {
        unreachable!("2x1 buffer should construct");
    };
    let start = Color::new(0.1, 0.2, 0.3, 1.0);
    let end = Color::new(0.9, 0.8, 0.7, 1.0);
    let recolored = grayscale_to_gradient(&buffer, start, end);
    assert_eq!(recolored.get(0, 0), Some(start));
    // White luminance accumulates rounding error, so compare approximately
    match recolored.get(1, 0) {
        Some(px) => {
            assert!((px.r - end.r).abs() < 1e-5);
            assert!((px.g - end.g).abs() < 1e-5);
            assert!((px.b - end.b).abs() < 1e-5);
        }
        None => unreachable!("pixel (1, 0) must exist"),
    }
}

#[test]
fn test_single_layer_composite_weighs_own_alpha() {
    let half = Color::new(1.0, 0.5, 0.0, 0.5);
    let Ok(layer) = ColorBuffer::filled(3, 3, half) else {
        unreachable!("3x3 buffer should construct");
    };

    let Ok(merged) = composite_layers(std::slice::from_ref(&layer)) else {
        unreachable!("single-layer composite should succeed");
    };

    // lerp(transparent black, layer, layer.alpha), not the layer itself
    let expected = Color::CLEAR.lerp(half, 0.5);
    assert!(merged.pixels().all(|&px| {
        (px.r - expected.r).abs() < 1e-6
            && (px.g - expected.g).abs() < 1e-6
            && (px.a - expected.a).abs() < 1e-6
    }));
}

#[test]
fn test_opaque_layer_replaces_accumulated() {
    let Ok(bottom) = ColorBuffer::filled(2, 2, Color::new(0.0, 1.0, 0.0, 1.0)) else {
        unreachable!("2x2 buffer should construct");
    };
    let Ok(top) = ColorBuffer::filled(2, 2, RED) else {
        unreachable!("2x2 buffer should construct");
    };

    let Ok(merged) = composite_layers(&[bottom, top]) else {
        unreachable!("composite should succeed");
    };
    assert!(merged.pixels().all(|&px| px == RED));
}

#[test]
fn test_transparent_layer_is_invisible() {
    let Ok(bottom) = ColorBuffer::filled(2, 2, RED) else {
        unreachable!("2x2 buffer should construct");
    };
    let Ok(top) = ColorBuffer::filled(2, 2, Color::CLEAR) else {
        unreachable!("2x2 buffer should construct");
    };

    let Ok(merged) = composite_layers(&[bottom.clone(), top]) else {
        unreachable!("composite should succeed");
    };
    assert_eq!(merged, bottom);
}

#[test]
fn test_composite_rejects_mismatched_and_empty_stacks() {
    let Ok(small) = ColorBuffer::new(2, 2) else {
        unreachable!("2x2 buffer should construct");
    };
    let Ok(large) = ColorBuffer::new(3, 2) else {
        unreachable!("3x2 buffer should construct");
    };

    assert!(composite_layers(&[small, large]).is_err());
    assert!(composite_layers(&[]).is_err());
}
