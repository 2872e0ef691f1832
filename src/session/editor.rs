//! Tool state machine driving strokes and commits
//!
//! Models the interactive editing flow: idle until a tool is armed, a
//! mouse-down begins a stroke, and the mouse-up builds the corresponding
//! shape, rasterizes it onto a fresh copy of the canvas, and commits the
//! result to the undo history. The brush is the exception: it stamps the
//! working canvas on every drag event and commits once on release.

use crate::io::configuration::BRUSH_RADIUS;
use crate::raster::buffer::ColorBuffer;
use crate::raster::color::Color;
use crate::raster::draw::{Shape, draw_shape};
use crate::raster::transform;
use crate::session::history::VersionHistory;

/// Drawing tool selected in the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// Freehand stamping along the drag path
    Brush,
    /// Line from stroke start to stroke end
    Line,
    /// Rectangle spanned by stroke start and end
    Rect,
    /// Circle centered on stroke start, radius to stroke end
    Circle,
}

#[derive(Debug)]
struct Stroke {
    origin: [i32; 2],
    // Brush strokes accumulate stamps here before the single commit
    working: Option<ColorBuffer>,
}

/// An interactive editing session over one canvas
///
/// Owns the snapshot history exclusively; the canvas visible to callers is
/// always the latest committed snapshot (plus the in-flight brush stroke).
#[derive(Debug)]
pub struct EditSession {
    history: VersionHistory,
    tool: Option<Tool>,
    paint_color: Color,
    stroke: Option<Stroke>,
}

impl EditSession {
    /// Open a session on an initial canvas
    pub const fn new(canvas: ColorBuffer) -> Self {
        Self {
            history: VersionHistory::new(canvas),
            tool: None,
            paint_color: Color::WHITE,
            stroke: None,
        }
    }

    /// The canvas as the user currently sees it
    pub fn canvas(&self) -> &ColorBuffer {
        self.stroke
            .as_ref()
            .and_then(|s| s.working.as_ref())
            .unwrap_or_else(|| self.history.current())
    }

    /// Number of snapshots in the undo history
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Arm a drawing tool; cancels any stroke in flight
    pub fn arm_tool(&mut self, tool: Tool) {
        self.tool = Some(tool);
        self.stroke = None;
    }

    /// Disarm the current tool, returning the session to idle
    pub fn disarm(&mut self) {
        self.tool = None;
        self.stroke = None;
    }

    /// Set the color used by subsequent strokes
    pub const fn set_paint_color(&mut self, color: Color) {
        self.paint_color = color;
    }

    /// Begin a stroke at a canvas position
    ///
    /// A no-op unless a tool is armed. The brush stamps immediately.
    pub fn begin_stroke(&mut self, position: [i32; 2]) {
        let Some(tool) = self.tool else {
            return;
        };

        let working = (tool == Tool::Brush)
            .then(|| self.stamp(self.history.current().clone(), position));
        self.stroke = Some(Stroke {
            origin: position,
            working,
        });
    }

    /// Extend a stroke to a new position
    ///
    /// Only the brush draws during the drag; shape tools wait for release.
    pub fn drag(&mut self, position: [i32; 2]) {
        let color = self.paint_color;
        if let Some(stroke) = &mut self.stroke
            && let Some(canvas) = stroke.working.take()
        {
            stroke.working = Some(stamp_at(canvas, position, color));
        }
    }

    /// Finish the stroke, rasterize its shape, and commit a snapshot
    ///
    /// Returns whether a commit happened; a release without a matching
    /// `begin_stroke` is a no-op.
    pub fn end_stroke(&mut self, position: [i32; 2]) -> bool {
        let (Some(tool), Some(stroke)) = (self.tool, self.stroke.take()) else {
            return false;
        };

        let color = self.paint_color;
        let committed = match tool {
            Tool::Brush => match stroke.working {
                Some(canvas) => stamp_at(canvas, position, color),
                None => self.history.current().clone(),
            },
            Tool::Line => draw_shape(
                self.history.current(),
                &Shape::Line {
                    from: stroke.origin,
                    to: position,
                    color,
                },
            ),
            Tool::Rect => draw_shape(
                self.history.current(),
                &Shape::Rect {
                    corner_a: stroke.origin,
                    corner_b: position,
                    color,
                },
            ),
            Tool::Circle => draw_shape(
                self.history.current(),
                &Shape::Circle {
                    center: stroke.origin,
                    radius: distance(stroke.origin, position),
                    color,
                },
            ),
        };

        self.history.commit(committed);
        true
    }

    /// Rotate the canvas 90 degrees clockwise and commit
    pub fn rotate(&mut self) {
        let rotated = transform::rotate90(self.history.current());
        self.history.commit(rotated);
    }

    /// Flip the canvas vertically and commit
    pub fn flip_y(&mut self) {
        let flipped = transform::flip_y(self.history.current());
        self.history.commit(flipped);
    }

    /// Undo the most recent commit
    ///
    /// Returns whether a snapshot was removed; the history never drops
    /// below the buffer the session opened with.
    pub fn undo(&mut self) -> bool {
        self.stroke = None;
        self.history.undo()
    }

    fn stamp(&self, canvas: ColorBuffer, position: [i32; 2]) -> ColorBuffer {
        stamp_at(canvas, position, self.paint_color)
    }
}

// One brush stamp: a square block centered on the cursor. Writes clip at
// the canvas edge instead of clamping, so off-canvas drags leave no smear.
fn stamp_at(mut canvas: ColorBuffer, position: [i32; 2], color: Color) -> ColorBuffer {
    let [cx, cy] = position;
    for x in cx - BRUSH_RADIUS..cx + BRUSH_RADIUS {
        for y in cy - BRUSH_RADIUS..cy + BRUSH_RADIUS {
            canvas.set(x, y, color);
        }
    }
    canvas
}

fn distance(a: [i32; 2], b: [i32; 2]) -> i32 {
    let dx = (a[0] - b[0]) as f64;
    let dy = (a[1] - b[1]) as f64;
    dy.mul_add(dy, dx * dx).sqrt() as i32
}
