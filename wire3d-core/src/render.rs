/// Drawing capability consumed by meshes and scenes
use std::fmt;

use nalgebra::Point2;

use crate::projection::ProjectionMode;

/// Screen-space drawing primitives.
///
/// Meshes never draw themselves; they project their vertices and hand the
/// resulting coordinates to an implementation of this trait.
pub trait Renderer {
    /// Draw a line segment between two screen points.
    fn connect_points(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    /// Draw a vertex marker.
    fn draw_point(&mut self, x: f32, y: f32);

    /// Draw a text label with its origin at `(x, y)`.
    fn draw_label(&mut self, text: &str, x: f32, y: f32);
}

/// What to draw and how to project it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub vertices: bool,
    pub edges: bool,
    pub mode: ProjectionMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            vertices: false,
            edges: true,
            mode: ProjectionMode::Perspective,
        }
    }
}

/// A single recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Line { from: Point2<f32>, to: Point2<f32> },
    Point { at: Point2<f32> },
    Label { text: String, at: Point2<f32> },
}

impl fmt::Display for DrawCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCall::Line { from, to } => write!(
                f,
                "line ({:.2}, {:.2}) -> ({:.2}, {:.2})",
                from.x, from.y, to.x, to.y
            ),
            DrawCall::Point { at } => write!(f, "point ({:.2}, {:.2})", at.x, at.y),
            DrawCall::Label { text, at } => {
                write!(f, "label {:?} ({:.2}, {:.2})", text, at.x, at.y)
            }
        }
    }
}

/// Renderer that keeps every call in order instead of drawing.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Recorded line segments as `(from, to)` pairs
    pub fn lines(&self) -> impl Iterator<Item = (Point2<f32>, Point2<f32>)> + '_ {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Line { from, to } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn connect_points(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.calls.push(DrawCall::Line {
            from: Point2::new(x1, y1),
            to: Point2::new(x2, y2),
        });
    }

    fn draw_point(&mut self, x: f32, y: f32) {
        self.calls.push(DrawCall::Point {
            at: Point2::new(x, y),
        });
    }

    fn draw_label(&mut self, text: &str, x: f32, y: f32) {
        self.calls.push(DrawCall::Label {
            text: text.to_string(),
            at: Point2::new(x, y),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert!(options.edges);
        assert!(!options.vertices);
        assert_eq!(options.mode, ProjectionMode::Perspective);
    }

    #[test]
    fn test_recording_keeps_order() {
        let mut renderer = RecordingRenderer::new();
        renderer.draw_point(1.0, 2.0);
        renderer.connect_points(0.0, 0.0, 3.0, 4.0);
        renderer.draw_label("0", 5.0, 10.0);

        assert_eq!(renderer.calls().len(), 3);
        assert_eq!(renderer.lines().count(), 1);
        assert_eq!(renderer.calls()[1].to_string(), "line (0.00, 0.00) -> (3.00, 4.00)");
        assert_eq!(renderer.calls()[2].to_string(), "label \"0\" (5.00, 10.00)");

        renderer.clear();
        assert!(renderer.calls().is_empty());
    }
}
