// src/rendering/recording.rs
// Headless surface that records draw calls instead of rasterizing them.

use super::primitives::{CircularArc, EllipticalArc, ShadingGradient};
use super::scene::ViewTransform;
use super::surface::{CanvasSize, CursorStyle, DrawingSurface};
use crate::error::SurfaceError;
use nalgebra::Vector2;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
  BeginFrame(ViewTransform),
  BeginPath,
  Ellipse(EllipticalArc),
  Circle(CircularArc),
  Fill {
    gradient: ShadingGradient,
    origin: Vector2<f64>,
  },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
  pub ops: Vec<DrawOp>,
  pub canvas: Option<CanvasSize>,
  pub cursor: Option<CursorStyle>,
  pub frames: usize,
}

impl RecordingSurface {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
    self.ops.iter().filter(|op| pred(op)).count()
  }
}

impl DrawingSurface for RecordingSurface {
  fn resize(&mut self, canvas: CanvasSize) -> Result<(), SurfaceError> {
    self.canvas = Some(canvas);
    Ok(())
  }

  fn begin_frame(&mut self, view: &ViewTransform) {
    // keep only the frame being drawn
    self.ops.clear();
    self.frames += 1;
    self.ops.push(DrawOp::BeginFrame(*view));
  }

  fn begin_path(&mut self) {
    self.ops.push(DrawOp::BeginPath);
  }

  fn elliptical_arc_segment(&mut self, arc: &EllipticalArc) {
    self.ops.push(DrawOp::Ellipse(*arc));
  }

  fn circular_arc_segment(&mut self, arc: &CircularArc) {
    self.ops.push(DrawOp::Circle(*arc));
  }

  fn fill_with_radial_gradient(&mut self, gradient: &ShadingGradient, origin: Vector2<f64>) {
    self.ops.push(DrawOp::Fill {
      gradient: gradient.clone(),
      origin,
    });
  }

  fn set_cursor(&mut self, cursor: CursorStyle) {
    self.cursor = Some(cursor);
  }
}
