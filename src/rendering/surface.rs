// src/rendering/surface.rs

use super::primitives::{CircularArc, EllipticalArc, ShadingGradient};
use super::scene::ViewTransform;
use crate::error::SurfaceError;
use nalgebra::Vector2;

/// Logical canvas size plus the device backing scale. Pixel buffers are
/// `width * backing_scale` by `height * backing_scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
  pub width: f64,
  pub height: f64,
  pub backing_scale: f64,
}

impl CanvasSize {
  pub fn new(width: f64, height: f64, backing_scale: f64) -> Result<Self, SurfaceError> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !(valid(width) && valid(height) && valid(backing_scale)) {
      return Err(SurfaceError::InvalidSize {
        width,
        height,
        backing_scale,
      });
    }
    Ok(Self {
      width,
      height,
      backing_scale,
    })
  }

  pub fn pixel_width(&self) -> f64 {
    (self.width * self.backing_scale).round().max(1.0)
  }

  pub fn pixel_height(&self) -> f64 {
    (self.height * self.backing_scale).round().max(1.0)
  }
}

/// Pointer affordance over the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorStyle {
  /// open hand, idle
  Grab,
  /// closed hand, while dragging
  Grabbing,
}

impl CursorStyle {
  /// Cursor names, preferred first, then the fallback.
  pub fn names(&self) -> [&'static str; 2] {
    match self {
      CursorStyle::Grab => ["grab", "pointer"],
      CursorStyle::Grabbing => ["grabbing", "move"],
    }
  }
}

/// What the renderer needs from a 2D canvas.
///
/// Geometry arrives in renderer units; the surface maps it to pixels with the
/// transform given to `begin_frame`. Path segments connect implicitly: each
/// segment starts with a line from the current point, like an HTML canvas or
/// cairo path.
pub trait DrawingSurface {
  /// Reallocates pixel buffers for a new canvas size.
  fn resize(&mut self, canvas: CanvasSize) -> Result<(), SurfaceError>;

  /// Clears the canvas and installs the frame's view transform.
  fn begin_frame(&mut self, view: &ViewTransform);

  fn begin_path(&mut self);

  fn elliptical_arc_segment(&mut self, arc: &EllipticalArc);

  fn circular_arc_segment(&mut self, arc: &CircularArc);

  /// Fills (and consumes) the current path. The gradient is in the atom's
  /// local frame and is translated so its origin sits at `origin`.
  fn fill_with_radial_gradient(&mut self, gradient: &ShadingGradient, origin: Vector2<f64>);

  fn set_cursor(&mut self, cursor: CursorStyle);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn canvas_rejects_degenerate_sizes() {
    assert!(CanvasSize::new(0.0, 10.0, 1.0).is_err());
    assert!(CanvasSize::new(10.0, f64::NAN, 1.0).is_err());
    assert!(CanvasSize::new(10.0, 10.0, -2.0).is_err());
  }

  #[test]
  fn pixel_size_uses_backing_scale() {
    let c = CanvasSize::new(640.0, 480.0, 1.5).unwrap();
    assert_eq!(c.pixel_width(), 960.0);
    assert_eq!(c.pixel_height(), 720.0);
  }
}
