// src/interactions.rs
// Drag-to-rotate with idle auto-spin.

use crate::rendering::{CursorStyle, ProjectedAtom};
use crate::utils::linalg::{euler_rotation, rotation_y};
use nalgebra::{Rotation3, Vector2};

/// Idle angular velocity, radians per second of sim time.
pub const SPIN_RATE: f64 = 1.0;

/// Radians per canvas width of drag.
pub const DRAG_SENSITIVITY: f64 = 4.0;

/// Pointer input in surface pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
  Down(Vector2<f64>),
  Move(Vector2<f64>),
  Up(Vector2<f64>),
  Cancel(Vector2<f64>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
  Idle,
  Dragging,
}

/// Turns ticks and pointer samples into incremental rotations.
///
/// Orientation is never stored here; each step's rotation is baked straight
/// into the atom positions. Only the last two pointer samples persist.
#[derive(Clone, Debug)]
pub struct RotationController {
  mode: DragMode,
  last: Vector2<f64>,
  current: Vector2<f64>,
  spin_rate: f64,
  drag_sensitivity: f64,
}

impl Default for RotationController {
  fn default() -> Self {
    Self::new(SPIN_RATE, DRAG_SENSITIVITY)
  }
}

impl RotationController {
  pub fn new(spin_rate: f64, drag_sensitivity: f64) -> Self {
    Self {
      mode: DragMode::Idle,
      last: Vector2::zeros(),
      current: Vector2::zeros(),
      spin_rate,
      drag_sensitivity,
    }
  }

  pub fn mode(&self) -> DragMode {
    self.mode
  }

  pub fn cursor(&self) -> CursorStyle {
    match self.mode {
      DragMode::Idle => CursorStyle::Grab,
      DragMode::Dragging => CursorStyle::Grabbing,
    }
  }

  /// Feeds one pointer event. Returns true when the drag mode (and with it
  /// the cursor) changed.
  pub fn handle(&mut self, event: &PointerEvent) -> bool {
    match *event {
      PointerEvent::Down(p) | PointerEvent::Move(p) if !is_finite(&p) => {
        log::debug!("Ignoring non-finite pointer sample {:?}", event);
        false
      }
      PointerEvent::Down(p) => {
        if self.mode == DragMode::Dragging {
          return false;
        }
        self.mode = DragMode::Dragging;
        self.last = p;
        self.current = p;
        true
      }
      PointerEvent::Move(p) => {
        // sampled only; the rotation happens on the next tick
        if self.mode == DragMode::Dragging {
          self.current = p;
        }
        false
      }
      PointerEvent::Up(_) | PointerEvent::Cancel(_) => {
        let was_dragging = self.mode == DragMode::Dragging;
        self.mode = DragMode::Idle;
        was_dragging
      }
    }
  }

  /// Rotation for a tick of `dt` seconds on a canvas `pixel_width` wide.
  ///
  /// Any pointer movement since the last tick (including a final movement
  /// sampled just before release) becomes a drag rotation; otherwise the
  /// assembly spins about the screen-up axis.
  ///
  /// A non-finite `dt` is treated as zero elapsed time.
  pub fn step(&mut self, dt: f64, pixel_width: f64) -> Rotation3<f64> {
    let dt = if dt.is_finite() { dt } else { 0.0 };
    if self.current == self.last || !(pixel_width > 0.0) {
      return rotation_y(dt * self.spin_rate);
    }

    let k = self.drag_sensitivity / pixel_width;
    let delta = self.current - self.last;
    self.last = self.current;
    euler_rotation(-delta.y * k, delta.x * k, 0.0)
  }
}

fn is_finite(p: &Vector2<f64>) -> bool {
  p.x.is_finite() && p.y.is_finite()
}

/// Applies `rotation` about the origin to every atom, in place.
pub fn apply_rotation(atoms: &mut [ProjectedAtom], rotation: &Rotation3<f64>) {
  for atom in atoms {
    atom.position = rotation * atom.position;
  }
}
