// src/utils/linalg.rs

use nalgebra::{Rotation3, UnitQuaternion, Vector2, Vector3};

/// Axis-aligned box in renderer space.
///
/// Starts out "inverted" (min = +inf, max = -inf) so that including the
/// first volume snaps it to that volume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds3 {
  pub min: Vector3<f64>,
  pub max: Vector3<f64>,
}

impl Bounds3 {
  pub fn nothing() -> Self {
    Self {
      min: Vector3::repeat(f64::INFINITY),
      max: Vector3::repeat(f64::NEG_INFINITY),
    }
  }

  /// Tight box around a sphere.
  pub fn around_sphere(center: &Vector3<f64>, radius: f64) -> Self {
    let r = Vector3::repeat(radius);
    Self {
      min: center - r,
      max: center + r,
    }
  }

  pub fn include(&mut self, other: &Bounds3) {
    self.min = self.min.inf(&other.min);
    self.max = self.max.sup(&other.max);
  }

  pub fn is_empty(&self) -> bool {
    (0..3).any(|i| self.min[i] > self.max[i])
  }

  pub fn center(&self) -> Vector3<f64> {
    (self.min + self.max) * 0.5
  }
}

/// Rotation about the screen-up (Y) axis.
pub fn rotation_y(angle: f64) -> Rotation3<f64> {
  Rotation3::from_axis_angle(&Vector3::y_axis(), angle)
}

/// Quaternion from yaw/roll/pitch.
///
/// Axis convention: yaw turns about X, pitch about Z, roll about Y.
/// Composed as `q_roll * q_pitch * q_yaw`, so yaw is applied first.
pub fn euler_quaternion(yaw: f64, roll: f64, pitch: f64) -> UnitQuaternion<f64> {
  let q_yaw = UnitQuaternion::from_axis_angle(&Vector3::x_axis(), yaw);
  let q_pitch = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), pitch);
  let q_roll = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), roll);
  q_roll * q_pitch * q_yaw
}

/// Same as [`euler_quaternion`], converted to a matrix for bulk application.
pub fn euler_rotation(yaw: f64, roll: f64, pitch: f64) -> Rotation3<f64> {
  euler_quaternion(yaw, roll, pitch).to_rotation_matrix()
}

pub fn rotate_2d(v: Vector2<f64>, angle: f64) -> Vector2<f64> {
  let (s, c) = angle.sin_cos();
  Vector2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}
