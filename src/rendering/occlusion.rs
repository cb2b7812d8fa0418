// src/rendering/occlusion.rs
//
// Analytic occlusion between interpenetrating spheres.
//
// When two spheres intersect, the nearer one's front surface dips inside the
// farther one around their intersection circle, so the farther sphere shows
// through there. Seen along the view axis that intersection circle projects
// to an ellipse. The nearer atom's disc is therefore bounded by its own
// circle everywhere except a span replaced by part of that ellipse.

use super::scene::ProjectedAtom;
use crate::utils::geometry::{angle_between, circle_intersection};
use crate::utils::linalg::rotate_2d;
use nalgebra::{Vector2, Vector3};
use std::f64::consts::FRAC_PI_2;

/// Tolerance for the overlap test and the silhouette cutoff angle.
pub const CUT_EPSILON: f64 = 1e-7;

/// Direction the viewer looks along (into the screen).
pub fn view_axis() -> Vector3<f64> {
    Vector3::new(0.0, 0.0, -1.0)
}

/// Cut in the occluded atom's local frame, with the other atom along +x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CutGeometry {
    /// circle-circle intersection point
    pub ix: f64,
    pub iy: f64,
    /// ellipse center
    pub cx: f64,
    pub cy: f64,
    /// ellipse semi-axes
    pub rx: f64,
    pub ry: f64,
    pub nx: f64,
    /// half-span of the hidden arc on the atom's own circle
    pub psi: f64,
    /// half-span of the replacement arc in the ellipse's parametrization
    pub alpha: f64,
}

/// A cut oriented in the projected plane, relative to the occluded atom's
/// center. The hidden circular span is `[circle_start, circle_end]`; the
/// replacement elliptical span is `[ellipse_start, ellipse_end]` in a frame
/// rotated by `rotation`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OcclusionArc {
    pub center: Vector2<f64>,
    pub rx: f64,
    pub ry: f64,
    pub rotation: f64,
    pub ellipse_start: f64,
    pub ellipse_end: f64,
    pub circle_start: f64,
    pub circle_end: f64,
}

/// Computes the silhouette cut of a sphere of radius `ra` by an intersecting
/// sphere of radius `rb`.
///
/// `d` is the center-to-center distance, `theta` the angle between the view
/// axis and the line from the cut atom to the other one. Returns `None` when
/// the intersection circle does not reach the disc boundary at this viewing
/// angle, when the other sphere lies toward the viewer (`theta > π/2`), or
/// when the circles do not cross at all (disjoint or nested).
pub fn compute_cut(ra: f64, rb: f64, d: f64, theta: f64) -> Option<CutGeometry> {
    debug_assert!(ra > 0.0 && rb > 0.0, "radii must be positive");
    if !(d > 0.0) || !(theta <= FRAC_PI_2) {
        return None;
    }

    let (ix, iy) = circle_intersection(ra, rb, d)?;
    if iy <= 0.0 {
        return None;
    }

    let (sin_t, cos_t) = theta.sin_cos();

    // Ellipse: the intersection circle seen at angle theta
    let cx = ix * sin_t;
    let cy = 0.0;
    let rx = iy * cos_t;
    let ry = iy;

    // atan2(ix, iy) is the angle past which the circle's rim is visible
    let cutoff_theta = ix.atan2(iy);
    if theta < cutoff_theta - CUT_EPSILON {
        return None;
    }

    let nx = ix / (ra * sin_t);
    if !nx.is_finite() || nx.abs() > 1.0 + CUT_EPSILON {
        return None;
    }
    let nx = nx.clamp(-1.0, 1.0);
    let psi = nx.acos();

    // Ellipse parameter of the point where it meets the circle at psi:
    // atan2(ra*sqrt(1-nx^2)/ry, (ra*nx - cx)/rx). The second argument reduces
    // to ix*cos/(iy*sin); scaling both by iy*sin > 0 keeps the angle finite
    // as rx -> 0 at theta = pi/2.
    let alpha = (ra * (1.0 - nx * nx).sqrt() * sin_t).atan2(ix * cos_t);

    Some(CutGeometry {
        ix,
        iy,
        cx,
        cy,
        rx,
        ry,
        nx,
        psi,
        alpha,
    })
}

impl CutGeometry {
    /// Rotates the cut so the other atom lies at angle `phi`.
    pub fn oriented(&self, phi: f64) -> OcclusionArc {
        OcclusionArc {
            center: rotate_2d(Vector2::new(self.cx, self.cy), phi),
            rx: self.rx,
            ry: self.ry,
            rotation: phi,
            ellipse_start: -self.alpha,
            ellipse_end: self.alpha,
            circle_start: phi - self.psi,
            circle_end: phi + self.psi,
        }
    }
}

/// Cut that `other` (already painted, farther) makes in `atom`'s disc, or
/// `None` when the spheres do not intersect or the cut is invisible.
pub fn occlusion_arc(atom: &ProjectedAtom, other: &ProjectedAtom) -> Option<OcclusionArc> {
    let delta = other.position - atom.position;
    let d = delta.norm();
    if !(d < atom.radius + other.radius - CUT_EPSILON) {
        return None;
    }

    let theta = angle_between(&delta, &view_axis());
    let cut = compute_cut(atom.radius, other.radius, d, theta)?;
    Some(cut.oriented(delta.y.atan2(delta.x)))
}
