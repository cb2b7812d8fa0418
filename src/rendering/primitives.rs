// src/rendering/primitives.rs

use crate::model::{Element, Rgb};
use nalgebra::Vector2;
use std::f64::consts::SQRT_2;

/// Circular arc, swept with increasing angle from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularArc {
    pub center: Vector2<f64>,
    pub radius: f64,
    pub start: f64,
    pub end: f64,
}

impl CircularArc {
    pub fn full(center: Vector2<f64>, radius: f64) -> Self {
        Self {
            center,
            radius,
            start: 0.0,
            end: 2.0 * std::f64::consts::PI,
        }
    }

    pub fn point_at(&self, angle: f64) -> Vector2<f64> {
        self.center + Vector2::new(angle.cos(), angle.sin()) * self.radius
    }
}

/// Elliptical arc. `start`/`end` are parametric angles in the ellipse's own
/// frame, which is rotated by `rotation` about `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipticalArc {
    pub center: Vector2<f64>,
    pub rx: f64,
    pub ry: f64,
    pub rotation: f64,
    pub start: f64,
    pub end: f64,
}

impl EllipticalArc {
    pub fn point_at(&self, t: f64) -> Vector2<f64> {
        let local = Vector2::new(self.rx * t.cos(), self.ry * t.sin());
        self.center + crate::utils::linalg::rotate_2d(local, self.rotation)
    }
}

/// One piece of an atom's outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    Ellipse(EllipticalArc),
    Circle(CircularArc),
}

impl PathSegment {
    pub fn start_point(&self) -> Vector2<f64> {
        match self {
            PathSegment::Ellipse(e) => e.point_at(e.start),
            PathSegment::Circle(c) => c.point_at(c.start),
        }
    }

    pub fn end_point(&self) -> Vector2<f64> {
        match self {
            PathSegment::Ellipse(e) => e.point_at(e.end),
            PathSegment::Circle(c) => c.point_at(c.end),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgb,
}

/// Radial shading for one element, in the atom's local frame (origin at the
/// sphere center). Inner circle has zero radius; both circles share `center`.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadingGradient {
    pub center: Vector2<f64>,
    pub middle_radius: f64,
    pub full_radius: f64,
    pub stops: [ColorStop; 6],
}

impl ShadingGradient {
    /// Glossy-sphere shading: highlight a fifth of the radius up and to the
    /// left, reaching out to the far lower-right rim.
    pub fn for_element(element: &Element) -> Self {
        let r = element.radius;
        let center = Vector2::new(-r / 5.0, -r / 5.0);
        let rim = Vector2::new(1.0, 1.0) / SQRT_2 * r;
        let base = element.color;

        Self {
            center,
            middle_radius: 2.0 * r / 3.0,
            full_radius: (center - rim).norm(),
            stops: [
                ColorStop { offset: 0.0, color: base.brighter(0.5) },
                ColorStop { offset: 0.08, color: base.brighter(0.2) },
                ColorStop { offset: 0.4, color: base.darker(0.1) },
                ColorStop { offset: 0.8, color: base.darker(0.4) },
                ColorStop { offset: 0.95, color: base.darker(0.6) },
                ColorStop { offset: 1.0, color: base.darker(0.4) },
            ],
        }
    }
}
