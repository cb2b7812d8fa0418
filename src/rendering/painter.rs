// src/rendering/painter.rs
// Back-to-front painter with analytic cuts between intersecting atoms.
//
// Atoms are painted in ascending depth. Each atom's disc is cut against every
// atom painted before it, so where a farther sphere pokes through the nearer
// one's surface the farther one stays visible. Only pairwise cuts are
// resolved: when cuts from several neighbors overlap on the same rim the
// assembled outline is not an exact n-way silhouette.

use super::gradient_cache::GradientCache;
use super::occlusion::{occlusion_arc, OcclusionArc};
use super::primitives::{CircularArc, EllipticalArc, PathSegment};
use super::scene::{ProjectedAtom, ViewTransform};
use super::surface::DrawingSurface;
use nalgebra::Vector2;
use std::cmp::Ordering;
use std::f64::consts::PI;

/// Outline of one atom's visible region, in renderer units.
#[derive(Clone, Debug, PartialEq)]
pub struct AtomPath {
    /// index into the atom slice the frame was planned from
    pub atom: usize,
    pub center: Vector2<f64>,
    pub segments: Vec<PathSegment>,
}

impl AtomPath {
    pub fn is_full_disc(&self) -> bool {
        matches!(self.segments.as_slice(), [PathSegment::Circle(_)])
    }
}

// ============================================================================
// DEPTH ORDER
// ============================================================================

/// Indices sorted far to near (ascending z). Stable, so ties keep input order.
pub fn depth_order(atoms: &[ProjectedAtom]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..atoms.len()).collect();
    order.sort_by(|&a, &b| {
        atoms[a]
            .position
            .z
            .partial_cmp(&atoms[b].position.z)
            .unwrap_or(Ordering::Equal) // NaN-safe
    });
    order
}

// ============================================================================
// PATH ASSEMBLY
// ============================================================================

/// Closed outline for a disc at `center` with the given cuts.
///
/// Cuts are walked in order of their circular start angle; each contributes
/// its elliptical arc, followed by the atom's own circle up to the next cut
/// (the last one wraps to the first, one turn later).
pub fn assemble_path(center: Vector2<f64>, radius: f64, mut arcs: Vec<OcclusionArc>) -> Vec<PathSegment> {
    if arcs.is_empty() {
        return vec![PathSegment::Circle(CircularArc::full(center, radius))];
    }

    arcs.sort_by(|a, b| {
        a.circle_start
            .partial_cmp(&b.circle_start)
            .unwrap_or(Ordering::Equal)
    });

    let mut segments = Vec::with_capacity(arcs.len() * 2);
    for (j, arc) in arcs.iter().enumerate() {
        segments.push(PathSegment::Ellipse(EllipticalArc {
            center: center + arc.center,
            rx: arc.rx,
            ry: arc.ry,
            rotation: arc.rotation,
            start: arc.ellipse_start,
            end: arc.ellipse_end,
        }));

        let next_start = match arcs.get(j + 1) {
            Some(next) => next.circle_start,
            None => arcs[0].circle_start + 2.0 * PI,
        };
        segments.push(PathSegment::Circle(CircularArc {
            center,
            radius,
            start: arc.circle_end,
            end: next_start,
        }));
    }
    segments
}

/// Plans every atom's outline for one frame, in paint order.
pub fn plan_frame(atoms: &[ProjectedAtom]) -> Vec<AtomPath> {
    let order = depth_order(atoms);

    order
        .iter()
        .enumerate()
        .map(|(i, &idx)| {
            let atom = &atoms[idx];
            let center = atom.screen_pos();

            // Everything painted earlier is farther back
            let arcs: Vec<OcclusionArc> = order[..i]
                .iter()
                .filter_map(|&k| occlusion_arc(atom, &atoms[k]))
                .collect();

            AtomPath {
                atom: idx,
                center,
                segments: assemble_path(center, atom.radius, arcs),
            }
        })
        .collect()
}

// ============================================================================
// MAIN STRUCTURE DRAWING
// ============================================================================

/// Paints one frame. Returns the outlines that were filled, in paint order.
pub fn draw_structure<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    atoms: &[ProjectedAtom],
    gradients: &mut GradientCache,
    view: &ViewTransform,
) -> Vec<AtomPath> {
    surface.begin_frame(view);

    let paths = plan_frame(atoms);
    for path in &paths {
        let atom = &atoms[path.atom];
        let gradient = gradients.get_or_insert(&atom.element);

        surface.begin_path();
        for segment in &path.segments {
            match segment {
                PathSegment::Ellipse(e) => surface.elliptical_arc_segment(e),
                PathSegment::Circle(c) => surface.circular_arc_segment(c),
            }
        }
        surface.fill_with_radial_gradient(&gradient, path.center);
    }
    paths
}
