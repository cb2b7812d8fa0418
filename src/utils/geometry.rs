// src/utils/geometry.rs

use nalgebra::Vector3;

/// Angle in radians between two vectors, 0 if either is zero-length.
pub fn angle_between(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.angle(b)
}

/// Intersection of a circle of radius `ra` at the origin with a circle of
/// radius `rb` centered at `(d, 0)`.
///
/// Returns the upper intersection point `(ix, iy)`, or `None` when the
/// circles do not cross (disjoint, or one inside the other).
pub fn circle_intersection(ra: f64, rb: f64, d: f64) -> Option<(f64, f64)> {
    if d <= 0.0 {
        return None;
    }
    let ix = (d * d + ra * ra - rb * rb) / (2.0 * d);
    let t = ix / ra;
    if !(t.abs() <= 1.0) {
        return None;
    }
    let iy = ra * (1.0 - t * t).sqrt();
    Some((ix, iy))
}

/// Squared distances between every pair of points, in (i, j) i < j order.
pub fn pairwise_distances_sq(points: &[Vector3<f64>]) -> Vec<f64> {
    let mut out = Vec::with_capacity(points.len() * points.len().saturating_sub(1) / 2);
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            out.push((p - q).norm_squared());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn intersection_lies_on_both_circles() {
        let (ra, rb, d) = (50.0, 30.0, 60.0);
        let (ix, iy) = circle_intersection(ra, rb, d).unwrap();
        assert!((ix - 43.333_333).abs() < 1e-3);
        assert!((iy - 24.944).abs() < 1e-3);
        assert!((ix * ix + iy * iy - ra * ra).abs() < 1e-9);
        assert!((iy * iy + (d - ix) * (d - ix) - rb * rb).abs() < 1e-9);
    }

    #[test]
    fn intersection_holds_across_configurations() {
        for &(ra, rb) in &[(40.0, 40.0), (10.0, 35.0), (77.0, 37.0)] {
            let lo = f64::abs(ra - rb) + 1e-3;
            let hi = ra + rb - 1e-3;
            for step in 0..=10 {
                let d = lo + (hi - lo) * step as f64 / 10.0;
                let (ix, iy) = circle_intersection(ra, rb, d).unwrap();
                assert!((ix * ix + iy * iy - ra * ra).abs() < 1e-6 * ra * ra);
                assert!((iy * iy + (d - ix) * (d - ix) - rb * rb).abs() < 1e-6 * ra * ra);
            }
        }
    }

    #[test]
    fn contained_or_disjoint_circles_do_not_intersect() {
        assert!(circle_intersection(50.0, 10.0, 5.0).is_none());
        assert!(circle_intersection(10.0, 50.0, 5.0).is_none());
        assert!(circle_intersection(10.0, 10.0, 25.0).is_none());
        assert!(circle_intersection(10.0, 10.0, 0.0).is_none());
    }

    #[test]
    fn angle_between_axes() {
        let a = angle_between(&Vector3::new(-70.0, 0.0, 0.0), &Vector3::new(0.0, 0.0, -1.0));
        assert!((a - FRAC_PI_2).abs() < 1e-12);
        assert_eq!(angle_between(&Vector3::zeros(), &Vector3::z()), 0.0);
    }

    #[test]
    fn pairwise_count() {
        let pts = vec![Vector3::zeros(), Vector3::x(), Vector3::y()];
        let d = pairwise_distances_sq(&pts);
        assert_eq!(d, vec![1.0, 1.0, 2.0]);
    }
}
