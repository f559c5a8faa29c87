//! Shape metrics for hulls: area, perimeter, bounding box, convexity ratio,
//! and the Jarvis/Graham agreement check.

use serde::{Deserialize, Serialize};

use crate::hull::cross;
use crate::Point;

/// Absolute shoelace area; `0` below three vertices.
pub fn polygon_area(poly: &[Point]) -> f64 {
    if poly.len() < 3 {
        return 0.0;
    }
    let mut a = 0.0;
    for (i, p) in poly.iter().enumerate() {
        let q = poly[(i + 1) % poly.len()];
        a += p.x * q.y - p.y * q.x;
    }
    a.abs() / 2.0
}

/// Length of the closed polyline; `0` below two vertices.
pub fn perimeter(poly: &[Point]) -> f64 {
    if poly.len() < 2 {
        return 0.0;
    }
    poly.iter()
        .enumerate()
        .map(|(i, p)| (poly[(i + 1) % poly.len()] - p).norm())
        .sum()
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// `None` for an empty set.
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(points[1..].iter().fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }
}

/// Hull area over bounding-box area of the whole set. A flat box counts as area 1.
pub fn convexity_ratio(points: &[Point], hull: &[Point]) -> f64 {
    let bbox = Bounds::of(points).map(|b| b.area()).unwrap_or(0.0);
    let bbox = if bbox == 0.0 { 1.0 } else { bbox };
    polygon_area(hull) / bbox
}

/// Side-by-side check of two hulls of the same input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HullComparison {
    pub jarvis_size: usize,
    pub graham_size: usize,
    pub jarvis_area: f64,
    pub graham_area: f64,
    pub jarvis_perimeter: f64,
    pub graham_perimeter: f64,
}

impl HullComparison {
    pub fn of(jarvis: &[Point], graham: &[Point]) -> Self {
        Self {
            jarvis_size: jarvis.len(),
            graham_size: graham.len(),
            jarvis_area: polygon_area(jarvis),
            graham_area: polygon_area(graham),
            jarvis_perimeter: perimeter(jarvis),
            graham_perimeter: perimeter(graham),
        }
    }

    /// Same vertex count and areas within `max(1e-6, 1e-5 · larger area)`.
    pub fn agrees(&self) -> bool {
        let larger = self.jarvis_area.max(self.graham_area);
        let tol = (1e-5 * larger).max(1e-6);
        self.jarvis_size == self.graham_size && (self.jarvis_area - self.graham_area).abs() <= tol
    }
}

/// `hull` is a counterclockwise convex polygon with every point of `points` on
/// or inside it. Cross products are compared relative to the edge and offset
/// lengths so the check is scale-free.
pub fn is_convex_hull_of(hull: &[Point], points: &[Point]) -> bool {
    const REL: f64 = 1e-9;
    let h = hull.len();
    if h < 3 {
        return true;
    }
    for i in 0..h {
        let a = hull[i];
        let b = hull[(i + 1) % h];
        let c = hull[(i + 2) % h];
        if cross(a, b, c) <= 0.0 {
            return false;
        }
        let edge = (b - a).norm();
        for &r in points {
            let slack = REL * edge * (r - a).norm();
            if cross(a, b, r) < -slack {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]
    }

    #[test]
    fn area_and_perimeter_of_unit_square() {
        let sq = unit_square();
        assert!((polygon_area(&sq) - 1.0).abs() < 1e-12);
        assert!((perimeter(&sq) - 4.0).abs() < 1e-12);
        // Orientation does not matter for the absolute area.
        let rev: Vec<_> = sq.iter().rev().copied().collect();
        assert!((polygon_area(&rev) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_polygons() {
        assert_eq!(polygon_area(&[]), 0.0);
        assert_eq!(perimeter(&[Point::new(3.0, 4.0)]), 0.0);
        // A segment walked there and back.
        assert!((perimeter(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0)]) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn bounds_and_ratio() {
        let pts = vec![
            Point::new(-1.0, 2.0),
            Point::new(3.0, -2.0),
            Point::new(0.0, 0.0),
        ];
        let b = Bounds::of(&pts).unwrap();
        assert_eq!((b.min_x, b.min_y, b.max_x, b.max_y), (-1.0, -2.0, 3.0, 2.0));
        assert_eq!(b.area(), 16.0);
        assert!(Bounds::of(&[]).is_none());

        let sq = unit_square();
        assert!((convexity_ratio(&sq, &sq) - 1.0).abs() < 1e-12);
        // Flat input: bbox area 0 is treated as 1, hull area is 0.
        let flat = vec![Point::new(0.0, 0.0), Point::new(5.0, 0.0)];
        assert_eq!(convexity_ratio(&flat, &flat), 0.0);
    }

    #[test]
    fn comparison_tolerates_rounding_only() {
        let sq = unit_square();
        let mut shifted = sq.clone();
        shifted.rotate_left(2);
        assert!(HullComparison::of(&sq, &shifted).agrees());

        let mut bigger = sq.clone();
        bigger[2] = Point::new(1.1, 1.1);
        assert!(!HullComparison::of(&sq, &bigger).agrees());
        assert!(!HullComparison::of(&sq, &sq[..3]).agrees());
    }

    #[test]
    fn convex_hull_check() {
        let sq = unit_square();
        let inside = vec![Point::new(0.5, 0.5), Point::new(1.0, 0.5)];
        assert!(is_convex_hull_of(&sq, &inside));
        assert!(!is_convex_hull_of(&sq, &[Point::new(1.5, 0.5)]));
        let cw: Vec<_> = sq.iter().rev().copied().collect();
        assert!(!is_convex_hull_of(&cw, &inside));
    }
}
