use crate::{
    aabb::AABB,
    math::{num::is_same_sign, vector::Vector, FloatNum},
};

/**
 * useful tools for polygon geometry, every point is relative to the shape centroid
 */

/// unweighted mean of the points, origin for an empty set
pub fn compute_centroid<'a>(points: impl Iterator<Item = &'a Vector>) -> Vector {
    let (sum, count) = points.fold((Vector::ZERO, 0usize), |(sum, count), p| (sum + p, count + 1));
    sum / count as FloatNum
}

pub fn translate_polygon<'a>(points: impl Iterator<Item = &'a mut Vector>, vector: &Vector) {
    points.for_each(|p| *p += vector);
}

pub fn rotate_polygon<'a>(points: impl Iterator<Item = &'a mut Vector>, rad: FloatNum) {
    points.for_each(|p| p.rotate_self(rad));
}

/// shoelace over consecutive pairs, wrapping last to first
///
/// a line or a single point has no area
pub fn compute_area(points: &[Vector]) -> FloatNum {
    if points.len() < 3 {
        return 0.;
    }
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(first, second)| (*first ^ second).abs() * 0.5)
        .sum()
}

/// one unit normal per edge, no edges below three points
pub fn compute_normals(points: &[Vector]) -> Vec<Vector> {
    if points.len() < 3 {
        return vec![];
    }
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(start, end)| (*end - start).normal())
        .collect()
}

/// extremal dot products of `point + offset` with `axis`
pub fn project_points<'a>(
    points: impl Iterator<Item = &'a Vector>,
    offset: &Vector,
    axis: &Vector,
) -> (FloatNum, FloatNum) {
    points.fold((FloatNum::MAX, FloatNum::MIN), |(min, max), p| {
        let size = (*p + offset) * axis;
        (min.min(size), max.max(size))
    })
}

/// box centered at the origin, `extra_rotation` is applied to every point first
pub fn compute_bounds<'a>(
    points: impl Iterator<Item = &'a Vector>,
    extra_rotation: FloatNum,
) -> AABB {
    let mut furthest_x: FloatNum = 0.;
    let mut furthest_y: FloatNum = 0.;
    for p in points {
        let p = if extra_rotation == 0. {
            *p
        } else {
            p.rotate(extra_rotation)
        };
        furthest_x = furthest_x.max(p.x().abs());
        furthest_y = furthest_y.max(p.y().abs());
    }
    AABB::new(Vector::ZERO, furthest_x, furthest_y)
}

/// moment of inertia about the origin, the polygon is split into a fan of
/// triangles (origin, p[i], p[i + 1]) and the mass spread by area
pub fn compute_moment_of_inertia(points: &[Vector], mass: FloatNum) -> FloatNum {
    let total_area = compute_area(points);
    if total_area == 0. {
        // degenerate shape, treat the points as equal point masses
        let point_mass = mass / points.len().max(1) as FloatNum;
        return points.iter().map(|p| p.mag_squared() * point_mass).sum();
    }

    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| {
            let triangle_mass = mass * (*a ^ b).abs() * 0.5 / total_area;
            triangle_mass / 6. * (*a * a + *a * b + *b * b)
        })
        .sum()
}

const ON_EDGE_TOLERANCE: FloatNum = 1e-12;

/// point is relative to the polygon centroid, points on the border are inside
pub fn is_point_inside_convex(points: &[Vector], point: &Vector) -> bool {
    if points.len() < 3 {
        return false;
    }

    let mut reference_side: Option<FloatNum> = None;

    for (start, end) in points.iter().zip(points.iter().cycle().skip(1)) {
        let side = (*end - start) ^ (*point - start);
        if side.abs() <= ON_EDGE_TOLERANCE {
            continue;
        }
        match reference_side {
            None => reference_side = Some(side),
            Some(reference) if !is_same_sign(reference, side) => return false,
            _ => {}
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vector> {
        vec![
            (1., 1.).into(),
            (1., -1.).into(),
            (-1., -1.).into(),
            (-1., 1.).into(),
        ]
    }

    #[test]
    fn test_compute_centroid() {
        let points: Vec<Vector> = vec![(0., 0.).into(), (2., 0.).into(), (1., 3.).into()];
        assert_eq!(compute_centroid(points.iter()), Vector::new(1., 1.));
        assert!(compute_centroid([].iter()).is_zero());
    }

    #[test]
    fn test_compute_area() {
        assert_eq!(compute_area(&square()), 4.);
        assert_eq!(compute_area(&square()[..2]), 0.);
    }

    #[test]
    fn test_compute_normals() {
        let normals = compute_normals(&square());
        assert_eq!(normals.len(), 4);
        // edge (1,1) -> (1,-1) points down, its normal points right
        assert!(normals[0].is_close(&Vector::new(1., 0.), 1e-12));
        assert!(compute_normals(&square()[..2]).is_empty());
    }

    #[test]
    fn test_project_points() {
        let (min, max) = project_points(square().iter(), &Vector::new(3., 0.), &Vector::new(1., 0.));
        assert_eq!((min, max), (2., 4.));

        let single = [Vector::new(2., 5.)];
        let (min, max) = project_points(single.iter(), &Vector::ZERO, &Vector::new(0., 1.));
        assert_eq!((min, max), (5., 5.));
    }

    #[test]
    fn test_compute_bounds() {
        let bounds = compute_bounds(square().iter(), 0.);
        assert_eq!((bounds.half_width(), bounds.half_height()), (1., 1.));

        let rotated = compute_bounds(square().iter(), std::f64::consts::FRAC_PI_4);
        assert!((rotated.half_width() - 2f64.sqrt()).abs() < 1e-12);
        assert!((rotated.half_height() - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_moment_of_inertia_of_square() {
        // solid square of side s: m * s^2 / 6
        let inertia = compute_moment_of_inertia(&square(), 3.);
        assert!((inertia - 3. * 4. / 6.).abs() < 1e-12);
    }

    #[test]
    fn test_point_inside_convex() {
        let square = square();
        assert!(is_point_inside_convex(&square, &Vector::ZERO));
        assert!(is_point_inside_convex(&square, &Vector::new(1., 0.5)));
        assert!(!is_point_inside_convex(&square, &Vector::new(1.5, 0.)));
        assert!(!is_point_inside_convex(&square[..2], &Vector::ZERO));
    }
}
