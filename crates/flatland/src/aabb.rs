use flatland_macro_tools::Fields;
use serde::{Deserialize, Serialize};

use crate::math::{vector::Vector, FloatNum};

/// axis aligned bounding box, used by the broad phase
///
/// half extents are only changed by recomputing them from shape geometry,
/// moving the box keeps them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Fields, Serialize, Deserialize)]
#[r]
pub struct AABB {
    #[r(copy)]
    center: Vector,
    half_width: FloatNum,
    half_height: FloatNum,
}

impl AABB {
    pub fn new(center: impl Into<Vector>, half_width: FloatNum, half_height: FloatNum) -> Self {
        Self {
            center: center.into(),
            half_width: half_width.abs(),
            half_height: half_height.abs(),
        }
    }

    #[inline]
    pub fn set_center(&mut self, center: impl Into<Vector>) {
        self.center = center.into();
    }

    /// overlap on both axes, boxes that only touch do not intersect
    pub fn intersects_aabb(&self, other: &AABB) -> bool {
        let distance = self.center - other.center;
        distance.x().abs() < self.half_width + other.half_width
            && distance.y().abs() < self.half_height + other.half_height
    }

    /// points on the border count as contained
    pub fn contains_point(&self, point: &Vector) -> bool {
        let distance = *point - self.center;
        distance.x().abs() <= self.half_width && distance.y().abs() <= self.half_height
    }

    pub fn min(&self) -> Vector {
        self.center - Vector::new(self.half_width, self.half_height)
    }

    pub fn max(&self) -> Vector {
        self.center + Vector::new(self.half_width, self.half_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn test_negative_extents_are_made_positive() {
        let aabb = AABB::new((0., 0.), -2., -3.);
        assert_eq!(aabb.half_width(), 2.);
        assert_eq!(aabb.half_height(), 3.);
    }

    #[test]
    fn test_intersects() {
        let a = AABB::new((0., 0.), 1., 1.);
        assert!(a.intersects_aabb(&AABB::new((1.5, 0.5), 1., 1.)));
        assert!(!a.intersects_aabb(&AABB::new((2.5, 0.), 1., 1.)));
        assert!(!a.intersects_aabb(&AABB::new((0., -2.5), 1., 1.)));
        // overlapping on x only
        assert!(!a.intersects_aabb(&AABB::new((0.5, 3.), 1., 1.)));
    }

    #[test]
    fn test_touching_boxes_do_not_intersect() {
        let a = AABB::new((0., 0.), 1., 1.);
        let b = AABB::new((-2., 0.), 1., 1.);
        assert!(!a.intersects_aabb(&b));
    }

    #[test]
    fn test_intersects_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let mut random_box = || {
                AABB::new(
                    (rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)),
                    rng.gen_range(0.0..3.0),
                    rng.gen_range(0.0..3.0),
                )
            };
            let a = random_box();
            let b = random_box();
            assert_eq!(a.intersects_aabb(&b), b.intersects_aabb(&a));
        }
    }

    #[test]
    fn test_contains_point() {
        let a = AABB::new((1., 1.), 1., 2.);
        assert!(a.contains_point(&(1., 1.).into()));
        assert!(a.contains_point(&(2., 3.).into()));
        assert!(!a.contains_point(&(2.1, 1.).into()));
        assert!(!a.contains_point(&(1., -1.5).into()));
    }

    #[test]
    fn test_set_center_keeps_extents() {
        let mut a = AABB::new((0., 0.), 1., 2.);
        a.set_center((5., -5.));
        assert_eq!(a.center(), Vector::new(5., -5.));
        assert_eq!((a.half_width(), a.half_height()), (1., 2.));
        assert_eq!(a.min(), Vector::new(4., -7.));
        assert_eq!(a.max(), Vector::new(6., -3.));
    }
}
