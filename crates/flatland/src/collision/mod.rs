use crate::math::{vector::Vector, FloatNum};

pub mod pipeline;

pub use pipeline::{collision_check, fine_collision, resolve_collision, rough_collision, CollisionData};

pub trait Projector {
    /// candidate separating axes, one unit normal per edge in edge order
    fn normals(&self) -> Vec<Vector>;

    /// (min, max) of the world points projected onto `axis`
    fn project(&self, axis: &Vector) -> (FloatNum, FloatNum);
}

/// separating axis test between two convex point sets
///
/// axes of `a` are scanned before the axes of `b`, the first axis with the
/// smallest overlap wins. the returned vector moves `a` out of `b`.
pub fn separating_axis_test(a: &dyn Projector, b: &dyn Projector) -> Option<Vector> {
    let mut min_overlap = FloatNum::MAX;
    let mut mtv = None;

    for axis in a.normals().into_iter().chain(b.normals()) {
        if axis.is_zero() {
            continue;
        }

        let (min, max) = a.project(&axis);
        let (other_min, other_max) = b.project(&axis);

        let overlap = max.min(other_max) - min.max(other_min);
        if overlap <= 0. {
            // found a separating axis
            return None;
        }

        if overlap < min_overlap {
            min_overlap = overlap;
            let direction = if min < other_min { -axis } else { axis };
            mtv = Some(direction * overlap);
        }
    }

    mtv
}
