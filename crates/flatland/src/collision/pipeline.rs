use flatland_macro_tools::Fields;
use serde::{Deserialize, Serialize};

use crate::{
    body::{Body, ID},
    math::vector::Vector,
};

/// a colliding pair, `mtv` moves `a` out of `b`
#[derive(Clone, Copy, Debug, PartialEq, Fields, Serialize, Deserialize)]
#[r]
pub struct CollisionData {
    a: ID,
    b: ID,
    #[r(copy)]
    mtv: Vector,
}

impl CollisionData {
    pub fn new(a: ID, b: ID, mtv: Vector) -> Self {
        Self { a, b, mtv }
    }
}

/// broad phase
#[inline]
pub fn rough_collision(a: &Body, b: &Body) -> bool {
    a.bounds().intersects_aabb(&b.bounds())
}

/// narrow phase
#[inline]
pub fn fine_collision(a: &Body, b: &Body) -> Option<Vector> {
    a.shape().intersects_shape(b.shape())
}

/// the narrow phase only runs for pairs whose bounds overlap
pub fn collision_check(a: &Body, b: &Body) -> Option<CollisionData> {
    if !rough_collision(a, b) {
        return None;
    }
    fine_collision(a, b).map(|mtv| CollisionData::new(a.id(), b.id(), mtv))
}

/// flags both bodies and pushes the movable ones apart
///
/// with `split_position_fix` two dynamic bodies share the correction by
/// inverse mass, otherwise `b` takes all of it.
pub fn resolve_collision(a: &mut Body, b: &mut Body, mtv: Vector, split_position_fix: bool) {
    a.mark_colliding();
    b.mark_colliding();

    match (a.is_static(), b.is_static()) {
        (true, true) => {}
        (true, false) => b.translate(&-mtv),
        (false, true) => a.translate(&mtv),
        (false, false) => {
            let inv_mass_a = a.meta().inv_mass();
            let inv_mass_b = b.meta().inv_mass();
            let total = inv_mass_a + inv_mass_b;

            if split_position_fix && total > 0. {
                a.translate(&(mtv * (inv_mass_a / total)));
                b.translate(&(-mtv * (inv_mass_b / total)));
            } else {
                b.translate(&-mtv);
            }
        }
    }
}
