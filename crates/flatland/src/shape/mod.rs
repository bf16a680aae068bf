use std::fmt::Debug;

use crate::{
    aabb::AABB,
    collision::Projector,
    math::{vector::Vector, FloatNum},
    meta::Mass,
};

pub mod alias;
pub mod composite;
pub mod polygon;
pub mod utils;

pub use composite::CompositeModel;
pub use polygon::ConcretePolygon;

pub trait SelfClone {
    fn self_clone(&self) -> Box<dyn Shape>;
}

/// position and rotation are kept outside of the stored points: rotation is
/// applied to the points when it changes, position is added at query time
pub trait GeometryTransformer {
    fn position(&self) -> Vector;

    fn set_position(&mut self, position: Vector);

    fn rotation(&self) -> FloatNum;

    /// rotate by `rad` relative to the current rotation
    fn rotate(&mut self, rad: FloatNum);

    fn set_rotation(&mut self, rotation: FloatNum) {
        let difference = rotation - self.rotation();
        if difference != 0. {
            self.rotate(difference);
        }
    }
}

pub trait ComputeMomentOfInertia {
    /// moment of inertia about the shape centroid
    fn compute_moment_of_inertia(&self, mass: Mass) -> FloatNum;
}

/// capability contract shared by [`ConcretePolygon`] and [`CompositeModel`]
pub trait Shape: GeometryTransformer + Projector + ComputeMomentOfInertia + SelfClone + Debug {
    /// points relative to the centroid, already rotated, position not applied
    fn points(&self) -> Vec<Vector>;

    fn world_points(&self) -> Vec<Vector> {
        let position = self.position();
        self.points().into_iter().map(|p| p + position).collect()
    }

    fn area(&self) -> FloatNum;

    /// box centered at the origin. `None` measures the current orientation,
    /// `Some(rotation)` the orientation the shape would have at that absolute rotation
    fn calculate_bounds(&self, rotation: Option<FloatNum>) -> AABB {
        let extra_rotation = rotation.map_or(0., |rotation| rotation - self.rotation());
        utils::compute_bounds(self.points().iter(), extra_rotation)
    }

    /// `point` is in world space
    fn contains_point(&self, point: &Vector) -> bool;

    /// flattened convex parts, a polygon is its own only part
    fn sub_shapes(&self) -> Vec<&ConcretePolygon>;

    /// minimum translation vector that moves `self` out of `other`, `None`
    /// when the shapes are separated
    fn intersects_shape(&self, other: &dyn Shape) -> Option<Vector>;
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.self_clone()
    }
}
