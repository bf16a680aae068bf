pub mod aabb;
pub mod body;
pub mod collision;
pub mod errors;
pub mod math;
pub mod meta;
pub mod scene;
pub mod shape;
pub mod tools;

pub mod prelude {
    pub use super::aabb::AABB;
    pub use super::body::{Body, BodyBuilder, IdDispatcher, ID};
    pub use super::collision::{
        collision_check, fine_collision, resolve_collision, rough_collision,
        separating_axis_test, CollisionData, Projector,
    };
    pub use super::errors::Error;
    pub use super::math::{vector::Vector, FloatNum};
    pub use super::meta::{
        force::{Force, ForceGroup},
        BodyKind, Color, Mass, Material, MaterialBuilder, Meta,
    };
    pub use super::scene::{context::Context, Scene};
    pub use super::shape::{
        ComputeMomentOfInertia, CompositeModel, ConcretePolygon, GeometryTransformer, SelfClone,
        Shape,
    };
    pub use super::tools::snapshot::BodySnapshot;
}
