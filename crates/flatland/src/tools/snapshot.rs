use serde::{Deserialize, Serialize};

use crate::{
    body::{Body, ID},
    math::{vector::Vector, FloatNum},
    meta::Color,
    shape::Shape,
};

/// read only view of a body, enough to draw it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySnapshot {
    pub id: ID,
    pub position: Vector,
    pub rotation: FloatNum,
    pub velocity: Vector,
    pub angular_velocity: FloatNum,
    pub color: Color,
    pub is_colliding: bool,
    pub is_static: bool,
    /// world space polygons, one per convex part
    pub shape_points: Vec<Vec<Vector>>,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        let shape_points = body
            .shape()
            .sub_shapes()
            .into_iter()
            .map(|polygon| polygon.world_points())
            .collect();

        Self {
            id: body.id(),
            position: body.position(),
            rotation: body.rotation(),
            velocity: body.velocity(),
            angular_velocity: body.angular_velocity(),
            color: body.color(),
            is_colliding: body.is_colliding(),
            is_static: body.is_static(),
            shape_points,
        }
    }
}
