use flatland_macro_tools::Shape;

use crate::{
    collision::{separating_axis_test, Projector},
    errors::{Error, Result},
    math::{tau, vector::Vector, FloatNum},
    meta::Mass,
};

use super::{
    utils::{
        compute_area, compute_centroid, compute_moment_of_inertia, compute_normals,
        is_point_inside_convex, project_points, rotate_polygon, translate_polygon,
    },
    ComputeMomentOfInertia, GeometryTransformer, Shape,
};

/// convex polygon, points are stored around their own centroid
#[derive(Clone, Debug, Shape)]
pub struct ConcretePolygon {
    points: Vec<Vector>,
    position: Vector,
    rotation: FloatNum,
    area: FloatNum,
}

impl ConcretePolygon {
    /// points are recentered so their mean is the origin, at least one point is required
    pub fn new(points: impl IntoIterator<Item = Vector>) -> Result<Self> {
        let points: Vec<Vector> = points.into_iter().collect();
        if points.is_empty() {
            return Err(Error::EmptyPolygon);
        }
        Ok(Self::from_points(points))
    }

    /// first vertex at (0, radius), the others follow clockwise
    pub fn regular(edge_count: usize, radius: FloatNum) -> Result<Self> {
        Self::new(regular_points(edge_count, radius))
    }

    // `points` is never empty here
    fn from_points(mut points: Vec<Vector>) -> Self {
        let centroid = compute_centroid(points.iter());
        translate_polygon(points.iter_mut(), &-centroid);

        let area = compute_area(&points);

        Self {
            points,
            position: Vector::ZERO,
            rotation: 0.,
            area,
        }
    }

    pub fn edge_count(&self) -> usize {
        self.points.len()
    }

    /// twice the mean distance of the points to the centroid
    pub fn diameter(&self) -> FloatNum {
        let total: FloatNum = self.points.iter().map(Vector::mag).sum();
        2. * total / self.points.len() as FloatNum
    }
}

fn regular_points(edge_count: usize, radius: FloatNum) -> impl Iterator<Item = Vector> {
    let step = tau() / edge_count as FloatNum;
    let first = Vector::new(0., radius);
    (0..edge_count).map(move |i| first.rotate(step * i as FloatNum))
}

/// the radius 1 regular triangle
impl Default for ConcretePolygon {
    fn default() -> Self {
        Self::from_points(regular_points(3, 1.).collect())
    }
}

impl GeometryTransformer for ConcretePolygon {
    fn position(&self) -> Vector {
        self.position
    }

    fn set_position(&mut self, position: Vector) {
        self.position = position;
    }

    fn rotation(&self) -> FloatNum {
        self.rotation
    }

    fn rotate(&mut self, rad: FloatNum) {
        rotate_polygon(self.points.iter_mut(), rad);
        self.rotation += rad;
    }
}

impl Projector for ConcretePolygon {
    fn normals(&self) -> Vec<Vector> {
        compute_normals(&self.points)
    }

    fn project(&self, axis: &Vector) -> (FloatNum, FloatNum) {
        project_points(self.points.iter(), &self.position, axis)
    }
}

impl ComputeMomentOfInertia for ConcretePolygon {
    fn compute_moment_of_inertia(&self, mass: Mass) -> FloatNum {
        compute_moment_of_inertia(&self.points, mass)
    }
}

impl Shape for ConcretePolygon {
    fn points(&self) -> Vec<Vector> {
        self.points.clone()
    }

    fn area(&self) -> FloatNum {
        self.area
    }

    fn contains_point(&self, point: &Vector) -> bool {
        is_point_inside_convex(&self.points, &(*point - self.position))
    }

    fn sub_shapes(&self) -> Vec<&ConcretePolygon> {
        vec![self]
    }

    fn intersects_shape(&self, other: &dyn Shape) -> Option<Vector> {
        other
            .sub_shapes()
            .into_iter()
            .find_map(|part| separating_axis_test(self, part))
    }
}
