use flatland_macro_tools::Shape;

use crate::{
    collision::Projector,
    errors::{Error, Result},
    math::{vector::Vector, FloatNum},
    meta::Mass,
};

use super::{
    utils::compute_centroid, ComputeMomentOfInertia, ConcretePolygon, GeometryTransformer, Shape,
};

/// ordered group of child shapes moved as one
///
/// every child sits at `position + offset`, offsets are measured from the
/// mean of all child points and turn with the composite.
#[derive(Clone, Debug, Shape)]
pub struct CompositeModel {
    shapes: Vec<Box<dyn Shape>>,
    offsets: Vec<Vector>,
    position: Vector,
    rotation: FloatNum,
    area: FloatNum,
}

impl CompositeModel {
    /// the children keep their current layout, their positions become offsets
    pub fn new(shapes: impl IntoIterator<Item = Box<dyn Shape>>) -> Result<Self> {
        let shapes: Vec<Box<dyn Shape>> = shapes.into_iter().collect();
        if shapes.is_empty() {
            return Err(Error::EmptyComposite);
        }

        let mut composite = Self {
            offsets: shapes.iter().map(|shape| shape.position()).collect(),
            shapes,
            position: Vector::ZERO,
            rotation: 0.,
            area: 0.,
        };
        composite.recenter();
        Ok(composite)
    }

    pub fn shape(&self, index: usize) -> Option<&dyn Shape> {
        self.shapes.get(index).map(|shape| &**shape)
    }

    pub fn shapes_len(&self) -> usize {
        self.shapes.len()
    }

    /// `shape` is placed by its current position relative to the composite
    pub fn add_shape(&mut self, shape: impl Into<Box<dyn Shape>>) {
        let shape = shape.into();
        self.offsets.push(shape.position() - self.position);
        self.shapes.push(shape);
        self.recenter();
    }

    /// the last child can not be removed
    pub fn remove_shape(&mut self, index: usize) -> Result<Option<Box<dyn Shape>>> {
        if index >= self.shapes.len() {
            return Ok(None);
        }
        if self.shapes.len() == 1 {
            return Err(Error::EmptyComposite);
        }
        self.offsets.remove(index);
        let shape = self.shapes.remove(index);
        self.recenter();
        Ok(Some(shape))
    }

    // area and centroid follow the children, the composite itself stays in place
    fn recenter(&mut self) {
        self.area = self.shapes.iter().map(|shape| shape.area()).sum();

        let points: Vec<Vector> = self
            .shapes
            .iter()
            .zip(&self.offsets)
            .flat_map(|(shape, offset)| shape.points().into_iter().map(move |p| p + offset))
            .collect();
        let centroid = compute_centroid(points.iter());

        self.offsets.iter_mut().for_each(|offset| *offset -= centroid);
        self.sync_children();
    }

    fn sync_children(&mut self) {
        for (shape, offset) in self.shapes.iter_mut().zip(&self.offsets) {
            shape.set_position(self.position + offset);
        }
    }
}

impl GeometryTransformer for CompositeModel {
    fn position(&self) -> Vector {
        self.position
    }

    fn set_position(&mut self, position: Vector) {
        self.position = position;
        self.sync_children();
    }

    fn rotation(&self) -> FloatNum {
        self.rotation
    }

    fn rotate(&mut self, rad: FloatNum) {
        for (shape, offset) in self.shapes.iter_mut().zip(self.offsets.iter_mut()) {
            shape.rotate(rad);
            offset.rotate_self(rad);
        }
        self.rotation += rad;
        self.sync_children();
    }
}

impl Projector for CompositeModel {
    fn normals(&self) -> Vec<Vector> {
        self.shapes.iter().flat_map(|shape| shape.normals()).collect()
    }

    fn project(&self, axis: &Vector) -> (FloatNum, FloatNum) {
        self.shapes.iter().map(|shape| shape.project(axis)).fold(
            (FloatNum::MAX, FloatNum::MIN),
            |(min, max), (shape_min, shape_max)| (min.min(shape_min), max.max(shape_max)),
        )
    }
}

impl ComputeMomentOfInertia for CompositeModel {
    // parallel axis theorem per child, mass is shared by area
    fn compute_moment_of_inertia(&self, mass: Mass) -> FloatNum {
        let count = self.shapes.len() as FloatNum;
        self.shapes
            .iter()
            .zip(&self.offsets)
            .map(|(shape, offset)| {
                let shape_mass = if self.area > 0. {
                    mass * shape.area() / self.area
                } else {
                    mass / count
                };
                shape.compute_moment_of_inertia(shape_mass) + shape_mass * offset.mag_squared()
            })
            .sum()
    }
}

impl Shape for CompositeModel {
    fn points(&self) -> Vec<Vector> {
        self.shapes
            .iter()
            .zip(&self.offsets)
            .flat_map(|(shape, offset)| shape.points().into_iter().map(move |p| p + offset))
            .collect()
    }

    fn area(&self) -> FloatNum {
        self.area
    }

    fn contains_point(&self, point: &Vector) -> bool {
        self.shapes.iter().any(|shape| shape.contains_point(point))
    }

    fn sub_shapes(&self) -> Vec<&ConcretePolygon> {
        self.shapes.iter().flat_map(|shape| shape.sub_shapes()).collect()
    }

    fn intersects_shape(&self, other: &dyn Shape) -> Option<Vector> {
        self.shapes
            .iter()
            .find_map(|shape| shape.intersects_shape(other))
    }
}
