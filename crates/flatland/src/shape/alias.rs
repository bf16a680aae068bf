use crate::{
    errors::Result,
    math::{vector::Vector, FloatNum},
    shape::{ConcretePolygon, Shape},
};

impl<T: Shape + 'static> From<T> for Box<dyn Shape> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

// create polygon from raw coordinates
impl TryFrom<&[(FloatNum, FloatNum)]> for ConcretePolygon {
    type Error = crate::errors::Error;

    fn try_from(points: &[(FloatNum, FloatNum)]) -> Result<Self> {
        ConcretePolygon::new(points.iter().copied().map(Vector::from))
    }
}

// create regular polygon from (edge count, radius)
impl TryFrom<(usize, FloatNum)> for ConcretePolygon {
    type Error = crate::errors::Error;

    fn try_from((edge_count, radius): (usize, FloatNum)) -> Result<Self> {
        ConcretePolygon::regular(edge_count, radius)
    }
}
