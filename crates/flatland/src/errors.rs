use std::fmt::Display;

use crate::{body::ID, math::FloatNum};

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// a polygon needs at least one point
    EmptyPolygon,
    /// a composite needs at least one child shape
    EmptyComposite,
    /// a body was built without a material and without a color
    MissingAppearance,
    InvalidDensity(FloatNum),
    InvalidMass(FloatNum),
    BodyNotFound(ID),
    IdExhausted,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Error::*;
        match self {
            EmptyPolygon => f.write_str("polygon must be built from at least one point"),
            EmptyComposite => f.write_str("composite must contain at least one shape"),
            MissingAppearance => f.write_str("body needs either a material or a color"),
            InvalidDensity(density) => {
                write!(f, "density must be finite and positive, got {density}")
            }
            InvalidMass(mass) => write!(f, "mass must be finite and positive, got {mass}"),
            BodyNotFound(id) => write!(f, "no body with id {id}"),
            IdExhausted => f.write_str("body id space exhausted"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
