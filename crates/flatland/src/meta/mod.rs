pub mod force;

use flatland_macro_tools::{Builder, Fields};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{Error, Result},
    math::{vector::Vector, FloatNum},
};

pub type Mass = FloatNum;

/// RGBA, every channel in [0, 1]
pub type Color = [FloatNum; 4];

pub const WHITE: Color = [1., 1., 1., 1.];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    /// never integrated, never displaced by collisions
    Static,
    #[default]
    Dynamic,
}

impl BodyKind {
    pub fn is_static(&self) -> bool {
        matches!(self, BodyKind::Static)
    }
}

/// kinematic state of a body
#[derive(Clone, Debug, Fields, Builder)]
#[r]
pub struct Meta {
    #[r(copy)]
    #[w(set, vis(pub(crate)))]
    position: Vector,
    #[w(set, vis(pub(crate)))]
    rotation: FloatNum,

    #[r(copy)]
    #[w(set)]
    velocity: Vector,
    #[w(set)]
    angular_velocity: FloatNum,

    #[r(copy)]
    acceleration: Vector,
    angular_acceleration: FloatNum,

    #[default = 1.0]
    mass: FloatNum,
    #[default = 1.0]
    moment_of_inertia: FloatNum,

    #[r(copy)]
    kind: BodyKind,

    #[builder(skip)]
    #[w(set, vis(pub(crate)))]
    is_colliding: bool,
}

impl Meta {
    pub fn is_static(&self) -> bool {
        self.kind.is_static()
    }

    pub fn inv_mass(&self) -> Mass {
        if self.is_static() || self.mass == 0. {
            0.
        } else {
            self.mass.recip()
        }
    }

    pub fn inv_moment_of_inertia(&self) -> FloatNum {
        if self.is_static() || self.moment_of_inertia == 0. {
            0.
        } else {
            self.moment_of_inertia.recip()
        }
    }

    pub fn set_mass(&mut self, mass: Mass) -> Result<&mut Self> {
        if !mass.is_finite() || mass <= 0. {
            return Err(Error::InvalidMass(mass));
        }
        self.mass = mass;
        Ok(self)
    }

    pub(crate) fn set_moment_of_inertia(&mut self, moment_of_inertia: FloatNum) -> &mut Self {
        self.moment_of_inertia = moment_of_inertia;
        self
    }

    /// one fixed step: a = F / m, v += a, x += v, then the angular terms the same way
    pub(crate) fn integrate(&mut self, net_force: Vector, net_torque: FloatNum) {
        if self.is_static() {
            return;
        }

        self.acceleration = net_force * self.inv_mass();
        self.velocity += self.acceleration;
        self.position += self.velocity;

        self.angular_acceleration = net_torque * self.inv_moment_of_inertia();
        self.angular_velocity += self.angular_acceleration;
        self.rotation += self.angular_velocity;
    }
}

/// density drives the mass, color drives presentation
#[derive(Clone, Copy, Debug, PartialEq, Fields, Builder, Serialize, Deserialize)]
#[r]
pub struct Material {
    #[default = 1.0]
    density: FloatNum,
    #[r(copy)]
    #[default([1., 1., 1., 1.])]
    color: Color,
}

impl Material {
    pub const WOOD: Material = Material {
        density: 0.7,
        color: [0.55, 0.35, 0.15, 1.],
    };

    pub const STONE: Material = Material {
        density: 2.5,
        color: [0.5, 0.5, 0.5, 1.],
    };

    pub const STEEL: Material = Material {
        density: 7.8,
        color: [0.7, 0.75, 0.8, 1.],
    };

    pub const RUBBER: Material = Material {
        density: 1.1,
        color: [0.1, 0.1, 0.1, 1.],
    };

    pub fn new(density: FloatNum, color: Color) -> Result<Self> {
        if !density.is_finite() || density <= 0. {
            return Err(Error::InvalidDensity(density));
        }
        Ok(Self { density, color })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_defaults() {
        let meta = Meta::default();
        assert_eq!(meta.mass(), 1.);
        assert_eq!(meta.kind(), BodyKind::Dynamic);
        assert!(!meta.is_colliding());
        assert!(meta.velocity().is_zero());
    }

    #[test]
    fn test_integrate_order() {
        let mut meta: Meta = MetaBuilder::new().mass(2.).moment_of_inertia(4.).into();
        meta.integrate(Vector::new(4., 0.), 2.);

        assert_eq!(meta.acceleration(), Vector::new(2., 0.));
        assert_eq!(meta.velocity(), Vector::new(2., 0.));
        assert_eq!(meta.position(), Vector::new(2., 0.));
        assert_eq!(meta.angular_acceleration(), 0.5);
        assert_eq!(meta.rotation(), 0.5);

        // velocity carries over, no force means no acceleration
        meta.integrate(Vector::ZERO, 0.);
        assert_eq!(meta.position(), Vector::new(4., 0.));
        assert!(meta.acceleration().is_zero());
    }

    #[test]
    fn test_static_meta_never_moves() {
        let mut meta: Meta = MetaBuilder::new().kind(BodyKind::Static).into();
        meta.integrate(Vector::new(100., 100.), 10.);
        assert!(meta.position().is_zero());
        assert_eq!(meta.rotation(), 0.);
        assert_eq!(meta.inv_mass(), 0.);
    }

    #[test]
    fn test_returned_vectors_are_copies() {
        let mut meta = Meta::default();
        meta.set_velocity((1., 1.));
        let mut velocity = meta.velocity();
        velocity += Vector::new(5., 5.);
        assert_ne!(meta.velocity(), velocity);
        assert_eq!(meta.velocity(), Vector::new(1., 1.));
    }

    #[test]
    fn test_invalid_mass_and_density() {
        let mut meta = Meta::default();
        assert_eq!(meta.set_mass(0.).unwrap_err(), Error::InvalidMass(0.));
        assert!(meta.set_mass(FloatNum::NAN).is_err());
        assert_eq!(meta.set_mass(3.).unwrap().mass(), 3.);

        assert_eq!(Material::new(-1., [0.; 4]).unwrap_err(), Error::InvalidDensity(-1.));
        assert_eq!(Material::new(2., [0.; 4]).unwrap().density(), 2.);
    }

    #[test]
    fn test_material_from_json() {
        let material: Material = serde_json::from_str(r#"{"density":0.5,"color":[1,0,0,1]}"#).unwrap();
        assert_eq!(material.density(), 0.5);
        assert_eq!(material.color(), [1., 0., 0., 1.]);
        assert_eq!(Material::default().density(), 1.);
        assert_eq!(Material::default().color(), WHITE);
        let material: Material = MaterialBuilder::new().density(3.).into();
        assert_eq!(material.color(), WHITE);
    }
}
