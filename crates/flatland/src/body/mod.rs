use flatland_macro_tools::Fields;

use crate::{
    aabb::AABB,
    errors::{Error, Result},
    math::{vector::Vector, FloatNum},
    meta::{
        force::{Force, ForceGroup},
        BodyKind, Color, Material, Meta, MetaBuilder,
    },
    shape::Shape,
};

pub type ID = u32;

/// hands out body ids, an id is never handed out twice
#[derive(Clone, Debug, Default)]
pub struct IdDispatcher {
    next_id: ID,
}

impl IdDispatcher {
    pub fn new() -> Self {
        Default::default()
    }

    /// continue counting from `next_id`
    pub fn starting_at(next_id: ID) -> Self {
        Self { next_id }
    }

    pub fn gen_id(&mut self) -> Result<ID> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(Error::IdExhausted)?;
        Ok(id)
    }
}

#[derive(Clone, Debug)]
pub struct BodyBuilder {
    shape: Box<dyn Shape>,
    position: Vector,
    rotation: FloatNum,
    velocity: Vector,
    angular_velocity: FloatNum,
    kind: BodyKind,
    material: Option<Material>,
    color: Option<Color>,
    mass: Option<FloatNum>,
}

impl BodyBuilder {
    pub fn new(shape: impl Into<Box<dyn Shape>>) -> Self {
        Self {
            shape: shape.into(),
            position: Vector::ZERO,
            rotation: 0.,
            velocity: Vector::ZERO,
            angular_velocity: 0.,
            kind: BodyKind::Dynamic,
            material: None,
            color: None,
            mass: None,
        }
    }

    pub fn shape(mut self, shape: impl Into<Box<dyn Shape>>) -> Self {
        self.shape = shape.into();
        self
    }

    pub fn position(mut self, position: impl Into<Vector>) -> Self {
        self.position = position.into();
        self
    }

    pub fn rotation(mut self, rotation: FloatNum) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn velocity(mut self, velocity: impl Into<Vector>) -> Self {
        self.velocity = velocity.into();
        self
    }

    pub fn angular_velocity(mut self, angular_velocity: FloatNum) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    pub fn kind(mut self, kind: BodyKind) -> Self {
        self.kind = kind;
        self
    }

    /// shortcut for a body that never moves
    pub fn fixed(self) -> Self {
        self.kind(BodyKind::Static)
    }

    pub fn material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// overrides the mass derived from density and area
    pub fn mass(mut self, mass: FloatNum) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn build(self, id_dispatcher: &mut IdDispatcher) -> Result<Body> {
        let color = match (&self.material, self.color) {
            (Some(material), _) => material.color(),
            (None, Some(color)) => color,
            (None, None) => return Err(Error::MissingAppearance),
        };

        if let Some(material) = &self.material {
            let density = material.density();
            if !density.is_finite() || density <= 0. {
                return Err(Error::InvalidDensity(density));
            }
        }

        let mut shape = self.shape;
        shape.set_rotation(self.rotation);
        shape.set_position(self.position);

        let density = self.material.map_or(1., |material| material.density());
        let mass = match self.mass {
            Some(mass) if !mass.is_finite() || mass <= 0. => return Err(Error::InvalidMass(mass)),
            Some(mass) => mass,
            None => density * shape.area(),
        };
        // a degenerate shape has no area, a dynamic body needs a usable mass
        if !self.kind.is_static() && (mass.is_nan() || mass <= 0.) {
            return Err(Error::InvalidMass(mass));
        }

        let meta: Meta = MetaBuilder::new()
            .position(self.position)
            .rotation(self.rotation)
            .velocity(self.velocity)
            .angular_velocity(self.angular_velocity)
            .mass(mass)
            .moment_of_inertia(shape.compute_moment_of_inertia(mass))
            .kind(self.kind)
            .into();

        let mut bounds = shape.calculate_bounds(None);
        bounds.set_center(self.position);

        let id = id_dispatcher.gen_id()?;

        Ok(Body {
            id,
            shape,
            bounds,
            meta,
            forces: ForceGroup::new(),
            material: self.material,
            color,
        })
    }
}

/// a shape with kinematic state, owned bounds always match the shape
#[derive(Clone, Debug, Fields)]
#[r]
pub struct Body {
    id: ID,
    #[r(skip)]
    shape: Box<dyn Shape>,
    #[r(copy)]
    bounds: AABB,
    meta: Meta,
    #[r(skip)]
    forces: ForceGroup,
    #[r(copy)]
    material: Option<Material>,
    #[r(copy)]
    color: Color,
}

impl Body {
    pub fn shape(&self) -> &dyn Shape {
        &*self.shape
    }

    pub fn forces(&self) -> &ForceGroup {
        &self.forces
    }

    pub fn position(&self) -> Vector {
        self.meta.position()
    }

    pub fn rotation(&self) -> FloatNum {
        self.meta.rotation()
    }

    pub fn velocity(&self) -> Vector {
        self.meta.velocity()
    }

    pub fn angular_velocity(&self) -> FloatNum {
        self.meta.angular_velocity()
    }

    pub fn acceleration(&self) -> Vector {
        self.meta.acceleration()
    }

    pub fn angular_acceleration(&self) -> FloatNum {
        self.meta.angular_acceleration()
    }

    pub fn mass(&self) -> FloatNum {
        self.meta.mass()
    }

    pub fn is_static(&self) -> bool {
        self.meta.is_static()
    }

    pub fn is_colliding(&self) -> bool {
        self.meta.is_colliding()
    }

    pub fn set_position(&mut self, position: impl Into<Vector>) {
        let position = position.into();
        self.meta.set_position(position);
        self.shape.set_position(position);
        self.bounds.set_center(position);
    }

    pub fn translate(&mut self, translation: &Vector) {
        self.set_position(self.position() + translation);
    }

    /// absolute rotation, the bounds are measured again
    pub fn set_rotation(&mut self, rotation: FloatNum) {
        self.meta.set_rotation(rotation);
        self.shape.set_rotation(rotation);
        self.bounds = self.shape.calculate_bounds(None);
        self.bounds.set_center(self.position());
    }

    pub fn set_velocity(&mut self, velocity: impl Into<Vector>) {
        self.meta.set_velocity(velocity);
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: FloatNum) {
        self.meta.set_angular_velocity(angular_velocity);
    }

    /// moment of inertia follows the new mass
    pub fn set_mass(&mut self, mass: FloatNum) -> Result<()> {
        self.meta.set_mass(mass)?;
        let moment_of_inertia = self.shape.compute_moment_of_inertia(mass);
        self.meta.set_moment_of_inertia(moment_of_inertia);
        Ok(())
    }

    /// acts on the next step only
    pub fn apply_force(&mut self, force: impl Into<Vector>) {
        self.forces.push(force.into());
    }

    pub fn apply_torque(&mut self, torque: FloatNum) {
        self.forces.add_torque(torque);
    }

    pub fn add_force(&mut self, force: Force) {
        self.forces.add_force(force);
    }

    pub fn remove_force(&mut self, id: &str) -> Option<Force> {
        self.forces.remove_force(id)
    }

    pub(crate) fn mark_colliding(&mut self) {
        self.meta.set_is_colliding(true);
    }

    /// one fixed tick, static bodies only drop their temporary forces
    pub fn step(&mut self) {
        self.meta.set_is_colliding(false);

        if !self.is_static() {
            let previous_rotation = self.rotation();
            self.meta
                .integrate(self.forces.net_force(), self.forces.net_torque());

            let rotation = self.rotation();
            if rotation != previous_rotation {
                self.set_rotation(rotation);
            }
            self.set_position(self.position());
        }

        self.forces.consume();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ConcretePolygon;

    fn square() -> ConcretePolygon {
        ConcretePolygon::new([(1., 1.), (1., -1.), (-1., -1.), (-1., 1.)].map(Vector::from)).unwrap()
    }

    #[test]
    fn test_id_dispatcher() {
        let mut ids = IdDispatcher::new();
        assert_eq!(ids.gen_id(), Ok(0));
        assert_eq!(ids.gen_id(), Ok(1));

        let mut ids = IdDispatcher::starting_at(ID::MAX - 1);
        assert_eq!(ids.gen_id(), Ok(ID::MAX - 1));
        assert_eq!(ids.gen_id(), Err(Error::IdExhausted));
    }

    #[test]
    fn test_appearance_is_required() {
        let mut ids = IdDispatcher::new();
        let result = BodyBuilder::new(square()).build(&mut ids);
        assert_eq!(result.unwrap_err(), Error::MissingAppearance);
        // a failed build does not burn an id
        let body = BodyBuilder::new(square()).color([1.; 4]).build(&mut ids).unwrap();
        assert_eq!(body.id(), 0);
    }

    #[test]
    fn test_mass_from_material_and_override() {
        let mut ids = IdDispatcher::new();

        let body = BodyBuilder::new(square()).color([0.; 4]).build(&mut ids).unwrap();
        assert_eq!(body.mass(), 4.);

        let material = Material::new(2.5, [0., 1., 0., 1.]).unwrap();
        let body = BodyBuilder::new(square())
            .material(material)
            .color([1., 0., 0., 1.])
            .build(&mut ids)
            .unwrap();
        assert_eq!(body.mass(), 10.);
        assert_eq!(body.color(), [0., 1., 0., 1.]);

        let body = BodyBuilder::new(square())
            .material(material)
            .mass(3.)
            .build(&mut ids)
            .unwrap();
        assert_eq!(body.mass(), 3.);

        let result = BodyBuilder::new(square()).color([0.; 4]).mass(-1.).build(&mut ids);
        assert_eq!(result.unwrap_err(), Error::InvalidMass(-1.));
    }

    #[test]
    fn test_zero_area_dynamic_body_is_rejected() {
        let mut ids = IdDispatcher::new();
        let line = || ConcretePolygon::new([(0., 0.), (4., 4.)].map(Vector::from)).unwrap();

        let result = BodyBuilder::new(line()).color([1.; 4]).build(&mut ids);
        assert_eq!(result.unwrap_err(), Error::InvalidMass(0.));

        // a static line never integrates, an explicit mass makes a dynamic one usable
        let wall = BodyBuilder::new(line()).color([1.; 4]).fixed().build(&mut ids).unwrap();
        assert!(wall.is_static());
        let mut rod = BodyBuilder::new(line()).color([1.; 4]).mass(2.).build(&mut ids).unwrap();
        rod.apply_force((10., 0.));
        rod.step();
        assert_eq!(rod.velocity(), Vector::new(5., 0.));
    }

    #[test]
    fn test_ids_are_never_handed_out_twice() {
        let mut ids = IdDispatcher::new();
        let generated: Vec<ID> = (0..100).map(|_| ids.gen_id().unwrap()).collect();
        assert!(generated.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_position_and_rotation_reach_shape_and_bounds() {
        let mut ids = IdDispatcher::new();
        let mut body = BodyBuilder::new(square())
            .position((3., 4.))
            .color([1.; 4])
            .build(&mut ids)
            .unwrap();

        assert_eq!(body.shape().position(), Vector::new(3., 4.));
        assert_eq!(body.bounds().center(), Vector::new(3., 4.));

        body.set_position((-1., 0.));
        assert_eq!(body.shape().position(), Vector::new(-1., 0.));
        assert_eq!(body.bounds().center(), Vector::new(-1., 0.));

        body.set_rotation(std::f64::consts::FRAC_PI_4);
        assert_eq!(body.shape().rotation(), std::f64::consts::FRAC_PI_4);
        assert!((body.bounds().half_width() - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(body.bounds().center(), Vector::new(-1., 0.));
    }

    #[test]
    fn test_step_integrates_dynamic_body() {
        let mut ids = IdDispatcher::new();
        let mut body = BodyBuilder::new(square())
            .color([1.; 4])
            .mass(2.)
            .build(&mut ids)
            .unwrap();

        body.apply_force((4., 0.));
        body.add_force(Force::new("wind", (0., 2.)));
        body.step();

        assert_eq!(body.acceleration(), Vector::new(2., 1.));
        assert_eq!(body.velocity(), Vector::new(2., 1.));
        assert_eq!(body.position(), Vector::new(2., 1.));
        assert_eq!(body.shape().position(), Vector::new(2., 1.));
        assert_eq!(body.bounds().center(), Vector::new(2., 1.));

        // the applied force is gone, the wind stays
        body.step();
        assert_eq!(body.acceleration(), Vector::new(0., 1.));
        assert!(body.remove_force("wind").is_some());
    }

    #[test]
    fn test_step_rotates_shape() {
        let mut ids = IdDispatcher::new();
        let mut body = BodyBuilder::new(square())
            .color([1.; 4])
            .angular_velocity(0.5)
            .build(&mut ids)
            .unwrap();

        body.step();
        assert_eq!(body.rotation(), 0.5);
        assert_eq!(body.shape().rotation(), 0.5);
    }

    #[test]
    fn test_static_body_ignores_forces() {
        let mut ids = IdDispatcher::new();
        let mut body = BodyBuilder::new(square())
            .color([1.; 4])
            .fixed()
            .build(&mut ids)
            .unwrap();

        body.mark_colliding();
        body.apply_force((10., 10.));
        body.apply_torque(3.);
        body.step();

        assert!(!body.is_colliding());
        assert!(body.position().is_zero());
        assert!(body.forces().is_empty());
    }

    #[test]
    fn test_getters_hand_out_copies() {
        let mut ids = IdDispatcher::new();
        let body = BodyBuilder::new(square()).color([1.; 4]).build(&mut ids).unwrap();
        let mut position = body.position();
        position += Vector::new(1., 1.);
        assert_ne!(position, body.position());
        assert!(body.position().is_zero());
    }
}
