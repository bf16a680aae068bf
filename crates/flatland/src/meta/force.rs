use std::{collections::BTreeMap, rc::Rc};

use crate::math::{vector::Vector, FloatNum};

/// a named force, temporary forces are consumed by the next integration
#[derive(Clone, Debug, PartialEq)]
pub struct Force {
    id: Rc<str>,
    vector: Vector,
    is_temporary: bool,
}

impl Force {
    /// a persistent force, it acts every tick until it is removed
    pub fn new(id: impl AsRef<str>, vector: impl Into<Vector>) -> Self {
        Self {
            id: Rc::from(id.as_ref()),
            vector: vector.into(),
            is_temporary: false,
        }
    }

    pub fn temporary(id: impl AsRef<str>, vector: impl Into<Vector>) -> Self {
        Self {
            is_temporary: true,
            ..Self::new(id, vector)
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn vector(&self) -> Vector {
        self.vector
    }

    pub fn set_vector(&mut self, reducer: impl FnOnce(Vector) -> Vector) {
        self.vector = reducer(self.vector)
    }

    pub fn is_temporary(&self) -> bool {
        self.is_temporary
    }
}

/// forces acting on one body, keyed by id
#[derive(Clone, Debug, Default)]
pub struct ForceGroup {
    force_set: BTreeMap<Rc<str>, Force>,
    // anonymous temporary forces
    impulses: Vec<Vector>,
    torque: FloatNum,
}

impl ForceGroup {
    pub fn new() -> ForceGroup {
        Default::default()
    }

    pub fn is_empty(&self) -> bool {
        self.force_set.is_empty() && self.impulses.is_empty() && self.torque == 0.
    }

    /// replaces a force with the same id
    pub fn add_force(&mut self, force: Force) {
        self.force_set.insert(force.id.clone(), force);
    }

    /// appends an anonymous force that only lasts until the next integration
    pub fn push(&mut self, vector: Vector) {
        self.impulses.push(vector);
    }

    pub fn add_torque(&mut self, torque: FloatNum) {
        self.torque += torque;
    }

    pub fn get_force(&self, id: &str) -> Option<&Force> {
        self.force_set.get(id)
    }

    pub fn get_force_mut(&mut self, id: &str) -> Option<&mut Force> {
        self.force_set.get_mut(id)
    }

    pub fn has_force(&self, id: &str) -> bool {
        self.force_set.contains_key(id)
    }

    pub fn remove_force(&mut self, id: &str) -> Option<Force> {
        self.force_set.remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Force> {
        self.force_set.values()
    }

    pub fn net_force(&self) -> Vector {
        self.force_set
            .values()
            .map(Force::vector)
            .chain(self.impulses.iter().copied())
            .fold(Vector::ZERO, |sum, force| sum + force)
    }

    pub fn net_torque(&self) -> FloatNum {
        self.torque
    }

    /// drops temporary forces and torque, persistent forces stay
    pub fn consume(&mut self) {
        self.force_set.retain(|_, force| !force.is_temporary);
        self.impulses.clear();
        self.torque = 0.;
    }
}
