pub mod context;
pub(crate) mod store;

use log::{debug, trace, warn};

use crate::{
    body::{Body, BodyBuilder, IdDispatcher, ID},
    collision::{collision_check, resolve_collision, CollisionData},
    errors::{Error, Result},
    math::vector::Vector,
    meta::force::Force,
    tools::snapshot::BodySnapshot,
};

use self::{context::Context, store::BodyStore};

/// owns every body and advances them one fixed tick at a time
#[derive(Clone, Debug, Default)]
pub struct Scene {
    body_store: BodyStore,
    id_dispatcher: IdDispatcher,
    context: Context,
    frame_count: u64,
    collisions: Vec<CollisionData>,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_context(context: Context) -> Self {
        Self {
            context,
            ..Default::default()
        }
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.context
    }

    pub fn create_body(&mut self, builder: BodyBuilder) -> Result<ID> {
        let body = builder.build(&mut self.id_dispatcher)?;
        let id = body.id();
        debug!("create body {id} at {}", body.position());
        self.body_store.push(body);
        Ok(id)
    }

    pub fn remove_body(&mut self, id: ID) -> Result<Body> {
        match self.body_store.remove(id) {
            Some(body) => {
                debug!("remove body {id}");
                Ok(body)
            }
            None => {
                warn!("remove unknown body {id}");
                Err(Error::BodyNotFound(id))
            }
        }
    }

    #[inline]
    pub fn has_body(&self, id: ID) -> bool {
        self.body_store.has_body(id)
    }

    pub fn body(&self, id: ID) -> Option<&Body> {
        self.body_store.get(id)
    }

    pub fn body_mut(&mut self, id: ID) -> Option<&mut Body> {
        self.body_store.get_mut(id)
    }

    /// ascending id order
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.body_store.iter()
    }

    #[inline]
    pub fn body_count(&self) -> usize {
        self.body_store.len()
    }

    fn known_body_mut(&mut self, id: ID) -> Result<&mut Body> {
        self.body_store.get_mut(id).ok_or_else(|| {
            warn!("unknown body {id}");
            Error::BodyNotFound(id)
        })
    }

    /// the force only acts on the next tick
    pub fn apply_force(&mut self, id: ID, force: impl Into<Vector>) -> Result<()> {
        self.known_body_mut(id)?.apply_force(force);
        Ok(())
    }

    /// a named force, persistent ones act until removed from the body
    pub fn add_force(&mut self, id: ID, force: Force) -> Result<()> {
        self.known_body_mut(id)?.add_force(force);
        Ok(())
    }

    /// integrate every body, then detect and resolve every colliding pair
    pub fn tick(&mut self) {
        self.frame_count += 1;
        trace!("tick frame {}", self.frame_count);

        if self.context.enable_gravity() {
            let gravity = self.context.default_gravity();
            self.body_store
                .iter_mut()
                .filter(|body| !body.is_static())
                .for_each(|body| {
                    let weight = gravity * body.mass();
                    body.apply_force(weight);
                });
        }

        self.body_store.iter_mut().for_each(Body::step);

        let len = self.body_store.len();
        let mut pairs = Vec::new();
        for i in 0..len {
            for j in (i + 1)..len {
                let a = self.body_store.get_by_index(i);
                let b = self.body_store.get_by_index(j);
                if let Some(collision) = collision_check(a, b) {
                    pairs.push((i, j, collision));
                }
            }
        }

        let split_position_fix = self.context.split_position_fix();
        self.collisions = pairs
            .into_iter()
            .map(|(i, j, collision)| {
                let (a, b) = self.body_store.pair_mut(i, j);
                debug!(
                    "resolve collision between {} and {} with mtv {}",
                    collision.a(),
                    collision.b(),
                    collision.mtv()
                );
                resolve_collision(a, b, collision.mtv(), split_position_fix);
                collision
            })
            .collect();
    }

    pub fn query_body(&self, id: ID) -> Result<BodySnapshot> {
        self.body(id).map(BodySnapshot::from).ok_or_else(|| {
            warn!("query unknown body {id}");
            Error::BodyNotFound(id)
        })
    }

    pub fn snapshots(&self) -> Vec<BodySnapshot> {
        self.bodies().map(BodySnapshot::from).collect()
    }

    /// collisions found by the last tick, in detection order
    pub fn collisions(&self) -> &[CollisionData] {
        &self.collisions
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// drops every body, ids handed out before are not reused
    pub fn clear(&mut self) {
        self.body_store.clear();
        self.collisions.clear();
        self.frame_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{meta::Material, shape::ConcretePolygon};

    fn square() -> ConcretePolygon {
        ConcretePolygon::new([(1., 1.), (1., -1.), (-1., -1.), (-1., 1.)].map(Vector::from)).unwrap()
    }

    #[test]
    fn test_create_and_remove() {
        let mut scene = Scene::new();
        let a = scene
            .create_body(BodyBuilder::new(square()).color([1.; 4]))
            .unwrap();
        let b = scene
            .create_body(BodyBuilder::new(square()).material(Material::WOOD))
            .unwrap();
        assert_ne!(a, b);
        assert_eq!(scene.body_count(), 2);

        assert!(scene.remove_body(a).is_ok());
        assert!(!scene.has_body(a));
        assert_eq!(scene.remove_body(a).unwrap_err(), Error::BodyNotFound(a));

        let c = scene
            .create_body(BodyBuilder::new(square()).color([1.; 4]))
            .unwrap();
        assert!(c > b);
    }

    #[test]
    fn test_unknown_body() {
        let mut scene = Scene::new();
        assert_eq!(scene.apply_force(9, (1., 0.)), Err(Error::BodyNotFound(9)));
        assert_eq!(scene.query_body(9).unwrap_err(), Error::BodyNotFound(9));
        assert!(scene.body(9).is_none());
    }

    #[test]
    fn test_tick_resolves_overlap() {
        let mut scene = Scene::new();
        let ground = scene
            .create_body(BodyBuilder::new(square()).color([1.; 4]).fixed())
            .unwrap();
        let block = scene
            .create_body(BodyBuilder::new(square()).position((1.5, 0.)).color([1.; 4]))
            .unwrap();

        scene.tick();

        assert_eq!(scene.frame_count(), 1);
        assert_eq!(scene.collisions().len(), 1);
        assert!(scene.body(ground).unwrap().is_colliding());
        assert!(scene.query_body(block).unwrap().is_colliding);
        assert!(scene
            .body(block)
            .unwrap()
            .position()
            .is_close(&Vector::new(2., 0.), 1e-12));

        // touching is not colliding
        scene.tick();
        assert!(scene.collisions().is_empty());
        assert!(!scene.body(block).unwrap().is_colliding());
    }

    #[test]
    fn test_gravity_pulls_dynamic_bodies() {
        let mut context = Context::default();
        context.set_enable_gravity(true);
        let mut scene = Scene::with_context(context);

        let ground = scene
            .create_body(BodyBuilder::new(square()).position((0., -100.)).color([1.; 4]).fixed())
            .unwrap();
        let ball = scene
            .create_body(BodyBuilder::new(square()).color([1.; 4]))
            .unwrap();

        scene.tick();

        assert_eq!(scene.body(ball).unwrap().velocity(), Vector::new(0., -9.8));
        assert_eq!(scene.body(ground).unwrap().position(), Vector::new(0., -100.));
    }

    #[test]
    fn test_apply_force_lasts_one_tick() {
        let mut scene = Scene::new();
        let id = scene
            .create_body(BodyBuilder::new(square()).color([1.; 4]).mass(1.))
            .unwrap();

        scene.apply_force(id, (1., 0.)).unwrap();
        scene.tick();
        scene.tick();

        let snapshot = scene.query_body(id).unwrap();
        assert_eq!(snapshot.velocity, Vector::new(1., 0.));
        assert_eq!(snapshot.position, Vector::new(2., 0.));
    }

    #[test]
    fn test_clear_keeps_id_counter() {
        let mut scene = Scene::new();
        let first = scene
            .create_body(BodyBuilder::new(square()).color([1.; 4]))
            .unwrap();
        scene.tick();
        scene.clear();

        assert_eq!(scene.body_count(), 0);
        assert_eq!(scene.frame_count(), 0);
        let second = scene
            .create_body(BodyBuilder::new(square()).color([1.; 4]))
            .unwrap();
        assert!(second > first);
        assert_eq!(scene.snapshots().len(), 1);
    }
}
