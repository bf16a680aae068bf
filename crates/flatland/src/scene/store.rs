use crate::body::{Body, ID};

/// bodies kept in ascending id order
#[derive(Clone, Debug, Default)]
pub(crate) struct BodyStore {
    bodies: Vec<Body>,
}

impl BodyStore {
    fn index_of(&self, id: ID) -> Result<usize, usize> {
        self.bodies.binary_search_by_key(&id, Body::id)
    }

    /// ids come from a monotonic dispatcher, so pushing keeps the order
    pub(crate) fn push(&mut self, body: Body) {
        match self.bodies.last() {
            Some(last) if last.id() > body.id() => {
                let index = self.index_of(body.id()).unwrap_or_else(|index| index);
                self.bodies.insert(index, body);
            }
            _ => self.bodies.push(body),
        }
    }

    pub(crate) fn remove(&mut self, id: ID) -> Option<Body> {
        self.index_of(id).ok().map(|index| self.bodies.remove(index))
    }

    pub(crate) fn has_body(&self, id: ID) -> bool {
        self.index_of(id).is_ok()
    }

    pub(crate) fn get(&self, id: ID) -> Option<&Body> {
        self.index_of(id).ok().map(|index| &self.bodies[index])
    }

    pub(crate) fn get_mut(&mut self, id: ID) -> Option<&mut Body> {
        self.index_of(id).ok().map(|index| &mut self.bodies[index])
    }

    pub(crate) fn len(&self) -> usize {
        self.bodies.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    pub(crate) fn get_by_index(&self, index: usize) -> &Body {
        &self.bodies[index]
    }

    /// two distinct bodies borrowed mutably at once, `i < j`
    pub(crate) fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Body, &mut Body) {
        let (head, tail) = self.bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    }

    pub(crate) fn clear(&mut self) {
        self.bodies.clear();
    }
}
