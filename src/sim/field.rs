//! Ordered ring collection
//!
//! Spawn order is significant: the last ring is always the newest and is the
//! one consulted when deciding whether to spawn another.

use crate::consts::RING_LIMIT;

use super::ring::Ring;

/// Live rings in spawn order, bounded by a fixed capacity
#[derive(Debug, Clone)]
pub struct RingField<C> {
    rings: Vec<Ring<C>>,
    capacity: usize,
}

impl<C: Copy> Default for RingField<C> {
    fn default() -> Self {
        Self::with_capacity(RING_LIMIT)
    }
}

impl<C: Copy> RingField<C> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rings: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True while another ring may be appended
    pub fn has_room(&self) -> bool {
        self.rings.len() < self.capacity
    }

    /// Most recently spawned ring
    pub fn newest(&self) -> Option<&Ring<C>> {
        self.rings.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ring<C>> {
        self.rings.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Ring<C>> {
        self.rings.iter_mut()
    }

    /// Append a ring as the newest; returns false when the field is full
    pub fn push(&mut self, ring: Ring<C>) -> bool {
        if !self.has_room() {
            return false;
        }
        self.rings.push(ring);
        true
    }

    /// Remove every ring matching `pred`, keeping the order of the rest
    ///
    /// Returns how many rings were removed.
    pub fn remove_where<F: FnMut(&Ring<C>) -> bool>(&mut self, mut pred: F) -> usize {
        let before = self.rings.len();
        self.rings.retain(|ring| !pred(ring));
        before - self.rings.len()
    }
}
