//! Generational arena for environment frames.
//!
//! Frames reference each other (and are referenced by closures) through
//! copyable [`ArenaId`] handles, so a closure stored in the frame it
//! captured is an index cycle rather than an ownership cycle. Removing an
//! element bumps its slot's generation, which makes every outstanding
//! handle to it detectably stale even after the slot is reused.

use std::{fmt::Debug, marker::PhantomData};

pub struct ArenaId<T> {
    index: u32,
    generation: u32,
    _marker: PhantomData<fn() -> T>,
}

// Manual implementations to avoid requiring T: Clone/Copy/etc.
impl<T> Clone for ArenaId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ArenaId<T> {}

impl<T> PartialEq for ArenaId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.generation == other.generation
    }
}

impl<T> Eq for ArenaId<T> {}

impl<T> std::hash::Hash for ArenaId<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.generation.hash(state);
    }
}

impl<T> Debug for ArenaId<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}@{}", self.index, self.generation)
    }
}

impl<T> ArenaId<T> {
    pub fn index(self) -> usize {
        self.index as usize
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

#[derive(Debug)]
pub struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Stores `value`, reusing a freed slot when one is available.
    pub fn alloc(&mut self, value: T) -> ArenaId<T> {
        self.len += 1;

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(value);

            return ArenaId { index, generation: slot.generation, _marker: PhantomData };
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot { generation: 0, value: Some(value) });

        ArenaId { index, generation: 0, _marker: PhantomData }
    }

    /// `None` when the handle is stale or from another arena.
    pub fn get(&self, id: ArenaId<T>) -> Option<&T> {
        match self.slots.get(id.index()) {
            Some(slot) if slot.generation == id.generation => slot.value.as_ref(),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: ArenaId<T>) -> Option<&mut T> {
        match self.slots.get_mut(id.index()) {
            Some(slot) if slot.generation == id.generation => slot.value.as_mut(),
            _ => None,
        }
    }

    pub fn contains(&self, id: ArenaId<T>) -> bool {
        self.get(id).is_some()
    }

    pub fn remove(&mut self, id: ArenaId<T>) -> Option<T> {
        let slot = match self.slots.get_mut(id.index()) {
            Some(slot) if slot.generation == id.generation => slot,
            _ => return None,
        };

        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;

        Some(value)
    }

    /// Removes every element `keep` rejects, returning how many went.
    pub fn retain(&mut self, mut keep: impl FnMut(ArenaId<T>, &T) -> bool) -> usize {
        let doomed = self.iter_with_ids()
            .filter(|(id, value)| !keep(*id, value))
            .map(|(id, _)| id)
            .collect::<Vec<_>>();

        for id in &doomed {
            self.remove(*id);
        }

        doomed.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter_with_ids(&self) -> impl Iterator<Item = (ArenaId<T>, &T)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.value.as_ref().map(|value| {
                (
                    ArenaId {
                        index: index as u32,
                        generation: slot.generation,
                        _marker: PhantomData,
                    },
                    value,
                )
            })
        })
    }
}
