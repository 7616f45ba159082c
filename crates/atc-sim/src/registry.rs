//! Live aircraft registry: a generational slot table.
//!
//! Slots are reused after deregistration; the generation counter keeps a
//! stale `AircraftId` from resolving to the slot's next occupant. All access
//! goes through an `RwLock`. Iteration copies the live handles out and
//! releases the lock first, so scans and snapshots never hold it while
//! touching aircraft state.

use std::sync::{Arc, PoisonError, RwLock};

use atc_core::types::AircraftId;

use crate::aircraft::Aircraft;

struct SlotAllocator {
    generations: Vec<u32>,
    free_indices: Vec<u32>,
    next_index: u32,
}

impl SlotAllocator {
    fn new() -> Self {
        Self {
            generations: Vec::new(),
            free_indices: Vec::new(),
            next_index: 0,
        }
    }

    fn allocate(&mut self) -> AircraftId {
        if let Some(index) = self.free_indices.pop() {
            let generation = self.generations[index as usize];
            AircraftId::new(index, generation)
        } else {
            let index = self.next_index;
            self.next_index += 1;
            self.generations.push(0);
            AircraftId::new(index, 0)
        }
    }

    fn deallocate(&mut self, id: AircraftId) {
        if self.is_alive(id) {
            self.generations[id.index as usize] += 1;
            self.free_indices.push(id.index);
        }
    }

    fn is_alive(&self, id: AircraftId) -> bool {
        (id.index as usize) < self.generations.len()
            && self.generations[id.index as usize] == id.generation
    }
}

struct Slots {
    allocator: SlotAllocator,
    aircraft: Vec<Option<Arc<Aircraft>>>,
}

/// Concurrency-safe collection of active aircraft.
pub struct Registry {
    slots: RwLock<Slots>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(Slots {
                allocator: SlotAllocator::new(),
                aircraft: Vec::new(),
            }),
        }
    }

    pub fn insert(&self, aircraft: Arc<Aircraft>) -> AircraftId {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        let id = slots.allocator.allocate();
        let idx = id.index as usize;
        if slots.aircraft.len() <= idx {
            slots.aircraft.resize(idx + 1, None);
        }
        slots.aircraft[idx] = Some(aircraft);
        id
    }

    /// Remove an aircraft. Returns `None` for a stale or unknown id.
    pub fn remove(&self, id: AircraftId) -> Option<Arc<Aircraft>> {
        let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
        if !slots.allocator.is_alive(id) {
            return None;
        }
        // A freed slot already carries the next generation; only an occupied
        // slot may go back on the free list.
        let aircraft = slots.aircraft[id.index as usize].take()?;
        slots.allocator.deallocate(id);
        Some(aircraft)
    }

    pub fn get(&self, id: AircraftId) -> Option<Arc<Aircraft>> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        if !slots.allocator.is_alive(id) {
            return None;
        }
        slots.aircraft[id.index as usize].clone()
    }

    /// Copy of every live entry, ordered by slot index.
    pub fn entries(&self) -> Vec<(AircraftId, Arc<Aircraft>)> {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots
            .aircraft
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.as_ref().map(|aircraft| {
                    let generation = slots.allocator.generations[index];
                    (AircraftId::new(index as u32, generation), Arc::clone(aircraft))
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
        slots.aircraft.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
