use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::domain::value_objects::ContainerName;

/// Process-wide set of containers known to exist in the backend.
///
/// Every name gets its own initialisation slot. A name counts as known once
/// its slot is initialised; the slot is also the critical section the
/// [`ContainerManager`](super::ContainerManager) provisions under, so the
/// check, the backend calls and the insert happen as one step per name.
/// Entries are never evicted.
#[derive(Default)]
pub struct ContainerRegistry {
    slots: DashMap<ContainerName, Arc<OnceCell<()>>>,
}

impl ContainerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` has been confirmed to exist
    pub fn contains(&self, name: &ContainerName) -> bool {
        self.slots
            .get(name)
            .is_some_and(|slot| slot.value().initialized())
    }

    /// Slot guarding provisioning of `name`, created on first use
    pub(crate) fn slot(&self, name: &ContainerName) -> Arc<OnceCell<()>> {
        if let Some(slot) = self.slots.get(name) {
            return Arc::clone(slot.value());
        }
        Arc::clone(self.slots.entry(name.clone()).or_default().value())
    }

    /// Drop the slot for `name` if it never initialised and nobody else
    /// is waiting on it, so failing names do not accumulate
    pub(crate) fn release(&self, name: &ContainerName) {
        self.slots
            .remove_if(name, |_, slot| !slot.initialized() && Arc::strong_count(slot) == 1);
    }

    /// Slots currently held, confirmed or not
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of containers confirmed to exist
    pub fn len(&self) -> usize {
        self.slots
            .iter()
            .filter(|entry| entry.value().initialized())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Confirmed container names, sorted
    pub fn names(&self) -> Vec<ContainerName> {
        let mut names: Vec<ContainerName> = self
            .slots
            .iter()
            .filter(|entry| entry.value().initialized())
            .map(|entry| entry.key().clone())
            .collect();
        names.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        names
    }
}
