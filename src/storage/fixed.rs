//! Fixed-capacity checkpoint table.
//!
//! All slots live inline in a `heapless::Vec`, so the table is allocated once
//! (statically or on the stack of the loop owner) and never grows. Lookup is
//! a linear scan comparing labels, which is cheaper than hashing for the
//! couple of dozen labels a control loop typically has.

use heapless::{String, Vec};

use super::{CheckpointStore, clamp_label};
use crate::checkpoint::CheckpointState;
use crate::clock::Ticks;
use crate::config::{LABEL_LEN, MAX_CHECKPOINTS};

/// One allocated slot: truncated label plus its state.
#[derive(Clone, Debug)]
struct Slot<T, const L: usize> {
    label: String<L>,
    state: CheckpointState<T>,
}

/// Up to `N` checkpoints with labels of at most `L` bytes.
///
/// Labels longer than `L` are truncated at a char boundary. Lookups truncate
/// the query the same way, so a long label keeps resolving to its slot.
#[derive(Clone, Debug)]
pub struct FixedTable<T, const N: usize = MAX_CHECKPOINTS, const L: usize = LABEL_LEN> {
    slots: Vec<Slot<T, L>, N>,
}

impl<T, const N: usize, const L: usize> FixedTable<T, N, L> {
    /// Create an empty table.
    pub const fn new() -> Self { Self { slots: Vec::new() } }

    /// Check if every slot is taken.
    #[inline]
    pub fn is_full(&self) -> bool { self.slots.is_full() }

    fn position(
        &self,
        label: &str,
    ) -> Option<usize> {
        let key = clamp_label(label, L);
        self.slots.iter().position(|slot| slot.label.as_str() == key)
    }
}

impl<T, const N: usize, const L: usize> Default for FixedTable<T, N, L> {
    fn default() -> Self { Self::new() }
}

impl<T: Ticks, const N: usize, const L: usize> CheckpointStore<T> for FixedTable<T, N, L> {
    fn resolve(
        &self,
        label: &str,
    ) -> Option<&CheckpointState<T>> {
        let i = self.position(label)?;
        self.slots.get(i).map(|slot| &slot.state)
    }

    fn resolve_mut(
        &mut self,
        label: &str,
    ) -> Option<&mut CheckpointState<T>> {
        let i = self.position(label)?;
        self.slots.get_mut(i).map(|slot| &mut slot.state)
    }

    fn resolve_or_create(
        &mut self,
        label: &str,
    ) -> Option<&mut CheckpointState<T>> {
        let i = match self.position(label) {
            Some(i) => i,
            None => {
                let mut name: String<L> = String::new();
                name.push_str(clamp_label(label, L)).ok()?;
                self.slots
                    .push(Slot {
                        label: name,
                        state: CheckpointState::new(),
                    })
                    .ok()?;
                self.slots.len() - 1
            }
        };
        self.slots.get_mut(i).map(|slot| &mut slot.state)
    }

    fn iter(&self) -> impl Iterator<Item = (&str, &CheckpointState<T>)> {
        self.slots.iter().map(|slot| (slot.label.as_str(), &slot.state))
    }

    fn states_mut(&mut self) -> impl Iterator<Item = &mut CheckpointState<T>> {
        self.slots.iter_mut().map(|slot| &mut slot.state)
    }

    #[inline]
    fn len(&self) -> usize { self.slots.len() }

    #[inline]
    fn capacity(&self) -> Option<usize> { Some(N) }
}

// =============================================================================
// Tests
// =============================================================================
