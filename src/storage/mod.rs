//! Checkpoint storage strategies.
//!
//! The registry only needs two lookups, resolve and resolve-or-create, plus
//! iteration for reports and resets. [`CheckpointStore`] is that capability
//! set, and two strategies implement it:
//!
//! | Strategy         | Lookup        | Memory                               | Report order   |
//! |------------------|---------------|--------------------------------------|----------------|
//! | [`FixedTable`]   | linear scan   | one inline table, no allocation      | insertion      |
//! | [`DynamicTable`] | ordered map   | one allocation per distinct label    | label (sorted) |
//!
//! A fixed table is the right choice for a small, known set of labels on a
//! target without a heap. It rejects new labels once full, so the memory
//! ceiling is fixed at compile time.

mod fixed;
#[cfg(feature = "alloc")]
mod dynamic;

#[cfg(feature = "alloc")]
pub use dynamic::DynamicTable;
pub use fixed::FixedTable;

use crate::checkpoint::CheckpointState;
use crate::clock::Ticks;
use crate::config::{LABEL_LEN, MAX_CHECKPOINTS};

/// Fixed table sized by the crate defaults, counting 32-bit ticks.
pub type DefaultTable = FixedTable<u32, MAX_CHECKPOINTS, LABEL_LEN>;

/// Label-to-state lookup used by the registry.
pub trait CheckpointStore<T: Ticks> {
    /// Existing state for `label`, if it was ever created.
    fn resolve(
        &self,
        label: &str,
    ) -> Option<&CheckpointState<T>>;

    /// Mutable access to an existing state.
    fn resolve_mut(
        &mut self,
        label: &str,
    ) -> Option<&mut CheckpointState<T>>;

    /// Existing state for `label`, creating it if absent.
    ///
    /// Returns `None` only when the label is new and the store has no room.
    fn resolve_or_create(
        &mut self,
        label: &str,
    ) -> Option<&mut CheckpointState<T>>;

    /// All checkpoints in the store's natural order.
    fn iter(&self) -> impl Iterator<Item = (&str, &CheckpointState<T>)>;

    /// All checkpoint states, for bulk updates such as reset.
    fn states_mut(&mut self) -> impl Iterator<Item = &mut CheckpointState<T>>;

    /// Number of tracked labels.
    fn len(&self) -> usize;

    /// Whether no label has been tracked yet.
    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Maximum number of labels, or `None` when unbounded.
    fn capacity(&self) -> Option<usize>;
}

/// Longest prefix of `label` that fits in `max_len` bytes without splitting
/// a character.
pub(crate) fn clamp_label(
    label: &str,
    max_len: usize,
) -> &str {
    if label.len() <= max_len {
        return label;
    }
    let mut end = max_len;
    while !label.is_char_boundary(end) {
        end -= 1;
    }
    &label[..end]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_short_label_untouched() {
        assert_eq!(clamp_label("draw", 8), "draw");
        assert_eq!(clamp_label("", 8), "");
    }

    #[test]
    fn test_clamp_long_label() {
        assert_eq!(clamp_label("render_frame", 6), "render");
    }

    #[test]
    fn test_clamp_respects_char_boundary() {
        // 'é' is two bytes, cutting at 2 would split it
        assert_eq!(clamp_label("aéb", 2), "a");
        assert_eq!(clamp_label("aéb", 3), "aé");
    }
}
