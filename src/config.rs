//! Profiler configuration constants.
//!
//! Everything here is fixed at compile time. The fixed-capacity table and the
//! debug log take their bounds as const generics, and these constants are the
//! defaults used by the type aliases in [`crate::storage`] and
//! [`crate::diagnostics`].
//!
//! The fixed-capacity footprint is roughly
//! `MAX_CHECKPOINTS * (LABEL_LEN + size_of::<CheckpointState<u32>>())` bytes,
//! so these two constants are the ones to tune on small targets.

// =============================================================================
// Averaging
// =============================================================================

/// Maximum number of samples folded into the running average.
///
/// Once a checkpoint has seen this many samples its count stops growing and
/// every new duration is blended in with weight `1 / (AVG_WINDOW + 1)`.
pub const AVG_WINDOW: u32 = 100;

// =============================================================================
// Fixed-Capacity Storage
// =============================================================================

/// Maximum label length in bytes. Longer labels are truncated at a char
/// boundary, both when stored and when looked up.
pub const LABEL_LEN: usize = 20;

/// Maximum number of distinct checkpoints in a fixed table.
pub const MAX_CHECKPOINTS: usize = 20;

// =============================================================================
// Loop Boundary
// =============================================================================

/// Reserved label for the whole-iteration span driven by
/// `start_loop_iteration`. Do not use it for your own checkpoints.
pub const LOOP_LABEL: &str = "loop";

// =============================================================================
// Debug Log
// =============================================================================

/// Maximum number of diagnostic lines kept by the default debug log.
pub const LOG_BUFFER_SIZE: usize = 6;

/// Maximum bytes per diagnostic line. Fits either diagnostic with a label of
/// `LABEL_LEN` bytes.
pub const LOG_LINE_LENGTH: usize = 64;
