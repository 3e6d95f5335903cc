//! Loop profiler - named-checkpoint timing for control loops.
//!
//! Mark phases inside a repeating loop by label and get, per phase, the last
//! duration, a running average, and the min and max since the last reset.
//! Built for microcontrollers first: the default storage is a fixed inline
//! table, nothing allocates after construction, and durations are computed
//! with wrapping arithmetic so a rolling-over hardware counter is harmless.
//!
//! - [`clock`]: tick sources and wraparound-safe subtraction
//! - [`checkpoint`]: per-label accumulator and averaging math
//! - [`storage`]: fixed-capacity and dynamic label tables
//! - [`registry`]: start/end/reset/report over a store
//! - [`report`]: text rendering of statistics
//! - [`diagnostics`]: non-fatal conditions and their sinks
//! - [`config`]: compile-time limits
//!
//! # Feature Flags
//!
//! - `profile` (default): real instrumentation. Without it [`Profiler`] is
//!   zero-sized and the `profile_*!` macros expand to nothing.
//! - `alloc`: [`DynamicTable`](storage::DynamicTable), unbounded labels.
//! - `std` (default): host clocks and [`StderrSink`](diagnostics::StderrSink).
//!
//! # Usage
//!
//! ```ignore
//! let mut profiler = profile_setup!(DefaultTable::new(), CycleCounter::enable(&mut dcb, &mut dwt), DefmtSink);
//!
//! loop {
//!     profile_start_loop!(profiler);
//!
//!     profile_mark_start!(profiler, "sensors");
//!     read_sensors();
//!     profile_mark_end!(profiler, "sensors");
//!
//!     profile_mark_start!(profiler, "draw");
//!     draw();
//!     profile_mark_end!(profiler, "draw");
//! }
//! ```
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test                                      # profile + std
//! cargo test --no-default-features                # disabled stand-in
//! cargo test --no-default-features --features profile,alloc
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(any(test, feature = "std")), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod checkpoint;
pub mod clock;
pub mod config;
pub mod diagnostics;
mod macros;
mod profiler;
pub mod registry;
pub mod report;
pub mod storage;

// Re-export commonly used items
pub use checkpoint::CheckpointState;
pub use clock::{Clock, Ticks};
pub use diagnostics::{CheckpointError, DebugLog, Diagnostic, DiagnosticSink};
pub use profiler::Profiler;
pub use registry::CheckpointRegistry;
pub use report::Statistic;
#[cfg(feature = "alloc")]
pub use storage::DynamicTable;
pub use storage::{CheckpointStore, DefaultTable, FixedTable};
