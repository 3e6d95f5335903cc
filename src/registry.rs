//! The checkpoint registry.
//!
//! Owns the storage strategy, the clock and the diagnostics sink, and turns
//! start/end calls into per-label statistics. One registry belongs to the code
//! that drives the instrumented loop and is passed to call sites by `&mut`.
//!
//! # Usage
//!
//! ```
//! use core::cell::Cell;
//!
//! use loop_profiler::{CheckpointRegistry, DefaultTable, Statistic};
//!
//! // Stand-in for a hardware timer that advances 7 ticks per reading
//! let ticks = Cell::new(0u32);
//! let clock = || {
//!     ticks.set(ticks.get() + 7);
//!     ticks.get()
//! };
//! let mut profiler = CheckpointRegistry::new(DefaultTable::new(), clock, ());
//!
//! for _ in 0..3 {
//!     profiler.start_loop_iteration().ok();
//!     profiler.mark_start("read").ok();
//!     profiler.mark_end("read").ok();
//! }
//!
//! let mut line = String::new();
//! profiler.report(Statistic::Raw, &mut line).unwrap();
//! assert_eq!(line, "raw[ticks]: loop=21 read=7\n");
//! ```
//!
//! # Failure Semantics
//!
//! Starting a new label on a full fixed table, or ending a label that was
//! never started, is reported once to the diagnostics sink and returned as a
//! [`CheckpointError`]. The call is dropped; no other label is affected.

use core::fmt::{self, Write};

use heapless::String;

use crate::checkpoint::CheckpointState;
use crate::clock::Clock;
use crate::config::{AVG_WINDOW, LOOP_LABEL};
use crate::diagnostics::{CheckpointError, Diagnostic, DiagnosticSink};
use crate::report::{Statistic, write_report};
use crate::storage::CheckpointStore;

/// Named-checkpoint timing registry.
pub struct CheckpointRegistry<S, C, D = ()> {
    store: S,
    clock: C,
    diagnostics: D,
    avg_window: u32,
}

impl<S, C, D> CheckpointRegistry<S, C, D>
where
    C: Clock,
    S: CheckpointStore<C::Tick>,
    D: DiagnosticSink,
{
    /// Create a registry averaging over [`AVG_WINDOW`] samples.
    pub fn new(
        store: S,
        clock: C,
        diagnostics: D,
    ) -> Self {
        Self {
            store,
            clock,
            diagnostics,
            avg_window: AVG_WINDOW,
        }
    }

    /// Use a different averaging ceiling. Meant for construction time only.
    #[must_use]
    pub fn with_avg_window(
        mut self,
        avg_window: u32,
    ) -> Self {
        self.avg_window = avg_window;
        self
    }

    /// Clear every checkpoint's statistics.
    ///
    /// Labels stay registered and start ticks are kept, so a span that is
    /// open across the reset still measures correctly when it ends.
    pub fn reset(&mut self) {
        for state in self.store.states_mut() {
            state.clear_stats();
        }
    }

    /// Start (or restart) the span for `label`, creating it on first use.
    pub fn mark_start(
        &mut self,
        label: &str,
    ) -> Result<(), CheckpointError> {
        let now = self.clock.now();

        match self.store.resolve_or_create(label) {
            Some(state) => {
                state.begin(now);
                Ok(())
            }
            None => self.fail(Diagnostic::CapacityExceeded {
                label,
                capacity: self.store.capacity().unwrap_or(self.store.len()),
            }),
        }
    }

    /// End the span for `label` and fold its duration into the statistics.
    pub fn mark_end(
        &mut self,
        label: &str,
    ) -> Result<(), CheckpointError> {
        let now = self.clock.now();
        let avg_window = self.avg_window;

        match self.store.resolve_mut(label) {
            Some(state) => {
                state.finish(now, avg_window);
                Ok(())
            }
            None => self.fail(Diagnostic::UnopenedCheckpoint { label }),
        }
    }

    /// Close the previous iteration's span and open the next one.
    ///
    /// Uses one clock reading for both, so consecutive iterations tile the
    /// timeline with no gap. The first call only opens.
    pub fn start_loop_iteration(&mut self) -> Result<(), CheckpointError> {
        let now = self.clock.now();
        let avg_window = self.avg_window;

        if let Some(state) = self.store.resolve_mut(LOOP_LABEL) {
            state.finish(now, avg_window);
        }

        match self.store.resolve_or_create(LOOP_LABEL) {
            Some(state) => {
                state.begin(now);
                Ok(())
            }
            None => self.fail(Diagnostic::CapacityExceeded {
                label: LOOP_LABEL,
                capacity: self.store.capacity().unwrap_or(self.store.len()),
            }),
        }
    }

    /// Time `f` under `label` and return its result.
    pub fn time<R>(
        &mut self,
        label: &str,
        f: impl FnOnce() -> R,
    ) -> R {
        let started = self.mark_start(label).is_ok();
        let result = f();
        if started {
            self.mark_end(label).ok();
        }
        result
    }

    /// Write one report line for `statistic`.
    pub fn report<W: Write + ?Sized>(
        &self,
        statistic: Statistic,
        out: &mut W,
    ) -> fmt::Result {
        write_report(out, statistic, self.clock.unit(), self.store.iter())
    }

    /// Write raw, average, max and min lines.
    pub fn report_all<W: Write + ?Sized>(
        &self,
        out: &mut W,
    ) -> fmt::Result {
        for statistic in Statistic::ALL {
            self.report(statistic, out)?;
        }
        Ok(())
    }

    /// Render one report line into a fixed buffer.
    ///
    /// Fails if the line does not fit in `N` bytes.
    pub fn render<const N: usize>(
        &self,
        statistic: Statistic,
    ) -> Result<String<N>, fmt::Error> {
        let mut line = String::new();
        self.report(statistic, &mut line)?;
        Ok(line)
    }

    /// State for `label`, if it was ever started.
    pub fn checkpoint(
        &self,
        label: &str,
    ) -> Option<&CheckpointState<C::Tick>> {
        self.store.resolve(label)
    }

    /// All checkpoints in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CheckpointState<C::Tick>)> { self.store.iter() }

    /// Number of tracked labels.
    #[inline]
    pub fn len(&self) -> usize { self.store.len() }

    /// Check if no label has been started yet.
    #[inline]
    pub fn is_empty(&self) -> bool { self.store.is_empty() }

    /// Maximum number of labels, `None` when unbounded.
    #[inline]
    pub fn capacity(&self) -> Option<usize> { self.store.capacity() }

    /// Averaging ceiling in samples.
    #[inline]
    pub const fn avg_window(&self) -> u32 { self.avg_window }

    /// Tick source.
    #[inline]
    pub const fn clock(&self) -> &C { &self.clock }

    /// Sink that received every reported condition.
    #[inline]
    pub const fn diagnostics(&self) -> &D { &self.diagnostics }

    /// Mutable sink access, e.g. to clear a debug log.
    #[inline]
    pub fn diagnostics_mut(&mut self) -> &mut D { &mut self.diagnostics }

    fn fail(
        &mut self,
        diagnostic: Diagnostic<'_>,
    ) -> Result<(), CheckpointError> {
        self.diagnostics.report(&diagnostic);
        Err(diagnostic.error())
    }
}

// =============================================================================
// Tests
// =============================================================================
