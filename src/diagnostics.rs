//! Non-fatal profiler conditions and where they get reported.
//!
//! The registry recognizes exactly two problems, both caused by the caller:
//!
//! - **Capacity exceeded**: a fixed table is full and a new label was started.
//!   The start is dropped and existing checkpoints are untouched.
//! - **Unopened checkpoint**: `mark_end` on a label that was never started.
//!   Nothing is created or mutated.
//!
//! Each occurrence is handed once to the registry's [`DiagnosticSink`] and
//! also returned as a [`CheckpointError`]. Nothing here panics.
//!
//! # Sinks
//!
//! - `()`: discard
//! - [`DebugLog`]: ring buffer of the last few lines, for an on-device page
//! - [`DefmtSink`]: `defmt` over RTT (ARM only)
//! - [`StderrSink`]: `eprintln!` (`std` feature)

use core::fmt::{self, Write};

use heapless::{Deque, String};

use crate::config::{LOG_BUFFER_SIZE, LOG_LINE_LENGTH};

// =============================================================================
// Errors
// =============================================================================

/// Why a start or end call was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum CheckpointError {
    /// New label on a full fixed-capacity table.
    CapacityExceeded,
    /// End called for a label that was never started.
    UnopenedCheckpoint,
}

impl fmt::Display for CheckpointError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::CapacityExceeded => f.write_str("checkpoint table full"),
            Self::UnopenedCheckpoint => f.write_str("closing unopened checkpoint"),
        }
    }
}

impl core::error::Error for CheckpointError {}

/// A reported condition together with the label that caused it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Diagnostic<'a> {
    /// `label` was dropped because the table holds `capacity` labels already.
    CapacityExceeded { label: &'a str, capacity: usize },
    /// `label` was ended without ever being started.
    UnopenedCheckpoint { label: &'a str },
}

impl Diagnostic<'_> {
    /// Error kind without the label.
    pub const fn error(&self) -> CheckpointError {
        match self {
            Self::CapacityExceeded { .. } => CheckpointError::CapacityExceeded,
            Self::UnopenedCheckpoint { .. } => CheckpointError::UnopenedCheckpoint,
        }
    }

    /// Severity used by the levelled sinks.
    pub const fn level(&self) -> LogLevel {
        match self {
            Self::CapacityExceeded { .. } => LogLevel::Warn,
            Self::UnopenedCheckpoint { .. } => LogLevel::Error,
        }
    }
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::CapacityExceeded { label, capacity } => {
                write!(f, "'{label}' dropped, table holds {capacity}")
            }
            Self::UnopenedCheckpoint { label } => {
                write!(f, "closing unopened checkpoint '{label}'")
            }
        }
    }
}

// =============================================================================
// Sink Seam
// =============================================================================

/// Destination for diagnostics. Must not block or panic.
pub trait DiagnosticSink {
    fn report(
        &mut self,
        diagnostic: &Diagnostic<'_>,
    );
}

impl DiagnosticSink for () {
    #[inline]
    fn report(
        &mut self,
        _diagnostic: &Diagnostic<'_>,
    ) {
    }
}

impl<D: DiagnosticSink + ?Sized> DiagnosticSink for &mut D {
    #[inline]
    fn report(
        &mut self,
        diagnostic: &Diagnostic<'_>,
    ) {
        (**self).report(diagnostic);
    }
}

// =============================================================================
// Log Levels
// =============================================================================

/// Diagnostic severity.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
#[repr(u8)]
pub enum LogLevel {
    /// Recoverable misuse, measurement dropped
    #[default]
    Warn = 3,
    /// Call that can never succeed as written
    Error = 4,
}

impl LogLevel {
    /// Get the single-character prefix for this level.
    pub const fn prefix(self) -> char {
        match self {
            Self::Warn => 'W',
            Self::Error => 'E',
        }
    }
}

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// A single log entry with level and message.
#[derive(Clone, Debug, Default)]
pub struct LogEntry<const L: usize> {
    /// Log severity level.
    pub level: LogLevel,
    /// Message, truncated to fit `L` bytes.
    pub message: String<L>,
}

impl<const L: usize> LogEntry<L> {
    /// Message text.
    #[inline]
    pub fn as_str(&self) -> &str { self.message.as_str() }
}

/// Writer that keeps whatever fits and silently drops the rest.
struct Truncating<'a, const L: usize>(&'a mut String<L>);

impl<const L: usize> Write for Truncating<'_, L> {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Ring buffer of the last `N` diagnostics, each at most `L` bytes.
///
/// Old messages are dropped when the buffer is full. No allocation, so it
/// works as the sink on targets without a heap and can back an on-screen log.
pub struct DebugLog<const N: usize = LOG_BUFFER_SIZE, const L: usize = LOG_LINE_LENGTH> {
    buffer: Deque<LogEntry<L>, N>,
}

impl<const N: usize, const L: usize> DebugLog<N, L> {
    /// Create a new empty debug log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a message. If the buffer is full, the oldest entry is dropped.
    pub fn push(
        &mut self,
        level: LogLevel,
        msg: fmt::Arguments<'_>,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut message: String<L> = String::new();
        // Truncating never fails; a Display impl error only cuts the line short
        Truncating(&mut message).write_fmt(msg).ok();

        self.buffer.push_back(LogEntry { level, message }).ok();
    }

    /// Iterate over entries (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry<L>> { self.buffer.iter() }

    /// Most recent entry.
    pub fn last(&self) -> Option<&LogEntry<L>> { self.buffer.back() }

    /// Get number of log entries.
    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    /// Check if log is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    /// Drop all entries.
    pub fn clear(&mut self) { self.buffer.clear(); }
}

impl<const N: usize, const L: usize> Default for DebugLog<N, L> {
    fn default() -> Self { Self::new() }
}

impl<const N: usize, const L: usize> DiagnosticSink for DebugLog<N, L> {
    fn report(
        &mut self,
        diagnostic: &Diagnostic<'_>,
    ) {
        self.push(diagnostic.level(), format_args!("{diagnostic}"));
    }
}

// =============================================================================
// Platform Sinks
// =============================================================================

/// Logs diagnostics through `defmt` at their level.
#[cfg(target_arch = "arm")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DefmtSink;

#[cfg(target_arch = "arm")]
impl DiagnosticSink for DefmtSink {
    fn report(
        &mut self,
        diagnostic: &Diagnostic<'_>,
    ) {
        match diagnostic.level() {
            LogLevel::Warn => defmt::warn!("loop profiler: {}", diagnostic),
            LogLevel::Error => defmt::error!("loop profiler: {}", diagnostic),
        }
    }
}

/// Prints diagnostics to stderr.
#[cfg(feature = "std")]
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

#[cfg(feature = "std")]
impl DiagnosticSink for StderrSink {
    fn report(
        &mut self,
        diagnostic: &Diagnostic<'_>,
    ) {
        std::eprintln!("[{}] loop profiler: {}", diagnostic.level().prefix(), diagnostic);
    }
}

// =============================================================================
// Tests
// =============================================================================
