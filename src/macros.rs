//! Instrumentation macros.
//!
//! These are the call-site layer. With the `profile` feature they forward to
//! [`Profiler`](crate::Profiler) and drop the returned `Result` (the
//! diagnostics sink has already seen any error). Without it every macro
//! expands to `()` and its arguments are never evaluated, so the labels, the
//! store and the clock do not even reach the binary.
//!
//! ```
//! use loop_profiler::clock::HostMicros;
//! use loop_profiler::storage::DefaultTable;
//! use loop_profiler::{profile_mark_end, profile_mark_start, profile_setup, profile_start_loop};
//!
//! let mut profiler = profile_setup!(DefaultTable::new(), HostMicros);
//! for _ in 0..10 {
//!     profile_start_loop!(profiler);
//!     profile_mark_start!(profiler, "work");
//!     // ...
//!     profile_mark_end!(profiler, "work");
//! }
//! ```

/// Create a profiler from a store, a clock and an optional diagnostics sink.
#[cfg(feature = "profile")]
#[macro_export]
macro_rules! profile_setup {
    ($store:expr, $clock:expr $(,)?) => {
        $crate::Profiler::new($store, $clock, ())
    };
    ($store:expr, $clock:expr, $diagnostics:expr $(,)?) => {
        $crate::Profiler::new($store, $clock, $diagnostics)
    };
}

/// Close the previous loop iteration and open the next.
#[cfg(feature = "profile")]
#[macro_export]
macro_rules! profile_start_loop {
    ($profiler:expr) => {{
        let _ = $profiler.start_loop_iteration();
    }};
}

/// Start the span for a label.
#[cfg(feature = "profile")]
#[macro_export]
macro_rules! profile_mark_start {
    ($profiler:expr, $label:expr) => {{
        let _ = $profiler.mark_start($label);
    }};
}

/// End the span for a label.
#[cfg(feature = "profile")]
#[macro_export]
macro_rules! profile_mark_end {
    ($profiler:expr, $label:expr) => {{
        let _ = $profiler.mark_end($label);
    }};
}

/// Clear all statistics, keeping open spans.
#[cfg(feature = "profile")]
#[macro_export]
macro_rules! profile_reset {
    ($profiler:expr) => {
        $profiler.reset()
    };
}

/// Write one report line for a [`Statistic`](crate::Statistic).
#[cfg(feature = "profile")]
#[macro_export]
macro_rules! profile_report {
    ($profiler:expr, $statistic:expr, $out:expr) => {{
        let _ = $profiler.report($statistic, $out);
    }};
}

/// Write the raw, average, max and min lines.
#[cfg(feature = "profile")]
#[macro_export]
macro_rules! profile_report_all {
    ($profiler:expr, $out:expr) => {{
        let _ = $profiler.report_all($out);
    }};
}

// =============================================================================
// Disabled: expand to nothing
// =============================================================================

#[cfg(not(feature = "profile"))]
#[macro_export]
macro_rules! profile_setup {
    ($($tt:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "profile"))]
#[macro_export]
macro_rules! profile_start_loop {
    ($($tt:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "profile"))]
#[macro_export]
macro_rules! profile_mark_start {
    ($($tt:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "profile"))]
#[macro_export]
macro_rules! profile_mark_end {
    ($($tt:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "profile"))]
#[macro_export]
macro_rules! profile_reset {
    ($($tt:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "profile"))]
#[macro_export]
macro_rules! profile_report {
    ($($tt:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "profile"))]
#[macro_export]
macro_rules! profile_report_all {
    ($($tt:tt)*) => {
        ()
    };
}

// =============================================================================
// Tests
// =============================================================================
