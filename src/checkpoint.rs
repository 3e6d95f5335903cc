//! Per-label timing accumulator.
//!
//! A [`CheckpointState`] holds the most recent span, a running average and
//! the extrema for one label. It never stores individual samples: the average
//! is updated incrementally,
//!
//! ```text
//! avg' = (avg * n + d) / (n + 1)
//! ```
//!
//! and `n` stops growing once it reaches the averaging window. From then on
//! every new duration is blended in with weight `1 / (window + 1)`, which
//! turns the exact cumulative mean into an exponentially weighted one. This
//! keeps the state a fixed handful of bytes per label.

use crate::clock::Ticks;

/// Accumulated timing state for one checkpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CheckpointState<T> {
    sample_start: T,
    last_duration: T,
    sample_count: u32,
    average: f64,
    max: T,
    min: Option<T>,
    open: bool,
}

impl<T: Ticks> CheckpointState<T> {
    /// Fresh state with no start recorded.
    pub fn new() -> Self { Self::default() }

    /// Stamp the start of a span. Overwrites any unclosed start.
    #[inline]
    pub fn begin(
        &mut self,
        now: T,
    ) {
        self.sample_start = now;
        self.open = true;
    }

    /// Close the span started by the last [`begin`](Self::begin) and fold the
    /// duration into the statistics. Returns the measured duration.
    ///
    /// The duration is `now - sample_start` modulo the tick width, so a
    /// counter wrap between the two readings is harmless.
    pub fn finish(
        &mut self,
        now: T,
        avg_window: u32,
    ) -> T {
        let duration = now.wrapping_elapsed(self.sample_start);
        self.record(duration, avg_window);
        self.open = false;
        duration
    }

    /// Fold one duration into the statistics.
    pub fn record(
        &mut self,
        duration: T,
        avg_window: u32,
    ) {
        self.last_duration = duration;

        if duration > self.max {
            self.max = duration;
        }
        match self.min {
            Some(min) if min <= duration => {}
            _ => self.min = Some(duration),
        }

        let n = f64::from(self.sample_count);
        self.average = (self.average * n + duration.as_f64()) / (n + 1.0);

        if self.sample_count < avg_window {
            self.sample_count += 1;
        }
    }

    /// Clear statistics, keeping the start tick and open flag so a span that
    /// is in flight survives.
    pub fn clear_stats(&mut self) {
        *self = Self {
            sample_start: self.sample_start,
            open: self.open,
            ..Self::default()
        };
    }

    /// Tick recorded by the last start.
    #[inline]
    pub const fn sample_start(&self) -> T { self.sample_start }

    /// Most recent span.
    #[inline]
    pub const fn last_duration(&self) -> T { self.last_duration }

    /// Samples folded into the average, capped at the window.
    #[inline]
    pub const fn sample_count(&self) -> u32 { self.sample_count }

    /// Running average in ticks.
    #[inline]
    pub const fn average(&self) -> f64 { self.average }

    /// Longest span since the last reset (0 before any sample).
    #[inline]
    pub const fn max_duration(&self) -> T { self.max }

    /// Shortest span since the last reset, or `T::default()` (0) while unset.
    #[inline]
    pub fn min_duration(&self) -> T { self.min.unwrap_or_default() }

    /// Whether a span has been started and not yet ended.
    #[inline]
    pub const fn is_open(&self) -> bool { self.open }

    /// Whether any span has been closed since the last reset.
    #[inline]
    pub const fn has_samples(&self) -> bool { self.sample_count > 0 }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(
        state: &mut CheckpointState<u32>,
        durations: &[u32],
        window: u32,
    ) {
        for &d in durations {
            state.record(d, window);
        }
    }

    #[test]
    fn test_finish_measures_span() {
        let mut cp = CheckpointState::<u32>::new();
        cp.begin(10);
        assert!(cp.is_open());

        assert_eq!(cp.finish(35, 100), 25);
        assert_eq!(cp.last_duration(), 25);
        assert!(!cp.is_open());
    }

    #[test]
    fn test_finish_across_wrap() {
        let mut cp = CheckpointState::<u8>::new();
        cp.begin(250);
        assert_eq!(cp.finish(10, 100), 16);
    }

    #[test]
    fn test_incremental_mean() {
        let mut cp = CheckpointState::new();
        feed(&mut cp, &[10, 20, 30], 100);

        assert_eq!(cp.average(), 20.0);
        assert_eq!(cp.sample_count(), 3);
    }

    #[test]
    fn test_window_ceiling_blends() {
        let mut cp = CheckpointState::new();
        feed(&mut cp, &[10, 10, 100], 2);

        // Count frozen at 2, so the third sample gets weight 1/3
        assert_eq!(cp.sample_count(), 2);
        assert_eq!(cp.average(), (10.0 * 2.0 + 100.0) / 3.0);
    }

    #[test]
    fn test_window_ceiling_keeps_blending() {
        let mut cp = CheckpointState::new();
        feed(&mut cp, &[10, 10, 100, 100], 2);

        let after_third = (10.0 * 2.0 + 100.0) / 3.0;
        assert_eq!(cp.average(), (after_third * 2.0 + 100.0) / 3.0);
        // Not the true mean of all four samples
        assert_ne!(cp.average(), 55.0);
    }

    #[test]
    fn test_zero_window_tracks_last() {
        let mut cp = CheckpointState::new();
        feed(&mut cp, &[10, 50], 0);

        assert_eq!(cp.sample_count(), 0);
        assert_eq!(cp.average(), 50.0);
    }

    #[test]
    fn test_extrema() {
        let mut cp = CheckpointState::new();
        assert_eq!(cp.min_duration(), 0);

        feed(&mut cp, &[40, 15, 90, 30], 100);
        assert_eq!(cp.min_duration(), 15);
        assert_eq!(cp.max_duration(), 90);
    }

    #[test]
    fn test_min_replaces_sentinel_on_first_sample() {
        let mut cp = CheckpointState::<u32>::new();
        cp.record(70, 100);
        assert_eq!(cp.min_duration(), 70);
        assert_eq!(cp.max_duration(), 70);
    }

    #[test]
    fn test_clear_stats_keeps_open_start() {
        let mut cp = CheckpointState::new();
        feed(&mut cp, &[5, 6], 100);
        cp.begin(1234);

        cp.clear_stats();
        assert_eq!(cp.sample_start(), 1234);
        assert!(cp.is_open());
        assert_eq!(cp.last_duration(), 0);
        assert_eq!(cp.sample_count(), 0);
        assert_eq!(cp.average(), 0.0);
        assert_eq!(cp.max_duration(), 0);
        assert_eq!(cp.min_duration(), 0);
        assert!(!cp.has_samples());
    }
}
