//! Build-time selection between the real registry and a zero-cost stand-in.
//!
//! With the `profile` feature, [`Profiler`] is [`CheckpointRegistry`]. Without
//! it, `Profiler` is a zero-sized type with the same start/end/reset/report
//! methods, all empty, so instrumented code compiles unchanged and the
//! optimizer removes every call. The stand-in stores nothing: the store,
//! clock and sink handed to `new` are dropped on the spot.

#[cfg(not(feature = "profile"))]
use core::fmt::{self, Write};
#[cfg(not(feature = "profile"))]
use core::marker::PhantomData;

#[cfg(feature = "profile")]
use crate::registry::CheckpointRegistry;
#[cfg(not(feature = "profile"))]
use crate::{diagnostics::CheckpointError, report::Statistic};

/// Loop profiler selected by the `profile` feature.
#[cfg(feature = "profile")]
pub type Profiler<S, C, D = ()> = CheckpointRegistry<S, C, D>;

/// Loop profiler selected by the `profile` feature (disabled: zero-sized).
#[cfg(not(feature = "profile"))]
pub struct Profiler<S, C, D = ()>(PhantomData<fn() -> (S, C, D)>);

#[cfg(not(feature = "profile"))]
impl<S, C, D> Profiler<S, C, D> {
    #[inline(always)]
    pub fn new(
        _store: S,
        _clock: C,
        _diagnostics: D,
    ) -> Self {
        Self(PhantomData)
    }

    #[inline(always)]
    #[must_use]
    pub fn with_avg_window(
        self,
        _avg_window: u32,
    ) -> Self {
        self
    }

    #[inline(always)]
    pub fn reset(&mut self) {}

    #[inline(always)]
    pub fn mark_start(
        &mut self,
        _label: &str,
    ) -> Result<(), CheckpointError> {
        Ok(())
    }

    #[inline(always)]
    pub fn mark_end(
        &mut self,
        _label: &str,
    ) -> Result<(), CheckpointError> {
        Ok(())
    }

    #[inline(always)]
    pub fn start_loop_iteration(&mut self) -> Result<(), CheckpointError> { Ok(()) }

    #[inline(always)]
    pub fn time<R>(
        &mut self,
        _label: &str,
        f: impl FnOnce() -> R,
    ) -> R {
        f()
    }

    #[inline(always)]
    pub fn report<W: Write + ?Sized>(
        &self,
        _statistic: Statistic,
        _out: &mut W,
    ) -> fmt::Result {
        Ok(())
    }

    #[inline(always)]
    pub fn report_all<W: Write + ?Sized>(
        &self,
        _out: &mut W,
    ) -> fmt::Result {
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::DefaultTable;

    #[cfg(feature = "profile")]
    #[test]
    fn test_enabled_profiler_records() {
        let mut profiler: Profiler<_, _> = Profiler::new(DefaultTable::new(), || 3u32, ());
        profiler.mark_start("a").unwrap();
        profiler.mark_end("a").unwrap();
        assert_eq!(profiler.len(), 1);
    }

    #[cfg(not(feature = "profile"))]
    #[test]
    fn test_disabled_profiler_is_zero_sized() {
        use crate::report::Statistic;

        let mut profiler = Profiler::new(DefaultTable::new(), || 3u32, ());
        assert_eq!(core::mem::size_of_val(&profiler), 0);

        profiler.start_loop_iteration().unwrap();
        // Nothing was started, yet ending is not an error: the calls are inert
        assert!(profiler.mark_end("never").is_ok());

        let mut out = std::string::String::new();
        profiler.report(Statistic::Raw, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
