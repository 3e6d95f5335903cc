//! Tick sources and wraparound-safe duration arithmetic.
//!
//! The registry never looks at wall-clock time. It asks a [`Clock`] for the
//! current tick count and subtracts two readings with wrapping arithmetic in
//! the tick type's own width, so a counter that rolls over between a start and
//! an end still yields the forward-elapsed span:
//!
//! ```
//! use loop_profiler::clock::Ticks;
//!
//! // 8-bit counter: 250 -> 255 -> 0 -> 10 is 16 ticks
//! assert_eq!(10u8.wrapping_elapsed(250), 16);
//! ```
//!
//! This holds as long as the true span is shorter than one full period of
//! the counter (2^32 ticks for the bundled clocks).
//!
//! - `cpu_cycles`: Cortex-M DWT cycle counter
//! - `host`: `std::time::Instant` based clocks (`std` feature)
//! - `embassy`: `embassy_time::Instant` based clocks (ARM only)

mod cpu_cycles;
#[cfg(target_arch = "arm")]
mod embassy;
#[cfg(feature = "std")]
mod host;

use core::fmt;

pub use cpu_cycles::CycleCounter;
#[cfg(target_arch = "arm")]
pub use embassy::{EmbassyMicros, EmbassyMillis};
#[cfg(feature = "std")]
pub use host::{HostMicros, HostMillis};

// =============================================================================
// Tick Arithmetic
// =============================================================================

/// An unsigned counter value that wraps at `2^BITS`.
pub trait Ticks: 'static + Copy + Default + PartialEq + PartialOrd + fmt::Debug + fmt::Display {
    /// Counter width in bits (the wrap modulus is `2^BITS`).
    const BITS: u32;

    /// Ticks elapsed from `start` to `self`, computed modulo `2^BITS`.
    fn wrapping_elapsed(
        self,
        start: Self,
    ) -> Self;

    /// Lossy conversion for averaging.
    fn as_f64(self) -> f64;
}

macro_rules! impl_ticks {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Ticks for $ty {
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn wrapping_elapsed(
                    self,
                    start: Self,
                ) -> Self {
                    self.wrapping_sub(start)
                }

                #[inline]
                fn as_f64(self) -> f64 { self as f64 }
            }
        )*
    };
}

impl_ticks!(u8, u16, u32, u64);

// =============================================================================
// Clock Seam
// =============================================================================

/// Monotonic tick source consumed by the registry.
///
/// Any `Fn() -> T` with `T: Ticks` is a clock, which keeps tests and
/// board-specific timers down to a closure:
///
/// ```
/// use loop_profiler::clock::Clock;
///
/// let clock = || 42u16;
/// assert_eq!(clock.now(), 42);
/// assert_eq!(clock.unit(), "ticks");
/// ```
pub trait Clock {
    /// Counter type, which also fixes the wrap modulus.
    type Tick: Ticks;

    /// Current counter value.
    fn now(&self) -> Self::Tick;

    /// Short unit label printed in report prefixes.
    fn unit(&self) -> &'static str { "ticks" }
}

impl<F, T> Clock for F
where
    F: Fn() -> T,
    T: Ticks,
{
    type Tick = T;

    #[inline]
    fn now(&self) -> T { self() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    #[test]
    fn test_elapsed_normal() {
        assert_eq!(35u32.wrapping_elapsed(10), 25);
        assert_eq!(1000u32.wrapping_elapsed(0), 1000);
    }

    #[test]
    fn test_elapsed_wrap_u8() {
        assert_eq!(10u8.wrapping_elapsed(250), 16);
        assert_eq!(0u8.wrapping_elapsed(255), 1);
    }

    #[test]
    fn test_elapsed_wrap_u32() {
        // Wrap from near max to near zero
        assert_eq!(100u32.wrapping_elapsed(u32::MAX - 100), 201);
    }

    #[test]
    fn test_elapsed_wrap_u16() {
        assert_eq!(5u16.wrapping_elapsed(u16::MAX), 6);
    }

    #[test]
    fn test_bits_match_width() {
        assert_eq!(<u8 as Ticks>::BITS, 8);
        assert_eq!(<u32 as Ticks>::BITS, 32);
        assert_eq!(<u64 as Ticks>::BITS, 64);
    }

    #[test]
    fn test_closure_clock_reads_cell() {
        let now = Cell::new(7u32);
        let clock = || now.get();
        assert_eq!(clock.now(), 7);

        now.set(9);
        assert_eq!(clock.now(), 9);
        assert_eq!(clock.unit(), "ticks");
    }
}
