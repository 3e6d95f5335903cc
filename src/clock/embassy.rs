//! Embassy time driver clocks.
//!
//! `embassy_time::Instant` counts in 64-bit ticks since boot. These clocks
//! truncate to 32 bits so they wrap like the counters the profiler is built
//! around (micros: every ~71.6 minutes, millis: every ~49.7 days).

use embassy_time::Instant;

use super::Clock;

/// Microseconds since boot, wrapping at 2^32.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyMicros;

impl Clock for EmbassyMicros {
    type Tick = u32;

    #[inline]
    fn now(&self) -> u32 { Instant::now().as_micros() as u32 }

    fn unit(&self) -> &'static str { "us" }
}

/// Milliseconds since boot, wrapping at 2^32.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyMillis;

impl Clock for EmbassyMillis {
    type Tick = u32;

    #[inline]
    fn now(&self) -> u32 { Instant::now().as_millis() as u32 }

    fn unit(&self) -> &'static str { "ms" }
}
