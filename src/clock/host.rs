//! Host clocks for the simulator and desktop builds.
//!
//! Readings are relative to the first call in the process and truncated to
//! 32 bits, matching the wrap behavior of the on-device clocks.

use std::sync::OnceLock;
use std::time::Instant;

use super::Clock;

static START_INSTANT: OnceLock<Instant> = OnceLock::new();

#[inline]
fn start_instant() -> Instant { *START_INSTANT.get_or_init(Instant::now) }

/// Microseconds since process-local start, wrapping at 2^32 (~71.6 minutes).
#[derive(Clone, Copy, Debug, Default)]
pub struct HostMicros;

impl Clock for HostMicros {
    type Tick = u32;

    #[inline]
    fn now(&self) -> u32 { start_instant().elapsed().as_micros() as u32 }

    fn unit(&self) -> &'static str { "us" }
}

/// Milliseconds since process-local start, wrapping at 2^32.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostMillis;

impl Clock for HostMillis {
    type Tick = u32;

    #[inline]
    fn now(&self) -> u32 { start_instant().elapsed().as_millis() as u32 }

    fn unit(&self) -> &'static str { "ms" }
}
