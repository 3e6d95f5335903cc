//! Text rendering of checkpoint statistics.
//!
//! One report call writes one line:
//!
//! ```text
//! raw[us]: loop=16843 input=212 draw=15020
//! avg[us]: loop=16801.37 input=209.90 draw=14990.02
//! ```
//!
//! The prefix names the statistic and the clock unit. Raw durations are
//! printed as integers, the other statistics with two decimals. Labels appear
//! in the store's natural order.

use core::fmt::{self, Write};

use crate::checkpoint::CheckpointState;
use crate::clock::Ticks;

/// Which statistic a report line shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum Statistic {
    /// Most recent span
    Raw,
    /// Running average
    Average,
    /// Longest span since reset
    Max,
    /// Shortest span since reset
    Min,
}

impl Statistic {
    /// All statistics in report order.
    pub const ALL: [Self; 4] = [Self::Raw, Self::Average, Self::Max, Self::Min];

    /// Short line prefix.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Average => "avg",
            Self::Max => "max",
            Self::Min => "min",
        }
    }

    fn write_value<W: Write + ?Sized, T: Ticks>(
        self,
        out: &mut W,
        state: &CheckpointState<T>,
    ) -> fmt::Result {
        match self {
            Self::Raw => write!(out, "{}", state.last_duration()),
            Self::Average => write!(out, "{:.2}", state.average()),
            Self::Max => write!(out, "{:.2}", state.max_duration().as_f64()),
            Self::Min => write!(out, "{:.2}", state.min_duration().as_f64()),
        }
    }
}

/// Write one report line for `statistic` over `entries`.
pub fn write_report<'a, W, T, I>(
    out: &mut W,
    statistic: Statistic,
    unit: &str,
    entries: I,
) -> fmt::Result
where
    W: Write + ?Sized,
    T: Ticks,
    I: IntoIterator<Item = (&'a str, &'a CheckpointState<T>)>,
{
    write!(out, "{}[{}]:", statistic.prefix(), unit)?;
    for (label, state) in entries {
        write!(out, " {label}=")?;
        statistic.write_value(out, state)?;
    }
    out.write_char('\n')
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::string::String;

    use super::*;

    fn state(durations: &[u32]) -> CheckpointState<u32> {
        let mut cp = CheckpointState::new();
        for &d in durations {
            cp.record(d, 100);
        }
        cp
    }

    #[test]
    fn test_raw_line() {
        let a = state(&[5]);
        let b = state(&[7]);
        let mut out = String::new();

        write_report(&mut out, Statistic::Raw, "us", [("a", &a), ("b", &b)]).unwrap();
        assert_eq!(out, "raw[us]: a=5 b=7\n");
    }

    #[test]
    fn test_average_two_decimals() {
        let a = state(&[1, 2]);
        let mut out = String::new();

        write_report(&mut out, Statistic::Average, "ms", [("a", &a)]).unwrap();
        assert_eq!(out, "avg[ms]: a=1.50\n");
    }

    #[test]
    fn test_extrema_lines() {
        let a = state(&[9, 3, 6]);
        let mut max = String::new();
        let mut min = String::new();

        write_report(&mut max, Statistic::Max, "cyc", [("a", &a)]).unwrap();
        write_report(&mut min, Statistic::Min, "cyc", [("a", &a)]).unwrap();
        assert_eq!(max, "max[cyc]: a=9.00\n");
        assert_eq!(min, "min[cyc]: a=3.00\n");
    }

    #[test]
    fn test_empty_report_is_just_prefix() {
        let mut out = String::new();
        write_report::<_, u32, _>(&mut out, Statistic::Raw, "us", core::iter::empty()).unwrap();
        assert_eq!(out, "raw[us]:\n");
    }

    #[test]
    fn test_prefixes() {
        let prefixes: std::vec::Vec<&str> = Statistic::ALL.iter().map(|s| s.prefix()).collect();
        assert_eq!(prefixes, ["raw", "avg", "max", "min"]);
    }
}
