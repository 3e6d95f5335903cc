//! Loop profiler simulator for desktop hosts.
//!
//! Runs a fake control loop (poll, update, draw) paced to a fixed frame time,
//! the way the firmware main loop is, and prints the profiler report every
//! `REPORT_EVERY` frames. Halfway through it resets the statistics.
//!
//! ```bash
//! cargo run --bin simulator -- 300
//! cargo run --bin simulator --no-default-features --features std   # instrumentation compiled out
//! ```

// Without `profile` the macros drop their arguments, so these go unused
#![cfg_attr(not(feature = "profile"), allow(unused_imports, unused_mut, unused_variables))]

use std::thread;
use std::time::{Duration, Instant};

use loop_profiler::clock::HostMicros;
use loop_profiler::diagnostics::StderrSink;
use loop_profiler::storage::DefaultTable;
use loop_profiler::{profile_mark_end, profile_mark_start, profile_report_all, profile_reset, profile_setup, profile_start_loop};

/// Target frame time (~50 FPS). The loop sleeps if the frame completes early.
const FRAME_TIME: Duration = Duration::from_millis(20);

/// Frames between printed reports.
const REPORT_EVERY: u32 = 50;

/// Frames to run when no count is given on the command line.
const DEFAULT_FRAMES: u32 = 200;

/// Every this many frames the draw phase takes much longer.
const SPIKE_EVERY: u32 = 25;

fn main() {
    let frames = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let mut profiler = profile_setup!(DefaultTable::new(), HostMicros, StderrSink);
    let mut report = String::new();

    println!("simulating {frames} frames at {} ms per frame", FRAME_TIME.as_millis());

    for frame in 0..frames {
        let frame_start = Instant::now();
        profile_start_loop!(profiler);

        profile_mark_start!(profiler, "poll");
        thread::sleep(Duration::from_micros(300 + u64::from(frame % 7) * 50));
        profile_mark_end!(profiler, "poll");

        profile_mark_start!(profiler, "update");
        thread::sleep(Duration::from_micros(800));
        profile_mark_end!(profiler, "update");

        profile_mark_start!(profiler, "draw");
        let draw_time = if frame % SPIKE_EVERY == SPIKE_EVERY - 1 { 9_000 } else { 4_000 };
        thread::sleep(Duration::from_micros(draw_time));
        profile_mark_end!(profiler, "draw");

        if frame % REPORT_EVERY == REPORT_EVERY - 1 {
            report.clear();
            profile_report_all!(profiler, &mut report);
            if !report.is_empty() {
                println!("-- frame {} --", frame + 1);
                print!("{report}");
            }
        }

        if frame + 1 == frames / 2 {
            profile_reset!(profiler);
            println!("-- statistics reset --");
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}
