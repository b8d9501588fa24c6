//! Operation counters
//!
//! A [`Counters`] value is an explicit instrumentation context. Images
//! carry an optional `Arc<Counters>` handle and bump it at well-defined
//! points:
//!
//! - [`Counter::PixelAccess`] - one per pixel read or write
//! - [`Counter::SubimageCompare`] - one per pixel comparison in subimage matching
//! - [`Counter::BlurOp`] - one per arithmetic step in the blur engine
//!
//! The library only increments; resetting and reporting belong to the caller.

use std::fmt;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Named counter slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    /// Pixel array accesses
    PixelAccess,
    /// Pixel comparisons made while matching a subimage
    SubimageCompare,
    /// Inner-loop operations of the blur engine
    BlurOp,
}

impl Counter {
    /// All counters, in report order.
    pub const ALL: [Counter; 3] = [
        Counter::PixelAccess,
        Counter::SubimageCompare,
        Counter::BlurOp,
    ];

    /// Short name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Counter::PixelAccess => "pixmem",
            Counter::SubimageCompare => "cmpsubimage",
            Counter::BlurOp => "blurops",
        }
    }

    fn slot(self) -> usize {
        match self {
            Counter::PixelAccess => 0,
            Counter::SubimageCompare => 1,
            Counter::BlurOp => 2,
        }
    }
}

/// Shared instrumentation context
///
/// Increments use relaxed atomics, so a handle can be shared between
/// images owned by different threads. Counts from operations running
/// concurrently are summed in no particular order.
#[derive(Debug)]
pub struct Counters {
    counts: [AtomicU64; 3],
    started: Mutex<Instant>,
}

impl Default for Counters {
    fn default() -> Self {
        Self::new()
    }
}

impl Counters {
    /// Create a counter set with every count at zero.
    pub fn new() -> Self {
        Self {
            counts: [AtomicU64::new(0), AtomicU64::new(0), AtomicU64::new(0)],
            started: Mutex::new(Instant::now()),
        }
    }

    /// Zero every counter and restart the elapsed-time clock.
    pub fn reset(&self) {
        for count in &self.counts {
            count.store(0, Ordering::Relaxed);
        }
        *self.started.lock().unwrap_or_else(|e| e.into_inner()) = Instant::now();
    }

    /// Add `n` to a counter.
    #[inline]
    pub fn add(&self, counter: Counter, n: u64) {
        self.counts[counter.slot()].fetch_add(n, Ordering::Relaxed);
    }

    /// Current value of a counter.
    pub fn get(&self, counter: Counter) -> u64 {
        self.counts[counter.slot()].load(Ordering::Relaxed)
    }

    /// Time elapsed since construction or the last [`reset`](Self::reset).
    pub fn elapsed(&self) -> Duration {
        self.started
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .elapsed()
    }

    /// Snapshot the counters for display.
    pub fn report(&self) -> CounterReport {
        CounterReport {
            elapsed: self.elapsed(),
            values: Counter::ALL.map(|c| (c, self.get(c))),
        }
    }
}

/// A point-in-time copy of all counters
#[derive(Debug, Clone, PartialEq)]
pub struct CounterReport {
    /// Wall-clock time since the last reset
    pub elapsed: Duration,
    /// Counter values in [`Counter::ALL`] order
    pub values: [(Counter, u64); 3],
}

impl CounterReport {
    /// Value recorded for `counter`.
    pub fn value(&self, counter: Counter) -> u64 {
        self.values
            .iter()
            .find(|(c, _)| *c == counter)
            .map_or(0, |(_, v)| *v)
    }
}

impl fmt::Display for CounterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:>15}", "time")?;
        for (counter, _) in &self.values {
            write!(f, "{:>15}", counter.name())?;
        }
        writeln!(f)?;
        write!(f, "{:>16.6}", self.elapsed.as_secs_f64())?;
        for (_, value) in &self.values {
            write!(f, "{value:>15}")?;
        }
        Ok(())
    }
}
