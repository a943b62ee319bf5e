//! Monotonic time for the poll throttle.
//!
//! The console never spawns timers; it only asks "how late is it now?" at
//! the start of each [`poll`](crate::console::Console::poll) so it can skip
//! work when called again too soon. Any millisecond tick counter satisfies
//! the contract, including a plain closure:
//!
//! ```rust
//! use libconsole::time::Monotonic;
//!
//! let mut ticks = 0u64;
//! let mut clock = move || {
//!     ticks += 1;
//!     ticks
//! };
//! assert_eq!(clock.now_ms(), 1);
//! ```
//!
//! The source must be monotonic (never step backwards); wrap-around of the
//! `u64` millisecond count is tolerated by the throttle arithmetic.

/// A monotonic millisecond clock.
///
/// On bare metal this is typically backed by a SysTick-driven counter or a
/// free-running hardware timer. On hosted platforms, [`StdClock`] (behind
/// the `std` feature) wraps `std::time::Instant`.
pub trait Monotonic {
    /// Milliseconds elapsed since some fixed, arbitrary epoch.
    fn now_ms(&mut self) -> u64;
}

impl<F> Monotonic for F
where
    F: FnMut() -> u64,
{
    fn now_ms(&mut self) -> u64 {
        self()
    }
}

/// Monotonic clock backed by `std::time::Instant`.
///
/// The epoch is the moment the clock was created.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Create a clock whose epoch is now.
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Monotonic for StdClock {
    fn now_ms(&mut self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
