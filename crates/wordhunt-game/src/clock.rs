//! Elapsed-time clock for a puzzle session.

use std::time::{Duration, Instant};

/// Whole seconds elapsed since a puzzle started.
///
/// Displays as `MM:SS`, with minutes zero-padded to two digits and allowed
/// to grow past 99.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use wordhunt_game::ElapsedTime;
///
/// assert_eq!(ElapsedTime::ZERO.to_string(), "00:00");
/// assert_eq!(ElapsedTime::from(Duration::from_millis(75_900)).to_string(), "01:15");
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
#[display("{:02}:{:02}", _0 / 60, _0 % 60)]
pub struct ElapsedTime(u64);

impl ElapsedTime {
    /// No time elapsed.
    pub const ZERO: Self = Self(0);

    /// Creates an elapsed time from whole seconds.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the elapsed whole seconds.
    #[must_use]
    pub const fn as_secs(self) -> u64 {
        self.0
    }
}

impl From<Duration> for ElapsedTime {
    fn from(duration: Duration) -> Self {
        Self(duration.as_secs())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum ClockState {
    #[default]
    Idle,
    Running {
        started_at: Instant,
        reported: ElapsedTime,
    },
    Stopped {
        elapsed: Duration,
    },
}

/// Counts elapsed time from the start of a puzzle with one-second ticks.
///
/// The clock never reads the system time itself; every operation takes the
/// current [`Instant`] from the caller. A stopped or reset clock never
/// ticks.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
///
/// use wordhunt_game::PuzzleClock;
///
/// let t0 = Instant::now();
/// let mut clock = PuzzleClock::new();
/// clock.start(t0);
///
/// assert_eq!(clock.tick(t0 + Duration::from_millis(400)), None);
/// let elapsed = clock.tick(t0 + Duration::from_millis(1_100)).unwrap();
/// assert_eq!(elapsed.to_string(), "00:01");
///
/// clock.stop(t0 + Duration::from_secs(3));
/// assert_eq!(clock.tick(t0 + Duration::from_secs(10)), None);
/// assert_eq!(clock.elapsed(t0 + Duration::from_secs(10)).as_secs(), 3);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleClock {
    state: ClockState,
}

impl PuzzleClock {
    /// Creates an idle clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while the clock is counting.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.state, ClockState::Running { .. })
    }

    /// Starts counting from `now`, discarding any previous time.
    pub fn start(&mut self, now: Instant) {
        self.state = ClockState::Running {
            started_at: now,
            reported: ElapsedTime::ZERO,
        };
    }

    /// Advances the clock to `now`.
    ///
    /// Returns the new elapsed time when a whole-second boundary has been
    /// crossed since the last reported value, and `None` otherwise or when
    /// the clock is not running.
    pub fn tick(&mut self, now: Instant) -> Option<ElapsedTime> {
        let ClockState::Running {
            started_at,
            reported,
        } = &mut self.state
        else {
            return None;
        };
        let elapsed = ElapsedTime::from(now.saturating_duration_since(*started_at));
        if elapsed <= *reported {
            return None;
        }
        *reported = elapsed;
        Some(elapsed)
    }

    /// Freezes the elapsed time at `now`.
    ///
    /// Stopping a clock that is not running has no effect.
    pub fn stop(&mut self, now: Instant) {
        if let ClockState::Running { started_at, .. } = self.state {
            self.state = ClockState::Stopped {
                elapsed: now.saturating_duration_since(started_at),
            };
        }
    }

    /// Discards the elapsed time and returns to idle.
    pub fn reset(&mut self) {
        self.state = ClockState::Idle;
    }

    /// Returns the time elapsed at `now`.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> ElapsedTime {
        match self.state {
            ClockState::Idle => ElapsedTime::ZERO,
            ClockState::Running { started_at, .. } => {
                now.saturating_duration_since(started_at).into()
            }
            ClockState::Stopped { elapsed } => elapsed.into(),
        }
    }

    /// Returns how long after `now` the next tick is due, or `None` if the
    /// clock is not running.
    #[must_use]
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        let ClockState::Running { started_at, .. } = self.state else {
            return None;
        };
        let elapsed = now.saturating_duration_since(started_at);
        let next = Duration::from_secs(elapsed.as_secs() + 1);
        Some(next - elapsed)
    }
}
