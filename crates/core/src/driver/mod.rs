use std::fmt;

use serde::{Deserialize, Serialize};

/// Wall-clock length of one full ramp.
pub const RUN_DURATION_MS: f64 = 2000.0;

/// Lifecycle of a single animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Idle,
    Running,
    Complete,
}

/// Per-tick value snapshot handed to observers. Carries everything the
/// presentation layer needs; observers never reach back into the driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub state: RunState,
    pub progress: f64,
}

type Subscriber = Box<dyn FnMut(ProgressUpdate) + Send>;

/// Converts host wall-clock time into normalized progress and drives a
/// per-tick notification until the run completes.
///
/// The driver never schedules anything itself: the host calls [`tick`] once
/// per frame with a monotonically non-decreasing timestamp in milliseconds.
/// Cancellation is structural: after [`reset`] or [`dispose`] a tick is
/// ignored and no observer fires, so a stale frame callback from the host
/// can never produce a late notification.
///
/// [`tick`]: AnimationDriver::tick
/// [`reset`]: AnimationDriver::reset
/// [`dispose`]: AnimationDriver::dispose
pub struct AnimationDriver {
    duration_ms: f64,
    state: RunState,
    progress: f64,
    origin_ms: Option<f64>,
    subscriber: Option<Subscriber>,
    disposed: bool,
}

impl AnimationDriver {
    /// Creates an idle driver for the fixed 2 second ramp.
    pub fn new() -> Self {
        Self {
            duration_ms: RUN_DURATION_MS,
            state: RunState::Idle,
            progress: 0.0,
            origin_ms: None,
            subscriber: None,
            disposed: false,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Current progress in [0, 1]. 0 while idle, frozen at 1 once complete.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Registers the single observer notified on every successful tick,
    /// replacing any previous one.
    pub fn on_update<F>(&mut self, subscriber: F)
    where
        F: FnMut(ProgressUpdate) + Send + 'static,
    {
        self.subscriber = Some(Box::new(subscriber));
    }

    /// Begins a fresh run. A no-op while a run is already in flight, so a
    /// double start never rewinds progress. The time origin is captured on
    /// the first tick rather than here, which keeps scheduling latency
    /// between `start` and the first frame out of the elapsed time.
    pub fn start(&mut self) {
        if self.disposed || self.state == RunState::Running {
            return;
        }
        self.progress = 0.0;
        self.origin_ms = None;
        self.state = RunState::Running;
    }

    /// Advances the run to the host timestamp `now_ms` and notifies the
    /// observer. Returns `None` without side effects unless a run is in
    /// flight.
    pub fn tick(&mut self, now_ms: f64) -> Option<ProgressUpdate> {
        if self.disposed || self.state != RunState::Running {
            return None;
        }

        let origin = *self.origin_ms.get_or_insert(now_ms);
        let elapsed = (now_ms - origin).max(0.0);
        self.progress = (elapsed / self.duration_ms).min(1.0);
        if self.progress >= 1.0 {
            self.state = RunState::Complete;
        }

        let update = ProgressUpdate {
            state: self.state,
            progress: self.progress,
        };
        if let Some(subscriber) = self.subscriber.as_mut() {
            subscriber(update);
        }
        Some(update)
    }

    /// Returns the driver to `Idle` with zero progress from any state and
    /// clears the recorded time origin, so the next [`start`] begins a fresh
    /// run. Guarantees that no notification fires after it returns.
    ///
    /// [`start`]: AnimationDriver::start
    pub fn reset(&mut self) {
        self.state = RunState::Idle;
        self.progress = 0.0;
        self.origin_ms = None;
    }

    /// Permanently tears the driver down: subsequent `start` and `tick` calls
    /// are no-ops and the observer is released. Call when the owning view
    /// goes away.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.subscriber = None;
        self.reset();
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AnimationDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationDriver")
            .field("duration_ms", &self.duration_ms)
            .field("state", &self.state)
            .field("progress", &self.progress)
            .field("origin_ms", &self.origin_ms)
            .field("subscriber", &self.subscriber.is_some())
            .field("disposed", &self.disposed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn half_and_full_duration_map_to_half_and_full_progress() {
        let mut driver = AnimationDriver::new();
        driver.start();

        // First tick pins the origin at the host timestamp.
        let update = driver.tick(10_000.0).unwrap();
        assert_eq!(update.progress, 0.0);
        assert_eq!(update.state, RunState::Running);

        let update = driver.tick(11_000.0).unwrap();
        assert_eq!(update.progress, 0.5);
        assert_eq!(update.state, RunState::Running);

        let update = driver.tick(12_000.0).unwrap();
        assert_eq!(update.progress, 1.0);
        assert_eq!(update.state, RunState::Complete);
    }

    #[test]
    fn progress_is_clamped_once_the_run_overshoots() {
        let mut driver = AnimationDriver::new();
        driver.start();
        driver.tick(0.0);

        let update = driver.tick(9_999.0).unwrap();
        assert_eq!(update.progress, 1.0);
        assert_eq!(update.state, RunState::Complete);
    }

    #[test]
    fn ticks_are_ignored_after_completion() {
        let mut driver = AnimationDriver::new();
        driver.start();
        driver.tick(0.0);
        driver.tick(2_000.0);

        assert_eq!(driver.state(), RunState::Complete);
        assert!(driver.tick(3_000.0).is_none());
    }

    #[test]
    fn double_start_does_not_rewind_a_running_ramp() {
        let mut driver = AnimationDriver::new();
        driver.start();
        driver.tick(0.0);
        driver.tick(500.0);

        driver.start();

        assert_eq!(driver.state(), RunState::Running);
        assert_eq!(driver.progress(), 0.25);
    }

    #[test]
    fn reset_returns_to_idle_and_silences_ticks() {
        let notified = Arc::new(Mutex::new(Vec::new()));
        let sink = notified.clone();

        let mut driver = AnimationDriver::new();
        driver.on_update(move |update| sink.lock().unwrap().push(update.progress));
        driver.start();
        driver.tick(0.0);
        driver.tick(1_400.0);
        assert_eq!(driver.progress(), 0.7);

        driver.reset();
        assert_eq!(driver.state(), RunState::Idle);
        assert_eq!(driver.progress(), 0.0);

        // A stale host frame after reset must not notify.
        assert!(driver.tick(1_500.0).is_none());
        assert_eq!(notified.lock().unwrap().as_slice(), &[0.0, 0.7]);
    }

    #[test]
    fn restart_after_reset_uses_a_fresh_time_origin() {
        let mut driver = AnimationDriver::new();
        driver.start();
        driver.tick(0.0);
        driver.tick(1_000.0);
        driver.reset();

        driver.start();
        let update = driver.tick(5_000.0).unwrap();
        assert_eq!(update.progress, 0.0);

        let update = driver.tick(6_000.0).unwrap();
        assert_eq!(update.progress, 0.5);
    }

    #[test]
    fn reset_from_idle_is_a_harmless_no_op() {
        let mut driver = AnimationDriver::new();
        driver.reset();
        assert_eq!(driver.state(), RunState::Idle);
        assert_eq!(driver.progress(), 0.0);
    }

    #[test]
    fn progress_never_decreases_within_a_run() {
        let mut driver = AnimationDriver::new();
        driver.start();

        let mut previous = 0.0;
        for frame in 0..130 {
            if let Some(update) = driver.tick(frame as f64 * 16.0) {
                assert!(update.progress >= previous);
                previous = update.progress;
            }
        }
        assert_eq!(driver.state(), RunState::Complete);
    }

    #[test]
    fn a_clock_running_backwards_does_not_produce_negative_progress() {
        let mut driver = AnimationDriver::new();
        driver.start();
        driver.tick(1_000.0);

        let update = driver.tick(400.0).unwrap();
        assert_eq!(update.progress, 0.0);
    }

    #[test]
    fn dispose_makes_the_driver_permanently_inert() {
        let notified = Arc::new(Mutex::new(0_usize));
        let sink = notified.clone();

        let mut driver = AnimationDriver::new();
        driver.on_update(move |_| *sink.lock().unwrap() += 1);
        driver.start();
        driver.tick(0.0);
        assert_eq!(*notified.lock().unwrap(), 1);

        driver.dispose();
        assert!(driver.tick(100.0).is_none());
        driver.start();
        assert_eq!(driver.state(), RunState::Idle);
        assert!(driver.tick(200.0).is_none());
        assert_eq!(*notified.lock().unwrap(), 1);
    }
}
