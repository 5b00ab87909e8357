// playback.rs - timed generation playback

use std::time::{Duration, Instant};

/// Upper bound on catch-up ticks per poll, so one stalled frame cannot
/// freeze the app stepping through a backlog.
const MAX_TICKS_PER_POLL: u32 = 10;

#[derive(Clone, Copy, Debug)]
struct IntervalTimer {
    period: Duration,
    next_fire: Instant,
}

/// Drives generation stepping at a fixed cadence.
///
/// The schedule is an owned value: it exists exactly while the simulation
/// runs, at most one exists, and changing the speed replaces it. Stopping
/// drops it, so a stale schedule cannot fire afterwards. Ticks are
/// delivered by polling from the frame loop.
#[derive(Clone, Debug)]
pub struct Playback {
    period: Duration,
    timer: Option<IntervalTimer>,
}

impl Playback {
    pub fn new(period: Duration) -> Self {
        Self { period, timer: None }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start or stop. Starting schedules the first tick one full period out;
    /// stopping drops the schedule.
    pub fn toggle(&mut self, now: Instant) {
        if self.timer.take().is_none() {
            self.timer = Some(IntervalTimer {
                period: self.period,
                next_fire: now + self.period,
            });
        }
    }

    /// Change the cadence. While running, the active schedule is dropped
    /// before a fresh one is created, so the new period takes effect on the
    /// next tick and schedules are never duplicated. While stopped, the
    /// period is stored for the next start.
    pub fn set_period(&mut self, period: Duration, now: Instant) {
        self.period = period;
        if self.timer.take().is_some() {
            self.timer = Some(IntervalTimer {
                period,
                next_fire: now + period,
            });
        }
    }

    /// Number of ticks due by `now`, at most [`MAX_TICKS_PER_POLL`].
    ///
    /// The schedule advances by whole periods, so cadence does not drift
    /// with frame timing. When the backlog exceeds the cap the cadence is
    /// restarted from `now` instead of replaying the rest.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };
        let mut ticks = 0;
        while timer.next_fire <= now && ticks < MAX_TICKS_PER_POLL {
            timer.next_fire += timer.period;
            ticks += 1;
        }
        if ticks == MAX_TICKS_PER_POLL && timer.next_fire <= now {
            timer.next_fire = now + timer.period;
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(100);

    fn at(t0: Instant, ms: u64) -> Instant {
        t0 + Duration::from_millis(ms)
    }

    #[test]
    fn stopped_playback_never_ticks() {
        let t0 = Instant::now();
        let mut playback = Playback::new(PERIOD);
        assert!(!playback.is_running());
        assert_eq!(playback.poll(at(t0, 10_000)), 0);
    }

    #[test]
    fn first_tick_after_one_full_period() {
        let t0 = Instant::now();
        let mut playback = Playback::new(PERIOD);
        playback.toggle(t0);
        assert!(playback.is_running());
        assert_eq!(playback.poll(at(t0, 99)), 0);
        assert_eq!(playback.poll(at(t0, 100)), 1);
    }

    #[test]
    fn cadence_does_not_drift() {
        let t0 = Instant::now();
        let mut playback = Playback::new(PERIOD);
        playback.toggle(t0);

        // Polled late: both elapsed ticks are delivered and the schedule
        // stays aligned to t0, not to the poll time.
        assert_eq!(playback.poll(at(t0, 250)), 2);
        assert_eq!(playback.poll(at(t0, 299)), 0);
        assert_eq!(playback.poll(at(t0, 301)), 1);
    }

    #[test]
    fn toggle_off_clears_the_schedule() {
        let t0 = Instant::now();
        let mut playback = Playback::new(PERIOD);
        playback.toggle(t0);
        playback.toggle(at(t0, 50));
        assert!(!playback.is_running());
        assert_eq!(playback.poll(at(t0, 10_000)), 0);
    }

    #[test]
    fn speed_change_while_running_replaces_the_schedule() {
        let t0 = Instant::now();
        let mut playback = Playback::new(PERIOD);
        playback.toggle(t0);
        playback.set_period(Duration::from_millis(200), at(t0, 50));

        // The old 100ms schedule is gone: nothing fires at t0+100.
        assert_eq!(playback.poll(at(t0, 150)), 0);
        // The new one fires a full new period after the change, once.
        assert_eq!(playback.poll(at(t0, 250)), 1);
        assert_eq!(playback.poll(at(t0, 260)), 0);
    }

    #[test]
    fn speed_change_while_stopped_is_stored() {
        let t0 = Instant::now();
        let mut playback = Playback::new(PERIOD);
        playback.set_period(Duration::from_millis(50), t0);
        assert!(!playback.is_running());
        assert_eq!(playback.period(), Duration::from_millis(50));

        playback.toggle(at(t0, 1_000));
        assert_eq!(playback.poll(at(t0, 1_050)), 1);
    }

    #[test]
    fn backlog_is_capped_then_restarted() {
        let t0 = Instant::now();
        let mut playback = Playback::new(PERIOD);
        playback.toggle(t0);

        // Ten seconds behind: one capped burst, then a clean restart
        // instead of replaying the backlog.
        assert_eq!(playback.poll(at(t0, 10_000)), 10);
        assert_eq!(playback.poll(at(t0, 10_001)), 0);
        assert_eq!(playback.poll(at(t0, 10_100)), 1);
    }
}
