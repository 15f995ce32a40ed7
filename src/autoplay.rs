//! Autoplay timer for the carousel.
//!
//! A repeating tick source in the style of the bubbletea timer: each instance
//! has a unique id, and every start bumps an internal tag so that ticks
//! scheduled before a stop or restart are recognized as stale and dropped.
//! That makes [`Model::stop`] and [`Model::cancel`] effective immediately
//! even though an already-scheduled tick command cannot be recalled.
//!
//! The timer only decides *when* to step; the carousel decides *what* a step
//! does (see [`crate::navigation::Navigator::tick`]).
//!
//! ```rust
//! use bubbletea_carousel::autoplay::Model;
//! use std::time::Duration;
//!
//! let mut autoplay = Model::new(Duration::from_millis(1500));
//! assert!(!autoplay.running());
//!
//! let _tick = autoplay.start();
//! assert!(autoplay.running());
//!
//! autoplay.stop();
//! assert!(!autoplay.running());
//! ```

use crate::timing::DEFAULT_AUTOPLAY_MS;
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

// Internal ID management for autoplay instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

fn non_zero(interval: Duration) -> Duration {
    if interval.is_zero() {
        log::warn!("autoplay interval of zero; falling back to {DEFAULT_AUTOPLAY_MS}ms");
        Duration::from_millis(DEFAULT_AUTOPLAY_MS)
    } else {
        interval
    }
}

/// Sent every interval while autoplay runs.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// The autoplay instance that scheduled this tick.
    pub id: i64,
    tag: i64,
}

/// Pauses or resumes an autoplay instance. An id of 0 addresses every
/// instance.
#[derive(Debug, Clone)]
pub struct StartStopMsg {
    /// The targeted autoplay instance, or 0 for all.
    pub id: i64,
    running: bool,
}

/// Autoplay timer state.
///
/// Cloning yields a separate, stopped timer with its own id and the same
/// interval. Ticks scheduled by the original are never accepted by the clone.
#[derive(Debug)]
pub struct Model {
    interval: Duration,
    id: i64,
    tag: i64,
    running: bool,
    finished: bool,
}

impl Model {
    /// Creates a stopped timer. A zero interval is replaced by the
    /// 3000 ms default.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: non_zero(interval),
            id: next_id(),
            tag: 0,
            running: false,
            finished: false,
        }
    }

    /// The unique id of this timer.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The tick interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether ticks are currently being accepted.
    pub fn running(&self) -> bool {
        self.running && !self.finished
    }

    /// Whether autoplay stopped itself at the end of a non-looping track.
    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Starts (or restarts) ticking and returns the first tick command.
    /// Any tick scheduled earlier becomes stale.
    pub fn start(&mut self) -> Cmd {
        self.tag += 1;
        self.running = true;
        self.finished = false;
        log::debug!("autoplay {} started every {:?}", self.id, self.interval);
        self.tick()
    }

    /// Restarts with a new interval. A zero interval is replaced by the
    /// 3000 ms default.
    pub fn restart(&mut self, interval: Duration) -> Cmd {
        self.interval = non_zero(interval);
        self.start()
    }

    /// Stops ticking. Pending ticks become stale.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("autoplay {} stopped", self.id);
        }
        self.tag += 1;
        self.running = false;
    }

    /// Stops for good after reaching the end. Only [`Model::start`] revives it.
    pub fn finish(&mut self) {
        log::info!("autoplay {} reached the end of the track", self.id);
        self.stop();
        self.finished = true;
    }

    /// Teardown: stops and invalidates every pending tick.
    pub fn cancel(&mut self) {
        self.stop();
    }

    /// Returns a command that pauses this timer.
    pub fn pause_cmd(&self) -> Cmd {
        self.start_stop(false)
    }

    /// Returns a command that resumes this timer.
    pub fn resume_cmd(&self) -> Cmd {
        self.start_stop(true)
    }

    /// Whether a tick belongs to this timer's current run.
    pub fn accepts(&self, msg: &TickMsg) -> bool {
        self.running() && msg.id == self.id && msg.tag == self.tag
    }

    /// Schedules the next tick of the current run.
    pub fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Applies a start/stop message. Returns the first tick when resuming.
    /// A finished timer ignores resume requests.
    pub fn handle_start_stop(&mut self, msg: &StartStopMsg) -> Option<Cmd> {
        if msg.id != 0 && msg.id != self.id {
            return None;
        }
        if msg.running {
            if self.running() || self.finished {
                return None;
            }
            Some(self.start())
        } else {
            self.stop();
            None
        }
    }

    fn start_stop(&self, running: bool) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(StartStopMsg { id, running }) as Msg
        })
    }
}

impl Clone for Model {
    fn clone(&self) -> Self {
        Self::new(self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick_for(model: &Model) -> TickMsg {
        TickMsg {
            id: model.id(),
            tag: model.tag,
        }
    }

    #[test]
    fn test_unique_ids() {
        let a = Model::new(Duration::from_secs(1));
        let b = Model::new(Duration::from_secs(1));
        assert_ne!(a.id(), b.id());
        assert!(a.id() > 0);
    }

    #[test]
    fn test_new_is_stopped() {
        let model = Model::new(Duration::from_millis(1500));
        assert!(!model.running());
        assert!(!model.accepts(&tick_for(&model)));
        assert_eq!(model.interval(), Duration::from_millis(1500));
    }

    #[test]
    fn test_start_accepts_only_current_tag() {
        let mut model = Model::new(Duration::from_secs(3));
        let _ = model.start();
        let first = tick_for(&model);
        assert!(model.accepts(&first));

        let _ = model.restart(Duration::from_secs(1));
        assert!(!model.accepts(&first));
        assert!(model.accepts(&tick_for(&model)));
    }

    #[test]
    fn test_stop_invalidates_pending_ticks() {
        let mut model = Model::new(Duration::from_secs(3));
        let _ = model.start();
        let pending = tick_for(&model);
        model.cancel();
        assert!(!model.accepts(&pending));
    }

    #[test]
    fn test_wrong_id_rejected() {
        let mut model = Model::new(Duration::from_secs(3));
        let _ = model.start();
        let foreign = TickMsg {
            id: model.id() + 999,
            tag: model.tag,
        };
        assert!(!model.accepts(&foreign));
    }

    #[test]
    fn test_zero_interval_uses_default() {
        let mut model = Model::new(Duration::ZERO);
        assert_eq!(model.interval(), Duration::from_millis(3000));
        let _ = model.restart(Duration::from_millis(500));
        assert_eq!(model.interval(), Duration::from_millis(500));
        let _ = model.restart(Duration::ZERO);
        assert_eq!(model.interval(), Duration::from_millis(3000));
    }

    #[test]
    fn test_clone_is_a_separate_stopped_timer() {
        let mut model = Model::new(Duration::from_secs(2));
        let _ = model.start();
        let pending = tick_for(&model);

        let mut copy = model.clone();
        assert_ne!(copy.id(), model.id());
        assert_eq!(copy.interval(), model.interval());
        assert!(!copy.running());

        let _ = copy.start();
        assert!(!copy.accepts(&pending));
        assert!(model.accepts(&pending));
    }

    #[test]
    fn test_finish_is_terminal_until_started() {
        let mut model = Model::new(Duration::from_secs(3));
        let _ = model.start();
        model.finish();
        assert!(model.finished());
        assert!(!model.running());
        let _ = model.start();
        assert!(!model.finished());
        assert!(model.running());
    }

    #[test]
    fn test_start_stop_messages() {
        let mut model = Model::new(Duration::from_secs(3));
        let _ = model.start();

        let pause = StartStopMsg {
            id: model.id(),
            running: false,
        };
        assert!(model.handle_start_stop(&pause).is_none());
        assert!(!model.running());

        let other = StartStopMsg {
            id: model.id() + 1,
            running: true,
        };
        assert!(model.handle_start_stop(&other).is_none());
        assert!(!model.running());

        let resume_all = StartStopMsg {
            id: 0,
            running: true,
        };
        assert!(model.handle_start_stop(&resume_all).is_some());
        assert!(model.running());

        model.finish();
        assert!(model.handle_start_stop(&resume_all).is_none());
        assert!(!model.running());
    }
}
