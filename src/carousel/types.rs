//! Messages exchanged between the carousel and its host.

use crate::navigation::Direction;
use std::time::Duration;

/// Debounce applied to resize notifications.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Delay before re-measuring after the carousel becomes visible.
pub const VISIBILITY_DELAY: Duration = Duration::from_millis(50);

/// Delay of the follow-up measurement pass after init, for slides whose size
/// settles late.
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

/// Why a deferred re-measure was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemeasureTrigger {
    /// The container was resized.
    Resize,
    /// The carousel became visible.
    Visible,
    /// Follow-up pass after the first measurement.
    Settle,
}

impl RemeasureTrigger {
    /// How long the trigger waits before measuring.
    pub fn delay(self) -> Duration {
        match self {
            RemeasureTrigger::Resize => RESIZE_DEBOUNCE,
            RemeasureTrigger::Visible => VISIBILITY_DELAY,
            RemeasureTrigger::Settle => SETTLE_DELAY,
        }
    }
}

/// A deferred re-measure. Only the most recently requested one is honored.
#[derive(Debug, Clone)]
pub struct RemeasureMsg {
    /// Carousel instance.
    pub id: i64,
    pub(super) tag: i64,
    /// What asked for it.
    pub trigger: RemeasureTrigger,
}

/// The host's viewport for the carousel changed size. An id of 0 addresses
/// every carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeMsg {
    /// Carousel instance, or 0 for all.
    pub id: i64,
    /// New container width.
    pub width: f64,
    /// New container height.
    pub height: f64,
}

/// The carousel was shown or hidden. An id of 0 addresses every carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityMsg {
    /// Carousel instance, or 0 for all.
    pub id: i64,
    /// Whether it is now visible.
    pub visible: bool,
}

/// Emitted after a previous/next control was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatedMsg {
    /// Carousel instance.
    pub id: i64,
    /// Which control.
    pub direction: Direction,
    /// The index after the step.
    pub index: usize,
}
