//! The navigation engine.
//!
//! [`Navigator`] owns the carousel's position: the current slide index, the
//! translate offset of the track, and whether the previous/next controls are
//! enabled. It reads slide extents from its [`Tracker`] and behavior from its
//! [`Config`].
//!
//! Two stepping modes exist:
//!
//! - **single-item mode** moves exactly one slide per step and the offset is
//!   always the start of the current slide;
//! - **continuous mode** moves the track by the configured
//!   [`ScrollSize`](crate::config::ScrollSize), clamped to the track's ends.
//!
//! Every operation runs to completion synchronously. Operations whose
//! preconditions do not hold (index out of range, nothing measured yet,
//! control disabled) leave the state untouched instead of failing.
//!
//! Offsets are only computed from geometry that has one extent per slide.
//! While the extent arrays and the slide count disagree, the navigator
//! behaves as if nothing were measured until the next measurement.
//!
//! ```rust
//! use bubbletea_carousel::config::Config;
//! use bubbletea_carousel::dimensions::Size;
//! use bubbletea_carousel::navigation::{Navigator, Position};
//!
//! let config = Config::new().with_single_item_mode(true);
//! let mut nav = Navigator::new(config, 3, 0);
//! nav.set_geometry(Size::new(300.0, 200.0), vec![300.0; 3], vec![200.0; 3]);
//!
//! assert_eq!(nav.position(), Position::AtStart);
//! nav.next();
//! nav.next();
//! assert_eq!(nav.index(), 2);
//! assert_eq!(nav.translate(), 600.0);
//! assert_eq!(nav.position(), Position::AtEnd);
//! ```

use crate::config::Config;
use crate::dimensions::{Measurable, Size, Tracker};

/// Slack allowed when deciding whether more track remains past the viewport,
/// absorbing sub-pixel rounding in measured sizes.
pub const OVERFLOW_EPSILON: f64 = 1.0;

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the start of the track.
    Previous,
    /// Toward the end of the track.
    Next,
}

/// Where the carousel stands, as projected from the control flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// There are no slides.
    Idle,
    /// Both controls disabled: a single slide, nothing to scroll, or
    /// navigation turned off.
    AtStartAndEnd,
    /// Only "next" is available.
    AtStart,
    /// Only "previous" is available.
    AtEnd,
    /// Both controls available, including every looping state.
    Scrolling,
}

/// Outcome of one autoplay tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing measured yet; the tick was ignored.
    Skipped,
    /// Moved forward, as if "next" had been pressed.
    Advanced,
    /// Reached the end and wrapped back to the first slide.
    Wrapped,
    /// Reached the end without looping. Autoplay must stop for good.
    Finished,
}

/// Per-slide indicator data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    /// Slide index.
    pub index: usize,
    /// Whether this is the current slide.
    pub active: bool,
    /// Offset of the slide from the start of the track.
    pub offset: f64,
}

/// Navigation state of one carousel instance.
#[derive(Debug, Clone)]
pub struct Navigator {
    config: Config,
    tracker: Tracker,
    slide_count: usize,
    index: usize,
    translate: f64,
    prev_enabled: bool,
    next_enabled: bool,
}

impl Navigator {
    /// Creates a navigator at `active_index` (clamped into range) with a zero
    /// offset.
    pub fn new(config: Config, slide_count: usize, active_index: usize) -> Self {
        let mut nav = Self {
            config,
            tracker: Tracker::new(),
            slide_count,
            index: clamp_index(active_index, slide_count),
            translate: 0.0,
            prev_enabled: false,
            next_enabled: false,
        };
        nav.recompute_buttons();
        nav
    }

    /// The configuration in effect.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The measured geometry.
    pub fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// The current slide index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The current translate offset along the axis of travel.
    pub fn translate(&self) -> f64 {
        self.translate
    }

    /// The offset as an `(x, y)` shift of the track, negative along the axis
    /// of travel.
    pub fn translate_vector(&self) -> (f64, f64) {
        if self.config.is_vertical() {
            (0.0, -self.translate)
        } else {
            (-self.translate, 0.0)
        }
    }

    /// Whether the "previous" control is enabled.
    pub fn prev_enabled(&self) -> bool {
        self.prev_enabled
    }

    /// Whether the "next" control is enabled.
    pub fn next_enabled(&self) -> bool {
        self.next_enabled
    }

    /// The state projection of the control flags.
    pub fn position(&self) -> Position {
        if self.slide_count == 0 {
            return Position::Idle;
        }
        match (self.prev_enabled, self.next_enabled) {
            (false, false) => Position::AtStartAndEnd,
            (false, true) => Position::AtStart,
            (true, false) => Position::AtEnd,
            (true, true) => Position::Scrolling,
        }
    }

    /// Replaces the configuration and re-derives offset and controls from the
    /// current geometry. Callers that switch mode or orientation should
    /// re-measure afterwards.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
        self.on_geometry_changed();
    }

    /// Replaces the slide count, clamping the index into the new range.
    pub fn set_slide_count(&mut self, slide_count: usize) {
        self.slide_count = slide_count;
        self.index = clamp_index(self.index, slide_count);
        if slide_count == 0 {
            self.translate = 0.0;
        }
        self.on_geometry_changed();
    }

    /// Measures the container and slides, then re-derives offset and controls.
    /// The index is kept.
    pub fn remeasure<M: Measurable>(&mut self, container: Size, items: &[M]) {
        self.tracker.remeasure(
            container,
            items,
            self.config.orientation,
            self.config.single_item_mode,
        );
        self.on_geometry_changed();
    }

    /// Installs extents measured elsewhere, then re-derives offset and controls.
    pub fn set_geometry(&mut self, container: Size, widths: Vec<f64>, heights: Vec<f64>) {
        self.tracker.set_geometry(container, widths, heights);
        self.on_geometry_changed();
    }

    /// Updates only the container size.
    pub fn set_container(&mut self, container: Size) {
        self.tracker.set_container(container);
        self.on_geometry_changed();
    }

    /// Forgets every measurement.
    pub fn clear_geometry(&mut self) {
        self.tracker.clear();
        self.on_geometry_changed();
    }

    /// Whether the tracker holds one measured extent per slide. Position math
    /// is deferred while this is false.
    pub fn has_geometry(&self) -> bool {
        self.slide_count > 0
            && self.tracker.is_measured()
            && self.tracker.is_consistent(self.slide_count)
    }

    /// Distance one continuous-mode step covers.
    pub fn scroll_amount(&self) -> f64 {
        self.config.scroll_size.amount(self.container_extent())
    }

    /// Total track length along the axis of travel.
    pub fn track_extent(&self) -> f64 {
        if !self.has_geometry() {
            return 0.0;
        }
        self.tracker
            .track_extent(self.config.orientation, self.slide_count, self.config.gap())
    }

    /// The largest offset that keeps the viewport filled. Never negative.
    pub fn max_translate(&self) -> f64 {
        if !self.has_geometry() {
            return 0.0;
        }
        self.tracker
            .max_translate(self.config.orientation, self.slide_count, self.config.gap())
    }

    /// Offset of a slide from the start of the track.
    pub fn offset_of(&self, index: usize) -> f64 {
        if !self.has_geometry() {
            return 0.0;
        }
        self.tracker
            .offset_of(index, self.config.orientation, self.config.gap())
    }

    /// Sets the offset to the start of the current slide. Without usable
    /// geometry only index 0 has a known offset; other slides keep the
    /// current offset until the next measurement re-derives it.
    pub fn update_translate_position(&mut self) {
        if self.index == 0 {
            self.translate = 0.0;
        } else if self.has_geometry() {
            self.translate = self.offset_of(self.index);
        }
    }

    /// Steps backward. Returns the resulting index, or `None` if the control
    /// was disabled.
    pub fn previous(&mut self) -> Option<usize> {
        if !self.prev_enabled {
            return None;
        }
        let (from_index, from_translate) = (self.index, self.translate);

        if self.config.single_item_mode {
            if self.index > 0 {
                self.index -= 1;
                self.update_translate_position();
            } else if self.config.looping && self.slide_count > 0 {
                self.index = self.slide_count - 1;
                self.update_translate_position();
            }
        } else {
            self.translate = (self.translate - self.scroll_amount()).max(0.0);
        }

        self.recompute_buttons();
        log::trace!(
            "previous: index {from_index} -> {}, translate {from_translate} -> {}",
            self.index,
            self.translate
        );
        Some(self.index)
    }

    /// Steps forward. Returns the resulting index, or `None` if the control was
    /// disabled or there is no geometry for the current slides.
    pub fn next(&mut self) -> Option<usize> {
        if !self.next_enabled || !self.has_geometry() {
            return None;
        }
        let (from_index, from_translate) = (self.index, self.translate);

        if self.config.single_item_mode {
            if self.index + 1 < self.slide_count {
                self.index += 1;
                self.update_translate_position();
            } else if self.config.looping {
                self.index = 0;
                self.translate = 0.0;
            }
        } else {
            self.translate = (self.translate + self.scroll_amount()).min(self.max_translate());
        }

        self.recompute_buttons();
        log::trace!(
            "next: index {from_index} -> {}, translate {from_translate} -> {}",
            self.index,
            self.translate
        );
        Some(self.index)
    }

    /// Jumps to a slide. Returns whether anything happened: targets equal to
    /// the current index or outside `0..slide_count` are ignored.
    pub fn go_to(&mut self, target: usize) -> bool {
        if target == self.index || target >= self.slide_count {
            return false;
        }
        let from_index = self.index;
        self.index = target;

        if self.config.single_item_mode {
            self.update_translate_position();
        } else if self.has_geometry() {
            self.translate = self.offset_of(target).clamp(0.0, self.max_translate());
        }

        self.recompute_buttons();
        log::trace!(
            "go_to: index {from_index} -> {target}, translate {}",
            self.translate
        );
        true
    }

    /// The index one step before `active`: wraps to the last slide when
    /// looping, otherwise stays at 0.
    pub fn prev_index(&self, active: usize) -> usize {
        if self.slide_count == 0 {
            return active;
        }
        if active > 0 {
            active - 1
        } else if self.config.looping {
            self.slide_count - 1
        } else {
            active
        }
    }

    /// Moves to [`Navigator::prev_index`] of the current slide, ignoring the
    /// control flags. Returns whether the index changed.
    pub fn go_to_prev_slide(&mut self) -> bool {
        let target = self.prev_index(self.index);
        if target == self.index {
            return false;
        }
        self.index = target;
        self.update_translate_position();
        self.recompute_buttons();
        true
    }

    /// One autoplay step.
    ///
    /// At the end of the track a looping carousel wraps to the first slide and
    /// a non-looping one reports [`TickOutcome::Finished`]. Otherwise the step
    /// is the same transition as [`Navigator::next`].
    pub fn tick(&mut self) -> TickOutcome {
        if !self.has_geometry() {
            return TickOutcome::Skipped;
        }
        if self.translate >= self.max_translate() {
            if !self.config.looping {
                return TickOutcome::Finished;
            }
            self.translate = 0.0;
            self.index = 0;
            self.recompute_buttons();
            log::trace!("autoplay wrapped to start");
            return TickOutcome::Wrapped;
        }
        self.next();
        TickOutcome::Advanced
    }

    /// Per-slide indicator data for the current state.
    pub fn indicators(&self) -> Vec<Indicator> {
        (0..self.slide_count)
            .map(|index| Indicator {
                index,
                active: index == self.index,
                offset: self.offset_of(index),
            })
            .collect()
    }

    /// Re-derives the control flags from the current state.
    ///
    /// Rules, first match wins:
    /// 1. single-item mode with several slides: both enabled when looping,
    ///    otherwise by index;
    /// 2. navigation hidden, or at most one slide: both disabled;
    /// 3. looping: both enabled;
    /// 4. otherwise by offset, with [`OVERFLOW_EPSILON`] slack at the end.
    pub fn recompute_buttons(&mut self) {
        let count = self.slide_count;
        let (prev, next) = if count > 1 && self.config.single_item_mode {
            if self.config.looping {
                (true, true)
            } else {
                (self.index > 0, self.index + 1 < count)
            }
        } else if !self.config.show_navigation || count <= 1 {
            (false, false)
        } else if self.config.looping {
            (true, true)
        } else {
            let remaining = self.track_extent() - self.translate;
            (
                self.translate > 0.0,
                remaining > self.container_extent() + OVERFLOW_EPSILON,
            )
        };
        self.prev_enabled = prev;
        self.next_enabled = next;
    }

    fn container_extent(&self) -> f64 {
        self.tracker.container_extent(self.config.orientation)
    }

    fn on_geometry_changed(&mut self) {
        if self.has_geometry() {
            if self.config.single_item_mode {
                self.update_translate_position();
            } else {
                self.translate = self.translate.clamp(0.0, self.max_translate());
            }
        }
        self.recompute_buttons();
    }
}

fn clamp_index(index: usize, slide_count: usize) -> usize {
    index.min(slide_count.saturating_sub(1))
}
