use super::keys::CarouselKeyMap;
use super::style::CarouselStyles;
use super::types::{NavigatedMsg, RemeasureMsg, RemeasureTrigger};
use crate::autoplay;
use crate::config::Config;
use crate::dimensions::{Measurable, Size};
use crate::navigation::{Direction, Indicator, Navigator, Position};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// A carousel over slides of type `T`.
///
/// The model owns the slides, the navigation state, and the autoplay timer.
/// Slide content is drawn by the host; [`Model::view`] renders the controls
/// and indicators, and [`Model::translate_vector`] tells the host how far to
/// shift its track.
///
/// A clone is a separate carousel: it gets a fresh id, so remeasure, resize,
/// and autoplay messages addressed to the original are ignored by it. Its
/// autoplay timer is stopped until [`Model::init`] or [`Model::set_config`]
/// starts it again.
#[derive(Debug)]
pub struct Model<T: Measurable> {
    id: i64,
    pub(super) slides: Vec<T>,
    pub(super) navigator: Navigator,
    pub(super) autoplay: autoplay::Model,
    pub(super) container: Size,
    pub(super) remeasure_tag: i64,
    pub(super) initialized: bool,
    pub(super) destroyed: bool,
    pub(super) focus: bool,
    /// Key bindings. Rebuilt when the orientation changes.
    pub keymap: CarouselKeyMap,
    /// View styles. Rebuilt from the configuration by [`Model::set_config`].
    pub styles: CarouselStyles,
}

impl<T: Measurable + Clone> Clone for Model<T> {
    fn clone(&self) -> Self {
        Self {
            id: next_id(),
            slides: self.slides.clone(),
            navigator: self.navigator.clone(),
            autoplay: self.autoplay.clone(),
            container: self.container,
            remeasure_tag: 0,
            initialized: self.initialized,
            destroyed: self.destroyed,
            focus: self.focus,
            keymap: self.keymap.clone(),
            styles: self.styles.clone(),
        }
    }
}

impl<T: Measurable> Model<T> {
    /// Creates a carousel at the first slide. Nothing is measured and no
    /// timer runs until [`Model::init`].
    pub fn new(slides: Vec<T>, config: Config) -> Self {
        if let Err(err) = config.validate() {
            log::warn!("carousel config: {err}; falling back to defaults");
        }
        let autoplay = autoplay::Model::new(config.autoplay_interval());
        let keymap = CarouselKeyMap::for_orientation(config.orientation);
        let styles = CarouselStyles::from_config(&config);
        let navigator = Navigator::new(config, slides.len(), 0);
        Self {
            id: next_id(),
            slides,
            navigator,
            autoplay,
            container: Size::default(),
            remeasure_tag: 0,
            initialized: false,
            destroyed: false,
            focus: false,
            keymap,
            styles,
        }
    }

    /// Starts at `index` instead of the first slide (builder pattern).
    /// Out-of-range values are clamped.
    pub fn with_active_index(mut self, index: usize) -> Self {
        self.navigator = Navigator::new(self.navigator.config().clone(), self.slides.len(), index);
        self
    }

    /// Sets the container size used by the first measurement (builder pattern).
    pub fn with_container_size(mut self, width: f64, height: f64) -> Self {
        self.container = Size::new(width, height);
        self
    }

    /// First measurement pass, autoplay start, and a follow-up measurement
    /// scheduled [`SETTLE_DELAY`](super::SETTLE_DELAY) later.
    pub fn init(&mut self) -> Option<Cmd> {
        if self.destroyed {
            return None;
        }
        self.initialized = true;
        self.remeasure();

        let mut cmds = Vec::new();
        if self.navigator.config().autoplay {
            let interval = self.navigator.config().autoplay_interval();
            cmds.push(self.autoplay.restart(interval));
        }
        if let Some(cmd) = self.request_remeasure(RemeasureTrigger::Settle) {
            cmds.push(cmd);
        }
        combine(cmds)
    }

    /// Tears the carousel down: stops autoplay, drops any pending re-measure,
    /// forgets slides and geometry. Every later call and message is a no-op.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.autoplay.cancel();
        self.remeasure_tag += 1;
        self.slides.clear();
        self.navigator.set_slide_count(0);
        self.navigator.clear_geometry();
        self.destroyed = true;
        log::debug!("carousel {} destroyed", self.id);
    }

    /// Replaces the slides. The index is clamped into the new range and, once
    /// initialized, the carousel re-measures.
    pub fn set_slides(&mut self, slides: Vec<T>) {
        if self.destroyed {
            return;
        }
        self.slides = slides;
        self.navigator.set_slide_count(self.slides.len());
        if self.initialized {
            self.remeasure();
        }
    }

    /// Replaces the configuration.
    ///
    /// Styles are rebuilt, and so is the key map when the orientation changes.
    /// Changing `autoplay`, `loop`, or the autoplay delay restarts the timer;
    /// the returned command is its first tick.
    pub fn set_config(&mut self, config: Config) -> Option<Cmd> {
        if self.destroyed {
            return None;
        }
        if let Err(err) = config.validate() {
            log::warn!("carousel config: {err}; falling back to defaults");
        }
        let previous = self.navigator.config();
        let restart = self.initialized && previous.requires_autoplay_restart(&config);
        if previous.orientation != config.orientation {
            self.keymap = CarouselKeyMap::for_orientation(config.orientation);
        }
        self.styles = CarouselStyles::from_config(&config);
        self.navigator.set_config(config);
        if self.initialized {
            self.remeasure();
        }

        if !restart {
            return None;
        }
        self.autoplay.stop();
        let config = self.navigator.config();
        if config.autoplay {
            let interval = config.autoplay_interval();
            Some(self.autoplay.restart(interval))
        } else {
            None
        }
    }

    /// Sets the container size and re-measures immediately.
    pub fn set_container_size(&mut self, width: f64, height: f64) {
        if self.destroyed {
            return;
        }
        self.container = Size::new(width, height);
        self.remeasure();
    }

    /// Installs geometry measured by the host: the container plus full
    /// per-slide widths and heights.
    pub fn set_geometry(&mut self, container: Size, widths: Vec<f64>, heights: Vec<f64>) {
        if self.destroyed {
            return;
        }
        self.container = container;
        self.navigator.set_geometry(container, widths, heights);
    }

    /// Measures the slides against the current container.
    pub fn remeasure(&mut self) {
        if self.destroyed {
            return;
        }
        self.navigator
            .remeasure(self.container, self.slides.as_slice());
    }

    /// Schedules a re-measure after the trigger's delay, superseding any
    /// earlier request.
    pub fn request_remeasure(&mut self, trigger: RemeasureTrigger) -> Option<Cmd> {
        if self.destroyed {
            return None;
        }
        self.remeasure_tag += 1;
        let id = self.id;
        let tag = self.remeasure_tag;
        Some(bubbletea_tick(trigger.delay(), move |_| {
            Box::new(RemeasureMsg { id, tag, trigger }) as Msg
        }))
    }

    /// Activates the "previous" control. Returns a [`NavigatedMsg`] command,
    /// or `None` if the control was disabled.
    pub fn previous(&mut self) -> Option<Cmd> {
        if self.destroyed {
            return None;
        }
        let index = self.navigator.previous()?;
        Some(self.navigated(Direction::Previous, index))
    }

    /// Activates the "next" control. Returns a [`NavigatedMsg`] command, or
    /// `None` if the control was disabled or nothing is measured yet.
    pub fn next(&mut self) -> Option<Cmd> {
        if self.destroyed {
            return None;
        }
        let index = self.navigator.next()?;
        Some(self.navigated(Direction::Next, index))
    }

    /// Jumps to a slide. Returns whether the index changed.
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.destroyed {
            return false;
        }
        self.navigator.go_to(index)
    }

    /// Host-driven change of the active index; same as [`Model::go_to`].
    pub fn set_active_index(&mut self, index: usize) -> bool {
        self.go_to(index)
    }

    /// Moves one slide back, wrapping when looping, regardless of the control
    /// flags. Returns whether the index changed.
    pub fn go_to_prev_slide(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        self.navigator.go_to_prev_slide()
    }

    /// Instance id, for addressing [`ResizeMsg`](super::ResizeMsg) and
    /// [`VisibilityMsg`](super::VisibilityMsg).
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The slides.
    pub fn slides(&self) -> &[T] {
        &self.slides
    }

    /// The configuration in effect.
    pub fn config(&self) -> &Config {
        self.navigator.config()
    }

    /// The underlying navigation state.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The autoplay timer, e.g. to build pause/resume commands.
    pub fn autoplay(&self) -> &autoplay::Model {
        &self.autoplay
    }

    /// Index of the current slide.
    pub fn current_index(&self) -> usize {
        self.navigator.index()
    }

    /// Current translate offset along the axis of travel.
    pub fn current_translate(&self) -> f64 {
        self.navigator.translate()
    }

    /// Signed `(x, y)` shift for the track.
    pub fn translate_vector(&self) -> (f64, f64) {
        self.navigator.translate_vector()
    }

    /// Whether the "previous" control is enabled.
    pub fn prev_enabled(&self) -> bool {
        self.navigator.prev_enabled()
    }

    /// Whether the "next" control is enabled.
    pub fn next_enabled(&self) -> bool {
        self.navigator.next_enabled()
    }

    /// Explicit navigation state.
    pub fn position(&self) -> Position {
        self.navigator.position()
    }

    /// Per-slide indicator data.
    pub fn indicators(&self) -> Vec<Indicator> {
        self.navigator.indicators()
    }

    /// Whether there are no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Whether [`Model::destroy`] has run.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Transition duration hint for hosts that animate the translate.
    pub fn animation_duration(&self) -> Duration {
        self.navigator.config().animation_duration()
    }

    fn navigated(&self, direction: Direction, index: usize) -> Cmd {
        let id = self.id;
        bubbletea_tick(Duration::from_nanos(1), move |_| {
            Box::new(NavigatedMsg {
                id,
                direction,
                index,
            }) as Msg
        })
    }
}

fn combine(mut cmds: Vec<Cmd>) -> Option<Cmd> {
    match cmds.len() {
        0 => None,
        1 => cmds.pop(),
        _ => Some(bubbletea_rs::batch(cmds)),
    }
}
