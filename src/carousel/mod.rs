//! Carousel component: navigation, autoplay, and re-measurement wired into
//! the bubbletea update loop.
//!
//! `Model<T: Measurable>` wraps a [`Navigator`](crate::navigation::Navigator)
//! and an [`autoplay::Model`](crate::autoplay::Model). Hosts drive it with
//! method calls (`set_slides`, `set_config`, `next`, ...) or with messages fed
//! through [`Model::update`]:
//!
//! - `KeyMsg`: previous/next and first/last while focused;
//! - [`autoplay::TickMsg`](crate::autoplay::TickMsg) and
//!   [`autoplay::StartStopMsg`](crate::autoplay::StartStopMsg);
//! - [`ResizeMsg`]: debounced re-measure after [`RESIZE_DEBOUNCE`];
//! - [`VisibilityMsg`]: re-measure [`VISIBILITY_DELAY`] after becoming visible;
//! - [`RemeasureMsg`]: the deferred measurement itself.
//!
//! Activating a control yields a [`NavigatedMsg`] command.
//!
//! ## Lifecycle
//!
//! [`Model::init`] measures, starts autoplay if configured, and schedules a
//! second measurement for slides that settle late. [`Model::destroy`] is the
//! only teardown point: after it every message is ignored.
//!
//! ```rust
//! use bubbletea_carousel::carousel::Model;
//! use bubbletea_carousel::config::Config;
//! use bubbletea_carousel::navigation::Position;
//!
//! let slides = vec!["first".to_string(), "second".to_string(), "third".to_string()];
//! let mut carousel = Model::new(slides, Config::new().with_single_item_mode(true))
//!     .with_container_size(40.0, 1.0);
//! let _cmd = carousel.init();
//!
//! assert_eq!(carousel.position(), Position::AtStart);
//! let _navigated = carousel.next();
//! assert_eq!(carousel.current_index(), 1);
//! assert_eq!(carousel.current_translate(), 40.0);
//! ```

/// Key bindings for carousel navigation.
pub mod keys;

/// Styles for controls, indicators, and the empty state.
pub mod style;

mod model;
mod rendering;
mod types;


pub use keys::CarouselKeyMap;
pub use model::Model;
pub use style::CarouselStyles;
pub use types::{
    NavigatedMsg, RemeasureMsg, RemeasureTrigger, ResizeMsg, VisibilityMsg, RESIZE_DEBOUNCE,
    SETTLE_DELAY, VISIBILITY_DELAY,
};

use crate::autoplay;
use crate::config::Config;
use crate::dimensions::{Measurable, Size};
use crate::key::{self, KeyMap};
use crate::navigation::TickOutcome;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

impl<T: Measurable> Model<T> {
    /// Handles a message. Returns the follow-up command, if any.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if self.destroyed {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }

        if let Some(tick) = msg.downcast_ref::<autoplay::TickMsg>() {
            if !self.autoplay.accepts(tick) {
                return None;
            }
            return match self.navigator.tick() {
                TickOutcome::Finished => {
                    self.autoplay.finish();
                    None
                }
                TickOutcome::Skipped | TickOutcome::Advanced | TickOutcome::Wrapped => {
                    Some(self.autoplay.tick())
                }
            };
        }

        if let Some(start_stop) = msg.downcast_ref::<autoplay::StartStopMsg>() {
            if !self.navigator.config().autoplay {
                return None;
            }
            return self.autoplay.handle_start_stop(start_stop);
        }

        if let Some(remeasure) = msg.downcast_ref::<RemeasureMsg>() {
            if remeasure.id == self.id() && remeasure.tag == self.remeasure_tag {
                log::debug!("carousel {} remeasure ({:?})", self.id(), remeasure.trigger);
                self.remeasure();
            }
            return None;
        }

        if let Some(resize) = msg.downcast_ref::<ResizeMsg>() {
            if resize.id != 0 && resize.id != self.id() {
                return None;
            }
            self.container = Size::new(resize.width, resize.height);
            return self.request_remeasure(RemeasureTrigger::Resize);
        }

        if let Some(visibility) = msg.downcast_ref::<VisibilityMsg>() {
            if (visibility.id != 0 && visibility.id != self.id()) || !visibility.visible {
                return None;
            }
            return self.request_remeasure(RemeasureTrigger::Visible);
        }

        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        if self.keymap.prev.matches(key_msg) {
            return self.previous();
        }
        if self.keymap.next.matches(key_msg) {
            return self.next();
        }
        if self.keymap.first.matches(key_msg) {
            self.go_to(0);
        } else if self.keymap.last.matches(key_msg) {
            if let Some(last) = self.slides.len().checked_sub(1) {
                self.go_to(last);
            }
        }
        None
    }
}

impl<T: Measurable> Component for Model<T> {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

impl<T: Measurable> KeyMap for Model<T> {
    fn short_help(&self) -> Vec<&key::Binding> {
        self.keymap.short_help()
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        self.keymap.full_help()
    }
}

impl<T: Measurable + Send + 'static> BubbleTeaModel for Model<T> {
    /// An empty carousel with the default configuration.
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Self::new(Vec::new(), Config::default());
        let cmd = model.init();
        (model, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
