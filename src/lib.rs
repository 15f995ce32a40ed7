#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-carousel/")]

//! # bubbletea-carousel
//!
//! A carousel (slider) component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications: it tracks which slide is current, how far the track is
//! shifted, and which navigation controls are enabled, for horizontal and
//! vertical slide strips.
//!
//! ## Overview
//!
//! The crate is layered so each part can be used on its own:
//!
//! - [`config`]: the serde-backed [`Config`](config::Config) (orientation,
//!   loop, single-item mode, scroll size, gap, autoplay, appearance);
//! - [`timing`]: duration strings such as `"1500ms"` or `"2s"`;
//! - [`dimensions`]: the [`Measurable`](dimensions::Measurable) trait and the
//!   [`Tracker`](dimensions::Tracker) holding container and slide extents;
//! - [`navigation`]: the [`Navigator`](navigation::Navigator) state machine;
//! - [`autoplay`]: the repeating tick source;
//! - [`carousel`]: the bubbletea component tying them together.
//!
//! Slide content is rendered by the host. The carousel reports the offset to
//! apply ([`carousel::Model::translate_vector`]) and renders its own controls.
//!
//! ## Focus Management
//!
//! The carousel implements [`Component`], and only reacts to keys while focused:
//!
//! ```rust
//! use bubbletea_carousel::prelude::*;
//! use bubbletea_rs::Cmd;
//!
//! fn handle_focus<T: Component>(component: &mut T) {
//!     let _cmd: Option<Cmd> = component.focus();
//!     assert!(component.focused());
//!     component.blur();
//!     assert!(!component.focused());
//! }
//!
//! let mut carousel = Carousel::new(vec!["one".to_string(), "two".to_string()], Config::new());
//! handle_focus(&mut carousel);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_carousel::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     carousel: Carousel<String>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let slides = vec!["Alpha".to_string(), "Beta".to_string(), "Gamma".to_string()];
//!         let config = Config::new()
//!             .with_single_item_mode(true)
//!             .with_show_indicators(true)
//!             .with_autoplay("3s");
//!         let mut carousel = Carousel::new(slides, config).with_container_size(20.0, 1.0);
//!         carousel.focus();
//!         let cmd = carousel.init();
//!         (Self { carousel }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(navigated) = msg.downcast_ref::<NavigatedMsg>() {
//!             let _ = navigated.index;
//!             return None;
//!         }
//!         self.carousel.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         let slide = &self.carousel.slides()[self.carousel.current_index()];
//!         format!("{}\n{}", slide, self.carousel.view())
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: navigation steps at `trace`,
//! measurement and autoplay start/stop at `debug`, autoplay reaching the end
//! at `info`, and configuration fallbacks at `warn`. Install any logger to see
//! them.

pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod dimensions;
pub mod key;
pub mod navigation;
pub mod timing;

use bubbletea_rs::Cmd;

/// Components that take keyboard focus.
///
/// A focused component reacts to key messages; a blurred one ignores them.
/// `focus()` may return a command to run on focus.
///
/// ```rust
/// use bubbletea_carousel::prelude::*;
///
/// let mut carousel = Carousel::new(vec!["a".to_string()], Config::new());
/// assert!(!carousel.focused());
///
/// carousel.focus();
/// assert!(carousel.focused());
///
/// carousel.blur();
/// assert!(!carousel.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use autoplay::{
    Model as Autoplay, StartStopMsg as AutoplayStartStopMsg, TickMsg as AutoplayTickMsg,
};
pub use carousel::{
    CarouselKeyMap, CarouselStyles, Model as Carousel, NavigatedMsg, RemeasureMsg,
    RemeasureTrigger, ResizeMsg, VisibilityMsg,
};
pub use config::{Config, ConfigError, Orientation, ScrollSize};
pub use dimensions::{ItemBox, Margins, Measurable, Size, Tracker};
pub use key::{Binding, Help as KeyHelp, KeyMap};
pub use navigation::{Direction, Indicator, Navigator, Position, TickOutcome};
pub use timing::ParseError;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_carousel::prelude::*;
///
/// let carousel: Carousel<ItemBox> = Carousel::new(Vec::new(), Config::new());
/// assert_eq!(carousel.position(), Position::Idle);
/// ```
pub mod prelude {
    pub use crate::autoplay::{
        Model as Autoplay, StartStopMsg as AutoplayStartStopMsg, TickMsg as AutoplayTickMsg,
    };
    pub use crate::carousel::{
        CarouselKeyMap, CarouselStyles, Model as Carousel, NavigatedMsg, ResizeMsg,
        VisibilityMsg,
    };
    pub use crate::config::{Config, Orientation, ScrollSize};
    pub use crate::dimensions::{ItemBox, Measurable, Size};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::navigation::{Direction, Position};
    pub use crate::Component;
}
