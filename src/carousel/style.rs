//! Styles for the carousel's controls, indicators, and empty state.
//!
//! [`CarouselStyles::from_config`] derives every style from the configured
//! colors; fields can be overridden afterwards.
//!
//! ```rust
//! use bubbletea_carousel::carousel::CarouselStyles;
//! use bubbletea_carousel::config::Config;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = CarouselStyles::from_config(&Config::default());
//! styles.button = Style::new().foreground(Color::from("#ff5f87")).bold(true);
//! ```

use crate::config::Config;
use lipgloss_extras::prelude::*;

/// Styles applied by the carousel view.
#[derive(Debug, Clone)]
pub struct CarouselStyles {
    /// Enabled navigation buttons.
    pub button: Style,
    /// Disabled navigation buttons.
    pub button_disabled: Style,
    /// Indicator of the current slide.
    pub active_indicator: Style,
    /// Indicators of the other slides.
    pub inactive_indicator: Style,
    /// The empty-state message.
    pub empty_state: Style,
}

impl CarouselStyles {
    /// Builds styles from the configured colors.
    pub fn from_config(config: &Config) -> Self {
        Self {
            button: Style::new().foreground(Color::from(config.navigation_style.color.as_str())),
            button_disabled: Style::new()
                .foreground(Color::from(config.navigation_style.color.as_str()))
                .faint(true),
            active_indicator: Style::new()
                .foreground(Color::from(config.indicator_style.active_color.as_str())),
            inactive_indicator: Style::new()
                .foreground(Color::from(config.indicator_style.inactive_color.as_str())),
            empty_state: Style::new()
                .foreground(Color::from(config.empty_state.text_color.as_str())),
        }
    }
}

impl Default for CarouselStyles {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
