//! Carousel configuration.
//!
//! [`Config`] is supplied by the host and treated as immutable between
//! [`crate::carousel::Model::set_config`] calls. It deserializes from camelCase
//! option names (`singleItemMode`, `autoplayDelay`, `loop`, ...):
//!
//! ```rust
//! use bubbletea_carousel::config::{Config, Orientation, ScrollSize};
//!
//! let config = Config::from_json(r#"{
//!     "orientation": "vertical",
//!     "loop": true,
//!     "scrollSize": "lg",
//!     "itemGap": "10px",
//!     "autoplayDelay": "2s"
//! }"#).unwrap();
//!
//! assert_eq!(config.orientation, Orientation::Vertical);
//! assert!(config.looping);
//! assert_eq!(config.scroll_size, ScrollSize::Named("lg".into()));
//! assert_eq!(config.gap(), 10.0);
//! assert_eq!(config.autoplay_interval().as_millis(), 2000);
//! ```
//!
//! Values outside the recognized set never fail at navigation time: an
//! unknown scroll token resolves to `sm`, an unparsable duration to its
//! default and an unparsable gap to zero. [`Config::validate`] reports those
//! values for hosts that want to surface them.

use crate::timing::{self, ParseError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Default previous-button glyph.
pub const DEFAULT_PREV_ICON: &str = "❮";
/// Default next-button glyph.
pub const DEFAULT_NEXT_ICON: &str = "❯";
/// Default color for navigation glyphs.
pub const DEFAULT_BUTTON_COLOR: &str = "#666";
/// Default color of the active indicator.
pub const DEFAULT_INDICATOR_ACTIVE_COLOR: &str = "#333";
/// Default color of inactive indicators.
pub const DEFAULT_INDICATOR_INACTIVE_COLOR: &str = "#ccc";
/// Default empty-state message.
pub const DEFAULT_EMPTY_TEXT: &str = "No items found";
/// Default empty-state icon.
pub const DEFAULT_EMPTY_ICON: &str = "📭";
/// Default empty-state text color.
pub const DEFAULT_EMPTY_TEXT_COLOR: &str = "#666";
/// Scroll token used when none (or an unknown one) is configured.
pub const DEFAULT_SCROLL_TOKEN: &str = "sm";

// Named scroll sizes in pixels.
static SCROLL_SIZES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("xs", 50.0),
        ("sm", 100.0),
        ("md", 150.0),
        ("lg", 200.0),
        ("xl", 250.0),
        ("2xl", 300.0),
        ("3xl", 350.0),
        ("4xl", 400.0),
        ("5xl", 450.0),
        ("6xl", 500.0),
        ("7xl", 550.0),
        ("8xl", 600.0),
        ("9xl", 650.0),
        ("10xl", 700.0),
    ])
});

/// Looks up a named scroll size (`xs` through `10xl`).
pub fn named_scroll_size(name: &str) -> Option<f64> {
    SCROLL_SIZES.get(name).copied()
}

/// Errors reported while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be read.
    #[error("invalid carousel config: {0}")]
    Json(#[from] serde_json::Error),
    /// `itemGap` is not a pixel length.
    #[error("invalid item gap `{value}`")]
    InvalidGap {
        /// The rejected value.
        value: String,
    },
    /// `scrollSize` is neither a token, a percentage, a pixel length nor `full`.
    #[error("invalid scroll size `{value}`")]
    InvalidScrollSize {
        /// The rejected value.
        value: String,
    },
    /// A duration option could not be parsed.
    #[error("invalid {field}")]
    InvalidDuration {
        /// Which option was rejected.
        field: &'static str,
        /// The underlying parse failure.
        #[source]
        source: ParseError,
    },
}

/// Axis of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Slides are laid out left to right.
    #[default]
    Horizontal,
    /// Slides are laid out top to bottom.
    Vertical,
}

/// Distance covered by one continuous-mode navigation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScrollSize {
    /// One full container extent.
    Full,
    /// A percentage of the container extent.
    Percent(f64),
    /// An explicit pixel distance, written `"120px"`.
    Pixels(f64),
    /// A named token (`xs` .. `10xl`). Unknown names resolve to `sm`.
    Named(String),
}

impl Default for ScrollSize {
    fn default() -> Self {
        ScrollSize::Named(DEFAULT_SCROLL_TOKEN.to_string())
    }
}

impl ScrollSize {
    /// Parses a scroll size, rejecting anything it does not recognize.
    pub fn parse_strict(value: &str) -> Result<Self, ConfigError> {
        let v = value.trim();
        let invalid = || ConfigError::InvalidScrollSize {
            value: value.to_string(),
        };
        if v == "full" {
            return Ok(ScrollSize::Full);
        }
        if let Some(pct) = v.strip_suffix('%') {
            let p: f64 = pct.trim().parse().map_err(|_| invalid())?;
            if !p.is_finite() || p < 0.0 {
                return Err(invalid());
            }
            return Ok(ScrollSize::Percent(p));
        }
        if let Some(px) = v.strip_suffix("px") {
            let p: f64 = px.trim().parse().map_err(|_| invalid())?;
            if !p.is_finite() || p < 0.0 {
                return Err(invalid());
            }
            return Ok(ScrollSize::Pixels(p));
        }
        if named_scroll_size(v).is_some() {
            return Ok(ScrollSize::Named(v.to_string()));
        }
        Err(invalid())
    }

    /// Resolves the step distance for a container of the given extent.
    pub fn amount(&self, container_extent: f64) -> f64 {
        match self {
            ScrollSize::Full => container_extent,
            ScrollSize::Percent(p) => container_extent * p / 100.0,
            ScrollSize::Pixels(px) => *px,
            ScrollSize::Named(name) => named_scroll_size(name).unwrap_or_else(|| {
                log::warn!("unknown scroll size `{name}`, using `{DEFAULT_SCROLL_TOKEN}`");
                named_scroll_size(DEFAULT_SCROLL_TOKEN).unwrap_or(100.0)
            }),
        }
    }
}

impl From<&str> for ScrollSize {
    /// Lenient conversion: anything unrecognized becomes a named token, which
    /// later resolves to `sm`.
    fn from(value: &str) -> Self {
        ScrollSize::parse_strict(value).unwrap_or_else(|_| {
            let v = value.trim();
            if v.is_empty() {
                ScrollSize::default()
            } else {
                ScrollSize::Named(v.to_string())
            }
        })
    }
}

impl From<String> for ScrollSize {
    fn from(value: String) -> Self {
        ScrollSize::from(value.as_str())
    }
}

impl From<ScrollSize> for String {
    fn from(value: ScrollSize) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ScrollSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrollSize::Full => write!(f, "full"),
            ScrollSize::Percent(p) => write!(f, "{p}%"),
            ScrollSize::Pixels(px) => write!(f, "{px}px"),
            ScrollSize::Named(name) => write!(f, "{name}"),
        }
    }
}

/// Icons used for vertical carousels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerticalIcons {
    /// Previous-button glyph.
    pub prev: Option<String>,
    /// Next-button glyph.
    pub next: Option<String>,
}

/// Custom navigation glyphs. Horizontal carousels read `prev`/`next`, vertical
/// carousels read `vertical.prev`/`vertical.next`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationIcons {
    /// Horizontal previous-button glyph.
    pub prev: Option<String>,
    /// Horizontal next-button glyph.
    pub next: Option<String>,
    /// Vertical overrides.
    pub vertical: VerticalIcons,
}

impl NavigationIcons {
    /// Returns the `(prev, next)` glyphs for an orientation, falling back to
    /// [`DEFAULT_PREV_ICON`] / [`DEFAULT_NEXT_ICON`].
    pub fn resolve(&self, orientation: Orientation) -> (&str, &str) {
        let (prev, next) = match orientation {
            Orientation::Horizontal => (&self.prev, &self.next),
            Orientation::Vertical => (&self.vertical.prev, &self.vertical.next),
        };
        (
            prev.as_deref().unwrap_or(DEFAULT_PREV_ICON),
            next.as_deref().unwrap_or(DEFAULT_NEXT_ICON),
        )
    }
}

/// Appearance of the navigation buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationStyle {
    /// Glyph overrides.
    pub icons: NavigationIcons,
    /// Foreground color of enabled buttons.
    pub color: String,
}

impl Default for NavigationStyle {
    fn default() -> Self {
        Self {
            icons: NavigationIcons::default(),
            color: DEFAULT_BUTTON_COLOR.to_string(),
        }
    }
}

/// Appearance of the position indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndicatorStyle {
    /// Color of the indicator for the current slide.
    pub active_color: String,
    /// Color of the remaining indicators.
    pub inactive_color: String,
    /// Glyph for the current slide.
    pub active_glyph: String,
    /// Glyph for the remaining slides.
    pub inactive_glyph: String,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            active_color: DEFAULT_INDICATOR_ACTIVE_COLOR.to_string(),
            inactive_color: DEFAULT_INDICATOR_INACTIVE_COLOR.to_string(),
            active_glyph: "•".to_string(),
            inactive_glyph: "○".to_string(),
        }
    }
}

/// What to show when there are no slides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmptyState {
    /// Message text.
    pub text: String,
    /// Icon shown before the text.
    pub icon: String,
    /// Suppresses the icon.
    pub hide_icon: bool,
    /// Foreground color of the message.
    pub text_color: String,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            text: DEFAULT_EMPTY_TEXT.to_string(),
            icon: DEFAULT_EMPTY_ICON.to_string(),
            hide_icon: false,
            text_color: DEFAULT_EMPTY_TEXT_COLOR.to_string(),
        }
    }
}

/// Carousel configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Axis of travel and measurement.
    pub orientation: Orientation,
    /// Wrap-around navigation.
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Step by exactly one viewport-sized slide instead of a scroll amount.
    pub single_item_mode: bool,
    /// Continuous-mode step distance.
    pub scroll_size: ScrollSize,
    /// Spacing between consecutive slides, e.g. `"10px"`.
    pub item_gap: Option<String>,
    /// Advance automatically.
    pub autoplay: bool,
    /// Autoplay interval, e.g. `"3000ms"` or `"3s"`.
    pub autoplay_delay: Option<String>,
    /// Show navigation buttons in continuous mode.
    pub show_navigation: bool,
    /// Show position indicators.
    pub show_indicators: bool,
    /// Transition duration hint for hosts that animate, e.g. `"300ms"`.
    pub animation_duration: Option<String>,
    /// Empty-state appearance.
    pub empty_state: EmptyState,
    /// Navigation button appearance.
    pub navigation_style: NavigationStyle,
    /// Indicator appearance.
    pub indicator_style: IndicatorStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            looping: false,
            single_item_mode: false,
            scroll_size: ScrollSize::default(),
            item_gap: None,
            autoplay: false,
            autoplay_delay: None,
            show_navigation: true,
            show_indicators: false,
            animation_duration: None,
            empty_state: EmptyState::default(),
            navigation_style: NavigationStyle::default(),
            indicator_style: IndicatorStyle::default(),
        }
    }
}

impl Config {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a JSON document. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the orientation (builder pattern).
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Enables or disables looping (builder pattern).
    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Enables or disables single-item mode (builder pattern).
    pub fn with_single_item_mode(mut self, single: bool) -> Self {
        self.single_item_mode = single;
        self
    }

    /// Sets the continuous-mode step (builder pattern).
    pub fn with_scroll_size(mut self, size: impl Into<ScrollSize>) -> Self {
        self.scroll_size = size.into();
        self
    }

    /// Sets the gap between slides (builder pattern).
    pub fn with_item_gap(mut self, gap: &str) -> Self {
        self.item_gap = Some(gap.to_string());
        self
    }

    /// Enables autoplay with the given interval string (builder pattern).
    pub fn with_autoplay(mut self, delay: &str) -> Self {
        self.autoplay = true;
        self.autoplay_delay = Some(delay.to_string());
        self
    }

    /// Shows or hides navigation (builder pattern).
    pub fn with_show_navigation(mut self, show: bool) -> Self {
        self.show_navigation = show;
        self
    }

    /// Shows or hides indicators (builder pattern).
    pub fn with_show_indicators(mut self, show: bool) -> Self {
        self.show_indicators = show;
        self
    }

    /// Whether slides travel vertically.
    pub fn is_vertical(&self) -> bool {
        self.orientation == Orientation::Vertical
    }

    /// The gap between slides in pixels. Unparsable values count as zero.
    pub fn gap(&self) -> f64 {
        match self.item_gap.as_deref() {
            None => 0.0,
            Some(raw) => parse_px(raw).unwrap_or_else(|_| {
                log::warn!("invalid item gap `{raw}`, using 0");
                0.0
            }),
        }
    }

    /// The autoplay interval (default 3000 ms).
    pub fn autoplay_interval(&self) -> Duration {
        timing::autoplay_interval(self.autoplay_delay.as_deref())
    }

    /// The transition duration hint (default 300 ms).
    pub fn animation_duration(&self) -> Duration {
        timing::animation_duration(self.animation_duration.as_deref())
    }

    /// Reports values that would silently fall back to defaults.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(gap) = &self.item_gap {
            parse_px(gap)?;
        }
        if let ScrollSize::Named(name) = &self.scroll_size {
            if named_scroll_size(name).is_none() {
                return Err(ConfigError::InvalidScrollSize {
                    value: name.clone(),
                });
            }
        }
        if let Some(delay) = &self.autoplay_delay {
            timing::parse_interval(delay).map_err(|source| ConfigError::InvalidDuration {
                field: "autoplayDelay",
                source,
            })?;
        }
        if let Some(duration) = &self.animation_duration {
            timing::parse_duration(duration).map_err(|source| {
                ConfigError::InvalidDuration {
                    field: "animationDuration",
                    source,
                }
            })?;
        }
        Ok(())
    }

    /// Whether switching from `self` to `next` must tear down and restart the
    /// autoplay timer.
    pub fn requires_autoplay_restart(&self, next: &Config) -> bool {
        self.autoplay != next.autoplay
            || self.looping != next.looping
            || self.autoplay_interval() != next.autoplay_interval()
    }
}

/// Parses a pixel length such as `"10px"` or `"10"`.
pub fn parse_px(value: &str) -> Result<f64, ConfigError> {
    let v = value.trim();
    if v.is_empty() {
        return Ok(0.0);
    }
    let number = v.strip_suffix("px").unwrap_or(v).trim();
    match number.parse::<f64>() {
        Ok(px) if px.is_finite() && px >= 0.0 => Ok(px),
        _ => Err(ConfigError::InvalidGap {
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert!(!config.looping);
        assert!(!config.single_item_mode);
        assert!(config.show_navigation);
        assert!(!config.show_indicators);
        assert_eq!(config.gap(), 0.0);
        assert_eq!(config.autoplay_interval(), Duration::from_millis(3000));
        assert_eq!(config.animation_duration(), Duration::from_millis(300));
        assert_eq!(config.scroll_size.amount(600.0), 100.0);
    }

    #[test]
    fn test_scroll_size_amounts() {
        assert_eq!(ScrollSize::from("full").amount(640.0), 640.0);
        assert_eq!(ScrollSize::from("50%").amount(600.0), 300.0);
        assert_eq!(ScrollSize::from("lg").amount(600.0), 200.0);
        assert_eq!(ScrollSize::from("200px").amount(600.0), 200.0);
        assert_eq!(ScrollSize::from("10xl").amount(600.0), 700.0);
        assert_eq!(ScrollSize::from("xs").amount(600.0), 50.0);
    }

    #[test]
    fn test_unknown_scroll_token_defaults_to_sm() {
        let size = ScrollSize::from("huge");
        assert_eq!(size, ScrollSize::Named("huge".into()));
        assert_eq!(size.amount(600.0), 100.0);
        assert!(ScrollSize::parse_strict("huge").is_err());
        assert_eq!(ScrollSize::from("").amount(600.0), 100.0);
    }

    #[test]
    fn test_json_uses_camel_case_option_names() {
        let config = Config::from_json(
            r#"{
                "singleItemMode": true,
                "loop": true,
                "scrollSize": "25%",
                "showNavigation": false,
                "showIndicators": true,
                "emptyState": { "text": "Nothing here", "hideIcon": true },
                "navigationStyle": { "icons": { "vertical": { "prev": "▲" } } }
            }"#,
        )
        .unwrap();
        assert!(config.single_item_mode);
        assert!(config.looping);
        assert_eq!(config.scroll_size, ScrollSize::Percent(25.0));
        assert!(!config.show_navigation);
        assert!(config.show_indicators);
        assert_eq!(config.empty_state.text, "Nothing here");
        assert!(config.empty_state.hide_icon);
        assert_eq!(config.empty_state.icon, DEFAULT_EMPTY_ICON);
        assert_eq!(
            config.navigation_style.icons.resolve(Orientation::Vertical),
            ("▲", DEFAULT_NEXT_ICON)
        );
        assert_eq!(
            config.navigation_style.icons.resolve(Orientation::Horizontal),
            (DEFAULT_PREV_ICON, DEFAULT_NEXT_ICON)
        );
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(matches!(
            Config::from_json("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_gap_parsing() {
        assert_eq!(Config::new().with_item_gap("10px").gap(), 10.0);
        assert_eq!(Config::new().with_item_gap("8").gap(), 8.0);
        assert_eq!(Config::new().with_item_gap("wide").gap(), 0.0);
        assert!(Config::new().with_item_gap("wide").validate().is_err());
    }

    #[test]
    fn test_validate_reports_fallbacks() {
        assert!(Config::new().validate().is_ok());
        assert!(matches!(
            Config::new().with_scroll_size("huge").validate(),
            Err(ConfigError::InvalidScrollSize { .. })
        ));
        assert!(matches!(
            Config::new().with_autoplay("whenever").validate(),
            Err(ConfigError::InvalidDuration {
                field: "autoplayDelay",
                ..
            })
        ));
        assert!(matches!(
            Config::new().with_autoplay("0ms").validate(),
            Err(ConfigError::InvalidDuration {
                field: "autoplayDelay",
                source: timing::ParseError::Zero { .. },
            })
        ));
        assert_eq!(
            Config::new().with_autoplay("0").autoplay_interval(),
            Duration::from_millis(3000)
        );
    }

    #[test]
    fn test_autoplay_restart_detection() {
        let base = Config::new().with_autoplay("3s");
        assert!(!base.requires_autoplay_restart(&base.clone()));
        assert!(base.requires_autoplay_restart(&base.clone().with_loop(true)));
        assert!(base.requires_autoplay_restart(&Config::new().with_autoplay("1s")));
        // Same interval written differently is not a change.
        assert!(!base.requires_autoplay_restart(&Config::new().with_autoplay("3000ms")));
        assert!(!base.requires_autoplay_restart(&base.clone().with_item_gap("4px")));
    }

    #[test]
    fn test_serialize_round_trips_scroll_size() {
        let config = Config::new().with_scroll_size("md");
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""scrollSize":"md""#));
        assert_eq!(Config::from_json(&json).unwrap(), config);
    }
}
