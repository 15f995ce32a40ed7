//! Duration strings as they appear in carousel configuration.
//!
//! Values look like CSS times: `"1500ms"`, `"2s"`, `"0.5s"`, or a bare number of
//! milliseconds (`"3000"`). Two call sites read them with different fallbacks:
//! animation durations default to [`DEFAULT_ANIMATION_MS`] and the autoplay
//! interval defaults to [`DEFAULT_AUTOPLAY_MS`].
//!
//! ```rust
//! use bubbletea_carousel::timing::{autoplay_interval, parse_duration};
//! use std::time::Duration;
//!
//! assert_eq!(parse_duration("1500ms").unwrap(), Duration::from_millis(1500));
//! assert_eq!(autoplay_interval(Some("2s")), Duration::from_millis(2000));
//! assert_eq!(autoplay_interval(Some("soon")), Duration::from_millis(3000));
//! ```

use std::time::Duration;
use thiserror::Error;

/// Fallback for animation durations.
pub const DEFAULT_ANIMATION_MS: u64 = 300;

/// Fallback for the autoplay interval.
pub const DEFAULT_AUTOPLAY_MS: u64 = 3000;

/// Why a duration string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input was empty or only whitespace.
    #[error("empty duration")]
    Empty,
    /// The numeric part could not be read.
    #[error("invalid duration `{input}`")]
    InvalidNumber {
        /// The offending input.
        input: String,
    },
    /// Durations cannot be negative.
    #[error("negative duration `{input}`")]
    Negative {
        /// The offending input.
        input: String,
    },
    /// A repeating interval must be longer than zero.
    #[error("zero interval `{input}`")]
    Zero {
        /// The offending input.
        input: String,
    },
}

/// Parses a duration string strictly.
///
/// The `ms` suffix is checked before `s`. Millisecond and bare values are
/// truncated to whole milliseconds; second values keep their fraction
/// (`"0.25s"` is 250 ms).
pub fn parse_duration(input: &str) -> Result<Duration, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let (number, scale) = if let Some(n) = trimmed.strip_suffix("ms") {
        (n, 1.0)
    } else if let Some(n) = trimmed.strip_suffix('s') {
        (n, 1000.0)
    } else {
        (trimmed, 1.0)
    };

    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidNumber {
            input: input.to_string(),
        })?;
    if !value.is_finite() {
        return Err(ParseError::InvalidNumber {
            input: input.to_string(),
        });
    }
    if value < 0.0 {
        return Err(ParseError::Negative {
            input: input.to_string(),
        });
    }

    let millis = if scale == 1.0 {
        value.trunc()
    } else {
        (value * scale).round()
    };
    Ok(Duration::from_millis(millis as u64))
}

/// Parses a repeating interval strictly. Like [`parse_duration`], but values
/// that truncate to zero milliseconds are rejected.
pub fn parse_interval(input: &str) -> Result<Duration, ParseError> {
    let interval = parse_duration(input)?;
    if interval.is_zero() {
        return Err(ParseError::Zero {
            input: input.to_string(),
        });
    }
    Ok(interval)
}

/// Parses a duration leniently, returning `default_ms` for missing or bad input.
pub fn parse_time_ms(input: Option<&str>, default_ms: u64) -> u64 {
    let Some(raw) = input else {
        return default_ms;
    };
    match parse_duration(raw) {
        Ok(d) => d.as_millis() as u64,
        Err(ParseError::Empty) => default_ms,
        Err(err) => {
            log::warn!("{err}; falling back to {default_ms}ms");
            default_ms
        }
    }
}

/// Resolves an animation duration, defaulting to 300 ms.
pub fn animation_duration(input: Option<&str>) -> Duration {
    Duration::from_millis(parse_time_ms(input, DEFAULT_ANIMATION_MS))
}

/// Resolves the autoplay interval, defaulting to 3000 ms. A zero interval
/// also falls back to the default.
pub fn autoplay_interval(input: Option<&str>) -> Duration {
    let default = Duration::from_millis(DEFAULT_AUTOPLAY_MS);
    let Some(raw) = input else {
        return default;
    };
    match parse_interval(raw) {
        Ok(interval) => interval,
        Err(ParseError::Empty) => default,
        Err(err) => {
            log::warn!("{err}; falling back to {DEFAULT_AUTOPLAY_MS}ms");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millisecond_suffix() {
        assert_eq!(parse_duration("1500ms"), Ok(Duration::from_millis(1500)));
        assert_eq!(parse_duration("12.9ms"), Ok(Duration::from_millis(12)));
    }

    #[test]
    fn test_second_suffix() {
        assert_eq!(parse_duration("2s"), Ok(Duration::from_millis(2000)));
        assert_eq!(parse_duration("0.5s"), Ok(Duration::from_millis(500)));
    }

    #[test]
    fn test_bare_number_is_milliseconds() {
        assert_eq!(parse_duration("750"), Ok(Duration::from_millis(750)));
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_duration("  "), Err(ParseError::Empty));
        assert!(matches!(
            parse_duration("fast"),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_duration("-3s"),
            Err(ParseError::Negative { .. })
        ));
    }

    #[test]
    fn test_call_sites_keep_their_own_defaults() {
        assert_eq!(animation_duration(None), Duration::from_millis(300));
        assert_eq!(animation_duration(Some("")), Duration::from_millis(300));
        assert_eq!(animation_duration(Some("bogus")), Duration::from_millis(300));
        assert_eq!(autoplay_interval(None), Duration::from_millis(3000));
        assert_eq!(autoplay_interval(Some("")), Duration::from_millis(3000));
        assert_eq!(autoplay_interval(Some("bogus")), Duration::from_millis(3000));
    }

    #[test]
    fn test_autoplay_delay_scenarios() {
        assert_eq!(autoplay_interval(Some("1500ms")).as_millis(), 1500);
        assert_eq!(autoplay_interval(Some("2s")).as_millis(), 2000);
    }

    #[test]
    fn test_zero_autoplay_delay_uses_default() {
        assert_eq!(autoplay_interval(Some("0")), Duration::from_millis(3000));
        assert_eq!(autoplay_interval(Some("0ms")), Duration::from_millis(3000));
        assert_eq!(autoplay_interval(Some("0.4ms")), Duration::from_millis(3000));
        assert_eq!(autoplay_interval(Some("1ms")), Duration::from_millis(1));
        assert!(matches!(parse_interval("0s"), Err(ParseError::Zero { .. })));
        // Animations may legitimately be instant.
        assert_eq!(animation_duration(Some("0")), Duration::ZERO);
    }
}
