//! Threshold ranges in the Nagios plugin format.
//!
//! | spec       | alarms when              |
//! |------------|--------------------------|
//! | `10`       | `< 0` or `> 10`          |
//! | `10:`      | `< 10`                   |
//! | `:10`      | `< 0` or `> 10`          |
//! | `~:10`     | `> 10`                   |
//! | `10:~`     | `< 10`                   |
//! | `10:20`    | `< 10` or `> 20`         |
//! | `@10:20`   | `>= 10` and `<= 20`      |
//! | `~:`       | never                    |
//!
//! Bounds are inclusive on the safe side: a value equal to a bound never
//! alarms (unless the range is inverted with `@`).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Marker for an infinite bound.
const INFINITY_MARKER: &str = "~";

/// A threshold string that does not follow the range grammar.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeError {
    #[error("empty range definition")]
    Empty,

    #[error("failed to parse lower limit {0:?}")]
    Start(String),

    #[error("failed to parse upper limit {0:?}")]
    End(String),

    #[error("invalid range definition {0:?}, start must not exceed end")]
    Inverted(String),
}

/// A closed interval plus the polarity of the alarm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdRange {
    start: f64,
    end: f64,
    alert_inside: bool,
}

impl ThresholdRange {
    /// `~:`, the range that never alarms.
    pub const fn unbounded() -> Self {
        Self {
            start: f64::NEG_INFINITY,
            end: f64::INFINITY,
            alert_inside: false,
        }
    }

    /// Parse a range specification such as `~:150` or `@10:20`.
    pub fn parse(spec: &str) -> Result<Self, RangeError> {
        let spec = spec.trim();
        let (alert_inside, body) = match spec.strip_prefix('@') {
            Some(rest) => (true, rest),
            None => (false, spec),
        };

        if body.is_empty() {
            return Err(RangeError::Empty);
        }

        let (start, end) = match body.split_once(':') {
            Some((lower, upper)) => (parse_start(lower)?, parse_end(upper)?),
            None => (0.0, parse_number(body).ok_or_else(|| RangeError::End(body.to_string()))?),
        };

        if start > end {
            return Err(RangeError::Inverted(spec.to_string()));
        }

        Ok(Self {
            start,
            end,
            alert_inside,
        })
    }

    /// Returns true when `value` is alarming.
    pub fn check(&self, value: f64) -> bool {
        let inside = self.start <= value && value <= self.end;
        inside == self.alert_inside
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// True for `@` ranges.
    pub fn alert_inside(&self) -> bool {
        self.alert_inside
    }
}

impl Default for ThresholdRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl FromStr for ThresholdRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ThresholdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alert_inside {
            f.write_str("@")?;
        }
        if self.start == f64::NEG_INFINITY {
            f.write_str(INFINITY_MARKER)?;
        } else {
            write!(f, "{}", self.start)?;
        }
        f.write_str(":")?;
        if self.end != f64::INFINITY {
            write!(f, "{}", self.end)?;
        }
        Ok(())
    }
}

fn parse_start(s: &str) -> Result<f64, RangeError> {
    match s {
        "" => Ok(0.0),
        INFINITY_MARKER => Ok(f64::NEG_INFINITY),
        _ => parse_number(s).ok_or_else(|| RangeError::Start(s.to_string())),
    }
}

fn parse_end(s: &str) -> Result<f64, RangeError> {
    match s {
        "" | INFINITY_MARKER => Ok(f64::INFINITY),
        _ => parse_number(s).ok_or_else(|| RangeError::End(s.to_string())),
    }
}

// Only finite numbers; infinity is spelled with the marker.
fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
