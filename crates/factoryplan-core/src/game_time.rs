//! Duration type backed by a tick count. 20 ticks = 1 second.

use crate::error::FactoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const TICKS_PER_SECOND: f64 = 20.0;

/// A non-negative duration. Stored internally as seconds for precision;
/// [`GameTime::as_ticks`] rounds up to the nearest whole tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameTime {
    seconds: f64,
}

impl GameTime {
    pub fn from_ticks(ticks: i64) -> Result<GameTime, FactoryError> {
        if ticks < 0 {
            return Err(FactoryError::InvalidDuration(
                "tick count cannot be negative".into(),
            ));
        }
        Ok(GameTime {
            seconds: ticks as f64 / TICKS_PER_SECOND,
        })
    }

    pub fn from_seconds(seconds: f64) -> Result<GameTime, FactoryError> {
        if seconds < 0.0 {
            return Err(FactoryError::InvalidDuration(
                "duration in seconds cannot be negative".into(),
            ));
        }
        Ok(GameTime { seconds })
    }

    /// Ceiling of `seconds * 20`, as an integer tick count.
    pub fn as_ticks(self) -> i64 {
        (self.seconds * TICKS_PER_SECOND).ceil() as i64
    }

    pub fn as_seconds(self) -> f64 {
        self.seconds
    }

    pub fn checked_add(self, rhs: GameTime) -> GameTime {
        GameTime {
            seconds: self.seconds + rhs.seconds,
        }
    }

    pub fn checked_sub(self, rhs: GameTime) -> Result<GameTime, FactoryError> {
        let result = self.seconds - rhs.seconds;
        if result < 0.0 {
            return Err(FactoryError::InvalidDuration(
                "subtraction would yield a negative duration".into(),
            ));
        }
        Ok(GameTime { seconds: result })
    }

    pub fn checked_mul(self, scalar: f64) -> Result<GameTime, FactoryError> {
        if scalar < 0.0 {
            return Err(FactoryError::InvalidDuration(
                "cannot multiply GameTime by a negative scalar".into(),
            ));
        }
        Ok(GameTime {
            seconds: self.seconds * scalar,
        })
    }

    pub fn checked_div(self, scalar: f64) -> Result<GameTime, FactoryError> {
        if scalar <= 0.0 {
            return Err(FactoryError::InvalidDuration(
                "cannot divide GameTime by zero or a negative scalar".into(),
            ));
        }
        Ok(GameTime {
            seconds: self.seconds / scalar,
        })
    }
}

impl Eq for GameTime {}

impl PartialOrd for GameTime {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.seconds.partial_cmp(&other.seconds)
    }
}

impl Ord for GameTime {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.partial_cmp(other).expect("GameTime is never NaN")
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s ({} ticks)", self.seconds, self.as_ticks())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_ticks_rejects_negative() {
        assert!(GameTime::from_ticks(-1).is_err());
    }

    #[test]
    fn as_ticks_is_ceiling() {
        // 1 tick = 0.05s; a value that doesn't land on a whole tick rounds up.
        let t = GameTime::from_seconds(0.33).unwrap();
        assert_eq!(t.as_ticks(), 7); // 0.33 * 20 = 6.6 -> 7
    }

    #[test]
    fn ticks_round_trip() {
        let t = GameTime::from_ticks(200).unwrap();
        assert_eq!(t.as_ticks(), 200);
        assert_eq!(t.as_seconds(), 10.0);
    }

    #[test]
    fn subtraction_below_zero_errors() {
        let a = GameTime::from_ticks(5).unwrap();
        let b = GameTime::from_ticks(10).unwrap();
        assert!(a.checked_sub(b).is_err());
        assert!(b.checked_sub(a).is_ok());
    }

    #[test]
    fn multiply_by_negative_errors() {
        let t = GameTime::from_ticks(10).unwrap();
        assert!(t.checked_mul(-1.0).is_err());
    }

    #[test]
    fn ordering_follows_seconds() {
        let short = GameTime::from_ticks(10).unwrap();
        let long = GameTime::from_ticks(20).unwrap();
        assert!(short < long);
    }
}
