use crate::ConvertError;
use crate::consts::{HOURS_PER_HALF_DAY, MINUTES_PER_HOUR};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// AM/PM designator of a 12-hour clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Meridiem {
    #[display(fmt = "AM")]
    Am,
    #[display(fmt = "PM")]
    Pm,
}

impl Meridiem {
    /// Recognizes "AM" or "PM" in any letter case.
    pub fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("AM") {
            Some(Self::Am)
        } else if token.eq_ignore_ascii_case("PM") {
            Some(Self::Pm)
        } else {
            None
        }
    }
}

impl FromStr for Meridiem {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| ConvertError::InvalidMeridiem(s.to_owned()))
    }
}

/// How the 12 o'clock hour before noon is read.
///
/// `Literal` keeps the calculator's historical reading where "12:00 AM" is
/// 720 minutes past midnight, the same as noon. `Standard` follows the usual
/// 12-hour convention and maps it to midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockConvention {
    #[default]
    Literal,
    Standard,
}

impl ClockConvention {
    /// Converts a clock reading to minutes since midnight.
    ///
    /// Hour and minute are not range checked; out-of-range values carry
    /// through the arithmetic unchanged.
    ///
    /// # Errors
    /// Returns `ConvertError::InvalidMeridiem` if `meridiem` is not AM or PM.
    pub fn to_minutes(self, hour: i32, minute: i32, meridiem: &str) -> Result<i64, ConvertError> {
        let hour = i64::from(hour);
        let hour24 = match meridiem.parse::<Meridiem>()? {
            Meridiem::Am => match self {
                Self::Literal => hour,
                Self::Standard if hour == HOURS_PER_HALF_DAY => 0,
                Self::Standard => hour,
            },
            Meridiem::Pm => {
                if hour % HOURS_PER_HALF_DAY == 0 {
                    HOURS_PER_HALF_DAY
                } else {
                    hour % HOURS_PER_HALF_DAY + HOURS_PER_HALF_DAY
                }
            }
        };
        Ok(hour24 * MINUTES_PER_HOUR + i64::from(minute))
    }
}

/// Minutes since midnight under the `Literal` convention.
///
/// # Errors
/// Returns `ConvertError::InvalidMeridiem` if `meridiem` is not AM or PM.
pub fn to_minutes(hour: i32, minute: i32, meridiem: &str) -> Result<i64, ConvertError> {
    ClockConvention::Literal.to_minutes(hour, minute, meridiem)
}
