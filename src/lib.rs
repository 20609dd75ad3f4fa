mod bucket;
mod clock;
mod config;
mod consts;
mod growth;
mod prelude;
mod session;
#[cfg(test)]
mod test_utils;
mod types;

pub use bucket::{DurationBucket, RangeError, bucket, bucket_with};
pub use clock::{ClockConvention, Meridiem, to_minutes};
pub use config::Config;
pub use consts::*;
pub use growth::{Calculator, DayPolicy, GrowthError, GrowthTime, Reading, growth_time};
pub use session::{Action, Lines, LineSource, Session};
pub use types::{Season, cyclic_distance, day_distance, season_offset};

use crate::prelude::*;
use std::str::FromStr;

/// One planted or harvested reading of the in-game calendar and clock,
/// as typed by the user: `Season Day Hour:Minute AM/PM`.
///
/// The season and meridiem tokens are kept exactly as entered. Day, hour
/// and minute are not range checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{season} {day} {hour}:{minute:02} {meridiem}")]
pub struct Timestamp {
    season:   String,
    day:      i32,
    hour:     i32,
    minute:   i32,
    meridiem: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(
        fmt = "Invalid input format: '{_0}'. Please use the format: 'Season Day Hour:Minute AM/PM'"
    )]
    InvalidFormat(String),
    #[display(fmt = "Invalid input value '{token}' in '{input}'. Please provide valid input.")]
    InvalidValue { input: String, token: String },
}

impl std::error::Error for ParseError {}

/// Error type for turning timestamp fields into calendar and clock positions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error(
        "Invalid season: '{0}'. Please provide a valid season: Spring, Summer, Autumn, or Winter."
    )]
    InvalidSeason(String),

    #[error("Invalid AM/PM value: {0:?}. Please use either 'AM' or 'PM'.")]
    InvalidMeridiem(String),

    #[error("Invalid day: {day} (must be {min}-{max})", min = FIRST_DAY, max = LAST_DAY)]
    DayOutOfRange { day: i32 },
}

impl Timestamp {
    /// Creates a timestamp from already separated fields
    pub fn new(
        season: impl Into<String>,
        day: i32,
        hour: i32,
        minute: i32,
        meridiem: impl Into<String>,
    ) -> Self {
        Self {
            season: season.into(),
            day,
            hour,
            minute,
            meridiem: meridiem.into(),
        }
    }

    /// Season token as entered
    pub fn season(&self) -> &str {
        &self.season
    }

    pub const fn day(&self) -> i32 {
        self.day
    }

    pub const fn hour(&self) -> i32 {
        self.hour
    }

    pub const fn minute(&self) -> i32 {
        self.minute
    }

    /// Meridiem token as entered, not normalized
    pub fn meridiem(&self) -> &str {
        &self.meridiem
    }

    /// Helper to parse an integer field with a useful error
    fn parse_i32(input: &str, token: &str) -> Result<i32, ParseError> {
        token.parse::<i32>().map_err(|_| ParseError::InvalidValue {
            input: input.to_owned(),
            token: token.to_owned(),
        })
    }

    /// Splits `H:M` into exactly two integers
    fn parse_clock(input: &str, token: &str) -> Result<(i32, i32), ParseError> {
        let parts: Vec<&str> = token.split(CLOCK_SEPARATOR).collect();
        if parts.len() != 2 {
            return Err(ParseError::InvalidValue {
                input: input.to_owned(),
                token: token.to_owned(),
            });
        }
        let hour = Self::parse_i32(input, parts[0])?;
        let minute = Self::parse_i32(input, parts[1])?;
        Ok((hour, minute))
    }
}

/// Drops one trailing `\n` or `\r\n` as delivered by line readers.
pub(crate) fn strip_line_ending(s: &str) -> &str {
    s.strip_suffix('\n')
        .map_or(s, |line| line.strip_suffix('\r').unwrap_or(line))
}

impl FromStr for Timestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = strip_line_ending(s);

        // Fields are separated by exactly one space; runs of spaces produce
        // empty fields and fail the count check.
        let parts: Vec<&str> = input.split(FIELD_SEPARATOR).collect();
        if parts.len() != FIELD_COUNT {
            return Err(ParseError::InvalidFormat(input.to_owned()));
        }

        let day = Self::parse_i32(input, parts[1])?;
        let (hour, minute) = Self::parse_clock(input, parts[2])?;
        if clock::Meridiem::from_token(parts[3].trim()).is_none() {
            return Err(ParseError::InvalidValue {
                input: input.to_owned(),
                token: parts[3].to_owned(),
            });
        }

        Ok(Self {
            season: parts[0].to_owned(),
            day,
            hour,
            minute,
            meridiem: parts[3].to_owned(),
        })
    }
}

impl serde::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
