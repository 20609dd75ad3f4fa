use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    Config, ConvertError, DurationBucket, FIRST_DAY, LAST_DAY, ParseError, RangeError, Timestamp,
    bucket, day_distance, season_offset,
};

/// What to do with day numbers outside one season's span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPolicy {
    /// Accept any day number; positions past a season simply run on.
    #[default]
    Preserve,
    /// Reject days outside `FIRST_DAY..=LAST_DAY`.
    Reject,
}

impl DayPolicy {
    /// # Errors
    /// Returns `ConvertError::DayOutOfRange` under `Reject` for a day outside
    /// the season.
    pub fn check(self, day: i32) -> Result<i32, ConvertError> {
        match self {
            Self::Reject if day < FIRST_DAY || day > LAST_DAY => {
                Err(ConvertError::DayOutOfRange { day })
            }
            Self::Preserve | Self::Reject => Ok(day),
        }
    }
}

/// A timestamp resolved to its place on the yearly cycle and its minute of
/// the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reading {
    position: i64,
    minutes:  i64,
}

impl Reading {
    pub const fn new(position: i64, minutes: i64) -> Self {
        Self { position, minutes }
    }

    /// Season offset plus day number
    pub const fn position(&self) -> i64 {
        self.position
    }

    /// Minutes since midnight
    pub const fn minutes(&self) -> i64 {
        self.minutes
    }
}

/// Elapsed growth time: whole days around the cycle plus a coarse
/// fraction of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrowthTime {
    days:   i64,
    bucket: DurationBucket,
}

impl GrowthTime {
    /// Growth time from `planted` to `harvested`.
    ///
    /// # Errors
    /// Returns `RangeError` if the two clock readings are more than a day
    /// apart.
    pub fn between(planted: Reading, harvested: Reading) -> Result<Self, RangeError> {
        let days = day_distance(planted.position, harvested.position);
        let bucket = bucket(planted.minutes, harvested.minutes)?;
        debug!(
            "positions {} -> {} give {days} days, minutes {} -> {} give bucket {bucket}",
            planted.position, harvested.position, planted.minutes, harvested.minutes
        );
        Ok(Self { days, bucket })
    }

    pub const fn days(&self) -> i64 {
        self.days
    }

    pub const fn bucket(&self) -> DurationBucket {
        self.bucket
    }

    /// Total in days, e.g. `23.5`
    #[allow(clippy::cast_precision_loss)]
    pub fn value(&self) -> f64 {
        self.days as f64 + self.bucket.value()
    }
}

impl From<GrowthTime> for f64 {
    fn from(growth: GrowthTime) -> Self {
        growth.value()
    }
}

impl fmt::Display for GrowthTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Any failure between a line of input and a growth time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrowthError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error(transparent)]
    ConvertError(#[from] ConvertError),

    #[error(transparent)]
    RangeError(#[from] RangeError),
}

/// Stateless growth time calculator configured with a clock convention and
/// a day policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Calculator {
    config: Config,
}

impl Calculator {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> Config {
        self.config
    }

    /// Resolves a timestamp's season, day and clock fields.
    ///
    /// # Errors
    /// Returns `ConvertError` for an unknown season, a bad meridiem, or a
    /// day rejected by the day policy.
    pub fn reading(&self, timestamp: &Timestamp) -> Result<Reading, ConvertError> {
        let offset = season_offset(timestamp.season())?;
        let day = self.config.day_policy.check(timestamp.day())?;
        let minutes = self.config.clock.to_minutes(
            timestamp.hour(),
            timestamp.minute(),
            timestamp.meridiem(),
        )?;
        let reading = Reading::new(offset + i64::from(day), minutes);
        debug!("{timestamp} resolved to {reading:?}");
        Ok(reading)
    }

    /// Parses and resolves one line of input.
    ///
    /// # Errors
    /// Returns `GrowthError` wrapping the parse or conversion failure.
    pub fn parse_reading(&self, line: &str) -> Result<Reading, GrowthError> {
        let timestamp = line.parse::<Timestamp>()?;
        Ok(self.reading(&timestamp)?)
    }

    /// # Errors
    /// Returns `GrowthError` if either timestamp fails to resolve or the
    /// clock readings are more than a day apart.
    pub fn growth_time(
        &self,
        planted: &Timestamp,
        harvested: &Timestamp,
    ) -> Result<GrowthTime, GrowthError> {
        let planted = self.reading(planted)?;
        let harvested = self.reading(harvested)?;
        Ok(GrowthTime::between(planted, harvested)?)
    }

    /// Parses both lines, then computes the growth time between them.
    ///
    /// # Errors
    /// Returns the first `GrowthError` encountered.
    pub fn growth_time_from_str(
        &self,
        planted: &str,
        harvested: &str,
    ) -> Result<GrowthTime, GrowthError> {
        let planted = self.parse_reading(planted)?;
        let harvested = self.parse_reading(harvested)?;
        Ok(GrowthTime::between(planted, harvested)?)
    }
}

/// Growth time with the default configuration.
///
/// # Errors
/// See `Calculator::growth_time`.
pub fn growth_time(planted: &Timestamp, harvested: &Timestamp) -> Result<GrowthTime, GrowthError> {
    Calculator::default().growth_time(planted, harvested)
}
