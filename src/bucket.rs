use crate::consts::{FULL_DAY_THRESHOLD, HALF_DAY_THRESHOLD, MINUTES_IN_DAY};
use crate::prelude::*;

/// Coarse size of the sub-day part of a growth time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum DurationBucket {
    /// Less than a quarter of a day
    #[display(fmt = "0")]
    Zero,
    /// At least a quarter, less than three quarters of a day
    #[display(fmt = "0.5")]
    Half,
    /// Three quarters of a day or more
    #[display(fmt = "1")]
    Full,
}

/// Error type for duration bucketing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Minute difference exceeds the length of a day.
    #[error("Invalid input: minutes should be between 0 and {minutes_in_day}, got {minutes}")]
    OutOfRange { minutes: u64, minutes_in_day: i64 },

    /// Day length must be positive.
    #[error("Invalid day length: {0} minutes (must be positive)")]
    NonPositiveDay(i64),
}

impl DurationBucket {
    /// Fractional-day value of this bucket
    #[inline]
    pub const fn value(self) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::Half => 0.5,
            Self::Full => 1.0,
        }
    }

    /// Classifies a fraction of a day. Both thresholds are inclusive.
    pub fn classify(fraction: f64) -> Self {
        if fraction >= FULL_DAY_THRESHOLD {
            Self::Full
        } else if fraction >= HALF_DAY_THRESHOLD {
            Self::Half
        } else {
            Self::Zero
        }
    }
}

impl From<DurationBucket> for f64 {
    fn from(bucket: DurationBucket) -> Self {
        bucket.value()
    }
}

/// Buckets the gap between two minutes-since-midnight readings on a
/// 1440-minute day.
///
/// # Errors
/// Returns `RangeError::OutOfRange` if the readings are more than a day apart.
pub fn bucket(minutes_a: i64, minutes_b: i64) -> Result<DurationBucket, RangeError> {
    bucket_with(minutes_a, minutes_b, MINUTES_IN_DAY)
}

/// Buckets the gap between two readings on a day of `minutes_in_day` minutes.
///
/// # Errors
/// Returns `RangeError::NonPositiveDay` if `minutes_in_day <= 0`, or
/// `RangeError::OutOfRange` if the gap is longer than `minutes_in_day`.
#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub fn bucket_with(
    minutes_a: i64,
    minutes_b: i64,
    minutes_in_day: i64,
) -> Result<DurationBucket, RangeError> {
    if minutes_in_day <= 0 {
        return Err(RangeError::NonPositiveDay(minutes_in_day));
    }
    // abs_diff is unsigned, so a negative gap cannot occur
    let minutes = minutes_a.abs_diff(minutes_b);
    if minutes > minutes_in_day as u64 {
        return Err(RangeError::OutOfRange {
            minutes,
            minutes_in_day,
        });
    }

    Ok(DurationBucket::classify(minutes as f64 / minutes_in_day as f64))
}
