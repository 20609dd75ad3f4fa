use crate::ConvertError;
use crate::consts::{CYCLE_LENGTH, SEASON_SPAN};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the four seasons of the in-game year, in calendar order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    /// Also accepted as "Fall"
    #[serde(alias = "fall")]
    Autumn,
    Winter,
}

impl Season {
    /// All seasons in calendar order
    pub const ALL: [Self; 4] = [Self::Spring, Self::Summer, Self::Autumn, Self::Winter];

    /// Position of the first day of this season on the yearly cycle.
    ///
    /// Offsets are multiples of `SEASON_SPAN`, so Spring is 0 and Winter is 30.
    #[inline]
    pub const fn offset(self) -> i64 {
        let index = match self {
            Self::Spring => 0,
            Self::Summer => 1,
            Self::Autumn => 2,
            Self::Winter => 3,
        };
        index * SEASON_SPAN
    }
}

impl FromStr for Season {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("spring") {
            Ok(Self::Spring)
        } else if s.eq_ignore_ascii_case("summer") {
            Ok(Self::Summer)
        } else if s.eq_ignore_ascii_case("autumn") || s.eq_ignore_ascii_case("fall") {
            Ok(Self::Autumn)
        } else if s.eq_ignore_ascii_case("winter") {
            Ok(Self::Winter)
        } else {
            Err(ConvertError::InvalidSeason(s.to_owned()))
        }
    }
}

// Helper functions

/// Maps a season name to its offset on the yearly cycle, ignoring case.
///
/// # Errors
/// Returns `ConvertError::InvalidSeason` for anything other than
/// spring, summer, autumn, fall or winter.
pub fn season_offset(season: &str) -> Result<i64, ConvertError> {
    season.parse::<Season>().map(Season::offset)
}

/// Forward distance from position `a` to position `b` on a cycle of
/// `cycle_length` days, wrapping past the end back to the start.
///
/// Positions outside `0..cycle_length` are not rejected; they go through the
/// same formula.
pub const fn cyclic_distance(a: i64, b: i64, cycle_length: i64) -> i64 {
    if a <= b { b - a } else { (cycle_length - a) + b }
}

/// `cyclic_distance` on the in-game year.
pub const fn day_distance(a: i64, b: i64) -> i64 {
    cyclic_distance(a, b, CYCLE_LENGTH)
}
