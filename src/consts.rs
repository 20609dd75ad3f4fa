/// Days in a single season
pub const SEASON_SPAN: i64 = 10;

/// Seasons in one in-game year
pub const SEASONS_PER_YEAR: i64 = 4;

/// Length of the repeating day cycle (one in-game year)
pub const CYCLE_LENGTH: i64 = SEASON_SPAN * SEASONS_PER_YEAR;

/// First valid day of a season, used when day numbers are checked
pub const FIRST_DAY: i32 = 1;

/// Last valid day of a season, used when day numbers are checked
pub const LAST_DAY: i32 = SEASON_SPAN as i32;

/// Minutes in one clock hour
pub const MINUTES_PER_HOUR: i64 = 60;

/// Hours on the face of a 12-hour clock
pub const HOURS_PER_HALF_DAY: i64 = 12;

/// Minutes in one in-game day
pub const MINUTES_IN_DAY: i64 = 1440;

/// Fraction of a day at or above which the remainder counts as a full day
pub const FULL_DAY_THRESHOLD: f64 = 0.75;
/// Fraction of a day at or above which the remainder counts as half a day
pub const HALF_DAY_THRESHOLD: f64 = 0.25;

/// Separator between the fields of a timestamp
pub const FIELD_SEPARATOR: char = ' ';
/// Separator between hour and minute
pub const CLOCK_SEPARATOR: char = ':';

/// Number of fields in `Season Day Hour:Minute AM/PM`
pub const FIELD_COUNT: usize = 4;
