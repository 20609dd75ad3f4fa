//! Shared constructors for unit tests.

use crate::{Calculator, Reading, Timestamp};

pub fn timestamp(season: &str, day: i32, hour: i32, minute: i32, meridiem: &str) -> Timestamp {
    Timestamp::new(season, day, hour, minute, meridiem)
}

pub fn parsed(input: &str) -> Timestamp {
    input
        .parse()
        .unwrap_or_else(|err| panic!("test timestamp {input:?} should parse: {err}"))
}

pub fn reading(input: &str) -> Reading {
    Calculator::default()
        .reading(&parsed(input))
        .unwrap_or_else(|err| panic!("test timestamp {input:?} should resolve: {err}"))
}
