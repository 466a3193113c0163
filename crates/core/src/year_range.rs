// SPDX-License-Identifier: MIT

//!
//! Year range
//!

use chrono::{Datelike, NaiveDateTime};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The text that [`YearRange::parse`] understands as "no filter"
pub const ALL_YEARS: &str = "all";

/// Errors that can arise when parsing a [`YearRange`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum YearRangeError {
    /// Neither `all`, a year, nor a `from-to` pair of years
    #[error("`{0}` is not a year range (expected `all`, `2016`, or `2016-2018`)")]
    Invalid(String),

    /// A `from-to` pair in which `from` is after `to`
    #[error("Year range `{from}-{to}` starts after it ends")]
    Reversed { from: i32, to: i32 },
}

/// An inclusive range of calendar years.
///
/// The range is either unbounded (it contains every timestamp) or has both a
/// first and a last year, with `from_year <= to_year`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct YearRange {
    bounds: Option<(i32, i32)>,
}

impl YearRange {
    /// Create a new, unbounded, [`YearRange`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [`YearRange`] from `from_year` to `to_year` (inclusive)
    pub fn from_years(from_year: i32, to_year: i32) -> Result<Self, YearRangeError> {
        if from_year > to_year {
            return Err(YearRangeError::Reversed {
                from: from_year,
                to: to_year,
            });
        }
        Ok(Self {
            bounds: Some((from_year, to_year)),
        })
    }

    /// Parse `all`, a single year (e.g. `2016`), or a pair of years (e.g.
    /// `2016-2018`) into the range.  On error the range is left as it was.
    pub fn parse(&mut self, text: &str) -> Result<(), YearRangeError> {
        if text == ALL_YEARS {
            self.clear();
            return Ok(());
        }
        let bounds = match text.split_once('-') {
            None => {
                let year = parse_year(text, text)?;
                (year, year)
            }
            Some((from, to)) => {
                let from = parse_year(from, text)?;
                let to = parse_year(to, text)?;
                if from > to {
                    return Err(YearRangeError::Reversed { from, to });
                }
                (from, to)
            }
        };
        self.bounds = Some(bounds);
        Ok(())
    }

    /// Make the range unbounded
    pub fn clear(&mut self) {
        self.bounds = None;
    }

    /// Whether the range has a first and last year (i.e. it is not unbounded)
    pub fn is_set(&self) -> bool {
        self.bounds.is_some()
    }

    /// The first year in the range
    pub fn from_year(&self) -> Option<i32> {
        self.bounds.map(|(from, _)| from)
    }

    /// The last year in the range
    pub fn to_year(&self) -> Option<i32> {
        self.bounds.map(|(_, to)| to)
    }

    /// Widen the range so that it includes the year of `time`.  An unbounded
    /// range becomes that single year.
    pub fn add(&mut self, time: NaiveDateTime) {
        let year = time.year();
        self.bounds = match self.bounds {
            None => Some((year, year)),
            Some((from, to)) => Some((from.min(year), to.max(year))),
        };
    }

    /// Whether the year of `time` is in the range (always true if unbounded)
    pub fn contains(&self, time: NaiveDateTime) -> bool {
        match self.bounds {
            None => true,
            Some((from, to)) => (from..=to).contains(&time.year()),
        }
    }

    /// The number of years in the range (`0` if unbounded)
    pub fn count(&self) -> u64 {
        match self.bounds {
            None => 0,
            Some((from, to)) => u64::from(to.abs_diff(from)) + 1,
        }
    }

    /// Each year in the range, in ascending order (nothing if unbounded)
    pub fn iter(&self) -> impl Iterator<Item = i32> + use<> {
        self.bounds.into_iter().flat_map(|(from, to)| from..=to)
    }
}

/// A year is a non-empty sequence of decimal digits that fits in an `i32`
fn parse_year(year: &str, text: &str) -> Result<i32, YearRangeError> {
    if year.is_empty() || !year.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(YearRangeError::Invalid(text.to_string()));
    }
    year.parse()
        .map_err(|_| YearRangeError::Invalid(text.to_string()))
}

impl FromStr for YearRange {
    type Err = YearRangeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut year_range = YearRange::new();
        year_range.parse(text)?;
        Ok(year_range)
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounds {
            None => write!(f, "{ALL_YEARS}"),
            Some((from, to)) if from == to => write!(f, "{from}"),
            Some((from, to)) => write!(f, "{from}-{to}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn time(year: i32) -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(year, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn parse_all() {
        let mut years = YearRange::from_years(2010, 2012).unwrap();
        assert!(years.parse("all").is_ok());
        assert!(!years.is_set());
        assert_eq!(years.count(), 0);
        assert!(years.contains(time(1900)));
        assert!(years.contains(time(2100)));
        assert_eq!(years.iter().count(), 0);
    }

    #[test]
    fn parse_single_year() {
        let years: YearRange = "2017".parse().unwrap();
        assert_eq!(years.from_year(), Some(2017));
        assert_eq!(years.to_year(), Some(2017));
        assert_eq!(years.count(), 1);
        assert!(years.contains(time(2017)));
        assert!(!years.contains(time(2016)));
    }

    #[test]
    fn parse_pair_of_years() {
        let years: YearRange = "2016-2018".parse().unwrap();
        assert_eq!(years.from_year(), Some(2016));
        assert_eq!(years.to_year(), Some(2018));
        assert_eq!(years.count(), 3);
        assert_eq!(years.iter().collect::<Vec<_>>(), vec![2016, 2017, 2018]);

        // Can iterate more than once
        assert_eq!(years.iter().collect::<Vec<_>>(), vec![2016, 2017, 2018]);
    }

    #[test]
    fn parse_failures_leave_range_untouched() {
        let mut years = YearRange::from_years(2000, 2001).unwrap();
        let before = years;
        assert_eq!(
            years.parse("2018-2016"),
            Err(YearRangeError::Reversed {
                from: 2018,
                to: 2016
            })
        );
        for bad in [
            "", "-", "2016-", "-2016", "20a6", "2016-2017-2018", " 2016", "All", "-5",
            "99999999999",
        ] {
            assert!(years.parse(bad).is_err(), "`{bad}` should not parse");
        }
        assert_eq!(years, before);
    }

    #[test]
    fn add() {
        let mut years = YearRange::new();
        years.add(time(2015));
        assert_eq!(years.count(), 1);
        years.add(time(2012));
        years.add(time(2013));
        years.add(time(2018));
        assert_eq!(years.from_year(), Some(2012));
        assert_eq!(years.to_year(), Some(2018));
        assert_eq!(years.count(), 7);
    }

    #[test]
    fn count_of_widest_range() {
        let years = YearRange::from_years(i32::MIN, i32::MAX).unwrap();
        assert_eq!(years.count(), 1 << 32);
        let years: YearRange = "0-2147483647".parse().unwrap();
        assert_eq!(years.count(), 1 << 31);
    }

    #[test]
    fn contains_is_inclusive() {
        let years = YearRange::from_years(2016, 2018).unwrap();
        assert!(!years.contains(time(2015)));
        assert!(years.contains(time(2016)));
        assert!(years.contains(time(2018)));
        assert!(!years.contains(time(2019)));
    }

    #[test]
    fn display_round_trips() {
        for text in ["all", "2016", "2016-2018"] {
            let years: YearRange = text.parse().unwrap();
            assert_eq!(years.to_string(), text);
        }
    }
}
