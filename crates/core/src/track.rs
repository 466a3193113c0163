// SPDX-License-Identifier: MIT

//!
//! The GPX Poster track type
//!

use chrono::{Datelike, IsoWeek, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to a [`Track`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackError {
    /// The length must be a finite number of meters that is not negative
    #[error("Track length `{0}` is not allowed")]
    InvalidLength(f64),
}

/// A single recorded activity.
///
/// Only the start time and the total length (in meters) are kept - the
/// geometry of the track is the concern of whoever draws it.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Track {
    start_time: NaiveDateTime,
    length: f64,
}

impl Track {
    /// Create a new [`Track`] if the result will be valid
    pub fn new(start_time: NaiveDateTime, length: f64) -> Result<Self, TrackError> {
        if !length.is_finite() || length < 0.0 {
            return Err(TrackError::InvalidLength(length));
        }
        Ok(Track { start_time, length })
    }

    /// When the track was started
    pub fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// The length of the track in meters
    pub fn length(&self) -> f64 {
        self.length
    }

    /// The calendar year the track was started in
    pub fn year(&self) -> i32 {
        self.start_time.year()
    }

    /// The ISO week (and ISO week-based year) the track was started in
    pub fn iso_week(&self) -> IsoWeek {
        self.start_time.iso_week()
    }

    /// The start date as `YYYY-MM-DD`
    pub fn date_key(&self) -> String {
        self.start_time.format("%Y-%m-%d").to_string()
    }
}

#[derive(Deserialize)]
struct RawTrack {
    start_time: NaiveDateTime,
    length: f64,
}

impl<'de> Deserialize<'de> for Track {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw_track = RawTrack::deserialize(deserializer)?;
        Track::new(raw_track.start_time, raw_track.length).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn time(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn new() {
        assert!(Track::new(time("2021-01-01 08:00:00"), -1.0).is_err());
        assert!(Track::new(time("2021-01-01 08:00:00"), f64::NAN).is_err());
        assert!(Track::new(time("2021-01-01 08:00:00"), f64::INFINITY).is_err());
        assert!(Track::new(time("2021-01-01 08:00:00"), 0.0).is_ok());
    }

    #[test]
    fn date_key() {
        let track = Track::new(time("2021-06-05 23:59:59"), 1000.0).unwrap();
        assert_eq!(track.date_key(), "2021-06-05");
        assert_eq!(track.year(), 2021);
    }

    #[test]
    fn iso_week_uses_week_based_year() {
        // 1st Jan 2021 is a Friday, so it belongs to the last ISO week of 2020
        let track = Track::new(time("2021-01-01 08:00:00"), 1000.0).unwrap();
        assert_eq!(track.iso_week().year(), 2020);
        assert_eq!(track.iso_week().week(), 53);
    }

    #[test]
    fn deserialize() {
        let track: Track =
            serde_json::from_str(r#"{"start_time": "2021-01-01T08:00:00", "length": 1500.5}"#)
                .unwrap();
        assert_eq!(track.length(), 1500.5);
        assert_eq!(track.date_key(), "2021-01-01");

        let result: Result<Track, _> =
            serde_json::from_str(r#"{"start_time": "2021-01-01T08:00:00", "length": -3.0}"#);
        assert!(result.is_err());
    }
}
