// SPDX-License-Identifier: MIT

//!
//! Track statistics shown in the poster footer
//!

use crate::PosterError;
use gpx_poster_core::{Track, ValueRange};
use std::collections::HashSet;

/// Summary of a set of tracks.  All lengths are in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackStatistics {
    /// The number of tracks
    pub count: usize,
    pub total_length: f64,
    pub average_length: f64,
    pub min_length: f64,
    pub max_length: f64,

    /// The number of distinct ISO weeks (week-based year and week number) with
    /// at least one track
    pub weeks: usize,
}

impl TrackStatistics {
    /// Summarise `tracks`.  There must be at least one track.
    pub fn from_tracks(tracks: &[Track]) -> Result<Self, PosterError> {
        let mut length_range = ValueRange::new();
        let mut total_length = 0.0;
        let mut weeks = HashSet::new();
        for track in tracks {
            total_length += track.length();
            length_range.extend(track.length());
            let week = track.iso_week();
            weeks.insert((week.year(), week.week()));
        }

        let (Some(min_length), Some(max_length)) = (length_range.lower(), length_range.upper())
        else {
            return Err(PosterError::NoTracks);
        };

        Ok(Self {
            count: tracks.len(),
            total_length,
            average_length: total_length / tracks.len() as f64,
            min_length,
            max_length,
            weeks: weeks.len(),
        })
    }

    /// The average number of tracks per week that had any tracks
    pub fn weekly_average(&self) -> f64 {
        self.count as f64 / self.weeks as f64
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    fn track(year: i32, month: u32, day: u32, length: f64) -> Track {
        let start_time = NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        Track::new(start_time, length).unwrap()
    }

    #[test]
    fn from_tracks() {
        let tracks = vec![
            track(2021, 1, 1, 1000.0),
            track(2021, 1, 1, 2000.0),
            track(2021, 6, 15, 5000.0),
        ];
        let statistics = TrackStatistics::from_tracks(&tracks).unwrap();
        assert_eq!(statistics.count, 3);
        assert_eq!(statistics.total_length, 8000.0);
        assert_eq!(statistics.average_length, 8000.0 / 3.0);
        assert_eq!(statistics.min_length, 1000.0);
        assert_eq!(statistics.max_length, 5000.0);

        // 2020-W53 and 2021-W24
        assert_eq!(statistics.weeks, 2);
        assert_eq!(statistics.weekly_average(), 1.5);
    }

    #[test]
    fn weeks_follow_iso_calendar() {
        // Mon 28th Dec 2020 & Sun 3rd Jan 2021 are both in 2020-W53, whereas
        // Mon 4th Jan 2021 starts 2021-W01
        let tracks = vec![
            track(2020, 12, 28, 1.0),
            track(2021, 1, 3, 1.0),
            track(2021, 1, 4, 1.0),
        ];
        let statistics = TrackStatistics::from_tracks(&tracks).unwrap();
        assert_eq!(statistics.weeks, 2);

        // Same week number in different years are different weeks
        let tracks = vec![track(2019, 3, 13, 1.0), track(2021, 3, 17, 1.0)];
        let statistics = TrackStatistics::from_tracks(&tracks).unwrap();
        assert_eq!(statistics.weeks, 2);
    }

    #[test]
    fn no_tracks() {
        assert!(matches!(
            TrackStatistics::from_tracks(&[]),
            Err(PosterError::NoTracks)
        ));
    }
}
