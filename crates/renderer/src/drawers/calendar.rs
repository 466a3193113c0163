// SPDX-License-Identifier: MIT

//!
//! The calendar drawer
//!

use crate::{
    Canvas, Colour, FilledBox, FontStyle, Position, PositionAndSize, Poster, PosterError, Size,
    TextOut, TracksDrawer,
};
use chrono::{Datelike, NaiveDate};
use gpx_poster_core::Track;
use log::debug;

/// Columns per year row (a year touches at most 54 Monday-to-Sunday weeks)
const WEEK_COLUMNS: f64 = 54.0;

/// Columns reserved to the left of each row for the year label
const LABEL_COLUMNS: f64 = 4.0;

/// Cell rows per year row (7 days plus a gap)
const ROWS_PER_YEAR: f64 = 8.0;

/// How much of its cell a day fills
const DAY_FILL: f64 = 0.8;

/// Opacity of the least active day with tracks
const MIN_TRACK_OPACITY: f64 = 0.3;

/// Opacity of days without tracks
const EMPTY_DAY_OPACITY: f64 = 0.1;

/// The most year rows a poster can hold
pub const MAX_YEAR_ROWS: u64 = 100;

/// Draws one row per year, and one cell per day in that row (weeks as
/// columns, weekdays as rows).  The more distance covered on a day, the
/// stronger its cell; the day(s) with the most distance use the special
/// colour.
pub struct CalendarDrawer<'a> {
    poster: &'a Poster,
}

impl<'a> CalendarDrawer<'a> {
    pub fn new(poster: &'a Poster) -> Self {
        Self { poster }
    }

    /// The years to draw rows for: the poster's year range if it has bounds,
    /// otherwise every year with tracks
    fn years(&self) -> Result<Vec<i32>, PosterError> {
        match self.poster.years() {
            Some(years) if years.is_set() => {
                let count = years.count();
                if count > MAX_YEAR_ROWS {
                    return Err(PosterError::TooManyYears {
                        count,
                        max: MAX_YEAR_ROWS,
                    });
                }
                Ok(years.iter().collect())
            }
            _ => {
                let mut years: Vec<i32> = self
                    .poster
                    .tracks_by_date()
                    .values()
                    .filter_map(|tracks| tracks.first())
                    .map(Track::year)
                    .collect();
                years.dedup();
                Ok(years)
            }
        }
    }

    /// The fill colour & opacity of a day
    fn day_style(&self, date: NaiveDate) -> (Colour, f64) {
        let colours = self.poster.colours();
        let key = date.format("%Y-%m-%d").to_string();
        let Some(tracks) = self.poster.tracks_by_date().get(&key) else {
            return (colours.text, EMPTY_DAY_OPACITY);
        };

        let length_range = self.poster.length_range_by_date();
        let length: f64 = tracks.iter().map(Track::length).sum();
        if length_range.upper().is_some_and(|max| length >= max) {
            return (colours.special, 1.0);
        }
        let position = length_range.relative_position(length).unwrap_or(1.0);
        (
            colours.track,
            MIN_TRACK_OPACITY + ((1.0 - MIN_TRACK_OPACITY) * position),
        )
    }
}

impl TracksDrawer for CalendarDrawer<'_> {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        width: f64,
        height: f64,
        offset_x: f64,
        offset_y: f64,
    ) -> Result<(), PosterError> {
        let years = self.years()?;
        if years.is_empty() {
            debug!("calendar: no years to draw");
            return Ok(());
        }

        let row_height = height / years.len() as f64;
        let cell = (width / (WEEK_COLUMNS + LABEL_COLUMNS)).min(row_height / ROWS_PER_YEAR);
        debug!("calendar: {} years, cell size {cell}", years.len());

        for (row, &year) in years.iter().enumerate() {
            let top = offset_y + (row as f64 * row_height);

            canvas.text(TextOut {
                position: Position::new(offset_x, top + (2.0 * cell)),
                text: year.to_string(),
                colour: self.poster.colours().text,
                style: FontStyle::regular(1.5 * cell),
            });

            let Some(first_day) = NaiveDate::from_ymd_opt(year, 1, 1) else {
                continue;
            };
            let first_weekday = first_day.weekday().num_days_from_monday();
            for date in first_day.iter_days().take_while(|date| date.year() == year) {
                let day_index = date.ordinal0() + first_weekday;
                let column = f64::from(day_index / 7);
                let weekday = f64::from(day_index % 7);
                let (fill_colour, opacity) = self.day_style(date);
                canvas.rect(FilledBox {
                    position_and_size: PositionAndSize::new(
                        Position::new(
                            offset_x + ((LABEL_COLUMNS + column) * cell),
                            top + (weekday * cell),
                        ),
                        Size::new(DAY_FILL * cell, DAY_FILL * cell),
                    ),
                    fill_colour,
                    opacity,
                });
            }
        }
        Ok(())
    }
}
