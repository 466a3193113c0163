// SPDX-License-Identifier: MIT

//!
//! The `gpx-poster-renderer` poster
//!

mod canvas;
mod colours;
pub(crate) mod consts;
mod drawer;
mod helpers;
mod layout_params;
mod point;
mod primitives;
mod statistics;

pub(crate) use helpers::*;

pub use canvas::*;
pub use colours::*;
pub use drawer::*;
pub use layout_params::*;
pub use point::*;
pub use primitives::*;
pub use statistics::*;

use crate::config::validate_dimensions;
use crate::{ConfigError, PosterConfig, PosterError, SvgCanvas};
use consts::*;
use gpx_poster_core::{Track, Units, ValueRange, YearRange};
use log::{debug, info, trace};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// The core `gpx-poster-renderer` poster.  This holds the tracks, groups them
/// by date, works out the statistics shown in the footer, and lays out the
/// poster before handing the track area over to a [`TracksDrawer`].
///
/// Note that the tracks are used in two different ways:
///
/// - The date grouping and the length ranges only include tracks started in
///   the poster's [`YearRange`]
/// - The footer statistics always summarise *all* the tracks, whatever the
///   year range
#[derive(Debug, Clone)]
pub struct Poster {
    /// Shown at the top of the poster
    title: String,

    /// Shown in the footer (blank if not set)
    athlete: Option<String>,

    /// The unit system for the footer statistics
    units: Units,

    /// The poster's colours
    colours: PosterColours,

    /// Poster width in mm (and view box units)
    width: f64,

    /// Poster height in mm (and view box units)
    height: f64,

    /// All the tracks, in the order they were given
    tracks: Vec<Track>,

    /// Tracks in the year range, keyed by their `YYYY-MM-DD` start date
    tracks_by_date: BTreeMap<String, Vec<Track>>,

    /// The shortest and longest track in the year range
    length_range: ValueRange,

    /// The shortest and longest daily total in the year range
    length_range_by_date: ValueRange,

    /// The years tracks must be started in to be drawn.  `None` until either
    /// set by the user or established from the first set of tracks.
    years: Option<YearRange>,
}

impl Default for Poster {
    fn default() -> Self {
        let config = PosterConfig::default();
        Self {
            title: config.title,
            athlete: config.athlete,
            units: config.units,
            colours: config.colours,
            width: config.width,
            height: config.height,
            tracks: Vec::new(),
            tracks_by_date: BTreeMap::new(),
            length_range: ValueRange::new(),
            length_range_by_date: ValueRange::new(),
            years: None,
        }
    }
}

impl Poster {
    /// Create a new poster from a (valid) config
    pub fn new(config: PosterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let years = config.year_range()?;
        debug!("new poster {}x{} (years: {years:?})", config.width, config.height);
        Ok(Self {
            title: config.title,
            athlete: config.athlete,
            units: config.units,
            colours: config.colours,
            width: config.width,
            height: config.height,
            years,
            ..Default::default()
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title<S: Into<String>>(&mut self, title: S) {
        self.title = title.into();
    }

    pub fn athlete(&self) -> Option<&str> {
        self.athlete.as_deref()
    }

    pub fn set_athlete(&mut self, athlete: Option<String>) {
        self.athlete = athlete;
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn set_units(&mut self, units: Units) {
        self.units = units;
    }

    /// Get the poster colours
    pub fn colours(&self) -> PosterColours {
        self.colours
    }

    pub fn set_colours(&mut self, colours: PosterColours) {
        debug!("poster set colours");
        self.colours = colours;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Set the poster size (mm).  Both dimensions must be positive.
    pub fn set_size(&mut self, width: f64, height: f64) -> Result<(), ConfigError> {
        validate_dimensions(width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// The years tracks must be started in to be drawn (`None` if not yet
    /// established)
    pub fn years(&self) -> Option<YearRange> {
        self.years
    }

    /// Whether the year range has been established, either by
    /// [`Poster::set_years`] or by a previous call to [`Poster::set_tracks`].
    /// Once established, [`Poster::set_tracks`] never changes it.
    pub fn years_established(&self) -> bool {
        self.years.is_some()
    }

    /// Only draw tracks started in these years.  Must be called before
    /// [`Poster::set_tracks`] to have any effect on the date grouping.
    pub fn set_years(&mut self, years: YearRange) {
        debug!("poster set years {years}");
        self.years = Some(years);
    }

    /// All tracks, in the order they were given
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Tracks in the year range, keyed by `YYYY-MM-DD` start date (in date
    /// order)
    pub fn tracks_by_date(&self) -> &BTreeMap<String, Vec<Track>> {
        &self.tracks_by_date
    }

    /// The shortest and longest single track in the year range
    pub fn length_range(&self) -> ValueRange {
        self.length_range
    }

    /// The shortest and longest daily total in the year range
    pub fn length_range_by_date(&self) -> ValueRange {
        self.length_range_by_date
    }

    /// Replace the poster's tracks, and rebuild everything derived from them.
    ///
    /// If the year range hasn't been established yet it is set to cover every
    /// one of `tracks` - later calls will keep using that range.
    pub fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.tracks_by_date.clear();
        self.length_range = ValueRange::new();
        self.length_range_by_date = ValueRange::new();

        let years = *self.years.get_or_insert_with(|| {
            let mut years = YearRange::new();
            for track in &tracks {
                years.add(track.start_time());
            }
            debug!("established years {years} from {} tracks", tracks.len());
            years
        });

        for track in &tracks {
            if !years.contains(track.start_time()) {
                trace!("skipping track started {}", track.start_time());
                continue;
            }
            self.tracks_by_date
                .entry(track.date_key())
                .or_default()
                .push(*track);
            self.length_range.extend(track.length());
        }

        for tracks in self.tracks_by_date.values() {
            let length: f64 = tracks.iter().map(Track::length).sum();
            self.length_range_by_date.extend(length);
        }

        debug!(
            "set {} tracks ({} days in {years})",
            tracks.len(),
            self.tracks_by_date.len()
        );
        self.tracks = tracks;
    }

    /// Summarise all tracks (ignoring the year range).  Fails if there are no
    /// tracks.
    pub fn compute_track_statistics(&self) -> Result<TrackStatistics, PosterError> {
        TrackStatistics::from_tracks(&self.tracks)
    }

    /// Convert meters into the poster's unit system
    pub fn m2u(&self, meters: f64) -> f64 {
        self.units.from_meters(meters)
    }

    /// The label of the poster's unit system
    pub fn u(&self) -> &'static str {
        self.units.label()
    }

    /// Draw the poster onto the canvas, using the drawer for the tracks, and
    /// then commit the canvas
    pub fn draw(
        &self,
        drawer: &dyn TracksDrawer,
        canvas: &mut dyn Canvas,
    ) -> Result<(), PosterError> {
        // Fail before anything has been drawn if there's nothing to summarise
        let statistics = self.compute_track_statistics()?;

        info!("Drawing {}x{} poster", self.width, self.height);
        canvas.begin(self.width, self.height);
        canvas.rect(FilledBox::opaque(
            PositionAndSize::new(Position::new(0.0, 0.0), Size::new(self.width, self.height)),
            self.colours.background,
        ));
        self.draw_header(canvas);
        self.draw_footer(canvas, &statistics);
        self.draw_tracks(drawer, canvas)?;
        canvas.finish()
    }

    /// Draw the poster and write it as an SVG file
    pub fn save_svg<P: Into<PathBuf>>(
        &self,
        drawer: &dyn TracksDrawer,
        output: P,
    ) -> Result<(), PosterError> {
        let mut canvas = SvgCanvas::new(output);
        self.draw(drawer, &mut canvas)
    }

    fn draw_tracks(
        &self,
        drawer: &dyn TracksDrawer,
        canvas: &mut dyn Canvas,
    ) -> Result<(), PosterError> {
        let area = PositionAndSize::tracks_area(self.width, self.height);
        drawer.draw(
            canvas,
            area.width,
            area.height,
            area.position.x,
            area.position.y,
        )
    }

    fn draw_header(&self, canvas: &mut dyn Canvas) {
        self.text(canvas, &self.title, TITLE_POSITION, TITLE_STYLE);
    }

    fn draw_footer(&self, canvas: &mut dyn Canvas, statistics: &TrackStatistics) {
        let header_y = self.height - FOOTER_HEADER_ROW;
        let upper_y = self.height - FOOTER_UPPER_ROW;
        let lower_y = self.height - FOOTER_LOWER_ROW;
        let unit = self.u();

        // Athlete
        let athlete = self.athlete.as_deref().unwrap_or_default();
        let athlete_rows = [
            ("ATHLETE", header_y, FOOTER_HEADER_STYLE),
            (athlete, lower_y, FOOTER_VALUE_STYLE),
        ];
        for (text, y, style) in athlete_rows {
            self.text(canvas, text, Position::new(FOOTER_ATHLETE_X, y), style);
        }

        // Statistics
        self.text(
            canvas,
            "STATISTICS",
            Position::new(FOOTER_STATISTICS_X, header_y),
            FOOTER_HEADER_STYLE,
        );
        let statistics_rows = [
            (
                format!("Number: {}", statistics.count),
                Position::new(FOOTER_STATISTICS_X, upper_y),
            ),
            (
                format!("Weekly: {:.1}", statistics.weekly_average()),
                Position::new(FOOTER_STATISTICS_X, lower_y),
            ),
            (
                format!("Total: {:.1} {unit}", self.m2u(statistics.total_length)),
                Position::new(FOOTER_TOTAL_AVG_X, upper_y),
            ),
            (
                format!("Avg: {:.1} {unit}", self.m2u(statistics.average_length)),
                Position::new(FOOTER_TOTAL_AVG_X, lower_y),
            ),
            (
                format!("Min: {:.1} {unit}", self.m2u(statistics.min_length)),
                Position::new(FOOTER_MIN_MAX_X, upper_y),
            ),
            (
                format!("Max: {:.1} {unit}", self.m2u(statistics.max_length)),
                Position::new(FOOTER_MIN_MAX_X, lower_y),
            ),
        ];
        for (text, position) in statistics_rows {
            self.text(canvas, &text, position, FOOTER_SMALL_VALUE_STYLE);
        }
    }

    /// Draw text in the poster's text colour
    fn text(&self, canvas: &mut dyn Canvas, text: &str, position: Position, style: FontStyle) {
        canvas.text(TextOut {
            position,
            text: text.to_string(),
            colour: self.colours.text,
            style,
        });
    }
}
