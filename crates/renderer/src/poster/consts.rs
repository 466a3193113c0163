// SPDX-License-Identifier: MIT

//!
//! Poster layout constants.  These are fixed so that posters always look the
//! same for a given size.
//!

use crate::{FontStyle, Position};

/// Poster width (mm) used when none is configured
pub const DEFAULT_WIDTH: f64 = 200.0;

/// Poster height (mm) used when none is configured
pub const DEFAULT_HEIGHT: f64 = 300.0;

/// Poster title used when none is configured
pub const DEFAULT_TITLE: &str = "My Poster";

pub const TITLE_POSITION: Position = Position::new(10.0, 20.0);
pub const TITLE_STYLE: FontStyle = FontStyle::bold(12.0);

pub const FOOTER_HEADER_STYLE: FontStyle = FontStyle::regular(4.0);
pub const FOOTER_VALUE_STYLE: FontStyle = FontStyle::regular(9.0);
pub const FOOTER_SMALL_VALUE_STYLE: FontStyle = FontStyle::regular(3.0);

/// Distances of the footer rows from the bottom of the poster
pub const FOOTER_HEADER_ROW: f64 = 20.0;
pub const FOOTER_UPPER_ROW: f64 = 15.0;
pub const FOOTER_LOWER_ROW: f64 = 10.0;

/// x positions of the footer columns
pub const FOOTER_ATHLETE_X: f64 = 10.0;
pub const FOOTER_STATISTICS_X: f64 = 120.0;
pub const FOOTER_TOTAL_AVG_X: f64 = 139.0;
pub const FOOTER_MIN_MAX_X: f64 = 167.0;

/// Space left around the tracks for the header and footer
pub const TRACKS_MARGIN_X: f64 = 10.0;
pub const TRACKS_MARGIN_TOP: f64 = 30.0;
pub const TRACKS_MARGIN_BOTTOM: f64 = 30.0;
