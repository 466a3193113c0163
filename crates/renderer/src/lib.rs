// SPDX-License-Identifier: MIT

//!
//! *Part of the wider GPX Poster project*
//!
//! This crate facilitates the drawing of track posters.
//!
//! The core of the crate is a platform independent [`Poster`] responsible for:
//!
//! - Managing the tracks that are to be drawn
//! - Managing constraints (the range of years tracks are drawn for)
//! - Working out the statistics shown in the footer
//! - Laying out the header, footer, and track area
//!
//! The tracks themselves are drawn by a [`TracksDrawer`], and everything is
//! drawn onto a [`Canvas`].  The rest of the crate holds implementations of
//! both:
//!
//! - [`SvgCanvas`] writes SVG documents
//! - [`CalendarDrawer`] shades one cell per day, one row per year
//!
//! ## Usage
//!
//! ```no_run
//! use gpx_poster_core::Track;
//! use gpx_poster_renderer::{CalendarDrawer, Poster, PosterConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tracks: Vec<Track> = serde_json::from_str(&std::fs::read_to_string("tracks.json")?)?;
//! let mut poster = Poster::new(PosterConfig::default())?;
//! poster.set_tracks(tracks);
//! poster.save_svg(&CalendarDrawer::new(&poster), "poster.svg")?;
//! # Ok(())
//! # }
//! ```
//!

pub mod colour;
pub mod config;
pub mod drawers;
pub mod error;
pub mod frontends;
pub mod poster;

pub use colour::*;
pub use config::*;
pub use drawers::calendar::CalendarDrawer;
pub use error::*;
pub use frontends::svg::SvgCanvas;
pub use poster::*;
