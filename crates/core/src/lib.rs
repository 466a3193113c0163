// SPDX-License-Identifier: MIT

//!
//! *Part of the wider GPX Poster project*
//!
//! This crate defines the basic datatypes used across the GPX Poster project
//! (renderer and command line tools).
//!
//! - [`Track`]: a single recorded activity (start time and length)
//! - [`YearRange`]: an inclusive range of calendar years used to filter tracks
//! - [`ValueRange`]: a running minimum/maximum over a stream of values
//! - [`Units`]: the unit system distances are displayed in
//!
//! As with the rest of the project, if a type is instantiated the developer
//! can be sure it's valid.
//!

mod track;
mod units;
mod value_range;
mod year_range;

pub use track::*;
pub use units::*;
pub use value_range::*;
pub use year_range::*;
