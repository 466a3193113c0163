// SPDX-License-Identifier: MIT

//!
//! Errors
//!

use crate::ConfigError;
use thiserror::Error;

/// Errors that can arise when building or drawing a poster
#[derive(Error, Debug)]
pub enum PosterError {
    #[error("There are no tracks to summarise")]
    NoTracks,

    #[error("Too many years to draw ({count}, at most {max})")]
    TooManyYears { count: u64, max: u64 },

    #[error("Unable to write the poster: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Config(#[from] ConfigError),
}
