// SPDX-License-Identifier: MIT

//!
//! GPX Poster config
//!

use crate::poster::consts::{DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH};
use crate::{ColourError, PosterColours};
use gpx_poster_core::{Units, YearRange, YearRangeError};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can arise when loading or applying a [`PosterConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to read the config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to parse the config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Poster dimensions must be positive (got {width} x {height})")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("{0}")]
    YearRange(#[from] YearRangeError),

    #[error("{0}")]
    Colour(#[from] ColourError),
}

/// Everything about a poster that isn't the tracks themselves.  Any field
/// missing from a config file takes its default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosterConfig {
    /// Shown at the top of the poster
    pub title: String,

    /// Shown in the footer
    pub athlete: Option<String>,

    /// The unit system distances in the footer are shown in
    pub units: Units,

    /// The colour theme
    pub colours: PosterColours,

    /// Poster width (mm)
    pub width: f64,

    /// Poster height (mm)
    pub height: f64,

    /// Only tracks started in these years are drawn (`all`, `2016`, or
    /// `2016-2018`).  If not set, the years are taken from the tracks.
    pub year: Option<String>,
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            athlete: None,
            units: Units::default(),
            colours: PosterColours::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            year: None,
        }
    }
}

impl PosterConfig {
    /// Load a config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        info!("Loading config from {}", path.as_ref().display());
        let data = fs::read_to_string(path)?;
        let config: PosterConfig = serde_json::from_str(&data)?;
        info!("Config loaded = {config:?}");
        Ok(config)
    }

    /// Check the config can be used to draw a poster
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.year_range()?;
        validate_dimensions(self.width, self.height)
    }

    /// The parsed `year` field (`None` if not set)
    pub fn year_range(&self) -> Result<Option<YearRange>, ConfigError> {
        match &self.year {
            Some(year) => Ok(Some(year.parse()?)),
            None => Ok(None),
        }
    }
}

/// Both dimensions must be finite and positive
pub(crate) fn validate_dimensions(width: f64, height: f64) -> Result<(), ConfigError> {
    let is_valid = |value: f64| value.is_finite() && value > 0.0;
    if is_valid(width) && is_valid(height) {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimensions { width, height })
    }
}
