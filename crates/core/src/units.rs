// SPDX-License-Identifier: MIT

//!
//! The unit system distances are displayed in
//!

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Kilometers in a mile
pub const KM_PER_MILE: f64 = 1.609344;

/// Errors that can arise in relation to [`Units`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitsError {
    #[error("Unknown unit system `{0}` (expected `metric` or `imperial`)")]
    Unknown(String),
}

/// Kilometers or miles
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    #[display("metric")]
    Metric,

    #[display("imperial")]
    Imperial,
}

impl Units {
    /// Convert meters into the unit system (kilometers or miles)
    pub fn from_meters(&self, meters: f64) -> f64 {
        match self {
            Units::Metric => meters / 1000.0,
            Units::Imperial => meters / 1000.0 / KM_PER_MILE,
        }
    }

    /// The label of the unit distances are converted to
    pub fn label(&self) -> &'static str {
        match self {
            Units::Metric => "km",
            Units::Imperial => "mi",
        }
    }
}

impl FromStr for Units {
    type Err = UnitsError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            _ => Err(UnitsError::Unknown(text.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_meters() {
        assert!((Units::Imperial.from_meters(1609.344) - 1.0).abs() < 1e-12);
        assert!((Units::Metric.from_meters(1609.344) - 1.609344).abs() < 1e-12);
        assert_eq!(Units::Metric.label(), "km");
        assert_eq!(Units::Imperial.label(), "mi");
    }

    #[test]
    fn from_str() {
        assert_eq!("metric".parse::<Units>(), Ok(Units::Metric));
        assert_eq!("imperial".parse::<Units>(), Ok(Units::Imperial));
        assert!("furlongs".parse::<Units>().is_err());
        assert!("Metric".parse::<Units>().is_err());
        assert_eq!(Units::Imperial.to_string(), "imperial");
    }

    #[test]
    fn deserialize_rejects_unknown_units() {
        let units: Units = serde_json::from_str(r#""imperial""#).unwrap();
        assert_eq!(units, Units::Imperial);
        assert!(serde_json::from_str::<Units>(r#""nautical""#).is_err());
    }
}
