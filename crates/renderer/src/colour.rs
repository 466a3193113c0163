// SPDX-License-Identifier: MIT

//!
//! Parse, format, and manage colours used when drawing a poster
//!

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can arise in relation to a [`Colour`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColourError {
    #[error("`{0}` is not a hex colour (expected e.g. `#ab66ef`)")]
    InvalidHex(String),
}

/// The `Colour` type.  (De)serialised as a hex string (e.g. `#ab66ef`).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
}

impl TryFrom<String> for Colour {
    type Error = ColourError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Colour::from_hex(value)
    }
}

impl From<Colour> for String {
    fn from(value: Colour) -> Self {
        value.to_hex()
    }
}

impl FromStr for Colour {
    type Err = ColourError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Colour::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Colour {
    /// Create a colour from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b }
    }

    /// Create a colour from a hex colour (e.g. `#ab66ef`, `ab66ef`, `#ab66efff`).
    /// If the hex value has an alpha component, it is removed.
    pub fn from_hex<S: AsRef<str>>(hex_colour: S) -> Result<Self, ColourError> {
        let hex_colour = hex_colour.as_ref();
        let invalid = || ColourError::InvalidHex(hex_colour.to_string());

        // Only ASCII hex digits (with an optional leading "#") are allowed, so
        // the slicing below is always on char boundaries
        let digits = hex_colour.strip_prefix('#').unwrap_or(hex_colour);
        if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let digits = match digits.len() {
            6 => digits,
            8 => &digits[0..6],
            _ => return Err(invalid()),
        };

        // Convert RGB hex digits to u8s
        let component = |start: usize| u8::from_str_radix(&digits[start..(start + 2)], 16);
        match (component(0), component(2), component(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Colour::from_rgb(r, g, b)),
            _ => Err(invalid()),
        }
    }

    /// Get a colour as RGB values
    pub fn as_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// To get RGB as, say, #0affc3 (for SVG & CSS)
    pub fn to_hex(&self) -> String {
        // {:02x} means print as hex, requesting 2 chars (pad left with "0" if only 1 char otherwise)
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_hex() {
        assert_eq!(Colour::from_hex("#ab66ef"), Ok(Colour::from_rgb(0xab, 0x66, 0xef)));
        assert_eq!(Colour::from_hex("AB66EF"), Ok(Colour::from_rgb(0xab, 0x66, 0xef)));
        assert_eq!(Colour::from_hex("#ab66efff"), Ok(Colour::from_rgb(0xab, 0x66, 0xef)));
        assert!(Colour::from_hex("").is_err());
        assert!(Colour::from_hex("#fff").is_err());
        assert!(Colour::from_hex("#gg66ef").is_err());
        assert!(Colour::from_hex("#ab66ef0").is_err());
        assert!(Colour::from_hex("#é6ef00").is_err());
    }

    #[test]
    fn to_hex() {
        assert_eq!(Colour::from_rgb(0x0a, 0xff, 0xc3).to_hex(), "#0affc3");
        assert_eq!(Colour::from_hex("#4DD2FF").unwrap().to_string(), "#4dd2ff");
    }

    #[test]
    fn serde_as_hex_string() {
        let colour: Colour = serde_json::from_str(r##""#222222""##).unwrap();
        assert_eq!(colour.as_rgb(), (0x22, 0x22, 0x22));
        assert_eq!(serde_json::to_string(&colour).unwrap(), r##""#222222""##);
        assert!(serde_json::from_str::<Colour>(r##""red""##).is_err());
    }
}
