// SPDX-License-Identifier: MIT

//!
//! Primitives
//!

use crate::{Position, PositionAndSize, colour::Colour};
use serde::Serialize;
use std::fmt::Debug;

/// The font all poster text is drawn in
pub const FONT_FAMILY: &str = "Arial";

/// How a piece of text is styled
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FontStyle {
    pub font_size_px: f64,
    pub bold: bool,
}

impl FontStyle {
    pub const fn regular(font_size_px: f64) -> Self {
        Self {
            font_size_px,
            bold: false,
        }
    }

    pub const fn bold(font_size_px: f64) -> Self {
        Self {
            font_size_px,
            bold: true,
        }
    }

    /// The style as an inline CSS declaration
    pub fn css(&self) -> String {
        if self.bold {
            format!(
                "font-size:{}px; font-family:{FONT_FAMILY}; font-weight:bold;",
                self.font_size_px
            )
        } else {
            format!("font-size:{}px; font-family:{FONT_FAMILY}", self.font_size_px)
        }
    }
}

/// Information needed to draw text.  The position is where the text's
/// baseline starts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOut {
    pub position: Position,
    pub text: String,
    pub colour: Colour,
    pub style: FontStyle,
}

/// Information needed to draw a filled box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilledBox {
    pub position_and_size: PositionAndSize,
    pub fill_colour: Colour,

    /// From `0.0` (transparent) to `1.0` (opaque)
    pub opacity: f64,
}

impl FilledBox {
    /// An opaque box
    pub fn opaque(position_and_size: PositionAndSize, fill_colour: Colour) -> Self {
        Self {
            position_and_size,
            fill_colour,
            opacity: 1.0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn css() {
        assert_eq!(
            FontStyle::bold(12.0).css(),
            "font-size:12px; font-family:Arial; font-weight:bold;"
        );
        assert_eq!(FontStyle::regular(4.0).css(), "font-size:4px; font-family:Arial");
        assert_eq!(FontStyle::regular(2.5).css(), "font-size:2.5px; font-family:Arial");
    }
}
