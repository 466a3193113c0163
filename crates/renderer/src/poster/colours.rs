// SPDX-License-Identifier: MIT

//!
//! Colours
//!

use crate::colour::Colour;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// The poster's colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PosterColours {
    /// Fills the whole poster
    pub background: Colour,

    /// Title, footer, and labels
    pub text: Colour,

    /// Used to highlight notable tracks (e.g. the longest day)
    pub special: Colour,

    /// Used to draw the tracks themselves
    pub track: Colour,
}

impl Default for PosterColours {
    fn default() -> Self {
        Self {
            background: Colour::from_rgb(0x22, 0x22, 0x22),
            text: Colour::from_rgb(0xff, 0xff, 0xff),
            special: Colour::from_rgb(0xff, 0xff, 0x00),
            track: Colour::from_rgb(0x4d, 0xd2, 0xff),
        }
    }
}
