// SPDX-License-Identifier: MIT

//!
//! Layout params
//!

use crate::{Position, Size};
use crate::poster::consts::{TRACKS_MARGIN_BOTTOM, TRACKS_MARGIN_TOP, TRACKS_MARGIN_X};
use serde::Serialize;
use std::fmt::Debug;

/// A box that specifies the location and size of something (e.g. the area of
/// the poster the tracks are drawn in)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PositionAndSize {
    /// The smallest x/y values (boxes grow down and to the right from here)
    pub position: Position,

    /// The width of the box (from which the largest x value can be derived)
    pub width: f64,

    /// The height of the box (from which the largest y value can be derived)
    pub height: f64,
}

impl PositionAndSize {
    pub fn new(position: Position, size: Size) -> Self {
        Self {
            position,
            width: size.x,
            height: size.y,
        }
    }

    /// The area left for the tracks once the header and footer have been
    /// laid out on a poster of the given size
    pub fn tracks_area(poster_width: f64, poster_height: f64) -> Self {
        Self {
            position: Position::new(TRACKS_MARGIN_X, TRACKS_MARGIN_TOP),
            width: poster_width - (2.0 * TRACKS_MARGIN_X),
            height: poster_height - TRACKS_MARGIN_TOP - TRACKS_MARGIN_BOTTOM,
        }
    }

    /// Calculate the largest x value of the box
    pub fn max_x(&self) -> f64 {
        self.position.x + self.width
    }

    /// Calculate the largest y value of the box (i.e. how far the box grows
    /// downwards)
    pub fn max_y(&self) -> f64 {
        self.position.y + self.height
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tracks_area() {
        let area = PositionAndSize::tracks_area(200.0, 300.0);
        assert_eq!(area.position, Position::new(10.0, 30.0));
        assert_eq!((area.width, area.height), (180.0, 240.0));
        assert_eq!((area.max_x(), area.max_y()), (190.0, 270.0));
    }
}
