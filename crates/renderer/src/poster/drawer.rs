// SPDX-License-Identifier: MIT

//!
//! Track drawers
//!

use crate::{Canvas, PosterError};

/// A strategy for drawing the tracks themselves.
///
/// The [`Poster`](crate::Poster) lays out the header and footer and then asks
/// the drawer to fill the remaining rectangle (`width` × `height`, with its
/// top left corner at `offset_x`, `offset_y`).  How the tracks are drawn
/// within it is entirely up to the drawer.
pub trait TracksDrawer {
    fn draw(
        &self,
        canvas: &mut dyn Canvas,
        width: f64,
        height: f64,
        offset_x: f64,
        offset_y: f64,
    ) -> Result<(), PosterError>;
}
