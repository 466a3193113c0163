// SPDX-License-Identifier: MIT

//!
//! The surface a poster is drawn onto
//!

use crate::{FilledBox, PosterError, TextOut};

/// Something primitives can be drawn onto, and that can then be committed as
/// a finished artifact (e.g. an SVG file).
///
/// Coordinates are in user units of a `width` × `height` view box, which maps
/// onto a `width`mm × `height`mm document.
pub trait Canvas {
    /// Start a new document of the given size.  Anything drawn before is
    /// discarded.
    fn begin(&mut self, width: f64, height: f64);

    /// Draw a filled rectangle
    fn rect(&mut self, filled_box: FilledBox);

    /// Draw some text
    fn text(&mut self, text: TextOut);

    /// Commit the document
    fn finish(&mut self) -> Result<(), PosterError>;
}
