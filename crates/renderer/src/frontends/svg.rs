// SPDX-License-Identifier: MIT

//!
//! The SVG frontend
//!

use crate::poster::round_f64_to_nearest_0_001;
use crate::{Canvas, FilledBox, PosterError, TextOut};
use log::{debug, info};
use std::path::PathBuf;
use svg::Document;
use svg::Node;
use svg::node::element::{Rectangle, Text};

/// Builds an SVG document in memory, and writes it to a file when finished.
///
/// The document is `width`mm × `height`mm with a view box of `width` ×
/// `height` user units.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    /// Where the document is written (not written at all if `None`)
    output: Option<PathBuf>,
    document: Document,
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self {
            output: None,
            document: document(0.0, 0.0),
        }
    }
}

impl SvgCanvas {
    /// Create a canvas that is written to `output` when finished
    pub fn new<P: Into<PathBuf>>(output: P) -> Self {
        Self {
            output: Some(output.into()),
            ..Default::default()
        }
    }

    /// Create a canvas that is never written anywhere (see
    /// [`SvgCanvas::to_svg_string`])
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// The document as it currently stands
    pub fn to_svg_string(&self) -> String {
        self.document.to_string()
    }
}

impl Canvas for SvgCanvas {
    fn begin(&mut self, width: f64, height: f64) {
        debug!("svg begin {width}x{height}");
        self.document = document(width, height);
    }

    fn rect(&mut self, filled_box: FilledBox) {
        let area = filled_box.position_and_size;
        let mut rect = Rectangle::new()
            .set("x", number(area.position.x))
            .set("y", number(area.position.y))
            .set("width", number(area.width))
            .set("height", number(area.height))
            .set("fill", filled_box.fill_colour.to_string());
        if filled_box.opacity < 1.0 {
            rect = rect.set("fill-opacity", number(filled_box.opacity));
        }
        self.document.append(rect);
    }

    fn text(&mut self, text: TextOut) {
        self.document.append(
            Text::new(text.text)
                .set("x", number(text.position.x))
                .set("y", number(text.position.y))
                .set("fill", text.colour.to_string())
                .set("style", text.style.css()),
        );
    }

    fn finish(&mut self) -> Result<(), PosterError> {
        if let Some(output) = &self.output {
            svg::save(output, &self.document)?;
            info!("Wrote poster to {}", output.display());
        }
        Ok(())
    }
}

/// An empty `width`mm × `height`mm document
fn document(width: f64, height: f64) -> Document {
    let width = number(width);
    let height = number(height);
    Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("version", "1.1")
        .set("width", format!("{width}mm"))
        .set("height", format!("{height}mm"))
        .set("viewBox", format!("0 0 {width} {height}"))
}

/// Format a coordinate (or similar) for writing
fn number(value: f64) -> f64 {
    round_f64_to_nearest_0_001(value)
}
