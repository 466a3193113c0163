// SPDX-License-Identifier: MIT

//!
//! Canvases posters can be drawn onto
//!

pub mod svg;
