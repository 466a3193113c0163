// SPDX-License-Identifier: MIT

//!
//! Track drawers
//!

pub mod calendar;
