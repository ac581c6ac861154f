// overlapfinder/render/src/lib.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Renders glyph outlines under both fill rules and reports the colors of each rendering.
//!
//! ## Usage
//!
//! 1. Create an `OverlapChecker`. `OverlapChecker::with_resvg()` shells out to the `resvg`
//!    binary and decodes its PNG output; other rasterizers and decoders can be plugged in through
//!    the `Rasterizer` and `ImageLoader` traits.
//!
//! 2. Call `OverlapChecker::check_glif()` with the path of a `.glif` file, or
//!    `OverlapChecker::check_outline()` with an outline that's already in memory.
//!
//! 3. Print the resulting `GlyphReport`, or ask it whether the histograms differ. A glyph whose
//!    contours don't overlap renders the same under both fill rules.

#[macro_use]
extern crate log;

pub mod check;
pub mod error;
pub mod histogram;
pub mod raster;
pub mod rasterizer;

pub use crate::check::{GlyphReport, OverlapChecker, RenderOptions, RenderResult};
pub use crate::error::RenderError;
pub use crate::histogram::ColorHistogram;
pub use crate::raster::{ImageLoader, LoadedImage, PngLoader};
pub use crate::rasterizer::{Rasterizer, ResvgRasterizer};
