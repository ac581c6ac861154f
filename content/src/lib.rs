// overlapfinder/content/src/lib.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Glyph outlines and the compiler that turns them into quadratic path commands.

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub mod compile;
pub mod error;
pub mod fill;
pub mod outline;
pub mod segment;

pub use crate::compile::{compile, PathCompiler};
pub use crate::error::CompileError;
pub use crate::fill::FillRule;
pub use crate::outline::{Contour, Outline, Point, PointKind};
pub use crate::segment::PathCommand;
