// overlapfinder/content/src/error.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors.

use thiserror::Error;

/// Errors that can occur when building contours or compiling them to path commands.
///
/// None of these are recovered from. Malformed input is reported rather than repaired, since a
/// repair could hide exactly the defect being looked for.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum CompileError {
    /// The contour's first point isn't on-curve.
    ///
    /// Rotating the contour to start at a typed point would fix this, but isn't supported.
    #[error("contour {contour} does not start with an on-curve point")]
    UnsupportedStartPoint {
        /// Index of the offending contour within its outline.
        contour: usize,
    },
    /// The contour has no points at all.
    #[error("contour {contour} has no points")]
    EmptyContour {
        /// Index of the offending contour within its outline.
        contour: usize,
    },
    /// The off-curve run plus synthesized points didn't alternate off/on.
    #[error("quadratic point sequence of length {len} does not alternate off-curve/on-curve")]
    MalformedQuadSequence {
        /// Length of the offending sequence, terminator included.
        len: usize,
    },
    /// Off-curve points were left over without a `qcurve` point to end them.
    #[error("{pending} off-curve point(s) were not terminated by a qcurve point")]
    UnterminatedCurve {
        /// The number of unconsumed off-curve points.
        pending: usize,
    },
}
