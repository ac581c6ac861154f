// overlapfinder/content/src/segment.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Path drawing commands, in the vocabulary SVG path data understands.

use pathfinder_geometry::vector::Vector2F;

/// A single path drawing command.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Starts a new subpath at the given point.
    MoveTo(Vector2F),
    /// Draws a straight line to the given point.
    LineTo(Vector2F),
    /// Draws a quadratic Bézier curve with the given control point and endpoint.
    QuadTo(Vector2F, Vector2F),
}

impl PathCommand {
    /// The point this command ends at.
    #[inline]
    pub fn to(&self) -> Vector2F {
        match *self {
            PathCommand::MoveTo(to) | PathCommand::LineTo(to) | PathCommand::QuadTo(_, to) => to,
        }
    }

    /// Returns true if this command starts a new subpath.
    #[inline]
    pub fn is_move_to(&self) -> bool {
        match *self {
            PathCommand::MoveTo(_) => true,
            _ => false,
        }
    }
}
