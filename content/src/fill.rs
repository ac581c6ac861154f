// overlapfinder/content/src/fill.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The fill rule, which determines how self-intersecting paths are filled.

use std::fmt::{self, Display, Formatter};

/// The fill rule, which determines how self-intersecting paths are filled.
///
/// Outlines that don't overlap themselves render identically under both rules. That is the whole
/// trick behind overlap detection.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FillRule {
    /// The even-odd rule: <https://en.wikipedia.org/wiki/Even%E2%80%93odd_rule>
    EvenOdd,
    /// The nonzero rule: <https://en.wikipedia.org/wiki/Nonzero-rule>
    NonZero,
}

impl FillRule {
    /// Every fill rule, in the order renderings are produced.
    pub const ALL: [FillRule; 2] = [FillRule::EvenOdd, FillRule::NonZero];

    /// The value of the SVG `fill-rule` attribute for this rule.
    #[inline]
    pub fn svg_name(self) -> &'static str {
        match self {
            FillRule::EvenOdd => "evenodd",
            FillRule::NonZero => "nonzero",
        }
    }
}

impl Display for FillRule {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str(self.svg_name())
    }
}
