// overlapfinder/content/src/outline.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! An in-memory representation of a glyph outline, as read from a source file.

use crate::error::CompileError;
use pathfinder_geometry::rect::RectF;
use pathfinder_geometry::vector::{vec2f, Vector2F};
use std::iter;

/// A glyph outline. Outlines consist of *contours*, each of which is a closed loop.
///
/// The names "outline" and "contour" come from the TrueType specification. They were chosen to
/// avoid conflicting with the Rust use of "path" for filesystem paths.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
    /// The glyph name, if the source file declared one.
    pub name: Option<String>,
    contours: Vec<Contour>,
}

/// A single closed loop of points.
///
/// The first point is always on-curve; `Contour::new()` enforces this.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    points: Vec<Point>,
}

/// A point of a contour, in rendering coordinates (Y pointing down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// The position of the point.
    pub position: Vector2F,
    /// The role this point plays in the curve.
    pub kind: PointKind,
}

/// The role of a point, taken from the `type` attribute of the source point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointKind {
    /// An on-curve point ending a straight line.
    Line,
    /// An on-curve point ending a run of quadratic control points (possibly an empty one).
    QCurve,
    /// An explicitly typed off-curve control point.
    OffCurve,
    /// A point without a declared type. Its role is that of an off-curve control point.
    Unspecified,
}

impl PointKind {
    /// Returns true if the curve passes through points of this kind.
    #[inline]
    pub fn is_on_curve(self) -> bool {
        match self {
            PointKind::Line | PointKind::QCurve => true,
            PointKind::OffCurve | PointKind::Unspecified => false,
        }
    }
}

impl Point {
    /// Creates a new point at the given rendering-space position.
    #[inline]
    pub fn new(position: Vector2F, kind: PointKind) -> Point {
        Point { position, kind }
    }

    /// Creates a point from source-file coordinates, flipping the Y axis.
    ///
    /// Font sources have Y pointing up; SVG has Y pointing down.
    #[inline]
    pub fn from_font_units(x: f32, y: f32, kind: PointKind) -> Point {
        Point::new(vec2f(x, -y), kind)
    }

    /// Returns the implied on-curve point halfway between this point and `other`.
    #[inline]
    pub fn midpoint(&self, other: &Point) -> Point {
        let (a, b) = (self.position, other.position);
        Point::new(vec2f((a.x() + b.x()) / 2.0, (a.y() + b.y()) / 2.0), PointKind::QCurve)
    }

    /// Returns true if the curve passes through this point.
    #[inline]
    pub fn is_on_curve(&self) -> bool {
        self.kind.is_on_curve()
    }
}

impl Contour {
    /// Creates a contour from its points.
    ///
    /// `index` is the position of this contour within its outline and is only used for error
    /// reporting. The first point must be on-curve: contours starting with a control point would
    /// need to be rotated, which isn't supported.
    pub fn new(index: usize, points: Vec<Point>) -> Result<Contour, CompileError> {
        match points.first() {
            None => Err(CompileError::EmptyContour { contour: index }),
            Some(first) if !first.is_on_curve() => {
                Err(CompileError::UnsupportedStartPoint { contour: index })
            }
            Some(_) => Ok(Contour { points }),
        }
    }

    /// The points of this contour, as read.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The number of points in this contour, as read.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; contours have at least one point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The first point, which is always on-curve.
    #[inline]
    pub fn first_point(&self) -> Point {
        self.points[0]
    }

    /// Iterates over the points with the loop closed explicitly.
    ///
    /// If the contour ends in control points, a copy of the first point is appended so that the
    /// final curve ends at the start of the contour like any other curve would.
    pub fn closed_points(&self) -> impl Iterator<Item = Point> + '_ {
        let closing = match self.points.last() {
            Some(last) if !last.is_on_curve() => Some(self.first_point()),
            _ => None,
        };
        self.points.iter().cloned().chain(closing)
    }
}

impl Outline {
    /// Creates a new empty outline with no contours.
    #[inline]
    pub fn new() -> Outline {
        Outline::default()
    }

    /// Creates an outline from a list of contours.
    #[inline]
    pub fn from_contours(name: Option<String>, contours: Vec<Contour>) -> Outline {
        Outline { name, contours }
    }

    /// Adds a contour to the end of this outline.
    #[inline]
    pub fn push_contour(&mut self, contour: Contour) {
        self.contours.push(contour);
    }

    /// The contours of this outline.
    #[inline]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    /// Iterates over every point of every contour, in order.
    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.contours.iter().flat_map(|contour| contour.points.iter())
    }

    /// Returns true if this outline has no contours.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// The tight bounding box around every point, control points included.
    ///
    /// Returns `None` if there are no points.
    pub fn bounds(&self) -> Option<RectF> {
        let mut points = self.points().map(|point| point.position);
        let first = points.next()?;
        Some(points.fold(RectF::from_points(first, first), |bounds, point| {
            bounds.union_point(point)
        }))
    }
}

impl iter::FromIterator<Contour> for Outline {
    fn from_iter<I>(iter: I) -> Outline where I: IntoIterator<Item = Contour> {
        Outline::from_contours(None, iter.into_iter().collect())
    }
}
