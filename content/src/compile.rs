// overlapfinder/content/src/compile.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Compiles glyph outlines into path commands.
//!
//! Glyph sources store quadratic splines the TrueType way: two consecutive off-curve points imply
//! an on-curve point halfway between them. The compiler makes those implied points explicit so
//! that every curve becomes a single `QuadTo`. Implied points are only synthesized between the
//! first and second off-curve point of each pair in a run, so runs of more than two control points
//! are reported as malformed rather than guessed at.

use crate::error::CompileError;
use crate::outline::{Contour, Outline, Point, PointKind};
use crate::segment::PathCommand;
use std::mem;

/// Compiles every contour of `outline` into a single list of path commands.
pub fn compile(outline: &Outline) -> Result<Vec<PathCommand>, CompileError> {
    let mut compiler = PathCompiler::new();
    for contour in outline.contours() {
        compiler.push_contour(contour)?;
    }
    let commands = compiler.finish()?;
    debug!("compiled {} contour(s) into {} path command(s)",
           outline.contours().len(),
           commands.len());
    Ok(commands)
}

/// Turns a stream of contour points into path commands.
///
/// The only state carried between points is the run of off-curve points seen since the last
/// on-curve point. Every emission that consumes the run resets it, and the run must be empty
/// whenever a contour ends.
#[derive(Debug, Default)]
pub struct PathCompiler {
    commands: Vec<PathCommand>,
    off_curve_points: Vec<Point>,
}

impl PathCompiler {
    /// Creates a compiler with no commands emitted.
    #[inline]
    pub fn new() -> PathCompiler {
        PathCompiler::default()
    }

    /// Compiles one closed contour.
    pub fn push_contour(&mut self, contour: &Contour) -> Result<(), CompileError> {
        let mut points = contour.closed_points();
        if let Some(first) = points.next() {
            self.start_contour(first)?;
        }
        for point in points {
            self.push_point(point)?;
        }
        self.end_contour()
    }

    /// Begins a new subpath at `point`.
    pub fn start_contour(&mut self, point: Point) -> Result<(), CompileError> {
        self.check_no_pending_points()?;
        self.commands.push(PathCommand::MoveTo(point.position));
        Ok(())
    }

    /// Feeds the next point of the current contour.
    pub fn push_point(&mut self, point: Point) -> Result<(), CompileError> {
        match point.kind {
            PointKind::Line => {
                // A line can't end a curve, so any control points before it are dangling.
                self.check_no_pending_points()?;
                self.commands.push(PathCommand::LineTo(point.position));
            }
            PointKind::QCurve if self.off_curve_points.is_empty() => {
                self.commands.push(PathCommand::LineTo(point.position));
            }
            PointKind::QCurve => {
                let run = mem::replace(&mut self.off_curve_points, vec![]);
                let sequence = interpolate_implied_points(&run, point);
                self.commands.extend(quadratic_commands(&sequence)?);
            }
            PointKind::OffCurve | PointKind::Unspecified => self.off_curve_points.push(point),
        }
        Ok(())
    }

    /// Ends the current contour. Fails if control points are still waiting for a terminator.
    #[inline]
    pub fn end_contour(&mut self) -> Result<(), CompileError> {
        self.check_no_pending_points()
    }

    /// Returns the compiled commands.
    pub fn finish(self) -> Result<Vec<PathCommand>, CompileError> {
        self.check_no_pending_points()?;
        Ok(self.commands)
    }

    fn check_no_pending_points(&self) -> Result<(), CompileError> {
        if self.off_curve_points.is_empty() {
            Ok(())
        } else {
            Err(CompileError::UnterminatedCurve { pending: self.off_curve_points.len() })
        }
    }
}

/// Expands a run of off-curve points and its terminator into an off/on sequence.
///
/// An implied on-curve point is placed before every odd-indexed off-curve point, at the midpoint
/// of it and its predecessor. A run of one or two points therefore alternates correctly; longer
/// runs don't, and are caught by `quadratic_commands`.
fn interpolate_implied_points(run: &[Point], terminator: Point) -> Vec<Point> {
    let mut sequence = Vec::with_capacity(run.len() * 2);
    for (index, point) in run.iter().enumerate() {
        if index % 2 == 1 {
            sequence.push(run[index - 1].midpoint(point));
        }
        sequence.push(*point);
    }
    sequence.push(terminator);
    sequence
}

/// Pairs an alternating off/on sequence into `QuadTo` commands.
///
/// The whole sequence is validated before anything is returned.
fn quadratic_commands(sequence: &[Point]) -> Result<Vec<PathCommand>, CompileError> {
    let malformed = CompileError::MalformedQuadSequence { len: sequence.len() };
    if sequence.len() % 2 != 0 {
        return Err(malformed);
    }

    sequence.chunks(2).map(|pair| {
        let (ctrl, to) = (pair[0], pair[1]);
        if ctrl.is_on_curve() || !to.is_on_curve() {
            return Err(malformed);
        }
        Ok(PathCommand::QuadTo(ctrl.position, to.position))
    }).collect()
}
