// overlapfinder/svg/src/lib.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Assembles compiled glyph paths into SVG documents.
//!
//! Each outline is written twice, once per fill rule. The two documents are identical except for
//! the `fill-rule` attribute of their single `path` element.

#[macro_use]
extern crate log;

use overlapfinder_content::{FillRule, Outline, PathCommand};
use pathfinder_geometry::rect::RectF;
use pathfinder_geometry::vector::{vec2f, Vector2F};
use std::fmt::{self, Display, Formatter, Write};
use thiserror::Error;

/// How much larger than the outline bounds the view box is.
///
/// This multiplies the corners of the bounds, not the size, so the box also shifts when its
/// minimum coordinates are negative.
pub const VIEW_BOX_SCALE: f32 = 1.1;

/// Errors that can occur when assembling documents.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum AssembleError {
    /// The outline has no points, so there is nothing to frame.
    #[error("outline has no points")]
    EmptyOutline,
    /// The path data couldn't be written.
    #[error("failed to write path data")]
    Format(#[from] fmt::Error),
}

/// The `viewBox` of a document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBox {
    /// The upper-left corner.
    pub origin: Vector2F,
    /// The width and height.
    pub size: Vector2F,
}

impl ViewBox {
    /// Scales the corners of `bounds` by `VIEW_BOX_SCALE`.
    pub fn from_bounds(bounds: RectF) -> ViewBox {
        let min = vec2f(bounds.min_x() * VIEW_BOX_SCALE, bounds.min_y() * VIEW_BOX_SCALE);
        let max = vec2f(bounds.max_x() * VIEW_BOX_SCALE, bounds.max_y() * VIEW_BOX_SCALE);
        ViewBox { origin: min, size: vec2f(max.x() - min.x(), max.y() - min.y()) }
    }

    /// Frames every point of `outline`. Returns `None` if the outline has no points.
    #[inline]
    pub fn from_outline(outline: &Outline) -> Option<ViewBox> {
        outline.bounds().map(ViewBox::from_bounds)
    }
}

impl Display for ViewBox {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter,
               "{} {} {} {}",
               coord(self.origin.x()),
               coord(self.origin.y()),
               coord(self.size.x()),
               coord(self.size.y()))
    }
}

/// A complete SVG document for one fill rule.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgDocument {
    /// The fill rule the path is declared with.
    pub fill_rule: FillRule,
    text: String,
}

impl SvgDocument {
    /// Creates the document for a path with the given data.
    pub fn new(view_box: ViewBox, fill_rule: FillRule, path_data: &str) -> SvgDocument {
        let text = format!(
            "<svg viewBox=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n  \
             <path fill-rule=\"{}\" d=\"{}\"/>\n</svg>",
            view_box,
            fill_rule.svg_name(),
            path_data);
        SvgDocument { fill_rule, text }
    }

    /// The document text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Display for SvgDocument {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str(&self.text)
    }
}

/// Writes a textual representation of `commands` to `output` in SVG path data form.
pub fn to_svg_description<'a, W, I>(output: &mut W, commands: I) -> fmt::Result
                                    where W: Write, I: IntoIterator<Item = &'a PathCommand> {
    for (index, command) in commands.into_iter().enumerate() {
        if index > 0 {
            output.write_char(' ')?;
        }
        match *command {
            PathCommand::MoveTo(to) => write!(output, "M{},{}", coord(to.x()), coord(to.y()))?,
            PathCommand::LineTo(to) => write!(output, "L{},{}", coord(to.x()), coord(to.y()))?,
            PathCommand::QuadTo(ctrl, to) => {
                write!(output,
                       "Q{},{} {},{}",
                       coord(ctrl.x()),
                       coord(ctrl.y()),
                       coord(to.x()),
                       coord(to.y()))?
            }
        }
    }
    Ok(())
}

/// Builds one document per fill rule, in the order of `FillRule::ALL`.
pub fn assemble(outline: &Outline, commands: &[PathCommand])
                -> Result<Vec<SvgDocument>, AssembleError> {
    let view_box = ViewBox::from_outline(outline).ok_or(AssembleError::EmptyOutline)?;

    let mut path_data = String::new();
    to_svg_description(&mut path_data, commands)?;
    debug!("view box {} with {} bytes of path data", view_box, path_data.len());

    Ok(FillRule::ALL.iter().map(|&fill_rule| {
        SvgDocument::new(view_box, fill_rule, &path_data)
    }).collect())
}

// Flipping the Y axis produces negative zeroes, which would print as "-0".
#[inline]
fn coord(value: f32) -> f32 {
    value + 0.0
}

#[cfg(test)]
mod test {
    use super::{assemble, to_svg_description, AssembleError, ViewBox, VIEW_BOX_SCALE};
    use overlapfinder_content::outline::{Contour, Outline, Point, PointKind};
    use overlapfinder_content::{compile, FillRule, PathCommand};
    use pathfinder_geometry::vector::vec2f;
    use std::fmt::{self, Write};

    fn square() -> Outline {
        let points = vec![
            Point::from_font_units(0.0, 0.0, PointKind::Line),
            Point::from_font_units(100.0, 0.0, PointKind::Line),
            Point::from_font_units(100.0, 100.0, PointKind::Line),
            Point::from_font_units(0.0, 100.0, PointKind::Line),
        ];
        vec![Contour::new(0, points).unwrap()].into_iter().collect()
    }

    #[test]
    fn test_path_data() {
        let commands = [
            PathCommand::MoveTo(vec2f(0.0, -0.0)),
            PathCommand::LineTo(vec2f(10.0, -20.0)),
            PathCommand::QuadTo(vec2f(12.5, -30.0), vec2f(15.0, -20.0)),
        ];
        let mut data = String::new();
        to_svg_description(&mut data, &commands).unwrap();
        assert_eq!(data, "M0,0 L10,-20 Q12.5,-30 15,-20");
    }

    #[test]
    fn test_view_box_scales_corners() {
        let outline = square();
        let view_box = ViewBox::from_outline(&outline).unwrap();
        let (min_y, max_y) = (-100.0 * VIEW_BOX_SCALE, 0.0 * VIEW_BOX_SCALE);
        assert_eq!(view_box.origin, vec2f(0.0, min_y));
        assert_eq!(view_box.size, vec2f(100.0 * VIEW_BOX_SCALE - 0.0, max_y - min_y));
    }

    #[test]
    fn test_view_box_shifts_with_negative_minimum() {
        let points = vec![
            Point::from_font_units(-50.0, 0.0, PointKind::Line),
            Point::from_font_units(50.0, 0.0, PointKind::Line),
            Point::from_font_units(50.0, -20.0, PointKind::Line),
        ];
        let outline: Outline = vec![Contour::new(0, points).unwrap()].into_iter().collect();
        let view_box = ViewBox::from_outline(&outline).unwrap();
        assert_eq!(view_box.origin.x(), -50.0 * VIEW_BOX_SCALE);
        assert!(view_box.origin.x() < -50.0);
        assert_eq!(view_box.size.x(), 50.0 * VIEW_BOX_SCALE - -50.0 * VIEW_BOX_SCALE);
    }

    #[test]
    fn test_documents_differ_only_in_fill_rule() {
        let outline = square();
        let commands = compile(&outline).unwrap();
        let documents = assemble(&outline, &commands).unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].fill_rule, FillRule::EvenOdd);
        assert_eq!(documents[1].fill_rule, FillRule::NonZero);
        assert!(documents[0].as_str().contains("fill-rule=\"evenodd\""));
        assert!(documents[0].as_str().contains("d=\"M0,0 L100,0 L100,-100 L0,-100\""));
        assert!(documents[0].as_str().starts_with("<svg viewBox=\""));
        assert_eq!(documents[0].as_str().replace("evenodd", "nonzero"), documents[1].as_str());
    }

    #[test]
    fn test_empty_outline_has_no_view_box() {
        assert_eq!(assemble(&Outline::new(), &[]), Err(AssembleError::EmptyOutline));
    }

    struct FullWriter(usize);

    impl Write for FullWriter {
        fn write_str(&mut self, text: &str) -> fmt::Result {
            if text.len() > self.0 {
                return Err(fmt::Error);
            }
            self.0 -= text.len();
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let commands = compile(&square()).unwrap();
        assert_eq!(to_svg_description(&mut FullWriter(4), &commands), Err(fmt::Error));
        assert_eq!(AssembleError::from(fmt::Error), AssembleError::Format(fmt::Error));
    }
}
