// overlapfinder/glif/src/lib.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reads glyph outlines from UFO `.glif` files.
//!
//! Only the outline is of interest: `glyph/outline/contour/point` elements, in document order.
//! Point Y coordinates are negated on the way in so that the outline is in SVG's top-down
//! coordinate space. Everything else in the file (advance, unicode, anchors, guidelines, lib) is
//! skipped.

#[macro_use]
extern crate log;

use overlapfinder_content::outline::{Contour, Outline, Point, PointKind};
use overlapfinder_content::CompileError;
use quick_xml::events::attributes::Attributes;
use quick_xml::events::Event as XmlEvent;
use quick_xml::Reader;
use std::fs;
use std::mem;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};
use std::io;
use thiserror::Error;

/// Errors that can occur when reading a `.glif` file.
#[derive(Debug, Error)]
pub enum GlifError {
    /// The file couldn't be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The file isn't well-formed XML.
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),
    /// The XML is well-formed but isn't shaped like a glyph.
    #[error("{0}")]
    InvalidStructure(&'static str),
    /// A required attribute is absent.
    #[error("'{0}' element is missing an '{1}' attribute")]
    MissingAttribute(&'static str, &'static str),
    /// A coordinate attribute isn't a finite number.
    #[error("attribute {attribute} has an invalid value {value:?}")]
    InvalidCoordinate {
        /// The attribute name.
        attribute: &'static str,
        /// The attribute value as written.
        value: String,
        /// Why the value couldn't be parsed, if it isn't a number at all.
        source: Option<ParseFloatError>,
    },
    /// A point has a `type` the format doesn't define.
    #[error("unknown point type {0:?}")]
    InvalidPointType(String),
    /// A point has a `type` that can't be checked: cubic curves and open contours.
    #[error("point type {0:?} is not supported; only closed quadratic contours can be checked")]
    UnsupportedPointType(String),
    /// A contour couldn't be built from its points.
    #[error(transparent)]
    Contour(#[from] CompileError),
}

/// Reads and parses the `.glif` file at `path`.
pub fn load_glif(path: &Path) -> Result<Outline, GlifError> {
    let text = fs::read_to_string(path).map_err(|source| {
        GlifError::Io { path: path.to_owned(), source }
    })?;
    let outline = read_glif(&text)?;
    debug!("read {} contour(s) from {}", outline.contours().len(), path.display());
    Ok(outline)
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Scope {
    Glyph,
    Outline,
    Contour,
    Point,
    Ignored,
}

/// Parses the text of a `.glif` file.
pub fn read_glif(text: &str) -> Result<Outline, GlifError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().expand_empty_elements = true;

    let mut outline = Outline::new();
    let mut scopes = vec![];
    let mut contour_points = vec![];
    let mut contour_count = 0;

    loop {
        match reader.read_event()? {
            XmlEvent::Start(element) => {
                let parent = scopes.last().cloned();
                let scope = match (parent, element.local_name().into_inner()) {
                    (None, b"glyph") => {
                        outline.name = read_glyph_name(element.attributes())?;
                        Scope::Glyph
                    }
                    (None, _) => {
                        return Err(GlifError::InvalidStructure("root element is not glyph"))
                    }
                    (Some(Scope::Glyph), b"outline") => Scope::Outline,
                    (Some(Scope::Outline), b"contour") => Scope::Contour,
                    (Some(Scope::Outline), b"component") => {
                        warn!("skipping component of glyph {:?}; only contours are checked",
                              outline.name);
                        Scope::Ignored
                    }
                    (Some(Scope::Contour), b"point") => {
                        contour_points.push(read_point(element.attributes())?);
                        Scope::Point
                    }
                    _ => Scope::Ignored,
                };
                scopes.push(scope);
            }
            XmlEvent::End(_) => {
                match scopes.pop() {
                    Some(Scope::Contour) => {
                        let points = mem::replace(&mut contour_points, vec![]);
                        outline.push_contour(Contour::new(contour_count, points)?);
                        contour_count += 1;
                    }
                    Some(Scope::Glyph) => return Ok(outline),
                    _ => {}
                }
            }
            XmlEvent::Eof => {
                return Err(GlifError::InvalidStructure("no glyph element found"))
            }
            // Empty elements arrive as start/end pairs since `expand_empty_elements` is set.
            XmlEvent::Empty(_) | XmlEvent::Text(_) | XmlEvent::CData(_) |
            XmlEvent::Comment(_) | XmlEvent::Decl(_) | XmlEvent::PI(_) | XmlEvent::DocType(_) => {}
        }
    }
}

fn read_glyph_name(attributes: Attributes) -> Result<Option<String>, GlifError> {
    for attribute in attributes {
        let attribute = attribute.map_err(quick_xml::Error::from)?;
        if attribute.key.into_inner() == b"name" {
            return Ok(Some(attribute.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn read_point(attributes: Attributes) -> Result<Point, GlifError> {
    let (mut x, mut y, mut kind) = (None, None, PointKind::Unspecified);
    for attribute in attributes {
        let attribute = attribute.map_err(quick_xml::Error::from)?;
        let value = attribute.unescape_value()?;
        match attribute.key.into_inner() {
            b"x" => x = Some(parse_coordinate("x", &value)?),
            b"y" => y = Some(parse_coordinate("y", &value)?),
            b"type" => kind = parse_point_type(&value)?,
            // `smooth`, `name` and `identifier` don't affect the geometry.
            _ => {}
        }
    }

    let x = x.ok_or(GlifError::MissingAttribute("point", "x"))?;
    let y = y.ok_or(GlifError::MissingAttribute("point", "y"))?;
    Ok(Point::from_font_units(x, y, kind))
}

fn parse_coordinate(attribute: &'static str, value: &str) -> Result<f32, GlifError> {
    let invalid = |source| {
        GlifError::InvalidCoordinate { attribute, value: value.to_owned(), source }
    };
    // `f32::from_str` accepts "nan" and "inf", and overflows to infinity.
    match value.trim().parse::<f32>() {
        Ok(coordinate) if coordinate.is_finite() => Ok(coordinate),
        Ok(_) => Err(invalid(None)),
        Err(source) => Err(invalid(Some(source))),
    }
}

fn parse_point_type(value: &str) -> Result<PointKind, GlifError> {
    match value {
        "line" => Ok(PointKind::Line),
        "qcurve" => Ok(PointKind::QCurve),
        "offcurve" => Ok(PointKind::OffCurve),
        "curve" | "move" => Err(GlifError::UnsupportedPointType(value.to_owned())),
        _ => Err(GlifError::InvalidPointType(value.to_owned())),
    }
}
