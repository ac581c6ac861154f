// overlapfinder/render/src/rasterizer.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Turning SVG documents on disk into raster images on disk.

use crate::error::RenderError;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Something that can rasterize an SVG document.
pub trait Rasterizer {
    /// Rasterizes the document at `svg_path` and returns the path of the image it produced.
    ///
    /// This blocks until the image has been written.
    fn rasterize(&self, svg_path: &Path) -> Result<PathBuf, RenderError>;
}

/// Runs the `resvg` command-line tool as `resvg <input.svg> <output.png>`.
///
/// The image is written next to the document, with the extension replaced by `png`.
#[derive(Clone, Debug)]
pub struct ResvgRasterizer {
    /// The program to run. Looked up in `PATH` unless it contains a directory.
    pub program: PathBuf,
}

impl ResvgRasterizer {
    /// Uses `program` instead of `resvg`. It must accept the same arguments.
    #[inline]
    pub fn new<P>(program: P) -> ResvgRasterizer where P: Into<PathBuf> {
        ResvgRasterizer { program: program.into() }
    }

    fn invocation_failed(&self, svg_path: &Path, reason: String) -> RenderError {
        RenderError::RasterizerInvocationFailed {
            program: self.program.display().to_string(),
            svg_path: svg_path.to_owned(),
            reason,
        }
    }
}

impl Default for ResvgRasterizer {
    #[inline]
    fn default() -> ResvgRasterizer {
        ResvgRasterizer::new("resvg")
    }
}

impl Rasterizer for ResvgRasterizer {
    fn rasterize(&self, svg_path: &Path) -> Result<PathBuf, RenderError> {
        let png_path = svg_path.with_extension("png");
        debug!("running {} {} {}",
               self.program.display(),
               svg_path.display(),
               png_path.display());

        let status = Command::new(&self.program)
            .arg(svg_path)
            .arg(&png_path)
            .status()
            .map_err(|err| self.invocation_failed(svg_path, err.to_string()))?;
        if !status.success() {
            return Err(self.invocation_failed(svg_path, status.to_string()));
        }

        Ok(png_path)
    }
}
