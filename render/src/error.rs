// overlapfinder/render/src/error.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors.

use overlapfinder_content::CompileError;
use overlapfinder_glif::GlifError;
use overlapfinder_svg::AssembleError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while checking a glyph. All of them abort the check of that glyph.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The glyph file couldn't be read.
    #[error(transparent)]
    Glif(#[from] GlifError),
    /// The outline couldn't be compiled to path commands.
    #[error(transparent)]
    Compile(#[from] CompileError),
    /// The SVG documents couldn't be assembled.
    #[error(transparent)]
    Assemble(#[from] AssembleError),
    /// A rendering artifact couldn't be written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// The artifact that was being written.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The external rasterizer couldn't be started or exited unsuccessfully.
    #[error("rasterizer `{program}` failed on {}: {reason}", svg_path.display())]
    RasterizerInvocationFailed {
        /// The rasterizer program.
        program: String,
        /// The document that was being rasterized.
        svg_path: PathBuf,
        /// The spawn error or exit status.
        reason: String,
    },
    /// The rendered image couldn't be decoded.
    #[error("failed to load {}: {source}", path.display())]
    Image {
        /// The image that was being loaded.
        path: PathBuf,
        /// The underlying decoding error.
        source: image::ImageError,
    },
}
