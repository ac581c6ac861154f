// overlapfinder/render/src/raster.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decoded raster images.

use crate::error::RenderError;
use image::{ColorType, DynamicImage, GenericImageView};
use std::path::Path;

/// A decoded image, with its pixels kept in their native channel layout.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadedImage {
    /// A short name for the channel layout, such as `RGBA` or `L`.
    pub mode: String,
    /// The width in pixels.
    pub width: u32,
    /// The height in pixels.
    pub height: u32,
    bytes_per_pixel: usize,
    data: Vec<u8>,
}

impl LoadedImage {
    /// Wraps raw pixel data, `bytes_per_pixel` bytes per pixel in row-major order.
    pub fn new(mode: &str, width: u32, height: u32, bytes_per_pixel: usize, data: Vec<u8>)
               -> LoadedImage {
        debug_assert!(bytes_per_pixel > 0);
        debug_assert_eq!(data.len(), width as usize * height as usize * bytes_per_pixel);
        LoadedImage { mode: mode.to_owned(), width, height, bytes_per_pixel, data }
    }

    /// Converts a decoded image, keeping its channels but narrowing them to 8 bits.
    pub fn from_dynamic_image(image: &DynamicImage) -> LoadedImage {
        let narrowed;
        let image = match image.color() {
            ColorType::L16 => {
                narrowed = DynamicImage::ImageLuma8(image.to_luma8());
                &narrowed
            }
            ColorType::La16 => {
                narrowed = DynamicImage::ImageLumaA8(image.to_luma_alpha8());
                &narrowed
            }
            ColorType::Rgb16 => {
                narrowed = DynamicImage::ImageRgb8(image.to_rgb8());
                &narrowed
            }
            ColorType::Rgba16 => {
                narrowed = DynamicImage::ImageRgba8(image.to_rgba8());
                &narrowed
            }
            _ => image,
        };

        let color = image.color();
        let (width, height) = image.dimensions();
        LoadedImage::new(&mode_name(color),
                         width,
                         height,
                         color.bytes_per_pixel() as usize,
                         image.as_bytes().to_vec())
    }

    /// Iterates over the raw bytes of each pixel.
    #[inline]
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.data.chunks(self.bytes_per_pixel)
    }
}

/// Something that can decode the images a `Rasterizer` produces.
pub trait ImageLoader {
    /// Loads and decodes the image at `path`.
    fn load(&self, path: &Path) -> Result<LoadedImage, RenderError>;
}

/// Decodes images with the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngLoader;

impl ImageLoader for PngLoader {
    fn load(&self, path: &Path) -> Result<LoadedImage, RenderError> {
        let image = image::open(path).map_err(|source| {
            RenderError::Image { path: path.to_owned(), source }
        })?;
        Ok(LoadedImage::from_dynamic_image(&image))
    }
}

// Names follow the usual image library mode names.
fn mode_name(color: ColorType) -> String {
    match color {
        ColorType::L8 => "L".to_owned(),
        ColorType::La8 => "LA".to_owned(),
        ColorType::Rgb8 => "RGB".to_owned(),
        ColorType::Rgba8 => "RGBA".to_owned(),
        other => format!("{:?}", other),
    }
}
