// overlapfinder/render/src/histogram.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Counting the distinct colors of an image.

use crate::raster::LoadedImage;
use std::collections::BTreeMap;
use std::fmt::{self, Formatter};

/// The number of pixels of each distinct color in an image.
///
/// Colors are the raw channel bytes of a pixel and iterate in ascending byte order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorHistogram {
    counts: BTreeMap<Vec<u8>, usize>,
}

impl ColorHistogram {
    /// Counts every pixel of `image`.
    pub fn from_image(image: &LoadedImage) -> ColorHistogram {
        let mut histogram = ColorHistogram::default();
        for pixel in image.pixels() {
            histogram.add_pixel(pixel);
        }
        histogram
    }

    /// Counts one more pixel of the given color.
    pub fn add_pixel(&mut self, color: &[u8]) {
        if let Some(count) = self.counts.get_mut(color) {
            *count += 1;
            return;
        }
        self.counts.insert(color.to_vec(), 1);
    }

    /// The number of distinct colors.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns true if no pixels were counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The number of pixels of the given color.
    #[inline]
    pub fn count(&self, color: &[u8]) -> usize {
        self.counts.get(color).cloned().unwrap_or(0)
    }

    /// The total number of pixels counted.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterates over each distinct color and its pixel count.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], usize)> + '_ {
        self.counts.iter().map(|(color, &count)| (&color[..], count))
    }
}

/// Writes a color as a tuple of channel values, or a bare value if there is one channel.
pub(crate) fn write_color(formatter: &mut Formatter, color: &[u8]) -> fmt::Result {
    if color.len() == 1 {
        return write!(formatter, "{}", color[0]);
    }
    formatter.write_str("(")?;
    for (index, channel) in color.iter().enumerate() {
        if index > 0 {
            formatter.write_str(", ")?;
        }
        write!(formatter, "{}", channel)?;
    }
    formatter.write_str(")")
}

#[cfg(test)]
mod test {
    use super::ColorHistogram;
    use crate::raster::LoadedImage;

    #[test]
    fn test_counts_distinct_colors() {
        let data = vec![
            0, 0, 0, 255,
            0, 0, 0, 0,
            0, 0, 0, 255,
            0, 0, 0, 255,
        ];
        let image = LoadedImage::new("RGBA", 2, 2, 4, data);
        let histogram = ColorHistogram::from_image(&image);
        assert_eq!(histogram.len(), 2);
        assert_eq!(histogram.count(&[0, 0, 0, 255]), 3);
        assert_eq!(histogram.count(&[0, 0, 0, 0]), 1);
        assert_eq!(histogram.count(&[255, 255, 255, 255]), 0);
        assert_eq!(histogram.total(), 4);

        let colors: Vec<_> = histogram.iter().map(|(color, _)| color.to_vec()).collect();
        assert_eq!(colors, vec![vec![0, 0, 0, 0], vec![0, 0, 0, 255]]);
    }

    #[test]
    fn test_equal_images_have_equal_histograms() {
        let a = LoadedImage::new("L", 3, 1, 1, vec![0, 255, 0]);
        let b = LoadedImage::new("L", 1, 3, 1, vec![255, 0, 0]);
        assert_eq!(ColorHistogram::from_image(&a), ColorHistogram::from_image(&b));

        let c = LoadedImage::new("L", 3, 1, 1, vec![255, 255, 0]);
        assert_ne!(ColorHistogram::from_image(&a), ColorHistogram::from_image(&c));
    }
}
