// overlapfinder/render/src/check.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Drives a glyph through compilation, assembly, rasterization, and color counting.

use crate::error::RenderError;
use crate::histogram::{self, ColorHistogram};
use crate::raster::{ImageLoader, PngLoader};
use crate::rasterizer::{Rasterizer, ResvgRasterizer};
use overlapfinder_content::{compile, FillRule, Outline};
use overlapfinder_glif::load_glif;
use overlapfinder_svg::{assemble, SvgDocument};
use std::env;
use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

/// Where rendering artifacts go.
///
/// The defaults put every glyph's artifacts at the same well-known paths in the system temporary
/// directory, so two checks running at once will clobber each other.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// The directory documents and images are written to.
    pub output_dir: PathBuf,
    /// The file name prefix. Documents are named `{file_stem}.{fill rule}.svg`.
    pub file_stem: String,
}

impl Default for RenderOptions {
    fn default() -> RenderOptions {
        RenderOptions { output_dir: env::temp_dir(), file_stem: "overlap".to_owned() }
    }
}

impl RenderOptions {
    /// The path the document for `fill_rule` is written to.
    pub fn svg_path(&self, fill_rule: FillRule) -> PathBuf {
        self.output_dir.join(format!("{}.{}.svg", self.file_stem, fill_rule.svg_name()))
    }
}

/// The outcome of rendering a glyph under one fill rule.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderResult {
    /// The fill rule the glyph was rendered with.
    pub fill_rule: FillRule,
    /// The rendered image.
    pub image_path: PathBuf,
    /// The channel layout of the rendered image.
    pub mode: String,
    /// The colors of the rendered image.
    pub histogram: ColorHistogram,
}

/// The renderings of one glyph, one per fill rule in the order of `FillRule::ALL`.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphReport {
    /// The glyph name, if known.
    pub glyph: Option<String>,
    /// The renderings.
    pub renders: Vec<RenderResult>,
}

impl GlyphReport {
    /// Returns the rendering for `fill_rule`, if there is one.
    pub fn render(&self, fill_rule: FillRule) -> Option<&RenderResult> {
        self.renders.iter().find(|render| render.fill_rule == fill_rule)
    }

    /// Returns true if the renderings don't all have the same colors.
    ///
    /// This usually means the outline overlaps itself.
    pub fn histograms_differ(&self) -> bool {
        self.renders.windows(2).any(|pair| pair[0].histogram != pair[1].histogram)
    }
}

impl Display for GlyphReport {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        for render in &self.renders {
            writeln!(formatter, "{} {}", render.image_path.display(), render.mode)?;
            for (color, count) in render.histogram.iter() {
                write!(formatter, "   ({}, ", count)?;
                histogram::write_color(formatter, color)?;
                writeln!(formatter, ")")?;
            }
        }
        Ok(())
    }
}

/// Renders glyphs under every fill rule.
pub struct OverlapChecker<R, L> where R: Rasterizer, L: ImageLoader {
    rasterizer: R,
    loader: L,
    options: RenderOptions,
}

impl OverlapChecker<ResvgRasterizer, PngLoader> {
    /// Creates a checker that runs `resvg` and decodes its output with the `image` crate.
    #[inline]
    pub fn with_resvg(options: RenderOptions) -> OverlapChecker<ResvgRasterizer, PngLoader> {
        OverlapChecker::new(ResvgRasterizer::default(), PngLoader, options)
    }
}

impl<R, L> OverlapChecker<R, L> where R: Rasterizer, L: ImageLoader {
    /// Creates a checker with the given collaborators.
    #[inline]
    pub fn new(rasterizer: R, loader: L, options: RenderOptions) -> OverlapChecker<R, L> {
        OverlapChecker { rasterizer, loader, options }
    }

    /// The options artifacts are written with.
    #[inline]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Reads the `.glif` file at `path` and checks its outline.
    pub fn check_glif(&self, path: &Path) -> Result<GlyphReport, RenderError> {
        info!("checking {}", path.display());
        let outline = load_glif(path)?;
        self.check_outline(&outline)
    }

    /// Renders `outline` under every fill rule.
    pub fn check_outline(&self, outline: &Outline) -> Result<GlyphReport, RenderError> {
        let commands = compile(outline)?;
        let documents = assemble(outline, &commands)?;

        let renders = documents.iter()
                               .map(|document| self.render_document(document))
                               .collect::<Result<Vec<_>, _>>()?;

        Ok(GlyphReport { glyph: outline.name.clone(), renders })
    }

    fn render_document(&self, document: &SvgDocument) -> Result<RenderResult, RenderError> {
        let svg_path = self.options.svg_path(document.fill_rule);
        fs::write(&svg_path, document.as_str()).map_err(|source| {
            RenderError::Io { path: svg_path.clone(), source }
        })?;

        let image_path = self.rasterizer.rasterize(&svg_path)?;
        let image = self.loader.load(&image_path)?;
        let histogram = ColorHistogram::from_image(&image);
        info!("{}: {}x{} {}, {} distinct color(s)",
              image_path.display(),
              image.width,
              image.height,
              image.mode,
              histogram.len());

        Ok(RenderResult {
            fill_rule: document.fill_rule,
            image_path,
            mode: image.mode,
            histogram,
        })
    }
}

#[cfg(test)]
mod test {
    use super::{GlyphReport, OverlapChecker, RenderOptions, RenderResult};
    use crate::error::RenderError;
    use crate::histogram::ColorHistogram;
    use crate::raster::{ImageLoader, LoadedImage};
    use crate::rasterizer::Rasterizer;
    use overlapfinder_content::outline::{Contour, Outline, Point, PointKind};
    use overlapfinder_content::{CompileError, FillRule};
    use std::cell::RefCell;
    use std::env;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::process;

    // Records the documents it's given and pretends to have rendered them.
    #[derive(Default)]
    struct RecordingRasterizer {
        documents: RefCell<Vec<String>>,
    }

    impl Rasterizer for RecordingRasterizer {
        fn rasterize(&self, svg_path: &Path) -> Result<PathBuf, RenderError> {
            let text = fs::read_to_string(svg_path).unwrap();
            self.documents.borrow_mut().push(text);
            Ok(svg_path.with_extension("png"))
        }
    }

    struct FailingRasterizer;

    impl Rasterizer for FailingRasterizer {
        fn rasterize(&self, svg_path: &Path) -> Result<PathBuf, RenderError> {
            Err(RenderError::RasterizerInvocationFailed {
                program: "fake".to_owned(),
                svg_path: svg_path.to_owned(),
                reason: "exit status: 1".to_owned(),
            })
        }
    }

    // Every nonzero image gets an extra black pixel.
    struct FakeLoader;

    impl ImageLoader for FakeLoader {
        fn load(&self, path: &Path) -> Result<LoadedImage, RenderError> {
            let mut data = vec![255, 255, 255, 255];
            if path.to_string_lossy().contains("nonzero") {
                data[1] = 0;
            }
            Ok(LoadedImage::new("L", 2, 2, 1, data))
        }
    }

    fn options(tag: &str) -> RenderOptions {
        let output_dir = env::temp_dir().join(format!("overlapfinder_check_{}_{}",
                                                      tag,
                                                      process::id()));
        fs::create_dir_all(&output_dir).unwrap();
        RenderOptions { output_dir, file_stem: "glyph".to_owned() }
    }

    fn triangle() -> Outline {
        let points = vec![
            Point::from_font_units(0.0, 0.0, PointKind::Line),
            Point::from_font_units(100.0, 0.0, PointKind::Line),
            Point::from_font_units(50.0, 100.0, PointKind::Line),
        ];
        let mut outline = Outline::from_contours(Some("triangle".to_owned()), vec![]);
        outline.push_contour(Contour::new(0, points).unwrap());
        outline
    }

    #[test]
    fn test_renders_each_fill_rule() {
        let options = options("each");
        let checker = OverlapChecker::new(RecordingRasterizer::default(), FakeLoader, options);
        let report = checker.check_outline(&triangle()).unwrap();

        assert_eq!(report.glyph.as_ref().map(|name| &name[..]), Some("triangle"));
        assert_eq!(report.renders.len(), 2);
        assert_eq!(report.renders[0].fill_rule, FillRule::EvenOdd);
        assert_eq!(report.renders[1].fill_rule, FillRule::NonZero);
        assert!(report.renders[0].image_path.ends_with("glyph.evenodd.png"));
        assert!(report.histograms_differ());

        let documents = checker.rasterizer.documents.borrow();
        assert_eq!(documents.len(), 2);
        assert!(documents[0].contains("fill-rule=\"evenodd\""));
        assert!(documents[1].contains("fill-rule=\"nonzero\""));

        fs::remove_dir_all(&checker.options().output_dir).unwrap();
    }

    #[test]
    fn test_rasterizer_failure_aborts() {
        let options = options("failing");
        let output_dir = options.output_dir.clone();
        let checker = OverlapChecker::new(FailingRasterizer, FakeLoader, options);
        match checker.check_outline(&triangle()) {
            Err(RenderError::RasterizerInvocationFailed { ref svg_path, .. }) => {
                assert!(svg_path.ends_with("glyph.evenodd.svg"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        fs::remove_dir_all(&output_dir).unwrap();
    }

    #[test]
    fn test_compile_errors_surface() {
        let points = vec![
            Point::from_font_units(0.0, 0.0, PointKind::QCurve),
            Point::from_font_units(50.0, 50.0, PointKind::OffCurve),
            Point::from_font_units(100.0, 0.0, PointKind::Line),
        ];
        let outline: Outline = vec![Contour::new(0, points).unwrap()].into_iter().collect();
        let checker = OverlapChecker::new(FailingRasterizer, FakeLoader, RenderOptions::default());
        match checker.check_outline(&outline) {
            Err(RenderError::Compile(CompileError::UnterminatedCurve { pending: 1 })) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_report_format() {
        let mut histogram = ColorHistogram::default();
        histogram.add_pixel(&[0, 0, 0, 255]);
        histogram.add_pixel(&[0, 0, 0, 0]);
        histogram.add_pixel(&[0, 0, 0, 0]);
        let report = GlyphReport {
            glyph: None,
            renders: vec![RenderResult {
                fill_rule: FillRule::EvenOdd,
                image_path: PathBuf::from("/tmp/overlap.evenodd.png"),
                mode: "RGBA".to_owned(),
                histogram,
            }],
        };
        assert_eq!(report.to_string(),
                   "/tmp/overlap.evenodd.png RGBA\n   (2, (0, 0, 0, 0))\n   (1, (0, 0, 0, 255))\n");
        assert!(!report.histograms_differ());
    }
}
