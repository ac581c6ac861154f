// overlapfinder/utils/glif-overlap/src/main.rs
//
// Copyright © 2026 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Renders each `.glif` file given on the command line under both fill rules and prints the
//! colors of each rendering. Differing colors mean the outline overlaps itself.

#[macro_use]
extern crate log;

use clap::{App, Arg};
use overlapfinder_render::{OverlapChecker, RenderOptions};
use std::path::Path;
use std::process;

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let app = App::new("glif-overlap")
        .version("0.1")
        .author("The Pathfinder Project Developers")
        .about("Detects self-overlapping UFO glyph outlines by rendering them with both fill rules")
        .arg(Arg::with_name("GLIF-PATH").help("The `.glif` files to check")
                                        .required(true)
                                        .multiple(true)
                                        .index(1));
    let matches = app.get_matches();

    let checker = OverlapChecker::with_resvg(RenderOptions::default());

    let mut failures = 0;
    for glif_path in matches.values_of_os("GLIF-PATH").into_iter().flatten() {
        let glif_path = Path::new(glif_path);
        match checker.check_glif(glif_path) {
            Ok(report) => {
                print!("{}", report);
                if report.histograms_differ() {
                    info!("{}: renderings differ between fill rules", glif_path.display());
                }
            }
            Err(err) => {
                error!("{}: {}", glif_path.display(), err);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        process::exit(1)
    }
}
