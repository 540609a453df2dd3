// Copyright (c) 2019 Georg Brandl.  Licensed under the Apache License,
// Version 2.0 <LICENSE-APACHE or http://www.apache.org/licenses/LICENSE-2.0>
// or the MIT license <LICENSE-MIT or http://opensource.org/licenses/MIT>, at
// your option. This file may not be copied, modified, or distributed except
// according to those terms.

use std::{fs, path::PathBuf};
use anyhow::Context;
use clap::Parser;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use gcode2rapid::convert::{ModuleNaming, Options, Translator, TranslationUnit};

#[derive(Parser, Debug)]
#[command(version, about = "Translate G-code files into one RAPID module")]
struct Cli {
    /// Input files; each becomes one procedure, in the given order
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Module name; if missing, it is taken from the first file's marker command
    #[arg(short, long)]
    module: Option<String>,
    /// Marker command holding the module name
    #[arg(long, default_value = ModuleNaming::DEFAULT_MARKER)]
    marker: String,
    /// Order the files by name before translating
    #[arg(long)]
    sort: bool,
    /// Directory to write `<module>.mod` into; prints to stdout if missing
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Speed data for all moves
    #[arg(long)]
    speed: Option<String>,
    /// Zone data for all moves
    #[arg(long)]
    zone: Option<String>,
    /// Tool data for all moves
    #[arg(long)]
    tool: Option<String>,
    /// Pressing force
    #[arg(long)]
    force: Option<f64>,
    /// More log output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Order by file name alone, regardless of the directory.
fn sort_by_name(files: &mut [PathBuf]) {
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;

    let mut files = args.files.clone();
    if args.sort {
        sort_by_name(&mut files);
    }
    let units = files.iter().map(|path| {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Reading {}", path.display()))?;
        let name = path.file_name().map_or_else(|| path.display().to_string(),
                                                |n| n.to_string_lossy().into_owned());
        Ok(TranslationUnit::new(name, source))
    }).collect::<anyhow::Result<Vec<_>>>()?;

    let mut options = Options::default();
    options.naming = match args.module {
        Some(name) => ModuleNaming::Given(name),
        None => ModuleNaming::FromSource { marker: args.marker },
    };
    if let Some(speed) = args.speed { options.motion.speed = speed; }
    if let Some(zone) = args.zone { options.motion.zone = zone; }
    if let Some(tool) = args.tool { options.motion.tool = tool; }
    if let Some(force) = args.force { options.motion.force = force; }

    let module = Translator::new(options).translate(&units)?;

    match args.output {
        Some(dir) => {
            let path = dir.join(module.file_name());
            fs::write(&path, &module.text)
                .with_context(|| format!("Writing {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{}", module.text),
    }
    Ok(())
}
