//! cpp2v Driver
//!
//! Command-line front door: loads a JSON dump of an elaborated translation
//! unit, translates it and writes the IR file and, optionally, the collected
//! specifications. Output files are only written once the whole unit has
//! translated.

use clap::{ArgAction, Parser};
use cpp2v_frontend::{
    AcceptAll, AnnotationCollector, Filter, Frontend, LocationFilter, QualifiedNameResolver,
};
use cpp2v_lower::{translate_unit, TranslationOptions};
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "cpp2v")]
#[command(about = "Translate elaborated C++ declarations into IR terms")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// JSON dump of the elaborated translation unit
    pub input: PathBuf,

    /// Output IR file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write collected specification annotations to this file
    #[arg(long, value_name = "FILE")]
    pub spec: Option<PathBuf>,

    /// Do not walk template instantiations and specializations
    #[arg(long)]
    pub no_elaborate: bool,

    /// Walk template patterns
    #[arg(long)]
    pub templates: bool,

    /// Only translate declarations located in this file (repeatable)
    #[arg(long, value_name = "FILE", action = ArgAction::Append)]
    pub only: Vec<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log every module insertion
    #[arg(long)]
    pub trace_module: bool,
}

impl Cli {
    pub fn options(&self) -> TranslationOptions {
        TranslationOptions::new()
            .with_elaborate(!self.no_elaborate)
            .with_templates(self.templates)
            .with_trace_module_builder(self.trace_module)
    }

    /// Level for `env_logger` when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.trace_module {
            "trace"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// Translate the input named by `cli`, writing the requested outputs
pub fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = cli.options();
    debug!("Options: {}", serde_json::to_string(&options)?);

    let tu = Frontend::load_file(&cli.input)?;

    let filter: Box<dyn Filter> = if cli.only.is_empty() {
        Box::new(AcceptAll)
    } else {
        Box::new(LocationFilter::new(cli.only.clone()))
    };
    let mut specs = AnnotationCollector::new();
    let ir = translate_unit(&tu, filter.as_ref(), &mut specs, &QualifiedNameResolver, &options)?;

    let spec_text = specs.render();
    let mut outputs: Vec<(&Path, &str)> = Vec::new();
    if let Some(path) = &cli.spec {
        outputs.push((path.as_path(), spec_text.as_str()));
    }
    if let Some(path) = &cli.output {
        outputs.push((path.as_path(), ir.as_str()));
    }
    write_outputs(&outputs)?;
    if !specs.is_empty() {
        info!("Collected {} specifications", specs.entries().len());
    }

    // stdout cannot be rolled back, so it goes last
    if cli.output.is_none() {
        print!("{ir}");
    }
    Ok(())
}

/// Write every output file or none of them
fn write_outputs(outputs: &[(&Path, &str)]) -> io::Result<()> {
    for (i, (path, text)) in outputs.iter().enumerate() {
        if let Err(e) = fs::write(path, text) {
            for (written, _) in &outputs[..i] {
                match fs::remove_file(written) {
                    Ok(()) => debug!("Removed {}", written.display()),
                    Err(cleanup) if cleanup.kind() == io::ErrorKind::NotFound => {}
                    Err(cleanup) => warn!("Could not remove {}: {cleanup}", written.display()),
                }
            }
            return Err(e);
        }
        info!("Wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["cpp2v", "unit.json"]);
        assert_eq!(cli.input, PathBuf::from("unit.json"));
        assert_eq!(cli.options(), TranslationOptions::default());
        assert_eq!(cli.log_filter(), "warn");
        assert!(cli.only.is_empty());
    }

    #[test]
    fn test_flags_map_to_options() {
        let cli = Cli::parse_from([
            "cpp2v", "unit.json", "-o", "unit.v", "--spec", "unit_spec.v",
            "--no-elaborate", "--templates", "--trace-module",
        ]);
        assert_eq!(cli.output, Some(PathBuf::from("unit.v")));
        assert_eq!(cli.spec, Some(PathBuf::from("unit_spec.v")));
        let options = cli.options();
        assert!(!options.elaborate);
        assert!(options.templates);
        assert!(options.trace_module_builder);
        assert_eq!(cli.log_filter(), "trace");
    }

    #[test]
    fn test_only_repeats_one_file_per_flag() {
        let cli = Cli::parse_from(["cpp2v", "-v", "--only", "a.cpp", "--only", "b.hpp", "unit.json"]);
        assert_eq!(cli.only, ["a.cpp", "b.hpp"]);
        assert_eq!(cli.input, PathBuf::from("unit.json"));
        assert_eq!(cli.log_filter(), "debug");
    }

    #[test]
    fn test_only_before_input() {
        let cli = Cli::parse_from(["cpp2v", "--only", "a.cpp", "unit.json"]);
        assert_eq!(cli.only, ["a.cpp"]);
        assert_eq!(cli.input, PathBuf::from("unit.json"));
    }
}
