//! Walks the chosen library, copies every header and implementation file into the
//! output tree and runs the matching rewriter over each copy. The input tree is
//! flattened: whatever subdirectory a file came from, its renamed copy lands
//! directly in the output's `src/`.

use crate::config::Config;
use crate::error::ConvertError;
use crate::manifest::{self, Manifest};
use crate::rewrite::{self, source};
use owo_colors::OwoColorize;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Prefix for both the output directory and every copied file
pub const OUTPUT_PREFIX: &str = "HinjPMOD_";

/// What a finished conversion produced
#[derive(Debug)]
pub struct Summary {
    pub output_dir: PathBuf,
    pub files: Vec<String>,
}

pub fn convert(config: &Config) -> Result<Summary, ConvertError> {
    let original_name = config
        .library
        .file_name()
        .and_then(OsStr::to_str)
        .ok_or_else(|| ConvertError::NotADirectory(config.library.clone()))?;

    let output_dir = config.output_dir.join(format!("{OUTPUT_PREFIX}{original_name}"));
    let src_dir = output_dir.join("src");

    if !config.quiet {
        if output_dir.exists() {
            println!("{} already exists", output_dir.display());
        } else {
            println!("Creating: {}", output_dir.display());
        }
    }
    fs::create_dir_all(&src_dir)?;

    let properties = fs::File::create(output_dir.join(manifest::FILE_NAME))?;
    Manifest::for_library(original_name).write_to(properties)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(&config.library) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let name = match path.file_name().and_then(OsStr::to_str) {
            Some(name) => name,
            None => continue,
        };

        match path.extension().and_then(OsStr::to_str) {
            Some("h") => {
                if !config.quiet {
                    println!("{} {}", "Header File:".bright_blue(), path.display());
                }
                let dest = src_dir.join(format!("{OUTPUT_PREFIX}{name}"));
                fs::copy(path, &dest)?;
                rewrite::rewrite_header_file(&dest)?;
                files.push(name.to_owned());
            }
            Some("cpp") => {
                if !config.quiet {
                    println!("{} {}", "Source File:".bright_blue(), path.display());
                }
                let dest = src_dir.join(format!("{OUTPUT_PREFIX}{name}"));
                fs::copy(path, &dest)?;
                let report = rewrite::rewrite_source_file(&dest)?;
                if !config.quiet {
                    report_includes(&report);
                }
                files.push(name.to_owned());
            }
            _ => {}
        }
    }

    let summary = Summary { output_dir, files };
    if !config.quiet {
        println!(
            "Converted {} files: {:?}",
            summary.files.len(),
            summary.files
        );
    }
    Ok(summary)
}

fn report_includes(report: &source::Report) {
    if let Some(line) = report.spi {
        println!("SPI library include found on line {line}");
    }
    if let Some(line) = report.wire {
        println!("I2C library include found on line {line}");
    }
    if let Some(line) = report.serial {
        println!("Serial library include found on line {line}");
    }
}
