use crate::error::ConvertError;
use crate::picker::{self, DirectoryPicker};
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Deserialize, Debug, Default)]
#[command(author, version, about)]
#[serde(default)]
pub struct OptionalConfig {
    /// The library directory to convert. Asked for interactively when omitted
    pub library: Option<PathBuf>,

    /// Directory the converted library is created under. Defaults to the working
    /// directory
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Only report errors, not per-file progress
    #[arg(short, long)]
    pub quiet: bool,
}

impl OptionalConfig {
    pub fn get_args() -> Self {
        Self::parse()
    }

    pub fn get_toml() -> Self {
        std::fs::read_to_string("hinj-pmod-converter.toml")
            .ok()
            .map(|config| toml::from_str(&config).expect("Failed to parse config file"))
            .unwrap_or_default()
    }

    pub fn merge(self, rhs: Self) -> Self {
        Self {
            library: self.library.or(rhs.library),
            output_dir: self.output_dir.or(rhs.output_dir),
            quiet: self.quiet || rhs.quiet,
        }
    }

    /// Resolves into a full [`Config`], asking the picker once if no library was
    /// named anywhere else
    pub fn resolve(self, picker: &mut dyn DirectoryPicker) -> Result<Config, ConvertError> {
        let library = match self.library {
            Some(library) => library,
            None => picker
                .pick_directory(&picker::default_libraries_dir())?
                .ok_or(ConvertError::NoLibrarySelected)?,
        };

        if !library.is_dir() {
            return Err(ConvertError::NotADirectory(library));
        }

        Ok(Config {
            library,
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from(".")),
            quiet: self.quiet,
        })
    }
}

#[derive(Debug)]
pub struct Config {
    pub library: PathBuf,
    pub output_dir: PathBuf,
    pub quiet: bool,
}

impl Config {
    pub fn get(picker: &mut dyn DirectoryPicker) -> Result<Self, ConvertError> {
        OptionalConfig::get_args()
            .merge(OptionalConfig::get_toml())
            .resolve(picker)
    }
}
