//! Picking the library to convert. The converter itself only ever sees the chosen
//! path through [`crate::config::Config`]; this trait is the one interactive step,
//! called once when neither the command line nor the config file named a library.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

pub trait DirectoryPicker {
    /// Asks for a directory once. `None` means the user declined to pick one.
    fn pick_directory(&mut self, suggested: &Path) -> io::Result<Option<PathBuf>>;
}

/// Reads a path from standard input, the closest thing a terminal has to a folder
/// dialog
pub struct StdinPicker;

impl DirectoryPicker for StdinPicker {
    fn pick_directory(&mut self, suggested: &Path) -> io::Result<Option<PathBuf>> {
        print!("Library to convert (e.g. under {}): ", suggested.display());
        io::stdout().flush()?;
        read_choice(io::stdin().lock())
    }
}

fn read_choice(mut reader: impl BufRead) -> io::Result<Option<PathBuf>> {
    let mut answer = String::new();
    reader.read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(if answer.is_empty() {
        None
    } else {
        Some(PathBuf::from(answer))
    })
}

/// Where Arduino installs keep their libraries by default
pub fn default_libraries_dir() -> PathBuf {
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_default();
    home.join("Documents").join("Arduino").join("libraries")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_choice() {
        let choice = read_choice(Cursor::new("/tmp/SomeLib\n")).unwrap();
        assert_eq!(choice, Some(PathBuf::from("/tmp/SomeLib")));
    }

    #[test]
    fn test_empty_choice_is_none() {
        assert_eq!(read_choice(Cursor::new("\n")).unwrap(), None);
        assert_eq!(read_choice(Cursor::new("   \n")).unwrap(), None);
        assert_eq!(read_choice(Cursor::new("")).unwrap(), None);
    }
}
