//!
//! The rewriting core. Both rewriters share the same shape: load a file into lines,
//! mutate the lines, write everything back in place. Matching is plain substring
//! search and every substitution replaces the first occurrence in its line only, so
//! tokens a later rule cares about are never double-rewritten.
//!

pub mod header;
pub mod peripherals;
pub mod source;

use crate::encoding;
use crate::error::ConvertError;
use std::fs;
use std::path::Path;

/// A file loaded as lines. `\r\n` is normalized to `\n`, and whether the file ended
/// in a newline is kept so write-back does not grow it.
pub struct Lines {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl Lines {
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        Ok(Self::from_content(encoding::read_to_string(path)?))
    }

    fn from_content(content: String) -> Self {
        Self {
            trailing_newline: content.is_empty() || content.ends_with('\n'),
            lines: content.lines().map(str::to_owned).collect(),
        }
    }

    fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        if self.trailing_newline && !self.lines.is_empty() {
            out.push('\n');
        }
        out
    }

    pub fn store(&self, path: &Path) -> Result<(), ConvertError> {
        fs::write(path, self.render())?;
        Ok(())
    }
}

/// Rewrites a declaration file in place. Headers only get identifier renames, so
/// there is nothing to report.
pub fn rewrite_header_file(path: &Path) -> Result<(), ConvertError> {
    let mut file = Lines::load(path)?;
    header::rewrite(&mut file.lines);
    file.store(path)
}

/// Rewrites an implementation file in place and reports where each peripheral's
/// declaration was anchored.
pub fn rewrite_source_file(path: &Path) -> Result<source::Report, ConvertError> {
    let mut file = Lines::load(path)?;
    let report = source::rewrite(&mut file.lines);
    file.store(path)?;
    Ok(report)
}
