//! Arduino libraries in the wild mix UTF-8 with Latin-1 (accented names and degree
//! signs in comments, mostly), so file contents are decoded against an ordered list
//! of candidate encodings: first success wins.

use crate::error::ConvertError;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Latin1,
}

/// Tried in order
pub const CANDIDATES: [Encoding; 2] = [Encoding::Utf8, Encoding::Latin1];

impl Encoding {
    fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Encoding::Utf8 => String::from_utf8(bytes.to_vec()).ok(),
            // Latin-1 maps every byte to the code point of the same value, so it
            // accepts anything
            Encoding::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

pub fn decode(bytes: &[u8], path: &Path) -> Result<String, ConvertError> {
    CANDIDATES
        .iter()
        .find_map(|e| e.decode(bytes))
        .ok_or_else(|| ConvertError::Decode(path.to_path_buf()))
}

pub fn read_to_string(path: &Path) -> Result<String, ConvertError> {
    let bytes = fs::read(path)?;
    decode(&bytes, path)
}
