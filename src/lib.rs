//!
//! Converts Arduino libraries written against the standard `SPI`, `Wire` and `Serial`
//! objects so they target the PMOD connectors of Alorium's Hinj board instead. The
//! conversion is deliberately textual: a handful of line-oriented renames, AVR SPI
//! register accesses turned into accessor calls, and a declaration of each PMOD
//! peripheral object spliced in right after the include that pulled in the library
//! it replaces.
//!
//! Nothing here parses C++. A reference inside a comment or a string literal is
//! rewritten like any other line, which is what people converting libraries by hand
//! have come to expect.
//!

pub mod config;
pub mod convert;
pub mod encoding;
pub mod error;
pub mod manifest;
pub mod picker;
pub mod rewrite;

pub use convert::{convert, Summary};
pub use error::ConvertError;
