//! The `library.properties` manifest the Arduino IDE expects at the root of a
//! library. Keys are written in a fixed order with mostly fixed values; only the
//! name and the paragraph depend on the library being converted.

use std::io::{self, Write};

pub const FILE_NAME: &str = "library.properties";

/// Manifest for a converted library, derived from the original directory name
pub struct Manifest {
    name: String,
    paragraph: String,
}

impl Manifest {
    pub fn for_library(original_name: &str) -> Self {
        Self {
            name: format!("HinjPMOD_{original_name}"),
            paragraph: format!(
                "Library generated by converting {original_name} for use with Hinj PMOD"
            ),
        }
    }

    pub fn write_to(&self, mut w: impl Write) -> io::Result<()> {
        writeln!(w, "name={}", self.name)?;
        writeln!(w, "version=0.0.1")?;
        writeln!(w, "author=Alorium Technology PMOD Conversion Script")?;
        writeln!(w, "maintainer=User")?;
        writeln!(w, "sentence=Hinj PMOD library")?;
        writeln!(w, "paragraph={}", self.paragraph)?;
        writeln!(w, "architectures=avr")?;
        writeln!(w, "category=Uncategorized")?;
        Ok(())
    }
}
