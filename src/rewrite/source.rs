//! Implementation files both use and, once converted, declare the PMOD objects, so
//! the source rewriter does everything the header rewriter does plus the SPI
//! register rules and the splicing-in of the object declarations.
//!
//! Rules within a family's pass are first-match-wins per line, checked top to
//! bottom, so each line is rewritten by at most one rule per pass.

use super::peripherals::{Peripheral, ADDR_PACK_INCLUDE, SERIAL, SPI, WIRE};

/// Where each family anchored its declaration, against pre-insertion line indices.
/// `None` means the library never included that header and no object is declared for
/// it, even if references to it were renamed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub spi: Option<usize>,
    pub wire: Option<usize>,
    pub serial: Option<usize>,
}

pub fn rewrite(lines: &mut Vec<String>) -> Report {
    let report = Report {
        spi: family_pass(lines, &SPI),
        wire: family_pass(lines, &WIRE),
        serial: family_pass(lines, &SERIAL),
    };
    insert_declarations(lines, &report);
    report
}

/// One full pass for one peripheral family. Returns the family's insertion anchor:
/// the earliest include line, or for include-less families (Serial) the earliest
/// renamed use site.
fn family_pass(lines: &mut [String], peripheral: &Peripheral) -> Option<usize> {
    let mut anchor = None;

    for (idx, line) in lines.iter_mut().enumerate() {
        if let Some(inc) = peripheral.include {
            if line.contains(inc.from) {
                *line = line.replacen(inc.from, inc.to, 1);
                // earliest include wins; a second include never moves the anchor
                anchor.get_or_insert(idx);
                continue;
            }
        }

        if line.contains(peripheral.namespace) {
            *line = line.replacen(peripheral.namespace, &peripheral.dotted_object(), 1);
            if peripheral.include.is_none() {
                anchor.get_or_insert(idx);
            }
            continue;
        }

        // `REG = x;` turns into `writeREG(x);`, a bare `REG` into `readREG()`.
        // Writes are checked for every register before any read.
        if let Some(reg) = peripheral
            .registers
            .iter()
            .find(|r| line.contains(r.write_pattern))
        {
            *line = line.replacen(reg.write_pattern, reg.write_call, 1);
            *line = line.replacen(';', ");", 1);
            continue;
        }
        if let Some(reg) = peripheral
            .registers
            .iter()
            .find(|r| line.contains(r.token))
        {
            *line = line.replacen(reg.token, reg.read_call, 1);
        }
    }

    anchor
}

/// Splices the address-package include and the object declaration in right after
/// each anchor. Anchors are pre-insertion indices, so insertions run highest-first
/// to keep the lower ones valid.
fn insert_declarations(lines: &mut Vec<String>, report: &Report) {
    let mut inserts: Vec<(usize, &Peripheral)> = [
        (report.spi, &SPI),
        (report.wire, &WIRE),
        (report.serial, &SERIAL),
    ]
    .into_iter()
    .filter_map(|(anchor, p)| anchor.map(|idx| (idx, p)))
    .collect();

    inserts.sort_by(|a, b| b.0.cmp(&a.0));

    for (idx, peripheral) in inserts {
        lines.insert(idx + 1, ADDR_PACK_INCLUDE.to_owned());
        lines.insert(idx + 2, peripheral.declaration());
    }
}
