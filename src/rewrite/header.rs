//! Declaration files only reference the peripheral objects, so converting one is
//! three renaming passes. Include lines are left alone: the included file itself is
//! copied and renamed separately.

use super::peripherals::{Peripheral, SERIAL, SPI, WIRE};

pub fn rewrite(lines: &mut [String]) {
    for peripheral in [&SPI, &WIRE, &SERIAL] {
        rename_references(lines, peripheral);
    }
}

/// One full pass over the file: every line gets at most one namespace rename. A line
/// carrying the include marker is never a use site, so it is skipped outright.
fn rename_references(lines: &mut [String], peripheral: &Peripheral) {
    for line in lines.iter_mut() {
        if peripheral
            .include
            .map_or(false, |inc| line.contains(inc.from))
        {
            continue;
        }
        if line.contains(peripheral.namespace) {
            *line = line.replacen(peripheral.namespace, &peripheral.dotted_object(), 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn rewritten(input: &[&str]) -> Vec<String> {
        let mut lines: Vec<String> = input.iter().map(|s| s.to_string()).collect();
        rewrite(&mut lines);
        lines
    }

    #[test]
    fn test_include_lines_are_untouched() {
        let lines = rewritten(&["#include <SPI.h>", "#include \"Wire.h\""]);
        assert_eq!(lines, &["#include <SPI.h>", "#include \"Wire.h\""]);
    }

    #[test]
    fn test_renames_first_occurrence_only() {
        let lines = rewritten(&["  SPI.begin(); SPI.end();"]);
        assert_eq!(lines, &["  XLR8PmodSPI.begin(); SPI.end();"]);
    }

    #[test]
    fn test_renames_each_namespace() {
        let lines = rewritten(&[
            "SPI.transfer(0);",
            "Wire.begin();",
            "Serial.println(x);",
        ]);
        assert_eq!(
            lines,
            &[
                "XLR8PmodSPI.transfer(0);",
                "XLR8PmodWire.begin();",
                "XLR8PmodSerial.println(x);",
            ]
        );
    }

    #[test]
    fn test_serial_needs_no_include() {
        // There is no Serial.h marker, so even a line that looks like an include is a
        // use site as far as the Serial pass is concerned
        let lines = rewritten(&["Serial.begin(9600); // Serial.end() later"]);
        assert_eq!(lines, &["XLR8PmodSerial.begin(9600); // Serial.end() later"]);
    }

    proptest! {
        // A line with exactly one dotted SPI access and no include marker keeps
        // everything but that one prefix byte-identical
        #[test]
        fn renames_only_the_namespace_prefix(
            prefix in "[a-z0-9 _();=]{0,24}",
            suffix in "[a-z0-9 _();=]{0,24}",
        ) {
            let line = format!("{prefix}SPI.{suffix}");
            prop_assume!(!line.contains("SPI.h"));
            prop_assume!(line.matches("SPI.").count() == 1);

            let mut lines = vec![line];
            rewrite(&mut lines);
            prop_assert_eq!(&lines[0], &format!("{prefix}XLR8PmodSPI.{suffix}"));
        }
    }
}
