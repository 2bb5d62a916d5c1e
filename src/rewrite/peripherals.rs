//! Fixed bindings for the three PMOD-attached peripherals of the Hinj board. The
//! addresses are the hardware register addresses of each PMOD interface on the FPGA
//! and never vary per input.

/// Include spliced in before every peripheral declaration
pub const ADDR_PACK_INCLUDE: &str = "#include <XLR8HinjAddrPack.h>";

/// An include filename rename, e.g. `SPI.h` to `XLR8SPI.h`
#[derive(Clone, Copy)]
pub struct IncludeRename {
    pub from: &'static str,
    pub to: &'static str,
}

/// An AVR register the original library pokes directly. `REG = x;` becomes a write
/// accessor call, a bare `REG` becomes a read accessor call.
pub struct Register {
    pub write_pattern: &'static str,
    pub write_call: &'static str,
    pub token: &'static str,
    pub read_call: &'static str,
}

/// One PMOD peripheral and every name involved in retargeting a library to it
pub struct Peripheral {
    /// Marks include lines. Serial has none: the Arduino core always provides it.
    pub include: Option<IncludeRename>,
    /// Dotted namespace prefix the library uses, e.g. `SPI.`
    pub namespace: &'static str,
    /// The PMOD object every reference is pointed at instead
    pub object: &'static str,
    /// C++ class the inserted declaration instantiates
    pub class: &'static str,
    /// Hardware register addresses the declaration binds
    pub addresses: &'static [u8],
    /// Register-level rewrite rules. Only SPI has any.
    pub registers: &'static [Register],
}

impl Peripheral {
    /// The replacement for the dotted namespace prefix, e.g. `XLR8PmodSPI.`
    pub fn dotted_object(&self) -> String {
        format!("{}.", self.object)
    }

    /// The declaration spliced in after the include, e.g.
    /// `XLR8SPIClass XLR8PmodSPI(0xAC, 0xAD, 0xAE);`
    pub fn declaration(&self) -> String {
        let addresses = self
            .addresses
            .iter()
            .map(|a| format!("0x{a:02X}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} {}({});", self.class, self.object, addresses)
    }
}

pub const SPI: Peripheral = Peripheral {
    include: Some(IncludeRename {
        from: "SPI.h",
        to: "XLR8SPI.h",
    }),
    namespace: "SPI.",
    object: "XLR8PmodSPI",
    class: "XLR8SPIClass",
    addresses: &[0xAC, 0xAD, 0xAE],
    registers: &[
        Register {
            write_pattern: "SPDR = ",
            write_call: "XLR8PmodSPI.writeSPDR(",
            token: "SPDR",
            read_call: "XLR8PmodSPI.readSPDR()",
        },
        Register {
            write_pattern: "SPSR = ",
            write_call: "XLR8PmodSPI.writeSPSR(",
            token: "SPSR",
            read_call: "XLR8PmodSPI.readSPSR()",
        },
        Register {
            write_pattern: "SPCR = ",
            write_call: "XLR8PmodSPI.writeSPCR(",
            token: "SPCR",
            read_call: "XLR8PmodSPI.readSPCR()",
        },
    ],
};

pub const WIRE: Peripheral = Peripheral {
    include: Some(IncludeRename {
        from: "Wire.h",
        to: "XLR8Wire.h",
    }),
    namespace: "Wire.",
    object: "XLR8PmodWire",
    class: "XLR8TwoWire",
    addresses: &[0xE5, 0xE0, 0xE1, 0xE2, 0xE3, 0xE4],
    registers: &[],
};

pub const SERIAL: Peripheral = Peripheral {
    include: None,
    namespace: "Serial.",
    object: "XLR8PmodSerial",
    class: "XLR8Serial",
    addresses: &[0xEB, 0xEA, 0xE7, 0xE8, 0xE9, 0xE6],
    registers: &[],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declarations() {
        assert_eq!(
            SPI.declaration(),
            "XLR8SPIClass XLR8PmodSPI(0xAC, 0xAD, 0xAE);"
        );
        assert_eq!(
            WIRE.declaration(),
            "XLR8TwoWire XLR8PmodWire(0xE5, 0xE0, 0xE1, 0xE2, 0xE3, 0xE4);"
        );
        assert_eq!(
            SERIAL.declaration(),
            "XLR8Serial XLR8PmodSerial(0xEB, 0xEA, 0xE7, 0xE8, 0xE9, 0xE6);"
        );
    }
}
