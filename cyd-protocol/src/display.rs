//! ILI9341 command set and power-up table
//!
//! Every transaction is one opcode byte sent with D/C low, optionally
//! followed by payload bytes sent with D/C high, all under a single
//! chip-select assertion.

/// ILI9341 opcodes issued by the driver logic
///
/// The power-up table below uses raw bytes on purpose; only the commands
/// the driver builds at runtime get names.
pub mod opcode {
    /// Exit sleep mode (needs [`super::SLEEP_OUT_DELAY_MS`] before the next command)
    pub const SLEEP_OUT: u8 = 0x11;
    /// Turn the panel output on
    pub const DISPLAY_ON: u8 = 0x29;
    /// Column address set: start and end column, big-endian u16 each
    pub const COLUMN_ADDRESS_SET: u8 = 0x2A;
    /// Page (row) address set: start and end row, big-endian u16 each
    pub const PAGE_ADDRESS_SET: u8 = 0x2B;
    /// Memory write: subsequent data bytes are pixels for the current window
    pub const MEMORY_WRITE: u8 = 0x2C;
    /// Memory access control (scan direction / BGR order)
    pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;
    /// Interface pixel format
    pub const PIXEL_FORMAT_SET: u8 = 0x3A;
}

/// Delay required after SLEEP_OUT before DISPLAY_ON
pub const SLEEP_OUT_DELAY_MS: u32 = 120;

/// Settle time after each reset edge
pub const RESET_SETTLE_MS: u32 = 50;

/// Bytes per RGB565 pixel on the wire
pub const BYTES_PER_PIXEL: usize = 2;

/// One controller command: opcode plus (possibly empty) payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command<'a> {
    /// Opcode byte, sent with D/C low
    pub opcode: u8,
    /// Payload bytes, sent with D/C high; empty means no data phase
    pub payload: &'a [u8],
}

impl<'a> Command<'a> {
    /// Command with a payload
    pub const fn new(opcode: u8, payload: &'a [u8]) -> Self {
        Self { opcode, payload }
    }

    /// Command without a payload
    pub const fn bare(opcode: u8) -> Self {
        Self {
            opcode,
            payload: &[],
        }
    }

    /// Whether a data phase follows the opcode
    pub const fn has_payload(&self) -> bool {
        !self.payload.is_empty()
    }
}

/// Vendor power-up table, sent in order before SLEEP_OUT
///
/// Power, gamma, pixel format (16bpp) and orientation (MADCTL 0x88) for
/// the panels shipped on these boards. Byte-for-byte; do not reorder.
pub const INIT_SEQUENCE: &[Command<'static>] = &[
    Command::new(0xEF, &[0x03, 0x80, 0x02]),
    Command::new(0xCF, &[0x00, 0xC1, 0x30]),
    Command::new(0xED, &[0x64, 0x03, 0x12, 0x81]),
    Command::new(0xE8, &[0x85, 0x00, 0x78]),
    Command::new(0xCB, &[0x39, 0x2C, 0x00, 0x34, 0x02]),
    Command::new(0xF7, &[0x20]),
    Command::new(0xEA, &[0x00, 0x00]),
    Command::new(0xC0, &[0x23]),
    Command::new(0xC1, &[0x10]),
    Command::new(0xC5, &[0x3E, 0x28]),
    Command::new(0xC7, &[0x86]),
    Command::new(0x36, &[0x88]),
    Command::new(0x3A, &[0x55]),
    Command::new(0xB1, &[0x00, 0x18]),
    Command::new(0xB6, &[0x08, 0x82, 0x27]),
    Command::new(0xF2, &[0x00]),
    Command::new(0x26, &[0x01]),
    Command::new(
        0xE0,
        &[
            0x0F, 0x31, 0x2B, 0x0C, 0x0E, 0x08, 0x4E, 0xF1, 0x37, 0x07, 0x10, 0x03, 0x0E, 0x09,
            0x00,
        ],
    ),
    Command::new(
        0xE1,
        &[
            0x00, 0x0E, 0x14, 0x03, 0x11, 0x07, 0x31, 0xC1, 0x48, 0x08, 0x0F, 0x0C, 0x31, 0x36,
            0x0F,
        ],
    ),
];

/// Encode an inclusive address range for COLUMN/PAGE_ADDRESS_SET
pub const fn encode_bounds(start: u16, end: u16) -> [u8; 4] {
    let s = start.to_be_bytes();
    let e = end.to_be_bytes();
    [s[0], s[1], e[0], e[1]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_init_sequence_shape() {
        assert_eq!(INIT_SEQUENCE.len(), 19);
        assert!(INIT_SEQUENCE.iter().all(Command::has_payload));

        let lengths: [usize; 19] = [3, 3, 4, 3, 5, 1, 2, 1, 1, 2, 1, 1, 1, 2, 3, 1, 1, 15, 15];
        for (cmd, len) in INIT_SEQUENCE.iter().zip(lengths) {
            assert_eq!(cmd.payload.len(), len, "opcode {:#04x}", cmd.opcode);
        }
    }

    #[test]
    fn test_init_sequence_format_and_orientation() {
        let madctl = INIT_SEQUENCE
            .iter()
            .find(|c| c.opcode == opcode::MEMORY_ACCESS_CONTROL)
            .unwrap();
        assert_eq!(madctl.payload, &[0x88]);

        let pixfmt = INIT_SEQUENCE
            .iter()
            .find(|c| c.opcode == opcode::PIXEL_FORMAT_SET)
            .unwrap();
        assert_eq!(pixfmt.payload, &[0x55]); // 16 bits per pixel
    }

    #[test]
    fn test_init_sequence_endpoints() {
        assert_eq!(INIT_SEQUENCE[0], Command::new(0xEF, &[0x03, 0x80, 0x02]));
        let last = INIT_SEQUENCE[INIT_SEQUENCE.len() - 1];
        assert_eq!(last.opcode, 0xE1);
        assert_eq!(last.payload[7], 0xC1);
        assert_eq!(last.payload[14], 0x0F);
    }

    #[test]
    fn test_bare_command() {
        let cmd = Command::bare(opcode::MEMORY_WRITE);
        assert!(!cmd.has_payload());
        assert_eq!(cmd.opcode, 0x2C);
    }

    #[test]
    fn test_encode_bounds_big_endian() {
        assert_eq!(encode_bounds(0, 239), [0x00, 0x00, 0x00, 0xEF]);
        assert_eq!(encode_bounds(0x0102, 0x013F), [0x01, 0x02, 0x01, 0x3F]);
    }

    proptest! {
        #[test]
        fn prop_encode_bounds_layout(start in any::<u16>(), end in any::<u16>()) {
            let bytes = encode_bounds(start, end);
            prop_assert_eq!(u16::from_be_bytes([bytes[0], bytes[1]]), start);
            prop_assert_eq!(u16::from_be_bytes([bytes[2], bytes[3]]), end);
        }
    }
}
