//! XPT2046 conversion protocol
//!
//! A conversion is a three-byte full-duplex exchange: the control byte goes
//! out first, and the 12-bit result comes back left-aligned in the next two
//! bytes, one bit late. Shifting the 16-bit big-endian word right by three
//! drops the settling bits and leaves the 12-bit sample.

/// Control bytes for the position channels
///
/// Both are 12-bit, differential reference, PENIRQ left enabled.
pub mod control {
    /// Measure the X position
    pub const READ_X: u8 = 0xD0;
    /// Measure the Y position
    pub const READ_Y: u8 = 0x90;
}

/// Bytes exchanged per conversion
pub const CONVERSION_FRAME_LEN: usize = 3;

/// Largest value a 12-bit conversion can produce
pub const SAMPLE_MAX: u16 = 0x0FFF;

/// Largest value [`decode_response`] can return
///
/// The shifted word keeps 13 bits. The top one is the controller's busy
/// bit, always 0 on real hardware; a reading with it set lies above any
/// sane raw window and is discarded as no contact.
pub const RESPONSE_MAX: u16 = 0x1FFF;

/// Bits of settling noise below the sample in the response word
const RESPONSE_SHIFT: u32 = 3;

/// Build the outgoing frame for one conversion
pub const fn conversion_request(control_byte: u8) -> [u8; CONVERSION_FRAME_LEN] {
    [control_byte, 0x00, 0x00]
}

/// Extract the sample from a conversion response
///
/// The first byte is clocked in while the control byte is still going out
/// and carries nothing. The result is the 12-bit sample as long as the
/// busy bit (bit 15 of the word) is clear; see [`RESPONSE_MAX`].
pub const fn decode_response(response: &[u8; CONVERSION_FRAME_LEN]) -> u16 {
    u16::from_be_bytes([response[1], response[2]]) >> RESPONSE_SHIFT
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_request_frame() {
        assert_eq!(conversion_request(control::READ_X), [0xD0, 0x00, 0x00]);
        assert_eq!(conversion_request(control::READ_Y), [0x90, 0x00, 0x00]);
    }

    #[test]
    fn test_decode_drops_low_bits() {
        // 0x1234 >> 3 = 0x0246
        assert_eq!(decode_response(&[0xFF, 0x12, 0x34]), 0x0246);
        // Low three bits alone decode to zero
        assert_eq!(decode_response(&[0x00, 0x00, 0x07]), 0);
    }

    #[test]
    fn test_decode_busy_bit() {
        assert_eq!(decode_response(&[0x00, 0x80, 0x00]), 0x1000);
        assert_eq!(decode_response(&[0x00, 0xFF, 0xFF]), RESPONSE_MAX);
    }

    #[test]
    fn test_decode_ignores_first_byte() {
        assert_eq!(
            decode_response(&[0x00, 0x40, 0x00]),
            decode_response(&[0xA5, 0x40, 0x00])
        );
    }

    proptest! {
        #[test]
        fn prop_decode_within_13_bits(hi in any::<u8>(), lo in any::<u8>()) {
            let sample = decode_response(&[0, hi, lo]);
            prop_assert!(sample <= RESPONSE_MAX);
            if hi & 0x80 == 0 {
                prop_assert!(sample <= SAMPLE_MAX);
            }
        }

        #[test]
        fn prop_decode_recovers_aligned_sample(sample in 0u16..=SAMPLE_MAX, noise in 0u8..8) {
            let word = (sample << 3) | noise as u16;
            let [hi, lo] = word.to_be_bytes();
            prop_assert_eq!(decode_response(&[0, hi, lo]), sample);
        }
    }
}
