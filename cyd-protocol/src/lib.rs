//! Wire protocols for the ILI9341 panel and the XPT2046 digitizer
//!
//! This crate holds everything that must match the silicon bit for bit and
//! nothing else: opcodes, the vendor power-up table, the byte layout of
//! address windows, and the digitizer's control bytes and response format.
//!
//! # Display command framing
//!
//! ```text
//!   CS  ‾‾\__________________________________/‾‾
//!   DC  ____/‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾   (low = opcode, high = payload)
//!  MOSI ─┤ OPCODE │ PAYLOAD 0..n bytes         ├─
//! ```
//!
//! # Touch conversion
//!
//! ```text
//!  MOSI ─┤ CONTROL │ 0x00 │ 0x00 ├─
//!  MISO ─┤   --    │  HI  │  LO  ├─   sample = (HI << 8 | LO) >> 3
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod display;
pub mod touch;

pub use display::{encode_bounds, Command, INIT_SEQUENCE};
pub use touch::{decode_response, CONVERSION_FRAME_LEN};
