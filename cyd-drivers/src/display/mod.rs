//! Display controllers
//!
//! Only the ILI9341 is supported. It is driven write-only over the shared
//! bus with a dedicated D/C line.

pub mod ili9341;

pub use ili9341::{render_glyph, Ili9341, GLYPH_ADVANCE, GLYPH_SIZE};
