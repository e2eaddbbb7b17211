//! Collaborator traits implemented outside the drivers

/// Fixed-size glyph lookup
///
/// Each glyph is 8 rows of 8 pixels, one byte per row, most significant
/// bit leftmost. Characters the font does not cover should map to a blank
/// or placeholder glyph rather than fail.
pub trait GlyphSource {
    fn glyph(&self, ch: char) -> [u8; 8];
}

impl<T: GlyphSource + ?Sized> GlyphSource for &T {
    fn glyph(&self, ch: char) -> [u8; 8] {
        T::glyph(self, ch)
    }
}
