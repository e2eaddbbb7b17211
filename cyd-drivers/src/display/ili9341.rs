//! ILI9341 TFT controller over a 4-wire serial bus
//!
//! The driver owns the D/C, chip-select and (optional) reset lines. The
//! bus and the clock are borrowed per call, so a touch digitizer on the
//! same bus can be serviced between display operations but never during
//! one.
//!
//! Nothing is buffered: every drawing call goes straight to the panel's
//! frame memory through an address window.

use cyd_core::config::MAX_CHUNK_PIXELS;
use cyd_core::{DisplayConfig, Font8x8, GlyphSource, Rgb565, Rotation, Window};
use cyd_hal::{Clock, OutputLine, Transport};
use cyd_protocol::display::{
    opcode, BYTES_PER_PIXEL, RESET_SETTLE_MS, SLEEP_OUT_DELAY_MS,
};
use cyd_protocol::{encode_bounds, Command, INIT_SEQUENCE};

/// Glyph cell edge in pixels
pub const GLYPH_SIZE: u16 = 8;

/// Horizontal distance between consecutive characters of a string
pub const GLYPH_ADVANCE: i32 = GLYPH_SIZE as i32;

/// Bytes in one rendered glyph cell
pub const GLYPH_BYTES: usize = (GLYPH_SIZE as usize) * (GLYPH_SIZE as usize) * BYTES_PER_PIXEL;

/// ILI9341 display driver
///
/// `F` supplies glyph bitmaps for text; the built-in 8x8 font is used
/// unless another is given to [`Ili9341::with_font`].
pub struct Ili9341<DC, CS, RST, F = Font8x8> {
    dc: DC,
    cs: CS,
    rst: Option<RST>,
    config: DisplayConfig,
    font: F,
}

impl<DC, CS, RST> Ili9341<DC, CS, RST>
where
    DC: OutputLine,
    CS: OutputLine,
    RST: OutputLine,
{
    /// Create a driver using the built-in font
    ///
    /// Puts the lines in their idle state (chip-select high, D/C low,
    /// reset high). Nothing is sent to the panel until [`Self::begin`] or
    /// [`Self::initialize`]. Pass `None::<NoLine>` when reset is not wired.
    ///
    /// [`NoLine`]: cyd_hal::NoLine
    pub fn new(dc: DC, cs: CS, rst: Option<RST>, config: DisplayConfig) -> Self {
        Self::with_font(dc, cs, rst, config, Font8x8)
    }
}

impl<DC, CS, RST, F> Ili9341<DC, CS, RST, F>
where
    DC: OutputLine,
    CS: OutputLine,
    RST: OutputLine,
    F: GlyphSource,
{
    /// Create a driver with a caller-supplied font
    pub fn with_font(mut dc: DC, mut cs: CS, mut rst: Option<RST>, config: DisplayConfig, font: F) -> Self {
        cs.configure_output(true);
        dc.configure_output(false);
        if let Some(rst) = rst.as_mut() {
            rst.configure_output(true);
        }

        Self {
            dc,
            cs,
            rst,
            config,
            font,
        }
    }

    /// Panel width in pixels
    pub fn width(&self) -> u16 {
        self.config.width
    }

    /// Panel height in pixels
    pub fn height(&self) -> u16 {
        self.config.height
    }

    /// Configured orientation
    ///
    /// Informational only; the scan direction comes from the power-up table.
    pub fn rotation(&self) -> Rotation {
        self.config.rotation
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Pulse the reset line
    ///
    /// Low, settle, high, settle. Does nothing when no reset line is wired.
    pub fn reset<C: Clock>(&mut self, clock: &mut C) {
        if let Some(rst) = self.rst.as_mut() {
            rst.set_low();
            clock.sleep_ms(RESET_SETTLE_MS);
            rst.set_high();
            clock.sleep_ms(RESET_SETTLE_MS);
        }
    }

    /// Send the power-up table, wake the panel and turn it on
    ///
    /// Stops at the first transport failure; the panel is then in an
    /// unknown state and should be reset before retrying.
    pub fn initialize<B, C>(&mut self, bus: &mut B, clock: &mut C) -> Result<(), B::Error>
    where
        B: Transport,
        C: Clock,
    {
        for command in INIT_SEQUENCE {
            self.send(bus, *command)?;
        }

        self.send(bus, Command::bare(opcode::SLEEP_OUT))?;
        clock.sleep_ms(SLEEP_OUT_DELAY_MS);
        self.send(bus, Command::bare(opcode::DISPLAY_ON))?;

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "ILI9341 on: {}x{} {}deg",
            self.config.width,
            self.config.height,
            self.config.rotation.degrees()
        );

        Ok(())
    }

    /// Reset, then initialize
    pub fn begin<B, C>(&mut self, bus: &mut B, clock: &mut C) -> Result<(), B::Error>
    where
        B: Transport,
        C: Clock,
    {
        self.reset(clock);
        self.initialize(bus, clock)
    }

    /// Send one command in its own chip-select transaction
    ///
    /// An empty `payload` sends the opcode alone.
    pub fn write_command<B: Transport>(
        &mut self,
        bus: &mut B,
        opcode: u8,
        payload: &[u8],
    ) -> Result<(), B::Error> {
        self.send(bus, Command::new(opcode, payload))
    }

    /// Set the address window and open frame memory for writing
    ///
    /// The window is trimmed to the panel first. Returns the window
    /// actually set, or `None` (and sends nothing) if it starts off the
    /// panel or is inverted.
    pub fn set_window<B: Transport>(
        &mut self,
        bus: &mut B,
        window: Window,
    ) -> Result<Option<Window>, B::Error> {
        match window.clipped(self.config.width, self.config.height) {
            Some(window) => {
                self.address(bus, window)?;
                Ok(Some(window))
            }
            None => Ok(None),
        }
    }

    /// Stream raw big-endian RGB565 bytes into the current window
    ///
    /// One chip-select transaction with D/C high. Extra bytes past the end
    /// of the window wrap around inside it.
    pub fn write_pixel_data<B: Transport>(&mut self, bus: &mut B, data: &[u8]) -> Result<(), B::Error> {
        self.transaction(bus, |dc, bus| {
            dc.set_high();
            bus.write(data)
        })
    }

    /// Fill a rectangle with one color
    ///
    /// The origin is clamped onto the panel and the size to what remains
    /// beyond it (at least one pixel). Pixels go out in chunks of
    /// `chunk_pixels` inside a single data transaction.
    pub fn fill_rect<B: Transport>(
        &mut self,
        bus: &mut B,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Rgb565,
    ) -> Result<(), B::Error> {
        let Some(window) = Window::clip_rect(x, y, w, h, self.config.width, self.config.height)
        else {
            return Ok(());
        };

        self.address(bus, window)?;

        let chunk = self.config.effective_chunk_pixels();
        let pixel = color.to_be_bytes();
        let mut buffer = [0u8; MAX_CHUNK_PIXELS * BYTES_PER_PIXEL];
        for slot in buffer[..chunk * BYTES_PER_PIXEL].chunks_exact_mut(BYTES_PER_PIXEL) {
            slot.copy_from_slice(&pixel);
        }

        let mut remaining = window.pixel_count() as usize;
        self.transaction(bus, |dc, bus| {
            dc.set_high();
            while remaining > 0 {
                let n = remaining.min(chunk);
                bus.write(&buffer[..n * BYTES_PER_PIXEL])?;
                remaining -= n;
            }
            Ok(())
        })
    }

    /// Fill the whole panel
    pub fn fill_screen<B: Transport>(&mut self, bus: &mut B, color: Rgb565) -> Result<(), B::Error> {
        let (w, h) = (self.config.width as i32, self.config.height as i32);
        self.fill_rect(bus, 0, 0, w, h, color)
    }

    /// Draw one character cell with its top-left corner at (x, y)
    ///
    /// Cells not entirely on the panel are skipped without touching the bus,
    /// so zero buffers are sent in that case instead of one.
    pub fn draw_glyph<B: Transport>(
        &mut self,
        bus: &mut B,
        ch: char,
        x: i32,
        y: i32,
        fg: Rgb565,
        bg: Rgb565,
    ) -> Result<(), B::Error> {
        let Some(window) = Window::cell(x, y, GLYPH_SIZE, self.config.width, self.config.height)
        else {
            return Ok(());
        };

        let cell = render_glyph(&self.font.glyph(ch), fg, bg);
        self.address(bus, window)?;
        self.write_pixel_data(bus, &cell)
    }

    /// Draw a string left to right, one cell per character
    ///
    /// `bg` defaults to black. Characters that would cross the right edge
    /// are dropped; there is no wrapping.
    pub fn draw_text<B: Transport>(
        &mut self,
        bus: &mut B,
        text: &str,
        x: i32,
        y: i32,
        fg: Rgb565,
        bg: Option<Rgb565>,
    ) -> Result<(), B::Error> {
        let bg = bg.unwrap_or(Rgb565::BLACK);
        let right_edge = self.config.width as i32;

        let mut cx = x;
        for ch in text.chars() {
            if cx.saturating_add(GLYPH_ADVANCE) > right_edge {
                break;
            }
            self.draw_glyph(bus, ch, cx, y, fg, bg)?;
            cx = cx.saturating_add(GLYPH_ADVANCE);
        }

        Ok(())
    }

    /// Give back the lines and the font
    pub fn release(self) -> (DC, CS, Option<RST>, F) {
        (self.dc, self.cs, self.rst, self.font)
    }

    /// CASET, PASET, RAMWR for a window already on the panel
    fn address<B: Transport>(&mut self, bus: &mut B, window: Window) -> Result<(), B::Error> {
        self.send(bus, Command::new(opcode::COLUMN_ADDRESS_SET, &encode_bounds(window.x0, window.x1)))?;
        self.send(bus, Command::new(opcode::PAGE_ADDRESS_SET, &encode_bounds(window.y0, window.y1)))?;
        self.send(bus, Command::bare(opcode::MEMORY_WRITE))
    }

    fn send<B: Transport>(&mut self, bus: &mut B, command: Command<'_>) -> Result<(), B::Error> {
        self.transaction(bus, |dc, bus| {
            dc.set_low();
            bus.write(&[command.opcode])?;
            if command.has_payload() {
                // D/C must not move while the opcode is still shifting out
                bus.flush()?;
                dc.set_high();
                bus.write(command.payload)?;
            }
            Ok(())
        })
    }

    /// Run `body` with chip-select asserted
    ///
    /// Chip-select is released even when `body` fails.
    fn transaction<B, T>(&mut self, bus: &mut B, body: T) -> Result<(), B::Error>
    where
        B: Transport,
        T: FnOnce(&mut DC, &mut B) -> Result<(), B::Error>,
    {
        self.cs.set_low();
        let result = body(&mut self.dc, &mut *bus).and_then(|()| bus.flush());
        self.cs.set_high();
        result
    }
}

/// Expand a 1-bit glyph into a cell of big-endian RGB565 pixels
///
/// Rows top to bottom, most significant bit leftmost.
pub fn render_glyph(bitmap: &[u8; 8], fg: Rgb565, bg: Rgb565) -> [u8; GLYPH_BYTES] {
    let fg = fg.to_be_bytes();
    let bg = bg.to_be_bytes();
    let mut cell = [0u8; GLYPH_BYTES];

    for (i, slot) in cell.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let row = bitmap[i / GLYPH_SIZE as usize];
        let lit = row & (0x80 >> (i % GLYPH_SIZE as usize)) != 0;
        slot.copy_from_slice(if lit { &fg } else { &bg });
    }

    cell
}
