//! ST7789 TFT driver
//!
//! Write-only SPI transport with three control lines: data/command
//! select, hardware reset and backlight. Bytes clocked while DC is low
//! are opcodes; bytes clocked while DC is high are parameters or pixel
//! data.
//!
//! Pixels stream after a `RAMWR` into the window last set with
//! `CASET`/`RASET`, filling it row by row. The driver tracks whether a
//! pixel stream is open and only re-issues `RAMWR` when a command has
//! interrupted it.

use clockface_hal::{OutputPin, SpiBus};
use embedded_hal::delay::DelayNs;

use crate::color::Rgb565;

/// ST7789 command opcodes
pub mod cmd {
    pub const SWRESET: u8 = 0x01;
    pub const SLPOUT: u8 = 0x11;
    pub const NORON: u8 = 0x13;
    pub const INVOFF: u8 = 0x20;
    pub const INVON: u8 = 0x21;
    pub const DISPOFF: u8 = 0x28;
    pub const DISPON: u8 = 0x29;
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const MADCTL: u8 = 0x36;
    pub const VSCSAD: u8 = 0x37;
    pub const COLMOD: u8 = 0x3A;
}

/// Memory access control bits
pub mod madctl {
    /// Row address order
    pub const MY: u8 = 0x80;
    /// Column address order
    pub const MX: u8 = 0x40;
    /// Row/column exchange
    pub const MV: u8 = 0x20;
    pub const BGR: u8 = 0x08;
    pub const RGB: u8 = 0x00;
}

/// 65K colors, 16 bits per pixel
const COLMOD_RGB565: u8 = 0x55;

/// Reset line hold time, each level
pub const RESET_PULSE_MS: u32 = 250;
/// Settle time after each init step
pub const SETTLE_MS: u32 = 150;

const INIT_SEQUENCE: [(u8, &[u8]); 7] = [
    (cmd::SWRESET, &[]),
    (cmd::SLPOUT, &[]),
    (cmd::COLMOD, &[COLMOD_RGB565]),
    (cmd::MADCTL, &[madctl::RGB]),
    (cmd::INVON, &[]),
    (cmd::NORON, &[]),
    (cmd::DISPON, &[]),
];

/// MADCTL value for each rotation step
const ROTATIONS: [u8; 4] = [
    madctl::RGB,
    madctl::MX | madctl::MY | madctl::RGB,
    madctl::MY | madctl::MV | madctl::RGB,
    madctl::MX | madctl::MV | madctl::RGB,
];

/// Pixel words kept on the stack per bus write
const CHUNK: usize = 32;

/// Panel errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError<E> {
    /// SPI transfer failed
    Bus(E),
}

/// Framing currently used on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferWidth {
    /// Commands and parameters
    Bits8,
    /// Pixel stream
    Bits16,
}

/// Inclusive address window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    pub x0: u16,
    pub y0: u16,
    pub x1: u16,
    pub y1: u16,
}

impl Window {
    /// Pixels needed to fill the window once
    pub fn pixel_count(&self) -> u32 {
        let w = (self.x1 as u32 + 1).saturating_sub(self.x0 as u32);
        let h = (self.y1 as u32 + 1).saturating_sub(self.y0 as u32);
        w * h
    }
}

/// How logical width and height follow rotation changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RotationGeometry {
    /// Swap width and height on every rotation call
    #[default]
    SwapEveryCall,
    /// Derive the geometry from the row/column exchange bit
    FromAddressMode,
}

/// Panel wiring independent settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelConfig {
    /// Native width in pixels
    pub width: u16,
    /// Native height in pixels
    pub height: u16,
    /// Bus clock while the init sequence runs
    pub init_clock_hz: u32,
    /// Bus clock afterwards
    pub run_clock_hz: u32,
    pub rotation_geometry: RotationGeometry,
}

impl PanelConfig {
    /// Settings with the init clock at a hundredth of the run clock
    pub const fn new(width: u16, height: u16, run_clock_hz: u32) -> Self {
        Self {
            width,
            height,
            init_clock_hz: run_clock_hz / 100,
            run_clock_hz,
            rotation_geometry: RotationGeometry::SwapEveryCall,
        }
    }
}

/// ST7789 panel session
///
/// Owns the bus and control lines for the lifetime of the session.
pub struct St7789<SPI, DC, RST, BL> {
    spi: SPI,
    dc: DC,
    rst: RST,
    bl: BL,
    config: PanelConfig,
    width: u16,
    height: u16,
    window: Window,
    transfer_width: TransferWidth,
    /// A `RAMWR` is open and no command has been sent since
    streaming: bool,
    rotation: u8,
    enabled: bool,
    odd_tail_writes: u32,
}

impl<SPI, DC, RST, BL> St7789<SPI, DC, RST, BL>
where
    SPI: SpiBus,
    DC: OutputPin,
    RST: OutputPin,
    BL: OutputPin,
{
    /// Take the bus and lines, reset the panel and bring it up
    ///
    /// On return the panel is awake, in RGB565 mode, rotation 0, with
    /// the window covering the whole panel, the backlight on and the
    /// bus at the run clock.
    pub fn init<D: DelayNs>(
        spi: SPI,
        dc: DC,
        rst: RST,
        bl: BL,
        config: PanelConfig,
        delay: &mut D,
    ) -> Result<Self, DisplayError<SPI::Error>> {
        let mut panel = Self {
            spi,
            dc,
            rst,
            bl,
            config,
            width: config.width,
            height: config.height,
            window: Window::default(),
            transfer_width: TransferWidth::Bits8,
            streaming: false,
            rotation: 0,
            enabled: false,
            odd_tail_writes: 0,
        };
        panel.reset(delay)?;
        Ok(panel)
    }

    /// Run the full reset and init sequence again
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), DisplayError<SPI::Error>> {
        self.bl.set_low();
        self.enabled = false;
        self.streaming = false;
        self.transfer_width = TransferWidth::Bits8;

        self.rst.set_low();
        delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high();
        delay.delay_ms(RESET_PULSE_MS);

        self.dc.set_high();
        delay.delay_ms(SETTLE_MS);

        self.spi.set_frequency(self.config.init_clock_hz);
        delay.delay_ms(SETTLE_MS);

        for (opcode, payload) in INIT_SEQUENCE {
            self.issue_command(opcode, payload)?;
            delay.delay_ms(SETTLE_MS);
        }
        self.width = self.config.width;
        self.height = self.config.height;
        self.rotation = 0;

        self.set_window(
            0,
            0,
            self.width.saturating_sub(1),
            self.height.saturating_sub(1),
        )?;

        self.bl.set_high();
        self.enabled = true;
        self.spi.set_frequency(self.config.run_clock_hz);
        Ok(())
    }

    /// Send an opcode with DC low, then its parameters with DC high
    ///
    /// Closes any open pixel stream.
    pub fn issue_command(
        &mut self,
        opcode: u8,
        payload: &[u8],
    ) -> Result<(), DisplayError<SPI::Error>> {
        self.streaming = false;
        self.transfer_width = TransferWidth::Bits8;

        self.dc.set_low();
        self.spi.write(&[opcode]).map_err(DisplayError::Bus)?;
        self.dc.set_high();
        if !payload.is_empty() {
            self.spi.write(payload).map_err(DisplayError::Bus)?;
        }
        Ok(())
    }

    /// Set the inclusive address window for following pixel writes
    pub fn set_window(
        &mut self,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) -> Result<(), DisplayError<SPI::Error>> {
        let [x0h, x0l] = x0.to_be_bytes();
        let [x1h, x1l] = x1.to_be_bytes();
        let [y0h, y0l] = y0.to_be_bytes();
        let [y1h, y1l] = y1.to_be_bytes();

        self.issue_command(cmd::CASET, &[x0h, x0l, x1h, x1l])?;
        self.issue_command(cmd::RASET, &[y0h, y0l, y1h, y1l])?;
        self.window = Window { x0, y0, x1, y1 };
        Ok(())
    }

    /// Open a pixel stream unless one is already open
    pub fn begin_pixel_stream(&mut self) -> Result<(), DisplayError<SPI::Error>> {
        if !self.streaming {
            self.issue_command(cmd::RAMWR, &[])?;
            self.streaming = true;
            self.transfer_width = TransferWidth::Bits16;
        }
        Ok(())
    }

    pub fn write_pixel(&mut self, color: Rgb565) -> Result<(), DisplayError<SPI::Error>> {
        self.begin_pixel_stream()?;
        self.spi.write_words(&[color.0]).map_err(DisplayError::Bus)
    }

    pub fn write_pixels(&mut self, pixels: &[Rgb565]) -> Result<(), DisplayError<SPI::Error>> {
        self.begin_pixel_stream()?;
        let mut buf = [0u16; CHUNK];
        for chunk in pixels.chunks(CHUNK) {
            for (slot, pixel) in buf.iter_mut().zip(chunk) {
                *slot = pixel.0;
            }
            self.spi.write_words(&buf[..chunk.len()]).map_err(DisplayError::Bus)?;
        }
        Ok(())
    }

    /// Stream `count` copies of one color
    pub fn write_repeated(
        &mut self,
        color: Rgb565,
        count: u32,
    ) -> Result<(), DisplayError<SPI::Error>> {
        self.begin_pixel_stream()?;
        let buf = [color.0; CHUNK];
        let mut left = count as usize;
        while left > 0 {
            let n = left.min(CHUNK);
            self.spi.write_words(&buf[..n]).map_err(DisplayError::Bus)?;
            left -= n;
        }
        Ok(())
    }

    /// Stream raw big-endian pixel bytes
    ///
    /// Whole pixels go out as 16-bit words. A trailing odd byte is sent
    /// as a single 8-bit frame and counted in
    /// [`odd_tail_writes`](Self::odd_tail_writes); the panel then holds
    /// half a pixel until the next byte arrives.
    pub fn write_pixel_bytes(&mut self, bytes: &[u8]) -> Result<(), DisplayError<SPI::Error>> {
        self.begin_pixel_stream()?;

        let mut pairs = bytes.chunks_exact(2);
        let mut buf = [0u16; CHUNK];
        let mut n = 0;
        for pair in pairs.by_ref() {
            buf[n] = u16::from_be_bytes([pair[0], pair[1]]);
            n += 1;
            if n == CHUNK {
                self.spi.write_words(&buf).map_err(DisplayError::Bus)?;
                n = 0;
            }
        }
        if n > 0 {
            self.spi.write_words(&buf[..n]).map_err(DisplayError::Bus)?;
        }

        if let [tail] = pairs.remainder() {
            self.transfer_width = TransferWidth::Bits8;
            self.spi.write(&[*tail]).map_err(DisplayError::Bus)?;
            self.transfer_width = TransferWidth::Bits16;
            self.odd_tail_writes = self.odd_tail_writes.wrapping_add(1);
        }
        Ok(())
    }

    /// Select one of four orientations, `rotation` taken modulo 4
    pub fn set_rotation(&mut self, rotation: u8) -> Result<(), DisplayError<SPI::Error>> {
        let index = rotation % 4;
        let mode = ROTATIONS[index as usize];
        self.issue_command(cmd::MADCTL, &[mode])?;

        match self.config.rotation_geometry {
            RotationGeometry::SwapEveryCall => {
                core::mem::swap(&mut self.width, &mut self.height);
            }
            RotationGeometry::FromAddressMode => {
                if mode & madctl::MV != 0 {
                    self.width = self.config.height;
                    self.height = self.config.width;
                } else {
                    self.width = self.config.width;
                    self.height = self.config.height;
                }
            }
        }
        self.rotation = index;
        Ok(())
    }

    /// Start the displayed frame at `row` of frame memory
    pub fn set_vertical_scroll(&mut self, row: u16) -> Result<(), DisplayError<SPI::Error>> {
        self.issue_command(cmd::VSCSAD, &row.to_be_bytes())
    }

    pub fn set_inversion(&mut self, inverted: bool) -> Result<(), DisplayError<SPI::Error>> {
        let opcode = if inverted { cmd::INVON } else { cmd::INVOFF };
        self.issue_command(opcode, &[])
    }

    /// Switch the panel output and the backlight together
    pub fn set_display_enabled(&mut self, enabled: bool) -> Result<(), DisplayError<SPI::Error>> {
        if enabled {
            self.issue_command(cmd::DISPON, &[])?;
            self.bl.set_high();
        } else {
            self.bl.set_low();
            self.issue_command(cmd::DISPOFF, &[])?;
        }
        self.enabled = enabled;
        Ok(())
    }

    /// Logical (width, height) under the current rotation
    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn transfer_width(&self) -> TransferWidth {
        self.transfer_width
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Pixel writes that ended on half a pixel
    pub fn odd_tail_writes(&self) -> u32 {
        self.odd_tail_writes
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// End the session and hand back the bus and lines
    pub fn release(self) -> (SPI, DC, RST, BL) {
        (self.spi, self.dc, self.rst, self.bl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{parts, test_panel, MockDelay, Panel, PanelModel};
    use core::cell::RefCell;

    const CFG: PanelConfig = PanelConfig::new(32, 24, 1_000_000);

    #[test]
    fn test_init_sequence() {
        let model = RefCell::new(PanelModel::new());
        let mut delay = MockDelay::logging(&model);
        let (spi, dc, rst, bl) = parts(&model);
        let panel: Panel<'_> = St7789::init(spi, dc, rst, bl, CFG, &mut delay).unwrap();

        let m = model.borrow();
        assert_eq!(
            &m.commands[..],
            &[
                cmd::SWRESET,
                cmd::SLPOUT,
                cmd::COLMOD,
                cmd::MADCTL,
                cmd::INVON,
                cmd::NORON,
                cmd::DISPON,
                cmd::CASET,
                cmd::RASET,
            ]
        );
        assert_eq!(m.colmod, Some(0x55));
        assert_eq!(m.madctl, Some(madctl::RGB));
        assert_eq!((m.col_start, m.col_end), (0, 31));
        assert_eq!((m.row_start, m.row_end), (0, 23));
        assert_eq!(m.reset_pulses, 1);
        assert!(m.backlight);
        // Init at a hundredth of the run clock, then the run clock
        assert_eq!(&m.frequencies[..], &[10_000, 1_000_000]);
        drop(m);

        // Reset holds and the DC/clock settles come before any command,
        // then every init command waits out its own settle time. The
        // window is set last with no wait after it.
        let mut expected = std::vec![
            (0, RESET_PULSE_MS),
            (0, RESET_PULSE_MS),
            (0, SETTLE_MS),
            (0, SETTLE_MS),
        ];
        expected.extend((1..=INIT_SEQUENCE.len()).map(|sent| (sent, SETTLE_MS)));
        assert_eq!(model.borrow().delays, expected);

        // Two reset holds, then DC settle, clock settle and seven steps
        assert_eq!(delay.total_ms, 2 * RESET_PULSE_MS + 9 * SETTLE_MS);
        assert_eq!(panel.size(), (32, 24));
        assert_eq!(panel.rotation(), 0);
        assert!(panel.is_enabled());
        assert_eq!(panel.transfer_width(), TransferWidth::Bits8);
    }

    #[test]
    fn test_ramwr_sent_once_per_stream() {
        let model = RefCell::new(PanelModel::new());
        let mut panel = test_panel(&model, CFG);
        model.borrow_mut().commands.clear();

        panel.set_window(0, 0, 1, 0).unwrap();
        panel.write_pixel(Rgb565::RED).unwrap();
        panel.write_pixel(Rgb565::GREEN).unwrap();
        assert_eq!(panel.transfer_width(), TransferWidth::Bits16);

        let m = model.borrow();
        assert_eq!(&m.commands[..], &[cmd::CASET, cmd::RASET, cmd::RAMWR]);
        assert_eq!(m.pixel(0, 0), Rgb565::RED.0);
        assert_eq!(m.pixel(1, 0), Rgb565::GREEN.0);
    }

    #[test]
    fn test_window_change_reopens_stream() {
        let model = RefCell::new(PanelModel::new());
        let mut panel = test_panel(&model, CFG);
        model.borrow_mut().commands.clear();

        panel.set_window(3, 3, 3, 3).unwrap();
        panel.write_pixel(Rgb565::BLUE).unwrap();
        panel.set_window(4, 3, 4, 3).unwrap();
        assert_eq!(panel.transfer_width(), TransferWidth::Bits8);
        panel.write_pixel(Rgb565::BLUE).unwrap();

        let m = model.borrow();
        let ramwr = m.commands.iter().filter(|&&c| c == cmd::RAMWR).count();
        assert_eq!(ramwr, 2);
        assert_eq!(m.pixel(3, 3), Rgb565::BLUE.0);
        assert_eq!(m.pixel(4, 3), Rgb565::BLUE.0);
    }

    #[test]
    fn test_window_fills_row_major() {
        let model = RefCell::new(PanelModel::new());
        let mut panel = test_panel(&model, CFG);

        panel.set_window(2, 5, 4, 6).unwrap();
        assert_eq!(panel.window().pixel_count(), 6);
        let colors = [1, 2, 3, 4, 5, 6].map(Rgb565);
        panel.write_pixels(&colors).unwrap();

        let m = model.borrow();
        assert_eq!(m.pixel(2, 5), 1);
        assert_eq!(m.pixel(4, 5), 3);
        assert_eq!(m.pixel(2, 6), 4);
        assert_eq!(m.pixel(4, 6), 6);
        assert_eq!(m.pending_byte, None);
    }

    #[test]
    fn test_odd_byte_tail_counted() {
        let model = RefCell::new(PanelModel::new());
        let mut panel = test_panel(&model, CFG);

        panel.set_window(0, 0, 1, 0).unwrap();
        panel.write_pixel_bytes(&[0x12, 0x34, 0x56]).unwrap();
        assert_eq!(panel.odd_tail_writes(), 1);
        assert_eq!(model.borrow().pending_byte, Some(0x56));

        // The next byte completes the pixel
        panel.write_pixel_bytes(&[0x78]).unwrap();
        assert_eq!(panel.odd_tail_writes(), 2);
        let m = model.borrow();
        assert_eq!(m.pixel(0, 0), 0x1234);
        assert_eq!(m.pixel(1, 0), 0x5678);
        assert_eq!(m.pending_byte, None);
    }

    #[test]
    fn test_even_bytes_have_no_tail() {
        let model = RefCell::new(PanelModel::new());
        let mut panel = test_panel(&model, CFG);

        panel.set_window(0, 0, 31, 1).unwrap();
        let bytes = [0xAB; 128];
        panel.write_pixel_bytes(&bytes).unwrap();
        assert_eq!(panel.odd_tail_writes(), 0);
        assert_eq!(model.borrow().pixel(31, 1), 0xABAB);
    }

    #[test]
    fn test_rotation_swaps_every_call() {
        let model = RefCell::new(PanelModel::new());
        let mut panel = test_panel(&model, CFG);

        panel.set_rotation(1).unwrap();
        assert_eq!(model.borrow().madctl, Some(madctl::MX | madctl::MY));
        assert_eq!(panel.size(), (24, 32));

        panel.set_rotation(1).unwrap();
        assert_eq!(panel.size(), (32, 24));

        panel.set_rotation(7).unwrap();
        assert_eq!(panel.rotation(), 3);
        assert_eq!(model.borrow().madctl, Some(madctl::MX | madctl::MV));
    }

    #[test]
    fn test_rotation_from_address_mode() {
        let model = RefCell::new(PanelModel::new());
        let cfg = PanelConfig {
            rotation_geometry: RotationGeometry::FromAddressMode,
            ..CFG
        };
        let mut panel = test_panel(&model, cfg);

        panel.set_rotation(1).unwrap();
        assert_eq!(panel.size(), (32, 24));
        panel.set_rotation(2).unwrap();
        assert_eq!(panel.size(), (24, 32));
        panel.set_rotation(3).unwrap();
        assert_eq!(panel.size(), (24, 32));
        panel.set_rotation(4).unwrap();
        assert_eq!(panel.size(), (32, 24));
    }

    #[test]
    fn test_four_rotations_restore_geometry() {
        for start in 0..4u8 {
            let model = RefCell::new(PanelModel::new());
            let mut panel = test_panel(&model, CFG);
            for step in 0..4 {
                panel.set_rotation(start + step).unwrap();
            }
            assert_eq!(panel.size(), (32, 24));
        }
    }

    #[test]
    fn test_display_enable_drives_backlight() {
        let model = RefCell::new(PanelModel::new());
        let mut panel = test_panel(&model, CFG);

        panel.set_display_enabled(false).unwrap();
        assert!(!panel.is_enabled());
        assert!(!model.borrow().backlight);
        assert_eq!(model.borrow().commands.last(), Some(&cmd::DISPOFF));

        panel.set_display_enabled(true).unwrap();
        assert!(model.borrow().backlight);
        assert_eq!(model.borrow().commands.last(), Some(&cmd::DISPON));
    }

    #[test]
    fn test_scroll_and_inversion() {
        let model = RefCell::new(PanelModel::new());
        let mut panel = test_panel(&model, CFG);

        panel.set_vertical_scroll(0x0102).unwrap();
        assert_eq!(model.borrow().scroll, Some(0x0102));

        panel.set_inversion(false).unwrap();
        assert_eq!(model.borrow().commands.last(), Some(&cmd::INVOFF));
    }

    #[test]
    fn test_reset_restores_native_geometry() {
        let model = RefCell::new(PanelModel::new());
        let mut panel = test_panel(&model, CFG);
        panel.set_rotation(1).unwrap();

        let mut delay = MockDelay::default();
        panel.reset(&mut delay).unwrap();
        assert_eq!(panel.size(), (32, 24));
        assert_eq!(panel.rotation(), 0);
        assert_eq!(model.borrow().reset_pulses, 2);
    }

    #[test]
    fn test_bus_error_propagates() {
        let model = RefCell::new(PanelModel::new());
        let mut panel = test_panel(&model, CFG);
        model.borrow_mut().fail_writes = true;

        assert_eq!(panel.set_window(0, 0, 1, 1), Err(DisplayError::Bus(())));
    }

    #[test]
    fn test_release_returns_parts() {
        let model = RefCell::new(PanelModel::new());
        let panel = test_panel(&model, CFG);
        let (spi, _, _, _) = panel.release();
        assert_eq!(spi.frequency(), 1_000_000);
    }
}
