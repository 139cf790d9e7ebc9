//! Host-side panel model for driver and renderer tests
//!
//! The mock bus and lines share one [`PanelModel`] which decodes the
//! byte stream the way the controller does: opcodes while DC is low,
//! parameters and pixels while it is high.

use core::cell::RefCell;
use std::collections::BTreeSet;
use std::vec::Vec;

use clockface_hal::{OutputPin, SpiBus};
use embedded_hal::delay::DelayNs;

use crate::st7789::{cmd, PanelConfig, St7789};

/// Framebuffer edge length, large enough for every test panel
pub const FB: usize = 32;

pub type Panel<'a> = St7789<MockSpi<'a>, MockLine<'a>, MockLine<'a>, MockLine<'a>>;

pub struct PanelModel {
    pub dc_high: bool,
    pub backlight: bool,
    pub reset_pulses: u32,
    pub fail_writes: bool,
    /// Every opcode in arrival order
    pub commands: Vec<u8>,
    pub frequencies: Vec<u32>,
    /// `(commands sent so far, ms)` for every millisecond wait
    pub delays: Vec<(usize, u32)>,
    pub colmod: Option<u8>,
    pub madctl: Option<u8>,
    pub scroll: Option<u16>,
    pub col_start: u16,
    pub col_end: u16,
    pub row_start: u16,
    pub row_end: u16,
    /// High byte waiting for its pixel partner
    pub pending_byte: Option<u8>,
    /// Coordinates of every pixel written, repeats included
    pub writes: Vec<(u16, u16)>,
    /// Pixels past the end of the window
    pub overruns: u32,
    opcode: u8,
    args: Vec<u8>,
    ram_write: bool,
    cursor: (u16, u16),
    framebuffer: [[u16; FB]; FB],
}

impl PanelModel {
    pub fn new() -> Self {
        Self {
            dc_high: false,
            backlight: false,
            reset_pulses: 0,
            fail_writes: false,
            commands: Vec::new(),
            frequencies: Vec::new(),
            delays: Vec::new(),
            colmod: None,
            madctl: None,
            scroll: None,
            col_start: 0,
            col_end: 0,
            row_start: 0,
            row_end: 0,
            pending_byte: None,
            writes: Vec::new(),
            overruns: 0,
            opcode: 0,
            args: Vec::new(),
            ram_write: false,
            cursor: (0, 0),
            framebuffer: [[0; FB]; FB],
        }
    }

    /// Forget everything recorded so far, keeping panel state
    pub fn clear_log(&mut self) {
        self.commands.clear();
        self.delays.clear();
        self.writes.clear();
        self.overruns = 0;
    }

    pub fn pixel(&self, x: u16, y: u16) -> u16 {
        self.framebuffer[y as usize][x as usize]
    }

    /// Distinct coordinates written
    pub fn touched(&self) -> BTreeSet<(u16, u16)> {
        self.writes.iter().copied().collect()
    }

    fn receive(&mut self, bytes: &[u8]) {
        for &b in bytes {
            if self.dc_high {
                self.data(b);
            } else {
                self.command(b);
            }
        }
    }

    fn command(&mut self, opcode: u8) {
        self.commands.push(opcode);
        self.opcode = opcode;
        self.args.clear();
        self.ram_write = opcode == cmd::RAMWR;
        if self.ram_write {
            self.cursor = (self.col_start, self.row_start);
            self.pending_byte = None;
        }
    }

    fn data(&mut self, b: u8) {
        if self.ram_write {
            match self.pending_byte.take() {
                None => self.pending_byte = Some(b),
                Some(hi) => self.store(u16::from_be_bytes([hi, b])),
            }
            return;
        }

        self.args.push(b);
        let word = |a: &[u8], i: usize| u16::from_be_bytes([a[i], a[i + 1]]);
        match (self.opcode, self.args.len()) {
            (cmd::CASET, 4) => {
                self.col_start = word(&self.args, 0);
                self.col_end = word(&self.args, 2);
            }
            (cmd::RASET, 4) => {
                self.row_start = word(&self.args, 0);
                self.row_end = word(&self.args, 2);
            }
            (cmd::MADCTL, 1) => self.madctl = Some(b),
            (cmd::COLMOD, 1) => self.colmod = Some(b),
            (cmd::VSCSAD, 2) => self.scroll = Some(word(&self.args, 0)),
            _ => {}
        }
    }

    fn store(&mut self, color: u16) {
        let (x, y) = self.cursor;
        if y > self.row_end {
            self.overruns += 1;
            return;
        }
        self.writes.push((x, y));
        if (x as usize) < FB && (y as usize) < FB {
            self.framebuffer[y as usize][x as usize] = color;
        }
        self.cursor = if x >= self.col_end {
            (self.col_start, y + 1)
        } else {
            (x + 1, y)
        };
    }
}

pub struct MockSpi<'a> {
    model: &'a RefCell<PanelModel>,
    hz: u32,
}

impl SpiBus for MockSpi<'_> {
    type Error = ();

    fn write(&mut self, data: &[u8]) -> Result<(), ()> {
        let mut model = self.model.borrow_mut();
        if model.fail_writes {
            return Err(());
        }
        model.receive(data);
        Ok(())
    }

    fn set_frequency(&mut self, hz: u32) {
        self.hz = hz;
        self.model.borrow_mut().frequencies.push(hz);
    }

    fn frequency(&self) -> u32 {
        self.hz
    }
}

#[derive(Clone, Copy)]
enum Line {
    Dc,
    Rst,
    Bl,
}

pub struct MockLine<'a> {
    model: &'a RefCell<PanelModel>,
    line: Line,
    high: bool,
}

impl OutputPin for MockLine<'_> {
    fn set_high(&mut self) {
        self.high = true;
        let mut model = self.model.borrow_mut();
        match self.line {
            Line::Dc => model.dc_high = true,
            Line::Bl => model.backlight = true,
            Line::Rst => {}
        }
    }

    fn set_low(&mut self) {
        self.high = false;
        let mut model = self.model.borrow_mut();
        match self.line {
            Line::Dc => model.dc_high = false,
            Line::Bl => model.backlight = false,
            Line::Rst => model.reset_pulses += 1,
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

#[derive(Default)]
pub struct MockDelay<'a> {
    model: Option<&'a RefCell<PanelModel>>,
    pub total_ms: u32,
    pub total_ns: u64,
}

impl<'a> MockDelay<'a> {
    /// Delay that logs each wait into `model`
    pub fn logging(model: &'a RefCell<PanelModel>) -> Self {
        Self {
            model: Some(model),
            ..Self::default()
        }
    }
}

impl DelayNs for MockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.total_ms += ms;
        if let Some(model) = self.model {
            let mut model = model.borrow_mut();
            let sent = model.commands.len();
            model.delays.push((sent, ms));
        }
    }
}

/// Bus and control lines wired to `model`
pub fn parts(
    model: &RefCell<PanelModel>,
) -> (MockSpi<'_>, MockLine<'_>, MockLine<'_>, MockLine<'_>) {
    let line = |line| MockLine {
        model,
        line,
        high: false,
    };
    (
        MockSpi { model, hz: 0 },
        line(Line::Dc),
        line(Line::Rst),
        line(Line::Bl),
    )
}

/// An initialized panel with an empty log
pub fn test_panel(model: &RefCell<PanelModel>, config: PanelConfig) -> Panel<'_> {
    let (spi, dc, rst, bl) = parts(model);
    let panel = St7789::init(spi, dc, rst, bl, config, &mut MockDelay::default()).unwrap();
    model.borrow_mut().clear_log();
    panel
}
