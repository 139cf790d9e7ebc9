//! Clockface - button, clock and stopwatch firmware
//!
//! Main firmware binary for RP2040 boards with one push button, three
//! status LEDs and an ST7789 SPI panel. A press wakes the clock view;
//! pressing again while it is shown starts and stops a stopwatch. The
//! display switches itself off after a period without activity.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::Level;
use embassy_rp::watchdog::Watchdog;
use embassy_time::Delay;
use embedded_hal::delay::DelayNs;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use clockface_core::input::Debouncer;
use clockface_display::{PanelConfig, RotationGeometry, St7789};
use clockface_hal::spi::{Mode, SpiConfig};
use clockface_hal_rp2040::{ButtonInput, RpOutput, RpSpi};

use embassy_rp::peripherals::SPI0;

#[macro_use]
mod board;
mod channels;
mod leds;
mod screen;
mod tasks;

use board::BOARD;
use leds::StatusLeds;
use screen::{PanelError, Screen};

// The panel session lives for the whole program
static SCREEN: StaticCell<Screen> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Clockface firmware starting...");

    // build.rs already rejects a bad board.toml; never run on one
    if let Err(e) = BOARD.validate() {
        defmt::panic!("Board configuration rejected: {}", e);
    }

    let p = embassy_rp::init(Default::default());
    let pins = board_pins!(p);
    info!("Peripherals initialized");

    let leds = StatusLeds::new(
        RpOutput::new_slow(pins.led_red, Level::High),
        RpOutput::new_slow(pins.led_green, Level::High),
        RpOutput::new_slow(pins.led_blue, Level::High),
    );

    let debouncer = Debouncer::new(ButtonInput::new(pins.button), BOARD.debounce);
    info!("Button armed");

    // Panel wiring: SPI mode 3, started at the slow init clock
    let spi = board_spi!(p, SpiConfig::new(BOARD.display.init_clock_hz, Mode::Mode3));
    let dc = RpOutput::new(pins.display_dc, Level::High);
    let rst = RpOutput::new(pins.display_rst, Level::High);
    let bl = RpOutput::new(pins.display_bl, Level::Low);

    let screen = match bring_up_display(spi, dc, rst, bl, &mut Delay) {
        Ok(screen) => {
            info!("Display initialized");
            Some(SCREEN.init(screen))
        }
        Err(e) => {
            error!("Display init failed: {}", e);
            None
        }
    };

    spawner
        .spawn(tasks::watchdog_task(Watchdog::new(p.WATCHDOG), BOARD.timing.watchdog_feed))
        .unwrap();
    spawner.spawn(tasks::button_task(debouncer)).unwrap();
    spawner
        .spawn(tasks::app_task(screen, leds, BOARD.timing))
        .unwrap();

    info!("All tasks spawned, firmware running");
}

/// Initialize the panel and draw the boot screen
///
/// Runs before the watchdog starts: the init sequence blocks for
/// several seconds of settle delays.
fn bring_up_display(
    spi: RpSpi<'static, SPI0>,
    dc: RpOutput<'static>,
    rst: RpOutput<'static>,
    bl: RpOutput<'static>,
    delay: &mut impl DelayNs,
) -> Result<Screen, PanelError> {
    let display = &BOARD.display;
    let config = PanelConfig {
        width: display.width,
        height: display.height,
        init_clock_hz: display.init_clock_hz,
        run_clock_hz: display.run_clock_hz,
        rotation_geometry: if display.swap_on_every_rotation {
            RotationGeometry::SwapEveryCall
        } else {
            RotationGeometry::FromAddressMode
        },
    };

    let mut panel = St7789::init(spi, dc, rst, bl, config, delay)?;
    // Some panels ignore the first init after power-up
    panel.reset(delay)?;

    let mut screen = Screen::new(panel, BOARD.clock);
    screen.boot(display.rotation)?;
    Ok(screen)
}
