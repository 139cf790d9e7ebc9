//! Build script for clockface-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml and compiles it into `board_config.rs`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Highest RP2040 GPIO number
const MAX_GPIO: i64 = 29;

/// GPIOs that carry SPI0 SCK and TX
const SPI0_SCK_PINS: [i64; 4] = [2, 6, 18, 22];
const SPI0_TX_PINS: [i64; 4] = [3, 7, 19, 23];

const PIN_KEYS: [&str; 9] = [
    "button",
    "led_red",
    "led_green",
    "led_blue",
    "spi_sck",
    "spi_mosi",
    "display_dc",
    "display_rst",
    "display_bl",
];

fn main() {
    setup_linker();
    let board = validate_config();
    generate_config(&board);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validated board.toml contents
struct Board {
    pins: Vec<(&'static str, i64)>,
    width: i64,
    height: i64,
    init_clock_hz: i64,
    run_clock_hz: i64,
    rotation: i64,
    swap_on_every_rotation: bool,
    debounce_interval_ms: i64,
    min_confirmations: i64,
    active_low: bool,
    timing_ms: Vec<(&'static str, i64)>,
    epoch_seconds: i64,
    utc_offset_minutes: i64,
}

impl Board {
    fn pin(&self, key: &str) -> i64 {
        self.pins
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or_default()
    }

    fn timing(&self, key: &str) -> i64 {
        self.timing_ms
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or_default()
    }
}

/// Validate board.toml at compile time
fn validate_config() -> Board {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml description next to its      ║\n\
            ║  Cargo.toml, listing pins, panel, debounce and timing settings.  ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in board.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&e.to_string())
            );
        }
    };

    let mut errors = Vec::new();
    for section in ["pins", "display", "debounce", "timing", "clock"] {
        if config.get(section).and_then(|v| v.as_table()).is_none() {
            errors.push(format!("Missing [{}] section", section));
        }
    }
    report(&errors);

    let int = |errors: &mut Vec<String>, section: &str, key: &str| -> i64 {
        match config.get(section).and_then(|s| s.get(key)) {
            Some(toml::Value::Integer(v)) => *v,
            Some(_) => {
                errors.push(format!("{}.{} must be an integer", section, key));
                0
            }
            None => {
                errors.push(format!("Missing {}.{}", section, key));
                0
            }
        }
    };
    let boolean = |errors: &mut Vec<String>, section: &str, key: &str| -> bool {
        match config.get(section).and_then(|s| s.get(key)) {
            Some(toml::Value::Boolean(v)) => *v,
            Some(_) => {
                errors.push(format!("{}.{} must be true or false", section, key));
                false
            }
            None => {
                errors.push(format!("Missing {}.{}", section, key));
                false
            }
        }
    };

    let board = Board {
        pins: PIN_KEYS
            .iter()
            .map(|&key| (key, int(&mut errors, "pins", key)))
            .collect(),
        width: int(&mut errors, "display", "width"),
        height: int(&mut errors, "display", "height"),
        init_clock_hz: int(&mut errors, "display", "init_clock_hz"),
        run_clock_hz: int(&mut errors, "display", "run_clock_hz"),
        rotation: int(&mut errors, "display", "rotation"),
        swap_on_every_rotation: boolean(&mut errors, "display", "swap_on_every_rotation"),
        debounce_interval_ms: int(&mut errors, "debounce", "interval_ms"),
        min_confirmations: int(&mut errors, "debounce", "min_confirmations"),
        active_low: boolean(&mut errors, "debounce", "active_low"),
        timing_ms: [
            "display_timeout_ms",
            "clock_refresh_ms",
            "stopwatch_frame_ms",
            "stopwatch_linger_ms",
            "watchdog_feed_ms",
        ]
        .iter()
        .map(|&key| (key, int(&mut errors, "timing", key)))
        .collect(),
        epoch_seconds: int(&mut errors, "clock", "epoch_seconds"),
        utc_offset_minutes: int(&mut errors, "clock", "utc_offset_minutes"),
    };
    report(&errors);

    validate_pins(&board, &mut errors);
    validate_display(&board, &mut errors);
    validate_timing(&board, &mut errors);
    report(&errors);

    println!("cargo:warning=board.toml validated successfully");
    board
}

fn validate_pins(board: &Board, errors: &mut Vec<String>) {
    for (i, &(key, pin)) in board.pins.iter().enumerate() {
        if !(0..=MAX_GPIO).contains(&pin) {
            errors.push(format!("pins.{} = {} is not a GPIO (0-{})", key, pin, MAX_GPIO));
        }
        if let Some((other, _)) = board.pins[..i].iter().find(|(_, p)| *p == pin) {
            errors.push(format!("pins.{} reuses GPIO{} (also pins.{})", key, pin, other));
        }
    }
    if !SPI0_SCK_PINS.contains(&board.pin("spi_sck")) {
        errors.push(format!("pins.spi_sck must be one of {:?} (SPI0)", SPI0_SCK_PINS));
    }
    if !SPI0_TX_PINS.contains(&board.pin("spi_mosi")) {
        errors.push(format!("pins.spi_mosi must be one of {:?} (SPI0)", SPI0_TX_PINS));
    }
}

fn validate_display(board: &Board, errors: &mut Vec<String>) {
    for (key, v) in [("width", board.width), ("height", board.height)] {
        if !(1..=320).contains(&v) {
            errors.push(format!("display.{} = {} must be 1-320", key, v));
        }
    }
    if board.init_clock_hz <= 0 || board.run_clock_hz > u32::MAX as i64 {
        errors.push("display clocks must be positive and fit in 32 bits".to_string());
    }
    if board.init_clock_hz > board.run_clock_hz {
        errors.push("display.init_clock_hz exceeds display.run_clock_hz".to_string());
    }
    if !(0..=3).contains(&board.rotation) {
        errors.push(format!("display.rotation = {} must be 0-3", board.rotation));
    }
}

fn validate_timing(board: &Board, errors: &mut Vec<String>) {
    if !(1..=60_000).contains(&board.debounce_interval_ms) {
        errors.push("debounce.interval_ms must be 1-60000".to_string());
    }
    if !(1..=u16::MAX as i64).contains(&board.min_confirmations) {
        errors.push("debounce.min_confirmations must be 1-65535".to_string());
    }
    for (key, ms) in &board.timing_ms {
        if !(1..=3_600_000).contains(ms) {
            errors.push(format!("timing.{} = {} must be 1-3600000", key, ms));
        }
    }
    if board.timing("watchdog_feed_ms") > 2_000 {
        errors.push("timing.watchdog_feed_ms must be at most 2000".to_string());
    }
    if !(0..=u32::MAX as i64).contains(&board.epoch_seconds) {
        errors.push("clock.epoch_seconds must fit in 32 bits".to_string());
    }
    if !(-14 * 60..=14 * 60).contains(&board.utc_offset_minutes) {
        errors.push("clock.utc_offset_minutes must be within +/-14 hours".to_string());
    }
}

/// Fail the build with every collected error
fn report(errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: Invalid board.toml                                       ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `board_config.rs` into OUT_DIR
///
/// The file holds the `BOARD` constant and two macros that take the
/// configured pins out of the embassy peripherals.
fn generate_config(board: &Board) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let ms = |key: &str| board.timing(key);

    let mut code = String::new();
    code.push_str("// Generated by build.rs from board.toml\n\n");
    code.push_str("pub const BOARD: BoardConfig = BoardConfig {\n");
    code.push_str("    pins: PinMap {\n");
    for (key, pin) in &board.pins {
        code.push_str(&format!("        {}: {},\n", key, pin));
    }
    code.push_str("    },\n");
    code.push_str(&format!(
        "    display: DisplaySettings {{\n        width: {},\n        height: {},\n        \
         init_clock_hz: {},\n        run_clock_hz: {},\n        rotation: {},\n        \
         swap_on_every_rotation: {},\n    }},\n",
        board.width,
        board.height,
        board.init_clock_hz,
        board.run_clock_hz,
        board.rotation,
        board.swap_on_every_rotation,
    ));
    code.push_str(&format!(
        "    debounce: DebounceConfig {{\n        interval: Ticks::from_millis({}),\n        \
         min_confirmations: {},\n        active_low: {},\n    }},\n",
        board.debounce_interval_ms, board.min_confirmations, board.active_low,
    ));
    code.push_str(&format!(
        "    timing: TimingSettings {{\n        display_timeout: Ticks::from_millis({}),\n        \
         clock_refresh: Ticks::from_millis({}),\n        stopwatch_frame: Ticks::from_millis({}),\n        \
         stopwatch_linger: Ticks::from_millis({}),\n        watchdog_feed: Ticks::from_millis({}),\n    }},\n",
        ms("display_timeout_ms"),
        ms("clock_refresh_ms"),
        ms("stopwatch_frame_ms"),
        ms("stopwatch_linger_ms"),
        ms("watchdog_feed_ms"),
    ));
    code.push_str(&format!(
        "    clock: ClockSettings {{\n        epoch_seconds: {},\n        utc_offset_minutes: {},\n    }},\n",
        board.epoch_seconds, board.utc_offset_minutes,
    ));
    code.push_str("};\n\n");

    code.push_str("/// Move the configured GPIOs out of the peripherals\n");
    code.push_str(
        "macro_rules! board_pins {\n    ($p:ident) => {\n        $crate::board::BoardPins {\n",
    );
    let gpio_keys = [
        "button",
        "led_red",
        "led_green",
        "led_blue",
        "display_dc",
        "display_rst",
        "display_bl",
    ];
    for key in gpio_keys {
        code.push_str(&format!("            {}: $p.PIN_{}.into(),\n", key, board.pin(key)));
    }
    code.push_str("        }\n    };\n}\n\n");

    code.push_str("/// Create the panel SPI bus on the configured SPI0 pins\n");
    code.push_str(&format!(
        "macro_rules! board_spi {{\n    ($p:ident, $config:expr) => {{\n        \
         clockface_hal_rp2040::RpSpi::new($p.SPI0, $p.PIN_{}, $p.PIN_{}, $config)\n    }};\n}}\n",
        board.pin("spi_sck"),
        board.pin("spi_mosi"),
    ));

    fs::write(out_dir.join("board_config.rs"), code).unwrap();
}
