//! SSD1306 command opcodes and protocol constants.
//!
//! Values come from the SSD1306 datasheet (rev 1.1) plus the fade and zoom
//! commands added in rev 1.5. Opcodes that carry a flag or a small field in
//! their low bits (segment remap, start line, page start, column nibbles)
//! are listed here as their base value; the field is OR'd in by
//! [`Command::encode`](crate::command::Command::encode).

// ---------------------------------------------------------------------------
// Fundamental commands
// ---------------------------------------------------------------------------

/// Set contrast control. Followed by one operand byte (0–255).
pub const SET_CONTRAST: u8 = 0x81;

/// Resume display output from GDDRAM contents.
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;

/// Force every pixel on, ignoring GDDRAM.
pub const DISPLAY_ALL_ON: u8 = 0xA5;

/// Normal display: a set GDDRAM bit lights the pixel.
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverted display: a clear GDDRAM bit lights the pixel.
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Display off (sleep mode).
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on.
pub const DISPLAY_ON: u8 = 0xAF;

// ---------------------------------------------------------------------------
// Scrolling commands
// ---------------------------------------------------------------------------

pub const RIGHT_HORIZONTAL_SCROLL: u8 = 0x26;
pub const LEFT_HORIZONTAL_SCROLL: u8 = 0x27;
pub const VERTICAL_RIGHT_HORIZONTAL_SCROLL: u8 = 0x29;
pub const VERTICAL_LEFT_HORIZONTAL_SCROLL: u8 = 0x2A;

/// Stop scrolling. GDDRAM must be rewritten after this command.
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

/// Start scrolling with the most recently configured scroll parameters.
pub const ACTIVATE_SCROLL: u8 = 0x2F;

/// Set vertical scroll area. Followed by fixed-row and scroll-row counts.
pub const SET_VERTICAL_SCROLL_AREA: u8 = 0xA3;

// ---------------------------------------------------------------------------
// Addressing commands
// ---------------------------------------------------------------------------

/// Lower column start nibble (page addressing mode only). Low 4 bits = nibble.
pub const SET_LOW_COLUMN: u8 = 0x00;

/// Higher column start nibble (page addressing mode only). Low 4 bits = nibble.
pub const SET_HIGH_COLUMN: u8 = 0x10;

/// Set memory addressing mode. Followed by the mode byte.
pub const MEMORY_MODE: u8 = 0x20;

/// Set column address window. Followed by start and end column.
pub const SET_COLUMN_ADDR: u8 = 0x21;

/// Set page address window. Followed by start and end page.
pub const SET_PAGE_ADDR: u8 = 0x22;

/// Page start address (page addressing mode only). Low 3 bits = page.
pub const SET_PAGE_START_ADDR: u8 = 0xB0;

// ---------------------------------------------------------------------------
// Hardware configuration commands
// ---------------------------------------------------------------------------

/// Display start line. Low 6 bits = line.
pub const SET_START_LINE: u8 = 0x40;

/// Segment remap. Bit 0 maps column 127 to SEG0.
pub const SEGMENT_REMAP: u8 = 0xA0;

/// Set multiplex ratio. Followed by `rows - 1`.
pub const SET_MULTIPLEX: u8 = 0xA8;

/// COM output scan direction: COM0 → COM[N-1].
pub const COM_SCAN_INC: u8 = 0xC0;

/// COM output scan direction: COM[N-1] → COM0.
pub const COM_SCAN_DEC: u8 = 0xC8;

/// Vertical display offset. Followed by the offset in rows.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// COM pins hardware configuration. Followed by the configuration byte.
pub const SET_COM_PINS: u8 = 0xDA;

// ---------------------------------------------------------------------------
// Timing commands
// ---------------------------------------------------------------------------

/// Display clock divide ratio / oscillator frequency. Followed by
/// `(freq << 4) | div`.
pub const SET_DISPLAY_CLOCK_DIV: u8 = 0xD5;

/// Pre-charge period. Followed by `(phase2 << 4) | phase1`.
pub const SET_PRECHARGE: u8 = 0xD9;

/// VCOMH deselect level. Followed by the level byte.
pub const SET_VCOM_DESELECT: u8 = 0xDB;

/// No operation.
pub const NOP: u8 = 0xE3;

// ---------------------------------------------------------------------------
// Advanced graphics commands
// ---------------------------------------------------------------------------

/// Fade out / blink. Followed by the packed mode-and-rate byte.
pub const FADE: u8 = 0x23;

/// Zoom in. Followed by 0x01 (enable) or 0x00 (disable).
pub const ZOOM: u8 = 0xD6;

// ---------------------------------------------------------------------------
// Charge pump
// ---------------------------------------------------------------------------

/// Charge pump setting. Followed by [`CHARGE_PUMP_ENABLE`] or
/// [`CHARGE_PUMP_DISABLE`].
pub const CHARGE_PUMP: u8 = 0x8D;
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;
pub const CHARGE_PUMP_DISABLE: u8 = 0x10;

// ---------------------------------------------------------------------------
// Protocol constants
// ---------------------------------------------------------------------------

/// Size of the controller's display RAM in bytes (128 × 64 / 8).
pub const MAX_GDDRAM: usize = 1024;

/// Longest single command, in bytes (the horizontal scroll setup).
pub const MAX_COMMAND_LEN: usize = 7;

/// I2C control byte preceding a command stream.
pub const I2C_COMMAND_CONTROL: u8 = 0x00;

/// I2C control byte preceding a data stream.
pub const I2C_DATA_CONTROL: u8 = 0x40;

/// Default 7-bit I2C address (SA0 pulled low).
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Alternate 7-bit I2C address (SA0 pulled high).
pub const ALTERNATE_ADDRESS: u8 = 0x3D;
