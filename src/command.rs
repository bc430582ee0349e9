//! Typed SSD1306 commands and their wire encoding.
//!
//! Every controller feature is one [`Command`] variant. [`Command::encode`]
//! turns a variant into the exact byte sequence the datasheet defines, in a
//! stack-allocated [`CommandBuffer`]. Nothing here performs I/O; the
//! [`Ssd1306`](crate::Ssd1306) session hands the encoded bytes to its
//! transport.
//!
//! Numeric operands are passed through verbatim. Only fields that share a
//! byte with an opcode (segment remap flag, start line, column nibbles,
//! page start) are masked, because an unmasked value would change the
//! opcode itself.

use heapless::Vec;

use crate::opcode::{self, MAX_COMMAND_LEN};

/// Encoded bytes of a single command (1–7 bytes).
pub type CommandBuffer = Vec<u8, MAX_COMMAND_LEN>;

// ── Parameter types ──────────────────────────────────────────────────────

/// GDDRAM addressing mode. The discriminant is the wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AddressingMode {
    /// Column pointer wraps to the next page at the end of the window.
    #[default]
    Horizontal = 0x00,
    /// Page pointer wraps to the next column at the end of the window.
    Vertical = 0x01,
    /// Column pointer wraps within the current page.
    Page = 0x02,
}

/// Panel supply configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VccState {
    /// VCC supplied externally; the internal charge pump stays off.
    External,
    /// VCC generated by the internal switch-capacitor charge pump.
    #[default]
    SwitchCap,
}

/// Scroll direction. The discriminant is the setup opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ScrollMode {
    RightHorizontal = opcode::RIGHT_HORIZONTAL_SCROLL,
    LeftHorizontal = opcode::LEFT_HORIZONTAL_SCROLL,
    VerticalRightHorizontal = opcode::VERTICAL_RIGHT_HORIZONTAL_SCROLL,
    VerticalLeftHorizontal = opcode::VERTICAL_LEFT_HORIZONTAL_SCROLL,
}

impl ScrollMode {
    /// `true` for the two modes that also scroll vertically.
    pub fn is_vertical(self) -> bool {
        matches!(
            self,
            ScrollMode::VerticalRightHorizontal | ScrollMode::VerticalLeftHorizontal
        )
    }
}

/// Time between scroll steps, in frames.
///
/// The datasheet's encoding is not monotonic; the discriminant is the
/// 3-bit wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ScrollInterval {
    Frames5 = 0b000,
    Frames64 = 0b001,
    Frames128 = 0b010,
    Frames256 = 0b011,
    Frames3 = 0b100,
    Frames4 = 0b101,
    Frames25 = 0b110,
    Frames2 = 0b111,
}

/// Fade / blink mode, bits 5:4 of the fade operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FadeMode {
    #[default]
    Disable = 0x00,
    FadeOut = 0x20,
    Blink = 0x30,
}

/// Pack a fade mode and a step length into the [`Command::Fade`] operand.
///
/// `frames` is the number of frames per contrast step; the controller
/// supports multiples of 8 from 8 to 128, so the value is rounded down to
/// that grid as `((frames - 1) / 8) & 0x0F`. Zero is treated as one.
pub fn fade_mode_and_rate(mode: FadeMode, frames: u8) -> u8 {
    let rate = (frames.saturating_sub(1) / 8) & 0x0F;
    mode as u8 | rate
}

// ── Command ──────────────────────────────────────────────────────────────

/// One SSD1306 command with its typed operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `true` = display on, `false` = sleep.
    DisplayPower(bool),
    /// `true` resumes from GDDRAM, `false` forces every pixel on.
    DisplayAllOn {
        resume_from_ram: bool,
    },
    DisplayInvert(bool),
    /// Only the low nibble of `div` is used; `freq` is shifted into the
    /// high nibble and truncated.
    DisplayClockDiv {
        div: u8,
        freq: u8,
    },
    DisplayOffset(u8),
    Multiplex(u8),
    ChargePump(VccState),
    Precharge(u8),
    ComPins(u8),
    Contrast(u8),
    MemoryMode(AddressingMode),
    SegmentRemap(bool),
    LowColumn(u8),
    HighColumn(u8),
    ColumnAddress {
        start: u8,
        end: u8,
    },
    PageAddress {
        start: u8,
        end: u8,
    },
    PageStartAddress(u8),
    VcomDeselect(u8),
    /// `true` scans COM0 → COM[N-1], `false` scans COM[N-1] → COM0.
    ComScanDirection {
        increment: bool,
    },
    StartLine(u8),
    /// Pre-packed operand, see [`fade_mode_and_rate`].
    Fade(u8),
    Zoom(bool),
    Nop,
    ActivateScroll,
    DeactivateScroll,
    VerticalScrollArea {
        fixed_rows: u8,
        scroll_rows: u8,
    },
    HorizontalScroll {
        mode: ScrollMode,
        start_page: u8,
        stop_page: u8,
        interval: ScrollInterval,
    },
    VerticalHorizontalScroll {
        mode: ScrollMode,
        start_page: u8,
        stop_page: u8,
        interval: ScrollInterval,
    },
}

impl Command {
    /// Encode into the datasheet byte sequence.
    pub fn encode(&self) -> CommandBuffer {
        match *self {
            Command::DisplayPower(on) => bytes([if on {
                opcode::DISPLAY_ON
            } else {
                opcode::DISPLAY_OFF
            }]),
            Command::DisplayAllOn { resume_from_ram } => bytes([if resume_from_ram {
                opcode::DISPLAY_ALL_ON_RESUME
            } else {
                opcode::DISPLAY_ALL_ON
            }]),
            Command::DisplayInvert(inverted) => bytes([if inverted {
                opcode::INVERT_DISPLAY
            } else {
                opcode::NORMAL_DISPLAY
            }]),
            Command::DisplayClockDiv { div, freq } => {
                bytes([opcode::SET_DISPLAY_CLOCK_DIV, (freq << 4) | (div & 0x0F)])
            }
            Command::DisplayOffset(offset) => bytes([opcode::SET_DISPLAY_OFFSET, offset]),
            Command::Multiplex(mux) => bytes([opcode::SET_MULTIPLEX, mux]),
            Command::ChargePump(vcc) => bytes([
                opcode::CHARGE_PUMP,
                match vcc {
                    VccState::SwitchCap => opcode::CHARGE_PUMP_ENABLE,
                    VccState::External => opcode::CHARGE_PUMP_DISABLE,
                },
            ]),
            Command::Precharge(period) => bytes([opcode::SET_PRECHARGE, period]),
            Command::ComPins(config) => bytes([opcode::SET_COM_PINS, config]),
            Command::Contrast(value) => bytes([opcode::SET_CONTRAST, value]),
            Command::MemoryMode(mode) => bytes([opcode::MEMORY_MODE, mode as u8]),
            Command::SegmentRemap(remap) => bytes([opcode::SEGMENT_REMAP | remap as u8]),
            Command::LowColumn(column) => bytes([opcode::SET_LOW_COLUMN | (column & 0x0F)]),
            Command::HighColumn(column) => bytes([opcode::SET_HIGH_COLUMN | (column & 0x0F)]),
            Command::ColumnAddress { start, end } => bytes([opcode::SET_COLUMN_ADDR, start, end]),
            Command::PageAddress { start, end } => bytes([opcode::SET_PAGE_ADDR, start, end]),
            Command::PageStartAddress(page) => bytes([opcode::SET_PAGE_START_ADDR | (page & 0x07)]),
            Command::VcomDeselect(level) => bytes([opcode::SET_VCOM_DESELECT, level]),
            Command::ComScanDirection { increment } => bytes([if increment {
                opcode::COM_SCAN_INC
            } else {
                opcode::COM_SCAN_DEC
            }]),
            Command::StartLine(line) => bytes([opcode::SET_START_LINE | (line & 0x3F)]),
            Command::Fade(mode_and_rate) => bytes([opcode::FADE, mode_and_rate]),
            Command::Zoom(enable) => bytes([opcode::ZOOM, enable as u8]),
            Command::Nop => bytes([opcode::NOP]),
            Command::ActivateScroll => bytes([opcode::ACTIVATE_SCROLL]),
            Command::DeactivateScroll => bytes([opcode::DEACTIVATE_SCROLL]),
            Command::VerticalScrollArea {
                fixed_rows,
                scroll_rows,
            } => bytes([opcode::SET_VERTICAL_SCROLL_AREA, fixed_rows, scroll_rows]),
            Command::HorizontalScroll {
                mode,
                start_page,
                stop_page,
                interval,
            } => bytes([
                mode as u8,
                0x00,
                start_page,
                interval as u8,
                stop_page,
                0x00,
                0xFF,
            ]),
            // Trailing byte is the vertical offset per frame (one row).
            Command::VerticalHorizontalScroll {
                mode,
                start_page,
                stop_page,
                interval,
            } => bytes([
                mode as u8,
                0x00,
                start_page,
                interval as u8,
                stop_page,
                0x01,
            ]),
        }
    }
}

/// Build a [`CommandBuffer`] from a fixed-size array.
///
/// The length bound is checked at compile time, so collecting never
/// overflows the buffer.
fn bytes<const N: usize>(array: [u8; N]) -> CommandBuffer {
    const { assert!(N > 0 && N <= MAX_COMMAND_LEN) };
    array.into_iter().collect()
}

// ── Tests ────────────────────────────────────────────────────────────────
