//! Screen profiles and the default initialisation sequence.
//!
//! [`init_sequence`] is a pure function: it returns the ordered commands
//! that take a freshly reset controller to a displaying state. The
//! [`Ssd1306`](crate::Ssd1306) session dispatches them one by one in
//! [`default_init`](crate::Ssd1306::default_init).

use crate::command::{AddressingMode, Command, FadeMode, VccState};

/// Number of commands issued by [`init_sequence`].
pub const INIT_SEQUENCE_LEN: usize = 19;

// ── ScreenVariant / ScreenProfile ────────────────────────────────────────

/// Supported panel geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenVariant {
    Size128x32,
    #[default]
    Size128x64,
    Size96x16,
}

/// Fixed initialisation parameters of one panel geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScreenProfile {
    /// Multiplex ratio operand (`height - 1`).
    pub multiplex: u8,
    /// COM pins hardware configuration byte.
    pub com_pins: u8,
    /// Contrast byte used by the default init sequence.
    pub contrast: u8,
    /// Panel height in pixels.
    pub height: u8,
    /// Panel width in pixels.
    pub width: u8,
}

impl ScreenProfile {
    /// Size of one full frame in bytes (one bit per pixel).
    pub fn frame_len(&self) -> usize {
        self.width as usize * self.height as usize / 8
    }

    /// Number of 8-row GDDRAM pages covered by the panel.
    pub fn pages(&self) -> u8 {
        self.height / 8
    }
}

impl ScreenVariant {
    /// Look up the profile for this variant.
    ///
    /// Contrast depends on the supply for the 128×64 and 96×16 panels;
    /// the 128×32 panel uses the same value for both.
    pub fn profile(self, vcc: VccState) -> ScreenProfile {
        let switch_cap = vcc == VccState::SwitchCap;
        let (com_pins, contrast, height, width) = match self {
            ScreenVariant::Size128x32 => (0x02, 0x8F, 32, 128),
            ScreenVariant::Size128x64 => (0x12, if switch_cap { 0xCF } else { 0x9F }, 64, 128),
            ScreenVariant::Size96x16 => (0x02, if switch_cap { 0xAF } else { 0x10 }, 16, 96),
        };

        ScreenProfile {
            multiplex: height - 1,
            com_pins,
            contrast,
            height,
            width,
        }
    }
}

// ── InitConfig ───────────────────────────────────────────────────────────

/// Everything [`Ssd1306::init`](crate::Ssd1306::init) needs to bring a
/// panel up.
///
/// [`InitConfig::default()`] describes the common 128×64 module with the
/// internal charge pump and horizontal addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InitConfig {
    pub variant: ScreenVariant,
    pub vcc: VccState,
    pub addressing: AddressingMode,
}

impl InitConfig {
    /// Profile of the configured panel.
    pub fn profile(&self) -> ScreenProfile {
        self.variant.profile(self.vcc)
    }
}

// ── Sequence ─────────────────────────────────────────────────────────────

/// Build the default initialisation sequence.
///
/// Order matters: the display is kept off while multiplex, remap and
/// supply settings change, the charge pump is configured before
/// pre-charge, and power-on comes last.
///
/// No column/page window is programmed for any addressing mode; the
/// controller keeps its reset window (full panel in horizontal and
/// vertical mode, page 0 / column 0 in page mode).
pub fn init_sequence(
    variant: ScreenVariant,
    vcc: VccState,
    addressing: AddressingMode,
) -> [Command; INIT_SEQUENCE_LEN] {
    let profile = variant.profile(vcc);
    let switch_cap = vcc == VccState::SwitchCap;

    [
        Command::DisplayPower(false),
        Command::Multiplex(profile.multiplex),
        Command::DisplayOffset(0),
        Command::StartLine(0),
        Command::SegmentRemap(true),
        Command::ComScanDirection { increment: false },
        Command::ComPins(profile.com_pins),
        Command::Contrast(profile.contrast),
        Command::DisplayClockDiv {
            div: 0x00,
            freq: 0x08,
        },
        Command::ChargePump(vcc),
        Command::MemoryMode(addressing),
        Command::Precharge(if switch_cap { 0xF1 } else { 0x22 }),
        Command::VcomDeselect(0x40),
        Command::DisplayAllOn {
            resume_from_ram: true,
        },
        Command::DisplayInvert(false),
        Command::DeactivateScroll,
        Command::Fade(FadeMode::Disable as u8),
        Command::Zoom(false),
        Command::DisplayPower(true),
    ]
}

// ── Tests ────────────────────────────────────────────────────────────────
