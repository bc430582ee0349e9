//! Blocking command driver for SSD1306 OLED controllers.
//!
//! This crate translates named controller operations (power, contrast,
//! addressing, scrolling, inversion, framebuffer transfer) into the
//! SSD1306 command byte protocol and hands each sequence to a
//! caller-supplied [`Transport`]. It contains no graphics: frame buffers
//! arrive already packed in GDDRAM layout.
//!
//! # Architecture
//!
//! - **[`opcode`]** — datasheet opcode constants.
//! - **[`command`]** — typed [`Command`]s and their byte encoding (pure).
//! - **[`profile`]** — per-panel [`ScreenProfile`]s and the ordered
//!   [`init_sequence`] (pure).
//! - **[`transport`]** — the [`Transport`] capability plus adapters for a
//!   context-and-function pair ([`Connection`]), a blocking I2C bus
//!   ([`I2cTransport`]) and `display-interface` ([`InterfaceTransport`]).
//! - **[`Ssd1306`]** — the session: one method per controller feature, one
//!   transfer per method.
//!
//! # Quick Start
//!
//! ```no_run
//! use ssd1306_cmd::{I2cTransport, InitConfig, ScreenVariant, Ssd1306};
//!
//! # fn example(i2c: impl embedded_hal::i2c::I2c) {
//! let transport = I2cTransport::new(i2c, ssd1306_cmd::opcode::DEFAULT_ADDRESS);
//! let mut oled = Ssd1306::new(transport);
//!
//! let config = InitConfig {
//!     variant: ScreenVariant::Size128x32,
//!     ..InitConfig::default()
//! };
//! oled.init(&config).unwrap();
//!
//! let frame = [0xAA; 1024];
//! oled.draw(&frame[..config.profile().frame_len()]).unwrap();
//! # }
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via `defmt` and `defmt::Format`
//!   implementations on public types.

#![cfg_attr(not(test), no_std)]

pub mod command;
pub mod error;
pub mod opcode;
pub mod profile;
pub mod session;
pub mod transport;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use command::{
    fade_mode_and_rate, AddressingMode, Command, CommandBuffer, FadeMode, ScrollInterval,
    ScrollMode, VccState,
};
pub use error::Error;
pub use profile::{init_sequence, InitConfig, ScreenProfile, ScreenVariant, INIT_SEQUENCE_LEN};
pub use session::{SessionState, Ssd1306};
pub use transport::{Connection, I2cTransport, InterfaceTransport, Stream, Transport};
