//! Transport capability consumed by the driver.
//!
//! The driver never touches a bus directly. Every encoded command and every
//! frame buffer goes through a single [`Transport::write`] call tagged with
//! a [`Stream`], and the transport decides how that tag reaches the
//! controller (an I2C control byte, the SPI D/C pin, ...).
//!
//! Three ways to supply one:
//!
//! - implement [`Transport`] on your own bus wrapper;
//! - pair a connection context with a write function via [`Connection`];
//! - drive a plain `embedded-hal` I2C bus with [`I2cTransport`] (one bus
//!   transaction per write);
//! - wrap any [`display_interface::WriteOnlyDataCommand`] in
//!   [`InterfaceTransport`].

use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};
use display_interface_i2c::I2CInterface;
use embedded_hal::i2c::{I2c, Operation};

use crate::opcode::{I2C_COMMAND_CONTROL, I2C_DATA_CONTROL};

/// Which controller stream a transfer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stream {
    /// Command bytes (opcodes and their operands).
    Command,
    /// Raw GDDRAM pixel payload.
    Data,
}

/// Sends tagged byte sequences to the controller.
///
/// A call must either transfer all of `bytes` or report an error; the
/// driver does not retry or split transfers.
pub trait Transport {
    /// Error reported by the underlying medium.
    type Error;

    /// Send `bytes` to the device on the given stream.
    fn write(&mut self, bytes: &[u8], stream: Stream) -> Result<(), Self::Error>;
}

impl<T> Transport for &mut T
where
    T: Transport + ?Sized,
{
    type Error = T::Error;

    fn write(&mut self, bytes: &[u8], stream: Stream) -> Result<(), Self::Error> {
        (**self).write(bytes, stream)
    }
}

// ── Connection ───────────────────────────────────────────────────────────

/// A borrowed connection context paired with a write function.
///
/// The context (bus handle, device address, chip-select state, ...) stays
/// owned by the caller; the connection only borrows it for its lifetime.
///
/// # Example
///
/// ```
/// use ssd1306_cmd::{Connection, Ssd1306, Stream};
///
/// struct Bus {
///     address: u8,
///     sent: usize,
/// }
///
/// let mut bus = Bus { address: 0x3C, sent: 0 };
/// let connection = Connection::new(&mut bus, |bus: &mut Bus, bytes: &[u8], _stream: Stream| {
///     bus.sent += bytes.len();
///     Ok::<(), ()>(())
/// });
///
/// let mut oled = Ssd1306::new(connection);
/// oled.contrast(0x7F).unwrap();
/// drop(oled);
/// assert_eq!(bus.sent, 2);
/// ```
pub struct Connection<'a, C, F> {
    context: &'a mut C,
    write: F,
}

impl<'a, C, F> Connection<'a, C, F> {
    /// Borrow `context` for the connection's lifetime; `write` receives it
    /// on every transfer.
    pub fn new(context: &'a mut C, write: F) -> Self {
        Self { context, write }
    }

    /// Shared access to the connection context.
    pub fn context(&self) -> &C {
        self.context
    }
}

impl<'a, C, F, E> Transport for Connection<'a, C, F>
where
    F: FnMut(&mut C, &[u8], Stream) -> Result<(), E>,
{
    type Error = E;

    fn write(&mut self, bytes: &[u8], stream: Stream) -> Result<(), Self::Error> {
        (self.write)(&mut *self.context, bytes, stream)
    }
}

// ── InterfaceTransport ───────────────────────────────────────────────────

/// [`Transport`] over a `display-interface` implementation.
///
/// The command stream maps to `send_commands`, the data stream to
/// `send_data`, both as [`DataFormat::U8`].
pub struct InterfaceTransport<DI> {
    interface: DI,
}

impl<DI> InterfaceTransport<DI> {
    /// Wrap an existing display interface.
    pub fn new(interface: DI) -> Self {
        Self { interface }
    }

    /// Give back the wrapped interface.
    pub fn release(self) -> DI {
        self.interface
    }
}

impl<I2C> InterfaceTransport<I2CInterface<I2C>>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Transport over an I2C bus via `display-interface-i2c`.
    ///
    /// Commands go out as one bus write prefixed with 0x00. Data is split
    /// into 16-byte chunks, each its own bus write prefixed with 0x40, and
    /// an empty data buffer sends nothing. Use [`I2cTransport`] when a
    /// frame has to arrive in a single transaction.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access).
    /// * `address` — 7-bit I2C device address (typically `0x3C` or `0x3D`).
    pub fn i2c(i2c: I2C, address: u8) -> Self {
        Self::new(I2CInterface::new(i2c, address, I2C_DATA_CONTROL))
    }
}

impl<DI> Transport for InterfaceTransport<DI>
where
    DI: WriteOnlyDataCommand,
{
    type Error = DisplayError;

    fn write(&mut self, bytes: &[u8], stream: Stream) -> Result<(), Self::Error> {
        match stream {
            Stream::Command => self.interface.send_commands(DataFormat::U8(bytes)),
            Stream::Data => self.interface.send_data(DataFormat::U8(bytes)),
        }
    }
}

// ── I2cTransport ─────────────────────────────────────────────────────────

/// [`Transport`] over a blocking `embedded-hal` I2C bus.
///
/// Each write is a single bus transaction: the control byte (0x00 for
/// commands, 0x40 for data) followed by the payload, between one START and
/// one STOP. A whole frame therefore reaches the controller in one
/// transfer, and an empty data buffer still sends the control byte.
///
/// # Example
///
/// ```no_run
/// use ssd1306_cmd::{I2cTransport, Ssd1306};
///
/// # fn example(i2c: impl embedded_hal::i2c::I2c) {
/// let mut oled = Ssd1306::new(I2cTransport::new(i2c, ssd1306_cmd::opcode::DEFAULT_ADDRESS));
/// oled.draw(&[0x00; 1024]).unwrap();
/// # }
/// ```
pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cTransport<I2C>
where
    I2C: I2c,
{
    /// Create a transport for the controller at `address`.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access).
    /// * `address` — 7-bit I2C device address (typically `0x3C` or `0x3D`).
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// 7-bit device address this transport writes to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give back the I2C peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Transport for I2cTransport<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write(&mut self, bytes: &[u8], stream: Stream) -> Result<(), Self::Error> {
        let control = match stream {
            Stream::Command => I2C_COMMAND_CONTROL,
            Stream::Data => I2C_DATA_CONTROL,
        };

        // Adjacent writes in one transaction share a single START/STOP.
        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&[control]), Operation::Write(bytes)],
        )
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
