//! Error types for the SSD1306 driver.

use core::fmt;

/// Errors returned by [`Ssd1306`](crate::Ssd1306) operations.
///
/// Generic over the transport's own error so bus failures reach the caller
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The transport reported a failure. In a multi-command operation the
    /// remaining commands were not sent.
    Transport(E),

    /// A frame buffer longer than the controller's display RAM was passed
    /// to [`draw`](crate::Ssd1306::draw). Nothing was sent.
    FrameTooLarge { len: usize },
}

// Allow ergonomic `?` propagation from raw transport errors.
impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::Transport(error)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "Transport error: {:?}", e),
            Error::FrameTooLarge { len } => write!(
                f,
                "Frame of {} bytes exceeds display RAM ({} bytes)",
                len,
                crate::opcode::MAX_GDDRAM
            ),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Transport(e) => defmt::write!(f, "Transport error: {}", e),
            Error::FrameTooLarge { len } => defmt::write!(f, "Frame too large: {} bytes", len),
        }
    }
}
