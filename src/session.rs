//! Controller session: one method per SSD1306 feature.
//!
//! [`Ssd1306`] owns (or borrows, via `&mut T`) a [`Transport`] and turns
//! each method call into exactly one transfer. Multi-command helpers
//! ([`default_init`](Ssd1306::default_init),
//! [`start_scroll`](Ssd1306::start_scroll)) stop at the first transport
//! failure.

use crate::command::{AddressingMode, Command, ScrollInterval, ScrollMode, VccState};
use crate::error::Error;
use crate::opcode::MAX_GDDRAM;
use crate::profile::{init_sequence, InitConfig, ScreenVariant};
use crate::transport::{Stream, Transport};

/// Whether the default initialisation sequence has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    #[default]
    Uninitialized,
    Displaying,
}

/// Blocking driver session for one SSD1306 controller.
///
/// Exactly one session should drive a given panel at a time. The session
/// performs no locking; share it across contexts only behind an external
/// mutex.
///
/// # Lifecycle
///
/// 1. [`Ssd1306::new()`] — wraps the transport, no bus traffic.
/// 2. [`Ssd1306::default_init()`] (or [`init()`](Self::init)) — sends the
///    power-up sequence and switches the panel on.
/// 3. [`Ssd1306::draw()`] and any individual command, in any order.
///
/// Operations are not refused before initialisation; [`state()`](Self::state)
/// only reports progress.
///
/// # Example
///
/// ```no_run
/// use ssd1306_cmd::{AddressingMode, InterfaceTransport, ScreenVariant, Ssd1306, VccState};
///
/// # fn example(i2c: impl embedded_hal::i2c::I2c) {
/// let mut oled = Ssd1306::new(InterfaceTransport::i2c(i2c, 0x3C));
/// oled.default_init(
///     ScreenVariant::Size128x32,
///     VccState::SwitchCap,
///     AddressingMode::Horizontal,
/// )
/// .unwrap();
/// oled.draw(&[0xAA; 512]).unwrap();
/// oled.display_invert(true).unwrap();
/// # }
/// ```
pub struct Ssd1306<T> {
    transport: T,
    state: SessionState,
}

impl<T> Ssd1306<T>
where
    T: Transport,
{
    /// Create a session. No bus traffic is generated.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: SessionState::Uninitialized,
        }
    }

    /// End the session and hand the transport back.
    pub fn release(self) -> T {
        self.transport
    }

    /// Current [`SessionState`].
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// `true` once [`default_init`](Self::default_init) has completed
    /// without a transport failure.
    pub fn is_initialized(&self) -> bool {
        self.state == SessionState::Displaying
    }

    // -----------------------------------------------------------------------
    // Dispatch
    // -----------------------------------------------------------------------

    /// Encode `command` and send it on the command stream.
    ///
    /// Every named operation below is a thin wrapper over this call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the write fails.
    pub fn command(&mut self, command: Command) -> Result<(), Error<T::Error>> {
        let bytes = command.encode();

        #[cfg(feature = "defmt")]
        defmt::trace!("SSD1306 {} -> {=[u8]:#x}", command, &bytes[..]);

        self.transport.write(&bytes, Stream::Command)?;
        Ok(())
    }

    /// Send raw GDDRAM bytes on the data stream in a single transfer.
    ///
    /// Pixel packing (8 vertical pixels per byte, column-major within a
    /// page) is the caller's job. An empty buffer still produces one
    /// zero-length data transfer.
    ///
    /// # Errors
    ///
    /// * [`Error::FrameTooLarge`] if `buffer` exceeds the 1024-byte display
    ///   RAM; nothing is sent.
    /// * [`Error::Transport`] on bus failure.
    pub fn draw(&mut self, buffer: &[u8]) -> Result<(), Error<T::Error>> {
        if buffer.len() > MAX_GDDRAM {
            return Err(Error::FrameTooLarge { len: buffer.len() });
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("SSD1306 draw {} bytes", buffer.len());

        self.transport.write(buffer, Stream::Data)?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Initialisation
    // -----------------------------------------------------------------------

    /// Run the default power-up sequence for a panel.
    ///
    /// Sends the 19 commands of [`init_sequence`] in order, ending with
    /// display-on. On a transport failure the remaining commands are
    /// skipped, the error is returned and the session stays
    /// [`Uninitialized`](SessionState::Uninitialized).
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::Transport`] encountered; commands after
    /// the failing one are never sent.
    pub fn default_init(
        &mut self,
        variant: ScreenVariant,
        vcc: VccState,
        addressing: AddressingMode,
    ) -> Result<(), Error<T::Error>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1306 init: {} {} {}", variant, vcc, addressing);

        self.state = SessionState::Uninitialized;

        for (_step, command) in init_sequence(variant, vcc, addressing)
            .into_iter()
            .enumerate()
        {
            if let Err(e) = self.command(command) {
                #[cfg(feature = "defmt")]
                defmt::warn!("SSD1306 init aborted at step {}", _step);
                return Err(e);
            }
        }

        self.state = SessionState::Displaying;

        #[cfg(feature = "defmt")]
        defmt::info!("SSD1306 displaying");

        Ok(())
    }

    /// [`default_init`](Self::default_init) driven by an [`InitConfig`].
    pub fn init(&mut self, config: &InitConfig) -> Result<(), Error<T::Error>> {
        self.default_init(config.variant, config.vcc, config.addressing)
    }

    // -----------------------------------------------------------------------
    // Fundamental commands
    // -----------------------------------------------------------------------
    //
    // Each single-command method fails only with `Error::Transport`.

    /// Switch the panel on (`true`) or into sleep (`false`).
    pub fn display_power(&mut self, on: bool) -> Result<(), Error<T::Error>> {
        self.command(Command::DisplayPower(on))
    }

    /// `true` shows GDDRAM contents, `false` lights every pixel.
    pub fn display_all_on(&mut self, resume_from_ram: bool) -> Result<(), Error<T::Error>> {
        self.command(Command::DisplayAllOn { resume_from_ram })
    }

    /// `true` shows GDDRAM bits inverted (a 0 bit lights the pixel).
    pub fn display_invert(&mut self, inverted: bool) -> Result<(), Error<T::Error>> {
        self.command(Command::DisplayInvert(inverted))
    }

    /// Set the contrast level, 0x00 (dimmest) to 0xFF.
    pub fn contrast(&mut self, value: u8) -> Result<(), Error<T::Error>> {
        self.command(Command::Contrast(value))
    }

    /// Send a no-op. Useful as a bus liveness check.
    pub fn nop(&mut self) -> Result<(), Error<T::Error>> {
        self.command(Command::Nop)
    }

    // -----------------------------------------------------------------------
    // Timing and supply
    // -----------------------------------------------------------------------

    /// Set the clock divide ratio (low nibble of `div`) and oscillator
    /// frequency (`freq`, shifted into the high nibble).
    pub fn display_clock_div(&mut self, div: u8, freq: u8) -> Result<(), Error<T::Error>> {
        self.command(Command::DisplayClockDiv { div, freq })
    }

    /// Enable the internal charge pump for [`VccState::SwitchCap`], disable
    /// it for an external supply.
    pub fn charge_pump(&mut self, vcc: VccState) -> Result<(), Error<T::Error>> {
        self.command(Command::ChargePump(vcc))
    }

    /// Pre-charge period: phase 1 in the low nibble, phase 2 in the high
    /// nibble, both in DCLK cycles.
    pub fn precharge(&mut self, period: u8) -> Result<(), Error<T::Error>> {
        self.command(Command::Precharge(period))
    }

    /// V<sub>COMH</sub> deselect level.
    pub fn vcom_deselect(&mut self, level: u8) -> Result<(), Error<T::Error>> {
        self.command(Command::VcomDeselect(level))
    }

    // -----------------------------------------------------------------------
    // Hardware configuration
    // -----------------------------------------------------------------------

    /// Vertical shift of the display start by `offset` COM lines.
    pub fn display_offset(&mut self, offset: u8) -> Result<(), Error<T::Error>> {
        self.command(Command::DisplayOffset(offset))
    }

    /// Set the multiplex ratio (`rows - 1`).
    pub fn multiplex(&mut self, mux: u8) -> Result<(), Error<T::Error>> {
        self.command(Command::Multiplex(mux))
    }

    /// COM pins hardware configuration byte.
    pub fn pins(&mut self, config: u8) -> Result<(), Error<T::Error>> {
        self.command(Command::ComPins(config))
    }

    /// `true` maps column 127 to SEG0 (horizontal mirror).
    pub fn segment_remap(&mut self, remap: bool) -> Result<(), Error<T::Error>> {
        self.command(Command::SegmentRemap(remap))
    }

    /// `true` scans COM0 → COM[N-1], `false` scans COM[N-1] → COM0.
    pub fn com_scan_dir(&mut self, increment: bool) -> Result<(), Error<T::Error>> {
        self.command(Command::ComScanDirection { increment })
    }

    /// First GDDRAM row shown at the top of the panel (0–63).
    pub fn start_line(&mut self, line: u8) -> Result<(), Error<T::Error>> {
        self.command(Command::StartLine(line))
    }

    // -----------------------------------------------------------------------
    // Addressing
    // -----------------------------------------------------------------------

    /// Select how the GDDRAM pointer advances after each data byte.
    pub fn memory_mode(&mut self, mode: AddressingMode) -> Result<(), Error<T::Error>> {
        self.command(Command::MemoryMode(mode))
    }

    /// Lower column start nibble, page addressing mode only.
    pub fn low_column(&mut self, column: u8) -> Result<(), Error<T::Error>> {
        self.command(Command::LowColumn(column))
    }

    /// Higher column start nibble, page addressing mode only.
    pub fn high_column(&mut self, column: u8) -> Result<(), Error<T::Error>> {
        self.command(Command::HighColumn(column))
    }

    /// Column window for horizontal and vertical addressing.
    pub fn column_addr(&mut self, start: u8, end: u8) -> Result<(), Error<T::Error>> {
        self.command(Command::ColumnAddress { start, end })
    }

    /// Page window for horizontal and vertical addressing.
    pub fn page_addr(&mut self, start: u8, end: u8) -> Result<(), Error<T::Error>> {
        self.command(Command::PageAddress { start, end })
    }

    /// Page start address, page addressing mode only.
    pub fn page_start_addr(&mut self, page: u8) -> Result<(), Error<T::Error>> {
        self.command(Command::PageStartAddress(page))
    }

    // -----------------------------------------------------------------------
    // Advanced graphics
    // -----------------------------------------------------------------------

    /// Fade or blink. `mode_and_rate` is sent as-is; build it with
    /// [`fade_mode_and_rate`](crate::fade_mode_and_rate).
    pub fn fade(&mut self, mode_and_rate: u8) -> Result<(), Error<T::Error>> {
        self.command(Command::Fade(mode_and_rate))
    }

    /// Double the row height (zoom in).
    pub fn zoom(&mut self, enable: bool) -> Result<(), Error<T::Error>> {
        self.command(Command::Zoom(enable))
    }

    // -----------------------------------------------------------------------
    // Scrolling
    // -----------------------------------------------------------------------

    /// Configure a horizontal scroll. Takes effect on
    /// [`activate_scroll`](Self::activate_scroll).
    pub fn horizontal_scroll(
        &mut self,
        mode: ScrollMode,
        start_page: u8,
        stop_page: u8,
        interval: ScrollInterval,
    ) -> Result<(), Error<T::Error>> {
        self.command(Command::HorizontalScroll {
            mode,
            start_page,
            stop_page,
            interval,
        })
    }

    /// Configure a combined vertical and horizontal scroll (one row per
    /// step). Takes effect on [`activate_scroll`](Self::activate_scroll).
    pub fn vertical_horizontal_scroll(
        &mut self,
        mode: ScrollMode,
        start_page: u8,
        stop_page: u8,
        interval: ScrollInterval,
    ) -> Result<(), Error<T::Error>> {
        self.command(Command::VerticalHorizontalScroll {
            mode,
            start_page,
            stop_page,
            interval,
        })
    }

    /// Rows `0..fixed_rows` stay put; the next `scroll_rows` rows scroll
    /// vertically.
    pub fn vertical_scroll_area(
        &mut self,
        fixed_rows: u8,
        scroll_rows: u8,
    ) -> Result<(), Error<T::Error>> {
        self.command(Command::VerticalScrollArea {
            fixed_rows,
            scroll_rows,
        })
    }

    /// Start the scroll configured by the last scroll setup command.
    pub fn activate_scroll(&mut self) -> Result<(), Error<T::Error>> {
        self.command(Command::ActivateScroll)
    }

    /// Stop scrolling. GDDRAM contents are undefined afterwards and must be
    /// redrawn.
    pub fn stop_scroll(&mut self) -> Result<(), Error<T::Error>> {
        self.command(Command::DeactivateScroll)
    }

    /// Configure and start a scroll in one call.
    ///
    /// Horizontal modes send the scroll setup and activate it. Vertical
    /// modes first make all `rows` rows of the panel the scroll area.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::Transport`] encountered; the scroll is not
    /// activated if any setup command fails.
    pub fn start_scroll(
        &mut self,
        mode: ScrollMode,
        start_page: u8,
        stop_page: u8,
        interval: ScrollInterval,
        rows: u8,
    ) -> Result<(), Error<T::Error>> {
        if mode.is_vertical() {
            self.vertical_scroll_area(0, rows)?;
            self.vertical_horizontal_scroll(mode, start_page, stop_page, interval)?;
        } else {
            self.horizontal_scroll(mode, start_page, stop_page, interval)?;
        }
        self.activate_scroll()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct BusFault;

    // Records every transfer; optionally fails the n-th one (0-based).
    #[derive(Default)]
    struct Recorder {
        log: Vec<(Stream, Vec<u8>)>,
        fail_at: Option<usize>,
        attempts: usize,
    }

    impl Recorder {
        fn failing_at(n: usize) -> Self {
            Self {
                fail_at: Some(n),
                ..Self::default()
            }
        }

        fn commands(&self) -> Vec<Vec<u8>> {
            self.log
                .iter()
                .filter(|(s, _)| *s == Stream::Command)
                .map(|(_, b)| b.clone())
                .collect()
        }
    }

    impl Transport for Recorder {
        type Error = BusFault;

        fn write(&mut self, bytes: &[u8], stream: Stream) -> Result<(), BusFault> {
            let attempt = self.attempts;
            self.attempts += 1;
            if self.fail_at == Some(attempt) {
                return Err(BusFault);
            }
            self.log.push((stream, bytes.to_vec()));
            Ok(())
        }
    }

    fn sent<F>(op: F) -> Vec<(Stream, Vec<u8>)>
    where
        F: FnOnce(&mut Ssd1306<&mut Recorder>) -> Result<(), Error<BusFault>>,
    {
        let mut recorder = Recorder::default();
        let mut oled = Ssd1306::new(&mut recorder);
        op(&mut oled).unwrap();
        recorder.log
    }

    fn one_command(bytes: &[u8]) -> Vec<(Stream, Vec<u8>)> {
        vec![(Stream::Command, bytes.to_vec())]
    }

    // ── Initialisation ───────────────────────────────────────────────

    #[test]
    fn default_init_128x64_switchcap_horizontal() {
        let mut recorder = Recorder::default();
        let mut oled = Ssd1306::new(&mut recorder);
        oled.default_init(
            ScreenVariant::Size128x64,
            VccState::SwitchCap,
            AddressingMode::Horizontal,
        )
        .unwrap();
        assert_eq!(oled.state(), SessionState::Displaying);

        let expected: [&[u8]; 19] = [
            &[0xAE],       // power off
            &[0xA8, 63],   // multiplex
            &[0xD3, 0x00], // offset
            &[0x40],       // start line 0
            &[0xA1],       // segment remap
            &[0xC8],       // COM scan direction
            &[0xDA, 0x12], // COM pins
            &[0x81, 0xCF], // contrast
            &[0xD5, 0x80], // clock divider
            &[0x8D, 0x14], // charge pump
            &[0x20, 0x00], // horizontal addressing
            &[0xD9, 0xF1], // precharge
            &[0xDB, 0x40], // VCOM deselect
            &[0xA4],       // resume from RAM
            &[0xA6],       // normal display
            &[0x2E],       // stop scroll
            &[0x23, 0x00], // fade disabled
            &[0xD6, 0x00], // zoom off
            &[0xAF],       // power on
        ];

        assert_eq!(recorder.log.len(), expected.len());
        for (i, ((stream, bytes), want)) in recorder.log.iter().zip(expected).enumerate() {
            assert_eq!(*stream, Stream::Command, "step {} stream", i);
            assert_eq!(bytes.as_slice(), want, "step {} bytes", i);
        }
    }

    #[test]
    fn default_init_128x32_ignores_supply_for_profile_bytes() {
        for vcc in [VccState::External, VccState::SwitchCap] {
            let mut recorder = Recorder::default();
            Ssd1306::new(&mut recorder)
                .default_init(ScreenVariant::Size128x32, vcc, AddressingMode::Horizontal)
                .unwrap();
            let commands = recorder.commands();
            assert_eq!(commands[1], [0xA8, 31]);
            assert_eq!(commands[6], [0xDA, 0x02]);
            assert_eq!(commands[7], [0x81, 0x8F]);
        }
    }

    #[test]
    fn default_init_128x64_external_supply() {
        let mut recorder = Recorder::default();
        Ssd1306::new(&mut recorder)
            .default_init(
                ScreenVariant::Size128x64,
                VccState::External,
                AddressingMode::Vertical,
            )
            .unwrap();
        let commands = recorder.commands();
        assert_eq!(commands[7], [0x81, 0x9F]);
        assert_eq!(commands[9], [0x8D, 0x10]);
        assert_eq!(commands[10], [0x20, 0x01]);
        assert_eq!(commands[11], [0xD9, 0x22]);
    }

    #[test]
    fn default_init_96x16() {
        let mut recorder = Recorder::default();
        Ssd1306::new(&mut recorder)
            .default_init(
                ScreenVariant::Size96x16,
                VccState::SwitchCap,
                AddressingMode::Page,
            )
            .unwrap();
        let commands = recorder.commands();
        assert_eq!(commands.len(), 19);
        assert_eq!(commands[1], [0xA8, 15]);
        assert_eq!(commands[6], [0xDA, 0x02]);
        assert_eq!(commands[7], [0x81, 0xAF]);
        assert_eq!(commands[10], [0x20, 0x02]);
    }

    #[test]
    fn init_uses_config() {
        let mut recorder = Recorder::default();
        let mut oled = Ssd1306::new(&mut recorder);
        oled.init(&InitConfig::default()).unwrap();
        assert!(oled.is_initialized());
        assert_eq!(recorder.commands()[7], [0x81, 0xCF]);
    }

    #[test]
    fn default_init_stops_at_transport_failure() {
        let mut recorder = Recorder::failing_at(4);
        let mut oled = Ssd1306::new(&mut recorder);
        let result = oled.default_init(
            ScreenVariant::Size128x64,
            VccState::SwitchCap,
            AddressingMode::Horizontal,
        );
        assert_eq!(result, Err(Error::Transport(BusFault)));
        assert_eq!(oled.state(), SessionState::Uninitialized);

        // Four successful writes, one failed attempt, nothing after it.
        assert_eq!(recorder.log.len(), 4);
        assert_eq!(recorder.attempts, 5);
    }

    #[test]
    fn session_starts_uninitialized() {
        let oled = Ssd1306::new(Recorder::default());
        assert_eq!(oled.state(), SessionState::Uninitialized);
        assert!(!oled.is_initialized());
        assert!(oled.release().log.is_empty());
    }

    // ── Draw ─────────────────────────────────────────────────────────

    #[test]
    fn draw_sends_data_stream() {
        let frame = [0xAAu8; 512];
        let log = sent(|oled| oled.draw(&frame));
        assert_eq!(log, [(Stream::Data, frame.to_vec())]);
    }

    #[test]
    fn draw_empty_buffer_is_zero_length_data() {
        let log = sent(|oled| oled.draw(&[]));
        assert_eq!(log, [(Stream::Data, Vec::new())]);
    }

    #[test]
    fn draw_full_gddram() {
        let frame = [0x0Fu8; MAX_GDDRAM];
        let log = sent(|oled| oled.draw(&frame));
        assert_eq!(log[0].1.len(), MAX_GDDRAM);
    }

    #[test]
    fn draw_rejects_oversized_frame() {
        let mut recorder = Recorder::default();
        let mut oled = Ssd1306::new(&mut recorder);
        let frame = [0u8; MAX_GDDRAM + 1];
        assert_eq!(
            oled.draw(&frame),
            Err(Error::FrameTooLarge {
                len: MAX_GDDRAM + 1
            })
        );
        assert!(recorder.log.is_empty());
        assert_eq!(recorder.attempts, 0);
    }

    #[test]
    fn draw_does_not_require_init() {
        let log = sent(|oled| oled.draw(&[1, 2, 3]));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn draw_reports_transport_failure() {
        let mut oled = Ssd1306::new(Recorder::failing_at(0));
        assert_eq!(oled.draw(&[0xFF]), Err(Error::Transport(BusFault)));
    }

    // ── Single commands ──────────────────────────────────────────────

    #[test]
    fn each_operation_is_one_command_dispatch() {
        assert_eq!(sent(|o| o.display_power(true)), one_command(&[0xAF]));
        assert_eq!(sent(|o| o.display_power(false)), one_command(&[0xAE]));
        assert_eq!(sent(|o| o.display_all_on(false)), one_command(&[0xA5]));
        assert_eq!(sent(|o| o.display_invert(true)), one_command(&[0xA7]));
        assert_eq!(sent(|o| o.contrast(0x42)), one_command(&[0x81, 0x42]));
        assert_eq!(sent(|o| o.nop()), one_command(&[0xE3]));
        assert_eq!(
            sent(|o| o.display_clock_div(0x1F, 0x0A)),
            one_command(&[0xD5, 0xAF])
        );
        assert_eq!(
            sent(|o| o.charge_pump(VccState::SwitchCap)),
            one_command(&[0x8D, 0x14])
        );
        assert_eq!(sent(|o| o.precharge(0x22)), one_command(&[0xD9, 0x22]));
        assert_eq!(sent(|o| o.vcom_deselect(0x30)), one_command(&[0xDB, 0x30]));
        assert_eq!(sent(|o| o.display_offset(8)), one_command(&[0xD3, 8]));
        assert_eq!(sent(|o| o.multiplex(31)), one_command(&[0xA8, 31]));
        assert_eq!(sent(|o| o.pins(0x12)), one_command(&[0xDA, 0x12]));
        assert_eq!(sent(|o| o.segment_remap(false)), one_command(&[0xA0]));
        assert_eq!(sent(|o| o.com_scan_dir(true)), one_command(&[0xC0]));
        assert_eq!(sent(|o| o.start_line(5)), one_command(&[0x45]));
        assert_eq!(
            sent(|o| o.memory_mode(AddressingMode::Page)),
            one_command(&[0x20, 0x02])
        );
        assert_eq!(sent(|o| o.low_column(0x04)), one_command(&[0x04]));
        assert_eq!(sent(|o| o.high_column(0x02)), one_command(&[0x12]));
        assert_eq!(
            sent(|o| o.column_addr(0, 127)),
            one_command(&[0x21, 0, 127])
        );
        assert_eq!(sent(|o| o.page_addr(0, 7)), one_command(&[0x22, 0, 7]));
        assert_eq!(sent(|o| o.page_start_addr(6)), one_command(&[0xB6]));
        assert_eq!(sent(|o| o.fade(0x21)), one_command(&[0x23, 0x21]));
        assert_eq!(sent(|o| o.zoom(true)), one_command(&[0xD6, 0x01]));
        assert_eq!(sent(|o| o.activate_scroll()), one_command(&[0x2F]));
        assert_eq!(sent(|o| o.stop_scroll()), one_command(&[0x2E]));
        assert_eq!(
            sent(|o| o.vertical_scroll_area(0, 64)),
            one_command(&[0xA3, 0, 64])
        );
    }

    #[test]
    fn command_passes_typed_command_through() {
        assert_eq!(
            sent(|o| o.command(Command::Contrast(0x01))),
            one_command(&[0x81, 0x01])
        );
    }

    // ── Scrolling ────────────────────────────────────────────────────

    #[test]
    fn horizontal_scroll_right_pages_0_to_7() {
        let log = sent(|o| {
            o.horizontal_scroll(ScrollMode::RightHorizontal, 0, 7, ScrollInterval::Frames5)
        });
        assert_eq!(
            log,
            one_command(&[0x26, 0x00, 0x00, 0x00, 0x07, 0x00, 0xFF])
        );
    }

    #[test]
    fn vertical_horizontal_scroll_is_six_bytes() {
        let log = sent(|o| {
            o.vertical_horizontal_scroll(
                ScrollMode::VerticalRightHorizontal,
                0,
                3,
                ScrollInterval::Frames64,
            )
        });
        assert_eq!(log, one_command(&[0x29, 0x00, 0x00, 0x01, 0x03, 0x01]));
    }

    #[test]
    fn start_scroll_horizontal() {
        let log = sent(|o| {
            o.start_scroll(
                ScrollMode::LeftHorizontal,
                0,
                3,
                ScrollInterval::Frames2,
                32,
            )
        });
        assert_eq!(
            log,
            [
                (Stream::Command, vec![0x27, 0x00, 0x00, 0x07, 0x03, 0x00, 0xFF]),
                (Stream::Command, vec![0x2F]),
            ]
        );
    }

    #[test]
    fn start_scroll_vertical_sets_area_first() {
        let log = sent(|o| {
            o.start_scroll(
                ScrollMode::VerticalLeftHorizontal,
                0,
                7,
                ScrollInterval::Frames3,
                64,
            )
        });
        assert_eq!(
            log,
            [
                (Stream::Command, vec![0xA3, 0x00, 64]),
                (Stream::Command, vec![0x2A, 0x00, 0x00, 0x04, 0x07, 0x01]),
                (Stream::Command, vec![0x2F]),
            ]
        );
    }

    #[test]
    fn start_scroll_stops_at_failure() {
        let mut recorder = Recorder::failing_at(1);
        let result = Ssd1306::new(&mut recorder).start_scroll(
            ScrollMode::VerticalRightHorizontal,
            0,
            7,
            ScrollInterval::Frames5,
            64,
        );
        assert_eq!(result, Err(Error::Transport(BusFault)));
        assert_eq!(recorder.log.len(), 1);
        assert_eq!(recorder.attempts, 2);
    }
}
