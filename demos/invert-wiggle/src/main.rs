//! Invert wiggle demo
//!
//! Brings up a 128×32 SSD1306 module with the default init sequence, fills
//! GDDRAM with alternating stripes and then toggles display inversion so the
//! panel appears to wiggle. Exercises the command path and a full-frame data
//! transfer over a blocking I2C bus.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes           |
//! |-----------|------------|-----------------|
//! | I2C0 SDA  | GP20       |                 |
//! | I2C0 SCL  | GP21       |                 |
//! | OLED VCC  | 3V3        |                 |
//! | OLED GND  | GND        |                 |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use ssd1306_cmd::opcode::{ALTERNATE_ADDRESS, DEFAULT_ADDRESS, MAX_GDDRAM};
use ssd1306_cmd::{AddressingMode, I2cTransport, InitConfig, ScreenVariant, Ssd1306, VccState};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

const CONFIG: InitConfig = InitConfig {
    variant: ScreenVariant::Size128x32,
    vcc: VccState::SwitchCap,
    addressing: AddressingMode::Horizontal,
};

/// Set when the module's address jumper selects 0x3D.
const ADDRESS_JUMPER: bool = false;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Invert wiggle demo starting");

    let mut config = i2c::Config::default();
    config.frequency = 400_000;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_21, p.PIN_20, config);

    let address = if ADDRESS_JUMPER {
        ALTERNATE_ADDRESS
    } else {
        DEFAULT_ADDRESS
    };
    let mut oled = Ssd1306::new(I2cTransport::new(i2c, address));

    oled.init(&CONFIG).expect("OLED init failed");

    // Alternate stripe phase on every page so the rows line up as a grid.
    let profile = CONFIG.profile();
    let width = profile.width as usize;
    let mut frame = [0u8; MAX_GDDRAM];
    for page in 0..profile.pages() as usize {
        let pattern = if page % 2 == 0 { 0xAA } else { 0x55 };
        frame[page * width..(page + 1) * width].fill(pattern);
    }
    info!("Drawing {} pages", profile.pages());
    oled.draw(&frame[..profile.frame_len()])
        .expect("OLED draw failed");

    let mut inverted = false;
    loop {
        if oled.display_invert(inverted).is_err() {
            warn!("Invert failed");
        }
        inverted = !inverted;

        Timer::after(Duration::from_millis(250)).await;
    }
}
