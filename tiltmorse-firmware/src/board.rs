//! Board wiring
//!
//! Pin assignments (fixed in `main`):
//!
//! | Function          | GPIO |
//! |-------------------|------|
//! | UART0 TX / RX     | 0/1  |
//! | Word button       | 2    |
//! | I2C0 SDA / SCL    | 12/13|
//! | Status LED        | 14   |
//! | Buzzer            | 17   |
//! | Character button  | 22   |

use core::cell::RefCell;

use embassy_embedded_hal::shared_bus::blocking::i2c::I2cDevice;
use embassy_rp::gpio::Output;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_rp::uart::{BufferedUartRx, BufferedUartTx};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex as BlockingMutex;
use embassy_time::Delay;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::Ssd1306;

use tiltmorse_drivers::display::GraphicsDisplay;
use tiltmorse_drivers::feedback::{Buzzer, StatusLed};
use tiltmorse_drivers::link::{SerialRx, SerialTx};
use tiltmorse_drivers::motion::Icm42670;

/// IMU and OLED both answer at 400 kHz
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Bus owner handed out as `I2cDevice`s
pub type I2cBus = BlockingMutex<CriticalSectionRawMutex, RefCell<I2c<'static, I2C0, Blocking>>>;
pub type SharedI2c = I2cDevice<'static, CriticalSectionRawMutex, I2c<'static, I2C0, Blocking>>;

pub type Imu = Icm42670<SharedI2c>;
pub type Oled = GraphicsDisplay<
    Ssd1306<I2CInterface<SharedI2c>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>,
>;

pub type HostTx = SerialTx<BufferedUartTx>;
pub type HostRx = SerialRx<BufferedUartRx, Delay>;

pub type Beeper = Buzzer<Output<'static>>;
pub type Led = StatusLed<Output<'static>>;
