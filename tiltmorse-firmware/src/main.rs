//! Tiltmorse - Tilt-to-Morse Messenger Firmware
//!
//! Main firmware binary for RP2040-based boards with an IMU, two buttons,
//! a buzzer, an LED and an SSD1306 OLED.
//!
//! A message is composed by tilting the board (flat = dot, tilted = dash)
//! and pressing the character button; the word button inserts spaces and
//! three spaces finish the message. The message goes to the host over
//! UART0, the reply line comes back the same way and is paged on the OLED.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_embedded_hal::shared_bus::blocking::i2c::I2cDevice;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_sync::blocking_mutex::Mutex as BlockingMutex;
use embassy_time::{Delay, Duration};
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use tiltmorse_core::activity::{DisplayActivity, InputActivity, ReceiveActivity, TransmitActivity};
use tiltmorse_core::buttons::Button;
use tiltmorse_drivers::display::GraphicsDisplay;
use tiltmorse_drivers::feedback::{Buzzer, StatusLed};
use tiltmorse_drivers::link::{SerialRx, SerialTx};
use tiltmorse_drivers::motion::Icm42670;

use crate::board::I2cBus;

mod board;
mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

/// I2C0 is shared by the IMU and the OLED
static I2C_BUS: StaticCell<I2cBus> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Tiltmorse firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();
    config::log_summary(&config);

    // Buttons are active-high on this board
    let character_button = Input::new(p.PIN_22, Pull::Down);
    let word_button = Input::new(p.PIN_2, Pull::Down);

    // Feedback outputs
    let buzzer = Buzzer::new(Output::new(p.PIN_17, Level::Low));
    let led = StatusLed::new_active_high(Output::new(p.PIN_14, Level::Low));
    info!("Buttons and feedback initialized");

    // Shared I2C bus: IMU and OLED
    let i2c_config = {
        let mut cfg = i2c::Config::default();
        cfg.frequency = board::I2C_FREQUENCY_HZ;
        cfg
    };
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_13, p.PIN_12, i2c_config);
    let bus: &'static I2cBus = I2C_BUS.init(BlockingMutex::new(RefCell::new(i2c)));

    let mut imu = Icm42670::new(I2cDevice::new(bus));
    match imu.init(&mut Delay) {
        Ok(()) => info!("IMU initialized"),
        // Reads keep failing until a power cycle; composing still runs
        Err(e) => error!("IMU init failed: {:?}", e),
    }

    let interface = I2CDisplayInterface::new(I2cDevice::new(bus));
    let mut oled = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    if oled.init().is_err() {
        error!("OLED init failed");
    } else {
        info!("OLED initialized");
    }

    // UART0 to the host, 115200 baud default
    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 256]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, UartConfig::default());
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized for host link");

    let ticks = config.ticks;
    let input = InputActivity::new(config.input.clone(), config.tones);
    let transmit = TransmitActivity::new(config.transmit);
    let receive = ReceiveActivity::new(config.receive);
    let display = DisplayActivity::new(config.display, config.tones);

    spawner
        .spawn(tasks::button_task(character_button, Button::CharacterSelect))
        .unwrap();
    spawner
        .spawn(tasks::button_task(word_button, Button::WordSelect))
        .unwrap();
    spawner.spawn(tasks::feedback_task(buzzer, led)).unwrap();
    spawner
        .spawn(tasks::oled_task(GraphicsDisplay::new(oled)))
        .unwrap();
    spawner
        .spawn(tasks::input_task(imu, input, Duration::from_millis(ticks.input_ms.into())))
        .unwrap();
    spawner
        .spawn(tasks::transmit_task(
            SerialTx::new(tx),
            transmit,
            Duration::from_millis(ticks.transmit_ms.into()),
        ))
        .unwrap();
    spawner
        .spawn(tasks::receive_task(
            SerialRx::new(rx, Delay),
            receive,
            Duration::from_millis(ticks.receive_ms.into()),
        ))
        .unwrap();
    spawner
        .spawn(tasks::page_task(display, Duration::from_millis(ticks.display_ms.into())))
        .unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
