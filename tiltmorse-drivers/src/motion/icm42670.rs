//! ICM-42670-P 6-axis IMU (I2C)
//!
//! Only what the messenger needs: identity check, both sensors in
//! low-noise mode and a burst read of temperature, accel and gyro.
//!
//! # Register layout
//!
//! Data registers are big-endian pairs starting at TEMP_DATA1:
//! temp, accel x/y/z, gyro x/y/z (14 bytes).

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use tiltmorse_core::traits::{MotionSample, MotionSource, SensorError};

/// Address with AD0 pulled high
pub const DEFAULT_ADDRESS: u8 = 0x69;

/// ICM-42670-P register addresses
pub mod reg {
    /// First data register (temperature high byte)
    pub const TEMP_DATA1: u8 = 0x09;
    /// Power management (sensor modes)
    pub const PWR_MGMT0: u8 = 0x1F;
    /// Gyro full scale and output data rate
    pub const GYRO_CONFIG0: u8 = 0x20;
    /// Accel full scale and output data rate
    pub const ACCEL_CONFIG0: u8 = 0x21;
    /// Device identity
    pub const WHO_AM_I: u8 = 0x75;
}

/// WHO_AM_I value of the ICM-42670-P
const DEVICE_ID: u8 = 0x67;

/// Gyro and accel in low-noise mode
const PWR_LOW_NOISE: u8 = 0x0F;
/// ±250 dps, 100 Hz
const GYRO_250DPS_100HZ: u8 = (0b11 << 5) | 0x09;
/// ±4 g, 100 Hz
const ACCEL_4G_100HZ: u8 = (0b10 << 5) | 0x09;

const GYRO_LSB_PER_DPS: f32 = 131.0;
const ACCEL_LSB_PER_G: f32 = 8192.0;
const TEMP_LSB_PER_C: f32 = 128.0;
const TEMP_OFFSET_C: f32 = 25.0;

/// Gyro needs 45 ms after leaving off mode before data is valid
const STARTUP_MS: u32 = 45;

/// ICM-42670-P driver
pub struct Icm42670<I2C> {
    i2c: I2C,
    address: u8,
    ready: bool,
}

impl<I2C: I2c> Icm42670<I2C> {
    /// Create a driver at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            ready: false,
        }
    }

    /// Verify the identity and start both sensors
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), SensorError> {
        let mut id = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg::WHO_AM_I], &mut id)
            .map_err(|_| SensorError::Bus)?;
        if id[0] != DEVICE_ID {
            return Err(SensorError::NotDetected);
        }

        self.write_register(reg::GYRO_CONFIG0, GYRO_250DPS_100HZ)?;
        self.write_register(reg::ACCEL_CONFIG0, ACCEL_4G_100HZ)?;
        self.write_register(reg::PWR_MGMT0, PWR_LOW_NOISE)?;
        delay.delay_ms(STARTUP_MS);

        self.ready = true;
        Ok(())
    }

    /// Check if `init` succeeded
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), SensorError> {
        self.i2c
            .write(self.address, &[register, value])
            .map_err(|_| SensorError::Bus)
    }
}

fn word(raw: &[u8], index: usize) -> f32 {
    f32::from(i16::from_be_bytes([raw[index * 2], raw[index * 2 + 1]]))
}

/// Convert a 14-byte burst into physical units
pub fn decode(raw: &[u8; 14]) -> MotionSample {
    MotionSample {
        temp_c: word(raw, 0) / TEMP_LSB_PER_C + TEMP_OFFSET_C,
        accel: [
            word(raw, 1) / ACCEL_LSB_PER_G,
            word(raw, 2) / ACCEL_LSB_PER_G,
            word(raw, 3) / ACCEL_LSB_PER_G,
        ],
        gyro: [
            word(raw, 4) / GYRO_LSB_PER_DPS,
            word(raw, 5) / GYRO_LSB_PER_DPS,
            word(raw, 6) / GYRO_LSB_PER_DPS,
        ],
    }
}

impl<I2C: I2c> MotionSource for Icm42670<I2C> {
    fn read(&mut self) -> Result<MotionSample, SensorError> {
        if !self.ready {
            return Err(SensorError::NotInitialized);
        }
        let mut raw = [0u8; 14];
        self.i2c
            .write_read(self.address, &[reg::TEMP_DATA1], &mut raw)
            .map_err(|_| SensorError::Bus)?;
        Ok(decode(&raw))
    }
}
