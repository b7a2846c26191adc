//! Motion sensor trait

/// Errors that can occur while sampling the IMU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Bus transaction failed
    Bus,
    /// Device did not answer with the expected identity
    NotDetected,
    /// Read attempted before the sensor was configured
    NotInitialized,
}

/// One reading of the IMU
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionSample {
    /// Acceleration in g (x, y, z)
    pub accel: [f32; 3],
    /// Rotation rate in degrees per second (x, y, z)
    pub gyro: [f32; 3],
    /// Die temperature in degrees Celsius
    pub temp_c: f32,
}

/// Trait for motion sensors
///
/// Only the gyro triple feeds the classifier; the rest is carried for
/// diagnostics.
pub trait MotionSource {
    /// Take one sample
    ///
    /// Takes `&mut self` because bus reads require mutable access.
    fn read(&mut self) -> Result<MotionSample, SensorError>;
}
