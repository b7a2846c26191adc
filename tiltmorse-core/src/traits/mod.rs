//! Hardware abstraction traits
//!
//! These traits are the capability surface the activities consume. Board
//! crates implement them over real peripherals; tests implement them with
//! in-memory fakes.

pub mod display;
pub mod feedback;
pub mod link;
pub mod motion;

pub use display::{DisplayError, DisplaySink};
pub use feedback::{AudioSink, IndicatorSink, Tone};
pub use link::{ByteSink, ByteSource, LinkError};
pub use motion::{MotionSample, MotionSource, SensorError};
