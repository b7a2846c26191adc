//! Embassy async tasks
//!
//! Each activity runs on its own ticker and does nothing unless it owns the
//! current phase. Buttons, feedback and the OLED run as separate tasks.

mod buttons;
mod feedback;
mod input;
mod oled;
mod page;
mod receive;
mod report;
mod transmit;

pub use buttons::button_task;
pub use feedback::{feedback_task, FeedbackQueue};
pub use input::input_task;
pub use oled::oled_task;
pub use page::page_task;
pub use receive::receive_task;
pub use transmit::transmit_task;
