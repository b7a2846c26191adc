//! Text displays
//!
//! Activities draw into a [`Screen`] held in RAM; the firmware replays it
//! onto a [`GraphicsDisplay`] so slow bus flushes happen outside any lock.

pub mod graphics;
pub mod screen;

pub use graphics::{text_style, GraphicsDisplay};
pub use screen::{Screen, Stroke, MAX_STROKES, MAX_TEXT_LEN};
