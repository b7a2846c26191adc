//! Screen content recorded as drawing operations

use heapless::{String, Vec};

use tiltmorse_core::traits::{DisplayError, DisplaySink};

/// Strokes kept since the last clear
pub const MAX_STROKES: usize = 8;

/// Longest text stroke, one full row of the 6x10 font
pub const MAX_TEXT_LEN: usize = 21;

/// One drawing operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stroke {
    Text(String<MAX_TEXT_LEN>),
    Line { x0: i32, y0: i32, x1: i32, y1: i32 },
}

/// Screen content as a list of strokes over a blank panel
#[derive(Debug, Clone)]
pub struct Screen {
    strokes: Vec<Stroke, MAX_STROKES>,
    dirty: bool,
}

impl Screen {
    pub const fn new() -> Self {
        Self {
            strokes: Vec::new(),
            dirty: false,
        }
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Whether anything changed since the last call
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }

    /// Draw the recorded content onto a real display
    pub fn replay<S: DisplaySink>(&self, sink: &mut S) -> Result<(), DisplayError> {
        sink.clear()?;
        for stroke in &self.strokes {
            match stroke {
                Stroke::Text(text) => sink.write_text(text)?,
                Stroke::Line { x0, y0, x1, y1 } => sink.draw_line(*x0, *y0, *x1, *y1)?,
            }
        }
        Ok(())
    }

    fn record(&mut self, stroke: Stroke) -> Result<(), DisplayError> {
        self.strokes
            .push(stroke)
            .map_err(|_| DisplayError::BufferOverflow)?;
        self.dirty = true;
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for Screen {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.strokes.clear();
        self.dirty = true;
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        let mut line = String::new();
        line.push_str(text)
            .map_err(|_| DisplayError::BufferOverflow)?;
        self.record(Stroke::Text(line))
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), DisplayError> {
        self.record(Stroke::Line { x0, y0, x1, y1 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::GraphicsDisplay;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::BinaryColor;
    use embedded_graphics::prelude::*;

    #[test]
    fn test_screen_records_and_clears() {
        let mut screen = Screen::new();
        screen.write_text("E").unwrap();
        screen.draw_line(0, 0, 10, 10).unwrap();
        assert_eq!(screen.strokes().len(), 2);
        assert!(screen.take_dirty());
        assert!(!screen.take_dirty());

        screen.clear().unwrap();
        assert!(screen.strokes().is_empty());
        assert!(screen.take_dirty());
    }

    #[test]
    fn test_screen_rejects_long_text() {
        let mut screen = Screen::new();
        let long = "0123456789012345678901";
        assert_eq!(screen.write_text(long), Err(DisplayError::BufferOverflow));
        assert!(!screen.take_dirty());
    }

    #[test]
    fn test_screen_stroke_limit() {
        let mut screen = Screen::new();
        for _ in 0..MAX_STROKES {
            screen.draw_line(0, 0, 1, 1).unwrap();
        }
        assert_eq!(
            screen.write_text("X"),
            Err(DisplayError::BufferOverflow)
        );
        assert_eq!(screen.strokes().len(), MAX_STROKES);

        screen.clear().unwrap();
        assert_eq!(screen.write_text("X"), Ok(()));
    }

    #[test]
    fn test_screen_replay_onto_panel() {
        let mut screen = Screen::new();
        screen.draw_line(0, 0, 3, 3).unwrap();

        let mut mock = MockDisplay::new();
        mock.set_allow_overdraw(true);
        let mut panel = GraphicsDisplay::new(mock);
        screen.replay(&mut panel).unwrap();

        let mock = panel.into_inner();
        assert_eq!(mock.get_pixel(Point::new(2, 2)), Some(BinaryColor::On));
        assert_eq!(mock.get_pixel(Point::new(0, 5)), Some(BinaryColor::Off));
    }

    #[test]
    fn test_screen_replay_copies_strokes() {
        let mut source = Screen::new();
        source.write_text("HELLO").unwrap();
        source.draw_line(1, 2, 3, 4).unwrap();

        let mut target = Screen::new();
        target.write_text("stale").unwrap();
        source.replay(&mut target).unwrap();
        assert_eq!(target.strokes(), source.strokes());
    }
}
