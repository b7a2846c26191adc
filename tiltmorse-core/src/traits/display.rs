//! Text display trait

/// Errors that can occur while drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus or controller failure
    Bus,
    /// Text does not fit the internal buffer
    BufferOverflow,
}

/// Trait for the small message display
///
/// The activities only clear, print a line of text and draw strokes;
/// layout beyond that is up to the implementation.
pub trait DisplaySink {
    /// Blank the screen
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Print text at the top-left text position
    fn write_text(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Draw a one-pixel line between two points
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), DisplayError>;
}
