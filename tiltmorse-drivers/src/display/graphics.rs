//! Monochrome text display over `embedded-graphics`
//!
//! Works with any `DrawTarget<Color = BinaryColor>`: an SSD1306 in
//! buffered graphics mode, an in-memory frame, or `MockDisplay` in tests.
//! Text uses the 6x10 font, so a 128 px panel shows 21 columns.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};

use tiltmorse_core::traits::{DisplayError, DisplaySink};

/// Font style shared by every text draw
pub fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// [`DisplaySink`] drawing into a `DrawTarget`
///
/// Drawing only touches the target's buffer; flushing to the panel is
/// left to the owner of the target.
pub struct GraphicsDisplay<D> {
    target: D,
}

impl<D> GraphicsDisplay<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Access the target, e.g. to flush it
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> DisplaySink for GraphicsDisplay<D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.target
            .clear(BinaryColor::Off)
            .map_err(|_| DisplayError::Bus)
    }

    fn write_text(&mut self, text: &str) -> Result<(), DisplayError> {
        Text::with_baseline(text, Point::zero(), text_style(), Baseline::Top)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Bus)
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), DisplayError> {
        Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Bus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    fn display() -> GraphicsDisplay<MockDisplay<BinaryColor>> {
        let mut mock = MockDisplay::new();
        mock.set_allow_overdraw(true);
        GraphicsDisplay::new(mock)
    }

    #[test]
    fn test_text_drawn_top_left() {
        let mut display = display();
        display.write_text("A").unwrap();
        let area = display.target_mut().affected_area();
        assert!(area.size.width > 0);
        assert!(area.top_left.x >= 0 && area.top_left.y >= 0);
        assert!(area.top_left.x + area.size.width as i32 <= 6);
        assert!(area.top_left.y + area.size.height as i32 <= 10);
    }

    #[test]
    fn test_clear_then_line() {
        let mut display = display();
        display.clear().unwrap();
        display.draw_line(0, 0, 3, 3).unwrap();

        let mock = display.into_inner();
        assert_eq!(mock.get_pixel(Point::new(2, 2)), Some(BinaryColor::On));
        assert_eq!(mock.get_pixel(Point::new(0, 5)), Some(BinaryColor::Off));
    }

    #[test]
    fn test_clear_erases_text() {
        let mut display = display();
        display.write_text("-").unwrap();
        display.clear().unwrap();
        let mock = display.into_inner();
        assert_eq!(mock.get_pixel(Point::new(2, 5)), Some(BinaryColor::Off));
    }
}
