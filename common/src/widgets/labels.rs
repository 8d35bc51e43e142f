//! Text layers.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Alignment, Text, TextStyle};

/// Draw `text` inside `bounds`, clipped to it.
///
/// The anchor follows the alignment of `placement`: left edge, horizontal
/// center or right edge of `bounds`, always at its top.
pub fn draw_label<D>(
    display: &mut D,
    bounds: &Rectangle,
    text: &str,
    font: &MonoFont<'_>,
    color: Rgb565,
    placement: TextStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let x = match placement.alignment {
        Alignment::Left => bounds.top_left.x,
        Alignment::Center => bounds.center().x,
        Alignment::Right => bounds.top_left.x + bounds.size.width as i32 - 1,
    };
    let anchor = Point::new(x, bounds.top_left.y);

    Text::with_text_style(text, anchor, MonoTextStyle::new(font, color), placement)
        .draw(&mut display.clipped(bounds))
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::WHITE;
    use crate::styles::{SMALL_FONT, TOP_LEFT, TOP_RIGHT};
    use embedded_graphics::mock_display::MockDisplay;

    fn lit_columns(display: &MockDisplay<Rgb565>) -> (i32, i32) {
        let lit: std::vec::Vec<i32> = Rectangle::new(Point::zero(), Size::new(64, 64))
            .points()
            .filter(|p| display.get_pixel(*p).is_some())
            .map(|p| p.x)
            .collect();
        (
            lit.iter().copied().min().unwrap_or(-1),
            lit.iter().copied().max().unwrap_or(-1),
        )
    }

    #[test]
    fn test_left_aligned_starts_at_bounds() {
        let mut d = MockDisplay::new();
        let bounds = Rectangle::new(Point::new(10, 10), Size::new(40, 10));
        draw_label(&mut d, &bounds, "11", SMALL_FONT, WHITE, TOP_LEFT);

        let (min, max) = lit_columns(&d);
        assert!(min >= 10, "Text starts inside bounds, got {min}");
        assert!(max < 25, "Two narrow glyphs stay left, got {max}");
    }

    #[test]
    fn test_right_aligned_ends_at_bounds() {
        let mut d = MockDisplay::new();
        let bounds = Rectangle::new(Point::new(10, 10), Size::new(40, 10));
        draw_label(&mut d, &bounds, "11", SMALL_FONT, WHITE, TOP_RIGHT);

        let (min, max) = lit_columns(&d);
        assert!(max <= 49, "Text ends inside bounds, got {max}");
        assert!(min > 35, "Text hugs the right edge, got {min}");
    }

    #[test]
    fn test_overflow_is_clipped() {
        let mut d = MockDisplay::new();
        let bounds = Rectangle::new(Point::new(0, 0), Size::new(12, 10));
        draw_label(&mut d, &bounds, "a long location", SMALL_FONT, WHITE, TOP_LEFT);

        let (_, max) = lit_columns(&d);
        assert!(max < 12, "Nothing escapes the bounds, got {max}");
    }
}
