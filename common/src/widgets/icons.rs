//! Weather condition icons.
//!
//! Each icon is a handful of primitives on a 21x21 canvas, drawn in a single
//! color so it follows the palette.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, RoundedRectangle, Triangle};

use crate::weather::Condition;

/// Draw the icon for `condition` with its canvas at `top_left`.
pub fn draw_condition_icon<D>(
    display: &mut D,
    top_left: Point,
    condition: Condition,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let d = &mut display.translated(top_left);
    match condition {
        Condition::Clear => draw_sun(d, color),
        Condition::Cloud => draw_cloud(d, Point::new(0, 4), color),
        Condition::Fog => draw_fog(d, color),
        Condition::Rain => {
            draw_cloud(d, Point::zero(), color);
            draw_rain(d, color);
        },
        Condition::Snow => {
            draw_cloud(d, Point::zero(), color);
            draw_snow(d, color);
        },
        Condition::Storm => {
            draw_cloud(d, Point::zero(), color);
            draw_spark(d, color);
        },
    }
}

// =============================================================================
// Glyph parts
// =============================================================================

fn draw_sun<D>(
    display: &mut D,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(Point::new(10, 10), 9)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();

    let ray = PrimitiveStyle::with_stroke(color, 1);
    let rays = [
        (Point::new(10, 0), Point::new(10, 3)),
        (Point::new(10, 17), Point::new(10, 20)),
        (Point::new(0, 10), Point::new(3, 10)),
        (Point::new(17, 10), Point::new(20, 10)),
        (Point::new(3, 3), Point::new(5, 5)),
        (Point::new(15, 15), Point::new(17, 17)),
        (Point::new(3, 17), Point::new(5, 15)),
        (Point::new(15, 5), Point::new(17, 3)),
    ];
    for (a, b) in rays {
        Line::new(a, b).into_styled(ray).draw(display).ok();
    }
}

/// Cloud silhouette 21x12, top-left at `offset`.
fn draw_cloud<D>(
    display: &mut D,
    offset: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let fill = PrimitiveStyle::with_fill(color);
    Circle::new(offset + Point::new(3, 2), 8).into_styled(fill).draw(display).ok();
    Circle::new(offset + Point::new(8, 0), 10).into_styled(fill).draw(display).ok();
    RoundedRectangle::with_equal_corners(
        Rectangle::new(offset + Point::new(0, 6), Size::new(21, 6)),
        Size::new(3, 3),
    )
    .into_styled(fill)
    .draw(display)
    .ok();
}

fn draw_fog<D>(
    display: &mut D,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let band = PrimitiveStyle::with_stroke(color, 2);
    for (y, inset) in [(5, 2), (10, 0), (15, 3)] {
        Line::new(Point::new(inset, y), Point::new(20 - inset, y))
            .into_styled(band)
            .draw(display)
            .ok();
    }
}

fn draw_rain<D>(
    display: &mut D,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let drop = PrimitiveStyle::with_stroke(color, 1);
    for x in [5, 10, 15] {
        Line::new(Point::new(x, 14), Point::new(x - 2, 19))
            .into_styled(drop)
            .draw(display)
            .ok();
    }
}

fn draw_snow<D>(
    display: &mut D,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let flake = PrimitiveStyle::with_fill(color);
    for center in [Point::new(5, 15), Point::new(10, 18), Point::new(15, 15)] {
        Circle::with_center(center, 3).into_styled(flake).draw(display).ok();
    }
}

fn draw_spark<D>(
    display: &mut D,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let fill = PrimitiveStyle::with_fill(color);
    Triangle::new(Point::new(11, 12), Point::new(7, 17), Point::new(11, 17))
        .into_styled(fill)
        .draw(display)
        .ok();
    Triangle::new(Point::new(10, 16), Point::new(13, 16), Point::new(9, 20))
        .into_styled(fill)
        .draw(display)
        .ok();
}
