//! Rasterizes gauge draw commands.

use embedded_graphics::geometry::AngleUnit;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, PrimitiveStyle, PrimitiveStyleBuilder, StrokeAlignment, Triangle};

use crate::gauges::{DrawCommand, RadialFill};

/// embedded-graphics measures from 3 o'clock; gauge angles from 12 o'clock.
const QUARTER_TURN_DEG: i32 = 90;

/// Paint `commands` in order, with gauge-local coordinates offset by `origin`.
pub fn draw_commands<D>(
    display: &mut D,
    origin: Point,
    commands: &[DrawCommand],
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut canvas = display.translated(origin);
    for command in commands {
        draw_command(&mut canvas, command);
    }
}

fn draw_command<D>(
    display: &mut D,
    command: &DrawCommand,
) where
    D: DrawTarget<Color = Rgb565>,
{
    match *command {
        DrawCommand::Radial(fill) => draw_radial(display, &fill),
        DrawCommand::Ring {
            center,
            radius,
            stroke,
            color,
        } => {
            Circle::with_center(center, 2 * radius + 1)
                .into_styled(PrimitiveStyle::with_stroke(color, stroke))
                .draw(display)
                .ok();
        },
        DrawCommand::Disc { center, radius, color } => {
            Circle::with_center(center, 2 * radius + 1)
                .into_styled(PrimitiveStyle::with_fill(color))
                .draw(display)
                .ok();
        },
        DrawCommand::Shape {
            triangles,
            offset,
            color,
        } => {
            let style = PrimitiveStyle::with_fill(color);
            for [a, b, c] in triangles {
                Triangle::new(*a + offset, *b + offset, *c + offset)
                    .into_styled(style)
                    .draw(display)
                    .ok();
            }
        },
    }
}

/// Fill a ring sector whose outer edge touches `fill.bounds`.
pub fn draw_radial<D>(
    display: &mut D,
    fill: &RadialFill,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let sweep = fill.sweep_deg();
    if sweep == 0 || fill.inset == 0 {
        return;
    }

    let style = PrimitiveStyleBuilder::new()
        .stroke_alignment(StrokeAlignment::Inside)
        .stroke_width(fill.inset)
        .stroke_color(fill.color)
        .build();
    let diameter = fill.bounds.size.width.min(fill.bounds.size.height);

    if sweep >= 360 {
        Circle::new(fill.bounds.top_left, diameter).into_styled(style).draw(display).ok();
        return;
    }

    let start = (fill.start_deg - QUARTER_TURN_DEG) as f32;
    Arc::new(fill.bounds.top_left, diameter, start.deg(), (sweep as f32).deg())
        .into_styled(style)
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{DARK_GRAY, MEDIUM_AQUAMARINE, SUNSET_ORANGE};
    use crate::gauges::{BOLT_OFFSET, activity_rings, battery_ring, ring_bounds, temperature_dial};
    use crate::state::DisplayState;
    use embedded_graphics::mock_display::MockDisplay;

    fn display() -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display
    }

    fn quadrant_fill(
        start_deg: i32,
        end_deg: i32,
    ) -> RadialFill {
        RadialFill {
            bounds: ring_bounds(0),
            inset: 5,
            start_deg,
            end_deg,
            color: MEDIUM_AQUAMARINE,
        }
    }

    #[test]
    fn test_radial_quarter_starts_at_twelve() {
        let mut d = display();
        draw_radial(&mut d, &quadrant_fill(0, 90));

        assert_eq!(d.get_pixel(Point::new(28, 4)), Some(MEDIUM_AQUAMARINE), "Upper right is filled");
        assert_eq!(d.get_pixel(Point::new(12, 4)), None, "Upper left stays empty");
        assert_eq!(d.get_pixel(Point::new(20, 38)), None, "Bottom stays empty");
    }

    #[test]
    fn test_radial_respects_inset() {
        let mut d = display();
        draw_radial(&mut d, &quadrant_fill(0, 360));

        assert_eq!(d.get_pixel(Point::new(20, 1)), Some(MEDIUM_AQUAMARINE));
        assert_eq!(d.get_pixel(Point::new(20, 20)), None, "Center is open");
        assert_eq!(d.get_pixel(Point::new(20, 12)), None, "Inside the inset is open");
    }

    #[test]
    fn test_empty_sweep_draws_nothing() {
        let mut d = display();
        draw_radial(&mut d, &quadrant_fill(200, 200));
        draw_radial(&mut d, &quadrant_fill(300, 100));
        for p in ring_bounds(0).points() {
            assert_eq!(d.get_pixel(p), None, "{p:?} should be untouched");
        }
    }

    #[test]
    fn test_half_battery_fills_left_side() {
        let mut state = DisplayState::new();
        state.set_battery_percent(50);

        let mut d = display();
        draw_commands(&mut d, Point::zero(), &battery_ring(&state));

        assert_eq!(d.get_pixel(Point::new(2, 20)), Some(MEDIUM_AQUAMARINE));
        assert_eq!(d.get_pixel(Point::new(38, 20)), None);
        let bolt_core = Point::new(12, 11) + BOLT_OFFSET;
        assert_eq!(d.get_pixel(bolt_core), Some(MEDIUM_AQUAMARINE), "Bolt drawn over the canvas");
    }

    #[test]
    fn test_low_battery_bolt_turns_orange() {
        let mut state = DisplayState::new();
        state.set_battery_percent(10);

        let mut d = display();
        draw_commands(&mut d, Point::zero(), &battery_ring(&state));

        assert_eq!(d.get_pixel(Point::new(12, 11) + BOLT_OFFSET), Some(SUNSET_ORANGE));
        assert_eq!(d.get_pixel(Point::new(2, 20)), None, "10% does not reach 9 o'clock");
    }

    #[test]
    fn test_activity_tracks_show_through() {
        let state = DisplayState::new();
        let mut d = display();
        draw_commands(&mut d, Point::zero(), &activity_rings(&state));

        assert_eq!(d.get_pixel(Point::new(20, 1)), Some(DARK_GRAY), "Outer track");
        assert_eq!(d.get_pixel(Point::new(20, 8)), Some(DARK_GRAY), "Middle track");
        assert_eq!(d.get_pixel(Point::new(20, 15)), Some(DARK_GRAY), "Inner track");
    }

    #[test]
    fn test_met_goal_covers_track() {
        let mut state = DisplayState::new();
        state.activity.steps = state.activity.step_goal;

        let mut d = display();
        draw_commands(&mut d, Point::zero(), &activity_rings(&state));

        assert_eq!(d.get_pixel(Point::new(20, 1)), Some(MEDIUM_AQUAMARINE));
        assert_eq!(d.get_pixel(Point::new(1, 20)), Some(MEDIUM_AQUAMARINE));
        assert_eq!(d.get_pixel(Point::new(20, 8)), Some(DARK_GRAY), "Move ring untouched");
    }

    #[test]
    fn test_dial_gap_at_bottom() {
        let state = DisplayState::new();
        let mut d = display();
        draw_commands(&mut d, Point::zero(), &temperature_dial(&state));

        let bg = state.palette.background();
        assert_eq!(d.get_pixel(Point::new(20, 38)), Some(bg), "Bottom of ring is cut away");
        assert_eq!(d.get_pixel(Point::new(2, 20)), Some(MEDIUM_AQUAMARINE), "Left side of ring");
        assert_eq!(d.get_pixel(Point::new(20, 2)), Some(state.palette.text()), "Dot at 12 o'clock");
    }

    #[test]
    fn test_origin_offsets_canvas() {
        let state = DisplayState::new();
        let mut d = display();
        d.set_allow_out_of_bounds_drawing(true);
        draw_commands(&mut d, Point::new(10, 10), &battery_ring(&state));

        assert_eq!(d.get_pixel(Point::new(30, 11)), Some(MEDIUM_AQUAMARINE));
        assert_eq!(d.get_pixel(Point::new(20, 1)), None);
    }
}
