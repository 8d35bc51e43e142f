//! Radial gauge math and draw-command lists.
//!
//! Every gauge lives on a 41x41 canvas. Angles are in whole degrees, 0° at
//! 12 o'clock, increasing clockwise; a [`RadialFill`] covers the ring
//! between the canvas edge and `inset` pixels inward, from `start_deg` to
//! `end_deg`.
//!
//! The builders are pure functions of [`DisplayState`]. They return a short
//! list of [`DrawCommand`]s in paint order which
//! [`widgets::draw_commands`](crate::widgets::draw_commands) rasterizes.
//!
//! # Gauges
//!
//! | gauge | layers (bottom to top) |
//! |-------|------------------------|
//! | temperature dial | accent ring, background gap wedge, halo disc, dot |
//! | activity | three gray tracks, then up to three accent fills |
//! | battery | fill from the depletion angle to 360°, lightning bolt |

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use crate::colors::{DARK_GRAY, SUNSET_ORANGE};
use crate::config::{
    DIAL_DOT_HALO_RADIUS,
    DIAL_DOT_RADIUS,
    DIAL_GAP_END_DEG,
    DIAL_GAP_INSET,
    DIAL_GAP_START_DEG,
    DIAL_RADIUS,
    DIAL_START_DEG,
    DIAL_STROKE,
    DIAL_SWEEP_DEG,
    GAUGE_CENTER,
    GAUGE_SIZE,
    LOW_BATTERY_PERCENT,
    RING_INSET,
    RING_STEP,
};
use crate::state::{DisplayState, Temperature};

// =============================================================================
// Commands
// =============================================================================

/// A filled angular sector of a ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RadialFill {
    /// Square bounding box; the ring's outer edge touches it.
    pub bounds: Rectangle,
    /// Ring thickness in pixels.
    pub inset: u32,
    pub start_deg: i32,
    pub end_deg: i32,
    pub color: Rgb565,
}

impl RadialFill {
    /// Clockwise sweep in degrees. Never negative.
    #[inline]
    pub const fn sweep_deg(&self) -> i32 {
        let sweep = self.end_deg - self.start_deg;
        if sweep > 0 { sweep } else { 0 }
    }
}

/// One paint operation in gauge-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    Radial(RadialFill),
    /// Stroked circle.
    Ring {
        center: Point,
        radius: u32,
        stroke: u32,
        color: Rgb565,
    },
    /// Filled circle.
    Disc {
        center: Point,
        radius: u32,
        color: Rgb565,
    },
    /// Filled polygon, pre-split into triangles.
    Shape {
        triangles: &'static [[Point; 3]],
        offset: Point,
        color: Rgb565,
    },
}

/// Upper bound on commands per gauge.
pub const MAX_COMMANDS: usize = 8;

pub type Commands = Vec<DrawCommand, MAX_COMMANDS>;

fn push(
    commands: &mut Commands,
    command: DrawCommand,
) {
    if commands.push(command).is_err() {
        log::warn!("gauge command list full");
    }
}

/// Bounding box of the ring `level` steps inward from the canvas edge.
pub const fn ring_bounds(level: u32) -> Rectangle {
    let offset = (level * RING_STEP) as i32;
    let side = GAUGE_SIZE - 2 * level * RING_STEP;
    Rectangle::new(Point::new(offset, offset), Size::new(side, side))
}

const CANVAS: Rectangle = ring_bounds(0);

const fn canvas_center() -> Point { Point::new(GAUGE_CENTER, GAUGE_CENTER) }

// =============================================================================
// Math
// =============================================================================

/// Relative position of the clamped temperature within `[low, high]`, 0.0-1.0.
///
/// A zero-width or inverted range puts the indicator in the middle.
pub fn temperature_fraction(t: &Temperature) -> f32 {
    if t.high <= t.low {
        return 0.5;
    }
    let clamped = t.current.clamp(t.low, t.high);
    let offset = i64::from(clamped) - i64::from(t.low);
    let span = i64::from(t.high) - i64::from(t.low);
    offset as f32 / span as f32
}

/// Indicator angle: 235° at `low`, 485° (125° on the dial) at `high`.
pub fn dial_angle(t: &Temperature) -> i32 {
    let travel = DIAL_SWEEP_DEG as f32 * temperature_fraction(t);
    DIAL_START_DEG + (travel + 0.5) as i32
}

/// Point `radius` pixels from `center` at `angle_deg` (0° up, clockwise).
pub fn point_on_circle(
    center: Point,
    radius: u32,
    angle_deg: i32,
) -> Point {
    let rad = micromath::F32(angle_deg as f32 * core::f32::consts::PI / 180.0);
    let r = radius as f32;
    let dx = r * rad.sin().0;
    let dy = r * rad.cos().0;
    Point::new(center.x + round(dx), center.y - round(dy))
}

fn round(v: f32) -> i32 { if v >= 0.0 { (v + 0.5) as i32 } else { (v - 0.5) as i32 } }

/// Progress sweep in degrees for `value` against `goal`, saturated to
/// `[0, 360]`. A non-positive goal counts as met.
pub fn progress_sweep(
    value: i32,
    goal: i32,
) -> i32 {
    if goal <= 0 {
        return 360;
    }
    if value <= 0 {
        return 0;
    }
    let sweep = 360 * i64::from(value) / i64::from(goal);
    sweep.min(360) as i32
}

/// Angle at which the battery fill starts. The fill always ends at 360°,
/// so a full battery is a full ring and an empty one draws nothing.
pub fn battery_start_angle(percent: u8) -> i32 {
    let pct = i32::from(percent.min(100));
    360 * (100 - pct) / 100
}

/// Accent while healthy, sunset orange at or below the low threshold.
#[inline]
pub const fn battery_color(
    percent: u8,
    accent: Rgb565,
) -> Rgb565 {
    if percent > LOW_BATTERY_PERCENT { accent } else { SUNSET_ORANGE }
}

// =============================================================================
// Builders
// =============================================================================

/// Accent ring with a gap at the bottom and a dot marking the temperature.
pub fn temperature_dial(state: &DisplayState) -> Commands {
    let palette = state.palette;
    let center = canvas_center();
    let mut commands = Commands::new();

    push(&mut commands, DrawCommand::Ring {
        center,
        radius: DIAL_RADIUS,
        stroke: DIAL_STROKE,
        color: palette.accent(),
    });
    push(
        &mut commands,
        DrawCommand::Radial(RadialFill {
            bounds: CANVAS,
            inset: DIAL_GAP_INSET,
            start_deg: DIAL_GAP_START_DEG,
            end_deg: DIAL_GAP_END_DEG,
            color: palette.background(),
        }),
    );

    let dot = point_on_circle(center, DIAL_RADIUS, dial_angle(state.temperature()));
    push(&mut commands, DrawCommand::Disc {
        center: dot,
        radius: DIAL_DOT_HALO_RADIUS,
        color: palette.background(),
    });
    push(&mut commands, DrawCommand::Disc {
        center: dot,
        radius: DIAL_DOT_RADIUS,
        color: palette.text(),
    });

    commands
}

/// Three nested rings: steps (outer), move minutes, active calories (inner).
pub fn activity_rings(state: &DisplayState) -> Commands {
    let a = &state.activity;
    let progress = [
        progress_sweep(a.steps, a.step_goal),
        progress_sweep(a.move_minutes, a.move_goal),
        progress_sweep(a.active_calories, a.active_goal),
    ];
    let mut commands = Commands::new();

    for level in 0..3 {
        push(
            &mut commands,
            DrawCommand::Radial(RadialFill {
                bounds: ring_bounds(level),
                inset: RING_INSET,
                start_deg: 0,
                end_deg: 360,
                color: DARK_GRAY,
            }),
        );
    }

    for (level, sweep) in (0..3).zip(progress) {
        if sweep > 0 {
            push(
                &mut commands,
                DrawCommand::Radial(RadialFill {
                    bounds: ring_bounds(level),
                    inset: RING_INSET,
                    start_deg: 0,
                    end_deg: sweep,
                    color: state.palette.accent(),
                }),
            );
        }
    }

    commands
}

/// Lightning bolt outline (12,0) (11,10) (16,10) (8,24) (9,14) (4,14), as
/// four triangles.
pub const BOLT: [[Point; 3]; 4] = [
    [Point::new(12, 0), Point::new(11, 10), Point::new(4, 14)],
    [Point::new(11, 10), Point::new(9, 14), Point::new(4, 14)],
    [Point::new(11, 10), Point::new(16, 10), Point::new(9, 14)],
    [Point::new(16, 10), Point::new(8, 24), Point::new(9, 14)],
];

/// Where the bolt sits on the gauge canvas.
pub const BOLT_OFFSET: Point = Point::new(10, 8);

/// Ring that depletes counter-clockwise from 12 o'clock, with a bolt.
pub fn battery_ring(state: &DisplayState) -> Commands {
    let percent = state.battery_percent();
    let color = battery_color(percent, state.palette.accent());
    let start = battery_start_angle(percent);
    let mut commands = Commands::new();

    if start < 360 {
        push(
            &mut commands,
            DrawCommand::Radial(RadialFill {
                bounds: CANVAS,
                inset: RING_INSET,
                start_deg: start,
                end_deg: 360,
                color,
            }),
        );
    }
    push(&mut commands, DrawCommand::Shape {
        triangles: &BOLT,
        offset: BOLT_OFFSET,
        color,
    });

    commands
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::MEDIUM_AQUAMARINE;

    fn temp(
        current: i32,
        low: i32,
        high: i32,
    ) -> Temperature {
        Temperature { current, low, high }
    }

    // -------------------------------------------------------------------------
    // Temperature dial
    // -------------------------------------------------------------------------

    #[test]
    fn test_dial_angle_endpoints() {
        assert_eq!(dial_angle(&temp(15, 15, 25)), 235);
        assert_eq!(dial_angle(&temp(25, 15, 25)), 485);
        assert_eq!(dial_angle(&temp(20, 15, 25)), 360, "Midpoint points straight up");
    }

    #[test]
    fn test_dial_angle_clamps_outside_range() {
        assert_eq!(dial_angle(&temp(-40, 15, 25)), 235);
        assert_eq!(dial_angle(&temp(99, 15, 25)), 485);
    }

    #[test]
    fn test_degenerate_range_centers_indicator() {
        assert!((temperature_fraction(&temp(20, 20, 20)) - 0.5).abs() < f32::EPSILON);
        assert!((temperature_fraction(&temp(20, 25, 15)) - 0.5).abs() < f32::EPSILON);
        assert_eq!(dial_angle(&temp(0, 10, 10)), 360);
    }

    #[test]
    fn test_fraction_survives_extreme_range() {
        let f = temperature_fraction(&temp(0, i32::MIN, i32::MAX));
        assert!((f - 0.5).abs() < 0.01, "Wide range should not overflow, got {f}");
    }

    #[test]
    fn test_point_on_circle_cardinals() {
        let c = Point::new(20, 20);
        assert_eq!(point_on_circle(c, 18, 0), Point::new(20, 2), "0 deg is up");
        assert_eq!(point_on_circle(c, 18, 90), Point::new(38, 20), "90 deg is right");
        assert_eq!(point_on_circle(c, 18, 180), Point::new(20, 38));
        assert_eq!(point_on_circle(c, 18, 270), Point::new(2, 20));
        assert_eq!(point_on_circle(c, 18, 360), Point::new(20, 2));
    }

    #[test]
    fn test_dial_dot_at_low_sits_lower_left() {
        let dot = point_on_circle(canvas_center(), DIAL_RADIUS, dial_angle(&temp(15, 15, 25)));
        assert!(dot.x < GAUGE_CENTER && dot.y > GAUGE_CENTER, "235 deg is lower left, got {dot:?}");
    }

    #[test]
    fn test_temperature_dial_layers() {
        let state = DisplayState::new();
        let commands = temperature_dial(&state);
        assert_eq!(commands.len(), 4);
        assert!(matches!(commands[0], DrawCommand::Ring { radius: 18, stroke: 4, .. }));
        match commands[1] {
            DrawCommand::Radial(gap) => {
                assert_eq!((gap.start_deg, gap.end_deg, gap.inset), (127, 233, 6));
                assert_eq!(gap.color, state.palette.background());
            },
            other => panic!("expected gap wedge, got {other:?}"),
        }
        assert!(matches!(commands[2], DrawCommand::Disc { radius: 4, .. }));
        assert!(matches!(commands[3], DrawCommand::Disc { radius: 2, .. }));
    }

    // -------------------------------------------------------------------------
    // Activity
    // -------------------------------------------------------------------------

    #[test]
    fn test_progress_sweep_monotonic_and_saturating() {
        let goal = 5000;
        let mut prev = 0;
        for steps in (0..=7000).step_by(250) {
            let sweep = progress_sweep(steps, goal);
            assert!(sweep >= prev, "Sweep went backwards at {steps}");
            assert!((0..=360).contains(&sweep));
            prev = sweep;
        }
        assert_eq!(progress_sweep(5000, goal), 360);
        assert_eq!(progress_sweep(9000, goal), 360);
        assert_eq!(progress_sweep(2500, goal), 180);
    }

    #[test]
    fn test_progress_sweep_edges() {
        assert_eq!(progress_sweep(0, 300), 0);
        assert_eq!(progress_sweep(-10, 300), 0);
        assert_eq!(progress_sweep(10, 0), 360, "Zero goal draws a full ring");
        assert_eq!(progress_sweep(0, -5), 360);
        assert_eq!(progress_sweep(i32::MAX, 1), 360, "No overflow");
    }

    #[test]
    fn test_ring_bounds() {
        assert_eq!(ring_bounds(0), Rectangle::new(Point::new(0, 0), Size::new(41, 41)));
        assert_eq!(ring_bounds(1), Rectangle::new(Point::new(7, 7), Size::new(27, 27)));
        assert_eq!(ring_bounds(2), Rectangle::new(Point::new(14, 14), Size::new(13, 13)));
    }

    #[test]
    fn test_activity_tracks_then_fills() {
        let mut state = DisplayState::new();
        state.activity.steps = 2500;
        state.activity.move_minutes = 0;
        state.activity.active_calories = 600;

        let commands = activity_rings(&state);
        assert_eq!(commands.len(), 5, "Three tracks plus two non-empty fills");

        for c in &commands[..3] {
            match c {
                DrawCommand::Radial(r) => {
                    assert_eq!(r.color, DARK_GRAY);
                    assert_eq!(r.sweep_deg(), 360);
                    assert_eq!(r.inset, 5);
                },
                other => panic!("expected track, got {other:?}"),
            }
        }
        let DrawCommand::Radial(outer) = commands[3] else { panic!("expected fill") };
        assert_eq!((outer.bounds, outer.end_deg), (ring_bounds(0), 180));
        let DrawCommand::Radial(inner) = commands[4] else { panic!("expected fill") };
        assert_eq!((inner.bounds, inner.end_deg), (ring_bounds(2), 360));
        assert_eq!(inner.color, MEDIUM_AQUAMARINE);
    }

    // -------------------------------------------------------------------------
    // Battery
    // -------------------------------------------------------------------------

    #[test]
    fn test_battery_start_angle() {
        assert_eq!(battery_start_angle(100), 0);
        assert_eq!(battery_start_angle(50), 180);
        assert_eq!(battery_start_angle(15), 306);
        assert_eq!(battery_start_angle(0), 360);
        assert_eq!(battery_start_angle(250), 0, "Clamped to 100");
    }

    #[test]
    fn test_battery_color_threshold() {
        assert_eq!(battery_color(21, MEDIUM_AQUAMARINE), MEDIUM_AQUAMARINE);
        assert_eq!(battery_color(20, MEDIUM_AQUAMARINE), SUNSET_ORANGE);
        assert_eq!(battery_color(15, MEDIUM_AQUAMARINE), SUNSET_ORANGE);
    }

    #[test]
    fn test_battery_ring_low() {
        let mut state = DisplayState::new();
        state.set_battery_percent(15);

        let commands = battery_ring(&state);
        assert_eq!(commands.len(), 2);
        let DrawCommand::Radial(fill) = commands[0] else { panic!("expected fill") };
        assert_eq!((fill.start_deg, fill.end_deg), (306, 360));
        assert_eq!(fill.color, SUNSET_ORANGE);
        assert!(matches!(commands[1], DrawCommand::Shape { color, .. } if color == SUNSET_ORANGE));
    }

    #[test]
    fn test_battery_ring_empty_still_draws_bolt() {
        let mut state = DisplayState::new();
        state.set_battery_percent(0);

        let commands = battery_ring(&state);
        assert_eq!(commands.len(), 1);
        assert!(matches!(commands[0], DrawCommand::Shape { .. }));
    }

    #[test]
    fn test_bolt_triangles_cover_outline_area() {
        // Shoelace area of the six-point outline
        let outline = [(12, 0), (11, 10), (16, 10), (8, 24), (9, 14), (4, 14)];
        let mut twice: i32 = 0;
        for i in 0..outline.len() {
            let (x0, y0) = outline[i];
            let (x1, y1) = outline[(i + 1) % outline.len()];
            twice += x0 * y1 - x1 * y0;
        }

        let tri_twice: i32 = BOLT
            .iter()
            .map(|[a, b, c]| ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs())
            .sum();
        assert_eq!(tri_twice, twice.abs());
    }
}
