//! Drawing primitives for the watchface layers.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` so the same code
//! paints the simulator window and a device framebuffer.

mod icons;
mod labels;
mod radial;

pub use icons::draw_condition_icon;
pub use labels::draw_label;
pub use radial::{draw_commands, draw_radial};
