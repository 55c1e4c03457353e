//! HID report types.
//!
//! The jiggler presents a single boot-protocol mouse interface. The
//! report layout and descriptor live in [`mouse`]; the jiggle loop only
//! ever populates the X displacement.

pub mod mouse;
