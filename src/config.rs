//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and USB identity
//! constants live here so they can be tuned in one place.

// USB identity

/// USB VID/PID presented to the host.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0xCAFE;
pub const USB_PID: u16 = 0x4005;

/// Device release number (BCD format). 0x0010 = v0.10.
pub const USB_DEVICE_RELEASE: u16 = 0x0010;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "Generic";
pub const USB_PRODUCT: &str = "Mouse";
pub const USB_SERIAL_NUMBER: &str = "123457";

/// Maximum bus power draw reported in the configuration descriptor (mA).
pub const USB_MAX_POWER_MA: u16 = 50;

/// USB HID polling interval (ms). 10 ms is plenty for a mouse that
/// moves twice a minute.
pub const USB_HID_POLL_MS: u8 = 10;

// Jiggle movement

/// Pointer displacement per stroke. Each active cycle moves +DELTA then
/// -DELTA on the X axis, so the cursor ends where it started.
pub const JIGGLE_DELTA: i8 = 1;

/// Dwell period between jiggle cycles (seconds).
pub const JIGGLE_DWELL_SECS: u32 = 50;

/// Pause between the outbound and return strokes (ms).
pub const JIGGLE_STROKE_MS: u32 = 200;

/// Link-health blink half-period while the link is down (ms). Doubles
/// as the status poll interval during enumeration.
pub const LINK_DOWN_BLINK_MS: u32 = 200;

// Indicator LEDs
//
// Role assignments on the nRF52840-DK (LEDs are active-low):
//
//   link-activity  → P0.13 (LED1) - lit during the outbound stroke
//   link-health    → P0.14 (LED2) - solid when enumerated, blinking otherwise
//   power-present  → P0.15 (LED3) - solid from startup
//
// The `board-1led` feature drops everything but link-health; actual
// `embassy_nrf::peripherals::*` pins are selected in `main.rs`.

/// Indicator polarity. `true` means the LEDs are wired active-low and a
/// logical "on" drives the pin low.
pub const INDICATORS_ACTIVE_LOW: bool = true;
