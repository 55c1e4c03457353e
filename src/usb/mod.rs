//! USB Device subsystem - presents a HID mouse to the host.
//!
//! The nRF52840's built-in USB 2.0 Full-Speed controller is driven by
//! `embassy-usb`. A single boot-protocol mouse interface is exposed, and
//! a bus event handler mirrors the controller's connection status
//! (address assignment, suspend, reset) into the shared link status
//! surface that the jiggle loop samples.

pub mod hid_device;
