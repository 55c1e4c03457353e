//! Host-testable library interface for usb-jiggler.
//!
//! The pure decision logic - link classification, polarity mapping, and
//! the jiggle sequencer - lives here so it can be tested on the host
//! with plain `cargo test`, no embedded hardware required.
//!
//! The hardware-facing modules (`usb`, `panel`) are gated behind the
//! `embedded` feature; the firmware binary in `main.rs` wires them to
//! this logic.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod hid;
pub mod indicator;
pub mod link;
pub mod sequencer;

#[cfg(feature = "embedded")]
pub mod panel;
#[cfg(feature = "embedded")]
pub mod usb;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
