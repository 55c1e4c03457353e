//! USB link status - the raw device-controller view and its
//! classification.
//!
//! The jiggle loop never stores a link state across iterations. It takes
//! a fresh [`RawLinkStatus`] snapshot at the top of every pass and runs
//! it through [`classify`], so a transient misread self-corrects on the
//! next iteration.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Instantaneous device-controller status, as recorded from bus events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawLinkStatus {
    /// Address assigned by the host. 0 = not yet addressed.
    pub address: u8,
    /// Host has suspended the bus.
    pub suspended: bool,
    /// A bus reset has been seen since the last address assignment.
    pub bus_reset: bool,
}

/// Classification of the current link condition.
///
/// Only [`LinkState::Active`] selects the jiggle branch; the other three
/// collapse into the link-down blink behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// Device has not completed address assignment.
    NotAddressed,
    /// Host has suspended the bus.
    Suspended,
    /// A reset condition is asserted.
    BusReset,
    /// Enumerated and operational.
    Active,
}

impl LinkState {
    /// `true` when the host can receive movement reports.
    pub const fn is_up(self) -> bool {
        matches!(self, LinkState::Active)
    }
}

/// Classify a status snapshot. Pure - same snapshot, same answer.
pub const fn classify(status: RawLinkStatus) -> LinkState {
    if status.address == 0 {
        LinkState::NotAddressed
    } else if status.suspended {
        LinkState::Suspended
    } else if status.bus_reset {
        LinkState::BusReset
    } else {
        LinkState::Active
    }
}

/// Shared live status surface.
///
/// Written by the USB stack's bus event callbacks, read by the jiggle
/// loop. Single writer, single reader; the fields are independent flags,
/// so relaxed atomics are sufficient.
pub struct SharedLinkStatus {
    address: AtomicU8,
    suspended: AtomicBool,
    bus_reset: AtomicBool,
}

impl SharedLinkStatus {
    pub const fn new() -> Self {
        Self {
            address: AtomicU8::new(0),
            suspended: AtomicBool::new(false),
            bus_reset: AtomicBool::new(false),
        }
    }

    /// Take an instantaneous snapshot for classification.
    pub fn snapshot(&self) -> RawLinkStatus {
        RawLinkStatus {
            address: self.address.load(Ordering::Relaxed),
            suspended: self.suspended.load(Ordering::Relaxed),
            bus_reset: self.bus_reset.load(Ordering::Relaxed),
        }
    }

    /// Bus enable edge (VBUS applied or removed). Either way the
    /// controller is back to its unaddressed idle view.
    pub fn on_enabled(&self, _enabled: bool) {
        self.address.store(0, Ordering::Relaxed);
        self.suspended.store(false, Ordering::Relaxed);
        self.bus_reset.store(false, Ordering::Relaxed);
    }

    /// Bus reset seen. USB reset returns the device to the Default
    /// state, so the assigned address is gone too.
    pub fn on_reset(&self) {
        self.bus_reset.store(true, Ordering::Relaxed);
        self.address.store(0, Ordering::Relaxed);
    }

    /// Host assigned a device address; the reset condition is over.
    pub fn on_addressed(&self, address: u8) {
        self.address.store(address, Ordering::Relaxed);
        self.bus_reset.store(false, Ordering::Relaxed);
    }

    /// Suspend flag follows the bus state.
    pub fn on_suspended(&self, suspended: bool) {
        self.suspended.store(suspended, Ordering::Relaxed);
    }
}

impl Default for SharedLinkStatus {
    fn default() -> Self {
        Self::new()
    }
}
