//! Indicator LED panel - the hardware side of the indicator roles.
//!
//! Each role maps to an optional GPIO output; a role left unmapped on
//! this board variant is silently a no-op. Polarity is applied through
//! the centralized mapping in [`crate::indicator`], never here.

use crate::indicator::{drive_level, IndicatorPanel, Role};
use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive};

fn level(on: bool, active_low: bool) -> Level {
    if drive_level(on, active_low) {
        Level::High
    } else {
        Level::Low
    }
}

/// The board's indicator outputs, owned exclusively by the jiggle loop.
pub struct LedPanel {
    active_low: bool,
    activity: Option<Output<'static>>,
    health: Option<Output<'static>>,
    power: Option<Output<'static>>,
}

impl LedPanel {
    /// Configure the mapped pins as outputs, initially at logical off.
    pub fn new(
        activity: Option<AnyPin>,
        health: Option<AnyPin>,
        power: Option<AnyPin>,
        active_low: bool,
    ) -> Self {
        let off = level(false, active_low);
        let configure = |pin: AnyPin| Output::new(pin, off, OutputDrive::Standard);
        Self {
            active_low,
            activity: activity.map(configure),
            health: health.map(configure),
            power: power.map(configure),
        }
    }
}

impl IndicatorPanel for LedPanel {
    fn set(&mut self, role: Role, on: bool) {
        let led = match role {
            Role::LinkActivity => self.activity.as_mut(),
            Role::LinkHealth => self.health.as_mut(),
            Role::PowerPresent => self.power.as_mut(),
        };
        if let Some(led) = led {
            led.set_level(level(on, self.active_low));
        }
    }
}
