//! usb-jiggler firmware entry point.
//!
//! Two Embassy tasks: the USB device runner (enumeration and endpoint
//! servicing) and the jiggle loop below. The loop samples the live link
//! status at the top of every iteration, classifies it fresh, and
//! replays the sequencer's plan for that classification - forever.

#![no_std]
#![no_main]

use defmt::{info, unwrap};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin;
use embassy_time::Timer;
use panic_probe as _;

use usb_jiggler::config;
use usb_jiggler::indicator::IndicatorPanel;
use usb_jiggler::link::{classify, LinkState};
use usb_jiggler::panel::LedPanel;
use usb_jiggler::sequencer::{Action, JiggleConfig, Sequencer};
use usb_jiggler::usb::hid_device::{self, MouseUsbDevice};

#[embassy_executor::task]
async fn usb_task(device: MouseUsbDevice) -> ! {
    hid_device::run_usb_device(device).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("usb-jiggler starting");

    #[cfg(feature = "board-1led")]
    let mut panel = LedPanel::new(
        None,
        Some(p.P0_14.degrade()),
        None,
        config::INDICATORS_ACTIVE_LOW,
    );
    #[cfg(not(feature = "board-1led"))]
    let mut panel = LedPanel::new(
        Some(p.P0_13.degrade()),
        Some(p.P0_14.degrade()),
        Some(p.P0_15.degrade()),
        config::INDICATORS_ACTIVE_LOW,
    );

    let usb = hid_device::init(p.USBD);
    unwrap!(spawner.spawn(usb_task(usb.device)));
    let mut writer = usb.writer;

    let sequencer = Sequencer::new(JiggleConfig::default());

    // Assert the startup output mapping before the first classification.
    for action in sequencer.startup() {
        if let Action::Indicator(role, on) = action {
            panel.set(role, on);
        }
    }

    let mut last_state: Option<LinkState> = None;
    loop {
        let state = classify(hid_device::link_status().snapshot());
        if last_state != Some(state) {
            info!("link state: {}", state);
            last_state = Some(state);
        }

        for action in sequencer.plan(state) {
            match action {
                Action::Indicator(role, on) => panel.set(role, on),
                Action::Move { dx, dy } => hid_device::send_move(&mut writer, dx, dy).await,
                Action::Wait(ms) => Timer::after_millis(u64::from(ms)).await,
            }
        }
    }
}
