//! USB HID mouse device.
//!
//! Initialises the Embassy USB stack on the nRF52840 hardware USB
//! peripheral, exposes one HID mouse endpoint, and records bus-level
//! events into the link status surface.

use crate::config;
use crate::hid::mouse::{MouseReport, MOUSE_REPORT_DESCRIPTOR, MOUSE_REPORT_SIZE};
use crate::link::SharedLinkStatus;
use defmt::{info, warn};
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_nrf::usb::Driver;
use embassy_nrf::{self, bind_interrupts, peripherals};
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, State};
use embassy_usb::{Builder, Config, UsbDevice};
use static_cell::StaticCell;

bind_interrupts!(struct Irqs {
    USBD => embassy_nrf::usb::InterruptHandler<peripherals::USBD>;
    CLOCK_POWER => embassy_nrf::usb::vbus_detect::InterruptHandler;
});

/// Concrete driver type for the on-chip USB controller.
pub type UsbDriver = Driver<'static, peripherals::USBD, HardwareVbusDetect>;

/// Device runner for the mouse, as handed to the USB task.
pub type MouseUsbDevice = UsbDevice<'static, UsbDriver>;

/// HID IN endpoint writer for the mouse interface.
pub type MouseWriter = HidWriter<'static, UsbDriver, 8>;

static MOUSE_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 128]> = StaticCell::new();
static BUS_MONITOR: StaticCell<BusMonitor> = StaticCell::new();
static LINK_STATUS: SharedLinkStatus = SharedLinkStatus::new();

/// Mirrors bus-level events into [`LINK_STATUS`].
struct BusMonitor;

impl embassy_usb::Handler for BusMonitor {
    fn enabled(&mut self, enabled: bool) {
        info!("USB bus enabled: {}", enabled);
        LINK_STATUS.on_enabled(enabled);
    }

    fn reset(&mut self) {
        LINK_STATUS.on_reset();
    }

    fn addressed(&mut self, addr: u8) {
        info!("USB address assigned: {}", addr);
        LINK_STATUS.on_addressed(addr);
    }

    fn suspended(&mut self, suspended: bool) {
        LINK_STATUS.on_suspended(suspended);
    }
}

/// Live device-controller status surface sampled by the jiggle loop.
pub fn link_status() -> &'static SharedLinkStatus {
    &LINK_STATUS
}

/// Build result containing the USB device runner and the mouse writer.
pub struct UsbMouse {
    pub device: UsbDevice<'static, UsbDriver>,
    pub writer: MouseWriter,
}

/// Initialise the USB stack and create the HID mouse device.
///
/// Must be called exactly once. All static buffers are consumed here.
pub fn init(usbd: peripherals::USBD) -> UsbMouse {
    // Create the low-level USB driver with hardware VBUS detection.
    let driver = Driver::new(usbd, Irqs, HardwareVbusDetect::new(Irqs));

    // USB device-level configuration.
    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.device_release = config::USB_DEVICE_RELEASE;
    usb_config.max_power = config::USB_MAX_POWER_MA;
    usb_config.max_packet_size_0 = 64;

    // Allocate static descriptor buffers.
    let config_desc = USB_CONFIG_DESC.init([0u8; 256]);
    let bos_desc = USB_BOS_DESC.init([0u8; 256]);
    let msos_desc = USB_MSOS_DESC.init([0u8; 256]);
    let ctrl_buf = USB_CTRL_BUF.init([0u8; 128]);

    // Build the USB device.
    let mut builder = Builder::new(
        driver,
        usb_config,
        config_desc,
        bos_desc,
        msos_desc,
        ctrl_buf,
    );

    builder.handler(BUS_MONITOR.init(BusMonitor));

    let mouse_state = MOUSE_STATE.init(State::new());
    let mouse_config = HidConfig {
        report_descriptor: MOUSE_REPORT_DESCRIPTOR,
        request_handler: None,
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: 8,
    };
    let writer = HidWriter::new(&mut builder, mouse_state, mouse_config);

    let device = builder.build();

    info!("USB HID mouse device initialised");

    UsbMouse { device, writer }
}

/// Run the USB device stack - must be spawned as a dedicated Embassy task.
///
/// This handles USB enumeration, suspend/resume, and endpoint servicing.
/// It runs forever.
pub async fn run_usb_device(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    info!("USB device task started");
    device.run().await
}

/// Emit one relative-motion report.
///
/// Fire-and-forget: transmission timing is the transport's concern, and
/// a failed write is logged and dropped rather than retried.
pub async fn send_move(writer: &mut MouseWriter, dx: i8, dy: i8) {
    let mut buf = [0u8; MOUSE_REPORT_SIZE];
    let n = MouseReport::from_motion(dx, dy).serialize(&mut buf);
    if let Err(_e) = writer.write(&buf[..n]).await {
        warn!("USB mouse write failed");
    }
}
