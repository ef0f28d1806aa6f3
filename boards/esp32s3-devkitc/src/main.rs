#![no_std]
#![no_main]

mod platform;
mod sink;

use bringup_core::{Config, bringup_app_main};
use embassy_executor::Spawner;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Delay;
use esp_backtrace as _;
use esp_hal::interrupt::software::SoftwareInterruptControl;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;
use platform::PlatformDevkitC;
use sink::DefmtSink;

esp_bootloader_esp_idf::esp_app_desc!();

const HEAP_SIZE: usize = 72 * 1024;

/// Never raised on hardware.
static STOP: Signal<CriticalSectionRawMutex, ()> = Signal::new();

#[esp_rtos::main]
async fn main(_spawner: Spawner) -> ! {
    let peripherals = esp_hal::init(esp_hal::Config::default());
    esp_alloc::heap_allocator!(size: HEAP_SIZE);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_int = SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_int.software_interrupt0);

    let mut platform = PlatformDevkitC::system_init(peripherals.FLASH);
    let config = Config::default();

    bringup_app_main(&config, &mut platform, &mut DefmtSink, &mut Delay, &STOP).await;

    panic!("heartbeat stopped")
}
