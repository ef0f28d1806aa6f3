#![cfg_attr(not(test), no_std)]
pub mod config;
pub mod heartbeat;
pub mod reporter;
pub mod snapshot;

pub use config::Config;
pub use heartbeat::{HEARTBEAT_INTERVAL_MS, Heartbeat};
pub use reporter::StartupReporter;
pub use snapshot::CapabilitySnapshot;

use bringup_hal::{LogSink, PlatformAbstraction, info};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use embedded_hal_async::delay::DelayNs;

/// Report the platform once, then run the heartbeat until `stop` is raised.
///
/// Boards pass a signal that is never raised, so this does not return in
/// practice.
pub async fn bringup_app_main<P, L, D, M>(
    config: &Config,
    platform: &mut P,
    sink: &mut L,
    delay: &mut D,
    stop: &Signal<M, ()>,
) where
    P: PlatformAbstraction,
    L: LogSink,
    D: DelayNs,
    M: RawMutex,
{
    StartupReporter::new(config).report(platform, sink);

    info!(sink, config.tag, "");
    info!(sink, config.tag, "System initialized successfully!");
    info!(sink, config.tag, "Entering main loop...");

    Heartbeat::new(config)
        .run(platform, sink, delay, stop)
        .await
}
