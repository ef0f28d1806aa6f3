use crate::config::Config;
use crate::snapshot::CapabilitySnapshot;
use bringup_hal::{ChipFeature, LogSink, PlatformAbstraction, info};

const RULE: &str = "========================================";

/// One-shot boot report: banner, chip identity, feature flags and heap.
pub struct StartupReporter<'a> {
    config: &'a Config,
}

impl<'a> StartupReporter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn report<P, L>(&self, platform: &mut P, sink: &mut L)
    where
        P: PlatformAbstraction,
        L: LogSink,
    {
        self.banner(platform, sink);

        let snapshot = CapabilitySnapshot::capture(platform);
        self.chip_information(&snapshot, sink);

        info!(sink, self.config.tag, "  Free Heap: {} bytes", platform.free_heap());
    }

    fn banner<P, L>(&self, platform: &P, sink: &mut L)
    where
        P: PlatformAbstraction,
        L: LogSink,
    {
        let tag = self.config.tag;
        info!(sink, tag, "{}", RULE);
        info!(sink, tag, "{}", self.config.product_name);
        info!(sink, tag, "{}", RULE);
        info!(sink, tag, "ESP-IDF Version: {}", platform.runtime_version());
        info!(sink, tag, "");
    }

    fn chip_information<L: LogSink>(&self, snapshot: &CapabilitySnapshot, sink: &mut L) {
        let tag = self.config.tag;
        info!(sink, tag, "ESP32 Chip Information:");
        info!(sink, tag, "  Model: {}", snapshot.platform_id);
        info!(sink, tag, "  Cores: {}", snapshot.cores);
        info!(sink, tag, "  Silicon Revision: {}", snapshot.revision);

        if let Some(mib) = snapshot.flash_size_mib() {
            info!(sink, tag, "  Flash Size: {} MB", mib);
        }

        info!(sink, tag, "  Features:");
        for feature in ChipFeature::REPORTED {
            info!(
                sink,
                tag,
                "    {}: {}",
                feature.label(),
                yes_no(snapshot.has(feature))
            );
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}
