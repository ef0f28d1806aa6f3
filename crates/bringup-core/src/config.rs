use crate::heartbeat::HEARTBEAT_INTERVAL_MS;

/// Application settings fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Shown in the boot banner.
    pub product_name: &'static str,
    /// Tag attached to every log record.
    pub tag: &'static str,
    pub heartbeat_interval_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            product_name: "ESP32 Starter Project",
            tag: "MAIN",
            heartbeat_interval_ms: HEARTBEAT_INTERVAL_MS,
        }
    }
}

impl Config {
    pub const fn with_product_name(mut self, product_name: &'static str) -> Self {
        self.product_name = product_name;
        self
    }

    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = tag;
        self
    }
}
