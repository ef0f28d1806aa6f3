use enumset::{EnumSet, EnumSetType};

/// Radio blocks a chip may carry.
#[derive(Debug, EnumSetType)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipFeature {
    /// 2.4 GHz Wi-Fi (802.11 b/g/n)
    WifiBgn,
    /// Bluetooth Classic
    Bluetooth,
    /// Bluetooth Low Energy
    Ble,
}

impl ChipFeature {
    /// Every feature, in the order reported at boot.
    pub const REPORTED: [ChipFeature; 3] =
        [ChipFeature::WifiBgn, ChipFeature::Bluetooth, ChipFeature::Ble];

    /// Human readable label.
    pub const fn label(self) -> &'static str {
        match self {
            ChipFeature::WifiBgn => "WiFi",
            ChipFeature::Bluetooth => "Bluetooth",
            ChipFeature::Ble => "BLE",
        }
    }
}

/// Identification data read from the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipInfo {
    /// Chip model, e.g. "esp32s3".
    pub model: &'static str,
    /// Number of logical cores, at least one.
    pub cores: u8,
    /// Silicon revision as `major * 100 + minor`.
    pub revision: u16,
    pub features: EnumSet<ChipFeature>,
}
