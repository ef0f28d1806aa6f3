use bringup_hal::{ChipFeature, EnumSet, PlatformAbstraction};

/// Bytes per mebibyte.
pub const MIB: u32 = 1024 * 1024;

/// Point in time view of what the chip is and what it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilitySnapshot {
    pub platform_id: &'static str,
    pub cores: u8,
    pub revision: u16,
    /// `None` when the flash could not be queried.
    pub flash_size: Option<u32>,
    pub features: EnumSet<ChipFeature>,
}

impl CapabilitySnapshot {
    /// Query the chip, then the flash size.
    ///
    /// A failing flash query only clears `flash_size`; the rest of the
    /// snapshot is unaffected.
    pub fn capture<P: PlatformAbstraction>(platform: &mut P) -> Self {
        let chip = platform.chip_info();
        let flash_size = platform.flash_size().ok();

        Self {
            platform_id: chip.model,
            cores: chip.cores,
            revision: chip.revision,
            flash_size,
            features: chip.features,
        }
    }

    /// Flash size in whole mebibytes, truncated.
    pub fn flash_size_mib(&self) -> Option<u32> {
        self.flash_size.map(|bytes| bytes / MIB)
    }

    pub fn has(&self, feature: ChipFeature) -> bool {
        self.features.contains(feature)
    }
}
