use bringup_hal::{ChipFeature, ChipInfo, PlatformAbstraction, PlatformError};
use embedded_storage::ReadStorage;
use esp_hal::efuse::Efuse;
use esp_hal::peripherals::FLASH;
use esp_storage::FlashStorage;

/// Both Xtensa LX7 cores.
const CORES: u8 = 2;

pub struct PlatformDevkitC {
    flash: FlashStorage<'static>,
}

impl PlatformDevkitC {
    pub fn system_init(flash: FLASH<'static>) -> Self {
        Self {
            flash: FlashStorage::new(flash),
        }
    }
}

impl PlatformAbstraction for PlatformDevkitC {
    fn runtime_version(&self) -> &str {
        crate::ESP_APP_DESC.idf_ver()
    }

    fn chip_info(&mut self) -> ChipInfo {
        ChipInfo {
            model: esp_hal::chip!(),
            cores: CORES,
            revision: Efuse::chip_revision(),
            // 2.4 GHz Wi-Fi and BLE 5, no Bluetooth Classic on the S3
            features: ChipFeature::WifiBgn | ChipFeature::Ble,
        }
    }

    fn flash_size(&mut self) -> Result<u32, PlatformError> {
        // capacity is decoded from the image header, 0 means unrecognised
        match self.flash.capacity() {
            0 => Err(PlatformError::UnknownSize),
            bytes => u32::try_from(bytes).map_err(|_| PlatformError::UnknownSize),
        }
    }

    fn free_heap(&self) -> u32 {
        esp_alloc::HEAP.free() as u32
    }
}
