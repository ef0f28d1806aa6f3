use crate::chip::ChipInfo;

/// Failure reported by a fallible platform query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// The flash responded but its size could not be decoded.
    UnknownSize,
}

/// Narrow query interface a board offers to the application.
///
/// Only the flash query is fallible. Chip identification and heap statistics
/// are read from registers and allocator bookkeeping that are always present
/// once the board has booted.
pub trait PlatformAbstraction {
    /// Version string of the runtime the firmware was built against.
    fn runtime_version(&self) -> &str;

    fn chip_info(&mut self) -> ChipInfo;

    /// Size of the attached flash in bytes.
    fn flash_size(&mut self) -> Result<u32, PlatformError>;

    /// Bytes currently available on the heap.
    fn free_heap(&self) -> u32;
}
