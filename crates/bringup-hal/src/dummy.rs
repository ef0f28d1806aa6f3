//! Host side stand-ins for a real board.
use crate::chip::{ChipFeature, ChipInfo};
use crate::log::{Level, LogSink};
use crate::platform::{PlatformAbstraction, PlatformError};
use core::cell::Cell;
use core::fmt::{self, Write};
use enumset::EnumSet;

/// Platform with canned answers to every query.
#[derive(Debug)]
pub struct DummyPlatform {
    runtime_version: &'static str,
    chip: ChipInfo,
    flash: Result<u32, PlatformError>,
    heap: u32,
    heap_queries: Cell<u32>,
}

impl Default for DummyPlatform {
    fn default() -> Self {
        Self {
            runtime_version: "dummy",
            chip: ChipInfo {
                model: "dummy",
                cores: 1,
                revision: 0,
                features: EnumSet::empty(),
            },
            flash: Ok(4 * 1024 * 1024),
            heap: 0,
            heap_queries: Cell::new(0),
        }
    }
}

impl DummyPlatform {
    pub fn with_runtime_version(mut self, version: &'static str) -> Self {
        self.runtime_version = version;
        self
    }

    pub fn with_chip_info(mut self, chip: ChipInfo) -> Self {
        self.chip = chip;
        self
    }

    pub fn with_features(mut self, features: EnumSet<ChipFeature>) -> Self {
        self.chip.features = features;
        self
    }

    pub fn with_flash_size(mut self, flash: Result<u32, PlatformError>) -> Self {
        self.flash = flash;
        self
    }

    pub fn with_free_heap(mut self, bytes: u32) -> Self {
        self.heap = bytes;
        self
    }

    /// Change the free heap reported from now on.
    pub fn set_free_heap(&mut self, bytes: u32) {
        self.heap = bytes;
    }

    /// Number of times [`PlatformAbstraction::free_heap`] was called.
    pub fn heap_queries(&self) -> u32 {
        self.heap_queries.get()
    }
}

impl PlatformAbstraction for DummyPlatform {
    fn runtime_version(&self) -> &str {
        self.runtime_version
    }

    fn chip_info(&mut self) -> ChipInfo {
        self.chip
    }

    fn flash_size(&mut self) -> Result<u32, PlatformError> {
        self.flash
    }

    fn free_heap(&self) -> u32 {
        self.heap_queries.set(self.heap_queries.get().wrapping_add(1));
        self.heap
    }
}

/// One captured log record.
#[derive(Debug, Clone)]
pub struct Record<const LEN: usize> {
    pub level: Level,
    pub tag: heapless::String<16>,
    pub message: heapless::String<LEN>,
}

/// Sink that keeps the last `N` records in memory.
///
/// Records past capacity are dropped, as are characters past `LEN`.
#[derive(Debug, Default)]
pub struct RecordingSink<const N: usize, const LEN: usize = 96> {
    records: heapless::Vec<Record<LEN>, N>,
    dropped: usize,
}

impl<const N: usize, const LEN: usize> RecordingSink<N, LEN> {
    pub fn new() -> Self {
        Self {
            records: heapless::Vec::new(),
            dropped: 0,
        }
    }

    pub fn records(&self) -> &[Record<LEN>] {
        &self.records
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.message.as_str())
    }

    /// Records that did not fit.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

/// Writer that silently truncates once the string is full.
struct Truncating<'a, const LEN: usize>(&'a mut heapless::String<LEN>);

impl<const LEN: usize> Write for Truncating<'_, LEN> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

impl<const N: usize, const LEN: usize> LogSink for RecordingSink<N, LEN> {
    fn log(&mut self, level: Level, tag: &str, args: fmt::Arguments<'_>) {
        let mut record = Record {
            level,
            tag: heapless::String::new(),
            message: heapless::String::new(),
        };
        let _ = Truncating(&mut record.tag).write_str(tag);
        let _ = Truncating(&mut record.message).write_fmt(args);

        if self.records.push(record).is_err() {
            self.dropped += 1;
        }
    }
}
