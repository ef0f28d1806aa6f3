use bringup_hal::{Level, LogSink};
use core::fmt;
use defmt::Display2Format;

/// Forwards records to the global defmt logger.
pub struct DefmtSink;

impl LogSink for DefmtSink {
    fn log(&mut self, level: Level, tag: &str, args: fmt::Arguments<'_>) {
        let message = Display2Format(&args);
        match level {
            Level::Info => defmt::info!("{=str}: {}", tag, message),
        }
    }
}
