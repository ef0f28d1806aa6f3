#![cfg_attr(not(test), no_std)]
pub mod chip;
pub mod dummy;
pub mod log;
pub mod platform;

pub use chip::{ChipFeature, ChipInfo};
pub use enumset::EnumSet;
pub use log::{Level, LogSink};
pub use platform::{PlatformAbstraction, PlatformError};
