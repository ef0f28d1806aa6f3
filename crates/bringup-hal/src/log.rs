use core::fmt;

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Info,
}

/// Destination for log records.
///
/// Sinks are fire-and-forget: a record that cannot be delivered is dropped.
pub trait LogSink {
    fn log(&mut self, level: Level, tag: &str, args: fmt::Arguments<'_>);
}

impl<S: LogSink + ?Sized> LogSink for &mut S {
    fn log(&mut self, level: Level, tag: &str, args: fmt::Arguments<'_>) {
        (**self).log(level, tag, args)
    }
}

/// `info!(sink, tag, "fmt", args..)`
#[macro_export]
macro_rules! info {
    ($sink:expr, $tag:expr, $($arg:tt)*) => {{
        use $crate::log::LogSink as _;
        $sink.log($crate::log::Level::Info, $tag, format_args!($($arg)*))
    }};
}
