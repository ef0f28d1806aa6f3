use crate::config::Config;
use bringup_hal::{LogSink, PlatformAbstraction, info};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use embedded_hal_async::delay::DelayNs;

/// Pause between two heartbeats.
pub const HEARTBEAT_INTERVAL_MS: u32 = 5000;

/// Periodic liveness log.
///
/// The counter starts at zero and wraps at `u32::MAX`.
pub struct Heartbeat {
    counter: u32,
    tag: &'static str,
    interval_ms: u32,
}

impl Heartbeat {
    pub fn new(config: &Config) -> Self {
        Self {
            counter: 0,
            tag: config.tag,
            interval_ms: config.heartbeat_interval_ms,
        }
    }

    /// Iterations completed so far.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Count one iteration and log it together with the free heap.
    pub fn beat<P, L>(&mut self, platform: &P, sink: &mut L) -> u32
    where
        P: PlatformAbstraction,
        L: LogSink,
    {
        self.counter = self.counter.wrapping_add(1);
        info!(
            sink,
            self.tag,
            "Main loop iteration: {} | Free heap: {} bytes",
            self.counter,
            platform.free_heap()
        );
        self.counter
    }

    /// Beat, then sleep, until `stop` is raised.
    ///
    /// `stop` is only looked at before each beat; a signal raised during the
    /// sleep takes effect once the sleep has elapsed.
    pub async fn run<P, L, D, M>(
        &mut self,
        platform: &P,
        sink: &mut L,
        delay: &mut D,
        stop: &Signal<M, ()>,
    ) where
        P: PlatformAbstraction,
        L: LogSink,
        D: DelayNs,
        M: RawMutex,
    {
        while !stop.signaled() {
            self.beat(platform, sink);
            delay.delay_ms(self.interval_ms).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bringup_hal::dummy::{DummyPlatform, RecordingSink};
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    /// Records every requested sleep and raises `stop` after `limit` of them.
    ///
    /// Also notes how often the heap had been read when each sleep began.
    struct StopAfter<'a> {
        limit: usize,
        requested: Vec<u32>,
        heap_queries_at_sleep: Vec<u32>,
        platform: &'a DummyPlatform,
        stop: &'a Signal<NoopRawMutex, ()>,
    }

    impl<'a> StopAfter<'a> {
        fn new(
            limit: usize,
            platform: &'a DummyPlatform,
            stop: &'a Signal<NoopRawMutex, ()>,
        ) -> Self {
            Self {
                limit,
                requested: Vec::new(),
                heap_queries_at_sleep: Vec::new(),
                platform,
                stop,
            }
        }
    }

    impl DelayNs for StopAfter<'_> {
        async fn delay_ns(&mut self, _ns: u32) {
            panic!("heartbeat must sleep in milliseconds");
        }

        async fn delay_ms(&mut self, ms: u32) {
            self.requested.push(ms);
            self.heap_queries_at_sleep.push(self.platform.heap_queries());
            if self.requested.len() >= self.limit {
                self.stop.signal(());
            }
        }
    }

    #[test]
    fn counter_starts_at_zero_and_counts_beats() {
        let platform = DummyPlatform::default().with_free_heap(100_000);
        let mut sink = RecordingSink::<8>::new();
        let mut heartbeat = Heartbeat::new(&Config::default());

        assert_eq!(heartbeat.counter(), 0);
        assert_eq!(heartbeat.beat(&platform, &mut sink), 1);
        assert_eq!(heartbeat.counter(), 1);
        assert_eq!(
            sink.messages().next(),
            Some("Main loop iteration: 1 | Free heap: 100000 bytes")
        );
    }

    #[test]
    fn each_beat_reads_heap_once() {
        let mut platform = DummyPlatform::default().with_free_heap(50_000);
        let mut sink = RecordingSink::<8>::new();
        let mut heartbeat = Heartbeat::new(&Config::default());

        heartbeat.beat(&platform, &mut sink);
        platform.set_free_heap(48_512);
        heartbeat.beat(&platform, &mut sink);

        assert_eq!(platform.heap_queries(), 2);
        let lines: Vec<&str> = sink.messages().collect();
        assert_eq!(
            lines,
            [
                "Main loop iteration: 1 | Free heap: 50000 bytes",
                "Main loop iteration: 2 | Free heap: 48512 bytes",
            ]
        );
    }

    #[test]
    fn counter_wraps() {
        let platform = DummyPlatform::default();
        let mut sink = RecordingSink::<8>::new();
        let mut heartbeat = Heartbeat::new(&Config::default());
        heartbeat.counter = u32::MAX;

        assert_eq!(heartbeat.beat(&platform, &mut sink), 0);
        assert_eq!(heartbeat.beat(&platform, &mut sink), 1);
    }

    #[test]
    fn run_beats_once_per_sleep_until_stopped() {
        let stop = Signal::<NoopRawMutex, ()>::new();
        let platform = DummyPlatform::default().with_free_heap(100_000);
        let mut sink = RecordingSink::<16>::new();
        let mut delay = StopAfter::new(5, &platform, &stop);
        let mut heartbeat = Heartbeat::new(&Config::default());

        block_on(heartbeat.run(&platform, &mut sink, &mut delay, &stop));

        assert_eq!(heartbeat.counter(), 5);
        assert_eq!(platform.heap_queries(), 5);
        assert_eq!(sink.records().len(), 5);
        assert_eq!(delay.requested, [HEARTBEAT_INTERVAL_MS; 5]);
        for (i, line) in sink.messages().enumerate() {
            assert!(line.starts_with(&format!("Main loop iteration: {} |", i + 1)));
        }
    }

    #[test]
    fn beat_happens_before_each_sleep() {
        let stop = Signal::<NoopRawMutex, ()>::new();
        let platform = DummyPlatform::default().with_free_heap(100_000);
        let mut sink = RecordingSink::<8>::new();
        let mut delay = StopAfter::new(3, &platform, &stop);
        let mut heartbeat = Heartbeat::new(&Config::default());

        block_on(heartbeat.run(&platform, &mut sink, &mut delay, &stop));

        // sleep number i starts after exactly i + 1 heap reads
        assert_eq!(delay.heap_queries_at_sleep, [1, 2, 3]);
        assert_eq!(sink.records().len(), 3);
    }

    #[test]
    fn raised_stop_prevents_first_beat() {
        let stop = Signal::<NoopRawMutex, ()>::new();
        stop.signal(());
        let platform = DummyPlatform::default();
        let mut sink = RecordingSink::<4>::new();
        let mut delay = StopAfter::new(1, &platform, &stop);
        let mut heartbeat = Heartbeat::new(&Config::default());

        block_on(heartbeat.run(&platform, &mut sink, &mut delay, &stop));

        assert_eq!(heartbeat.counter(), 0);
        assert_eq!(platform.heap_queries(), 0);
        assert!(sink.records().is_empty());
        assert!(delay.requested.is_empty());
    }

    #[test]
    fn interval_is_5000_ms_by_default() {
        assert_eq!(Config::default().heartbeat_interval_ms, 5000);
    }
}
