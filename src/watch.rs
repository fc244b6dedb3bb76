//! Poll for USB devices being connected and disconnected.
//!
//! The [`Monitor`] lists devices every interval, diffs against the previous listing and reports anything connected or disconnected. The previous snapshot is passed between ticks by value; nothing else holds it.
//!
//! ```no_run
//! use std::time::Duration;
//! use usbwatch::platform::Platform;
//! use usbwatch::display::PrintSettings;
//! use usbwatch::watch::{LogReporter, Monitor};
//!
//! let source = usbwatch::source::from_platform(Platform::detect());
//! let reporter = LogReporter::new(PrintSettings::default());
//! Monitor::new(source, reporter, Duration::from_secs(5)).run();
//! ```
use std::fmt;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::diff::{diff, DiffResult};
use crate::display::{render_table, PrintSettings};
use crate::parser;
use crate::source::DeviceSource;
use crate::types::{DeviceRecord, Snapshot};

/// Device event and when it was observed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEvent {
    /// Devices seen for the first time at this time
    Connected(DateTime<Local>),
    /// Devices no longer seen at this time
    Disconnected(DateTime<Local>),
}

impl WatchEvent {
    /// Time of the event
    pub fn time(&self) -> DateTime<Local> {
        match self {
            WatchEvent::Connected(t) | WatchEvent::Disconnected(t) => *t,
        }
    }
}

impl fmt::Display for WatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WatchEvent::Connected(_) => write!(f, "Devices connected"),
            WatchEvent::Disconnected(_) => write!(f, "Devices disconnected"),
        }
    }
}

/// Receives non-empty sets of connected or disconnected devices
pub trait Reporter {
    /// Report `records` for `event`; only called with at least one record
    fn report(&mut self, event: WatchEvent, records: &[DeviceRecord]);

    /// Snapshot at start-up or each tick, for verbose output
    fn snapshot(&mut self, _kind: SnapshotKind, _records: &[DeviceRecord]) {}
}

/// Which snapshot is passed to [`Reporter::snapshot`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotKind {
    /// Taken before polling starts
    Initial,
    /// Taken on a poll tick
    Current,
}

impl fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SnapshotKind::Initial => write!(f, "Initial devices"),
            SnapshotKind::Current => write!(f, "Current devices"),
        }
    }
}

/// Level connected and disconnected reports are logged at; visible at the default verbosity
pub const REPORT_LEVEL: log::Level = log::Level::Info;

/// [`Reporter`] writing to the `log` facade: heading and table in one [`REPORT_LEVEL`] event
#[derive(Debug, Default)]
pub struct LogReporter {
    settings: PrintSettings,
}

impl LogReporter {
    /// New reporter rendering tables with `settings`
    pub fn new(settings: PrintSettings) -> Self {
        LogReporter { settings }
    }

    /// Heading for `event` followed by the table of `records`
    pub fn format_report(&self, event: WatchEvent, records: &[DeviceRecord]) -> String {
        format!("{}:\n{}", event, render_table(records, &self.settings))
    }
}

impl Reporter for LogReporter {
    fn report(&mut self, event: WatchEvent, records: &[DeviceRecord]) {
        log::log!(REPORT_LEVEL, "{}", self.format_report(event, records));
    }

    fn snapshot(&mut self, kind: SnapshotKind, records: &[DeviceRecord]) {
        // every tick is noisy so only at trace
        let level = match kind {
            SnapshotKind::Initial => log::Level::Debug,
            SnapshotKind::Current => log::Level::Trace,
        };
        if log::log_enabled!(level) {
            log::log!(level, "{}:", kind);
            log::log!(level, "\n{}", render_table(records, &self.settings));
        }
    }
}

/// Polling loop state: where devices come from, where changes go and how often
pub struct Monitor<R: Reporter> {
    source: Box<dyn DeviceSource>,
    reporter: R,
    interval: Duration,
}

impl<R: Reporter> fmt::Debug for Monitor<R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Monitor")
            .field("source", &self.source)
            .field("interval", &self.interval)
            .finish()
    }
}

impl<R: Reporter> Monitor<R> {
    /// New [`Monitor`] polling `source` every `interval`
    pub fn new(source: Box<dyn DeviceSource>, reporter: R, interval: Duration) -> Self {
        Monitor {
            source,
            reporter,
            interval,
        }
    }

    /// The reporter changes are sent to
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Acquire and parse the current devices; acquisition failure gives an empty snapshot
    pub fn snapshot(&self) -> Snapshot {
        let lines = self.source.acquire_or_empty();
        parser::parse(&lines, self.source.platform())
    }

    /// First snapshot, taken before polling starts
    pub fn initial_snapshot(&mut self) -> Snapshot {
        let snapshot = self.snapshot();
        self.reporter.snapshot(SnapshotKind::Initial, &snapshot);
        snapshot
    }

    /// One poll: snapshot, diff against `previous`, report changes and return the snapshot to keep as previous
    pub fn tick(&mut self, previous: Snapshot) -> (Snapshot, DiffResult) {
        let current = self.snapshot();
        self.reporter.snapshot(SnapshotKind::Current, &current);

        let result = diff(&previous, &current);
        let now = Local::now();
        if !result.added.is_empty() {
            self.reporter.report(WatchEvent::Connected(now), &result.added);
        }
        if !result.removed.is_empty() {
            self.reporter
                .report(WatchEvent::Disconnected(now), &result.removed);
        }

        (current, result)
    }

    /// Poll forever; only ends when the process is terminated
    pub fn run(mut self) -> ! {
        log::info!(
            "Starting USB device monitoring on {} with {}...",
            std::env::consts::OS,
            self.source.platform().tool_name()
        );
        let mut previous = self.initial_snapshot();

        loop {
            thread::sleep(self.interval);
            (previous, _) = self.tick(previous);
        }
    }
}
