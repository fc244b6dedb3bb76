//! Helpers for tests using captured listing tool output
#![allow(dead_code)]
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufReader, Read};

use usbwatch::error::{Error, ErrorKind, Result};
use usbwatch::platform::Platform;
use usbwatch::source::{split_output, DeviceSource};
use usbwatch::types::DeviceRecord;
use usbwatch::watch::{Reporter, WatchEvent};

/// Output of lsusb
pub const LSUSB_OUTPUT: &str = "./tests/data/lsusb_list.txt";
/// Output of lsusb with a flash drive plugged in
pub const LSUSB_OUTPUT_PLUGGED: &str = "./tests/data/lsusb_list_plugged.txt";
/// Output of `powershell -Command "Get-PnpDevice -PresentOnly"`
pub const PNP_OUTPUT: &str = "./tests/data/pnp_list.txt";
/// Output of `Get-PnpDevice -PresentOnly` with the mouse unplugged and an unknown drive
pub const PNP_OUTPUT_UNPLUGGED: &str = "./tests/data/pnp_list_unplugged.txt";

pub fn read_dump(file_name: &str) -> BufReader<File> {
    let f = File::open(file_name).expect("Unable to open dump file");
    BufReader::new(f)
}

pub fn read_dump_to_string(file_name: &str) -> String {
    let mut ret = String::new();
    let mut br = read_dump(file_name);
    br.read_to_string(&mut ret)
        .unwrap_or_else(|_| panic!("Failed to read {}", file_name));
    ret
}

/// Dump as lines the way a [`DeviceSource`] returns them
pub fn read_dump_lines(file_name: &str) -> Vec<String> {
    split_output(&read_dump_to_string(file_name))
}

/// [`DeviceSource`] returning dump files in order; `None` is a failed run of the tool
#[derive(Debug)]
pub struct DumpSource {
    platform: Platform,
    dumps: RefCell<VecDeque<Option<&'static str>>>,
}

impl DumpSource {
    pub fn new(platform: Platform, dumps: &[Option<&'static str>]) -> Box<DumpSource> {
        Box::new(DumpSource {
            platform,
            dumps: RefCell::new(dumps.iter().copied().collect()),
        })
    }
}

impl DeviceSource for DumpSource {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn acquire(&self) -> Result<Vec<String>> {
        match self.dumps.borrow_mut().pop_front().flatten() {
            Some(dump) => Ok(read_dump_lines(dump)),
            None => Err(Error::new(ErrorKind::Execution, "dump source exhausted")),
        }
    }
}

/// [`Reporter`] keeping everything it is sent
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub connected: Vec<Vec<DeviceRecord>>,
    pub disconnected: Vec<Vec<DeviceRecord>>,
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: WatchEvent, records: &[DeviceRecord]) {
        match event {
            WatchEvent::Connected(_) => self.connected.push(records.to_vec()),
            WatchEvent::Disconnected(_) => self.disconnected.push(records.to_vec()),
        }
    }
}

/// Format an error message for when rendered output did not match the expected output.
pub fn format_output_error(expected: &str, actual: &str) -> String {
    let diff_text = diff::lines(expected, actual)
        .into_iter()
        .map(|diff| match diff {
            diff::Result::Left(l) => format!("-{}", l),
            diff::Result::Both(l, _) => format!(" {}", l),
            diff::Result::Right(r) => format!("+{}", r),
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Output did not match.\nShowing diff between expected and actual:\n{}\n",
        diff_text
    )
}

/// Assert two tables match ignoring row order; heading line must be first in both
pub fn assert_table_eq(expected: &str, actual: &str) {
    let normalize = |s: &str| {
        let mut lines = s.lines().map(|l| l.trim_end().to_string());
        let heading = lines.next().unwrap_or_default();
        let mut rows: Vec<String> = lines.collect();
        rows.sort();
        std::iter::once(heading).chain(rows).collect::<Vec<_>>().join("\n")
    };

    let (expected, actual) = (normalize(expected), normalize(actual));
    if expected != actual {
        panic!("{}", format_output_error(&expected, &actual));
    }
}
