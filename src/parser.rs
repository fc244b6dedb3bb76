//! Convert raw listing lines into [`DeviceRecord`]s
//!
//! Neither parser fails: malformed input gives fewer or partially populated records.
//!
//! ```
//! use usbwatch::parser;
//! use usbwatch::platform::Platform;
//!
//! let lines = ["Class  FriendlyName", "-----  ------------", "USB    Mouse"];
//! let records = parser::parse(&lines, Platform::DeviceManager);
//! assert_eq!(records[0].get("FriendlyName"), Some("Mouse"));
//! ```
use crate::platform::Platform;
use crate::types::{DeviceRecord, Snapshot};

/// Parse `lines` as output from the `platform` listing tool
pub fn parse<S: AsRef<str>>(lines: &[S], platform: Platform) -> Snapshot {
    match platform {
        Platform::DeviceManager => parse_device_manager(lines),
        Platform::UsbList => parse_usb_list(lines),
    }
}

/// Each non-blank line is one record holding the whole line under [`crate::types::DEVICE_FIELD`]
pub fn parse_usb_list<S: AsRef<str>>(lines: &[S]) -> Snapshot {
    lines
        .iter()
        .map(|l| l.as_ref())
        .filter(|l| !l.trim().is_empty())
        .map(DeviceRecord::from_line)
        .collect()
}

/// Is `line` something that looks like a table header underline: blank or just dashes
fn is_separator(line: &str) -> bool {
    line.chars().all(|c| c == '-' || c.is_whitespace())
}

/// Tabular output: line 0 is the header, line 1 the header underline and the rest rows
///
/// Rows are whitespace split and paired with header names in order. Extra tokens are dropped and short rows only fill the leading fields. Line 1 is always skipped; it is not checked to actually be a separator.
pub fn parse_device_manager<S: AsRef<str>>(lines: &[S]) -> Snapshot {
    let Some(header) = lines.first() else {
        return Vec::new();
    };
    let header: Vec<&str> = header.as_ref().split_whitespace().collect();

    if let Some(separator) = lines.get(1).map(|l| l.as_ref()) {
        if !is_separator(separator) {
            log::warn!(
                "Second line of device listing does not look like a header separator, columns may be misaligned: {:?}",
                separator
            );
        }
    }

    lines
        .iter()
        .skip(2)
        .map(|l| l.as_ref())
        .filter(|l| !l.trim().is_empty())
        .map(|l| DeviceRecord::from_pairs(header.iter().copied().zip(l.split_whitespace())))
        // only possible with a blank header
        .filter(|r| !r.is_empty())
        .collect()
}
