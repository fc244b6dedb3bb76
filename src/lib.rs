//! Watch for USB devices being connected and disconnected by polling the host's native listing tool.
//!
//! `lsusb` is used on Linux and the device manager (`Get-PnpDevice`) on Windows. Each listing is parsed into [`types::DeviceRecord`]s, diffed against the previous listing with [`diff::diff`] and changes reported through a [`watch::Reporter`].
#![warn(missing_docs)]
use simple_logger::SimpleLogger;

pub mod config;
pub mod diff;
pub mod display;
pub mod error;
pub mod parser;
pub mod platform;
pub mod source;
pub mod types;
pub mod watch;

/// Level filter for a `-v` count
///
/// 0 is info, which includes connected and disconnected tables. 1 adds the initial snapshot at debug, 2 or more is trace including every snapshot.
pub fn log_level_filter(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

/// Set usbwatch module and binary log level from a `-v` count; see [`log_level_filter`]
///
/// With no `-v` the level can be overridden by `RUST_LOG`.
pub fn set_log_level(verbosity: u8) -> crate::error::Result<()> {
    let logger = SimpleLogger::new()
        .with_utc_timestamps()
        .with_level(log_level_filter(verbosity));
    match verbosity {
        // just use env if not passed
        0 => logger.env(),
        _ => logger,
    }
    .init()
    .map_err(|e| {
        crate::error::Error::new(
            crate::error::ErrorKind::Other("simple_logger"),
            &format!("Failed to set log level: {}", e),
        )
    })?;

    Ok(())
}

// run any Rust code as doctest
#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
