//! Device sources: run the native device listing command and return its raw lines
//!
//! ```no_run
//! use usbwatch::platform::Platform;
//! use usbwatch::source;
//!
//! let source = source::from_platform(Platform::detect());
//! for line in source.acquire().unwrap() {
//!     println!("{}", line);
//! }
//! ```
use std::process::Command;

use crate::error::{Error, ErrorKind, Result};
use crate::platform::Platform;

/// Something that can list the devices currently attached as raw text lines
pub trait DeviceSource: std::fmt::Debug {
    /// Platform the lines come from; decides how they are parsed
    fn platform(&self) -> Platform;

    /// Get the current raw device listing
    ///
    /// Fails with [`ErrorKind::Execution`] if the listing tool is missing or does not exit successfully.
    fn acquire(&self) -> Result<Vec<String>>;

    /// [`DeviceSource::acquire`] but failure is logged and treated as no devices observed
    fn acquire_or_empty(&self) -> Vec<String> {
        match self.acquire() {
            Ok(lines) => lines,
            Err(e) => {
                log::error!("Failed to list devices on {}: {:#}", self.platform(), e);
                Vec::new()
            }
        }
    }
}

/// Split a command's whole output into lines, trimming the output first
///
/// Blank output gives no lines rather than a single empty one.
pub fn split_output(output: &str) -> Vec<String> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.lines().map(|l| l.to_string()).collect()
}

/// [`DeviceSource`] that runs an external program synchronously and captures stdout
#[derive(Debug, Clone)]
pub struct CommandSource {
    platform: Platform,
    program: String,
    args: Vec<String>,
}

impl CommandSource {
    /// Source running the listing command for `platform`
    pub fn new(platform: Platform) -> Self {
        let (program, args) = platform.command();
        CommandSource::with_command(platform, program, args)
    }

    /// Source running `program` with `args` whose output is parsed as `platform`
    pub fn with_command<S: AsRef<str>>(platform: Platform, program: &str, args: &[S]) -> Self {
        CommandSource {
            platform,
            program: program.to_string(),
            args: args.iter().map(|a| a.as_ref().to_string()).collect(),
        }
    }

    /// Program that is run
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl DeviceSource for CommandSource {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn acquire(&self) -> Result<Vec<String>> {
        log::trace!("Running {} {:?}", self.program, self.args);
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| {
                Error::new(
                    ErrorKind::Execution,
                    &format!("Failed to run '{}': {}", self.program, e),
                )
            })?;

        if !output.status.success() {
            return Err(Error::new_exit_status(
                &self.program,
                output.status,
                &String::from_utf8_lossy(&output.stderr),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(split_output(&stdout))
    }
}

/// Select the [`DeviceSource`] for `platform`; done once at start-up
pub fn from_platform(platform: Platform) -> Box<dyn DeviceSource> {
    Box::new(CommandSource::new(platform))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_output() {
        assert_eq!(
            split_output("\r\nheader\r\n----\r\nrow one\r\n\r\n"),
            vec!["header", "----", "row one"]
        );
        assert!(split_output("   \n\n").is_empty());
        assert!(split_output("").is_empty());
    }

    #[test]
    fn test_missing_program() {
        let source = CommandSource::with_command(
            Platform::UsbList,
            "usbwatch-this-program-does-not-exist",
            &[] as &[&str],
        );
        let err = source.acquire().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Execution);
        assert!(source.acquire_or_empty().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_captures_stdout() {
        let source = CommandSource::with_command(
            Platform::UsbList,
            "sh",
            &["-c", "printf '\\nBus 001 Device 001: ID 1d6b:0002 Linux Foundation 2.0 root hub\\nBus 001 Device 002: ID 1234:5678 Vendor\\n\\n'"],
        );
        assert_eq!(
            source.acquire().unwrap(),
            vec![
                "Bus 001 Device 001: ID 1d6b:0002 Linux Foundation 2.0 root hub",
                "Bus 001 Device 002: ID 1234:5678 Vendor"
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit() {
        let source =
            CommandSource::with_command(Platform::UsbList, "sh", &["-c", "echo partial; echo oops >&2; exit 3"]);
        let err = source.acquire().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Execution);
        assert!(err.message().contains("oops"));
        // partial stdout is discarded, not half-parsed
        assert!(source.acquire_or_empty().is_empty());
    }
}
