//! Host platform identification; decides which native tool lists devices and how its output is parsed
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

const PNP_PROGRAM: &str = "powershell";
const PNP_ARGS: &[&str] = &["-Command", "Get-PnpDevice -PresentOnly"];
const LSUSB_PROGRAM: &str = "lsusb";
const LSUSB_ARGS: &[&str] = &[];

/// Device listing platform, selected once at start-up
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Platform {
    /// Windows device manager through PowerShell `Get-PnpDevice`; tabular output with header row
    DeviceManager,
    /// `lsusb`; one device per line
    UsbList,
}

impl Platform {
    /// Platform for the host this was compiled for
    pub fn detect() -> Self {
        if cfg!(windows) {
            Platform::DeviceManager
        } else {
            Platform::UsbList
        }
    }

    /// Program and arguments that list present devices
    pub fn command(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            Platform::DeviceManager => (PNP_PROGRAM, PNP_ARGS),
            Platform::UsbList => (LSUSB_PROGRAM, LSUSB_ARGS),
        }
    }

    /// Name of the listing tool, for log messages
    pub fn tool_name(&self) -> &'static str {
        match self {
            Platform::DeviceManager => "device manager",
            Platform::UsbList => "lsusb",
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::detect()
    }
}
