//! Config for usbwatch binary
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::display::PrintSettings;
use crate::error::{Error, ErrorKind, Result};
use crate::platform::Platform;

const CONF_DIR: &str = "usbwatch";
const CONF_NAME: &str = "usbwatch.json";

/// Seconds between polls unless configured
pub const DEFAULT_INTERVAL_SECS: u64 = 5;

fn default_interval() -> u64 {
    DEFAULT_INTERVAL_SECS
}

/// Operator settings; every field has a default matching the reference behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// Seconds between polls
    #[serde(default = "default_interval")]
    pub interval: u64,
    /// Force listing platform rather than detecting from host
    #[serde(default)]
    pub platform: Option<Platform>,
    /// Disable coloured tables
    #[serde(default)]
    pub no_colour: bool,
    /// Disable table column padding
    #[serde(default)]
    pub no_padding: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            interval: DEFAULT_INTERVAL_SECS,
            platform: None,
            no_colour: false,
            no_padding: false,
        }
    }
}

impl Config {
    /// Default new
    pub fn new() -> Config {
        Default::default()
    }

    /// Get example [`Config`]
    pub fn example() -> Config {
        Config {
            interval: 2,
            platform: Some(Platform::UsbList),
            ..Default::default()
        }
    }

    /// Attempt to read from .json format config at `file_path`
    pub fn from_file<P: AsRef<Path>>(file_path: P) -> Result<Config> {
        let f = File::open(file_path.as_ref()).map_err(|e| {
            Error::new(
                ErrorKind::Config,
                &format!("Failed to open {}: {}", file_path.as_ref().display(), e),
            )
        })?;
        let mut br = BufReader::new(f);
        let mut data = String::new();

        br.read_to_string(&mut data)?;
        let config = serde_json::from_str::<Config>(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Default config file location in the user config dir
    pub fn sys_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONF_DIR).join(CONF_NAME))
    }

    /// Config from [`Config::sys_path`] if the file exists else default
    pub fn sys() -> Result<Config> {
        match Self::sys_path() {
            Some(p) if p.exists() => {
                log::debug!("Loading config from {}", p.display());
                Self::from_file(p)
            }
            _ => {
                log::debug!("No system config, using default");
                Ok(Config::new())
            }
        }
    }

    /// Check values are usable
    pub fn validate(&self) -> Result<()> {
        if self.interval == 0 {
            return Err(Error::new(
                ErrorKind::Config,
                "interval must be at least 1 second",
            ));
        }
        Ok(())
    }

    /// Poll interval as a [`Duration`]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval)
    }

    /// Configured platform or the host's
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::detect)
    }

    /// [`PrintSettings`] for reporter tables
    pub fn print_settings(&self) -> PrintSettings {
        PrintSettings {
            no_padding: self.no_padding,
            colours: !self.no_colour,
        }
    }
}
