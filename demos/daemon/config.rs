use std::error::Error;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use radiotun::config::{DEFAULT_CHANNEL, DEFAULT_DEVICE};

/// On-disk daemon configuration. Everything is optional; missing node
/// addresses fall back to the interactive selection.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub bridge: BridgeSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BridgeSection {
    #[serde(default = "default_device")]
    pub device: String,
    #[serde(default = "default_channel")]
    pub channel: u8,
    pub this_node: Option<u16>,
    pub peer_node: Option<u16>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LoggingSection {
    #[serde(default = "default_loglevel")]
    pub loglevel: u8,
}

fn default_device() -> String {
    DEFAULT_DEVICE.to_string()
}

fn default_channel() -> u8 {
    DEFAULT_CHANNEL
}

fn default_loglevel() -> u8 {
    4
}

impl Default for BridgeSection {
    fn default() -> Self {
        Self {
            device: default_device(),
            channel: default_channel(),
            this_node: None,
            peer_node: None,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            loglevel: default_loglevel(),
        }
    }
}

impl LoggingSection {
    pub fn log_filter(&self) -> &'static str {
        match self.loglevel {
            0 | 1 => "error",
            2 => "warn",
            3 | 4 => "info",
            5 | 6 => "debug",
            _ => "trace",
        }
    }
}

impl FileConfig {
    /// Loads the configuration file, or the defaults when none exists.
    /// An explicitly named file must parse; a missing default file is
    /// not an error.
    pub fn load(custom_path: Option<&Path>) -> Result<(Self, Option<PathBuf>), Box<dyn Error>> {
        if let Some(path) = custom_path {
            let content = std::fs::read_to_string(path)?;
            return Ok((toml::from_str(&content)?, Some(path.to_path_buf())));
        }

        let default_path = PathBuf::from("radiotun.toml");
        if default_path.exists() {
            let content = std::fs::read_to_string(&default_path)?;
            return Ok((toml::from_str(&content)?, Some(default_path)));
        }

        Ok((Self::default(), None))
    }
}
