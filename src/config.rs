use std::collections::BTreeMap;
use std::fmt;
use std::net::IpAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
    Choria,
}

impl OutputMode {
    pub fn from_flags(json: bool, choria: bool) -> Self {
        if json {
            OutputMode::Json
        } else if choria {
            OutputMode::Choria
        } else {
            OutputMode::Text
        }
    }

    /// Whether stdout is expected to be machine-readable.
    pub fn is_structured(&self) -> bool {
        !matches!(self, OutputMode::Text)
    }
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub output_mode: OutputMode,
    pub verbose: bool,
}

/// Address and credentials of the plug a command talks to.
#[derive(Clone)]
pub struct DeviceTarget {
    pub address: IpAddr,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for DeviceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceTarget")
            .field("address", &self.address)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Labels attached to Choria metric output, kept sorted for stable JSON.
pub type Labels = BTreeMap<String, String>;
