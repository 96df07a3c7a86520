//! `[zones]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [zones]
//! style = "compact"   # or "pretty" (default)
//! ascii = false       # keep UTF-8 names unescaped
//!
//! # Optional: replaces the built-in table
//! [[zones.zone]]
//! name = "Ground floor"
//! channels = [1, 2, 3]
//! ```

use serde::{Deserialize, Serialize};

use crate::zones::{JsonStyle, Zone};

/// Zone table output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZonesConfig {
    /// JSON layout.
    pub style: JsonStyle,

    /// Escape non-ASCII characters as `\uXXXX`.
    pub ascii: bool,

    /// Custom zone table; empty means the built-in one.
    pub zone: Vec<Zone>,
}

impl Default for ZonesConfig {
    fn default() -> Self {
        Self {
            style: JsonStyle::Pretty,
            ascii: true,
            zone: Vec::new(),
        }
    }
}

impl ZonesConfig {
    /// Zones to print: configured ones, or the built-in table.
    pub fn zones(&self) -> Vec<Zone> {
        if self.zone.is_empty() {
            crate::zones::builtin()
        } else {
            self.zone.clone()
        }
    }
}
