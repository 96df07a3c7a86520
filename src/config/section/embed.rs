//! `[embed]` section configuration.
//!
//! Layout of the generated arrays, shared by both embedding commands.
//!
//! # Example
//!
//! ```toml
//! [embed]
//! header = "static.h"          # Included by the table output
//! storage = "PROGMEM"          # Array storage qualifier, "" to omit
//! table = "static_endpoints"   # Endpoint table symbol
//! wrap = 72                    # Column width of byte lines
//! indent = 4                   # Spaces before each byte line
//! level = 9                    # gzip level (0-9)
//! index = ["index.html", "index.htm"]
//! fallback_mime = "application/octet-stream"
//! ```

use serde::{Deserialize, Serialize};

use crate::asset::EncodeOptions;
use crate::utils::mime;

/// Array layout and compression settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    /// Header included at the top of the table output.
    pub header: String,

    /// Storage qualifier placed after the array declarator.
    pub storage: String,

    /// Symbol name of the `StaticEndpoint` table.
    pub table: String,

    /// Maximum width of a byte line, indent excluded.
    pub wrap: usize,

    /// Indentation of byte lines and table rows.
    pub indent: usize,

    /// gzip compression level.
    pub level: u32,

    /// Default documents that are also served at their directory path.
    pub index: Vec<String>,

    /// Content type for files without a known extension.
    pub fallback_mime: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        let encode = EncodeOptions::default();
        Self {
            header: "static.h".to_string(),
            storage: "PROGMEM".to_string(),
            table: "static_endpoints".to_string(),
            wrap: 72,
            indent: 4,
            level: encode.level,
            index: encode.index_names,
            fallback_mime: mime::types::OCTET_STREAM.to_string(),
        }
    }
}

impl EmbedConfig {
    /// Encoding options derived from this section.
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            level: self.level,
            index_names: self.index.clone(),
        }
    }
}
