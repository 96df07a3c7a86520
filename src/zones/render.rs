//! JSON rendering of the zone table.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue, ser::PrettyFormatter};

use super::Zone;

/// Output layout of the JSON object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum JsonStyle {
    /// Single line, `,` and `:` separators
    Compact,
    /// 4-space indentation, `: ` separators
    #[default]
    Pretty,
}

/// Render zones as a JSON object `{ name: mask }` in table order.
///
/// With `ascii`, non-ASCII characters are written as `\uXXXX` escapes
/// (surrogate pairs above the BMP).
pub fn render(zones: &[Zone], style: JsonStyle, ascii: bool) -> serde_json::Result<String> {
    let mut obj = Map::new();
    for zone in zones {
        obj.insert(zone.name.clone(), JsonValue::from(zone.mask()));
    }
    let value = JsonValue::Object(obj);

    let text = match style {
        JsonStyle::Compact => serde_json::to_string(&value)?,
        JsonStyle::Pretty => {
            let mut buf = Vec::new();
            let mut ser =
                serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
            value.serialize(&mut ser)?;
            String::from_utf8_lossy(&buf).into_owned()
        }
    };

    Ok(if ascii { escape_non_ascii(&text) } else { text })
}

/// Replace every non-ASCII character with its UTF-16 `\uXXXX` escape.
///
/// Only valid on serialized JSON: non-ASCII characters can only appear
/// inside string literals there.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for ch in json.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            for unit in ch.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}
