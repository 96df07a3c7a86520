//! C++ source emission.
//!
//! Both variants share the preamble and the byte arrays and differ in what
//! follows them:
//!
//! - [`TableEmitter`]: `StaticEndpoint` table consumed by `static.h`
//! - [`RoutesEmitter`]: a function registering one GET handler per path
//!
//! The exact text is consumed by the firmware build; keep it stable.

mod routes;
mod table;

pub use routes::RoutesEmitter;
pub use table::TableEmitter;

use std::io::{self, Write};

use crate::asset::{EncodedAsset, Manifest};
use crate::config::EmbedConfig;

/// First line of every generated file.
pub const BANNER: &str = "// File generated automatically, do not modify.";

/// A generated source layout.
pub trait Emit {
    /// Write the complete source text for `manifest`.
    fn emit(&self, manifest: &Manifest, out: &mut dyn Write) -> io::Result<()>;

    /// Emit into memory.
    fn render(&self, manifest: &Manifest) -> io::Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.emit(manifest, &mut buf)?;
        Ok(buf)
    }
}

/// Write the banner, the given include lines and a blank line.
pub(crate) fn write_preamble(out: &mut dyn Write, includes: &[String]) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    for include in includes {
        writeln!(out, "{include}")?;
    }
    writeln!(out)
}

/// Write one array per asset, each followed by a blank line.
///
/// ```text
/// // css/app.css
/// static const unsigned char CSS__APP_CSS[] PROGMEM = {
///     0x1f, 0x8b, 0x08, ...
/// };
/// ```
pub(crate) fn write_arrays(
    out: &mut dyn Write,
    assets: &[EncodedAsset],
    config: &EmbedConfig,
) -> io::Result<()> {
    let indent = " ".repeat(config.indent);
    let storage = if config.storage.is_empty() {
        String::new()
    } else {
        format!(" {}", config.storage)
    };

    for asset in assets {
        writeln!(out, "// {}", asset.rel_path)?;
        writeln!(
            out,
            "static const unsigned char {}[]{} = {{",
            asset.symbol, storage
        )?;
        for line in byte_lines(&asset.data, config.wrap) {
            writeln!(out, "{indent}{line}")?;
        }
        writeln!(out, "}};")?;
        writeln!(out)?;
    }
    Ok(())
}

/// Format bytes as `0x%02x` tokens joined by `, `, greedily packed into
/// lines of at most `width` columns. Lines keep their trailing comma.
pub fn byte_lines(data: &[u8], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let last = data.len().saturating_sub(1);

    for (i, byte) in data.iter().enumerate() {
        let token = if i == last {
            format!("0x{byte:02x}")
        } else {
            format!("0x{byte:02x},")
        };

        if !line.is_empty() && line.len() + 1 + token.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&token);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Content type sent for an asset, `fallback_mime` when unknown.
pub(crate) fn content_type<'a>(mime: Option<&'static str>, config: &'a EmbedConfig) -> &'a str {
    match mime {
        Some(mime) => mime,
        None => config.fallback_mime.as_str(),
    }
}

/// Quote a string as a C/C++ literal.
pub fn c_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            // octal escapes never swallow following hex digits
            c if c.is_ascii_control() => out.push_str(&format!("\\{:03o}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
