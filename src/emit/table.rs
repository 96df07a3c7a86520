//! Endpoint table variant.

use std::io::{self, Write};

use super::{Emit, c_string, content_type, write_arrays, write_preamble};
use crate::asset::Manifest;
use crate::config::EmbedConfig;

/// Byte arrays plus a sentinel-terminated `StaticEndpoint` table.
///
/// ```text
/// const StaticEndpoint static_endpoints[] = {
///     { "/index.html", "text/html", INDEX_HTML, 1234 },
///     { "/", "text/html", INDEX_HTML, 1234 },
///     { nullptr, nullptr, nullptr, 0 } };
/// ```
///
/// `static.h` hands the mime column straight to `send_P`, so rows without a
/// known content type carry `fallback_mime` instead of `nullptr`.
pub struct TableEmitter<'a> {
    config: &'a EmbedConfig,
}

impl<'a> TableEmitter<'a> {
    pub const fn new(config: &'a EmbedConfig) -> Self {
        Self { config }
    }
}

impl Emit for TableEmitter<'_> {
    fn emit(&self, manifest: &Manifest, out: &mut dyn Write) -> io::Result<()> {
        let includes = [format!("#include {}", c_string(&self.config.header))];
        write_preamble(out, &includes)?;
        write_arrays(out, manifest.assets(), self.config)?;

        let indent = " ".repeat(self.config.indent);
        writeln!(out)?;
        writeln!(out, "const StaticEndpoint {}[] = {{", self.config.table)?;
        for entry in manifest.entries() {
            writeln!(
                out,
                "{indent}{{ {}, {}, {}, {} }},",
                c_string(entry.path),
                c_string(content_type(entry.mime, self.config)),
                entry.symbol,
                entry.size
            )?;
        }
        writeln!(out, "{indent}{{ nullptr, nullptr, nullptr, 0 }} }};")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::{EncodeOptions, Manifest, gzip, scan_dir};
    use crate::emit::tests::sample_asset;
    use flate2::read::GzDecoder;
    use std::fs;
    use std::io::Read;
    use tempfile::TempDir;

    fn render(manifest: &Manifest) -> String {
        let config = EmbedConfig::default();
        String::from_utf8(TableEmitter::new(&config).render(manifest).unwrap()).unwrap()
    }

    /// Pull the bytes of one array back out of the generated text.
    fn array_bytes(text: &str, symbol: &str) -> Vec<u8> {
        let start = text.find(&format!("{symbol}[]")).unwrap();
        let body = &text[start..];
        let open = body.find('{').unwrap();
        let close = body.find("};").unwrap();
        body[open + 1..close]
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| u8::from_str_radix(t.trim_start_matches("0x"), 16).unwrap())
            .collect()
    }

    #[test]
    fn test_exact_layout() {
        let mut manifest = Manifest::new();
        manifest
            .push(sample_asset("css/app.css", &[0x1f, 0x8b], &["/css/app.css"]))
            .unwrap();
        manifest
            .push(sample_asset("blob", &[0x00], &["/blob"]))
            .unwrap();

        let expected = "\
// File generated automatically, do not modify.
#include \"static.h\"

// css/app.css
static const unsigned char CSS__APP_CSS[] PROGMEM = {
    0x1f, 0x8b
};

// blob
static const unsigned char BLOB[] PROGMEM = {
    0x00
};


const StaticEndpoint static_endpoints[] = {
    { \"/css/app.css\", \"text/css\", CSS__APP_CSS, 2 },
    { \"/blob\", \"application/octet-stream\", BLOB, 1 },
    { nullptr, nullptr, nullptr, 0 } };
";
        assert_eq!(render(&manifest), expected);
    }

    #[test]
    fn test_unknown_extension_row_gets_fallback_mime() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("firmware.bin2"), "\x00\x01\x02").unwrap();

        let manifest =
            Manifest::build(scan_dir(dir.path()).unwrap(), &EncodeOptions::default(), |_| {})
                .unwrap();
        let text = render(&manifest);

        assert!(text.contains("{ \"/firmware.bin2\", \"application/octet-stream\", FIRMWARE_BIN2,"));
        assert!(!text.contains("\", nullptr, "));

        let config = EmbedConfig {
            fallback_mime: "application/x-firmware".to_string(),
            ..EmbedConfig::default()
        };
        let text = String::from_utf8(TableEmitter::new(&config).render(&manifest).unwrap()).unwrap();
        assert!(text.contains("{ \"/firmware.bin2\", \"application/x-firmware\", FIRMWARE_BIN2,"));
    }

    #[test]
    fn test_empty_manifest_has_only_sentinel() {
        let text = render(&Manifest::new());
        assert!(text.ends_with(
            "\nconst StaticEndpoint static_endpoints[] = {\n    { nullptr, nullptr, nullptr, 0 } };\n"
        ));
        assert!(!text.contains("unsigned char"));
    }

    #[test]
    fn test_directory_round_trip() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("css")).unwrap();
        let css = b"body{}".to_vec();
        let html = b"<!doctype html><title>rolek</title>".repeat(20);
        fs::write(root.join("css/app.css"), &css).unwrap();
        fs::write(root.join("index.html"), &html).unwrap();

        let manifest =
            Manifest::build(scan_dir(root).unwrap(), &EncodeOptions::default(), |_| {}).unwrap();
        let text = render(&manifest);

        for (symbol, original) in [("CSS__APP_CSS", &css), ("INDEX_HTML", &html)] {
            let mut decoded = Vec::new();
            GzDecoder::new(&array_bytes(&text, symbol)[..])
                .read_to_end(&mut decoded)
                .unwrap();
            assert_eq!(&decoded, original);
        }

        let css_size = gzip(b"body{}", 9).unwrap().len();
        assert!(text.contains(&format!(
            "{{ \"/css/app.css\", \"text/css\", CSS__APP_CSS, {css_size} }},"
        )));
        assert!(text.contains("{ \"/index.html\", \"text/html\", INDEX_HTML,"));
        assert!(text.contains("{ \"/\", \"text/html\", INDEX_HTML,"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.js"), "console.log(1)").unwrap();
        fs::write(dir.path().join("b.svg"), "<svg/>").unwrap();

        let run = || {
            let manifest =
                Manifest::build(scan_dir(dir.path()).unwrap(), &EncodeOptions::default(), |_| {})
                    .unwrap();
            render(&manifest)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_custom_names() {
        let config = EmbedConfig {
            header: "assets.h".to_string(),
            table: "web_assets".to_string(),
            ..EmbedConfig::default()
        };
        let text =
            String::from_utf8(TableEmitter::new(&config).render(&Manifest::new()).unwrap()).unwrap();

        assert!(text.contains("#include \"assets.h\"\n"));
        assert!(text.contains("const StaticEndpoint web_assets[] = {"));
    }
}
