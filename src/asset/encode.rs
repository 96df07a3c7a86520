//! Loading and gzip-encoding of single files.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use flate2::{Compression, GzBuilder};

use super::{AssetRoute, EmbedError, symbol};
use crate::utils::mime;

/// Options shared by every encoded asset.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// gzip level, 0..=9
    pub level: u32,
    /// File names that also answer for their directory
    pub index_names: Vec<String>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            level: 9,
            index_names: vec!["index.html".to_string(), "index.htm".to_string()],
        }
    }
}

/// Raw input file, read into memory.
#[derive(Debug)]
pub struct SourceFile {
    pub route: AssetRoute,
    pub content: Vec<u8>,
}

impl SourceFile {
    /// Read the file behind a route.
    pub fn load(route: AssetRoute) -> Result<Self, EmbedError> {
        let content = fs::read(&route.source).map_err(|source| EmbedError::Read {
            path: route.source.clone(),
            source,
        })?;
        Ok(Self { route, content })
    }
}

/// Compressed asset ready for emission.
#[derive(Debug, Clone)]
pub struct EncodedAsset {
    /// Source file path (absolute)
    pub source: PathBuf,
    /// Relative path, printed in the comment above the array
    pub rel_path: String,
    /// Array identifier
    pub symbol: String,
    /// Guessed content type
    pub mime: Option<&'static str>,
    /// gzip stream
    pub data: Vec<u8>,
    /// Length before compression
    pub original_len: usize,
    /// Request paths, primary first
    pub routes: Vec<String>,
}

impl EncodedAsset {
    /// Compressed size in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// gzip a buffer deterministically (header mtime 0, no file name).
pub fn gzip(data: &[u8], level: u32) -> io::Result<Vec<u8>> {
    let mut encoder = GzBuilder::new()
        .mtime(0)
        .write(Vec::with_capacity(data.len() / 2 + 32), Compression::new(level));
    encoder.write_all(data)?;
    encoder.finish()
}

/// Compress a loaded file; the raw bytes are dropped afterwards.
pub fn encode(file: SourceFile, options: &EncodeOptions) -> Result<EncodedAsset, EmbedError> {
    let SourceFile { route, content } = file;

    let data = gzip(&content, options.level).map_err(|source| EmbedError::Compress {
        path: route.source.clone(),
        source,
    })?;

    let mut routes = vec![route.url()];
    if let Some(alias) = route.index_alias(&options.index_names) {
        routes.push(alias);
    }

    Ok(EncodedAsset {
        mime: mime::guess(&route.source),
        symbol: symbol::derive(&route.rel_path),
        original_len: content.len(),
        data,
        routes,
        source: route.source,
        rel_path: route.rel_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;
    use tempfile::TempDir;

    fn gunzip(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        GzDecoder::new(data).read_to_end(&mut out).unwrap();
        out
    }

    fn source(rel: &str, content: &[u8]) -> SourceFile {
        SourceFile {
            route: AssetRoute {
                source: PathBuf::from("/web").join(rel),
                rel_path: rel.to_string(),
            },
            content: content.to_vec(),
        }
    }

    #[test]
    fn test_gzip_round_trip() {
        let input = b"body { color: red; }\n".repeat(50);
        let compressed = gzip(&input, 9).unwrap();
        assert_eq!(gunzip(&compressed), input);
        assert!(compressed.len() < input.len());
    }

    #[test]
    fn test_gzip_empty_input() {
        let compressed = gzip(b"", 9).unwrap();
        assert!(!compressed.is_empty());
        assert!(gunzip(&compressed).is_empty());
    }

    #[test]
    fn test_gzip_is_deterministic() {
        let input = b"<html><body>hello</body></html>";
        assert_eq!(gzip(input, 9).unwrap(), gzip(input, 9).unwrap());
        // mtime bytes of the header are zero
        assert_eq!(&gzip(input, 9).unwrap()[4..8], &[0, 0, 0, 0]);
    }

    #[test]
    fn test_encode_css() {
        let asset = encode(source("css/app.css", b"body{}"), &EncodeOptions::default()).unwrap();

        assert_eq!(asset.symbol, "CSS__APP_CSS");
        assert_eq!(asset.mime, Some("text/css"));
        assert_eq!(asset.routes, ["/css/app.css"]);
        assert_eq!(asset.size(), gzip(b"body{}", 9).unwrap().len());
        assert_eq!(asset.original_len, 6);
        assert_eq!(gunzip(&asset.data), b"body{}");
    }

    #[test]
    fn test_encode_index_gets_alias() {
        let asset = encode(source("index.html", b"<p>"), &EncodeOptions::default()).unwrap();
        assert_eq!(asset.routes, ["/index.html", "/"]);

        let asset = encode(source("setup/index.htm", b"<p>"), &EncodeOptions::default()).unwrap();
        assert_eq!(asset.routes, ["/setup/index.htm", "/setup"]);
    }

    #[test]
    fn test_encode_unknown_mime() {
        let asset = encode(source("blob.xyz", b"\x00\x01"), &EncodeOptions::default()).unwrap();
        assert_eq!(asset.mime, None);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let route = AssetRoute {
            source: dir.path().join("missing.js"),
            rel_path: "missing.js".to_string(),
        };
        assert!(matches!(SourceFile::load(route), Err(EmbedError::Read { .. })));
    }

    #[test]
    fn test_load_reads_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.js");
        std::fs::write(&path, "let a = 1;").unwrap();

        let file = SourceFile::load(AssetRoute {
            source: path,
            rel_path: "app.js".to_string(),
        })
        .unwrap();
        assert_eq!(file.content, b"let a = 1;");
    }
}
