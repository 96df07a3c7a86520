//! MIME type guessing for embedded assets.
//!
//! The guessed type ends up verbatim in the generated `Content-Type`, so the
//! values carry no `charset` parameter. Unknown extensions yield `None`.

use std::path::Path;

/// Common MIME type constants.
pub mod types {
    // Text
    pub const HTML: &str = "text/html";
    pub const PLAIN: &str = "text/plain";
    pub const CSS: &str = "text/css";
    pub const JAVASCRIPT: &str = "text/javascript";
    pub const JSON: &str = "application/json";
    pub const XML: &str = "application/xml";
    pub const MARKDOWN: &str = "text/markdown";
    pub const CSV: &str = "text/csv";

    // Web app
    pub const MANIFEST: &str = "application/manifest+json";
    pub const WASM: &str = "application/wasm";

    // Documents / binary
    pub const PDF: &str = "application/pdf";
    pub const ZIP: &str = "application/zip";
    pub const GZIP: &str = "application/gzip";
    pub const OCTET_STREAM: &str = "application/octet-stream";

    // Images
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const AVIF: &str = "image/avif";
    pub const SVG: &str = "image/svg+xml";
    pub const ICO: &str = "image/x-icon";
    pub const BMP: &str = "image/bmp";

    // Audio
    pub const MP3: &str = "audio/mpeg";
    pub const WAV: &str = "audio/wav";
    pub const OGG_AUDIO: &str = "audio/ogg";

    // Fonts
    pub const WOFF: &str = "font/woff";
    pub const WOFF2: &str = "font/woff2";
    pub const TTF: &str = "font/ttf";
    pub const OTF: &str = "font/otf";
    pub const EOT: &str = "application/vnd.ms-fontobject";
}

/// Guess MIME type from the file extension (case-insensitive).
pub fn guess(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    from_extension(&ext)
}

/// Guess MIME type from a lowercase extension string.
pub fn from_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext {
        // Web / Text
        "html" | "htm" => types::HTML,
        "css" => types::CSS,
        "js" | "mjs" => types::JAVASCRIPT,
        "json" | "map" => types::JSON,
        "xml" => types::XML,
        "txt" => types::PLAIN,
        "md" => types::MARKDOWN,
        "csv" => types::CSV,
        "webmanifest" => types::MANIFEST,
        "wasm" => types::WASM,

        // Images
        "svg" => types::SVG,
        "png" => types::PNG,
        "jpg" | "jpeg" => types::JPEG,
        "gif" => types::GIF,
        "webp" => types::WEBP,
        "avif" => types::AVIF,
        "ico" => types::ICO,
        "bmp" => types::BMP,

        // Audio
        "mp3" => types::MP3,
        "wav" => types::WAV,
        "ogg" | "oga" => types::OGG_AUDIO,

        // Fonts
        "woff" => types::WOFF,
        "woff2" => types::WOFF2,
        "ttf" => types::TTF,
        "otf" => types::OTF,
        "eot" => types::EOT,

        // Documents / Binary
        "pdf" => types::PDF,
        "zip" => types::ZIP,
        "gz" => types::GZIP,
        "bin" => types::OCTET_STREAM,

        _ => return None,
    };
    Some(mime)
}
