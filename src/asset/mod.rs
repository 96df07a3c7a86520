//! Asset collection, compression and the manifest.
//!
//! ```text
//! scan_dir / from_list -> AssetRoute -> SourceFile -> EncodedAsset -> Manifest
//! ```

mod encode;
mod error;
mod manifest;
mod route;
mod scan;
pub mod symbol;

// Types
pub use encode::{EncodeOptions, EncodedAsset, SourceFile};
pub use error::EmbedError;
pub use manifest::Manifest;
pub use route::AssetRoute;

// Collection (pure functions)
pub use scan::{from_list, scan_dir};

// Encoding
pub use encode::encode;
#[cfg(test)]
pub use encode::gzip;
