//! Manifest: the ordered symbol table handed from encoding to emission.

use rustc_hash::FxHashMap;

use super::{AssetRoute, EmbedError, EncodeOptions, EncodedAsset, SourceFile, encode};

/// One row of the endpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry<'a> {
    pub path: &'a str,
    pub mime: Option<&'static str>,
    pub symbol: &'a str,
    pub size: usize,
}

/// Encoded assets in emission order.
///
/// Pushing checks that identifiers and request paths stay unique, so an
/// emitted manifest never defines the same array or route twice.
#[derive(Debug, Default)]
pub struct Manifest {
    assets: Vec<EncodedAsset>,
    /// symbol -> index into `assets`
    symbols: FxHashMap<String, usize>,
    /// request path -> index into `assets`
    routes: FxHashMap<String, usize>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and encode every route in order.
    ///
    /// `on_encoded` runs after each asset, for progress and logging.
    pub fn build(
        routes: Vec<AssetRoute>,
        options: &EncodeOptions,
        mut on_encoded: impl FnMut(&EncodedAsset),
    ) -> Result<Self, EmbedError> {
        let mut manifest = Self::new();
        for route in routes {
            let asset = encode(SourceFile::load(route)?, options)?;
            on_encoded(&asset);
            manifest.push(asset)?;
        }
        Ok(manifest)
    }

    /// Append an asset, rejecting identifier or request path reuse.
    pub fn push(&mut self, asset: EncodedAsset) -> Result<(), EmbedError> {
        let index = self.assets.len();

        if let Some(&prev) = self.symbols.get(&asset.symbol) {
            let first = &self.assets[prev];
            if first.rel_path == asset.rel_path {
                let route = match asset.routes.first() {
                    Some(route) => route.clone(),
                    None => format!("/{}", asset.rel_path),
                };
                return Err(EmbedError::DuplicateRoute {
                    route,
                    first: first.source.display().to_string(),
                    second: asset.source.display().to_string(),
                });
            }
            return Err(EmbedError::SymbolCollision {
                symbol: asset.symbol,
                first: first.rel_path.clone(),
                second: asset.rel_path,
            });
        }

        for route in &asset.routes {
            if let Some(&prev) = self.routes.get(route) {
                return Err(EmbedError::DuplicateRoute {
                    route: route.clone(),
                    first: self.assets[prev].rel_path.clone(),
                    second: asset.rel_path.clone(),
                });
            }
        }

        self.symbols.insert(asset.symbol.clone(), index);
        for route in &asset.routes {
            self.routes.insert(route.clone(), index);
        }
        self.assets.push(asset);
        Ok(())
    }

    /// Assets in emission order.
    pub fn assets(&self) -> &[EncodedAsset] {
        &self.assets
    }

    /// Table rows: one per request path, aliases right after their file.
    pub fn entries(&self) -> impl Iterator<Item = ManifestEntry<'_>> {
        self.assets.iter().flat_map(|asset| {
            asset.routes.iter().map(move |path| ManifestEntry {
                path: path.as_str(),
                mime: asset.mime,
                symbol: asset.symbol.as_str(),
                size: asset.size(),
            })
        })
    }

    /// Number of embedded files.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Number of request paths, aliases included.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Total bytes before and after compression.
    pub fn sizes(&self) -> (usize, usize) {
        self.assets.iter().fold((0, 0), |(raw, packed), asset| {
            (raw + asset.original_len, packed + asset.size())
        })
    }
}
