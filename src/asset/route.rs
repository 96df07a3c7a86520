//! Asset route: source file → request path mapping.

use std::path::PathBuf;

/// Location of one input file.
///
/// This is the single source of truth for path mapping: the relative path
/// names the array in comments, derives its identifier and becomes the
/// request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoute {
    /// Source file path (absolute)
    pub source: PathBuf,
    /// Path relative to the input root, `/`-separated (e.g. "css/app.css")
    pub rel_path: String,
}

impl AssetRoute {
    /// Request path served by the firmware (e.g. "/css/app.css").
    pub fn url(&self) -> String {
        format!("/{}", self.rel_path)
    }

    /// Directory alias for default documents.
    ///
    /// `/index.html` → `/`, `/docs/index.htm` → `/docs`. Matching against
    /// `index_names` ignores case.
    pub fn index_alias(&self, index_names: &[String]) -> Option<String> {
        let (dir, name) = match self.rel_path.rsplit_once('/') {
            Some((dir, name)) => (Some(dir), name),
            None => (None, self.rel_path.as_str()),
        };

        if !index_names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
            return None;
        }

        Some(match dir {
            Some(dir) => format!("/{dir}"),
            None => "/".to_string(),
        })
    }
}
