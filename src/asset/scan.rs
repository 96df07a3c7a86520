//! Input collection (pure, no side effects beyond reading directories).

use std::path::{Path, PathBuf};

use jwalk::{Parallelism, WalkDir};

use super::{AssetRoute, EmbedError};
use crate::utils::path::relative_slash;

/// Scan a directory recursively.
///
/// Returns every file below `root` (hidden files included, symlinked
/// directories not followed), sorted by relative path so repeated runs emit
/// identical output.
///
/// ```text
/// web/
/// ├── index.html      -> index.html
/// ├── css/
/// │   └── app.css     -> css/app.css
/// └── js/
///     └── app.js      -> js/app.js
/// ```
///
/// `root` must be absolute.
pub fn scan_dir(root: &Path) -> Result<Vec<AssetRoute>, EmbedError> {
    if !root.is_dir() {
        return Err(EmbedError::NotADirectory(root.to_path_buf()));
    }

    let mut routes = Vec::new();
    let walker = WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(Parallelism::Serial);

    for entry in walker {
        let entry = entry?;
        let file_type = entry.file_type();
        let path = entry.path();

        // Symlinked files are embedded like regular ones
        let is_file = file_type.is_file() || (file_type.is_symlink() && path.is_file());
        if !is_file {
            continue;
        }

        let rel_path = relative_to(&path, root)?;
        routes.push(AssetRoute {
            source: path,
            rel_path,
        });
    }

    routes.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
    Ok(routes)
}

/// Map an explicit file list onto routes, keeping the given order.
///
/// Both `files` and `root` must be absolute; a file outside `root` is an
/// error.
pub fn from_list(files: &[PathBuf], root: &Path) -> Result<Vec<AssetRoute>, EmbedError> {
    files
        .iter()
        .map(|file| {
            let rel_path = relative_to(file, root)?;
            Ok(AssetRoute {
                source: file.clone(),
                rel_path,
            })
        })
        .collect()
}

/// `/`-separated path of `path` below `root`.
///
/// Names must be valid UTF-8: a lossy conversion could map two files onto
/// one request path.
fn relative_to(path: &Path, root: &Path) -> Result<String, EmbedError> {
    let outside = || EmbedError::OutsideRoot {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    };

    let rel = path.strip_prefix(root).map_err(|_| outside())?;
    if rel.to_str().is_none() {
        return Err(EmbedError::NonUtf8Path(path.to_path_buf()));
    }
    relative_slash(path, root).ok_or_else(outside)
}
