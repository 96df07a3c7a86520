//! Path normalization utilities.
//!
//! Pure functions, no filesystem access:
//! - `absolute` - lexical absolute form (no symlink resolution)
//! - `relative_slash` - relative path rendered with `/` separators

use std::path::{Component, Path, PathBuf};

/// Make a path absolute without touching the filesystem.
///
/// Relative paths are joined onto `cwd`; `.` components are dropped and
/// `..` pops the previous component.
///
/// # Example
/// ```ignore
/// absolute(Path::new("./web/../static"), Path::new("/proj")) // -> /proj/static
/// ```
pub fn absolute(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut result = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            other => result.push(other.as_os_str()),
        }
    }
    result
}

/// Express `path` relative to `root`, joined with `/` on every platform.
///
/// Returns `None` when `path` is not below `root`, equals it, or the
/// relative part is not valid UTF-8.
pub fn relative_slash(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_str()),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
