//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/fw/web/css/  ← start
/// /home/user/fw/progmem.toml   ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_parent() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("web/css");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("progmem.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("progmem.toml"));
        assert_eq!(found, Some(dir.path().join("progmem.toml")));
    }

    #[test]
    fn test_find_config_prefers_nearest() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("web");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("progmem.toml"), "").unwrap();
        fs::write(nested.join("progmem.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("progmem.toml"));
        assert_eq!(found, Some(nested.join("progmem.toml")));
    }

    #[test]
    fn test_find_config_ignores_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("cfg-dir.toml")).unwrap();

        let found = find_config_file(dir.path(), Path::new("cfg-dir.toml"));
        assert_eq!(found, None);
    }
}
