//! Embedding error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while collecting and encoding assets.
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("`{0}` is not a directory")]
    NotADirectory(PathBuf),

    #[error("failed to read `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to compress `{path}`")]
    Compress {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory walk failed")]
    Walk(#[from] jwalk::Error),

    #[error("`{}` is not valid UTF-8 and cannot become a request path", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("`{path}` is outside of root `{root}`")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("identifier `{symbol}` generated for both `{first}` and `{second}`")]
    SymbolCollision {
        symbol: String,
        first: String,
        second: String,
    },

    #[error("request path `{route}` served by both `{first}` and `{second}`")]
    DuplicateRoute {
        route: String,
        first: String,
        second: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_display_names_both_paths() {
        let err = EmbedError::SymbolCollision {
            symbol: "APP_JS".to_string(),
            first: "app-js".to_string(),
            second: "app.js".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("APP_JS"));
        assert!(display.contains("app-js"));
        assert!(display.contains("app.js"));
    }
}
