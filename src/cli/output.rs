//! Output target: stdout or a file.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::debug;

/// Write generated text to `output`, or stdout when `None`.
///
/// The text is complete before anything is written, so a failed run never
/// leaves a truncated file behind.
pub(super) fn write_output(content: &[u8], output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            debug!("output"; "wrote {} bytes to {}", content.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content).context("failed to write to stdout")?;
            stdout.flush().context("failed to write to stdout")?;
        }
    }
    Ok(())
}
