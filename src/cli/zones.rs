//! `zones` command.

use std::path::Path;

use anyhow::Result;

use super::output::write_output;
use crate::config::ToolConfig;
use crate::{debug, zones};

/// Print the zone table as JSON.
pub fn run_zones(config: &ToolConfig, output: Option<&Path>) -> Result<()> {
    let section = &config.zones;
    let table = section.zones();
    debug!("zones"; "{} zones, {:?} style", table.len(), section.style);

    let mut text = zones::render(&table, section.style, section.ascii)?;
    text.push('\n');
    write_output(text.as_bytes(), output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::JsonStyle;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_zones_pretty() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("zones.json");

        run_zones(&ToolConfig::default(), Some(out.as_path())).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("{\n    \"Parter\": 7,\n    \"Pi\\u0119tro\": 120,\n"));
        assert!(text.ends_with("    \"Salon R\": 4\n}\n"));
    }

    #[test]
    fn test_run_zones_compact() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("zones.json");
        let mut config = ToolConfig::default();
        config.zones.style = JsonStyle::Compact;

        run_zones(&config, Some(out.as_path())).unwrap();

        let text = fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("{\"Parter\":7,\"Pi\\u0119tro\":120,\"Front\":97,"));
        assert_eq!(text.lines().count(), 1);
    }
}
