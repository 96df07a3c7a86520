//! Tool configuration from `progmem.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [embed], [routes], [zones]
//! ├── error.rs       # ConfigError
//! ├── util.rs        # config file discovery
//! └── mod.rs         # ToolConfig (this file)
//! ```
//!
//! The file is optional: without one every section uses its defaults,
//! which reproduce the classic `static.h` layout. CLI flags override the
//! file.

pub mod section;
mod error;
mod util;

pub use error::ConfigError;
pub use section::{EmbedConfig, RoutesConfig, ZonesConfig};

use util::find_config_file;

use crate::{
    asset::symbol::is_identifier,
    cli::{Cli, Commands, EmbedArgs},
    log,
    utils::path::absolute,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file name searched for when `-C` is not given.
pub const CONFIG_NAME: &str = "progmem.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing progmem.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Absolute path to the loaded config file (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Array layout settings
    #[serde(default)]
    pub embed: EmbedConfig,

    /// Route-registration settings
    #[serde(default)]
    pub routes: RoutesConfig,

    /// Zone table settings
    #[serde(default)]
    pub zones: ZonesConfig,
}

impl ToolConfig {
    /// Load configuration for a CLI invocation.
    ///
    /// An explicit `-C` path must exist; otherwise `progmem.toml` is searched
    /// upward from cwd and defaults are used when none is found.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let config_path = match &cli.config {
            Some(explicit) => {
                let path = absolute(explicit, &cwd);
                if !path.is_file() {
                    bail!("Config file '{}' not found", explicit.display());
                }
                Some(path)
            }
            None => find_config_file(&cwd, Path::new(CONFIG_NAME)),
        };

        let mut config = match &config_path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        config.config_path = config_path;

        config.apply_command_options(cli);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("in {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        match &cli.command {
            Commands::Table { embed_args, .. } | Commands::Routes { embed_args, .. } => {
                self.apply_embed_args(embed_args);
            }
            Commands::Zones {
                style, no_ascii, ..
            } => {
                Self::update_option(&mut self.zones.style, style.as_ref());
                if *no_ascii {
                    self.zones.ascii = false;
                }
            }
        }
    }

    /// Apply embedding arguments from CLI.
    fn apply_embed_args(&mut self, args: &EmbedArgs) {
        Self::update_option(&mut self.embed.level, args.level.as_ref());
        Self::update_option(&mut self.embed.wrap, args.wrap.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate field values after CLI overrides.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut problems = Vec::new();

        if self.embed.level > 9 {
            problems.push(format!("[embed] level must be 0-9, got {}", self.embed.level));
        }
        // A byte token is "0xff," (5 columns)
        if self.embed.wrap < 5 {
            problems.push(format!("[embed] wrap must be at least 5, got {}", self.embed.wrap));
        }
        if !is_identifier(&self.embed.table) {
            problems.push(format!("[embed] table `{}` is not a C identifier", self.embed.table));
        }
        if !is_identifier(&self.routes.function) {
            problems.push(format!(
                "[routes] function `{}` is not a C identifier",
                self.routes.function
            ));
        }
        if !self.routes.server.split("::").all(is_identifier) {
            problems.push(format!(
                "[routes] server `{}` is not a C++ class name",
                self.routes.server
            ));
        }
        if self.embed.fallback_mime.is_empty() {
            problems.push("[embed] fallback_mime must not be empty".to_string());
        }
        if let Err(err) = crate::zones::validate(&self.zones.zone) {
            problems.push(format!("[zones] {err}"));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(problems.join("; ")))
        }
    }
}

/// Parse a config snippet in tests, rejecting unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> ToolConfig {
    let (parsed, ignored) = ToolConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
