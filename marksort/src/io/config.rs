//! Sorter configuration stored in `marksort.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::format::{DEFAULT_TITLE, TraceStyle};
use crate::session::DisplayOptions;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "marksort.toml";

/// Sorter configuration (TOML).
///
/// Intended to be edited by humans. Missing fields fall back to the defaults
/// used by the interactive tutor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SorterConfig {
    /// Heading of the summary block.
    pub title: String,

    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Render the step-by-step walkthrough.
    pub show_steps: bool,
    /// Layout of each walkthrough step.
    pub style: TraceStyle,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_steps: true,
            style: TraceStyle::Markdown,
        }
    }
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            display: DisplayConfig::default(),
        }
    }
}

impl SorterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(anyhow!("title must be non-empty"));
        }
        if self.title.contains('\n') {
            return Err(anyhow!("title must be a single line"));
        }
        Ok(())
    }

    /// Display options seeded from this config.
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            show_steps: self.display.show_steps,
            style: self.display.style,
            title: self.title.clone(),
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SorterConfig::default()`.
pub fn load_config(path: &Path) -> Result<SorterConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = SorterConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SorterConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &SorterConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
