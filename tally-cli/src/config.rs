use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::{ensure_tally_home, tally_home};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplaySection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySection {
    /// Label printed after amounts; no conversion is done
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

fn default_currency() -> String {
    "THB".to_string()
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(tally_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

const HEADER: &str = "\
# tally configuration
# currency: label printed after amounts (no conversion)
# format:   table | json | csv; --format overrides it
";

/// Render `cfg` as the commented TOML that `config init` writes.
pub fn render_config(cfg: &Config) -> Result<String> {
    let body = toml::to_string_pretty(cfg).context("serialize config")?;
    Ok(format!("{HEADER}\n{body}"))
}

/// Write `cfg`, returning the file it landed in.
pub fn save_config(cfg: &Config) -> Result<PathBuf> {
    let p = ensure_tally_home()?.join("config.toml");
    fs::write(&p, render_config(cfg)?).with_context(|| format!("write {}", p.display()))?;
    Ok(p)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Written(PathBuf),
    AlreadyExists(PathBuf),
}

/// Write the default config. An existing file is left alone unless `force`.
pub fn init_config(force: bool) -> Result<InitOutcome> {
    let p = config_path()?;
    if p.exists() && !force {
        return Ok(InitOutcome::AlreadyExists(p));
    }
    save_config(&Config::default()).map(InitOutcome::Written)
}
