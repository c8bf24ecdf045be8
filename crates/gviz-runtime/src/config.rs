use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Width used when neither the flag, the config nor the terminal gives one.
pub const DEFAULT_WIDTH: u16 = 100;
/// Pixel height of one terminal row as reported to the fit oracle.
pub const DEFAULT_ROW_HEIGHT: u32 = 16;

/// Resolve the data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. GVIZ_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.gviz (fallback for systems without XDG)
pub fn resolve_data_dir(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("GVIZ_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("gviz"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".gviz"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Columns available to the page; unset means "terminal width"
    pub width: Option<u16>,
    pub row_height: u32,
    /// Report `row_height` as the computed line height. When false the fit
    /// oracle has to probe for it.
    pub declare_line_height: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: None,
            row_height: DEFAULT_ROW_HEIGHT,
            declare_line_height: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideshowConfig {
    /// 1-based entry shown after the initial pass over the first entry
    pub start_entry: usize,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self { start_entry: 1 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub slideshow: SlideshowConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Width to lay the page out at: `flag`, then config, then the terminal.
    pub fn effective_width(&self, flag: Option<u16>, terminal: Option<u16>) -> u16 {
        flag.or(self.layout.width)
            .or(terminal)
            .filter(|w| *w > 0)
            .unwrap_or(DEFAULT_WIDTH)
    }
}
