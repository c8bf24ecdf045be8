use crate::types::OutputFormat;
use anyhow::{Context, Result};
use gviz_runtime::{Config, Page, TextLayout};
use once_cell::unsync::OnceCell;
use std::path::{Path, PathBuf};
use terminal_size::{Width, terminal_size};
use tracing::debug;

pub struct HandlerContext {
    data_dir: PathBuf,
    config: OnceCell<Config>,
    pub format: OutputFormat,
    width: Option<u16>,
}

impl HandlerContext {
    pub fn new(data_dir: PathBuf, format: OutputFormat, width: Option<u16>) -> Self {
        Self {
            data_dir,
            config: OnceCell::new(),
            format,
            width,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let path = self.config_path();
            Config::load_from(&path)
                .with_context(|| format!("Failed to read config {}", path.display()))
        })
    }

    /// Layout width: `--width`, then config, then the terminal.
    pub fn width(&self) -> Result<u16> {
        let terminal = terminal_size().map(|(Width(w), _)| w);
        Ok(self.config()?.effective_width(self.width, terminal))
    }

    /// Load `file` and run the page setup.
    pub fn open_page(&self, file: &Path) -> Result<Page> {
        let width = self.width()?;
        debug!(file = %file.display(), width, "opening page");
        let layout = TextLayout::new(width, &self.config()?.layout);
        let mut page = Page::load(file, layout)
            .with_context(|| format!("Failed to load page {}", file.display()))?;
        page.init();
        Ok(page)
    }

    /// Move to `entry` (1-based) or to the configured start entry.
    pub fn select_entry(&self, page: &mut Page, entry: Option<usize>) -> Result<()> {
        let target = match entry {
            Some(n) => n,
            None => self.config()?.slideshow.start_entry,
        };
        page.set_current(target.saturating_sub(1));
        Ok(())
    }
}
