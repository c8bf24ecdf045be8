use super::HandlerContext;
use crate::tui;
use anyhow::Result;
use is_terminal::IsTerminal;
use std::path::Path;

pub fn handle(ctx: &HandlerContext, file: &Path) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!("`show` needs an interactive terminal; use `gviz render` instead");
    }

    let mut page = ctx.open_page(file)?;
    ctx.select_entry(&mut page, None)?;

    let title = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    tui::run(page, title)
}
