use super::HandlerContext;
use crate::types::OutputFormat;
use anyhow::Result;
use gviz_types::classes::ELLIPSIS;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct RenderOutput<'a> {
    counter: &'a str,
    /// 1-based entry shown, absent when the page has no log
    current: Option<usize>,
    width: usize,
    lines: Vec<String>,
}

pub fn handle(ctx: &HandlerContext, file: &Path, entry: Option<usize>) -> Result<()> {
    let mut page = ctx.open_page(file)?;
    ctx.select_entry(&mut page, entry)?;
    let lines = page.render_lines();

    match ctx.format {
        OutputFormat::Json => {
            let output = RenderOutput {
                counter: page.counter(),
                current: page.current_entry().map(|i| i + 1),
                width: page.layout().width(),
                lines,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let color = std::io::stdout().is_terminal();
            for line in &lines {
                println!("{}", paint(line, color));
            }
            println!();
            println!("entry {}", page.counter());
        }
    }

    Ok(())
}

fn paint(line: &str, color: bool) -> String {
    if !color || !line.contains(ELLIPSIS) {
        return line.to_string();
    }
    line.replace(ELLIPSIS, &ELLIPSIS.yellow().to_string())
}
