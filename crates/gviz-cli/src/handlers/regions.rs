use super::HandlerContext;
use crate::types::OutputFormat;
use anyhow::Result;
use gviz_runtime::RegionReport;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct RegionsOutput {
    /// `"grammar"` or `"entry N"`
    scope: String,
    regions: Vec<RegionReport>,
}

pub fn handle(ctx: &HandlerContext, file: &Path, entry: Option<usize>) -> Result<()> {
    let mut page = ctx.open_page(file)?;

    let (scope, regions) = match entry {
        None => ("grammar".to_string(), page.region_report(None)?),
        Some(n) => {
            page.set_current(n.saturating_sub(1));
            match page.current_entry() {
                Some(i) => (format!("entry {}", i + 1), page.region_report(Some(i))?),
                None => anyhow::bail!("Page has no log entries"),
            }
        }
    };

    match ctx.format {
        OutputFormat::Json => {
            let output = RegionsOutput { scope, regions };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if regions.is_empty() {
                println!("No collapsible regions in {}", scope);
                return Ok(());
            }
            println!("{} ({} regions)", scope, regions.len());
            for region in &regions {
                println!("{}", format_region(region));
            }
        }
    }

    Ok(())
}

fn format_region(region: &RegionReport) -> String {
    let mut flags = Vec::new();
    if region.abbreviated {
        flags.push("abbreviated");
    }
    if region.overflows {
        flags.push("overflows");
    }
    let flags = if flags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", flags.join(", "))
    };

    format!(
        "{}#{} {}{}",
        "  ".repeat(region.depth),
        region.id.index(),
        region.text,
        flags
    )
}
