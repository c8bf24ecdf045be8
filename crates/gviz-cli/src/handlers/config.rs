use super::HandlerContext;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use gviz_runtime::Config;

pub fn show(ctx: &HandlerContext) -> Result<()> {
    let config = ctx.config()?;

    match ctx.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Plain => {
            println!("# {}", ctx.config_path().display());
            print!("{}", toml::to_string_pretty(config)?);
        }
    }

    Ok(())
}

pub fn init(ctx: &HandlerContext, force: bool) -> Result<()> {
    let path = ctx.config_path();
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default()
        .save_to(&path)
        .with_context(|| format!("Failed to write config {}", path.display()))?;
    println!("Wrote {}", path.display());

    Ok(())
}
