use super::args::{Cli, Commands, ConfigCommand};
use super::handlers::{self, HandlerContext};
use crate::logging;
use anyhow::Result;
use gviz_runtime::resolve_data_dir;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = HandlerContext::new(data_dir, cli.format, cli.width);

    match cli.command {
        Commands::Render { file, entry } => handlers::render::handle(&ctx, &file, entry),
        Commands::Regions { file, entry } => handlers::regions::handle(&ctx, &file, entry),
        Commands::Show { file } => handlers::show::handle(&ctx, &file),
        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Init { force } => handlers::config::init(&ctx, force),
        },
    }
}
