use crate::graphql::export_sdl;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use super::CommandContext;

pub fn handle_schema(ctx: CommandContext, output: Option<PathBuf>) -> Result<()> {
    let sdl = export_sdl(&ctx.schema());

    match output {
        Some(path) => {
            std::fs::write(&path, &sdl)
                .with_context(|| format!("Failed to write schema to {}", path.display()))?;
            println!("{} schema to {}", "Wrote".green(), path.display());
        }
        None => print!("{}", sdl),
    }
    Ok(())
}
