use anyhow::{Context, Result};
use clap::Parser;

use userql::cli::handlers::{self, CommandContext, ServeParams};
use userql::cli::{Cli, Commands};
use userql::config::UserqlConfig;
use userql::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let config = UserqlConfig::load(cli.config.as_deref(), &cwd)
        .context("Failed to load userql configuration")?;

    let verbose = cli.verbose || config.logging.verbose;
    let log_file = cli.log_file.or_else(|| config.logging.file.clone());
    logging::init(verbose, log_file);

    let ctx = CommandContext::new(config);
    tracing::debug!(users = ctx.store.len(), "user store ready");

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_graphiql,
        } => handlers::handle_serve(
            ctx,
            ServeParams {
                host,
                port,
                no_graphiql,
            },
        ),
        Commands::Query {
            query,
            variables,
            operation,
        } => handlers::handle_query(ctx, query, variables, operation),
        Commands::Schema { output } => handlers::handle_schema(ctx, output),
    }
}
