use crate::graphql::run_server;
use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;

/// Command-line overrides for the `[server]` settings
pub struct ServeParams {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub no_graphiql: bool,
}

pub fn handle_serve(mut ctx: CommandContext, params: ServeParams) -> Result<()> {
    let settings = &mut ctx.config.server;
    if let Some(host) = params.host {
        settings.host = host;
    }
    if let Some(port) = params.port {
        settings.port = port;
    }
    if params.no_graphiql {
        settings.graphiql = false;
    }

    let schema = ctx.schema();
    let settings = ctx.config.server;
    let url = format!("http://{}", settings.bind_address());

    println!("{} GraphQL server on {}", "Starting".green(), url.cyan());
    if settings.graphiql {
        println!("GraphiQL: {}", url.cyan());
    }

    tokio::runtime::Runtime::new()?
        .block_on(run_server(schema, &settings))
        .with_context(|| format!("GraphQL server on {} failed", url))?;
    Ok(())
}
