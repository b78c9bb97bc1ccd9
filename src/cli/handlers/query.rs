use anyhow::{Context, Result};
use async_graphql::{Request, Variables};

use super::CommandContext;

pub fn handle_query(
    ctx: CommandContext,
    query: String,
    variables: Option<String>,
    operation: Option<String>,
) -> Result<()> {
    let schema = ctx.schema();

    let vars: Variables = if let Some(v) = variables {
        serde_json::from_str(&v).context("Invalid --variables JSON")?
    } else {
        Variables::default()
    };

    let mut request = Request::new(query).variables(vars);
    if let Some(name) = operation {
        request = request.operation_name(name);
    }
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_err() {
        anyhow::bail!("query failed with {} error(s)", response.errors.len());
    }
    Ok(())
}
