use std::sync::Arc;

use async_graphql::extensions::{Extension, ExtensionContext, ExtensionFactory, NextParseQuery};
use async_graphql::parser::types::ExecutableDocument;
use async_graphql::{ServerResult, Variables};

pub const SYNTAX_ERROR_PREFIX: &str = "Syntax Error";

/// Marks every failure of the parse stage as a syntax error, so clients can
/// tell malformed documents apart from validation failures.
pub struct SyntaxErrors;

impl ExtensionFactory for SyntaxErrors {
    fn create(&self) -> Arc<dyn Extension> {
        Arc::new(SyntaxErrorsExtension)
    }
}

struct SyntaxErrorsExtension;

#[async_trait::async_trait]
impl Extension for SyntaxErrorsExtension {
    async fn parse_query(
        &self,
        ctx: &ExtensionContext<'_>,
        query: &str,
        variables: &Variables,
        next: NextParseQuery<'_>,
    ) -> ServerResult<ExecutableDocument> {
        next.run(ctx, query, variables).await.map_err(|mut err| {
            tracing::debug!(error = %err.message, "rejected malformed document");
            err.message = format!("{}: {}", SYNTAX_ERROR_PREFIX, err.message.trim_start());
            err
        })
    }
}
