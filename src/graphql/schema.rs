use std::sync::Arc;

use async_graphql::extensions::apollo_persisted_queries::{
    ApolloPersistedQueries, LruCacheStorage,
};
use async_graphql::{Context, EmptyMutation, EmptySubscription, ID, Object, Schema};
use tracing::debug;

use crate::config::GraphqlSettings;
use crate::storage::UserStore;

use super::extensions::SyntaxErrors;
use super::resolvers;
use super::types::*;

pub type UserSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(store: Arc<UserStore>, settings: &GraphqlSettings) -> UserSchema {
    let mut builder = Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(store)
        .extension(SyntaxErrors);

    if settings.persisted_queries {
        let capacity = settings.persisted_query_cache_size.max(1);
        builder = builder.extension(ApolloPersistedQueries::new(LruCacheStorage::new(capacity)));
    }
    if settings.depth_limit > 0 {
        builder = builder.limit_depth(settings.depth_limit);
    }
    if settings.complexity_limit > 0 {
        builder = builder.limit_complexity(settings.complexity_limit);
    }

    builder.finish()
}

/// The object type definitions of `schema`, without the built-in directive
/// definitions and `schema { .. }` block that `sdl()` appends.
pub fn export_sdl(schema: &UserSchema) -> String {
    let blocks: Vec<String> = schema
        .sdl()
        .split("\n\n")
        .map(str::trim)
        .filter(|block| block.starts_with("type "))
        .map(|block| {
            block
                .lines()
                .map(|line| line.trim_end().replace('\t', "  "))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect();
    format!("{}\n", blocks.join("\n\n"))
}

fn get_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<UserStore>> {
    ctx.data::<Arc<UserStore>>()
}

pub struct QueryRoot;

// Plain comments only: doc comments become SDL descriptions.
#[Object(name = "Query")]
impl QueryRoot {
    // Single user by exact ID, null when absent
    async fn get_user(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<User>> {
        let store = get_store(ctx)?;
        let user = resolvers::get_user(store, &id);
        debug!(id = id.as_str(), found = user.is_some(), "resolved getUser");
        Ok(user)
    }

    // First `limit` users in store order, 10 by default
    async fn list_users(
        &self,
        ctx: &Context<'_>,
        limit: Option<i32>,
    ) -> async_graphql::Result<Vec<User>> {
        let store = get_store(ctx)?;
        let users = resolvers::list_users(store, limit);
        debug!(?limit, returned = users.len(), "resolved listUsers");
        Ok(users)
    }
}
