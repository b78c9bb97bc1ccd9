mod query;
mod schema;
mod serve;

pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::{ServeParams, handle_serve};

use crate::config::UserqlConfig;
use crate::graphql::{UserSchema, build_schema};
use crate::storage::UserStore;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: UserqlConfig,
    pub store: Arc<UserStore>,
}

impl CommandContext {
    pub fn new(config: UserqlConfig) -> Self {
        Self {
            config,
            store: Arc::new(UserStore::reference()),
        }
    }

    pub fn schema(&self) -> UserSchema {
        build_schema(self.store.clone(), &self.config.graphql)
    }
}
