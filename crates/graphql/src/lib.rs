#![cfg_attr(test, allow(unused_crate_dependencies))]

//! GraphQL schema and resolvers over the gamedex record store.
//!
//! Scalar fields are direct projections of the stored record;
//! relational fields are resolved on demand from the parent record by
//! scanning the related collection for matching foreign keys.
//! Structural validation of incoming operations is async-graphql's
//! job, so resolvers never see malformed input.

mod mutation;
mod query;
mod types;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use gamedex_store::RecordStore;

pub use mutation::Mutation;
pub use query::Query;
pub use types::{AddGameInput, Author, EditGameInput, Game, Review};

pub type GamedexSchema = Schema<Query, Mutation, EmptySubscription>;

/// Builds the executable schema over the given store.
pub fn build(store: Arc<RecordStore>) -> GamedexSchema {
    Schema::build(Query, Mutation, EmptySubscription).data(store).finish()
}
