use async_graphql::{Context, Object, ID};

use crate::types::{store, Author, Game, Review};

pub struct Query;

#[Object]
impl Query {
    /// All games, in store order.
    async fn games(&self, ctx: &Context<'_>) -> Vec<Game> {
        store(ctx).games().into_iter().map(Into::into).collect()
    }

    /// All review authors, in store order.
    async fn authors(&self, ctx: &Context<'_>) -> Vec<Author> {
        store(ctx).authors().into_iter().map(Into::into).collect()
    }

    /// All reviews, in store order.
    async fn reviews(&self, ctx: &Context<'_>) -> Vec<Review> {
        store(ctx).reviews().into_iter().map(Into::into).collect()
    }

    /// The game with the given id, or null. Not-found is not an error.
    async fn game(&self, ctx: &Context<'_>, id: ID) -> Option<Game> {
        store(ctx).game(&id).map(Into::into)
    }

    async fn author(&self, ctx: &Context<'_>, id: ID) -> Option<Author> {
        store(ctx).author(&id).map(Into::into)
    }

    async fn review(&self, ctx: &Context<'_>, id: ID) -> Option<Review> {
        store(ctx).review(&id).map(Into::into)
    }
}
