use std::sync::Arc;

use async_graphql::{ComplexObject, Context, InputObject, SimpleObject, ID};
use gamedex_store::{GameEdits, RecordStore};

pub(crate) fn store<'a>(ctx: &'a Context<'_>) -> &'a RecordStore {
    ctx.data_unchecked::<Arc<RecordStore>>()
}

/// A game in the catalog.
#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Game {
    pub id: ID,
    pub title: String,
    pub platform: Vec<String>,
}

#[ComplexObject]
impl Game {
    /// Reviews written for this game, in store order.
    async fn reviews(&self, ctx: &Context<'_>) -> Vec<Review> {
        store(ctx).reviews_for_game(&self.id).into_iter().map(Into::into).collect()
    }
}

/// Someone who writes reviews.
#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Author {
    pub id: ID,
    pub name: String,
    pub verified: bool,
}

#[ComplexObject]
impl Author {
    /// Reviews written by this author, in store order.
    async fn reviews(&self, ctx: &Context<'_>) -> Vec<Review> {
        store(ctx).reviews_by_author(&self.id).into_iter().map(Into::into).collect()
    }
}

/// A review of a game. The `game` and `author` relations are nullable:
/// a review whose foreign key no longer resolves (for instance after
/// its game was deleted) is a tolerated weak reference, not an error.
#[derive(SimpleObject)]
#[graphql(complex)]
pub struct Review {
    pub id: ID,
    pub rating: i32,
    pub content: String,
    #[graphql(skip)]
    pub game_id: String,
    #[graphql(skip)]
    pub author_id: String,
}

#[ComplexObject]
impl Review {
    async fn game(&self, ctx: &Context<'_>) -> Option<Game> {
        store(ctx).game(&self.game_id).map(Into::into)
    }

    async fn author(&self, ctx: &Context<'_>) -> Option<Author> {
        store(ctx).author(&self.author_id).map(Into::into)
    }
}

#[derive(InputObject)]
pub struct AddGameInput {
    pub title: String,
    pub platform: Vec<String>,
}

/// Partial edits to a game; absent fields keep their prior value.
#[derive(InputObject)]
pub struct EditGameInput {
    pub title: Option<String>,
    pub platform: Option<Vec<String>>,
}

impl From<gamedex_store::Game> for Game {
    fn from(game: gamedex_store::Game) -> Self {
        Self {
            id: game.id.into(),
            title: game.title,
            platform: game.platform,
        }
    }
}

impl From<gamedex_store::Author> for Author {
    fn from(author: gamedex_store::Author) -> Self {
        Self {
            id: author.id.into(),
            name: author.name,
            verified: author.verified,
        }
    }
}

impl From<gamedex_store::Review> for Review {
    fn from(review: gamedex_store::Review) -> Self {
        Self {
            id: review.id.into(),
            rating: review.rating,
            content: review.content,
            game_id: review.game_id,
            author_id: review.author_id,
        }
    }
}

impl From<EditGameInput> for GameEdits {
    fn from(edits: EditGameInput) -> Self {
        Self {
            title: edits.title,
            platform: edits.platform,
        }
    }
}
