use async_graphql::{Context, Object, ID};
use gamedex_store::GameEdits;

use crate::types::{store, AddGameInput, EditGameInput, Game};

pub struct Mutation;

#[Object]
impl Mutation {
    /// Adds a game to the catalog and returns it.
    async fn add_game(&self, ctx: &Context<'_>, game: AddGameInput) -> Game {
        store(ctx).add_game(game.title, game.platform).into()
    }

    /// Shallow-merges the provided edits over the game with the given
    /// id and returns the updated game, or null when the id is unknown
    /// (the catalog is left untouched). Absent edits are a no-op merge.
    async fn update_game(&self, ctx: &Context<'_>, id: ID, edits: Option<EditGameInput>) -> Option<Game> {
        let edits = edits.map(GameEdits::from).unwrap_or_default();

        store(ctx).update_game(&id, edits).map(Into::into)
    }

    /// Removes the game with the given id and returns the remaining
    /// games. Unknown ids leave the catalog untouched.
    async fn delete_game(&self, ctx: &Context<'_>, id: ID) -> Vec<Game> {
        store(ctx).delete_game(&id).into_iter().map(Into::into).collect()
    }
}
