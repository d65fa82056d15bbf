use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    collection::Collection,
    ids::IdSequence,
    records::{Author, Game, Review},
    seed,
};

/// Edits applied by [`RecordStore::update_game`]. Fields left as `None`
/// keep their prior value (shallow merge).
#[derive(Debug, Default, Clone)]
pub struct GameEdits {
    pub title: Option<String>,
    pub platform: Option<Vec<String>>,
}

/// The process-wide record store.
///
/// Each collection sits behind its own mutex and mutations hold the
/// lock for the whole read-merge-write pass, so concurrent mutations
/// on a collection serialize instead of losing updates at the replace
/// step.
#[derive(Debug)]
pub struct RecordStore {
    games: Mutex<Collection<Game>>,
    authors: Mutex<Collection<Author>>,
    reviews: Mutex<Collection<Review>>,
    game_ids: IdSequence,
}

impl RecordStore {
    pub fn new(games: Vec<Game>, authors: Vec<Author>, reviews: Vec<Review>) -> Self {
        let games = Collection::new(games);
        let game_ids = IdSequence::after(games.ids());

        Self {
            games: Mutex::new(games),
            authors: Mutex::new(Collection::new(authors)),
            reviews: Mutex::new(Collection::new(reviews)),
            game_ids,
        }
    }

    /// A store holding the demo dataset.
    pub fn seeded() -> Self {
        Self::new(seed::games(), seed::authors(), seed::reviews())
    }

    pub fn games(&self) -> Vec<Game> {
        lock(&self.games).list()
    }

    pub fn authors(&self) -> Vec<Author> {
        lock(&self.authors).list()
    }

    pub fn reviews(&self) -> Vec<Review> {
        lock(&self.reviews).list()
    }

    pub fn game(&self, id: &str) -> Option<Game> {
        lock(&self.games).get(id)
    }

    pub fn author(&self, id: &str) -> Option<Author> {
        lock(&self.authors).get(id)
    }

    pub fn review(&self, id: &str) -> Option<Review> {
        lock(&self.reviews).get(id)
    }

    /// All reviews whose `game_id` matches, in store order.
    pub fn reviews_for_game(&self, game_id: &str) -> Vec<Review> {
        lock(&self.reviews).matching(|review| review.game_id == game_id)
    }

    /// All reviews whose `author_id` matches, in store order.
    pub fn reviews_by_author(&self, author_id: &str) -> Vec<Review> {
        lock(&self.reviews).matching(|review| review.author_id == author_id)
    }

    /// Appends a new game under a freshly assigned id and returns it.
    pub fn add_game(&self, title: String, platform: Vec<String>) -> Game {
        let game = Game {
            id: self.game_ids.next_id(),
            title,
            platform,
        };

        lock(&self.games).push(game.clone());

        game
    }

    /// Shallow-merges `edits` over the game with the given id and
    /// returns the merged record. Returns `None` without touching the
    /// collection when no game has that id.
    pub fn update_game(&self, id: &str, edits: GameEdits) -> Option<Game> {
        let mut games = lock(&self.games);
        let existing = games.get(id)?;

        let updated = Game {
            id: existing.id,
            title: edits.title.unwrap_or(existing.title),
            platform: edits.platform.unwrap_or(existing.platform),
        };

        let replaced = games
            .list()
            .into_iter()
            .map(|game| if game.id == id { updated.clone() } else { game })
            .collect();
        games.replace_all(replaced);

        Some(updated)
    }

    /// Removes the game with the given id, if present, and returns the
    /// remaining games. Unknown ids are a no-op returning the unchanged
    /// list.
    pub fn delete_game(&self, id: &str) -> Vec<Game> {
        let mut games = lock(&self.games);

        let remaining = games.matching(|game| game.id != id);
        games.replace_all(remaining.clone());

        remaining
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
