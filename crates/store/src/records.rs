use serde::Serialize;

/// A stored record addressable by its unique id.
pub trait Record {
    fn id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    pub id: String,
    pub title: String,
    pub platform: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub verified: bool,
}

/// A review of a game. `game_id` and `author_id` should reference an
/// existing record; the store does not enforce this, and a dangling
/// reference resolves to an absent relation rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub id: String,
    pub rating: i32,
    pub content: String,
    pub game_id: String,
    pub author_id: String,
}

impl Record for Game {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Author {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Review {
    fn id(&self) -> &str {
        &self.id
    }
}
