//! The demo dataset the server starts with.

use crate::records::{Author, Game, Review};

pub(crate) fn games() -> Vec<Game> {
    vec![
        game("1", "Zelda, Tears of the Kingdom", &["Switch"]),
        game("2", "Final Fantasy 7 Remake", &["PS5", "Xbox"]),
        game("3", "Elden Ring", &["PS5", "Xbox", "PC"]),
        game("4", "Mario Kart", &["Switch"]),
        game("5", "Pokemon Scarlet", &["PS5", "Xbox", "PC"]),
    ]
}

pub(crate) fn authors() -> Vec<Author> {
    vec![
        author("1", "mario", true),
        author("2", "yoshi", false),
        author("3", "peach", true),
    ]
}

pub(crate) fn reviews() -> Vec<Review> {
    vec![
        review("1", 9, "An instant classic, worth every minute.", "2", "1"),
        review("2", 10, "Gorgeous remake, combat has never felt better.", "1", "2"),
        review("3", 7, "Brutal but fair. Bring a guide.", "3", "3"),
        review("4", 5, "Fun with friends, shallow alone.", "2", "4"),
        review("5", 8, "The open world finally suits the series.", "2", "5"),
        review("6", 7, "Second playthrough holds up.", "1", "2"),
        review("7", 10, "Could not put it down.", "3", "1"),
    ]
}

fn game(id: &str, title: &str, platform: &[&str]) -> Game {
    Game {
        id: id.to_string(),
        title: title.to_string(),
        platform: platform.iter().map(ToString::to_string).collect(),
    }
}

fn author(id: &str, name: &str, verified: bool) -> Author {
    Author {
        id: id.to_string(),
        name: name.to_string(),
        verified,
    }
}

fn review(id: &str, rating: i32, content: &str, author_id: &str, game_id: &str) -> Review {
    Review {
        id: id.to_string(),
        rating,
        content: content.to_string(),
        game_id: game_id.to_string(),
        author_id: author_id.to_string(),
    }
}
