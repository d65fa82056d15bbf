//! In-memory record store for the gamedex catalog: games, review
//! authors, and reviews related by string foreign keys.
//!
//! Collections preserve insertion order and every lookup is a linear
//! scan. All mutation funnels through a per-collection mutex so a
//! mutation's read-merge-write pass is a single critical section.

mod collection;
mod ids;
mod records;
mod seed;
mod store;

pub use collection::Collection;
pub use ids::IdSequence;
pub use records::{Author, Game, Record, Review};
pub use store::{GameEdits, RecordStore};
