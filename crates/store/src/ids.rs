use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic id allocator. Ids are decimal strings; the sequence starts
/// past the highest numeric id already in use, so freshly assigned ids
/// never collide with seeded ones.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    pub fn starting_at(next: u64) -> Self {
        Self {
            next: AtomicU64::new(next),
        }
    }

    /// A sequence whose first id is one past the highest numeric id in
    /// `ids`. Non-numeric ids are ignored.
    pub fn after<'a>(ids: impl Iterator<Item = &'a str>) -> Self {
        let highest = ids.filter_map(|id| id.parse::<u64>().ok()).max().unwrap_or(0);
        Self::starting_at(highest + 1)
    }

    pub fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::IdSequence;

    #[test]
    fn ids_are_sequential() {
        let ids = IdSequence::starting_at(4);
        assert_eq!(ids.next_id(), "4");
        assert_eq!(ids.next_id(), "5");
    }

    #[test]
    fn starts_past_the_highest_numeric_id() {
        let ids = IdSequence::after(["3", "11", "7"].into_iter());
        assert_eq!(ids.next_id(), "12");
    }

    #[test]
    fn non_numeric_ids_are_ignored() {
        let ids = IdSequence::after(["abc", "2"].into_iter());
        assert_eq!(ids.next_id(), "3");

        let ids = IdSequence::after(std::iter::empty());
        assert_eq!(ids.next_id(), "1");
    }
}
