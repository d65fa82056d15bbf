use crate::records::Record;

/// An insertion-ordered collection of records. There is no index beyond
/// the natural sequence; every lookup is a linear scan.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T: Record + Clone> Collection<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    /// All records, in store order.
    pub fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    /// The first record with the given id, if any.
    pub fn get(&self, id: &str) -> Option<T> {
        self.records.iter().find(|record| record.id() == id).cloned()
    }

    /// All records matching the predicate, in store order.
    pub fn matching(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.records.iter().filter(|record| predicate(record)).cloned().collect()
    }

    /// Appends a record. Id uniqueness is the id allocator's contract,
    /// not checked here.
    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    /// Wholesale replacement of the collection contents.
    pub fn replace_all(&mut self, records: Vec<T>) {
        self.records = records;
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(Record::id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
