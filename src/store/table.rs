//! Generic ordered table with max+1 id generation

/// A record that can live in an [`EntityStore`].
pub trait Record: Clone {
    /// The record's integer id, unique within its table.
    fn id(&self) -> i64;
}

/// Ordered in-memory table of records.
///
/// Lookups are linear scans. Tables are small and synchronous, so no index
/// is maintained.
#[derive(Debug, Clone)]
pub struct EntityStore<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> EntityStore<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a record. The caller has already assigned its id.
    pub fn insert(&mut self, record: T) {
        self.records.push(record);
    }

    /// Find a record by id
    pub fn find_by_id(&self, id: i64) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Find a record by id for in-place mutation
    pub fn find_by_id_mut(&mut self, id: i64) -> Option<&mut T> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    /// Remove the first record with the given id and return it
    pub fn remove(&mut self, id: i64) -> Option<T> {
        let pos = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(pos))
    }

    /// Remove every record matching the predicate, preserving the order of
    /// the survivors. Returns the removed records in table order.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> Vec<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.records.len());
        for record in self.records.drain(..) {
            if predicate(&record) {
                removed.push(record);
            } else {
                kept.push(record);
            }
        }
        self.records = kept;
        removed
    }

    /// Snapshot of the whole table in insertion order.
    ///
    /// The returned vector is detached from internal storage.
    pub fn all(&self) -> Vec<T> {
        self.records.clone()
    }

    /// Borrowing iterator in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }

    /// Next id to assign: `max(id) + 1`, or 1 for an empty table
    pub fn next_id(&self) -> i64 {
        self.records.iter().map(Record::id).max().map_or(1, |max| max + 1)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
