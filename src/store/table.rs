use std::collections::BTreeMap;
use std::fmt::Debug;

/// Trait that any record kept in a [`Table`] must implement.
pub trait Entity: Clone + Debug {
    type CreateParams: Debug;
    type Patch: Debug;

    fn id(&self) -> u64;

    /// Construct the full record from the assigned id and creation payload.
    fn from_create_params(id: u64, params: Self::CreateParams) -> Self;

    /// Apply the supplied fields of `patch`, leaving the rest untouched.
    fn on_update(&mut self, patch: Self::Patch);
}

/// One entity collection with its own id sequence.
///
/// Rows are keyed by id and ids only ever grow, so iterating the table walks
/// rows in insertion order.
#[derive(Debug, Clone)]
pub struct Table<T: Entity> {
    rows: BTreeMap<u64, T>,
    next_id: u64,
}

impl<T: Entity> Table<T> {
    pub fn new(first_id: u64) -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: first_id,
        }
    }

    pub fn create(&mut self, params: T::CreateParams) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = T::from_create_params(id, params);
        self.rows.insert(row.id(), row.clone());
        row
    }

    pub fn get(&self, id: u64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.rows.contains_key(&id)
    }

    /// Returns `false` when `id` is unknown.
    pub fn update(&mut self, id: u64, patch: T::Patch) -> bool {
        match self.rows.get_mut(&id) {
            Some(row) => {
                row.on_update(patch);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
