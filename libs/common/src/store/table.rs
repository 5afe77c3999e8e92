//! Insertion-ordered record table keyed by identifier

use std::collections::HashMap;

use uuid::Uuid;

#[derive(Debug)]
pub(crate) struct Table<T> {
    records: HashMap<Uuid, T>,
    order: Vec<Uuid>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<T: Clone> Table<T> {
    /// A v4 identifier not yet used in this table
    pub(crate) fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if !self.records.contains_key(&id) {
                return id;
            }
        }
    }

    pub(crate) fn get(&self, id: &Uuid) -> Option<&T> {
        self.records.get(id)
    }

    /// Insert or replace; a replaced record keeps its position
    pub(crate) fn insert(&mut self, id: Uuid, record: T) {
        if self.records.insert(id, record).is_none() {
            self.order.push(id);
        }
    }

    pub(crate) fn remove(&mut self, id: &Uuid) -> Option<T> {
        let removed = self.records.remove(id)?;
        self.order.retain(|existing| existing != id);
        Some(removed)
    }

    pub(crate) fn to_vec(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .cloned()
            .collect()
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }
}
