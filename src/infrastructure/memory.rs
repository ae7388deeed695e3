use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::ports::{HasId, Located, Repository};

/// In-memory collection backing a resource for the life of the process.
///
/// Clones are cheap handles onto the same storage, so one repository can be
/// shared across workers the way a pool handle would be. Readers take a
/// snapshot; writers are exclusive.
pub struct MemoryRepository<E> {
    entries: Arc<RwLock<Vec<E>>>,
}

impl<E> MemoryRepository<E> {
    pub fn new() -> Self {
        Self::with_entries(Vec::new())
    }

    pub fn with_entries(entries: Vec<E>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }
}

impl<E> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for MemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<E> Repository<E> for MemoryRepository<E>
where
    E: HasId + Clone + Send + Sync + 'static,
{
    fn all(&self) -> Vec<E> {
        self.entries.read().clone()
    }

    fn find_by_id(&self, id: &str) -> Option<Located<E>> {
        let entries = self.entries.read();
        entries
            .iter()
            .position(|entry| entry.id() == id)
            .map(|index| Located {
                index,
                entity: entries[index].clone(),
            })
    }

    fn append(&self, entity: E) {
        self.entries.write().push(entity);
    }

    fn remove_at(&self, index: usize) -> Option<E> {
        let mut entries = self.entries.write();
        if index < entries.len() {
            Some(entries.remove(index))
        } else {
            None
        }
    }
}
