//! Rollback guard for bundle construction
//!
//! Construction ingests a tree into a repository scope and then records the
//! entry point. If anything fails in between, the scope must not keep the
//! half-ingested objects, so the guard erases it on drop unless committed.
//!
//! ```ignore
//! let mut guard = IngestGuard::new(&mut repository);
//! guard.put_tree(source)?;
//! guard.commit();
//! ```

use std::ops::{Deref, DerefMut};

use tracing::warn;

use crate::repository::Repository;

/// Erases a repository scope on drop unless committed
pub struct IngestGuard<'a, R: Repository> {
    repository: &'a mut R,
    committed: bool,
}

impl<'a, R: Repository> IngestGuard<'a, R> {
    pub fn new(repository: &'a mut R) -> Self {
        Self {
            repository,
            committed: false,
        }
    }

    /// Keep everything ingested through this guard
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl<R: Repository> Deref for IngestGuard<'_, R> {
    type Target = R;

    fn deref(&self) -> &R {
        self.repository
    }
}

impl<R: Repository> DerefMut for IngestGuard<'_, R> {
    fn deref_mut(&mut self) -> &mut R {
        self.repository
    }
}

impl<R: Repository> Drop for IngestGuard<'_, R> {
    fn drop(&mut self) {
        if !self.committed {
            if let Err(e) = self.repository.erase() {
                warn!(error = %e, "failed to roll back partially ingested scope");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::repository::MemoryRepository;

    #[test]
    fn test_commit_keeps_objects() {
        let mut repo = MemoryRepository::new();
        {
            let mut guard = IngestGuard::new(&mut repo);
            guard.put_object("run.sh", b"x".to_vec());
            guard.commit();
        }
        assert_eq!(repo.list_object_names().unwrap().len(), 1);
    }

    #[test]
    fn test_drop_without_commit_erases() {
        let mut repo = MemoryRepository::new();
        {
            let mut guard = IngestGuard::new(&mut repo);
            guard.put_object("run.sh", b"x".to_vec());
            // Not committed - rolls back on drop
        }
        assert!(repo.list_object_names().unwrap().is_empty());
    }
}
