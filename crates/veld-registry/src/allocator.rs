//! Monotonic in-zone mob id allocation.

use std::sync::atomic::{AtomicU32, Ordering};

use veld_core::MobId;

/// Issues unique, strictly increasing [`MobId`]s within one zone.
///
/// Backed by a single atomic counter starting at 1; `fetch_add` makes
/// concurrent spawn requests race-free without any lock. IDs are never
/// recycled — removal of a mob does not return its id to the pool.
///
/// # Design limit
///
/// The u32 counter bounds a zone to about 4.29 billion spawns over its
/// process lifetime. Overflow wraps and would violate uniqueness; no
/// zone approaches this in practice, so it is documented rather than
/// handled.
#[derive(Debug)]
pub struct MobIdAllocator {
    next: AtomicU32,
}

impl MobIdAllocator {
    /// Create an allocator whose first issued id is `MobId(1)`.
    pub fn new() -> Self {
        Self {
            next: AtomicU32::new(1),
        }
    }

    /// Allocate a fresh id, strictly greater than every id previously
    /// returned by this instance. Thread-safe; never fails.
    ///
    /// Relaxed ordering suffices: only the RMW atomicity matters for
    /// uniqueness, and the registry insertion that follows every
    /// allocation provides the publication edge.
    pub fn next(&self) -> MobId {
        MobId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// The id the next call to [`next`](Self::next) will return.
    ///
    /// Racy by nature; useful only for diagnostics and tests.
    pub fn peek(&self) -> MobId {
        MobId(self.next.load(Ordering::Relaxed))
    }
}

impl Default for MobIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn first_id_is_one() {
        let alloc = MobIdAllocator::new();
        assert_eq!(alloc.next(), MobId(1));
    }

    #[test]
    fn sequential_ids_strictly_increase() {
        let alloc = MobIdAllocator::new();
        let mut prev = alloc.next();
        for _ in 0..100 {
            let id = alloc.next();
            assert!(id > prev);
            prev = id;
        }
    }

    #[test]
    fn peek_does_not_allocate() {
        let alloc = MobIdAllocator::new();
        assert_eq!(alloc.peek(), MobId(1));
        assert_eq!(alloc.peek(), MobId(1));
        assert_eq!(alloc.next(), MobId(1));
        assert_eq!(alloc.peek(), MobId(2));
    }

    #[test]
    fn independent_allocators_do_not_interfere() {
        // Each zone owns its own allocator; id spaces are per-zone.
        let a = MobIdAllocator::new();
        let b = MobIdAllocator::new();
        assert_eq!(a.next(), MobId(1));
        assert_eq!(b.next(), MobId(1));
    }

    #[test]
    fn concurrent_allocation_yields_no_duplicates() {
        let alloc = Arc::new(MobIdAllocator::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let alloc = Arc::clone(&alloc);
            handles.push(thread::spawn(move || {
                (0..1000).map(|_| alloc.next()).collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(seen.len(), 8000);
    }
}
