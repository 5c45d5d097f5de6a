//! Process-lifetime resolution caches.
//!
//! Both registries resolve expensive state lazily and keep it until told
//! otherwise. The two cache shapes here share the [`Invalidate`] contract so
//! every cached resolution in the crate can be dropped explicitly.
//!
//! First resolution runs while the cache lock is held: concurrent callers
//! block until the value exists and never construct a second copy.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Explicit invalidation entry point shared by all caches.
pub trait Invalidate {
    /// Drops every cached value. The next access resolves again.
    fn invalidate(&self);

    /// True when nothing is currently cached.
    fn is_empty(&self) -> bool;
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A panic inside a resolver leaves the slot untouched, so the data is still consistent.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A single lazily-resolved value plus its "resolved" flag.
#[derive(Debug)]
pub struct Memoized<T> {
    slot: Mutex<Option<T>>,
}

impl<T> Default for Memoized<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Memoized<T> {
    /// Creates an empty, unresolved cache.
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// True once a value has been resolved and not invalidated since.
    pub fn is_resolved(&self) -> bool {
        lock(&self.slot).is_some()
    }
}

impl<T: Clone> Memoized<T> {
    /// Returns the cached value, running `resolve` only if nothing is cached.
    pub fn get_or_resolve(&self, resolve: impl FnOnce() -> T) -> T {
        let mut slot = lock(&self.slot);
        if let Some(value) = slot.as_ref() {
            return value.clone();
        }
        let value = resolve();
        *slot = Some(value.clone());
        value
    }
}

impl<T> Invalidate for Memoized<T> {
    fn invalidate(&self) {
        lock(&self.slot).take();
    }

    fn is_empty(&self) -> bool {
        !self.is_resolved()
    }
}

/// Per-key lazily-constructed instances. At most one live value per key.
#[derive(Debug)]
pub struct KeyedCache<K, V> {
    entries: Mutex<HashMap<K, V>>,
}

impl<K, V> Default for KeyedCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> KeyedCache<K, V> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Number of cached instances.
    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }
}

impl<K: Eq + Hash, V: Clone> KeyedCache<K, V> {
    /// Returns the cached instance for `key`, if any.
    pub fn get(&self, key: &K) -> Option<V> {
        lock(&self.entries).get(key).cloned()
    }

    /// Returns the cached instance, or builds and caches one.
    ///
    /// `build` returning `None` caches nothing, so a later call tries again.
    pub fn get_or_try_insert_with(&self, key: K, build: impl FnOnce() -> Option<V>) -> Option<V> {
        let mut entries = lock(&self.entries);
        if let Some(existing) = entries.get(&key) {
            return Some(existing.clone());
        }
        let value = build()?;
        entries.insert(key, value.clone());
        Some(value)
    }

    /// Removes the instance cached for `key`, returning it.
    pub fn evict(&self, key: &K) -> Option<V> {
        lock(&self.entries).remove(key)
    }
}

impl<K, V> Invalidate for KeyedCache<K, V> {
    fn invalidate(&self) {
        lock(&self.entries).clear();
    }

    fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn memoized_resolves_once() {
        let memo = Memoized::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = memo.get_or_resolve(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                7
            });
            assert_eq!(value, 7);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(memo.is_resolved());
    }

    #[test]
    fn memoized_invalidate_forces_new_resolution() {
        let memo = Memoized::new();
        assert_eq!(memo.get_or_resolve(|| 1), 1);

        memo.invalidate();
        assert!(memo.is_empty());
        assert_eq!(memo.get_or_resolve(|| 2), 2);
    }

    #[test]
    fn memoized_concurrent_first_use_resolves_once() {
        let memo = Arc::new(Memoized::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let memo = Arc::clone(&memo);
                let calls = Arc::clone(&calls);
                thread::spawn(move || {
                    memo.get_or_resolve(|| {
                        calls.fetch_add(1, Ordering::SeqCst);
                        "resolved".to_string()
                    })
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "resolved");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn keyed_cache_builds_per_key() {
        let cache: KeyedCache<&str, Arc<String>> = KeyedCache::new();

        let a = cache
            .get_or_try_insert_with("a", || Some(Arc::new("a".into())))
            .unwrap();
        let again = cache
            .get_or_try_insert_with("a", || panic!("must not rebuild"))
            .unwrap();

        assert!(Arc::ptr_eq(&a, &again));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn keyed_cache_failed_build_caches_nothing() {
        let cache: KeyedCache<&str, u32> = KeyedCache::new();

        assert_eq!(cache.get_or_try_insert_with("x", || None), None);
        assert!(cache.is_empty());
        assert_eq!(cache.get_or_try_insert_with("x", || Some(3)), Some(3));
    }

    #[test]
    fn keyed_cache_evict_and_invalidate() {
        let cache: KeyedCache<&str, u32> = KeyedCache::new();
        cache.get_or_try_insert_with("a", || Some(1));
        cache.get_or_try_insert_with("b", || Some(2));

        assert_eq!(cache.evict(&"a"), Some(1));
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), Some(2));

        cache.invalidate();
        assert!(cache.is_empty());
    }
}
