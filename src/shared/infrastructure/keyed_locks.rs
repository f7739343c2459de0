// One async mutex per key, created on demand.
//
// A registry entry lives while some task holds or waits on it. Every caller of
// `lock` registers before waiting and unregisters on drop, including when the
// waiting future is cancelled; the last one out removes the entry.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

struct Slot {
    mutex: Arc<AsyncMutex<()>>,
    users: usize,
}

type Registry<K> = Arc<Mutex<HashMap<K, Slot>>>;

pub struct KeyedLocks<K> {
    registry: Registry<K>,
}

impl<K> Default for KeyedLocks<K> {
    fn default() -> Self {
        Self {
            registry: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<K> KeyedLocks<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other task holds `key`, then holds it until the guard drops.
    pub async fn lock(&self, key: K) -> KeyedLockGuard<K> {
        let (registration, mutex) = Registration::register(self.registry.clone(), key);
        let guard = mutex.lock_owned().await;
        KeyedLockGuard {
            _guard: guard,
            _registration: registration,
        }
    }

    /// Number of keys currently held or waited on.
    pub fn len(&self) -> usize {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct Registration<K>
where
    K: Eq + Hash,
{
    key: K,
    registry: Registry<K>,
}

impl<K> Registration<K>
where
    K: Eq + Hash + Clone,
{
    fn register(registry: Registry<K>, key: K) -> (Self, Arc<AsyncMutex<()>>) {
        let mutex = {
            let mut slots = registry.lock().unwrap_or_else(PoisonError::into_inner);
            let slot = slots.entry(key.clone()).or_insert_with(|| Slot {
                mutex: Arc::new(AsyncMutex::new(())),
                users: 0,
            });
            slot.users += 1;
            slot.mutex.clone()
        };
        (Self { key, registry }, mutex)
    }
}

impl<K> Drop for Registration<K>
where
    K: Eq + Hash,
{
    fn drop(&mut self) {
        let mut slots = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        let unused = match slots.get_mut(&self.key) {
            Some(slot) => {
                slot.users -= 1;
                slot.users == 0
            }
            None => false,
        };
        if unused {
            slots.remove(&self.key);
        }
    }
}

/// Holds a key. Field order matters: the mutex is released before the
/// registration is dropped.
pub struct KeyedLockGuard<K>
where
    K: Eq + Hash,
{
    _guard: OwnedMutexGuard<()>,
    _registration: Registration<K>,
}
