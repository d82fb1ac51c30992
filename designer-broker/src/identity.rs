//! Object identity and lifecycle tracking.
//!
//! One mutex guards both the id counter and the live-object index, so "assign
//! an id" and "make the object resolvable" happen in a single critical
//! section. The index holds only weak handles: owners decide when objects die.

use crate::object::{Object, ObjectRef};
use designer_types::ObjectId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::debug;

/// Smallest index size at which `register` sweeps out dead entries.
const MIN_PURGE_AT: usize = 64;

struct LiveSet {
    next_id: u64,
    objects: HashMap<ObjectId, Weak<Object>>,
    purge_at: usize,
}

impl LiveSet {
    /// Drops entries whose owner let the object go without unregistering it.
    fn purge_dead(&mut self) {
        self.objects.retain(|_, weak| weak.strong_count() > 0);
    }
}

/// Allocates object ids and resolves them back to live objects.
pub struct IdentityManager {
    live: Mutex<LiveSet>,
    quitting: AtomicBool,
}

impl IdentityManager {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            live: Mutex::new(LiveSet {
                next_id: 1,
                objects: HashMap::with_capacity(capacity),
                purge_at: capacity.max(MIN_PURGE_AT),
            }),
            quitting: AtomicBool::new(false),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LiveSet> {
        self.live.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Assigns the next id to `object`, makes it resolvable and hands back the
    /// shared handle.
    pub fn register(&self, mut object: Object) -> ObjectRef {
        let mut live = self.lock();
        if live.objects.len() >= live.purge_at {
            live.purge_dead();
            live.purge_at = (live.objects.len() * 2).max(MIN_PURGE_AT);
        }
        let id = ObjectId::new(live.next_id);
        live.next_id += 1;
        object.assign_id(id);
        let object = Arc::new(object);
        live.objects.insert(id, Arc::downgrade(&object));
        object
    }

    /// Removes `object` from the live set.
    ///
    /// Returns whether anything was removed. Unregistering an object twice,
    /// one that was never registered, or anything after shutdown has begun is
    /// a silent no-op.
    pub fn unregister(&self, object: &Object) -> bool {
        if self.is_quitting() {
            return false;
        }
        let id = object.id();
        if id.is_none() {
            return false;
        }

        let mut live = self.lock();
        let owned = live
            .objects
            .get(&id)
            .is_some_and(|weak| std::ptr::eq(weak.as_ptr(), object));
        if owned {
            live.objects.remove(&id);
            debug!(id = %id, type_name = object.type_name(), "object unregistered");
        }
        owned
    }

    /// Resolves an id to its live object. `ObjectId::NONE` never resolves.
    pub fn resolve(&self, id: ObjectId) -> Option<ObjectRef> {
        if id.is_none() {
            return None;
        }

        let mut live = self.lock();
        let weak = live.objects.get(&id)?;
        match weak.upgrade() {
            Some(object) => Some(object),
            None => {
                // owner dropped it without unregistering
                live.objects.remove(&id);
                None
            }
        }
    }

    /// Number of registered objects that are still alive.
    #[must_use]
    pub fn live_count(&self) -> usize {
        let mut live = self.lock();
        live.purge_dead();
        live.objects.len()
    }

    /// Ids of registered, still-alive objects in ascending order.
    #[must_use]
    pub fn live_ids(&self) -> Vec<ObjectId> {
        let mut live = self.lock();
        live.purge_dead();
        let mut ids: Vec<ObjectId> = live.objects.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Entries currently held in the live index, including dead ones not yet
    /// swept out.
    #[must_use]
    pub fn tracked_count(&self) -> usize {
        self.lock().objects.len()
    }

    /// The id the next registration will receive. Does not allocate it.
    #[must_use]
    pub fn peek_next_id(&self) -> ObjectId {
        ObjectId::new(self.lock().next_id)
    }

    /// Sets the quitting flag. Returns `true` for the call that set it.
    pub fn begin_shutdown(&self) -> bool {
        !self.quitting.swap(true, Ordering::SeqCst)
    }

    #[must_use]
    pub fn is_quitting(&self) -> bool {
        self.quitting.load(Ordering::SeqCst)
    }
}

impl Default for IdentityManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for IdentityManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let live = self.lock();
        f.debug_struct("IdentityManager")
            .field("next_id", &live.next_id)
            .field("tracked", &live.objects.len())
            .field("quitting", &self.is_quitting())
            .finish()
    }
}
