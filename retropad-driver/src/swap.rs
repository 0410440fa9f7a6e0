use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Cross-thread whole-value replacement for configuration tables.
///
/// Each handle keeps a private cached copy; writers publish a complete new
/// value, readers refresh their cache only when the dirty flag was set.
/// Readers therefore always observe either the old or the new value in
/// full, never a partial update, and the steady-state read path is a single
/// atomic load.
#[derive(Debug, Clone)]
pub struct SharedSwap<T> {
    cached: T,
    locked: Arc<Mutex<T>>,
    updated: Arc<AtomicBool>,
}

impl<T: Clone + Eq> SharedSwap<T> {
    pub fn new(initial: T) -> Self {
        Self {
            cached: initial.clone(),
            locked: Arc::new(Mutex::new(initial)),
            updated: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Refreshes the cached copy if another handle published since the last
    /// check. Returns whether the cache changed.
    pub fn check_for_updates(&mut self) -> bool {
        if self.updated.compare_exchange(true, false, Ordering::AcqRel, Ordering::Relaxed)
            == Ok(true)
        {
            self.cached = self.locked.lock().unwrap().clone();
            return true;
        }
        false
    }

    /// Publishes a new value to every handle. No-op when the value equals
    /// this handle's cached copy.
    pub fn publish(&mut self, value: &T) {
        if value == &self.cached {
            return;
        }

        self.cached = value.clone();
        *self.locked.lock().unwrap() = value.clone();
        self.updated.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn get(&self) -> &T {
        &self.cached
    }
}
