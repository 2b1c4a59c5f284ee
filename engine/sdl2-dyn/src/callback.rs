//! Handler tables reached from native trampolines.
//!
//! The native side only ever sees a trampoline and an opaque key passed as
//! its user data. A trampoline clones the slot for that key out of the
//! registry, then runs the handler while holding the slot lock. Removal takes
//! the slot out of the registry and then clears it under the same slot lock,
//! so once removal returns the handler is never entered again.

use std::{
    borrow::Borrow,
    cell::RefCell,
    collections::BTreeMap,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc,
    },
};

use parking_lot::{Mutex, ReentrantMutex};

static NEXT_HANDLE: AtomicUsize = AtomicUsize::new(1);

/// A fresh non-zero key, so a handle never looks like a null pointer.
pub(crate) fn next_handle() -> usize {
    NEXT_HANDLE.fetch_add(1, Ordering::Relaxed)
}

pub(crate) struct Slot<F: ?Sized> {
    handler: ReentrantMutex<RefCell<Option<Box<F>>>>,
    removed: AtomicBool,
}

impl<F: ?Sized> Slot<F> {
    pub fn new(handler: Box<F>) -> Self {
        Self {
            handler: ReentrantMutex::new(RefCell::new(Some(handler))),
            removed: AtomicBool::new(false),
        }
    }

    /// Run `call` against the handler.
    ///
    /// Returns `None` without calling when the handler has been removed, or
    /// when it is already running further up this thread's stack.
    pub fn with<R>(&self, call: impl FnOnce(&mut F) -> R) -> Option<R> {
        let guard = self.handler.lock();
        let mut handler = guard.try_borrow_mut().ok()?;
        if self.removed.load(Ordering::Acquire) {
            return None;
        }
        let ret = call(handler.as_deref_mut()?);
        // The handler may have removed itself while it ran.
        let retired = match self.removed.load(Ordering::Acquire) {
            true => handler.take(),
            false => None,
        };
        drop(handler);
        drop(guard);
        drop(retired);
        Some(ret)
    }

    /// Take the handler out, waiting for a call on another thread to finish.
    pub fn clear(&self) -> Option<Box<F>> {
        self.removed.store(true, Ordering::Release);
        let guard = self.handler.lock();
        // A call on this thread is still running; `with` drops it on return.
        let mut handler = guard.try_borrow_mut().ok()?;
        handler.take()
    }
}

pub(crate) struct Registry<K, F: ?Sized> {
    slots: Mutex<BTreeMap<K, Arc<Slot<F>>>>,
}

impl<K: Ord, F: ?Sized> Registry<K, F> {
    pub const fn new() -> Self {
        Self {
            slots: Mutex::new(BTreeMap::new()),
        }
    }

    /// Install `handler` under `key`, returning the slot it displaced.
    pub fn insert(&self, key: K, handler: Box<F>) -> Option<Arc<Slot<F>>> {
        self.slots.lock().insert(key, Arc::new(Slot::new(handler)))
    }

    pub fn get<Q>(&self, key: &Q) -> Option<Arc<Slot<F>>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.slots.lock().get(key).cloned()
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.slots.lock().contains_key(key)
    }

    /// Look up `key` and run its handler.
    pub fn invoke<Q, R>(&self, key: &Q, call: impl FnOnce(&mut F) -> R) -> Option<R>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let slot = self.get(key)?;
        slot.with(call)
    }

    /// Unlink `key` without retiring its handler, which may still be
    /// running. The caller clears the returned slot.
    pub fn take<Q>(&self, key: &Q) -> Option<Arc<Slot<F>>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.slots.lock().remove(key)
    }

    /// Remove `key` and retire its handler. Returns whether it was present.
    pub fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.take(key) {
            Some(slot) => {
                drop(slot.clear());
                true
            }
            None => false,
        }
    }
}

/// Encode a registry key as native user data.
#[inline(always)]
pub(crate) fn handle_to_userdata(handle: usize) -> *mut std::ffi::c_void {
    handle as *mut std::ffi::c_void
}

#[inline(always)]
pub(crate) fn userdata_to_handle(userdata: *mut std::ffi::c_void) -> usize {
    userdata as usize
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicU32;

    use super::*;

    type Handler = dyn FnMut(u32) -> u32 + Send;

    #[test]
    fn invoke_and_remove() {
        let registry = Registry::<usize, Handler>::new();
        let handle = next_handle();
        assert_ne!(handle, 0);

        registry.insert(handle, Box::new(|x| x + 1));
        assert_eq!(registry.invoke(&handle, |f| f(1)), Some(2));
        assert!(registry.remove(&handle));
        assert_eq!(registry.invoke(&handle, |f| f(1)), None);
        assert!(!registry.remove(&handle));
    }

    #[test]
    fn taken_slot_runs_until_cleared() {
        let registry = Registry::<usize, Handler>::new();
        let handle = next_handle();
        registry.insert(handle, Box::new(|x| x + 1));

        let slot = registry.take(&handle).unwrap();
        assert!(!registry.contains(&handle));
        assert_eq!(registry.invoke(&handle, |f| f(1)), None);
        assert_eq!(slot.with(|f| f(1)), Some(2));
        assert!(slot.clear().is_some());
        assert_eq!(slot.with(|f| f(1)), None);
    }

    #[test]
    fn keys_are_independent() {
        let registry = Registry::<usize, Handler>::new();
        let a = next_handle();
        let b = next_handle();
        registry.insert(a, Box::new(|x| x * 2));
        registry.insert(b, Box::new(|x| x * 3));
        registry.remove(&a);
        assert_eq!(registry.invoke(&a, |f| f(5)), None);
        assert_eq!(registry.invoke(&b, |f| f(5)), Some(15));
    }

    #[test]
    fn reentry_is_skipped() {
        let slot = Slot::<dyn FnMut() -> u32 + Send>::new(Box::new(|| 1));
        let nested = slot.with(|_| slot.with(|f| f()));
        assert_eq!(nested, Some(None));
    }

    #[test]
    fn self_removal_drops_after_call() {
        static DROPS: AtomicU32 = AtomicU32::new(0);
        struct Tracked;
        impl Drop for Tracked {
            fn drop(&mut self) {
                DROPS.fetch_add(1, Ordering::SeqCst);
            }
        }

        let tracked = Tracked;
        let slot = Slot::<dyn FnMut() + Send>::new(Box::new(move || {
            let _keep = &tracked;
        }));
        slot.with(|f| {
            f();
            assert!(slot.clear().is_none());
            assert_eq!(DROPS.load(Ordering::SeqCst), 0);
        });
        assert_eq!(DROPS.load(Ordering::SeqCst), 1);
        assert_eq!(slot.with(|f| f()), None);
    }

    #[test]
    fn replacing_returns_previous() {
        let registry = Registry::<&'static str, Handler>::new();
        assert!(registry.insert("a", Box::new(|x| x)).is_none());
        let previous = registry.insert("a", Box::new(|x| x + 10)).unwrap();
        assert!(previous.clear().is_some());
        assert_eq!(registry.invoke(&"a", |f| f(1)), Some(11));
        assert!(registry.contains(&"a"));
    }
}
