use std::sync::{Arc, Weak};

/// A non-owning wrapper around one registered listener.
///
/// A handle never extends its listener's lifetime: once the last strong reference
/// held elsewhere is dropped, the handle is stale and the listener is logically
/// absent from every registry query, even though the handle may still occupy a
/// slot until the next mutation prunes it.
pub struct ListenerHandle<T: ?Sized> {
    listener: Weak<T>,
}

impl<T: ?Sized> ListenerHandle<T> {
    pub fn new(listener: &Arc<T>) -> Self { Self { listener: Arc::downgrade(listener) } }

    /// Recover a strong reference to the listener. `None` means the backing
    /// object has been destroyed.
    pub fn upgrade(&self) -> Option<Arc<T>> { self.listener.upgrade() }

    /// True once the backing listener has been destroyed.
    pub fn is_stale(&self) -> bool { self.listener.strong_count() == 0 }

    /// Same-object identity, not value equality. Compares allocation addresses
    /// only, ignoring vtable pointers, so two `Arc<dyn _>` views of one object
    /// always match.
    pub fn refers_to(&self, listener: &Arc<T>) -> bool { std::ptr::addr_eq(self.listener.as_ptr(), Arc::as_ptr(listener)) }
}

impl<T: ?Sized> std::fmt::Debug for ListenerHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerHandle").field("stale", &self.is_stale()).finish()
    }
}
