use std::sync::Arc;

use tracing::{debug, trace};

use crate::handle::ListenerHandle;

/// A multicast registry over some capability set `T`, usually a `dyn Trait`.
///
/// The registry holds every listener weakly: registration never keeps a listener
/// alive, and a listener whose last strong reference is dropped elsewhere simply
/// stops appearing in [`live_listeners`](Self::live_listeners) and broadcasts,
/// with no [`remove_listener`](Self::remove_listener) call required.
///
/// Insertion order is preserved across all queries and broadcasts. Removal closes
/// the gap without reordering the remaining listeners.
///
/// All operations are synchronous and the registry performs no internal
/// synchronization; callers that share an instance across threads must add their
/// own locking around it.
pub struct ListenerRegistry<T: ?Sized> {
    handles: Vec<ListenerHandle<T>>,
}

impl<T: ?Sized> Default for ListenerRegistry<T> {
    fn default() -> Self { Self::new() }
}

impl<T: ?Sized> std::fmt::Debug for ListenerRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry").field("handles", &self.handles.len()).finish()
    }
}

impl<T: ?Sized> ListenerRegistry<T> {
    /// Creates an empty registry.
    pub fn new() -> Self { Self { handles: Vec::new() } }

    /// Seeds a registry from an initial listener list, in order.
    ///
    /// The registry takes no ownership; a caller that drops its last strong
    /// reference after construction leaves the corresponding handle stale.
    pub fn with_listeners<'a>(initial: impl IntoIterator<Item = &'a Arc<T>>) -> Self
    where T: 'a {
        Self { handles: initial.into_iter().map(ListenerHandle::new).collect() }
    }

    /// Appends a listener to the end of the registration order.
    ///
    /// No uniqueness check is made: adding the same instance twice yields two
    /// independent handles and two invocations per broadcast.
    pub fn add_listener(&mut self, listener: &Arc<T>) {
        self.compact();
        self.handles.push(ListenerHandle::new(listener));
        trace!("added listener, {} handle(s) held", self.handles.len());
    }

    /// Removes the first handle referring to the same object instance as
    /// `listener`, scanning in insertion order.
    ///
    /// Identity means the same allocation, never structural equality. Removing a
    /// listener that was never added, was already removed, or has already been
    /// destroyed is a silent no-op. Only one handle is removed per call even when
    /// duplicates exist.
    pub fn remove_listener(&mut self, listener: &Arc<T>) {
        match self.handles.iter().position(|handle| handle.refers_to(listener)) {
            Some(index) => {
                self.handles.remove(index);
                trace!("removed listener at slot {}", index);
            }
            None => trace!("remove_listener found no matching handle"),
        }
    }

    /// Every live listener, in insertion order. Stale handles are skipped.
    ///
    /// Idempotent: calling this twice with no mutation in between returns the
    /// same sequence.
    pub fn live_listeners(&self) -> Vec<Arc<T>> { self.handles.iter().filter_map(ListenerHandle::upgrade).collect() }

    /// Number of listeners currently alive. Stale handles do not count.
    pub fn live_count(&self) -> usize { self.handles.iter().filter(|handle| !handle.is_stale()).count() }

    /// True when no live listener remains, stale handles notwithstanding.
    pub fn is_empty(&self) -> bool { self.live_count() == 0 }

    /// Invokes `op` on every live listener, synchronously, in insertion order.
    ///
    /// Any results must be collected by the caller via closure over external
    /// state; nothing is aggregated here.
    pub fn notify_all(&self, mut op: impl FnMut(&T)) {
        for listener in self.live_listeners() {
            op(&listener);
        }
    }

    /// Fallible broadcast, fail-fast: the first error is returned to the caller
    /// and the remaining listeners in this broadcast are not invoked.
    pub fn try_notify_all<E>(&self, mut op: impl FnMut(&T) -> Result<(), E>) -> Result<(), E> {
        for listener in self.live_listeners() {
            op(&listener)?;
        }
        Ok(())
    }

    /// Drops stale handles. Live handles keep their relative order, so no
    /// observable result changes.
    fn compact(&mut self) {
        let before = self.handles.len();
        self.handles.retain(|handle| !handle.is_stale());
        if self.handles.len() != before {
            debug!("pruned {} stale handle(s)", before - self.handles.len());
        }
    }
}
