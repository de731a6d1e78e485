//! Move/release subscriptions scoped to a single drag gesture.
//!
//! A gesture acquires a [`ListenerHandle`] from the board's
//! [`PointerListeners`] table when it starts. The board only routes move and
//! release events while a handle is live, and dropping the handle removes the
//! subscription, so every way a gesture can end (matching release, restart,
//! the selection being dropped) releases it exactly once.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Default)]
struct ListenerTable {
    next_id: u64,
    active: BTreeSet<u64>,
    released: u64,
}

/// Registry of live move/release subscriptions
#[derive(Debug, Clone, Default)]
pub struct PointerListeners {
    table: Rc<RefCell<ListenerTable>>,
}

impl PointerListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscription
    pub(crate) fn subscribe(&self) -> ListenerHandle {
        let mut table = self.table.borrow_mut();
        table.next_id += 1;
        let id = table.next_id;
        table.active.insert(id);
        tracing::trace!(id, "pointer listener subscribed");
        ListenerHandle {
            id,
            table: Rc::clone(&self.table),
        }
    }

    /// Whether move/release events should currently be delivered
    pub fn is_listening(&self) -> bool {
        !self.table.borrow().active.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.table.borrow().active.len()
    }

    /// Number of subscriptions released since the table was created
    pub fn released_count(&self) -> u64 {
        self.table.borrow().released
    }
}

/// A live subscription; released when dropped
pub struct ListenerHandle {
    id: u64,
    table: Rc<RefCell<ListenerTable>>,
}

impl ListenerHandle {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl fmt::Debug for ListenerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerHandle").field("id", &self.id).finish()
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let mut table = self.table.borrow_mut();
        if table.active.remove(&self.id) {
            table.released += 1;
            tracing::trace!(id = self.id, "pointer listener released");
        }
    }
}
