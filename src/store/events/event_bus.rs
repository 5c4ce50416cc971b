//! # Event Bus
//!
//! Central event distribution for decoupled communication between models,
//! presenters, and views. Dispatch is synchronous and depth-first: an event
//! emitted from inside a handler is fully processed, nested emissions
//! included, before control returns to the outer `emit` call.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::shop_events::{EventKind, ShopEvent};

/// Handler closure invoked with a reference to the dispatched event
pub type EventHandler = Rc<dyn Fn(&ShopEvent)>;

/// Identifies one registration so it can be removed with [`EventBus::off`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Nested-emit ceiling. A handler chain that re-emits past this depth is
/// cycling; the bus drops the event instead of overflowing the stack.
const MAX_EMIT_DEPTH: u32 = 64;

struct Subscription {
    id: SubscriptionId,
    /// `None` subscribes to every event
    kind: Option<EventKind>,
    handler: EventHandler,
}

/// Synchronous publish/subscribe dispatcher
///
/// Handlers fire in registration order. Registering the same closure twice
/// is allowed and results in two invocations; the bus never dedupes.
/// Emitting an event nobody subscribed to is a silent no-op.
#[derive(Default)]
pub struct EventBus {
    subscriptions: RefCell<Vec<Subscription>>,
    next_id: Cell<u64>,
    depth: Cell<u32>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a handler to one event kind
    pub fn on(&self, kind: EventKind, handler: EventHandler) -> SubscriptionId {
        self.subscribe(Some(kind), handler)
    }

    /// Subscribe a handler to every event (logging, test capture)
    pub fn on_any(&self, handler: EventHandler) -> SubscriptionId {
        self.subscribe(None, handler)
    }

    fn subscribe(&self, kind: Option<EventKind>, handler: EventHandler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.subscriptions.borrow_mut().push(Subscription {
            id,
            kind,
            handler,
        });
        id
    }

    /// Remove one registration. Unknown ids are ignored.
    pub fn off(&self, id: SubscriptionId) {
        self.subscriptions.borrow_mut().retain(|s| s.id != id);
    }

    /// Dispatch an event to every matching handler, in registration order
    ///
    /// Handlers may emit further events (dispatched depth-first) and may
    /// subscribe or unsubscribe; the handler set invoked for this event is
    /// the one registered at the moment `emit` was called.
    pub fn emit(&self, event: ShopEvent) {
        let depth = self.depth.get();
        if depth >= MAX_EMIT_DEPTH {
            tracing::error!(
                kind = ?event.kind(),
                depth,
                "re-entrant emit exceeded depth limit, dropping event"
            );
            return;
        }

        // Snapshot matching handlers so re-entrant on/off cannot alias the
        // subscription list while it is being walked.
        let handlers: Vec<EventHandler> = self
            .subscriptions
            .borrow()
            .iter()
            .filter(|s| s.kind.is_none() || s.kind == Some(event.kind()))
            .map(|s| Rc::clone(&s.handler))
            .collect();

        self.depth.set(depth + 1);
        for handler in handlers {
            handler(&event);
        }
        self.depth.set(depth);
    }
}
