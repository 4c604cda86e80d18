//! Recording event sink.

use plurality_voting::{Event, EventSink};
use std::cell::RefCell;
use std::rc::Rc;

/// Collects every emitted event for later assertions.
///
/// Clones share the underlying buffer: hand one clone to the plugin, keep
/// the other to read what was emitted.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<Event>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything emitted so far, in order.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}
