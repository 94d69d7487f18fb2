use std::cell::RefCell;
use std::rc::Rc;

use pagemenu_foundation::{LifecycleEvent, PageLifecycleDelegate};

/// Delegate that records every lifecycle notification in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingDelegate {
    events: Rc<RefCell<Vec<LifecycleEvent>>>,
}

impl RecordingDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Recorded events without the `DidScroll` noise.
    pub fn page_events(&self) -> Vec<LifecycleEvent> {
        self.events
            .borrow()
            .iter()
            .copied()
            .filter(|event| *event != LifecycleEvent::DidScroll)
            .collect()
    }

    pub fn count(&self, event: LifecycleEvent) -> usize {
        self.events.borrow().iter().filter(|e| **e == event).count()
    }

    fn record(&self, event: LifecycleEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl PageLifecycleDelegate for RecordingDelegate {
    fn will_load(&mut self, index: usize) {
        self.record(LifecycleEvent::WillLoad(index));
    }

    fn did_load(&mut self, index: usize) {
        self.record(LifecycleEvent::DidLoad(index));
    }

    fn will_unload(&mut self, index: usize) {
        self.record(LifecycleEvent::WillUnload(index));
    }

    fn did_unload(&mut self, index: usize) {
        self.record(LifecycleEvent::DidUnload(index));
    }

    fn did_move_to_page(&mut self, index: usize) {
        self.record(LifecycleEvent::DidMoveToPage(index));
    }

    fn on_scroll(&mut self) {
        self.record(LifecycleEvent::DidScroll);
    }
}
