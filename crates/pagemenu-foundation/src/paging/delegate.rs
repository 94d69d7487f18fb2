//! Lifecycle notifications.

/// Observer of the page lifecycle. Every method defaults to a no-op so a
/// host only implements what it cares about.
pub trait PageLifecycleDelegate {
    fn will_load(&mut self, index: usize) {
        let _ = index;
    }

    fn did_load(&mut self, index: usize) {
        let _ = index;
    }

    fn will_unload(&mut self, index: usize) {
        let _ = index;
    }

    fn did_unload(&mut self, index: usize) {
        let _ = index;
    }

    fn did_move_to_page(&mut self, index: usize) {
        let _ = index;
    }

    fn on_scroll(&mut self) {}
}

/// A single lifecycle notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    WillLoad(usize),
    DidLoad(usize),
    WillUnload(usize),
    DidUnload(usize),
    DidMoveToPage(usize),
    DidScroll,
}

impl LifecycleEvent {
    /// Page index the event concerns, if any.
    pub fn index(&self) -> Option<usize> {
        match *self {
            LifecycleEvent::WillLoad(index)
            | LifecycleEvent::DidLoad(index)
            | LifecycleEvent::WillUnload(index)
            | LifecycleEvent::DidUnload(index)
            | LifecycleEvent::DidMoveToPage(index) => Some(index),
            LifecycleEvent::DidScroll => None,
        }
    }

    /// Invokes the delegate method matching this event.
    pub fn deliver_to(self, delegate: &mut dyn PageLifecycleDelegate) {
        match self {
            LifecycleEvent::WillLoad(index) => delegate.will_load(index),
            LifecycleEvent::DidLoad(index) => delegate.did_load(index),
            LifecycleEvent::WillUnload(index) => delegate.will_unload(index),
            LifecycleEvent::DidUnload(index) => delegate.did_unload(index),
            LifecycleEvent::DidMoveToPage(index) => delegate.did_move_to_page(index),
            LifecycleEvent::DidScroll => delegate.on_scroll(),
        }
    }
}

/// Holds the optional delegate; the only place that checks for its absence.
#[derive(Default)]
pub struct DelegateSlot {
    delegate: Option<Box<dyn PageLifecycleDelegate>>,
}

impl DelegateSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, delegate: Option<Box<dyn PageLifecycleDelegate>>) {
        self.delegate = delegate;
    }

    pub fn is_set(&self) -> bool {
        self.delegate.is_some()
    }

    pub fn dispatch(&mut self, event: LifecycleEvent) {
        log::trace!("lifecycle event {event:?}");
        if let Some(delegate) = self.delegate.as_deref_mut() {
            event.deliver_to(delegate);
        }
    }
}

impl std::fmt::Debug for DelegateSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelegateSlot")
            .field("is_set", &self.is_set())
            .finish()
    }
}
