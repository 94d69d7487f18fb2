//! Page slot storage.
//!
//! [`PagingStore`] is a fixed-size arena keyed by page index. It is resized
//! wholesale on reload and otherwise only has content put into or taken out
//! of existing slots. It never touches a view.

/// A logical position in the paged sequence.
#[derive(Debug)]
pub struct PageSlot<C> {
    index: usize,
    content: Option<C>,
}

impl<C> PageSlot<C> {
    fn empty(index: usize) -> Self {
        Self {
            index,
            content: None,
        }
    }

    /// Index assigned at allocation. Never changes for the slot's lifetime.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.content.is_some()
    }
}

/// Ordered page slots plus the current page index.
///
/// Every index-taking method ignores out-of-range indices.
#[derive(Debug)]
pub struct PagingStore<C> {
    slots: Vec<PageSlot<C>>,
    current_page_index: usize,
}

impl<C> Default for PagingStore<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> PagingStore<C> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            current_page_index: 0,
        }
    }

    /// Discards every slot and allocates `count` empty ones.
    ///
    /// The current page index is kept when still valid and otherwise clamped
    /// to the last page, or 0 for an empty store.
    pub fn reset(&mut self, count: usize) {
        self.slots = (0..count).map(PageSlot::empty).collect();
        self.current_page_index = self.current_page_index.min(count.saturating_sub(1));
    }

    pub fn page_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.slots.len()
    }

    pub fn current_page_index(&self) -> usize {
        self.current_page_index
    }

    /// Out-of-range values are ignored.
    pub(crate) fn set_current_page_index(&mut self, index: usize) {
        if self.contains_index(index) {
            self.current_page_index = index;
        }
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(PageSlot::is_loaded)
    }

    pub fn content(&self, index: usize) -> Option<&C> {
        self.slots.get(index).and_then(PageSlot::content)
    }

    /// Stores `content` in the slot, overwriting whatever was there.
    pub fn set_content(&mut self, index: usize, content: C) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.content = Some(content);
        }
    }

    /// Empties the slot and hands back the content it held.
    pub fn clear_content(&mut self, index: usize) -> Option<C> {
        self.slots.get_mut(index).and_then(|slot| slot.content.take())
    }

    pub fn slots(&self) -> &[PageSlot<C>] {
        &self.slots
    }

    /// Loaded indices in ascending order.
    pub fn loaded_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .filter(|slot| slot.is_loaded())
            .map(PageSlot::index)
    }

    pub fn loaded_count(&self) -> usize {
        self.loaded_indices().count()
    }
}
