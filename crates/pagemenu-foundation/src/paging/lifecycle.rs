//! Page lifecycle state machine.
//!
//! Each slot moves `Unloaded -> Loading -> Loaded -> Unloaded`. Loading is
//! synchronous, so `Loading` only exists between the `WillLoad` and
//! `DidLoad` notifications of a single [`PageLifecycleController::load`]
//! call. The event order around each transition is part of the contract:
//!
//! - load: `WillLoad`, provider call, host attach, store update, `DidLoad`
//! - unload: `WillUnload`, host detach, store clear, `DidUnload`

use pagemenu_ui_graphics::{Rect, Size};
use smallvec::SmallVec;

use super::delegate::{DelegateSlot, LifecycleEvent, PageLifecycleDelegate};
use super::provider::{PageContentProvider, PageHost};
use super::store::PagingStore;
use crate::error::PagingError;
use crate::scroll_position::{is_usable_page_width, page_index_at, ScrollPosition};

/// Frame of page `index` when pages of `page_size` sit side by side.
pub(crate) fn page_frame_for(index: usize, page_size: Size) -> Rect {
    Rect::new(
        page_size.width * index as f32,
        0.0,
        page_size.width,
        page_size.height,
    )
}

/// Loads and unloads page content as the pager scrolls.
///
/// Owns the [`PagingStore`] exclusively: nothing else creates or destroys
/// content handles. All index-taking operations ignore out-of-range
/// indices, since scroll physics routinely produce them at the edges.
pub struct PageLifecycleController<C> {
    store: PagingStore<C>,
    provider: Option<Box<dyn PageContentProvider<Content = C>>>,
    host: Box<dyn PageHost<C>>,
    delegate: DelegateSlot,
}

impl<C: 'static> PageLifecycleController<C> {
    pub fn new(host: impl PageHost<C> + 'static) -> Self {
        Self {
            store: PagingStore::new(),
            provider: None,
            host: Box::new(host),
            delegate: DelegateSlot::new(),
        }
    }

    pub fn with_content_provider(
        mut self,
        provider: impl PageContentProvider<Content = C> + 'static,
    ) -> Self {
        self.set_content_provider(provider);
        self
    }

    pub fn set_content_provider(
        &mut self,
        provider: impl PageContentProvider<Content = C> + 'static,
    ) {
        self.provider = Some(Box::new(provider));
    }

    pub fn clear_content_provider(&mut self) {
        self.provider = None;
    }

    pub fn has_content_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub fn set_delegate(&mut self, delegate: impl PageLifecycleDelegate + 'static) {
        self.delegate.set(Some(Box::new(delegate)));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate.set(None);
    }

    pub fn store(&self) -> &PagingStore<C> {
        &self.store
    }

    pub fn page_count(&self) -> usize {
        self.store.page_count()
    }

    pub fn current_page_index(&self) -> usize {
        self.store.current_page_index()
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.store.is_loaded(index)
    }

    pub fn content(&self, index: usize) -> Option<&C> {
        self.store.content(index)
    }

    /// Frame of page `index` in the host's scrollable content.
    pub fn page_frame(&self, index: usize) -> Rect {
        page_frame_for(index, self.host.viewport_size())
    }

    /// Loads page `index` unless it is out of range or already loaded.
    ///
    /// Fails with [`PagingError::MissingContentProvider`] when content is
    /// needed but no provider is set. Nothing is emitted in that case.
    pub fn load(&mut self, index: usize) -> Result<(), PagingError> {
        if !self.store.contains_index(index) || self.store.is_loaded(index) {
            return Ok(());
        }
        let Some(provider) = self.provider.as_mut() else {
            log::error!("cannot load page {index}: no content provider set");
            return Err(PagingError::MissingContentProvider);
        };

        self.delegate.dispatch(LifecycleEvent::WillLoad(index));

        let content = provider.content(index);
        let frame = page_frame_for(index, self.host.viewport_size());
        self.host.attach_content(index, &content, frame);
        self.store.set_content(index, content);

        log::debug!("loaded page {index}");
        self.delegate.dispatch(LifecycleEvent::DidLoad(index));
        Ok(())
    }

    /// Unloads page `index` unless it is out of range or not loaded.
    pub fn unload(&mut self, index: usize) {
        if !self.store.is_loaded(index) {
            return;
        }

        self.delegate.dispatch(LifecycleEvent::WillUnload(index));

        if let Some(content) = self.store.content(index) {
            self.host.detach_content(index, content);
        }
        self.store.clear_content(index);

        log::debug!("unloaded page {index}");
        self.delegate.dispatch(LifecycleEvent::DidUnload(index));
    }

    /// Unloads every loaded page in ascending index order.
    pub fn unload_all(&mut self) {
        let loaded: SmallVec<[usize; 4]> = self.store.loaded_indices().collect();
        for index in loaded {
            self.unload(index);
        }
    }

    /// Unloads every loaded page other than `keep`, in ascending order.
    pub fn unload_all_except(&mut self, keep: usize) {
        let loaded: SmallVec<[usize; 4]> = self
            .store
            .loaded_indices()
            .filter(|&index| index != keep)
            .collect();
        for index in loaded {
            self.unload(index);
        }
    }

    /// Rebuilds the store from the provider.
    ///
    /// Unloads everything, resets the store to the provider's page count,
    /// then loads the current page (clamped to the new count) and announces
    /// it with `DidMoveToPage` even if the index did not change.
    pub fn reload_data(&mut self) -> Result<(), PagingError> {
        self.unload_all();

        let Some(provider) = self.provider.as_ref() else {
            log::error!("cannot reload pages: no content provider set");
            return Err(PagingError::MissingContentProvider);
        };
        let count = provider.page_count();
        self.store.reset(count);
        self.publish_content_size();
        log::debug!("reloaded pager with {count} pages");

        if count == 0 {
            return Ok(());
        }

        let index = self.store.current_page_index();
        self.load(index)?;
        self.delegate.dispatch(LifecycleEvent::DidMoveToPage(index));
        Ok(())
    }

    /// Asks the host to scroll to page `index`.
    ///
    /// The current page only changes once the host reports the scroll has
    /// settled via [`Self::on_scroll_settled`].
    pub fn request_show_page(&mut self, index: usize, animated: bool) {
        if !self.store.contains_index(index) {
            return;
        }
        let offset = self.host.viewport_size().width * index as f32;
        self.host.set_content_offset(offset, animated);
    }

    pub fn show_next_page(&mut self, animated: bool) {
        self.request_show_page(self.current_page_index() + 1, animated);
    }

    pub fn show_previous_page(&mut self, animated: bool) {
        if let Some(index) = self.current_page_index().checked_sub(1) {
            self.request_show_page(index, animated);
        }
    }

    /// Makes sure the one or two pages visible at `offset` are loaded, then
    /// reports the scroll with `DidScroll`.
    ///
    /// `DidScroll` is sent even when a load fails; the load error is
    /// returned afterwards. Already loaded pages stay loaded; unloading is
    /// left to the host (for instance through [`Self::on_low_memory`]).
    pub fn on_scroll_tick(&mut self, offset: f32, viewport_width: f32) -> Result<(), PagingError> {
        let loaded = self.load_visible(offset, viewport_width);
        self.notify_scrolled();
        loaded
    }

    /// Loads the pages visible at `offset` without reporting the scroll.
    ///
    /// Callers that need to update their own state between the loads and
    /// the delegate's `on_scroll` pair this with [`Self::notify_scrolled`].
    pub fn load_visible(&mut self, offset: f32, viewport_width: f32) -> Result<(), PagingError> {
        log::trace!("scroll tick offset={offset} viewport_width={viewport_width}");
        if !is_usable_page_width(viewport_width) {
            log::warn!("ignoring scroll tick with unusable viewport width {viewport_width}");
            return Ok(());
        }
        let Some(position) = ScrollPosition::resolve(offset, viewport_width, self.page_count())
        else {
            return Ok(());
        };
        self.load(position.left_index)?;
        self.load(position.right_index)
    }

    pub fn notify_scrolled(&mut self) {
        self.delegate.dispatch(LifecycleEvent::DidScroll);
    }

    /// Records the page the scroll came to rest on.
    ///
    /// Edge-triggered: `DidMoveToPage` only fires when the index changes.
    pub fn on_scroll_settled(&mut self, offset: f32, viewport_width: f32) {
        let Some(index) = page_index_at(offset, viewport_width) else {
            return;
        };
        if !self.store.contains_index(index) || index == self.store.current_page_index() {
            return;
        }

        self.store.set_current_page_index(index);
        log::debug!("moved to page {index}");
        self.delegate.dispatch(LifecycleEvent::DidMoveToPage(index));
    }

    /// Drops every page but the current one.
    pub fn on_low_memory(&mut self) {
        let current = self.store.current_page_index();
        log::debug!("low memory: keeping only page {current}");
        self.unload_all_except(current);
    }

    /// Pushes the content size and re-frames every loaded page.
    ///
    /// Call after the host viewport has been resized.
    pub fn layout_pages(&mut self) {
        self.publish_content_size();
        let page_size = self.host.viewport_size();
        for slot in self.store.slots() {
            if let Some(content) = slot.content() {
                let frame = page_frame_for(slot.index(), page_size);
                self.host.update_frame(slot.index(), content, frame);
            }
        }
    }

    fn publish_content_size(&mut self) {
        let page_size = self.host.viewport_size();
        let size = Size::new(
            page_size.width * self.store.page_count() as f32,
            page_size.height,
        );
        self.host.set_content_size(size);
    }
}

impl<C> std::fmt::Debug for PageLifecycleController<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageLifecycleController")
            .field("page_count", &self.store.page_count())
            .field("current_page_index", &self.store.current_page_index())
            .field("has_provider", &self.provider.is_some())
            .field("delegate", &self.delegate)
            .finish()
    }
}
