//! Pages plus a synchronized menu strip.
//!
//! The controller owns both halves directly. Page lifecycle notifications
//! go straight to the delegate installed with
//! [`MenuController::set_delegate`]; the controller only adds menu
//! behaviour around the page calls.

use pagemenu_foundation::{
    MenuLayout, MenuSyncEngine, PageLifecycleController, PageLifecycleDelegate, PagingError,
};

use crate::config::MenuConfig;
use crate::menu_item::{MenuHost, MenuItem, MenuItemProvider};

pub struct MenuController<C, M: MenuItem> {
    pages: PageLifecycleController<C>,
    sync: MenuSyncEngine,
    items: Vec<M>,
    item_provider: Option<Box<dyn MenuItemProvider<Item = M>>>,
    menu_host: Box<dyn MenuHost<M>>,
    config: MenuConfig,
}

impl<C: 'static, M: MenuItem + 'static> MenuController<C, M> {
    pub fn new(pages: PageLifecycleController<C>, menu_host: impl MenuHost<M> + 'static) -> Self {
        Self {
            pages,
            sync: MenuSyncEngine::default(),
            items: Vec::new(),
            item_provider: None,
            menu_host: Box::new(menu_host),
            config: MenuConfig::default(),
        }
    }

    pub fn with_config(mut self, config: MenuConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_item_provider(
        mut self,
        provider: impl MenuItemProvider<Item = M> + 'static,
    ) -> Self {
        self.set_item_provider(provider);
        self
    }

    /// Takes effect on the next [`Self::reload_data`].
    pub fn set_item_provider(&mut self, provider: impl MenuItemProvider<Item = M> + 'static) {
        self.item_provider = Some(Box::new(provider));
    }

    pub fn set_delegate(&mut self, delegate: impl PageLifecycleDelegate + 'static) {
        self.pages.set_delegate(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.pages.clear_delegate();
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut MenuConfig {
        &mut self.config
    }

    pub fn pages(&self) -> &PageLifecycleController<C> {
        &self.pages
    }

    pub fn sync_engine(&self) -> &MenuSyncEngine {
        &self.sync
    }

    pub fn menu_items(&self) -> &[M] {
        &self.items
    }

    pub fn page_count(&self) -> usize {
        self.pages.page_count()
    }

    pub fn current_page_index(&self) -> usize {
        self.pages.current_page_index()
    }

    pub fn is_page_loaded(&self, index: usize) -> bool {
        self.pages.is_loaded(index)
    }

    pub fn load_page(&mut self, index: usize) -> Result<(), PagingError> {
        self.pages.load(index)
    }

    pub fn unload_page(&mut self, index: usize) {
        self.pages.unload(index);
    }

    pub fn unload_all_pages(&mut self) {
        self.pages.unload_all();
    }

    pub fn unload_all_pages_except(&mut self, index: usize) {
        self.pages.unload_all_except(index);
    }

    pub fn on_low_memory(&mut self) {
        self.pages.on_low_memory();
    }

    pub fn layout_pages(&mut self) {
        self.pages.layout_pages();
    }

    /// Reloads the pages, then rebuilds the menu strip from the item
    /// provider and centers the current page's item.
    ///
    /// Without an item provider the strip is simply left empty.
    pub fn reload_data(&mut self) -> Result<(), PagingError> {
        self.remove_menu_items();
        self.pages.reload_data()?;

        let count = self.pages.page_count();
        let Some(provider) = self.item_provider.as_mut() else {
            return Ok(());
        };
        if count == 0 {
            return Ok(());
        }

        self.items = (0..count).map(|index| provider.menu_item(index)).collect();
        let layout = MenuLayout::from_item_sizes(self.items.iter().map(MenuItem::intrinsic_size));
        for (index, (item, frame)) in self.items.iter().zip(layout.item_rects()).enumerate() {
            self.menu_host.attach_item(index, item, *frame);
        }
        self.menu_host.set_content_size(layout.content_size());
        self.sync.set_layout(layout);
        log::debug!("laid out {count} menu items");

        let offset = self.centered_menu_offset(self.pages.current_page_index());
        self.apply_menu_offset(offset, false);
        Ok(())
    }

    /// Loads the visible pages and, during a drag, moves the menu to the
    /// interpolated offset between the two visible pages' items.
    ///
    /// The delegate's `on_scroll` runs last, so it already sees the new
    /// menu offset. A failed page load is returned after the menu moved and
    /// the scroll was reported.
    pub fn on_page_scroll(
        &mut self,
        offset: f32,
        viewport_width: f32,
        dragging: bool,
    ) -> Result<(), PagingError> {
        let loaded = self.pages.load_visible(offset, viewport_width);

        if dragging || !self.config.sync_menu_while_dragging_only {
            let menu_offset = self.sync.offset_for_page_scroll(
                offset,
                viewport_width,
                self.menu_host.viewport_width(),
            );
            if let Some(menu_offset) = menu_offset {
                self.apply_menu_offset(menu_offset, false);
            }
        }

        self.pages.notify_scrolled();
        loaded
    }

    pub fn on_page_settled(&mut self, offset: f32, viewport_width: f32) {
        self.pages.on_scroll_settled(offset, viewport_width);

        if self.config.snap_menu_on_settle && !self.items.is_empty() {
            let offset = self.centered_menu_offset(self.pages.current_page_index());
            self.apply_menu_offset(offset, false);
        }
    }

    /// Centers the menu on `index` and asks the pager to scroll there.
    pub fn show_page(&mut self, index: usize, animate_menu: bool, animate_page: bool) {
        if index >= self.pages.page_count() {
            return;
        }
        if !self.items.is_empty() {
            let offset = self.centered_menu_offset(index);
            self.apply_menu_offset(offset, animate_menu);
        }
        self.pages.request_show_page(index, animate_page);
    }

    pub fn show_next_page(&mut self, animated: bool) {
        self.show_page(self.current_page_index() + 1, animated, animated);
    }

    pub fn show_previous_page(&mut self, animated: bool) {
        if let Some(index) = self.current_page_index().checked_sub(1) {
            self.show_page(index, animated, animated);
        }
    }

    pub fn on_menu_item_tapped(&mut self, index: usize) {
        log::debug!("menu item {index} tapped");
        self.show_page(
            index,
            self.config.animate_menu_on_tap,
            self.config.animate_page_on_tap,
        );
    }

    /// Resolves a tap at strip-space `x` to an item and navigates to it.
    pub fn on_menu_tap_at(&mut self, x: f32) -> Option<usize> {
        let index = self.sync.layout().item_index_at(x)?;
        self.on_menu_item_tapped(index);
        Some(index)
    }

    fn centered_menu_offset(&self, index: usize) -> f32 {
        self.sync
            .centered_offset(index, self.menu_host.viewport_width())
    }

    fn apply_menu_offset(&mut self, offset: f32, animated: bool) {
        log::trace!("menu offset {offset} animated={animated}");
        self.menu_host.set_content_offset(offset, animated);
    }

    fn remove_menu_items(&mut self) {
        for (index, item) in self.items.iter().enumerate() {
            self.menu_host.detach_item(index, item);
        }
        self.items.clear();
        self.sync.clear();
    }
}

impl<C, M: MenuItem> std::fmt::Debug for MenuController<C, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuController")
            .field("pages", &self.pages)
            .field("menu_items", &self.items.len())
            .field("config", &self.config)
            .finish()
    }
}
