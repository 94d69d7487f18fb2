//! Canned content and menu item providers.

use std::cell::RefCell;
use std::rc::Rc;

use pagemenu_foundation::PageContentProvider;
use pagemenu_ui::{MenuItem, MenuItemProvider};
use pagemenu_ui_graphics::Size;

/// Content handle produced by [`VecContentProvider`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestPage {
    pub index: usize,
    pub title: String,
}

#[derive(Debug, Default)]
struct ProviderState {
    titles: Vec<String>,
    requests: Vec<usize>,
}

/// Content provider backed by a list of page titles.
///
/// Clones share the title list, so a test can change the page count and
/// then reload.
#[derive(Clone, Debug, Default)]
pub struct VecContentProvider {
    state: Rc<RefCell<ProviderState>>,
}

impl VecContentProvider {
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let provider = Self::default();
        provider.set_titles(titles);
        provider
    }

    /// `count` pages titled "Page 0", "Page 1", ...
    pub fn with_page_count(count: usize) -> Self {
        Self::new((0..count).map(|index| format!("Page {index}")))
    }

    pub fn set_titles<I, S>(&self, titles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.borrow_mut().titles = titles.into_iter().map(Into::into).collect();
    }

    /// Indices content was requested for, in order.
    pub fn requests(&self) -> Vec<usize> {
        self.state.borrow().requests.clone()
    }
}

impl PageContentProvider for VecContentProvider {
    type Content = TestPage;

    fn page_count(&self) -> usize {
        self.state.borrow().titles.len()
    }

    fn content(&mut self, index: usize) -> TestPage {
        let mut state = self.state.borrow_mut();
        assert!(
            index < state.titles.len(),
            "content requested for page {index} outside 0..{}",
            state.titles.len()
        );
        state.requests.push(index);
        TestPage {
            index,
            title: state.titles[index].clone(),
        }
    }
}

/// Menu item handle produced by [`FixedMenuItems`].
#[derive(Clone, Debug, PartialEq)]
pub struct TestMenuItem {
    pub index: usize,
    pub size: Size,
}

impl MenuItem for TestMenuItem {
    fn intrinsic_size(&self) -> Size {
        self.size
    }
}

/// Menu item provider with a fixed size per index.
#[derive(Clone, Debug)]
pub struct FixedMenuItems {
    sizes: Vec<Size>,
    fallback: Size,
}

impl FixedMenuItems {
    pub fn new(sizes: Vec<Size>) -> Self {
        let fallback = sizes.last().copied().unwrap_or(Size::ZERO);
        Self { sizes, fallback }
    }

    /// Every item has the same size.
    pub fn uniform(size: Size) -> Self {
        Self {
            sizes: Vec::new(),
            fallback: size,
        }
    }
}

impl MenuItemProvider for FixedMenuItems {
    type Item = TestMenuItem;

    fn menu_item(&mut self, index: usize) -> TestMenuItem {
        TestMenuItem {
            index,
            size: self.sizes.get(index).copied().unwrap_or(self.fallback),
        }
    }
}
