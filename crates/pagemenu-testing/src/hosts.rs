//! Recording page and menu hosts.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use pagemenu_foundation::PageHost;
use pagemenu_ui::MenuHost;
use pagemenu_ui_graphics::{Rect, Size};

/// A call made on a [`RecordingPageHost`].
#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    Attach { index: usize, frame: Rect },
    Detach { index: usize },
    UpdateFrame { index: usize, frame: Rect },
    SetContentOffset { offset: f32, animated: bool },
    SetContentSize(Size),
}

#[derive(Debug, Default)]
struct PageHostState {
    viewport_size: Size,
    attached: BTreeMap<usize, Rect>,
    calls: Vec<HostCall>,
    content_offset: f32,
    content_size: Size,
}

/// Page host that keeps a log of every call and the resulting view state.
#[derive(Clone, Debug, Default)]
pub struct RecordingPageHost {
    state: Rc<RefCell<PageHostState>>,
}

impl RecordingPageHost {
    pub fn new(viewport_size: Size) -> Self {
        let host = Self::default();
        host.state.borrow_mut().viewport_size = viewport_size;
        host
    }

    pub fn set_viewport_size(&self, size: Size) {
        self.state.borrow_mut().viewport_size = size;
    }

    pub fn calls(&self) -> Vec<HostCall> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Indices currently attached to the view hierarchy, ascending.
    pub fn attached_indices(&self) -> Vec<usize> {
        self.state.borrow().attached.keys().copied().collect()
    }

    pub fn attached_frame(&self, index: usize) -> Option<Rect> {
        self.state.borrow().attached.get(&index).copied()
    }

    pub fn content_offset(&self) -> f32 {
        self.state.borrow().content_offset
    }

    pub fn content_size(&self) -> Size {
        self.state.borrow().content_size
    }

    /// Offset requests in order, as `(offset, animated)`.
    pub fn offset_requests(&self) -> Vec<(f32, bool)> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter_map(|call| match call {
                HostCall::SetContentOffset { offset, animated } => Some((*offset, *animated)),
                _ => None,
            })
            .collect()
    }
}

impl<C> PageHost<C> for RecordingPageHost {
    fn viewport_size(&self) -> Size {
        self.state.borrow().viewport_size
    }

    fn attach_content(&mut self, index: usize, _content: &C, frame: Rect) {
        let mut state = self.state.borrow_mut();
        let previous = state.attached.insert(index, frame);
        assert!(previous.is_none(), "page {index} attached twice");
        state.calls.push(HostCall::Attach { index, frame });
    }

    fn detach_content(&mut self, index: usize, _content: &C) {
        let mut state = self.state.borrow_mut();
        let previous = state.attached.remove(&index);
        assert!(previous.is_some(), "page {index} detached while not attached");
        state.calls.push(HostCall::Detach { index });
    }

    fn set_content_offset(&mut self, offset: f32, animated: bool) {
        let mut state = self.state.borrow_mut();
        state.content_offset = offset;
        state
            .calls
            .push(HostCall::SetContentOffset { offset, animated });
    }

    fn set_content_size(&mut self, size: Size) {
        let mut state = self.state.borrow_mut();
        state.content_size = size;
        state.calls.push(HostCall::SetContentSize(size));
    }

    fn update_frame(&mut self, index: usize, _content: &C, frame: Rect) {
        let mut state = self.state.borrow_mut();
        state.attached.insert(index, frame);
        state.calls.push(HostCall::UpdateFrame { index, frame });
    }
}

/// A call made on a [`RecordingMenuHost`].
#[derive(Clone, Debug, PartialEq)]
pub enum MenuHostCall {
    AttachItem { index: usize, frame: Rect },
    DetachItem { index: usize },
    SetContentSize(Size),
    SetContentOffset { offset: f32, animated: bool },
}

#[derive(Debug, Default)]
struct MenuHostState {
    viewport_width: f32,
    attached: BTreeMap<usize, Rect>,
    calls: Vec<MenuHostCall>,
    content_offset: f32,
    content_size: Size,
}

/// Menu strip host that keeps a log of every call.
#[derive(Clone, Debug, Default)]
pub struct RecordingMenuHost {
    state: Rc<RefCell<MenuHostState>>,
}

impl RecordingMenuHost {
    pub fn new(viewport_width: f32) -> Self {
        let host = Self::default();
        host.state.borrow_mut().viewport_width = viewport_width;
        host
    }

    pub fn calls(&self) -> Vec<MenuHostCall> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub fn attached_frames(&self) -> Vec<Rect> {
        self.state.borrow().attached.values().copied().collect()
    }

    pub fn content_offset(&self) -> f32 {
        self.state.borrow().content_offset
    }

    pub fn content_size(&self) -> Size {
        self.state.borrow().content_size
    }

    /// Offset requests in order, as `(offset, animated)`.
    pub fn offset_requests(&self) -> Vec<(f32, bool)> {
        self.state
            .borrow()
            .calls
            .iter()
            .filter_map(|call| match call {
                MenuHostCall::SetContentOffset { offset, animated } => Some((*offset, *animated)),
                _ => None,
            })
            .collect()
    }
}

impl<M> MenuHost<M> for RecordingMenuHost {
    fn viewport_width(&self) -> f32 {
        self.state.borrow().viewport_width
    }

    fn attach_item(&mut self, index: usize, _item: &M, frame: Rect) {
        let mut state = self.state.borrow_mut();
        state.attached.insert(index, frame);
        state.calls.push(MenuHostCall::AttachItem { index, frame });
    }

    fn detach_item(&mut self, index: usize, _item: &M) {
        let mut state = self.state.borrow_mut();
        state.attached.remove(&index);
        state.calls.push(MenuHostCall::DetachItem { index });
    }

    fn set_content_size(&mut self, size: Size) {
        let mut state = self.state.borrow_mut();
        state.content_size = size;
        state.calls.push(MenuHostCall::SetContentSize(size));
    }

    fn set_content_offset(&mut self, offset: f32, animated: bool) {
        let mut state = self.state.borrow_mut();
        state.content_offset = offset;
        state
            .calls
            .push(MenuHostCall::SetContentOffset { offset, animated });
    }
}
