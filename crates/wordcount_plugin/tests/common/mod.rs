//! In-memory host fakes shared by the controller tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::error::Error;
use std::rc::Rc;

use wordcount_plugin::{
    ActiveDocumentSource, HostResult, IdleScheduler, SignalId, StatusDisplay, TextDocument,
};

type ListenerList = RefCell<Vec<(SignalId, Rc<dyn Fn()>)>>;

/// Scriptable text buffer. `edit` and `select` mutate the fake and fire the
/// matching listeners, the way a real buffer emits its signals.
#[derive(Default)]
pub struct FakeDocument {
    text: RefCell<String>,
    selection: RefCell<Option<String>>,
    fail_next_read: Cell<bool>,
    next_signal_id: Cell<SignalId>,
    content_listeners: ListenerList,
    selection_listeners: ListenerList,
}

impl FakeDocument {
    pub fn new(text: &str) -> Rc<Self> {
        let document = Rc::new(Self::default());
        *document.text.borrow_mut() = text.to_string();
        document
    }

    /// Replace the buffer text and fire the content-changed listeners.
    pub fn edit(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
        self.fire(&self.content_listeners);
    }

    /// Change the highlighted span and fire the selection-changed listeners.
    pub fn select(&self, selection: Option<&str>) {
        *self.selection.borrow_mut() = selection.map(ToOwned::to_owned);
        self.fire(&self.selection_listeners);
    }

    /// Make the next host read fail, as if the buffer was disposed mid-query.
    pub fn fail_next_read(&self) {
        self.fail_next_read.set(true);
    }

    pub fn listener_count(&self) -> usize {
        self.content_listeners.borrow().len() + self.selection_listeners.borrow().len()
    }

    fn fire(&self, listeners: &ListenerList) {
        let callbacks: Vec<_> = listeners
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in callbacks {
            callback();
        }
    }

    fn register(&self, listeners: &ListenerList, callback: Rc<dyn Fn()>) -> SignalId {
        let id = self.next_signal_id.get();
        self.next_signal_id.set(id + 1);
        listeners.borrow_mut().push((id, callback));
        id
    }

    fn read_guard(&self) -> HostResult<()> {
        if self.fail_next_read.take() {
            return Err(Box::<dyn Error + Send + Sync>::from("buffer disposed").into());
        }
        Ok(())
    }
}

impl TextDocument for FakeDocument {
    fn full_text(&self) -> HostResult<String> {
        self.read_guard()?;
        Ok(self.text.borrow().clone())
    }

    fn has_selection(&self) -> HostResult<bool> {
        self.read_guard()?;
        Ok(self.selection.borrow().is_some())
    }

    fn selection_text(&self) -> HostResult<String> {
        self.read_guard()?;
        Ok(self.selection.borrow().clone().unwrap_or_default())
    }

    fn connect_content_changed(&self, callback: Rc<dyn Fn()>) -> SignalId {
        self.register(&self.content_listeners, callback)
    }

    fn connect_selection_changed(&self, callback: Rc<dyn Fn()>) -> SignalId {
        self.register(&self.selection_listeners, callback)
    }

    fn disconnect(&self, id: SignalId) {
        let drop_id = |listeners: &ListenerList| {
            listeners
                .borrow_mut()
                .retain(|(signal_id, _)| *signal_id != id);
        };
        drop_id(&self.content_listeners);
        drop_id(&self.selection_listeners);
    }
}

/// Switchable focus: tests point it at a document (or nothing) before
/// calling `update_state`.
#[derive(Default)]
pub struct FakeSource {
    document: RefCell<Option<Rc<FakeDocument>>>,
}

impl FakeSource {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn focus(&self, document: Option<&Rc<FakeDocument>>) {
        *self.document.borrow_mut() = document.cloned();
    }
}

impl ActiveDocumentSource for FakeSource {
    fn active_document(&self) -> Option<Rc<dyn TextDocument>> {
        self.document
            .borrow()
            .clone()
            .map(|document| document as Rc<dyn TextDocument>)
    }
}

/// Records every label write so tests can assert on write counts.
#[derive(Default)]
pub struct RecordingDisplay {
    texts: RefCell<Vec<String>>,
    visible: Cell<bool>,
}

impl RecordingDisplay {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn last_text(&self) -> Option<String> {
        self.texts.borrow().last().cloned()
    }

    pub fn write_count(&self) -> usize {
        self.texts.borrow().len()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

impl StatusDisplay for RecordingDisplay {
    fn set_text(&self, text: &str) {
        self.texts.borrow_mut().push(text.to_string());
    }

    fn show(&self) {
        self.visible.set(true);
    }

    fn remove(&self) {
        self.visible.set(false);
    }
}

/// Runs every deferred callback synchronously, inside `defer_to_idle`.
#[derive(Default)]
pub struct ImmediateScheduler;

impl ImmediateScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self)
    }
}

impl IdleScheduler for ImmediateScheduler {
    fn defer_to_idle(&self, callback: Box<dyn FnOnce()>) {
        callback();
    }
}

/// Queues deferred callbacks until the test drains them, FIFO.
#[derive(Default)]
pub struct QueueScheduler {
    queue: RefCell<VecDeque<Box<dyn FnOnce()>>>,
}

impl QueueScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run queued callbacks in enqueue order, including any they enqueue.
    pub fn run_until_idle(&self) {
        loop {
            let next = self.queue.borrow_mut().pop_front();
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
    }
}

impl IdleScheduler for QueueScheduler {
    fn defer_to_idle(&self, callback: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push_back(callback);
    }
}
