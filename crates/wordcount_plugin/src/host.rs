//! Collaborator seams the host editor implements.
//!
//! The controller only ever talks to the editor through these traits; a host
//! embedding wraps its widget and buffer objects in thin adapters and hands
//! them in at construction. Everything is single-threaded: the host delivers
//! notifications as discrete callbacks on its UI loop.

use std::error::Error;
use std::rc::Rc;

/// Identifier for a connected notification callback, used to disconnect it.
pub type SignalId = u64;

/// Opaque failure surfaced by a host collaborator, e.g. a buffer disposed
/// mid-query. The controller never inspects or retries these; a failed read
/// ends that recount cycle.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct HostError(#[from] Box<dyn Error + Send + Sync>);

pub type HostResult<T> = Result<T, HostError>;

/// The text buffer currently focused in the editor.
pub trait TextDocument {
    /// Full text of the buffer.
    fn full_text(&self) -> HostResult<String>;
    /// Whether a contiguous span is currently highlighted.
    fn has_selection(&self) -> HostResult<bool>;
    /// Text of the highlighted span.
    fn selection_text(&self) -> HostResult<String>;
    /// Register `callback` to fire after every edit to the buffer.
    fn connect_content_changed(&self, callback: Rc<dyn Fn()>) -> SignalId;
    /// Register `callback` to fire on every cursor or selection move.
    fn connect_selection_changed(&self, callback: Rc<dyn Fn()>) -> SignalId;
    /// Release a callback registered through one of the `connect_*` methods.
    fn disconnect(&self, id: SignalId);
}

/// Resolves which buffer is focused right now.
pub trait ActiveDocumentSource {
    /// The active buffer, or `None` when the user closed every tab.
    fn active_document(&self) -> Option<Rc<dyn TextDocument>>;
}

/// The status-bar element that renders the count string.
pub trait StatusDisplay {
    fn set_text(&self, text: &str);
    /// Mount the element; called once on plugin activation.
    fn show(&self);
    /// Unmount the element; called once on plugin deactivation.
    fn remove(&self);
}

/// Host scheduling hook. Recounts run in the next idle slot of the UI loop
/// instead of inside the notification callback, so typing into a large
/// document is not blocked on a full regex scan. Callbacks must run in
/// enqueue order.
pub trait IdleScheduler {
    fn defer_to_idle(&self, callback: Box<dyn FnOnce()>);
}
