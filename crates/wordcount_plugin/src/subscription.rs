use std::rc::Rc;

use crate::host::{SignalId, TextDocument};

/// Listener registrations on the active document.
///
/// At most one of these exists at a time. Dropping the value disconnects
/// both signals, so replacing it on a document switch can never leak a
/// listener on the old buffer.
pub(crate) struct Subscription {
    document: Rc<dyn TextDocument>,
    signal_ids: [SignalId; 2],
}

impl Subscription {
    pub(crate) fn attach(
        document: Rc<dyn TextDocument>,
        on_content_changed: Rc<dyn Fn()>,
        on_selection_changed: Rc<dyn Fn()>,
    ) -> Self {
        let content_id = document.connect_content_changed(on_content_changed);
        let selection_id = document.connect_selection_changed(on_selection_changed);
        Self {
            document,
            signal_ids: [content_id, selection_id],
        }
    }

    pub(crate) fn document(&self) -> &Rc<dyn TextDocument> {
        &self.document
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        for id in self.signal_ids {
            self.document.disconnect(id);
        }
    }
}
