use std::cell::RefCell;
use std::rc::Rc;

use plugin_logging::{plugin_debug, plugin_trace, plugin_warn};
use wordcount_core::{update, CounterState, Effect, LabelView, Msg};

use crate::host::{ActiveDocumentSource, HostResult, IdleScheduler, StatusDisplay, TextDocument};
use crate::subscription::Subscription;

/// Keeps the status-bar word count in sync with the active document.
///
/// One controller serves one status display. The host adapter forwards the
/// lifecycle calls (`activate`, `update_state`, `deactivate`); everything
/// else is driven by the document notifications the controller subscribes
/// itself to.
pub struct WordCountController {
    inner: Rc<RefCell<Inner>>,
}

struct Inner {
    state: CounterState,
    subscription: Option<Subscription>,
    // Bumped on every document switch, close and deactivation. Deferred
    // callbacks carry the value from enqueue time and no-op on mismatch.
    generation: u64,
    source: Rc<dyn ActiveDocumentSource>,
    display: Rc<dyn StatusDisplay>,
    scheduler: Rc<dyn IdleScheduler>,
}

impl WordCountController {
    pub fn new(
        source: Rc<dyn ActiveDocumentSource>,
        display: Rc<dyn StatusDisplay>,
        scheduler: Rc<dyn IdleScheduler>,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: CounterState::new(),
                subscription: None,
                generation: 0,
                source,
                display,
                scheduler,
            })),
        }
    }

    /// Mount the status display. The host calls this once on plugin
    /// activation, followed by an initial `update_state`.
    pub fn activate(&self) {
        let display = self.inner.borrow().display.clone();
        display.show();
        plugin_debug!("word count display mounted");
    }

    /// Release the document listeners and unmount the display.
    pub fn deactivate(&self) {
        let display = {
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            inner.subscription = None;
            inner.display.clone()
        };
        display.remove();
        plugin_debug!("word count display unmounted");
    }

    /// Re-resolve the active document. The host calls this whenever the
    /// focused buffer may have changed (tab switch, open, close).
    pub fn update_state(&self) {
        let source = {
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            // Dropping the old subscription disconnects its listeners
            // before any new ones attach.
            inner.subscription = None;
            inner.source.clone()
        };

        match source.active_document() {
            Some(document) => {
                self.attach(document);
                dispatch(&self.inner, Msg::DocumentActivated);
            }
            None => {
                plugin_debug!("no active document");
                dispatch(&self.inner, Msg::AllDocumentsClosed);
            }
        }
    }

    /// Current counts, as shown (or about to be shown) in the label.
    pub fn view(&self) -> LabelView {
        self.inner.borrow().state.view()
    }

    fn attach(&self, document: Rc<dyn TextDocument>) {
        let on_content_changed: Rc<dyn Fn()> = {
            let weak = Rc::downgrade(&self.inner);
            Rc::new(move || {
                if let Some(inner) = weak.upgrade() {
                    run_effect(&inner, Effect::RecountDocument);
                }
            })
        };
        let on_selection_changed: Rc<dyn Fn()> = {
            let weak = Rc::downgrade(&self.inner);
            Rc::new(move || {
                if let Some(inner) = weak.upgrade() {
                    run_effect(&inner, Effect::RecountSelection);
                }
            })
        };

        let subscription = Subscription::attach(document, on_content_changed, on_selection_changed);
        self.inner.borrow_mut().subscription = Some(subscription);
        plugin_debug!("subscribed to active document");
    }
}

fn dispatch(inner_rc: &Rc<RefCell<Inner>>, msg: Msg) {
    let effects = {
        let mut inner = inner_rc.borrow_mut();
        let state = std::mem::take(&mut inner.state);
        let (state, effects) = update(state, msg);
        inner.state = state;
        effects
    };
    for effect in effects {
        run_effect(inner_rc, effect);
    }
}

fn run_effect(inner_rc: &Rc<RefCell<Inner>>, effect: Effect) {
    match effect {
        Effect::RecountDocument => defer(inner_rc, |inner_rc| {
            let Some(document) = subscribed_document(inner_rc) else {
                return;
            };
            match document.full_text() {
                Ok(text) => dispatch(inner_rc, Msg::ContentChanged { text }),
                Err(err) => plugin_warn!("document text unavailable: {}", err),
            }
        }),
        Effect::RecountSelection => defer(inner_rc, |inner_rc| {
            let Some(document) = subscribed_document(inner_rc) else {
                return;
            };
            match read_selection(document.as_ref()) {
                Ok(selection) => dispatch(inner_rc, Msg::SelectionChanged { selection }),
                Err(err) => plugin_warn!("selection unavailable: {}", err),
            }
        }),
        Effect::RefreshLabel => defer(inner_rc, |inner_rc| {
            let (display, label) = {
                let inner = inner_rc.borrow();
                (inner.display.clone(), inner.state.view().label())
            };
            plugin_trace!("label refresh: {}", label);
            display.set_text(&label);
        }),
        Effect::ClearLabel => {
            let display = inner_rc.borrow().display.clone();
            display.set_text("");
        }
    }
}

fn subscribed_document(inner_rc: &Rc<RefCell<Inner>>) -> Option<Rc<dyn TextDocument>> {
    inner_rc
        .borrow()
        .subscription
        .as_ref()
        .map(|subscription| subscription.document().clone())
}

fn read_selection(document: &dyn TextDocument) -> HostResult<Option<String>> {
    if document.has_selection()? {
        Ok(Some(document.selection_text()?))
    } else {
        Ok(None)
    }
}

/// Run `job` at the host's next idle slot, unless the active document has
/// changed (or the controller is gone) by the time it fires.
fn defer<F>(inner_rc: &Rc<RefCell<Inner>>, job: F)
where
    F: FnOnce(&Rc<RefCell<Inner>>) + 'static,
{
    let (scheduler, generation) = {
        let inner = inner_rc.borrow();
        (inner.scheduler.clone(), inner.generation)
    };
    let weak = Rc::downgrade(inner_rc);
    scheduler.defer_to_idle(Box::new(move || {
        let Some(inner_rc) = weak.upgrade() else {
            return;
        };
        if inner_rc.borrow().generation != generation {
            plugin_trace!("dropping stale deferred recount");
            return;
        }
        job(&inner_rc);
    }));
}
