use crate::view_model::LabelView;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CounterState {
    document_count: usize,
    selection_count: usize,
    label_stale: bool,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> LabelView {
        LabelView {
            document_count: self.document_count,
            selection_count: self.selection_count,
        }
    }

    pub fn document_count(&self) -> usize {
        self.document_count
    }

    pub fn selection_count(&self) -> usize {
        self.selection_count
    }

    pub(crate) fn set_document_count(&mut self, count: usize) {
        if self.document_count != count {
            self.document_count = count;
            self.label_stale = true;
        }
    }

    pub(crate) fn set_selection_count(&mut self, count: usize) {
        if self.selection_count != count {
            self.selection_count = count;
            self.label_stale = true;
        }
    }

    /// True once since either counter last changed; cleared by the call.
    pub(crate) fn take_label_stale(&mut self) -> bool {
        std::mem::take(&mut self.label_stale)
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
