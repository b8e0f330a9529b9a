#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelView {
    pub document_count: usize,
    pub selection_count: usize,
}

impl LabelView {
    /// Status bar text, e.g. `total: 3, selection: 1`.
    pub fn label(&self) -> String {
        format!(
            "total: {}, selection: {}",
            self.document_count, self.selection_count
        )
    }
}
