#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A document became the active buffer (opened, or focus switched).
    DocumentActivated,
    /// The user closed every tab; no buffer is active.
    AllDocumentsClosed,
    /// Full text snapshot of the active buffer after an edit.
    ContentChanged { text: String },
    /// Current selection snapshot; `None` when nothing is highlighted.
    SelectionChanged { selection: Option<String> },
    /// Fallback for placeholder wiring.
    NoOp,
}
