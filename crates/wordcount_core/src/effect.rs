#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Re-read the full document text on the next idle slot and recount.
    RecountDocument,
    /// Re-read the current selection on the next idle slot and recount.
    RecountSelection,
    /// Push the formatted counts to the status display on the next idle slot.
    RefreshLabel,
    /// Blank the status display; no document is active.
    ClearLabel,
}
