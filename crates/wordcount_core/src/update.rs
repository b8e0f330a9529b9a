use crate::{count_words, CounterState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: CounterState, msg: Msg) -> (CounterState, Vec<Effect>) {
    let effects = match msg {
        Msg::DocumentActivated => {
            // Counts keep their previous values until the recount lands;
            // the recount flows through the selection step, so a stale
            // label is refreshed on the way out.
            vec![Effect::RecountDocument]
        }
        Msg::AllDocumentsClosed => {
            state.reset();
            vec![Effect::ClearLabel]
        }
        Msg::ContentChanged { text } => {
            state.set_document_count(count_words(&text));
            // Selection bounds may have moved with the edit; always re-derive.
            vec![Effect::RecountSelection]
        }
        Msg::SelectionChanged { selection } => {
            let count = selection.as_deref().map(count_words).unwrap_or(0);
            state.set_selection_count(count);
            if state.take_label_stale() {
                vec![Effect::RefreshLabel]
            } else {
                Vec::new()
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
