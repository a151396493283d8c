use crate::suggest::domain::models::{PointerTarget, SearchResponse};

#[derive(Clone, Debug)]
pub enum Message {
    // Focus events
    Focus,
    Blur,
    BlurElapsed,

    // Search events
    QueryChanged(String),
    SearchSettled(String),
    SearchCompleted(SearchResponse),

    // Keyboard events
    Escape,
    CursorDown,
    CursorUp,
    Enter,

    // Pointer events
    PointerCommit {
        index: usize,
        target: PointerTarget,
        stop_at_source: bool,
    },

    // UI events
    SetStatus(String),
    ClearStatus,
}
