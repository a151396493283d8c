use crate::suggest::application::commit::{self, CommitAction, CommitContext};
use crate::suggest::application::session_guard::SessionGuard;
use crate::suggest::constants::MIN_QUERY_CHARS;
use crate::suggest::domain::models::{Phase, ResultItem, SearchRequest};
use crate::suggest::ui::commands::Command;
use crate::suggest::ui::events::Message;
use tracing::{debug, info};

pub struct AppState {
    pub search: SuggestionState,
    pub ui: UiState,
    guard: SessionGuard,
    close_pending: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SuggestionState {
    pub query: String,
    pub items: Vec<ResultItem>,
    pub open: bool,
    pub loading: bool,
    /// Highlighted item; `None` when nothing is highlighted
    pub cursor: Option<usize>,
}

impl SuggestionState {
    pub fn phase(&self) -> Phase {
        if !self.open {
            Phase::Closed
        } else if self.loading {
            Phase::Loading
        } else if self.items.is_empty() {
            Phase::Empty
        } else {
            Phase::Results
        }
    }

    pub fn selected(&self) -> Option<&ResultItem> {
        self.cursor.and_then(|index| self.items.get(index))
    }

    fn clear_results(&mut self) {
        self.items.clear();
        self.loading = false;
        self.cursor = None;
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a trimmed query is long enough to be sent to the sources.
pub fn is_searchable(trimmed: &str) -> bool {
    trimmed.chars().count() >= MIN_QUERY_CHARS
}

impl AppState {
    pub fn new() -> Self {
        Self {
            search: SuggestionState::default(),
            ui: UiState::default(),
            guard: SessionGuard::new(),
            close_pending: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.search.phase()
    }

    pub fn is_close_pending(&self) -> bool {
        self.close_pending
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::Focus => {
                self.search.open = true;
                self.close_pending = false;
                Command::None
            }
            Message::Blur => {
                self.close_pending = true;
                Command::ScheduleClose
            }
            Message::BlurElapsed => {
                if self.close_pending {
                    self.close();
                }
                Command::None
            }
            Message::QueryChanged(q) => {
                if !is_searchable(q.trim()) {
                    // Orphan whatever is in flight so it cannot refill the list
                    self.search.clear_results();
                    self.guard.supersede();
                }
                self.search.query = q.clone();
                Command::ScheduleSearch(q)
            }
            Message::SearchSettled(q) => {
                let q = q.trim();
                if q != self.search.query.trim() {
                    debug!(settled = q, "ignoring settle for outdated input");
                    return Command::None;
                }
                if !is_searchable(q) {
                    self.search.clear_results();
                    return Command::None;
                }

                let session = self.guard.begin_session();
                info!(%session, query = q, "search session started");
                self.search.loading = true;
                self.search.open = true;
                Command::ExecuteSearch(SearchRequest {
                    session,
                    query: q.to_string(),
                })
            }
            Message::SearchCompleted(response) => {
                if !self.guard.is_current(response.session) {
                    debug!(session = %response.session, query = %response.query, "discarding stale results");
                    return Command::None;
                }
                debug!(session = %response.session, items = response.items.len(), "results accepted");
                self.search.items = response.items;
                self.search.loading = false;
                self.search.cursor = None;
                Command::None
            }
            Message::Escape => {
                self.close();
                Command::None
            }
            Message::CursorDown => {
                if self.phase() == Phase::Results {
                    let last = self.search.items.len() - 1;
                    self.search.cursor = Some(match self.search.cursor {
                        None => 0,
                        Some(i) => (i + 1).min(last),
                    });
                }
                Command::None
            }
            Message::CursorUp => {
                if self.phase() == Phase::Results {
                    self.search.cursor = Some(match self.search.cursor {
                        None => 0,
                        Some(i) => i.saturating_sub(1),
                    });
                }
                Command::None
            }
            Message::Enter => self.commit(CommitAction::Enter),
            Message::PointerCommit {
                index,
                target,
                stop_at_source,
            } => self.commit(CommitAction::Pointer {
                index,
                target,
                stop_at_source,
            }),
            Message::SetStatus(status) => {
                self.ui.message = Some(status);
                Command::None
            }
            Message::ClearStatus => {
                self.ui.message = None;
                Command::None
            }
        }
    }

    fn commit(&mut self, action: CommitAction) -> Command {
        let resolution = commit::resolve(
            action,
            CommitContext {
                query: &self.search.query,
                items: &self.search.items,
                cursor: self.search.cursor,
                open: self.search.open,
            },
        );

        if resolution.clear_query {
            self.search.query.clear();
            self.search.clear_results();
            self.guard.supersede();
        }
        if resolution.close {
            self.close();
        }

        if resolution.intents.is_empty() {
            Command::None
        } else {
            Command::Deliver(resolution.intents)
        }
    }

    fn close(&mut self) {
        self.search.open = false;
        self.search.cursor = None;
        self.close_pending = false;
    }
}
