//! Commit resolution
//!
//! Turns a terminal user action into outward intents plus the state changes
//! that go with them. Performs no I/O; an impossible commit resolves to
//! [`Resolution::none`].

use crate::suggest::constants::FULL_SEARCH_PATH;
use crate::suggest::domain::models::{Intent, PointerTarget, ResultItem};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommitAction {
    /// Enter pressed in the search box
    Enter,
    /// Pointer commit on a suggestion row or on one of its controls.
    /// `stop_at_source` keeps a control's commit from reaching the row.
    Pointer {
        index: usize,
        target: PointerTarget,
        stop_at_source: bool,
    },
}

/// Snapshot of the suggestion box a commit is resolved against.
#[derive(Clone, Copy, Debug)]
pub struct CommitContext<'a> {
    pub query: &'a str,
    pub items: &'a [ResultItem],
    pub cursor: Option<usize>,
    pub open: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resolution {
    pub intents: Vec<Intent>,
    pub clear_query: bool,
    pub close: bool,
}

impl Resolution {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_noop(&self) -> bool {
        self.intents.is_empty() && !self.clear_query && !self.close
    }
}

pub fn resolve(action: CommitAction, ctx: CommitContext<'_>) -> Resolution {
    match action {
        CommitAction::Enter => resolve_enter(ctx),
        CommitAction::Pointer {
            index,
            target,
            stop_at_source,
        } => {
            if !ctx.open {
                return Resolution::none();
            }
            let Some(item) = ctx.items.get(index) else {
                return Resolution::none();
            };
            match target {
                PointerTarget::Row => commit_item(item),
                PointerTarget::QuickAdd => {
                    let mut resolution = Resolution {
                        intents: vec![Intent::AddToCart { item: item.draft() }],
                        ..Resolution::default()
                    };
                    if !stop_at_source {
                        let row = commit_item(item);
                        resolution.intents.extend(row.intents);
                        resolution.clear_query = row.clear_query;
                        resolution.close = row.close;
                    }
                    resolution
                }
            }
        }
    }
}

fn resolve_enter(ctx: CommitContext<'_>) -> Resolution {
    if ctx.open {
        if let Some(item) = ctx.cursor.and_then(|index| ctx.items.get(index)) {
            return commit_item(item);
        }
    }

    let query = ctx.query.trim();
    if query.is_empty() {
        return Resolution::none();
    }

    Resolution {
        intents: vec![Intent::NavigateToSearch {
            path: full_search_path(query),
        }],
        clear_query: false,
        close: true,
    }
}

fn commit_item(item: &ResultItem) -> Resolution {
    Resolution {
        intents: vec![Intent::NavigateToDetail {
            path: item.detail_path(),
        }],
        clear_query: true,
        close: true,
    }
}

pub fn full_search_path(query: &str) -> String {
    format!("{FULL_SEARCH_PATH}?q={}", urlencoding::encode(query))
}
