use crate::suggest::constants::{DOMAIN_COLUMN_WIDTH, PRICE_COLUMN_WIDTH, QUICK_ADD_COLUMN_WIDTH};
use crate::suggest::domain::models::{Phase, PointerTarget, ResultItem};
use crate::suggest::ui::components::Component;
use crate::suggest::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Drop-down list of suggestions under the search bar.
///
/// Each row shows the item name, its domain, its price, and a `[+]`
/// quick-add button at the right edge. The list remembers where it was last
/// drawn so mouse clicks can be mapped back to rows.
#[derive(Default)]
pub struct SuggestionList {
    items: Vec<ResultItem>,
    cursor: Option<usize>,
    phase: Option<Phase>,
    scroll_offset: usize,
    inner_area: Option<Rect>,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_items(&mut self, items: &[ResultItem]) {
        if self.items != items {
            self.items = items.to_vec();
            self.scroll_offset = 0;
        }
    }

    pub fn set_cursor(&mut self, cursor: Option<usize>) {
        self.cursor = cursor;
    }

    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = Some(phase);
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Map a terminal cell to the suggestion under it, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<(usize, PointerTarget)> {
        // Stale rows stay clickable while a newer search is loading
        if !matches!(self.phase, Some(Phase::Results | Phase::Loading)) {
            return None;
        }
        let inner = self.inner_area?;
        if column < inner.x || column >= inner.right() || row < inner.y || row >= inner.bottom() {
            return None;
        }

        let index = self.scroll_offset + usize::from(row - inner.y);
        if index >= self.items.len() {
            return None;
        }

        let quick_add_start = inner.right().saturating_sub(QUICK_ADD_COLUMN_WIDTH);
        let target = if column >= quick_add_start {
            PointerTarget::QuickAdd
        } else {
            PointerTarget::Row
        };
        Some((index, target))
    }

    fn ensure_cursor_visible(&mut self, visible_rows: usize) {
        let Some(cursor) = self.cursor else {
            return;
        };
        if visible_rows == 0 {
            return;
        }
        if cursor < self.scroll_offset {
            self.scroll_offset = cursor;
        } else if cursor >= self.scroll_offset + visible_rows {
            self.scroll_offset = cursor + 1 - visible_rows;
        }
    }

    fn render_row(&self, index: usize, item: &ResultItem, width: u16) -> Line<'static> {
        let name_width = width
            .saturating_sub(DOMAIN_COLUMN_WIDTH + PRICE_COLUMN_WIDTH + QUICK_ADD_COLUMN_WIDTH)
            as usize;
        let name: String = item.name.chars().take(name_width).collect();
        let name_pad = name_width.saturating_sub(name.chars().count());

        let selected = self.cursor == Some(index);
        let base = if selected {
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::styled(format!("{name}{}", " ".repeat(name_pad)), base),
            Span::styled(
                format!("{:<w$}", item.domain.label(), w = DOMAIN_COLUMN_WIDTH as usize),
                base.fg(Color::Cyan),
            ),
            Span::styled(
                format!("{:>w$.2}", item.price, w = PRICE_COLUMN_WIDTH as usize),
                base.fg(Color::Green),
            ),
            Span::styled(
                format!("{:^w$}", "[+]", w = QUICK_ADD_COLUMN_WIDTH as usize),
                base.fg(Color::Yellow),
            ),
        ])
    }
}

impl Component for SuggestionList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let phase = self.phase.unwrap_or(Phase::Closed);
        if phase == Phase::Closed {
            self.inner_area = None;
            f.render_widget(Clear, area);
            return;
        }

        let showing_rows = !self.items.is_empty()
            && matches!(phase, Phase::Results | Phase::Loading);
        let title = match (phase, showing_rows) {
            (Phase::Results, _) => format!("Suggestions ({})", self.items.len()),
            (Phase::Loading, true) => {
                format!("Suggestions ({}) - searching...", self.items.len())
            }
            _ => "Suggestions".to_string(),
        };
        let block = Block::default().title(title).borders(Borders::ALL);
        let inner = block.inner(area);
        self.inner_area = Some(inner);

        let lines: Vec<Line> = match phase {
            _ if showing_rows => {
                let visible_rows = usize::from(inner.height);
                self.ensure_cursor_visible(visible_rows);
                self.items
                    .iter()
                    .enumerate()
                    .skip(self.scroll_offset)
                    .take(visible_rows)
                    .map(|(index, item)| self.render_row(index, item, inner.width))
                    .collect()
            }
            Phase::Loading => vec![Line::from(Span::styled(
                "Searching...",
                Style::default().add_modifier(Modifier::DIM),
            ))],
            Phase::Empty => vec![Line::from(Span::styled(
                "No suggestions",
                Style::default().add_modifier(Modifier::DIM),
            ))],
            _ => Vec::new(),
        };

        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Down => Some(Message::CursorDown),
            KeyCode::Up => Some(Message::CursorUp),
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                Some(Message::CursorDown)
            }
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => Some(Message::CursorUp),
            KeyCode::Enter => Some(Message::Enter),
            KeyCode::Esc => Some(Message::Escape),
            // Quick-add for the highlighted row
            KeyCode::Tab => {
                let index = self.cursor.filter(|&i| i < self.items.len())?;
                Some(Message::PointerCommit {
                    index,
                    target: PointerTarget::QuickAdd,
                    stop_at_source: true,
                })
            }
            _ => None,
        }
    }
}
