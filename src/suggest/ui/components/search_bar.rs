use crate::suggest::ui::components::{Component, is_exit_prompt};
use crate::suggest::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Single-line query input with emacs-style editing keys.
#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    loading: bool,
    focused: bool,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sync the text from state. The cursor only jumps to the end when the
    /// text was changed from outside, e.g. cleared after a commit.
    pub fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_string();
            self.cursor_position = self.char_count();
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn get_query(&self) -> &str {
        &self.query
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    fn char_count(&self) -> usize {
        self.query.chars().count()
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map_or(self.query.len(), |(offset, _)| offset)
    }

    fn prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        pos
    }

    fn next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;
        while pos < chars.len() && !chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }
        pos
    }

    /// Delete chars in `start..end`; returns whether the query changed.
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.char_count() {
            return false;
        }
        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }

    fn changed(&self) -> Option<Message> {
        Some(Message::QueryChanged(self.query.clone()))
    }

    fn delete_before_cursor(&mut self) -> Option<Message> {
        if self.cursor_position > 0 && self.delete_range(self.cursor_position - 1, self.cursor_position)
        {
            return self.changed();
        }
        None
    }

    fn delete_under_cursor(&mut self) -> Option<Message> {
        let cursor = self.cursor_position;
        if self.delete_range(cursor, cursor + 1) {
            return self.changed();
        }
        None
    }

    fn title(&self) -> Line<'static> {
        let mut title = "Search products and services".to_string();
        if self.loading {
            title.push_str(" (searching...)");
        }
        let mut spans = vec![Span::raw(title)];
        if let Some(msg) = &self.message {
            let style = if is_exit_prompt(&self.message) {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::raw(" - "));
            spans.push(Span::styled(msg.clone(), style));
        }
        Line::from(spans)
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        let split = self.byte_offset(self.cursor_position);
        let (before, rest) = self.query.split_at(split);
        let mut rest_chars = rest.chars();
        let under_cursor = rest_chars.next().unwrap_or(' ');

        let mut spans = vec![Span::raw(before.to_string())];
        if self.focused {
            spans.push(Span::styled(under_cursor.to_string(), cursor_style));
            spans.push(Span::raw(rest_chars.as_str().to_string()));
        } else {
            spans.push(Span::raw(rest.to_string()));
        }

        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let input = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(self.title())
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor_position = self.char_count();
                    None
                }
                KeyCode::Char('b') => {
                    self.cursor_position = self.cursor_position.saturating_sub(1);
                    None
                }
                KeyCode::Char('f') => {
                    self.cursor_position = (self.cursor_position + 1).min(self.char_count());
                    None
                }
                KeyCode::Char('h') => self.delete_before_cursor(),
                KeyCode::Char('d') => self.delete_under_cursor(),
                KeyCode::Char('w') => {
                    let start = self.prev_word_boundary(self.cursor_position);
                    if self.delete_range(start, self.cursor_position) {
                        return self.changed();
                    }
                    None
                }
                KeyCode::Char('u') => {
                    if self.delete_range(0, self.cursor_position) {
                        return self.changed();
                    }
                    None
                }
                KeyCode::Char('k') => {
                    if self.delete_range(self.cursor_position, self.char_count()) {
                        return self.changed();
                    }
                    None
                }
                _ => None,
            };
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Char('b') => {
                    self.cursor_position = self.prev_word_boundary(self.cursor_position);
                }
                KeyCode::Char('f') => {
                    self.cursor_position = self.next_word_boundary(self.cursor_position);
                }
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Char(c) => {
                let byte_pos = self.byte_offset(self.cursor_position);
                self.query.insert(byte_pos, c);
                self.cursor_position += 1;
                self.changed()
            }
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_under_cursor(),
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.char_count());
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                None
            }
            _ => None,
        }
    }
}
