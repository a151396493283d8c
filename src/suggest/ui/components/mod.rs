pub mod search_bar;
pub mod suggestion_list;

#[cfg(test)]
mod suggestion_list_test;

use crate::suggest::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";

/// Check if a message is the exit prompt
pub fn is_exit_prompt(message: &Option<String>) -> bool {
    message.as_deref() == Some(EXIT_PROMPT)
}
