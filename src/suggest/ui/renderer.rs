use crate::suggest::constants::SEARCH_BAR_HEIGHT;
use crate::suggest::ui::app_state::AppState;
use crate::suggest::ui::components::{
    Component, search_bar::SearchBar, suggestion_list::SuggestionList,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::Paragraph,
};

const HELP_TEXT: &str =
    "↑/↓ or Ctrl+P/N: Navigate | Enter: Open | Tab: Add to cart | Esc: Close | Ctrl+C x2: Exit";

pub struct Renderer {
    search_bar: SearchBar,
    suggestion_list: SuggestionList,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            suggestion_list: SuggestionList::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT), // Search bar
                Constraint::Min(0),                    // Suggestions
                Constraint::Length(1),                 // Help line
            ])
            .split(f.area());

        self.search_bar.set_query(&state.search.query);
        self.search_bar.set_loading(state.search.loading);
        self.search_bar.set_focused(state.search.open);
        self.search_bar.set_message(state.ui.message.clone());

        self.suggestion_list.set_items(&state.search.items);
        self.suggestion_list.set_cursor(state.search.cursor);
        self.suggestion_list.set_phase(state.phase());

        self.search_bar.render(f, chunks[0]);
        self.suggestion_list.render(f, chunks[1]);

        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().add_modifier(Modifier::DIM))
            .alignment(Alignment::Center);
        f.render_widget(help, chunks[2]);
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_suggestion_list(&self) -> &SuggestionList {
        &self.suggestion_list
    }

    pub fn get_suggestion_list_mut(&mut self) -> &mut SuggestionList {
        &mut self.suggestion_list
    }
}
