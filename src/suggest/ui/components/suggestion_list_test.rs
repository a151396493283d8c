#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::suggestion_list::*;
    use crate::suggest::domain::models::{Domain, Phase, PointerTarget, ResultItem};
    use crate::suggest::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, layout::Rect};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        create_key_event_with_modifiers(code, KeyModifiers::empty())
    }

    fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: crossterm::event::KeyEventKind::Press,
            state: crossterm::event::KeyEventState::empty(),
        }
    }

    fn create_items(count: usize) -> Vec<ResultItem> {
        (0..count)
            .map(|i| ResultItem {
                domain: if i % 2 == 0 {
                    Domain::Product
                } else {
                    Domain::Service
                },
                id: i as i64 + 1,
                name: format!("Item {i}"),
                price: 10.5 * (i as f64 + 1.0),
                image_ref: None,
            })
            .collect()
    }

    fn draw(list: &mut SuggestionList, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| list.render(f, Rect::new(0, 0, width, height)))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..height {
            for x in 0..width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn results_list(count: usize) -> SuggestionList {
        let mut list = SuggestionList::new();
        list.set_items(&create_items(count));
        list.set_phase(Phase::Results);
        list
    }

    #[test]
    fn test_render_rows_with_quick_add_column() {
        let mut list = results_list(2);

        let text = draw(&mut list, 60, 6);

        assert!(text.contains("Suggestions (2)"));
        assert!(text.contains("Item 0"));
        assert!(text.contains("service"));
        assert!(text.contains("21.00"));
        assert_eq!(text.matches("[+]").count(), 2);
    }

    #[test]
    fn test_render_loading_and_empty() {
        let mut list = SuggestionList::new();
        list.set_phase(Phase::Loading);
        assert!(draw(&mut list, 40, 4).contains("Searching..."));

        list.set_phase(Phase::Empty);
        assert!(draw(&mut list, 40, 4).contains("No suggestions"));
    }

    #[test]
    fn test_closed_list_draws_nothing_and_ignores_clicks() {
        let mut list = SuggestionList::new();
        list.set_items(&create_items(3));
        list.set_phase(Phase::Closed);

        let text = draw(&mut list, 40, 5);

        assert!(!text.contains("Item"));
        assert_eq!(list.hit_test(5, 1), None);
    }

    #[test]
    fn test_hit_test_maps_rows_and_quick_add() {
        let mut list = results_list(3);
        draw(&mut list, 60, 6);

        // Inner area starts at (1, 1) inside the border
        assert_eq!(list.hit_test(3, 1), Some((0, PointerTarget::Row)));
        assert_eq!(list.hit_test(3, 3), Some((2, PointerTarget::Row)));
        assert_eq!(list.hit_test(57, 2), Some((1, PointerTarget::QuickAdd)));

        // Border, past the last row, outside the list
        assert_eq!(list.hit_test(0, 1), None);
        assert_eq!(list.hit_test(3, 4), None);
        assert_eq!(list.hit_test(3, 10), None);
    }

    #[test]
    fn test_stale_rows_stay_visible_and_clickable_while_loading() {
        let mut list = results_list(3);
        list.set_cursor(Some(0));
        list.set_phase(Phase::Loading);

        let text = draw(&mut list, 60, 6);

        assert!(text.contains("Item 0"));
        assert!(text.contains("searching..."));
        assert!(!text.contains("Searching..."));
        assert_eq!(list.hit_test(3, 1), Some((0, PointerTarget::Row)));
        assert_eq!(list.hit_test(57, 2), Some((1, PointerTarget::QuickAdd)));
    }

    #[test]
    fn test_loading_without_rows_ignores_clicks() {
        let mut list = SuggestionList::new();
        list.set_phase(Phase::Loading);

        draw(&mut list, 60, 6);

        assert_eq!(list.hit_test(3, 1), None);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut list = results_list(10);
        list.set_cursor(Some(7));

        // Four visible rows inside the border
        let text = draw(&mut list, 60, 6);

        assert_eq!(list.scroll_offset(), 4);
        assert!(text.contains("Item 7"));
        assert!(!text.contains("Item 3"));
        assert_eq!(list.hit_test(3, 1), Some((4, PointerTarget::Row)));

        list.set_cursor(Some(1));
        draw(&mut list, 60, 6);
        assert_eq!(list.scroll_offset(), 1);
    }

    #[test]
    fn test_navigation_keys() {
        let mut list = results_list(3);

        assert!(matches!(
            list.handle_key(create_key_event(KeyCode::Down)),
            Some(Message::CursorDown)
        ));
        assert!(matches!(
            list.handle_key(create_key_event(KeyCode::Up)),
            Some(Message::CursorUp)
        ));
        assert!(matches!(
            list.handle_key(create_key_event_with_modifiers(
                KeyCode::Char('n'),
                KeyModifiers::CONTROL
            )),
            Some(Message::CursorDown)
        ));
        assert!(matches!(
            list.handle_key(create_key_event_with_modifiers(
                KeyCode::Char('p'),
                KeyModifiers::CONTROL
            )),
            Some(Message::CursorUp)
        ));
        assert!(matches!(
            list.handle_key(create_key_event(KeyCode::Enter)),
            Some(Message::Enter)
        ));
        assert!(matches!(
            list.handle_key(create_key_event(KeyCode::Esc)),
            Some(Message::Escape)
        ));
        assert!(list.handle_key(create_key_event(KeyCode::Char('x'))).is_none());
    }

    #[test]
    fn test_tab_quick_adds_highlighted_row() {
        let mut list = results_list(3);
        assert!(list.handle_key(create_key_event(KeyCode::Tab)).is_none());

        list.set_cursor(Some(2));
        let msg = list.handle_key(create_key_event(KeyCode::Tab));

        assert!(matches!(
            msg,
            Some(Message::PointerCommit {
                index: 2,
                target: PointerTarget::QuickAdd,
                stop_at_source: true
            })
        ));
    }
}
