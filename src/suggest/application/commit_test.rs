#[cfg(test)]
mod tests {
    use super::super::commit::*;
    use crate::suggest::domain::models::{Domain, Intent, ItemDraft, PointerTarget, ResultItem};

    fn create_items() -> Vec<ResultItem> {
        vec![
            ResultItem {
                domain: Domain::Product,
                id: 10,
                name: "Milho".to_string(),
                price: 3.2,
                image_ref: Some("milho.jpg".to_string()),
            },
            ResultItem {
                domain: Domain::Service,
                id: 10,
                name: "Drone spraying".to_string(),
                price: 150.0,
                image_ref: None,
            },
        ]
    }

    fn ctx<'a>(query: &'a str, items: &'a [ResultItem], cursor: Option<usize>) -> CommitContext<'a> {
        CommitContext {
            query,
            items,
            cursor,
            open: true,
        }
    }

    #[test]
    fn test_enter_with_cursor_commits_highlighted_item() {
        let items = create_items();
        let resolution = resolve(CommitAction::Enter, ctx("dr", &items, Some(1)));

        assert_eq!(
            resolution.intents,
            vec![Intent::NavigateToDetail {
                path: "/services/10".to_string()
            }]
        );
        assert!(resolution.clear_query);
        assert!(resolution.close);
    }

    #[test]
    fn test_row_commit_navigates_to_detail_for_every_domain() {
        let items = create_items();
        for (index, domain) in Domain::ALL.into_iter().enumerate() {
            let resolution = resolve(
                CommitAction::Pointer {
                    index,
                    target: PointerTarget::Row,
                    stop_at_source: false,
                },
                ctx("x", &items, None),
            );
            assert_eq!(items[index].domain, domain);
            assert_eq!(
                resolution.intents,
                vec![Intent::NavigateToDetail {
                    path: format!("/{}/10", domain.path_segment())
                }]
            );
        }
    }

    #[test]
    fn test_enter_matches_row_click() {
        let items = create_items();
        let by_enter = resolve(CommitAction::Enter, ctx("mi", &items, Some(0)));
        let by_click = resolve(
            CommitAction::Pointer {
                index: 0,
                target: PointerTarget::Row,
                stop_at_source: false,
            },
            ctx("mi", &items, None),
        );
        assert_eq!(by_enter, by_click);
    }

    #[test]
    fn test_enter_without_cursor_goes_to_full_search() {
        let items = create_items();
        let resolution = resolve(CommitAction::Enter, ctx("banana", &items, None));

        assert_eq!(
            resolution.intents,
            vec![Intent::NavigateToSearch {
                path: "/search?q=banana".to_string()
            }]
        );
        assert!(!resolution.clear_query);
        assert!(resolution.close);
    }

    #[test]
    fn test_full_search_query_is_url_encoded_and_trimmed() {
        let resolution = resolve(CommitAction::Enter, ctx("  pão & café ", &[], None));
        assert_eq!(
            resolution.intents,
            vec![Intent::NavigateToSearch {
                path: "/search?q=p%C3%A3o%20%26%20caf%C3%A9".to_string()
            }]
        );
    }

    #[test]
    fn test_enter_on_empty_query_is_noop() {
        let resolution = resolve(CommitAction::Enter, ctx("   ", &[], None));
        assert!(resolution.is_noop());
    }

    #[test]
    fn test_enter_on_closed_list_ignores_cursor() {
        let items = create_items();
        let closed = CommitContext {
            open: false,
            ..ctx("mi", &items, Some(0))
        };
        let resolution = resolve(CommitAction::Enter, closed);
        assert_eq!(
            resolution.intents,
            vec![Intent::NavigateToSearch {
                path: "/search?q=mi".to_string()
            }]
        );
    }

    #[test]
    fn test_quick_add_with_stop_does_not_commit_row() {
        let items = create_items();
        let resolution = resolve(
            CommitAction::Pointer {
                index: 0,
                target: PointerTarget::QuickAdd,
                stop_at_source: true,
            },
            ctx("mi", &items, None),
        );

        assert_eq!(
            resolution.intents,
            vec![Intent::AddToCart {
                item: ItemDraft {
                    id: 10,
                    name: "Milho".to_string(),
                    price: 3.2,
                    image_ref: Some("milho.jpg".to_string()),
                }
            }]
        );
        assert!(!resolution.clear_query);
        assert!(!resolution.close);
    }

    #[test]
    fn test_quick_add_without_stop_propagates_to_row() {
        let items = create_items();
        let resolution = resolve(
            CommitAction::Pointer {
                index: 1,
                target: PointerTarget::QuickAdd,
                stop_at_source: false,
            },
            ctx("dr", &items, None),
        );

        assert_eq!(resolution.intents.len(), 2);
        assert!(matches!(resolution.intents[0], Intent::AddToCart { .. }));
        assert_eq!(
            resolution.intents[1],
            Intent::NavigateToDetail {
                path: "/services/10".to_string()
            }
        );
        assert!(resolution.close);
    }

    #[test]
    fn test_pointer_out_of_range_is_noop() {
        let items = create_items();
        let resolution = resolve(
            CommitAction::Pointer {
                index: 5,
                target: PointerTarget::Row,
                stop_at_source: false,
            },
            ctx("mi", &items, None),
        );
        assert!(resolution.is_noop());
    }

    #[test]
    fn test_pointer_on_closed_list_is_noop() {
        let items = create_items();
        let closed = CommitContext {
            open: false,
            ..ctx("mi", &items, None)
        };
        let resolution = resolve(
            CommitAction::Pointer {
                index: 0,
                target: PointerTarget::Row,
                stop_at_source: false,
            },
            closed,
        );
        assert!(resolution.is_noop());
    }
}
