use crate::suggest::domain::models::{Intent, ItemDraft};
use std::sync::{Arc, Mutex};

/// Navigation collaborator.
pub trait Navigator {
    /// Open an item's detail page, e.g. `/products/42`.
    fn navigate_to_detail(&mut self, path: &str);
    /// Open the full search results page, e.g. `/search?q=banana`.
    fn navigate_to_search(&mut self, path: &str);
}

/// Cart collaborator. Owns quantity defaults and persistence.
pub trait Cart {
    fn add(&mut self, item: ItemDraft);
}

/// Route one intent to the collaborator that owns it.
pub fn deliver(intent: &Intent, navigator: &mut dyn Navigator, cart: &mut dyn Cart) {
    match intent {
        Intent::NavigateToDetail { path } => navigator.navigate_to_detail(path),
        Intent::NavigateToSearch { path } => navigator.navigate_to_search(path),
        Intent::AddToCart { item } => cart.add(item.clone()),
    }
}

/// Shared, ordered record of delivered intents. Clones share the record, so
/// one recorder can serve as both navigator and cart.
#[derive(Debug, Default, Clone)]
pub struct IntentRecorder {
    intents: Arc<Mutex<Vec<Intent>>>,
}

impl IntentRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, intent: Intent) {
        self.intents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(intent);
    }

    pub fn snapshot(&self) -> Vec<Intent> {
        self.intents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.intents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Navigator for IntentRecorder {
    fn navigate_to_detail(&mut self, path: &str) {
        self.push(Intent::NavigateToDetail {
            path: path.to_string(),
        });
    }

    fn navigate_to_search(&mut self, path: &str) {
        self.push(Intent::NavigateToSearch {
            path: path.to_string(),
        });
    }
}

impl Cart for IntentRecorder {
    fn add(&mut self, item: ItemDraft) {
        self.push(Intent::AddToCart { item });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deliver_routes_by_intent() {
        let recorder = IntentRecorder::new();
        let mut navigator = recorder.clone();
        let mut cart = recorder.clone();

        let intents = vec![
            Intent::NavigateToDetail {
                path: "/products/1".to_string(),
            },
            Intent::AddToCart {
                item: ItemDraft {
                    id: 1,
                    name: "Milho".to_string(),
                    price: 2.0,
                    image_ref: None,
                },
            },
            Intent::NavigateToSearch {
                path: "/search?q=mi".to_string(),
            },
        ];
        for intent in &intents {
            deliver(intent, &mut navigator, &mut cart);
        }

        assert_eq!(recorder.snapshot(), intents);
        assert_eq!(recorder.len(), 3);
    }
}
