use serde::{Deserialize, Serialize};
use std::fmt;

/// Content source a suggestion came from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Catalog items (domain A)
    Product,
    /// Service listings (domain B)
    Service,
}

impl Domain {
    /// Query order; product results always precede service results.
    pub const ALL: [Domain; 2] = [Domain::Product, Domain::Service];

    /// Path segment of the item's detail page.
    pub fn path_segment(self) -> &'static str {
        match self {
            Domain::Product => "products",
            Domain::Service => "services",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Domain::Product => "product",
            Domain::Service => "service",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One normalized suggestion. Identity is `(domain, id)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    pub domain: Domain,
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

impl ResultItem {
    pub fn key(&self) -> (Domain, i64) {
        (self.domain, self.id)
    }

    pub fn detail_path(&self) -> String {
        format!("/{}/{}", self.domain.path_segment(), self.id)
    }

    pub fn draft(&self) -> ItemDraft {
        ItemDraft {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            image_ref: self.image_ref.clone(),
        }
    }
}

/// Minimal cart entry; quantity and persistence belong to the cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

/// Monotonic identifier of one dispatched query.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SessionToken(pub(crate) u64);

impl SessionToken {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// Search request and response for async communication
#[derive(Clone, Debug, PartialEq)]
pub struct SearchRequest {
    pub session: SessionToken,
    pub query: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchResponse {
    pub session: SessionToken,
    pub query: String,
    pub items: Vec<ResultItem>,
}

/// Outward request handed to the navigation or cart collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    NavigateToDetail { path: String },
    NavigateToSearch { path: String },
    AddToCart { item: ItemDraft },
}

/// Observable phase of the suggestion box.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Closed,
    Empty,
    Loading,
    Results,
}

/// Which part of a suggestion row a pointer commit landed on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PointerTarget {
    Row,
    QuickAdd,
}
