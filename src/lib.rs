pub mod config;
pub mod logging;
pub mod schemas;
pub mod search;
pub mod suggest;

pub use config::{ConfigError, SearchConfig};
pub use search::{HttpSource, QueryExecutor, SourceClient, SourceError, format_item};
pub use suggest::InteractiveSearch;
pub use suggest::domain::models::{Domain, Intent, ItemDraft, ResultItem};
