pub mod executor;
pub mod format;
pub mod source;

#[cfg(test)]
pub(crate) mod testing;

pub use executor::QueryExecutor;
pub use format::format_item;
pub use source::{HttpSource, SourceClient, SourceError};
