pub mod catalog;


pub use catalog::{extract_records, merge, normalize_record, normalize_records};
