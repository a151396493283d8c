//! Constants for the search-and-suggest module
//!
//! Timing values are defaults; `SearchConfig` can override the debounce and
//! blur grace intervals.

// Timing constants
/// Quiet interval after the last keystroke before a search is dispatched
pub const DEBOUNCE_MS: u64 = 350;

/// Delay between losing focus and closing the list, so a pointer commit on a
/// row is processed first
pub const BLUR_GRACE_MS: u64 = 150;

/// Status message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// Query constants
/// Shortest trimmed query (in characters) that is sent to the sources
pub const MIN_QUERY_CHARS: usize = 2;

/// Destination of a full search
pub const FULL_SEARCH_PATH: &str = "/search";

// UI Layout constants
/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Width of the quick-add column at the right edge of each row
pub const QUICK_ADD_COLUMN_WIDTH: u16 = 5;

/// Width of the price column
pub const PRICE_COLUMN_WIDTH: u16 = 12;

/// Width of the domain column
pub const DOMAIN_COLUMN_WIDTH: u16 = 10;
