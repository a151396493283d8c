use crate::suggest::domain::models::{Intent, SearchRequest};

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ScheduleSearch(String), // restart the debounce timer with this input
    ExecuteSearch(SearchRequest),
    ScheduleClose, // close after the blur grace delay
    Deliver(Vec<Intent>),
}
