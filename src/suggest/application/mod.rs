pub mod clock;
pub mod commit;
pub mod debouncer;
pub mod ports;
pub mod search_service;
pub mod session_guard;

#[cfg(test)]
mod commit_test;
