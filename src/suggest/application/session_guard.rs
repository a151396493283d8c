use crate::suggest::domain::models::SessionToken;

/// Generation counter deciding which in-flight search may touch the state.
///
/// Only the most recently issued token is current; results carrying any
/// other token must be dropped without mutating anything.
#[derive(Debug, Default)]
pub struct SessionGuard {
    current: u64,
}

impl SessionGuard {
    pub fn new() -> Self {
        Self { current: 0 }
    }

    /// Mint a token strictly greater than every previous one and make it current.
    pub fn begin_session(&mut self) -> SessionToken {
        self.current += 1;
        SessionToken(self.current)
    }

    /// Advance the generation without dispatching, orphaning whatever is in flight.
    pub fn supersede(&mut self) {
        self.current += 1;
    }

    pub fn is_current(&self, token: SessionToken) -> bool {
        token.0 == self.current
    }

    pub fn current(&self) -> u64 {
        self.current
    }
}
