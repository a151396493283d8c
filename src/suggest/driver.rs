use crate::config::SearchConfig;
use crate::search::executor::QueryExecutor;
use crate::suggest::application::clock::{Clock, Timer};
use crate::suggest::application::debouncer::Debouncer;
use crate::suggest::application::ports::{self, Cart, Navigator};
use crate::suggest::application::search_service::SearchService;
use crate::suggest::domain::models::Intent;
use crate::suggest::ui::app_state::AppState;
use crate::suggest::ui::commands::Command;
use crate::suggest::ui::events::Message;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::debug;

/// Runs the suggestion state machine against real timers, the search
/// worker, and the navigation and cart collaborators.
///
/// Front ends feed it [`Message`]s and call [`tick`](Self::tick) regularly;
/// everything time-based is read from the injected [`Clock`].
pub struct SuggestDriver<C: Clock + Clone> {
    state: AppState,
    debouncer: Debouncer<C>,
    close_timer: Timer,
    clock: C,
    blur_grace: Duration,
    search: SearchService,
    navigator: Box<dyn Navigator>,
    cart: Box<dyn Cart>,
}

impl<C: Clock + Clone> SuggestDriver<C> {
    pub fn new(
        config: &SearchConfig,
        executor: QueryExecutor,
        runtime: Handle,
        clock: C,
        navigator: Box<dyn Navigator>,
        cart: Box<dyn Cart>,
    ) -> Self {
        Self {
            state: AppState::new(),
            debouncer: Debouncer::new(clock.clone(), config.debounce),
            close_timer: Timer::new(),
            clock,
            blur_grace: config.blur_grace,
            search: SearchService::new(executor, runtime),
            navigator,
            cart,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn in_flight(&self) -> usize {
        self.search.in_flight()
    }

    /// Apply one message and run the resulting command. Returns the intents
    /// delivered to the collaborators, if any.
    pub fn handle(&mut self, msg: Message) -> Vec<Intent> {
        if matches!(msg, Message::Focus) {
            self.close_timer.cancel();
        }
        let command = self.state.update(msg);
        self.execute_command(command)
    }

    fn execute_command(&mut self, command: Command) -> Vec<Intent> {
        match command {
            Command::None => Vec::new(),
            Command::ScheduleSearch(raw) => {
                self.debouncer.input(raw);
                Vec::new()
            }
            Command::ExecuteSearch(request) => {
                self.search.submit(request);
                Vec::new()
            }
            Command::ScheduleClose => {
                self.close_timer.arm(self.clock.now(), self.blur_grace);
                Vec::new()
            }
            Command::Deliver(intents) => {
                for intent in &intents {
                    debug!(?intent, "delivering intent");
                    ports::deliver(intent, self.navigator.as_mut(), self.cart.as_mut());
                }
                intents
            }
        }
    }

    /// Fire due timers and apply finished searches.
    pub fn tick(&mut self) {
        if let Some(settled) = self.debouncer.poll() {
            self.handle(Message::SearchSettled(settled));
        }
        while let Some(response) = self.search.poll_response() {
            self.handle(Message::SearchCompleted(response));
        }
        if self.close_timer.fire(self.clock.now()) {
            self.handle(Message::BlurElapsed);
        }
    }

    /// Wait for the next finished search and apply it. Returns false when
    /// nothing is in flight.
    pub async fn wait_for_response(&mut self) -> bool {
        if self.search.in_flight() == 0 {
            return false;
        }
        match self.search.next_response().await {
            Some(response) => {
                self.handle(Message::SearchCompleted(response));
                true
            }
            None => false,
        }
    }

    /// Time until the next timer is due, for sizing the event poll.
    pub fn next_deadline(&self) -> Option<Duration> {
        let now = self.clock.now();
        [self.debouncer.time_until_ready(), self.close_timer.remaining(now)]
            .into_iter()
            .flatten()
            .min()
    }
}
