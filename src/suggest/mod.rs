use anyhow::Result;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind, poll,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tracing::info;

use crate::config::SearchConfig;
use crate::search::executor::QueryExecutor;

pub mod application;
pub mod constants;
pub mod domain;
pub mod driver;
pub mod ui;


use self::application::clock::SystemClock;
use self::application::ports::IntentRecorder;
use self::constants::{DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, MESSAGE_CLEAR_DELAY_MS};
use self::domain::models::{Intent, PointerTarget};
use self::driver::SuggestDriver;
use self::ui::{components::Component, components::EXIT_PROMPT, events::Message, renderer::Renderer};

/// Terminal front end for the search box.
///
/// Keys and mouse clicks become [`Message`]s for the driver. Delivered
/// intents are recorded and returned when the user exits.
pub struct InteractiveSearch {
    driver: SuggestDriver<SystemClock>,
    renderer: Renderer,
    recorder: IntentRecorder,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
}

impl InteractiveSearch {
    pub fn new(config: &SearchConfig, executor: QueryExecutor, runtime: Handle) -> Self {
        let recorder = IntentRecorder::new();
        let driver = SuggestDriver::new(
            config,
            executor,
            runtime,
            SystemClock,
            Box::new(recorder.clone()),
            Box::new(recorder.clone()),
        );

        Self {
            driver,
            renderer: Renderer::new(),
            recorder,
            last_ctrl_c_press: None,
            message_timer: None,
        }
    }

    /// Run until the user exits; returns every intent delivered meanwhile.
    pub fn run(&mut self) -> Result<Vec<Intent>> {
        let mut terminal = self.setup_terminal()?;

        // The input starts focused
        self.driver.handle(Message::Focus);
        let result = self.run_app(&mut terminal);

        self.cleanup_terminal(&mut terminal)?;
        result?;
        Ok(self.recorder.snapshot())
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableFocusChange
        )?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, self.driver.state());
            })?;

            self.driver.tick();

            if let Some(timer) = self.message_timer {
                if timer.elapsed() >= Duration::from_millis(MESSAGE_CLEAR_DELAY_MS) {
                    self.message_timer = None;
                    self.driver.handle(Message::ClearStatus);
                }
            }

            let timeout = self
                .driver
                .next_deadline()
                .map_or(Duration::from_millis(EVENT_POLL_INTERVAL_MS), |d| {
                    d.min(Duration::from_millis(EVENT_POLL_INTERVAL_MS))
                });
            if poll(timeout)? {
                let should_quit = match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_input(key),
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        false
                    }
                    Event::FocusGained => {
                        self.dispatch(Message::Focus);
                        false
                    }
                    Event::FocusLost => {
                        self.dispatch(Message::Blur);
                        false
                    }
                    _ => false,
                };
                if should_quit {
                    break;
                }
            }
        }
        Ok(())
    }

    fn handle_input(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.set_status(EXIT_PROMPT.to_string());
            return false;
        }

        let message = match key.code {
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Enter
            | KeyCode::Esc
            | KeyCode::Tab => self.renderer.get_suggestion_list_mut().handle_key(key),
            KeyCode::Char('n') | KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                self.renderer.get_suggestion_list_mut().handle_key(key)
            }
            _ => {
                // Typing into a closed box reopens it
                if !self.driver.state().search.open {
                    self.dispatch(Message::Focus);
                }
                self.renderer.get_search_bar_mut().handle_key(key)
            }
        };

        if let Some(msg) = message {
            self.dispatch(msg);
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let hit = self
            .renderer
            .get_suggestion_list()
            .hit_test(mouse.column, mouse.row);
        if let Some((index, target)) = hit {
            self.dispatch(Message::PointerCommit {
                index,
                target,
                stop_at_source: target == PointerTarget::QuickAdd,
            });
        }
    }

    fn dispatch(&mut self, msg: Message) {
        let delivered = self.driver.handle(msg);
        for intent in &delivered {
            info!(?intent, "intent delivered");
            self.set_status(describe(intent));
        }
    }

    fn set_status(&mut self, status: String) {
        self.driver.handle(Message::SetStatus(status));
        self.message_timer = Some(Instant::now());
    }
}

fn describe(intent: &Intent) -> String {
    match intent {
        Intent::NavigateToDetail { path } => format!("Open {path}"),
        Intent::NavigateToSearch { path } => format!("Search {path}"),
        Intent::AddToCart { item } => format!("Added {} to cart", item.name),
    }
}
