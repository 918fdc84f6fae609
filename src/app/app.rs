//! Main application controller
//!
//! Manages the TUI, application state, and screen rendering loop.

use crate::{
    app::{
        screens::{ConfigAction, ConfigScreen, CountdownScreen, FinishedScreen},
        state::{AppState, NavigationAction, StateManager},
        tui::{Tui, TuiEvent},
    },
    timer::Phase,
    Result,
};
use std::io;

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Application state manager
    state_manager: StateManager,
    /// Screen components; the countdown screen exists only while a
    /// countdown is on screen, so dropping it models window disposal
    config_screen: ConfigScreen,
    countdown_screen: Option<CountdownScreen>,
    finished_screen: FinishedScreen,
}

impl App {
    /// Create a new application instance
    pub fn new() -> Result<Self> {
        Ok(Self {
            tui: Tui::new()?,
            state_manager: StateManager::new(),
            config_screen: ConfigScreen::new(),
            countdown_screen: None,
            finished_screen: FinishedScreen::new(),
        })
    }

    /// Initialize the application and TUI
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()?;
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.state_manager.should_quit() {
            self.draw()?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Exit code recorded by the termination path, success by default
    pub fn exit_code(&self) -> u8 {
        self.state_manager.exit_code()
    }

    /// Draw the current screen
    fn draw(&mut self) -> io::Result<()> {
        let state = self.state_manager.current_state().clone();
        let config_screen = &self.config_screen;
        let countdown_screen = &self.countdown_screen;
        let finished_screen = &self.finished_screen;
        self.tui.draw(|f| match state {
            AppState::Config => config_screen.render(f),
            AppState::Countdown => {
                if let Some(screen) = countdown_screen {
                    screen.render(f);
                }
            }
            AppState::Finished => finished_screen.render(f),
        })
    }

    /// Handle the next event and update state
    fn handle_events(&mut self) -> Result<()> {
        match self.tui.next_event()? {
            Some(TuiEvent::Tick) => self.handle_tick(),
            Some(TuiEvent::Key(key)) => {
                let nav_action = StateManager::key_to_navigation(key);

                // Global quit handling; the countdown and notice screens
                // route it through their own teardown paths
                if nav_action == NavigationAction::Quit {
                    match self.state_manager.current_state().clone() {
                        AppState::Countdown => self.close_countdown(),
                        AppState::Finished => self.acknowledge_notice(),
                        AppState::Config => self.state_manager.quit(),
                    }
                    return Ok(());
                }

                // Screen-specific key handling
                match self.state_manager.current_state().clone() {
                    AppState::Config => self.handle_config_screen_events(key),
                    AppState::Countdown => self.handle_countdown_screen_events(nav_action),
                    AppState::Finished => self.handle_finished_screen_events(nav_action),
                }
            }
            None => {}
        }
        Ok(())
    }

    /// One tick fired: drive the countdown and handle expiry
    fn handle_tick(&mut self) {
        if *self.state_manager.current_state() != AppState::Countdown {
            return;
        }
        if let Some(screen) = &mut self.countdown_screen {
            if screen.tick() == Phase::Expired {
                // Stop the tick and dispose the countdown before the notice
                self.tui.stop_ticking();
                self.countdown_screen = None;
                self.state_manager.transition_to(AppState::Finished);
            }
        }
    }

    fn handle_config_screen_events(&mut self, key: crossterm::event::KeyEvent) {
        match self.config_screen.handle_key_event(key) {
            Some(ConfigAction::Start(total_seconds)) => {
                self.countdown_screen = Some(CountdownScreen::new(total_seconds));
                self.tui.start_ticking();
                self.state_manager.transition_to(AppState::Countdown);
            }
            Some(ConfigAction::Quit) => self.state_manager.quit(),
            None => {}
        }
    }

    fn handle_countdown_screen_events(&mut self, action: NavigationAction) {
        if action == NavigationAction::Back {
            self.close_countdown();
        }
    }

    fn handle_finished_screen_events(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Select | NavigationAction::Back => self.acknowledge_notice(),
            _ => {}
        }
    }

    /// Manual close while running: stop the tick, dispose the countdown,
    /// and let the loop end with the default success status. No notice.
    fn close_countdown(&mut self) {
        self.tui.stop_ticking();
        if let Some(screen) = &mut self.countdown_screen {
            screen.close();
        }
        self.countdown_screen = None;
        self.state_manager.quit();
    }

    /// Notice acknowledged: record success termination exactly once
    fn acknowledge_notice(&mut self) {
        self.state_manager.terminate(0);
    }
}
