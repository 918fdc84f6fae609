//! Application state management
//!
//! Handles screen transitions, keyboard event mapping, and the process
//! lifecycle signal for the TUI application.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application screens/states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Duration configuration screen with H/M/S spinners
    Config,
    /// Countdown display ticking once per second
    Countdown,
    /// Completion notice awaiting acknowledgment
    Finished,
}

impl Default for AppState {
    fn default() -> Self {
        Self::Config
    }
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up / step a value up (arrow up, k)
    Up,
    /// Move selection down / step a value down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back/cancel (Esc, Backspace)
    Back,
    /// Next field (Tab)
    Next,
    /// Previous field (Shift+Tab)
    Previous,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Application state manager
///
/// Tracks the active screen, the quit flag, and the exit code recorded by
/// the expiry path. The core never calls a hard process exit itself; it
/// records intent here and the entry point maps it to an exit status.
#[derive(Debug)]
pub struct StateManager {
    current_state: AppState,
    should_quit: bool,
    exit_code: Option<u8>,
}

impl StateManager {
    /// Create a new state manager starting at the configuration screen
    pub fn new() -> Self {
        Self {
            current_state: AppState::Config,
            should_quit: false,
            exit_code: None,
        }
    }

    /// Get the current application state
    pub fn current_state(&self) -> &AppState {
        &self.current_state
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag without recording an exit code.
    ///
    /// Used by the manual-close paths: the loop ends because no screens
    /// remain, and the process exits with the default success status.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Record a termination request and set the quit flag.
    ///
    /// Only the first recorded code wins; a second call is a no-op so the
    /// expiry path and a racing close can never both terminate.
    pub fn terminate(&mut self, code: u8) {
        if self.exit_code.is_none() {
            self.exit_code = Some(code);
        }
        self.should_quit = true;
    }

    /// Exit code to report: the recorded one, or success by default
    pub fn exit_code(&self) -> u8 {
        self.exit_code.unwrap_or(0)
    }

    /// Transition to a new state
    pub fn transition_to(&mut self, new_state: AppState) {
        self.current_state = new_state;
    }

    /// Convert keyboard event to navigation action
    pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
        match key.code {
            // Quit keys
            KeyCode::Char('q') | KeyCode::Char('Q') => NavigationAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                NavigationAction::Quit
            }

            // Navigation keys
            KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
            KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
            KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
            KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

            // Selection and confirmation
            KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,

            // Back/cancel
            KeyCode::Esc | KeyCode::Backspace => NavigationAction::Back,

            // Tab navigation
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    NavigationAction::Previous
                } else {
                    NavigationAction::Next
                }
            }

            _ => NavigationAction::None,
        }
    }
}

impl Default for StateManager {
    fn default() -> Self {
        Self::new()
    }
}
