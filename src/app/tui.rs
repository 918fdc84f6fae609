//! Terminal management system
//!
//! Handles crossterm backend initialization, screen management, keyboard
//! event processing, and the repeating one-second tick for the TUI
//! application.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, Stdout},
    time::{Duration, Instant},
};

use crate::TICK_INTERVAL;

/// Events produced by the terminal event pump
#[derive(Debug)]
pub enum TuiEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// One tick interval elapsed while ticking was started
    Tick,
}

/// Terminal wrapper that manages crossterm backend and screen state
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    last_tick: Instant,
    tick_rate: Duration,
    ticking: bool,
}

impl Tui {
    /// Create a new TUI instance with crossterm backend
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            last_tick: Instant::now(),
            tick_rate: TICK_INTERVAL,
            ticking: false,
        })
    }

    /// Initialize terminal with proper setup
    pub fn init(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Restore terminal to original state
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Start emitting `Tick` events, one per tick interval.
    ///
    /// The interval is measured from this call, so the first tick fires a
    /// full second after the countdown screen appears.
    pub fn start_ticking(&mut self) {
        self.last_tick = Instant::now();
        self.ticking = true;
    }

    /// Stop emitting `Tick` events. Idempotent.
    pub fn stop_ticking(&mut self) {
        self.ticking = false;
    }

    /// Check whether the repeating tick is currently started
    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Draw the UI using the provided render function
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Wait for the next event: a key press, or a tick when ticking.
    ///
    /// While ticking, the poll timeout tracks the next tick deadline so the
    /// tick fires on schedule even under a stream of key events. While
    /// stopped, a short timeout keeps the UI responsive to redraws.
    pub fn next_event(&mut self) -> io::Result<Option<TuiEvent>> {
        let timeout = if self.ticking {
            self.tick_rate
                .checked_sub(self.last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0))
        } else {
            Duration::from_millis(250)
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                return Ok(Some(TuiEvent::Key(key)));
            }
        }

        if self.ticking && self.last_tick.elapsed() >= self.tick_rate {
            self.last_tick = Instant::now();
            return Ok(Some(TuiEvent::Tick));
        }

        Ok(None)
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}
