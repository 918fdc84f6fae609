//! Countdown screen implementation
//!
//! Displays the remaining time in a small box anchored to the bottom-right
//! corner of the terminal, fed by the application's one-second tick.

use crate::timer::{Countdown, Phase};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Inset between the box and the right/bottom frame edges, in cells
const RIGHT_INSET: u16 = 2;
const BOTTOM_INSET: u16 = 1;

/// Box dimensions: "HH:MM:SS" plus padding and borders
const BOX_WIDTH: u16 = 14;
const BOX_HEIGHT: u16 = 3;

/// Countdown screen component owning the timer state
#[derive(Debug)]
pub struct CountdownScreen {
    countdown: Countdown,
}

impl CountdownScreen {
    /// Create a countdown screen for a positive number of seconds
    pub fn new(initial_seconds: u64) -> Self {
        Self {
            countdown: Countdown::new(initial_seconds),
        }
    }

    /// Advance the countdown by one second and report the resulting phase
    pub fn tick(&mut self) -> Phase {
        self.countdown.tick()
    }

    /// User-initiated close while running
    pub fn close(&mut self) {
        self.countdown.close();
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.countdown.phase()
    }

    /// Seconds left on the clock
    pub fn remaining_seconds(&self) -> u64 {
        self.countdown.remaining_seconds()
    }

    /// Formatted remaining time
    pub fn display(&self) -> String {
        self.countdown.display()
    }

    /// Render the countdown box in the bottom-right corner
    pub fn render(&self, frame: &mut Frame) {
        let area = anchored_rect(frame.size());
        let time = Paragraph::new(self.display())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Remaining Time")
                    .border_style(Style::default().fg(Color::Cyan)),
            );
        frame.render_widget(time, area);
    }
}

/// Rect anchored to the bottom-right corner of `r` with a small inset,
/// clamped so the box stays inside the frame on tiny terminals
pub fn anchored_rect(r: Rect) -> Rect {
    let width = BOX_WIDTH.min(r.width);
    let height = BOX_HEIGHT.min(r.height);
    let x = (r.x + r.width)
        .saturating_sub(width + RIGHT_INSET)
        .max(r.x);
    let y = (r.y + r.height)
        .saturating_sub(height + BOTTOM_INSET)
        .max(r.y);
    Rect::new(x, y, width, height)
}
