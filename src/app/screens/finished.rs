//! Completion notice implementation
//!
//! Shown after the countdown expires: a blocking informational dialog
//! centered on the terminal, dismissed by any acknowledging key.

use super::config::centered_rect;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Completion notice component
#[derive(Debug, Default)]
pub struct FinishedScreen;

impl FinishedScreen {
    /// Create the completion notice
    pub fn new() -> Self {
        Self
    }

    /// Render the notice centered on the frame
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.size();
        let popup_area = centered_rect(30, 6, area);
        let text = vec![
            Line::from(Span::styled(
                "Time's up!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to close",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        let notice = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Timer Finished")
                .border_style(Style::default().fg(Color::Green)),
        );

        frame.render_widget(Clear, popup_area);
        frame.render_widget(notice, popup_area);
    }
}
