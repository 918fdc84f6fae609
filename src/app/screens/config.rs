//! Configuration screen implementation
//!
//! Collects the target duration through three bounded H/M/S spinner fields
//! with real-time input validation.

use crate::util::format::format_field;
use crate::{DEFAULT_HOURS, DEFAULT_MINUTES, DEFAULT_SECONDS, MAX_HOURS, MAX_MINUTES, MAX_SECONDS};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Represents a single spinner field in the config screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DurationField {
    Hours,
    Minutes,
    Seconds,
}

impl DurationField {
    fn all() -> Vec<Self> {
        vec![Self::Hours, Self::Minutes, Self::Seconds]
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Hours => "Hours",
            Self::Minutes => "Minutes",
            Self::Seconds => "Seconds",
        }
    }

    fn max(&self) -> u16 {
        match self {
            Self::Hours => MAX_HOURS,
            Self::Minutes => MAX_MINUTES,
            Self::Seconds => MAX_SECONDS,
        }
    }
}

/// Actions the configuration screen hands back to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Start the countdown with the given total seconds (always positive)
    Start(u64),
    /// Tear down the screen and end the application
    Quit,
}

/// Configuration screen component
pub struct ConfigScreen {
    fields: Vec<DurationField>,
    hours: u16,
    minutes: u16,
    seconds: u16,
    selected_field_index: usize,
    validation_error: Option<&'static str>,
}

impl ConfigScreen {
    /// Create a new config screen with the default one-minute duration
    pub fn new() -> Self {
        Self {
            fields: DurationField::all(),
            hours: DEFAULT_HOURS,
            minutes: DEFAULT_MINUTES,
            seconds: DEFAULT_SECONDS,
            selected_field_index: 0,
            validation_error: None,
        }
    }

    /// Total configured duration in seconds
    pub fn total_seconds(&self) -> u64 {
        self.hours as u64 * 3600 + self.minutes as u64 * 60 + self.seconds as u64
    }

    /// Check whether the validation warning is currently showing
    pub fn has_validation_error(&self) -> bool {
        self.validation_error.is_some()
    }

    /// Handle key events for the config screen
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<ConfigAction> {
        // The warning is modal: any key dismisses it, nothing else happens
        if self.validation_error.is_some() {
            self.validation_error = None;
            return None;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.step_up(),
            KeyCode::Down | KeyCode::Char('j') => self.step_down(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.select_previous_field(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.select_next_field(),
            KeyCode::Enter => return self.confirm(),
            KeyCode::Esc => return Some(ConfigAction::Quit),
            _ => {}
        }
        None
    }

    /// Confirm action: validate the total and start or warn
    fn confirm(&mut self) -> Option<ConfigAction> {
        let total = self.total_seconds();
        if total == 0 {
            self.validation_error = Some("Set a valid time.");
            return None;
        }
        Some(ConfigAction::Start(total))
    }

    fn step_up(&mut self) {
        let field = self.fields[self.selected_field_index];
        let value = self.field_value_mut(field);
        if *value < field.max() {
            *value += 1;
        }
    }

    fn step_down(&mut self) {
        let field = self.fields[self.selected_field_index];
        let value = self.field_value_mut(field);
        if *value > 0 {
            *value -= 1;
        }
    }

    fn select_previous_field(&mut self) {
        if self.selected_field_index > 0 {
            self.selected_field_index -= 1;
        }
    }

    fn select_next_field(&mut self) {
        if self.selected_field_index < self.fields.len() - 1 {
            self.selected_field_index += 1;
        }
    }

    fn field_value_mut(&mut self, field: DurationField) -> &mut u16 {
        match field {
            DurationField::Hours => &mut self.hours,
            DurationField::Minutes => &mut self.minutes,
            DurationField::Seconds => &mut self.seconds,
        }
    }

    fn field_value(&self, field: DurationField) -> u16 {
        match field {
            DurationField::Hours => self.hours,
            DurationField::Minutes => self.minutes,
            DurationField::Seconds => self.seconds,
        }
    }

    /// Render the config screen
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Spinner fields
                Constraint::Length(3), // Help text
            ])
            .split(area);

        self.render_title(frame, chunks[0]);
        self.render_fields(frame, chunks[1]);
        self.render_help(frame, chunks[2]);

        if let Some(message) = self.validation_error {
            self.render_warning(frame, area, message);
        }
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new("Countdown Timer Setup")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, area);
    }

    fn render_fields(&self, frame: &mut Frame, area: Rect) {
        // Three fixed-width spinner boxes on one centered row
        let row = centered_rect(3 * 11, 4, area);
        let constraints: Vec<Constraint> =
            self.fields.iter().map(|_| Constraint::Length(11)).collect();
        let field_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(row);

        for (i, field) in self.fields.iter().enumerate() {
            let style = if i == self.selected_field_index {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .title(field.title())
                .border_style(style);
            let value = Paragraph::new(format_field(self.field_value(*field)))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(value, field_chunks[i]);
        }
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let help_text = "↑↓: Adjust | ←→/Tab: Field | Enter: Start | Esc: Quit";
        let help = Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, area);
    }

    fn render_warning(&self, frame: &mut Frame, area: Rect, message: &str) {
        let popup_area = centered_rect(40, 5, area);
        let text = vec![
            Line::from(message),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        let warning = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Input Error")
                .border_style(Style::default().fg(Color::Yellow)),
        );

        frame.render_widget(Clear, popup_area);
        frame.render_widget(warning, popup_area);
    }
}

impl Default for ConfigScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Rect of the given width and height centered inside `r`, clamped to fit
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + (r.width - width) / 2;
    let y = r.y + (r.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};

    #[test]
    fn test_defaults_total_one_minute() {
        let screen = ConfigScreen::new();
        assert_eq!(screen.total_seconds(), 60);
    }

    #[test]
    fn test_field_navigation_clamps() {
        let mut screen = ConfigScreen::new();
        assert_eq!(screen.selected_field_index, 0);

        screen.handle_key_event(KeyEvent::from(KeyCode::Left));
        assert_eq!(screen.selected_field_index, 0);

        screen.handle_key_event(KeyEvent::from(KeyCode::Right));
        screen.handle_key_event(KeyEvent::from(KeyCode::Tab));
        assert_eq!(screen.selected_field_index, 2);

        screen.handle_key_event(KeyEvent::from(KeyCode::Right));
        assert_eq!(screen.selected_field_index, 2);
    }

    #[test]
    fn test_stepping_clamps_at_bounds() {
        let mut screen = ConfigScreen::new();

        // Hours stop at 23
        for _ in 0..30 {
            screen.handle_key_event(KeyEvent::from(KeyCode::Up));
        }
        assert_eq!(screen.hours, 23);

        // And at 0
        for _ in 0..30 {
            screen.handle_key_event(KeyEvent::from(KeyCode::Down));
        }
        assert_eq!(screen.hours, 0);
    }

    #[test]
    fn test_confirm_with_zero_total_warns() {
        let mut screen = ConfigScreen::new();
        // Zero out the default minute
        screen.handle_key_event(KeyEvent::from(KeyCode::Right));
        screen.handle_key_event(KeyEvent::from(KeyCode::Down));
        assert_eq!(screen.total_seconds(), 0);

        let action = screen.handle_key_event(KeyEvent::from(KeyCode::Enter));
        assert_eq!(action, None);
        assert!(screen.has_validation_error());

        // Dismissing the warning consumes the key and changes nothing
        let action = screen.handle_key_event(KeyEvent::from(KeyCode::Enter));
        assert_eq!(action, None);
        assert!(!screen.has_validation_error());
        assert_eq!(screen.total_seconds(), 0);
    }

    #[test]
    fn test_confirm_with_valid_total_starts() {
        let mut screen = ConfigScreen::new();
        let action = screen.handle_key_event(KeyEvent::from(KeyCode::Enter));
        assert_eq!(action, Some(ConfigAction::Start(60)));
    }

    #[test]
    fn test_escape_quits() {
        let mut screen = ConfigScreen::new();
        let action = screen.handle_key_event(KeyEvent::from(KeyCode::Esc));
        assert_eq!(action, Some(ConfigAction::Quit));
    }

    #[test]
    fn test_total_combines_all_fields() {
        let mut screen = ConfigScreen::new();
        screen.hours = 1;
        screen.minutes = 2;
        screen.seconds = 3;
        assert_eq!(screen.total_seconds(), 3723);
    }

    #[test]
    fn test_centered_rect_fits_small_areas() {
        let tiny = Rect::new(0, 0, 10, 3);
        let rect = centered_rect(40, 5, tiny);
        assert!(rect.width <= tiny.width);
        assert!(rect.height <= tiny.height);
    }
}
