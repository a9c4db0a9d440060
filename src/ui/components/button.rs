//! Submit button component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// How the button should look this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Cursor is on the button
    Focused,
    Normal,
    /// The form is locked while the workflow runs
    Disabled,
}

impl ButtonState {
    pub fn new(is_focused: bool, is_enabled: bool) -> Self {
        match (is_enabled, is_focused) {
            (false, _) => Self::Disabled,
            (true, true) => Self::Focused,
            (true, false) => Self::Normal,
        }
    }

    fn styles(self) -> (Style, Style) {
        match self {
            Self::Focused => (
                Style::default().fg(Color::Green),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Self::Normal => (
                Style::default().fg(Color::Green),
                Style::default().fg(Color::Green),
            ),
            Self::Disabled => (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
            ),
        }
    }
}

/// Render a bordered, centered-label button
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, state: ButtonState) {
    let (border_style, text_style) = state.styles();

    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );

    frame.render_widget(button, area);
}
