//! Progress dialog shown while a backend call is outstanding

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Style},
    text::Span,
    Frame,
};

/// Render a non-interactive "please wait" overlay
pub fn render_progress_dialog(frame: &mut Frame, title: &str, message: &str) {
    let hint = vec![Span::styled(
        "Please wait...",
        Style::default().fg(Color::DarkGray),
    )];

    render_dialog(
        frame,
        DialogConfig {
            title,
            title_color: Color::Yellow,
            border_color: Color::Yellow,
            message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
