//! "Verify Your Phone Number" confirmation dialog

use super::base::{centered_area, render_panel, title_line, wrap_text};
use crate::state::ConfirmOption;
use crate::workflow::OtpChallenge;
use chrono::Local;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

const DIALOG_WIDTH: u16 = 56;
const MESSAGE: &str =
    "An OTP has been sent to your phone number. Please enter the OTP to confirm your request.";

/// Render the prompt shown after an OTP has been requested
pub fn render_confirm_dialog(frame: &mut Frame, challenge: &OtpChallenge, selected: ConfirmOption) {
    let max_line_width = (DIALOG_WIDTH - 6) as usize;

    let mut content = vec![
        title_line("Verify Your Phone Number", Color::Cyan),
        Line::from(""),
    ];
    content.extend(wrap_text(MESSAGE, max_line_width).into_iter().map(Line::from));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("Sent to ", Style::default().fg(Color::DarkGray)),
        Span::styled(challenge.masked_phone(), Style::default().fg(Color::Cyan)),
        Span::styled(
            format!(" at {}", challenge.issued_at.with_timezone(&Local).format("%H:%M")),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    content.push(Line::from(""));

    // Options side by side with selection highlighting
    let mut options = Vec::new();
    for option in [ConfirmOption::GoBack, ConfirmOption::EnterOtp] {
        let is_selected = option == selected;
        let prefix = if is_selected { "▸ " } else { "  " };
        let style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        options.push(Span::styled(format!("{}{}   ", prefix, option.label()), style));
    }
    content.push(Line::from(options));

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("←→", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" go back", Style::default().fg(Color::DarkGray)),
    ]));

    let height = content.len() as u16 + 2;
    let area = centered_area(frame.area(), DIALOG_WIDTH, height);
    render_panel(frame, area, content, Color::Cyan);
}
