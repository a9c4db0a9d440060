//! "Enter OTP" dialog

use super::base::{centered_area, render_panel, title_line};
use crate::workflow::WorkflowError;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    Frame,
};

const DIALOG_WIDTH: u16 = 44;

/// Render the OTP input dialog
///
/// `flagged` marks the field after a rejected or failed attempt.
pub fn render_otp_dialog(frame: &mut Frame, code: &str, flagged: bool) {
    let accent = if flagged { Color::Red } else { Color::Cyan };

    let mut content = vec![
        title_line("Enter OTP", Color::Cyan),
        Line::from(""),
        Line::from(vec![
            Span::styled("OTP: ", Style::default().fg(Color::DarkGray)),
            Span::styled(code, Style::default().fg(accent)),
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        ]),
    ];

    if flagged {
        content.push(Line::from(Span::styled(
            WorkflowError::IncorrectOtp.to_string(),
            Style::default().fg(Color::Red),
        )));
    } else {
        content.push(Line::from(""));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" verify OTP  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]));

    let height = content.len() as u16 + 2;
    let area = centered_area(frame.area(), DIALOG_WIDTH, height);
    render_panel(frame, area, content, accent);
}
