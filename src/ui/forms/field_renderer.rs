//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// How a form row should be drawn
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub is_active: bool,
    pub is_choice: bool,
    /// Helper text shown under the field when it is in error
    pub error: Option<&'a str>,
}

/// Draw one bordered form field
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldView) {
    let accent = match (field.error.is_some(), field.is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };
    let value_style = if field.is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let placeholder = if field.is_choice {
        "(select)"
    } else {
        "(empty)"
    };
    let display_value = if field.value.is_empty() && !field.is_active {
        placeholder
    } else {
        field.value
    };

    let spans = if field.is_choice {
        let arrow_style = if field.is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        vec![
            Span::styled("◂ ", arrow_style),
            Span::styled(display_value, value_style),
            Span::styled(" ▸", arrow_style),
        ]
    } else {
        let cursor = if field.is_active { "▌" } else { "" };
        vec![
            Span::styled(display_value, value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    if let Some(error) = field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw a dimmed help line
pub fn draw_help_text(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)));
    frame.render_widget(help, area);
}
