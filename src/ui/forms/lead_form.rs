//! Lead form rendering

use super::field_renderer::{draw_field, draw_help_text, FieldView};
use crate::state::{LeadField, LeadForm, ValidationError};
use crate::ui::components::{render_button, ButtonState, BUTTON_HEIGHT};
use crate::workflow::FieldErrors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders},
    Frame,
};

const NOTE: &str = "Note – We use this information only to contact you for your query.";

/// Draw the form rows, the submit button and the privacy note
pub fn draw_lead_form(
    frame: &mut Frame,
    area: Rect,
    form: &LeadForm,
    errors: FieldErrors,
    is_editable: bool,
) {
    let block = Block::default()
        .title(Span::styled(
            " Form Detail & Content ",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = LeadField::ALL
        .iter()
        .filter(|f| **f != LeadField::Submit)
        .map(|_| Constraint::Length(3))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Length(2)); // Note
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    let phone_error = ValidationError::InvalidPhone.to_string();
    for (i, field) in LeadField::ALL.iter().enumerate() {
        let is_active = is_editable && form.active == *field;
        if *field == LeadField::Submit {
            let button_area = Rect {
                width: chunks[i].width.min(14),
                ..chunks[i]
            };
            render_button(
                frame,
                button_area,
                field.label(),
                ButtonState::new(is_active, is_editable),
            );
            continue;
        }

        let value = field.display_value(&form.fields);
        let error = (*field == LeadField::Phone && errors.phone).then_some(phone_error.as_str());
        draw_field(
            frame,
            chunks[i],
            FieldView {
                label: field.label(),
                value: &value,
                is_active,
                is_choice: field.is_choice(),
                error,
            },
        );
    }

    let note_index = LeadField::ALL.len();
    draw_help_text(frame, chunks[note_index], NOTE);
}
