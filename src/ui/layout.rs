//! Layout components (status banner, status bar)

use crate::app::App;
use crate::backend::VerificationServiceClient;
use crate::workflow::{ChallengeOutcome, Severity, WorkflowStage, WorkflowStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Widest the form column is allowed to grow
const MAX_CONTENT_WIDTH: u16 = 72;

/// Split the screen into (banner, form) inside a centered column,
/// reserving the bottom line for the status bar
pub fn create_layout(area: Rect, has_banner: bool) -> (Rect, Rect) {
    let width = area.width.min(MAX_CONTENT_WIDTH);
    let column = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        height: area.height.saturating_sub(1),
        ..area
    };

    let banner_height = if has_banner { 4 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height), // Status banner
            Constraint::Min(0),                // Form
        ])
        .split(column);

    (chunks[0], chunks[1])
}

/// Draw the workflow status as a coloured alert
pub fn draw_status_banner(frame: &mut Frame, area: Rect, status: &WorkflowStatus) {
    let (color, title) = match status.severity {
        Severity::Success => (Color::Green, " ✓ "),
        Severity::Warning => (Color::Yellow, " ! "),
    };

    let banner = Paragraph::new(status.message.as_str())
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(banner, area);
}

/// Draw status bar at the bottom
pub fn draw_status_bar<C: VerificationServiceClient>(frame: &mut Frame, app: &App<C>) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let stage = app.workflow.stage();
    let stage_color = if stage.is_call_outstanding() {
        Color::Yellow
    } else {
        Color::Cyan
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", stage.label()),
        Style::default().fg(stage_color),
    )];
    if let Some(outcome) = app.workflow.last_outcome() {
        spans.push(Span::styled(
            format!("| OTP {} ", outcome.label()),
            Style::default().fg(outcome_color(outcome)),
        ));
    }
    spans.push(Span::styled(
        get_stage_hints(stage),
        Style::default().fg(Color::Gray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}

fn outcome_color(outcome: ChallengeOutcome) -> Color {
    match outcome {
        ChallengeOutcome::Pending => Color::Gray,
        ChallengeOutcome::Verified => Color::Green,
        ChallengeOutcome::Rejected | ChallengeOutcome::ExpiredOrError => Color::Red,
    }
}

/// Key hints for the current stage
pub fn get_stage_hints(stage: WorkflowStage) -> String {
    match stage {
        WorkflowStage::Idle | WorkflowStage::Completed => format!(
            "Tab/↑↓: field | ←→: choose | Enter: next/submit | {}: submit | ^C: quit",
            crate::platform::SUBMIT_SHORTCUT
        ),
        WorkflowStage::ConfirmPending => "←→: select | Enter: confirm | Esc: go back".to_string(),
        WorkflowStage::OtpEntryPending => "type OTP | Enter: verify | Esc: cancel".to_string(),
        WorkflowStage::AwaitingOtpRequest | WorkflowStage::Verifying | WorkflowStage::Submitting => {
            "waiting for server...".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_centers_column() {
        let (banner, form) = create_layout(Rect::new(0, 0, 100, 30), true);
        assert_eq!(banner.width, MAX_CONTENT_WIDTH);
        assert_eq!(banner.x, 14);
        assert_eq!(banner.height, 4);
        assert_eq!(form.y, 4);
        assert_eq!(form.height, 25);
    }

    #[test]
    fn test_layout_without_banner() {
        let (banner, form) = create_layout(Rect::new(0, 0, 40, 20), false);
        assert_eq!(banner.height, 0);
        assert_eq!(form.width, 40);
        assert_eq!(form.height, 19);
    }

    #[test]
    fn test_busy_stages_share_hint() {
        assert_eq!(
            get_stage_hints(WorkflowStage::Verifying),
            get_stage_hints(WorkflowStage::Submitting)
        );
        assert!(get_stage_hints(WorkflowStage::OtpEntryPending).contains("Esc"));
    }

    #[test]
    fn test_failed_outcomes_are_red() {
        assert_eq!(outcome_color(ChallengeOutcome::Rejected), Color::Red);
        assert_eq!(outcome_color(ChallengeOutcome::ExpiredOrError), Color::Red);
        assert_eq!(outcome_color(ChallengeOutcome::Verified), Color::Green);
    }
}
