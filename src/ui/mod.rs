//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::backend::VerificationServiceClient;
use crate::workflow::WorkflowStage;
use components::{render_confirm_dialog, render_otp_dialog, render_progress_dialog};
use ratatui::Frame;

/// Main draw function
pub fn draw<C: VerificationServiceClient>(frame: &mut Frame, app: &App<C>) {
    let workflow = &app.workflow;
    let stage = workflow.stage();

    let (banner_area, form_area) = layout::create_layout(frame.area(), workflow.status().is_some());
    if let Some(status) = workflow.status() {
        layout::draw_status_banner(frame, banner_area, status);
    }

    let is_editable = matches!(stage, WorkflowStage::Idle | WorkflowStage::Completed);
    forms::draw_lead_form(
        frame,
        form_area,
        &app.state.form,
        workflow.field_errors(),
        is_editable,
    );

    // Dialog overlays for the current stage
    match stage {
        WorkflowStage::ConfirmPending => {
            if let Some(challenge) = workflow.challenge() {
                render_confirm_dialog(frame, challenge, app.state.confirm_option);
            }
        }
        WorkflowStage::OtpEntryPending => {
            render_otp_dialog(frame, workflow.otp_code(), workflow.field_errors().otp)
        }
        WorkflowStage::AwaitingOtpRequest => {
            render_progress_dialog(frame, "Sending OTP", "Requesting a one-time passcode.")
        }
        WorkflowStage::Verifying => {
            render_progress_dialog(frame, "Verifying OTP", "Checking the code you entered.")
        }
        WorkflowStage::Submitting => {
            render_progress_dialog(frame, "Submitting", "Saving your details.")
        }
        WorkflowStage::Idle | WorkflowStage::Completed => {}
    }

    layout::draw_status_bar(frame, app);
}
