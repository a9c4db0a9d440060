//! Application state and core logic

use crate::backend::{HttpVerificationClient, VerificationServiceClient};
use crate::config::LeadConfig;
use crate::state::{AppState, ConfirmOption, Form, LeadField};
use crate::workflow::{VerificationWorkflow, WorkflowError, WorkflowStage};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App<C = HttpVerificationClient> {
    /// Form and dialog state
    pub state: AppState,
    /// Phone verification workflow
    pub workflow: VerificationWorkflow<C>,
    /// Whether the app should quit
    quit: bool,
}

impl App<HttpVerificationClient> {
    /// Create a new App talking to the configured backend
    pub fn new(config: &LeadConfig) -> Result<Self> {
        let timeout = config.call_timeout();
        let client = HttpVerificationClient::new(config.backend_url(), timeout)?;
        tracing::info!(backend = client.base_url(), ?timeout, "verification backend configured");
        Ok(Self::with_workflow(VerificationWorkflow::with_timeout(
            client, timeout,
        )))
    }
}

impl<C: VerificationServiceClient> App<C> {
    pub fn with_workflow(workflow: VerificationWorkflow<C>) -> Self {
        Self {
            state: AppState::default(),
            workflow,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Returns true while a backend call is outstanding
    pub fn is_busy(&self) -> bool {
        self.workflow.has_pending_call()
    }

    /// Run the outstanding backend step, if any
    pub async fn drive(&mut self) -> bool {
        let ran = self.workflow.run_pending(&mut self.state.form.fields).await;
        if ran {
            match self.workflow.stage() {
                WorkflowStage::ConfirmPending => self.state.confirm_option = ConfirmOption::default(),
                WorkflowStage::Completed => self.state.form.clear(),
                _ => {}
            }
        }
        ran
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.is_busy() {
            tracing::debug!(?key, "key ignored while a backend call is outstanding");
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        match self.workflow.stage() {
            WorkflowStage::ConfirmPending => self.handle_confirm_key(key),
            WorkflowStage::OtpEntryPending => self.handle_otp_key(key),
            WorkflowStage::Idle | WorkflowStage::Completed => self.handle_form_key(key),
            _ => {}
        }
    }

    /// Handle keys while editing the form
    fn handle_form_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        let active = form.active;

        match key.code {
            // Keyboard shortcut (works from any row)
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) =>
            {
                self.submit()
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Right if active.is_choice() => form.cycle_choice(true),
            KeyCode::Left if active.is_choice() => form.cycle_choice(false),
            KeyCode::Enter if form.is_submit_row_active() => self.submit(),
            KeyCode::Enter => form.next_field(),
            KeyCode::Char(' ') if active.is_choice() => form.cycle_choice(true),
            KeyCode::Char(c) if active.is_text() && is_plain(&key) => form.input_char(c),
            KeyCode::Backspace if active.is_text() => form.backspace(),
            _ => {}
        }
    }

    /// Handle keys in the "Verify Your Phone Number" dialog
    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.state.confirm_option.toggle()
            }
            KeyCode::Enter => match self.state.confirm_option {
                ConfirmOption::EnterOtp => {
                    self.workflow.confirm_proceed();
                }
                ConfirmOption::GoBack => {
                    self.workflow.confirm_cancel();
                }
            },
            KeyCode::Esc => {
                self.workflow.confirm_cancel();
            }
            _ => {}
        }
    }

    /// Handle keys in the "Enter OTP" dialog
    fn handle_otp_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !c.is_control() && is_plain(&key) => {
                self.workflow.push_otp_char(c);
            }
            KeyCode::Backspace => {
                self.workflow.pop_otp_char();
            }
            KeyCode::Enter => {
                self.workflow.verify_otp();
            }
            KeyCode::Esc => {
                self.workflow.cancel_otp();
            }
            _ => {}
        }
    }

    /// Handle bracketed paste: fills the OTP field or the active text row
    pub fn handle_paste(&mut self, text: &str) {
        if self.is_busy() {
            return;
        }
        let text = text.trim();
        match self.workflow.stage() {
            WorkflowStage::OtpEntryPending => {
                self.workflow.enter_otp(text);
            }
            WorkflowStage::Idle | WorkflowStage::Completed if self.state.form.active.is_text() => {
                text.chars()
                    .filter(|c| !c.is_control())
                    .for_each(|c| self.state.form.input_char(c));
            }
            _ => {}
        }
    }

    fn submit(&mut self) {
        self.workflow.submit(&self.state.form.fields);
        let rejected = self.workflow.status().and_then(|s| s.error);
        if rejected == Some(WorkflowError::InvalidPhone) {
            self.state.form.active = LeadField::Phone;
        }
    }
}

/// Returns true when no command modifier is held, so the key types text
fn is_plain(key: &KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | crate::platform::SUBMIT_MODIFIER)
}
