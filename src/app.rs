//! Application state and core logic

use crate::clock::{Clock, SystemClock};
use crate::config::AppConfig;
use crate::platform::SUBMIT_MODIFIER;
use crate::relay::{RelayClient, RelayClientTrait, Submission};
use crate::state::{AppState, SubmissionState, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Shown when submit is refused because some field failed validation
pub const FIX_ERRORS_MESSAGE: &str = "Verifique os campos destacados antes de enviar.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Relay receiving submitted forms
    relay: Box<dyn RelayClientTrait>,
    /// Source of the year shown in the footer
    clock: Box<dyn Clock>,
    /// Whether the app should quit
    quit: bool,
    /// Feedback line shown in the footer
    pub status_message: Option<String>,
    /// Submission accepted by a form, sent after the next draw
    pending: Option<(View, Submission)>,
}

impl App {
    /// Create a new App instance talking to the configured relay
    pub fn new(config: &AppConfig) -> Result<Self> {
        let relay = RelayClient::new(config.endpoint())?;
        tracing::info!(endpoint = relay.endpoint(), "Relay client ready");
        Ok(Self::with_parts(Box::new(relay), Box::new(SystemClock)))
    }

    pub fn with_parts(relay: Box<dyn RelayClientTrait>, clock: Box<dyn Clock>) -> Self {
        Self {
            state: AppState::default(),
            relay,
            clock,
            quit: false,
            status_message: None,
            pending: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn current_year(&self) -> i32 {
        self.clock.current_year()
    }

    pub fn has_pending_submission(&self) -> bool {
        self.pending.is_some()
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::Home => self.handle_home_key(key),
            View::SindicoForm | View::EmpresaForm => self.handle_form_key(key),
        }

        Ok(())
    }

    /// Handle keys in the home menu
    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.state.move_selection_down(View::MENU.len())
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.state.move_selection_up()
            }
            KeyCode::Enter => {
                if let Some(view) = View::MENU.get(self.state.selected_index) {
                    self.state.open_form(*view);
                }
            }
            _ => {}
        }
    }

    /// Handle keys in either membership form
    fn handle_form_key(&mut self, key: KeyEvent) {
        let status = self
            .state
            .active_form()
            .map(|form| form.status())
            .unwrap_or_default();

        match status {
            SubmissionState::Validating | SubmissionState::Submitting => {}
            SubmissionState::Submitted => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    self.state.go_home();
                }
            }
            SubmissionState::Editing => self.handle_editing_key(key),
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        let on_submit_button = self.state.on_submit_button();
        let on_text_field = self
            .state
            .active_form()
            .and_then(|form| form.field_at(self.state.active_form_field))
            .is_some_and(|field| field.is_text());

        match key.code {
            KeyCode::Tab => self.state.next_form_field(),
            KeyCode::BackTab => self.state.prev_form_field(),
            // Down/Up walk checklist entries first, then fields
            KeyCode::Down => {
                if !self.state.next_item() {
                    self.state.next_form_field();
                }
            }
            KeyCode::Up => {
                if !self.state.prev_item() {
                    self.state.prev_form_field();
                }
            }
            KeyCode::Char('s') if key.modifiers.contains(SUBMIT_MODIFIER) => {
                self.request_submit()
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.request_submit()
            }
            KeyCode::Esc => self.state.go_home(),
            KeyCode::Enter if on_submit_button => self.request_submit(),
            KeyCode::Enter => self.state.next_form_field(),
            KeyCode::Left => self.state.form_cycle_option(false),
            KeyCode::Right => self.state.form_cycle_option(true),
            KeyCode::Char(' ') if !on_text_field => self.state.form_toggle(),
            KeyCode::Char(c) if on_text_field => self.state.form_input_char(c),
            KeyCode::Backspace if on_text_field => self.state.form_backspace(),
            _ => {}
        }
    }

    /// Validate the active form and queue its submission when clean
    fn request_submit(&mut self) {
        let view = self.state.current_view;
        let Some(form) = self.state.active_form_mut() else {
            return;
        };

        match form.begin_submit() {
            Some(submission) => {
                self.pending = Some((view, submission));
            }
            None => {
                if form.status() == SubmissionState::Editing {
                    self.state.focus_first_error();
                    self.status_message = Some(FIX_ERRORS_MESSAGE.to_string());
                }
            }
        }
    }

    /// Send the queued submission, if any, and settle its form
    pub async fn process_pending_submission(&mut self) {
        let Some((view, submission)) = self.pending.take() else {
            return;
        };

        let result = self.relay.send(&submission).await;
        if let Some(form) = self.state.form_for_mut(view) {
            form.finish_submit(result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::relay::{MockRelayClientTrait, RelayError};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(relay: MockRelayClientTrait) -> App {
        App::with_parts(Box::new(relay), Box::new(FixedClock(2030)))
    }

    fn idle_relay() -> MockRelayClientTrait {
        let mut relay = MockRelayClientTrait::new();
        relay.expect_send().times(0);
        relay
    }

    async fn press(app: &mut App, code: KeyCode, times: usize) {
        for _ in 0..times {
            app.handle_key(key(code)).await.unwrap();
        }
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    /// Fill the síndico form field by field through the keyboard
    async fn fill_sindico(app: &mut App) {
        type_text(app, "Maria Silva").await;
        press(app, KeyCode::Tab, 1).await;
        type_text(app, "52998224725").await;
        press(app, KeyCode::Tab, 1).await;
        type_text(app, "81987654321").await;
        press(app, KeyCode::Tab, 1).await;
        type_text(app, "maria@exemplo.com").await;
        press(app, KeyCode::Tab, 1).await;
        type_text(app, "Recife").await;
        press(app, KeyCode::Tab, 1).await;
        press(app, KeyCode::Right, 16).await;
        press(app, KeyCode::Tab, 1).await;
        press(app, KeyCode::Right, 2).await;
        press(app, KeyCode::Tab, 1).await;
        press(app, KeyCode::Right, 3).await;
        press(app, KeyCode::Tab, 1).await;
        type_text(app, "3").await;
        press(app, KeyCode::Tab, 2).await;
        // compromissos: check every entry while walking down the list
        type_text(app, " ").await;
        for _ in 0..5 {
            press(app, KeyCode::Down, 1).await;
            type_text(app, " ").await;
        }
        press(app, KeyCode::Tab, 1).await;
        type_text(app, " ").await;
    }

    #[tokio::test]
    async fn test_home_menu_opens_forms() {
        let mut app = app_with(idle_relay());
        assert_eq!(app.state.current_view, View::Home);

        press(&mut app, KeyCode::Down, 1).await;
        press(&mut app, KeyCode::Enter, 1).await;
        assert_eq!(app.state.current_view, View::EmpresaForm);

        press(&mut app, KeyCode::Esc, 1).await;
        assert_eq!(app.state.current_view, View::Home);

        press(&mut app, KeyCode::Char('q'), 1).await;
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_typing_into_masked_field() {
        let mut app = app_with(idle_relay());
        press(&mut app, KeyCode::Down, 1).await;
        press(&mut app, KeyCode::Enter, 1).await;
        press(&mut app, KeyCode::Tab, 2).await;
        type_text(&mut app, "11222333000181").await;
        assert_eq!(app.state.empresa.record().cnpj.as_text(), "11.222.333/0001-81");

        // the dangling hyphen is dropped along with the last check digit
        press(&mut app, KeyCode::Backspace, 2).await;
        assert_eq!(app.state.empresa.record().cnpj.as_text(), "11.222.333/0001");
    }

    #[tokio::test]
    async fn test_space_toggles_flag_but_types_in_text() {
        let mut app = app_with(idle_relay());
        press(&mut app, KeyCode::Enter, 1).await;
        type_text(&mut app, "A B").await;
        assert_eq!(app.state.sindico.record().nome.as_text(), "A B");

        press(&mut app, KeyCode::BackTab, 2).await;
        type_text(&mut app, " ").await;
        assert!(app.state.sindico.record().lgpd.as_flag());
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let mut app = app_with(idle_relay());
        press(&mut app, KeyCode::Enter, 1).await;
        type_text(&mut app, "Maria").await;

        app.handle_key(ctrl('s')).await.unwrap();
        assert!(!app.has_pending_submission());
        assert_eq!(app.status_message.as_deref(), Some(FIX_ERRORS_MESSAGE));
        assert_eq!(app.state.active_form_field, 1);
        assert_eq!(
            app.state.active_form().unwrap().error_at(1),
            Some("CPF inválido")
        );

        app.process_pending_submission().await;
        assert_eq!(app.state.sindico.status(), SubmissionState::Editing);
    }

    #[tokio::test]
    async fn test_error_clears_when_field_is_edited() {
        let mut app = app_with(idle_relay());
        press(&mut app, KeyCode::Enter, 1).await;
        app.handle_key(ctrl('s')).await.unwrap();
        assert!(app.state.active_form().unwrap().error_at(0).is_some());

        type_text(&mut app, "M").await;
        assert!(app.state.active_form().unwrap().error_at(0).is_none());
        assert!(app.state.active_form().unwrap().error_at(1).is_some());
    }

    #[tokio::test]
    async fn test_keyboard_filled_form_is_sent_once() {
        let mut relay = MockRelayClientTrait::new();
        relay
            .expect_send()
            .withf(|submission| {
                submission.subject() == "Nova Solicitação de Associação - Síndico"
                    && submission.get("CPF") == Some("529.982.247-25")
                    && submission.get("Estado") == Some("PE")
                    && submission.get("Tempo de Atuação") == Some("3 a 5 anos")
            })
            .times(1)
            .returning(|_| Ok(()));
        let mut app = app_with(relay);

        press(&mut app, KeyCode::Enter, 1).await;
        fill_sindico(&mut app).await;

        // Enter walks to the submit button, then submits
        press(&mut app, KeyCode::Enter, 2).await;
        assert!(app.has_pending_submission());
        assert_eq!(app.state.sindico.status(), SubmissionState::Submitting);

        // input is ignored while the request is in flight
        app.handle_key(ctrl('s')).await.unwrap();
        press(&mut app, KeyCode::Esc, 1).await;
        assert_eq!(app.state.current_view, View::SindicoForm);

        app.process_pending_submission().await;
        assert_eq!(app.state.sindico.status(), SubmissionState::Submitted);
        assert!(!app.has_pending_submission());

        press(&mut app, KeyCode::Enter, 1).await;
        assert_eq!(app.state.current_view, View::Home);
    }

    #[tokio::test]
    async fn test_relay_failure_still_shows_confirmation() {
        let mut relay = MockRelayClientTrait::new();
        relay
            .expect_send()
            .times(1)
            .returning(|_| Err(RelayError::Status(reqwest::StatusCode::BAD_GATEWAY)));
        let mut app = app_with(relay);

        press(&mut app, KeyCode::Enter, 1).await;
        fill_sindico(&mut app).await;
        app.handle_key(ctrl('s')).await.unwrap();
        app.process_pending_submission().await;

        assert_eq!(app.state.sindico.status(), SubmissionState::Submitted);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_year_comes_from_clock() {
        let app = app_with(idle_relay());
        assert_eq!(app.current_year(), 2030);
    }
}
