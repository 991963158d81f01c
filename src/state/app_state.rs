//! Application state definitions

use super::forms::{EmpresaForm, FormController, FormEngine, SindicoForm, SubmissionState};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    SindicoForm,
    EmpresaForm,
}

impl View {
    /// Entries of the home menu, in display order
    pub const MENU: [View; 2] = [View::SindicoForm, View::EmpresaForm];

    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::SindicoForm | Self::EmpresaForm)
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            Self::Home => "Início",
            Self::SindicoForm => "Sou Síndico",
            Self::EmpresaForm => "Sou Empresa",
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub selected_index: usize,

    // Forms
    pub sindico: FormEngine<SindicoForm>,
    pub empresa: FormEngine<EmpresaForm>,

    // Form cursor: one slot per field plus the submit button
    pub active_form_field: usize,
    pub active_item: usize,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Form shown by the current view
    pub fn active_form(&self) -> Option<&dyn FormController> {
        match self.current_view {
            View::SindicoForm => Some(&self.sindico),
            View::EmpresaForm => Some(&self.empresa),
            View::Home => None,
        }
    }

    pub fn active_form_mut(&mut self) -> Option<&mut dyn FormController> {
        match self.current_view {
            View::SindicoForm => Some(&mut self.sindico),
            View::EmpresaForm => Some(&mut self.empresa),
            View::Home => None,
        }
    }

    /// Form belonging to `view`, whichever view is current
    pub fn form_for_mut(&mut self, view: View) -> Option<&mut dyn FormController> {
        match view {
            View::SindicoForm => Some(&mut self.sindico),
            View::EmpresaForm => Some(&mut self.empresa),
            View::Home => None,
        }
    }

    /// Open a form view. A form that was already submitted starts over.
    pub fn open_form(&mut self, view: View) {
        match view {
            View::SindicoForm if self.sindico.status() == SubmissionState::Submitted => {
                self.sindico = FormEngine::new();
            }
            View::EmpresaForm if self.empresa.status() == SubmissionState::Submitted => {
                self.empresa = FormEngine::new();
            }
            _ => {}
        }
        self.current_view = view;
        self.reset_form_cursor();
    }

    pub fn go_home(&mut self) {
        self.current_view = View::Home;
        self.reset_form_cursor();
    }

    fn reset_form_cursor(&mut self) {
        self.active_form_field = 0;
        self.active_item = 0;
    }

    /// Number of focusable slots: every field plus the submit button
    pub fn form_field_count(&self) -> usize {
        self.active_form()
            .map(|form| form.field_count() + 1)
            .unwrap_or(1)
    }

    /// Move to next form field
    pub fn next_form_field(&mut self) {
        self.active_form_field = (self.active_form_field + 1) % self.form_field_count();
        self.active_item = 0;
    }

    /// Move to previous form field
    pub fn prev_form_field(&mut self) {
        if self.active_form_field == 0 {
            self.active_form_field = self.form_field_count() - 1;
        } else {
            self.active_form_field -= 1;
        }
        self.active_item = 0;
    }

    pub fn on_submit_button(&self) -> bool {
        self.active_form_field + 1 == self.form_field_count()
    }

    /// Entries of the focused checklist, zero for any other field
    fn active_item_count(&self) -> usize {
        self.active_form()
            .and_then(|form| form.field_at(self.active_form_field))
            .map(|field| field.checked().len())
            .unwrap_or(0)
    }

    /// Move the checklist cursor down; returns false at the last entry
    pub fn next_item(&mut self) -> bool {
        if self.active_item + 1 < self.active_item_count() {
            self.active_item += 1;
            true
        } else {
            false
        }
    }

    /// Move the checklist cursor up; returns false at the first entry
    pub fn prev_item(&mut self) -> bool {
        if self.active_item > 0 && self.active_item_count() > 0 {
            self.active_item -= 1;
            true
        } else {
            false
        }
    }

    /// Handle character input in form
    pub fn form_input_char(&mut self, c: char) {
        let index = self.active_form_field;
        if let Some(form) = self.active_form_mut() {
            form.input_char(index, c);
        }
    }

    /// Handle backspace in form
    pub fn form_backspace(&mut self) {
        let index = self.active_form_field;
        if let Some(form) = self.active_form_mut() {
            form.backspace(index);
        }
    }

    pub fn form_cycle_option(&mut self, forward: bool) {
        let index = self.active_form_field;
        if let Some(form) = self.active_form_mut() {
            form.cycle_option(index, forward);
        }
    }

    /// Toggle the focused flag or checklist entry
    pub fn form_toggle(&mut self) {
        let (index, item) = (self.active_form_field, self.active_item);
        if let Some(form) = self.active_form_mut() {
            form.toggle(index, item);
        }
    }

    /// Move the cursor to the first field with an error, if any
    pub fn focus_first_error(&mut self) {
        if let Some(index) = self.active_form().and_then(|form| form.first_error_index()) {
            self.active_form_field = index;
            self.active_item = 0;
        }
    }
}
