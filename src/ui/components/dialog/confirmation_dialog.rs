//! Dialog shown once a form has been submitted

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Style},
    text::Span,
    Frame,
};

pub const CONFIRMATION_TITLE: &str = "✓ Solicitação Enviada";

/// Render the submission confirmation with the form's message
pub fn render_confirmation_dialog(frame: &mut Frame, message: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title: CONFIRMATION_TITLE,
            title_color: Color::Green,
            border_color: Color::Green,
            message,
            hint: Some(vec![
                Span::styled("Enter", Style::default().fg(Color::Cyan)),
                Span::styled(" voltar ao início", Style::default().fg(Color::DarkGray)),
            ]),
            max_width: 64,
        },
    );
}
