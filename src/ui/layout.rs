//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{SubmissionState, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const ORGANIZATION: &str = "ABRACS – Associação Brasileira de Condomínios e Síndicos";

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {ORGANIZATION} "),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· {}", app.state.current_view.menu_label()),
            Style::default().fg(Color::Gray),
        ),
    ]))
    .style(Style::default().bg(Color::Blue));
    frame.render_widget(header, area);
}

/// Footer text with the current year
pub fn copyright(year: i32) -> String {
    format!(" © {year} ABRACS. Todos os direitos reservados. ")
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.state.active_form().map(|form| form.status());

    let mut spans = vec![Span::styled(
        format!(" {} ", view_hints(app.state.current_view, status)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(bar, area);

    // Copyright on the right
    let footer = copyright(app.current_year());
    let footer_width = (footer.chars().count() as u16).min(area.width);
    let footer_area = Rect {
        x: area.x + area.width.saturating_sub(footer_width),
        width: footer_width,
        ..area
    };
    let footer_widget =
        Paragraph::new(footer).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(footer_widget, footer_area);
}

/// Get keyboard hints for the current view
fn view_hints(view: View, status: Option<SubmissionState>) -> String {
    if !view.is_form_view() {
        return "j/k:nav  Enter:abrir  q:sair".to_string();
    }
    match status {
        Some(SubmissionState::Submitting | SubmissionState::Validating) => {
            "Enviando solicitação...".to_string()
        }
        Some(SubmissionState::Submitted) => "Enter:início".to_string(),
        _ => format!(
            "Tab:próximo  ←/→:opção  Espaço:marcar  {SUBMIT_SHORTCUT}:enviar  Esc:voltar"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_uses_given_year() {
        assert_eq!(
            copyright(2031),
            " © 2031 ABRACS. Todos os direitos reservados. "
        );
    }

    #[test]
    fn test_hints_follow_submission_state() {
        assert!(view_hints(View::Home, None).contains("Enter:abrir"));
        assert!(view_hints(View::SindicoForm, Some(SubmissionState::Editing)).contains("Ctrl+S"));
        assert_eq!(
            view_hints(View::EmpresaForm, Some(SubmissionState::Submitted)),
            "Enter:início"
        );
    }
}
