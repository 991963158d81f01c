//! Membership form rendering, shared by both application forms

use super::field_renderer::{field_lines, FieldView};
use crate::app::App;
use crate::state::{FormController, SubmissionState};
use crate::ui::components::{render_button, render_confirmation_dialog, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Caption of the submit button while the request is in flight
pub const SENDING_LABEL: &str = "Enviando...";

/// Draw the active form with its submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app.state.active_form() else {
        return;
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", form.title()),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),                // Fields
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .horizontal_margin(1)
        .split(inner);

    let fields_area = chunks[0];
    let (lines, focus) = form_lines(
        form,
        app.state.active_form_field,
        app.state.active_item,
        fields_area.width as usize,
    );
    let offset = scroll_offset(focus, fields_area.height as usize);
    frame.render_widget(
        Paragraph::new(lines).scroll((offset as u16, 0)),
        fields_area,
    );

    let status = form.status();
    let caption = match status {
        SubmissionState::Submitting => SENDING_LABEL,
        _ => form.submit_label(),
    };
    let button_width = (caption.chars().count() as u16 + 6).min(chunks[1].width);
    let button_area = Rect {
        width: button_width,
        ..chunks[1]
    };
    render_button(
        frame,
        button_area,
        caption,
        app.state.on_submit_button(),
        status.is_editable(),
    );

    if status == SubmissionState::Submitted {
        render_confirmation_dialog(frame, form.confirmation());
    }
}

/// Rows of every field plus the row span of the focused one
fn form_lines(
    form: &dyn FormController,
    active_field: usize,
    active_item: usize,
    width: usize,
) -> (Vec<Line<'static>>, Option<(usize, usize)>) {
    let mut lines = Vec::new();
    let mut focus = None;

    for index in 0..form.field_count() {
        let Some(field) = form.field_at(index) else {
            continue;
        };
        let start = lines.len();
        lines.extend(field_lines(FieldView {
            field,
            error: form.error_at(index),
            is_active: index == active_field,
            active_item,
            width,
        }));
        if index == active_field {
            focus = Some((start, lines.len()));
        }
    }

    (lines, focus)
}

/// First row to show so the focused field is fully visible when it fits
fn scroll_offset(focus: Option<(usize, usize)>, height: usize) -> usize {
    match focus {
        Some((start, end)) if end > height => (end - height).min(start),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormEngine, SindicoForm};

    #[test]
    fn test_scroll_offset_keeps_focus_visible() {
        assert_eq!(scroll_offset(None, 10), 0);
        assert_eq!(scroll_offset(Some((2, 5)), 10), 0);
        assert_eq!(scroll_offset(Some((12, 15)), 10), 5);
        // taller than the viewport: show its start
        assert_eq!(scroll_offset(Some((12, 30)), 10), 12);
    }

    #[test]
    fn test_focus_spans_the_active_field() {
        let engine = FormEngine::<SindicoForm>::new();
        let (lines, focus) = form_lines(&engine, 1, 0, 60);
        // nome: label, value, blank
        assert_eq!(focus, Some((3, 6)));
        assert!(lines.len() > 6);
    }

    #[test]
    fn test_submit_button_has_no_field_focus() {
        let engine = FormEngine::<SindicoForm>::new();
        let (_, focus) = form_lines(&engine, 12, 0, 60);
        assert_eq!(focus, None);
    }
}
