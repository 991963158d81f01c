//! Field rendering utilities for forms
//!
//! Fields are turned into pre-wrapped lines so the form view knows exactly
//! how many rows each one takes and can scroll the focused field into view.

use crate::state::{FieldValue, FormField};
use crate::ui::components::wrap_text;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const CURSOR: &str = "▌";
const INDENT: &str = "  ";

/// How a field is drawn in the current frame
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    pub field: &'a FormField,
    pub error: Option<&'a str>,
    pub is_active: bool,
    /// Highlighted checklist entry when the field is active
    pub active_item: usize,
    /// Columns available for text
    pub width: usize,
}

fn value_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn label_style(is_active: bool) -> Style {
    if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn wrapped(text: &str, width: usize, prefix: &str, style: Style) -> Vec<Line<'static>> {
    let body_width = width.saturating_sub(prefix.chars().count()).max(1);
    wrap_text(text, body_width)
        .into_iter()
        .map(|line| Line::from(Span::styled(format!("{prefix}{line}"), style)))
        .collect()
}

/// Split typed text into rows of `width` characters, keeping spaces as typed
///
/// Always returns at least one row. When the cursor is shown and the last row
/// is full, an empty row is added for it.
fn value_rows(text: &str, width: usize, with_cursor: bool) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut rows: Vec<String> = chars.chunks(width).map(|row| row.iter().collect()).collect();
    if rows.is_empty() || (with_cursor && chars.len() % width == 0) {
        rows.push(String::new());
    }
    rows
}

/// Build the lines of one field, followed by its error (if any) and a blank separator
pub fn field_lines(view: FieldView) -> Vec<Line<'static>> {
    let FieldView {
        field,
        error,
        is_active,
        active_item,
        width,
    } = view;
    let mut lines = Vec::new();

    match &field.value {
        FieldValue::Flag(on) => {
            let mark = if *on { "[x] " } else { "[ ] " };
            let mut flag_lines = wrapped(field.label, width, "    ", label_style(is_active));
            if let Some(first) = flag_lines.first_mut() {
                let text = first.spans[0].content.trim_start().to_string();
                *first = Line::from(vec![
                    Span::styled(mark, value_style(is_active)),
                    Span::styled(text, label_style(is_active)),
                ]);
            }
            lines.extend(flag_lines);
        }
        FieldValue::Checklist { labels, checked } => {
            lines.extend(wrapped(field.label, width, "", label_style(is_active)));
            for (index, (label, on)) in labels.iter().zip(checked).enumerate() {
                let focused = is_active && index == active_item;
                let marker = if focused { "› " } else { INDENT };
                let mark = if *on { "[x] " } else { "[ ] " };
                let style = if focused {
                    Style::default().fg(Color::Cyan)
                } else {
                    value_style(is_active)
                };
                let prefix = format!("{marker}{mark}");
                let hanging = " ".repeat(prefix.chars().count());
                for (row, line) in wrap_text(label, width.saturating_sub(hanging.len()).max(1))
                    .into_iter()
                    .enumerate()
                {
                    let lead = if row == 0 { prefix.clone() } else { hanging.clone() };
                    lines.push(Line::from(Span::styled(format!("{lead}{line}"), style)));
                }
            }
        }
        FieldValue::Text(text) => {
            lines.extend(wrapped(field.label, width, "", label_style(is_active)));
            let shown = if text.is_empty() && !is_active {
                "(vazio)".to_string()
            } else {
                text.clone()
            };
            let rows = value_rows(&shown, width.saturating_sub(INDENT.len()).max(1), is_active);
            let last = rows.len() - 1;
            for (row, content) in rows.into_iter().enumerate() {
                let mut spans = vec![Span::styled(
                    format!("{INDENT}{content}"),
                    value_style(is_active),
                )];
                if is_active && row == last {
                    spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
                }
                lines.push(Line::from(spans));
            }
        }
        FieldValue::Choice { .. } => {
            lines.extend(wrapped(field.label, width, "", label_style(is_active)));
            lines.push(Line::from(Span::styled(
                format!("{INDENT}{}", field.display_value()),
                value_style(is_active),
            )));
        }
    }

    if let Some(message) = error {
        lines.extend(wrapped(
            &format!("⚠ {message}"),
            width,
            INDENT,
            Style::default().fg(Color::Red),
        ));
    }

    lines.push(Line::from(""));
    lines
}
