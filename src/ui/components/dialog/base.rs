//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub title_color: Color,
    pub border_color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint spans shown under the message
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let padding = 4u16; // 2 chars padding on each side
    let max_line_width = config.max_width.saturating_sub(padding + 2) as usize;

    let wrapped_lines = wrap_text(config.message, max_line_width);
    let line_count = wrapped_lines.len();

    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count()) as u16;
    let dialog_width = (content_width + padding + 2)
        .min(config.max_width)
        .min(area.width);

    // Height: title + blank + message lines + blank (if hint) + hint + borders
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let dialog_height = (2 + line_count as u16 + hint_lines + 2)
        .max(5)
        .min(area.height);

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrapped_lines.into_iter().map(Line::from));

    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Word-wrap text to at most `max_width` characters per line
///
/// Words longer than the width are kept whole on their own line.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_width = 0;
        for word in paragraph.split_whitespace() {
            let word_width = word.chars().count();
            if current_width + word_width + 1 > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
                current_width = 0;
            }
            if !current_line.is_empty() {
                current_line.push(' ');
                current_width += 1;
            }
            current_line.push_str(word);
            current_width += word_width;
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_counts_characters_not_bytes() {
        // 10 characters, 14 bytes
        let lines = wrap_text("ação ção é", 10);
        assert_eq!(lines, vec!["ação ção é"]);
    }

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap_text("um dois tres quatro", 8);
        assert_eq!(lines, vec!["um dois", "tres", "quatro"]);
    }

    #[test]
    fn test_wrap_keeps_blank_paragraphs() {
        let lines = wrap_text("a\n\nb", 10);
        assert_eq!(lines, vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
