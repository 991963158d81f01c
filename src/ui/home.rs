//! Home menu: pick which application to fill in

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const INTRO: &str = "A maturidade do setor depende de seus protagonistas. Síndicos, \
condomínios e empresas que desejam atuar sob critérios claros encontram na ABRACS um \
ambiente estruturado de pertencimento e evolução.";

const MENU_WIDTH: u16 = 30;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Associe-se ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(5)];
    constraints.extend(View::MENU.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    let intro = Paragraph::new(INTRO)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(intro, chunks[0]);

    for (idx, view) in View::MENU.iter().enumerate() {
        let row = chunks[idx + 1];
        let width = MENU_WIDTH.min(row.width);
        let button_area = Rect {
            x: row.x + (row.width - width) / 2,
            width,
            ..row
        };
        render_button(
            frame,
            button_area,
            view.menu_label(),
            app.state.selected_index == idx,
            true,
        );
    }
}
