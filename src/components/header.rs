//! Brand header with the booking hotline

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_header(frame: &mut Frame, area: Rect, hotline: &str) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(44)])
        .split(inner);

    let brand = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                " ✈ FLIGHTFARE",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "TECH",
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "   Global Travel Maker",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(brand, chunks[0]);

    let hotline = Paragraph::new(vec![
        Line::from(Span::styled(
            "Exclusive Unpublished Rates ",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("☎ {} ", hotline),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Right);
    frame.render_widget(hotline, chunks[1]);
}
