//! Analyzing step: progress gauge and stage labels

use crate::components::centered_popup;
use crate::model::search::SearchCriteria;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Stage labels and the progress they light up past
pub const STAGES: [(&str, u8); 3] = [
    ("Scanning Routes", 20),
    ("Checking Deals", 50),
    ("Finalizing", 80),
];

/// Stages reached at `progress`
pub fn stages_reached(progress: u8) -> usize {
    STAGES.iter().filter(|(_, at)| progress > *at).count()
}

const SPINNER: [&str; 4] = ["✈   ", " ✈  ", "  ✈ ", "   ✈"];

pub fn draw_analyzing(frame: &mut Frame, area: Rect, progress: u8, criteria: &SearchCriteria) {
    let panel = centered_popup(area, 64, 14);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let spinner = SPINNER[(progress as usize / 5) % SPINNER.len()];
    frame.render_widget(
        Paragraph::new(Span::styled(
            spinner,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        chunks[1],
    );

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "Searching 500+ Airlines...",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(
                "Checking private consolidator fares for {} traveler(s)",
                criteria.passengers.total()
            ),
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[3]);

    let gauge_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(chunks[5])[1];
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::Black))
        .percent(progress.min(100) as u16)
        .label(format!("{}%", progress));
    frame.render_widget(gauge, gauge_area);

    let reached = stages_reached(progress);
    let mut spans = Vec::new();
    for (i, (label, _)) in STAGES.iter().enumerate() {
        let style = if i < reached {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(*label, style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        chunks[6],
    );
}
