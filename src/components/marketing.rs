//! Marketing sections below the search form
//!
//! Destinations, testimonials, trust badges and the long-form copy, shown in
//! three columns when the terminal has room for them.

use crate::model::catalog::{DISCLAIMER, SEO_SECTIONS, TESTIMONIALS, TOP_DESTINATIONS, TRUST_BADGES};
use crate::model::pricing::format_price;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn section_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", title))
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
}

/// Star rating, e.g. "★★★★☆"
pub fn stars(rating: u8) -> String {
    let filled = rating.min(5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

fn destination_lines() -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = TOP_DESTINATIONS
        .iter()
        .map(|d| {
            Line::from(vec![
                Span::styled(
                    format!("{:<10}", d.city),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:<16}", d.country), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    format!("from {}", format_price(d.price)),
                    Style::default().fg(Color::Green),
                ),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(
        TRUST_BADGES
            .iter()
            .flat_map(|badge| {
                [
                    Span::styled("✔ ", Style::default().fg(Color::Green)),
                    Span::styled(format!("{}  ", badge), Style::default().fg(Color::Gray)),
                ]
            })
            .collect::<Vec<_>>(),
    ));
    lines
}

fn testimonial_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for t in TESTIMONIALS.iter() {
        lines.push(Line::from(vec![
            Span::styled(stars(t.rating), Style::default().fg(Color::Yellow)),
            Span::styled(
                format!(" {}", t.name),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" · {}", t.route), Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("\"{}\"", t.text),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    lines
}

fn faq_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (title, body) in SEO_SECTIONS.iter() {
        lines.push(Line::from(Span::styled(
            *title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(*body, Style::default().fg(Color::Gray))));
    }
    lines.push(Line::from(Span::styled(
        DISCLAIMER,
        Style::default().fg(Color::DarkGray),
    )));
    lines
}

pub fn draw_marketing(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(35),
            Constraint::Percentage(35),
        ])
        .spacing(2)
        .split(area);

    frame.render_widget(
        Paragraph::new(destination_lines())
            .wrap(Wrap { trim: true })
            .block(section_block("Top Destinations")),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(testimonial_lines())
            .wrap(Wrap { trim: true })
            .block(section_block("Trusted by Travelers")),
        columns[1],
    );
    frame.render_widget(
        Paragraph::new(faq_lines())
            .wrap(Wrap { trim: true })
            .block(section_block("Questions")),
        columns[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_stars() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn test_renders_section_titles() {
        let mut terminal = Terminal::new(TestBackend::new(160, 12)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw_marketing(frame, area);
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Top Destinations"));
        assert!(text.contains("Trusted by Travelers"));
    }
}
