//! Success step

use crate::components::centered_popup;
use crate::model::lead::LeadContact;
use crate::model::search::SearchCriteria;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn draw_success(frame: &mut Frame, area: Rect, lead: &LeadContact, criteria: &SearchCriteria) {
    let panel = centered_popup(area, 72, 16);
    frame.render_widget(Clear, panel);

    let highlight = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✔",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Itinerary Locked!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Thank you, "),
            Span::styled(lead.name.trim().to_string(), highlight),
            Span::raw(". We have temporarily reserved the "),
            Span::styled(criteria.cabin_class.name(), highlight),
            Span::raw(" rates for "),
            Span::styled(criteria.destination.clone(), highlight),
            Span::raw("."),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "☎  Incoming Call...   PRIORITY STATUS",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("A senior agent will call you within "),
            Span::styled(
                "2 minutes",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ),
            Span::raw(format!(" at {} to finalize the discount.", lead.phone.trim())),
        ]),
        Line::from(Span::styled(
            "Please keep your line open to secure this price.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Gray)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Start New Search", Style::default().fg(Color::Gray)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(paragraph, panel);
}
