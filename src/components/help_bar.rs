//! Key hints along the bottom of the screen

use crate::model::wizard::WizardStep;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn hints(step: WizardStep) -> &'static [(&'static str, &'static str)] {
    match step {
        WizardStep::Search => &[
            ("Tab", "Next field"),
            ("Enter", "Open / select"),
            ("←/→", "Change"),
            ("F2", "Why so cheap?"),
            ("F1", "Help"),
            ("Ctrl+c", "Quit"),
        ],
        WizardStep::Analyzing => &[("q", "Quit"), ("F1", "Help")],
        WizardStep::LeadCapture => &[
            ("Tab", "Next field"),
            ("Enter", "Reveal price"),
            ("F1", "Help"),
            ("Ctrl+c", "Quit"),
        ],
        WizardStep::Success => &[("Enter", "New search"), ("F1", "Help"), ("q", "Quit")],
    }
}

pub fn draw_help_bar(frame: &mut Frame, area: Rect, step: WizardStep, notification_visible: bool) {
    let mut spans = Vec::new();
    for (key, label) in hints(step) {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!("{}  ", label)));
    }
    if notification_visible {
        spans.push(Span::styled(
            " Ctrl+x ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("Dismiss"));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", step))
            .title_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}
