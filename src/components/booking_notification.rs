//! "Just Booked!" toast in the bottom-right corner

use crate::components::layout::bottom_right_popup;
use crate::model::catalog::BookingNotice;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const WIDTH: u16 = 44;
const HEIGHT: u16 = 6;

/// Body sentence of a notice
pub fn notice_text(notice: &BookingNotice) -> String {
    format!(
        "{} from {} saved ${} on a flight to {}.",
        notice.name, notice.from, notice.saved, notice.to
    )
}

pub fn draw_booking_notification(frame: &mut Frame, area: Rect, notice: &BookingNotice) {
    let popup = bottom_right_popup(area, WIDTH, HEIGHT);
    if popup.width < 20 || popup.height < 4 {
        return;
    }
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "✔ Just Booked!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (x to dismiss)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(notice_text(notice)),
        Line::from(Span::styled(
            "Verified 2 minutes ago",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_text() {
        let notice = BookingNotice {
            name: "James D.",
            from: "Chicago",
            to: "London",
            saved: 420,
        };
        assert_eq!(
            notice_text(&notice),
            "James D. from Chicago saved $420 on a flight to London."
        );
    }
}
