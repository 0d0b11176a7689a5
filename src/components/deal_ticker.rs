//! Scrolling "LIVE DEALS" strip
//!
//! The board itself is refreshed by a scheduled task in the App; this
//! component only advances the scroll offset and renders.

use crate::action::Action;
use crate::component::Component;
use crate::model::deals::DealBoard;
use crate::model::pricing::format_price;
use anyhow::Result;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

const SEPARATOR: &str = "   ◆   ";

pub struct DealTicker {
    offset: usize,
}

impl Default for DealTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl DealTicker {
    pub fn new() -> Self {
        Self { offset: 0 }
    }

    #[cfg(test)]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The whole strip as styled segments, in board order
    fn segments(board: &DealBoard) -> Vec<(String, Style)> {
        let mut segments = Vec::new();
        for deal in &board.deals {
            segments.push((
                format!("{} ", deal.route),
                Style::default().fg(Color::White),
            ));
            segments.push((
                format_price(deal.price),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
            segments.push((
                format!(" {}", format_price(deal.market_price)),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT),
            ));
            segments.push((
                format!(" {} · {}", deal.trip_label, deal.expires),
                Style::default().fg(Color::Yellow),
            ));
            segments.push((SEPARATOR.to_string(), Style::default().fg(Color::Red)));
        }
        segments
    }

    /// Styled spans of `width` columns starting `offset` columns into the loop
    fn window(board: &DealBoard, offset: usize, width: usize) -> Vec<Span<'static>> {
        let segments = Self::segments(board);
        let total: usize = segments.iter().map(|(t, _)| t.width()).sum();
        if total == 0 || width == 0 {
            return Vec::new();
        }

        // Walk the looped strip character by character
        let chars: Vec<(char, Style)> = segments
            .iter()
            .flat_map(|(text, style)| text.chars().map(move |c| (c, *style)))
            .collect();
        let mut start = 0;
        let mut skipped = 0;
        let skip = offset % total;
        while skipped < skip {
            skipped += unicode_width::UnicodeWidthChar::width(chars[start].0).unwrap_or(0);
            start = (start + 1) % chars.len();
        }

        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut used = 0;
        let mut i = start;
        let mut current = String::new();
        let mut current_style = chars[i].1;
        while used < width {
            let (c, style) = chars[i];
            let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
            if used + w > width {
                break;
            }
            if style != current_style && !current.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut current), current_style));
            }
            current_style = style;
            current.push(c);
            used += w;
            i = (i + 1) % chars.len();
        }
        if !current.is_empty() {
            spans.push(Span::styled(current, current_style));
        }
        spans
    }

    pub fn draw_with_board(&self, frame: &mut Frame, area: Rect, board: &DealBoard) {
        let label = " LIVE DEALS ";
        let label_width = label.width() as u16;
        let mut spans = vec![
            Span::styled(
                label,
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ];
        let width = area.width.saturating_sub(label_width + 1) as usize;
        spans.extend(Self::window(board, self.offset, width));
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Component for DealTicker {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick {
            self.offset = self.offset.wrapping_add(1);
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // This needs the deal board, so we use draw_with_board
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn text_of(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_window_starts_with_first_route() {
        let board = DealBoard::seeded_with_rng(&mut StdRng::seed_from_u64(1));
        let text = text_of(&DealTicker::window(&board, 0, 20));
        assert_eq!(text, "NYC to London $349 $");
        assert_eq!(text.width(), 20);
    }

    #[test]
    fn test_window_scrolls_and_wraps() {
        let board = DealBoard::seeded_with_rng(&mut StdRng::seed_from_u64(1));
        let text = text_of(&DealTicker::window(&board, 4, 9));
        assert_eq!(text, "to London");

        let strip_width: usize = DealTicker::segments(&board)
            .iter()
            .map(|(t, _)| t.width())
            .sum();
        let wrapped = text_of(&DealTicker::window(&board, strip_width + 4, 9));
        assert_eq!(wrapped, "to London");
    }

    #[test]
    fn test_tick_advances_offset() {
        let mut ticker = DealTicker::new();
        ticker.update(Action::Tick).unwrap();
        ticker.update(Action::OpenHelp).unwrap();
        assert_eq!(ticker.offset(), 1);
    }
}
