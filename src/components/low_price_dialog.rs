//! "Why are we so cheap?" explainer

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const REASONS: [(&str, &str); 2] = [
    (
        "Unpublished \"Blind\" Inventory",
        "Airlines have empty seats they can't sell publicly without angering full-price customers. We sell these seats privately.",
    ),
    (
        "Contracted Bulk Rates",
        "We pre-negotiate volume deals on major international routes (LHR, CDG, DXB, HND) that online search engines can't access.",
    ),
];

#[derive(Default)]
pub struct LowPriceDialog;

impl Component for LowPriceDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::F(2) => {
                Some(Action::CloseModal)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 64, 20);
        frame.render_widget(Clear, popup_area);

        let mut content = vec![
            Line::from(Span::styled(
                "FlightFareTech isn't a traditional travel agency. We are a wholesale consolidator.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
        ];
        for (title, body) in REASONS {
            content.push(Line::from(vec![
                Span::styled("✔ ", Style::default().fg(Color::Green)),
                Span::styled(
                    title,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            content.push(Line::from(Span::styled(
                format!("  {}", body),
                Style::default().fg(Color::Gray),
            )));
            content.push(Line::from(""));
        }
        content.push(Line::from(Span::styled(
            "*These rates are available via phone booking only to maintain airline compliance.",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " Got it, let's find a flight",
                Style::default().fg(Color::Blue),
            ),
        ]));

        let paragraph = Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue))
                    .title(" Why are we so cheap? ")
                    .title_style(
                        Style::default()
                            .fg(Color::Blue)
                            .add_modifier(Modifier::BOLD),
                    ),
            );
        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_enter_closes() {
        let mut dialog = LowPriceDialog;
        let action = dialog
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::CloseModal));
    }
}
