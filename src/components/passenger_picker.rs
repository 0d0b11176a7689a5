//! Travelers drop-down with adult and child counters

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::dropdown_below;
use crate::model::search::{PassengerKind, Passengers};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub struct PassengerPicker {
    pub passengers: Passengers,
    pub focused: bool,
    open: bool,
    row: PassengerKind,
}

impl PassengerPicker {
    pub fn new(passengers: Passengers) -> Self {
        Self {
            passengers,
            focused: false,
            open: false,
            row: PassengerKind::Adult,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    #[cfg(test)]
    pub fn row(&self) -> PassengerKind {
        self.row
    }

    pub fn draw_dropdown(&self, frame: &mut Frame, anchor: Rect, bounds: Rect) {
        if !self.open {
            return;
        }
        let area = dropdown_below(anchor, bounds, 34, 6);
        if area.height < 4 {
            return;
        }

        let counter_line = |kind: PassengerKind, title: &'static str, hint: &'static str, count: u32| {
            let selected = self.row == kind;
            let title_style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(if selected { "▸ " } else { "  " }, title_style),
                Span::styled(format!("{:<9}", title), title_style),
                Span::styled(format!("{:<9}", hint), Style::default().fg(Color::DarkGray)),
                Span::styled("[-] ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("{:>2}", count),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(" [+]", Style::default().fg(Color::Cyan)),
            ])
        };

        let lines = vec![
            counter_line(
                PassengerKind::Adult,
                "Adults",
                "Age 12+",
                self.passengers.adults,
            ),
            Line::from(""),
            counter_line(
                PassengerKind::Child,
                "Children",
                "Age 0-11",
                self.passengers.children,
            ),
            Line::from(Span::styled(
                "  ←/→ adjust  Enter done",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }
}

impl Component for PassengerPicker {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if !self.open {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down) {
                self.open = true;
                self.row = PassengerKind::Adult;
            }
            return Ok(None);
        }

        match key.code {
            KeyCode::Up | KeyCode::Down => {
                self.row = match self.row {
                    PassengerKind::Adult => PassengerKind::Child,
                    PassengerKind::Child => PassengerKind::Adult,
                };
            }
            KeyCode::Left | KeyCode::Char('-') => self.passengers.adjust(self.row, -1),
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                self.passengers.adjust(self.row, 1)
            }
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => self.open = false,
            _ => {}
        }
        Ok(None)
    }

    fn blur(&mut self) {
        self.focused = false;
        self.open = false;
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let border = if self.focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        let arrow = if self.open { "▴" } else { "▾" };

        let paragraph = Paragraph::new(Line::from(vec![
            Span::styled("◉ ", Style::default().fg(Color::Cyan)),
            Span::styled(
                self.passengers.label(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {}", arrow)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(" Travelers "),
        );
        frame.render_widget(paragraph, area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_counters_respect_minimums() {
        let mut picker = PassengerPicker::new(Passengers::default());
        picker.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert!(picker.is_open());

        picker.handle_key_event(key(KeyCode::Left)).unwrap();
        assert_eq!(picker.passengers.adults, 1);

        picker.handle_key_event(key(KeyCode::Down)).unwrap();
        assert_eq!(picker.row(), PassengerKind::Child);
        picker.handle_key_event(key(KeyCode::Left)).unwrap();
        assert_eq!(picker.passengers.children, 0);
        picker.handle_key_event(key(KeyCode::Right)).unwrap();
        picker.handle_key_event(key(KeyCode::Right)).unwrap();
        assert_eq!(picker.passengers.children, 2);
        assert_eq!(picker.passengers.label(), "3 Travelers");
    }

    #[test]
    fn test_blur_closes_dropdown() {
        let mut picker = PassengerPicker::new(Passengers::default());
        picker.focused = true;
        picker.handle_key_event(key(KeyCode::Char(' '))).unwrap();
        assert!(picker.is_open());
        picker.blur();
        assert!(!picker.is_open());
    }
}
