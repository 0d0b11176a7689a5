//! Single-line text field used by the lead form

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct TextInput {
    label: &'static str,
    placeholder: &'static str,
    pub value: String,
    pub focused: bool,
}

impl TextInput {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            value: String::new(),
            focused: false,
        }
    }
}

impl Component for TextInput {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.clear();
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.push(c);
                None
            }
            KeyCode::Backspace => {
                self.value.pop();
                None
            }
            KeyCode::Enter => Some(Action::FocusNext),
            _ => None,
        };
        Ok(action)
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let border = if self.focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let content = if self.value.is_empty() && !self.focused {
            Line::from(Span::styled(
                self.placeholder,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let mut spans = vec![Span::styled(
                self.value.clone(),
                Style::default().fg(Color::White),
            )];
            if self.focused {
                spans.push(Span::styled(
                    "█",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            Line::from(spans)
        };

        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(format!(" {} ", self.label)),
        );
        frame.render_widget(paragraph, area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = TextInput::new("Full Name", "e.g. John Doe");
        for c in "Ann".chars() {
            input.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
        input.handle_key_event(key(KeyCode::Backspace)).unwrap();
        assert_eq!(input.value, "An");
    }

    #[test]
    fn test_enter_moves_focus() {
        let mut input = TextInput::new("Phone Number", "(555) 123-4567");
        assert_eq!(
            input.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::FocusNext)
        );
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = TextInput::new("Email Address", "john@example.com");
        input.value = "someone@example.com".to_string();
        input
            .handle_key_event(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(input.value.is_empty());
    }
}
