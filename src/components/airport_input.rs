//! Airport field with an autocomplete drop-down
//!
//! The typed text is the field value; picking a suggestion replaces it with
//! "City (CODE)". The list is open while the user is typing and closes on
//! selection, Esc, or when focus leaves the field.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::dropdown_below;
use crate::model::airport::{filter_airports, Airport, AIRPORTS};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct AirportInput {
    label: &'static str,
    placeholder: &'static str,
    pub value: String,
    pub focused: bool,
    open: bool,
    highlighted: usize,
}

impl AirportInput {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            value: String::new(),
            focused: false,
            open: false,
            highlighted: 0,
        }
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.open = false;
        self.highlighted = 0;
    }

    /// Take focus; the list shows again for whatever is typed
    pub fn focus(&mut self) {
        self.focused = true;
        self.open = true;
        self.highlighted = 0;
    }

    pub fn suggestions(&self) -> Vec<&'static Airport> {
        filter_airports(&self.value, &AIRPORTS)
    }

    /// Whether the drop-down is showing
    pub fn is_open(&self) -> bool {
        self.open && !self.suggestions().is_empty()
    }

    #[cfg(test)]
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    fn select(&mut self, index: usize) {
        if let Some(airport) = self.suggestions().get(index) {
            self.value = airport.display_value();
            self.open = false;
            self.highlighted = 0;
        }
    }

    /// Render the suggestion list below `anchor`. Call after the rest of the
    /// form so it overlaps neighbouring fields.
    pub fn draw_dropdown(&self, frame: &mut Frame, anchor: Rect, bounds: Rect) {
        if !self.is_open() {
            return;
        }
        let suggestions = self.suggestions();
        let area = dropdown_below(
            anchor,
            bounds,
            anchor.width.max(44),
            suggestions.len() as u16 + 2,
        );
        if area.height < 3 {
            return;
        }

        let items: Vec<ListItem> = suggestions
            .iter()
            .map(|airport| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {:<4}", airport.code),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{}, {}", airport.city, airport.country),
                        Style::default().fg(Color::White),
                    ),
                    Span::styled(
                        format!("  {}", airport.name),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White));

        let mut state = ListState::default().with_selected(Some(self.highlighted));
        frame.render_widget(Clear, area);
        frame.render_stateful_widget(list, area, &mut state);
    }
}

impl Component for AirportInput {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.clear();
                self.open = false;
                self.highlighted = 0;
                None
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.push(c);
                self.open = true;
                self.highlighted = 0;
                None
            }
            KeyCode::Backspace => {
                self.value.pop();
                self.open = true;
                self.highlighted = 0;
                None
            }
            KeyCode::Down => {
                if self.is_open() {
                    let last = self.suggestions().len().saturating_sub(1);
                    self.highlighted = (self.highlighted + 1).min(last);
                } else {
                    self.open = true;
                }
                None
            }
            KeyCode::Up => {
                self.highlighted = self.highlighted.saturating_sub(1);
                None
            }
            KeyCode::Enter => {
                if self.is_open() {
                    self.select(self.highlighted);
                    None
                } else {
                    Some(Action::FocusNext)
                }
            }
            KeyCode::Esc => {
                self.open = false;
                None
            }
            _ => None,
        };
        Ok(action)
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

        let content = if self.value.is_empty() && !self.focused {
            Line::from(Span::styled(
                self.placeholder,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let mut spans = vec![
                Span::styled("✈ ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    self.value.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ];
            if self.focused {
                spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
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
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(input: &mut AirportInput, text: &str) {
        for c in text.chars() {
            input.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_typing_opens_suggestions() {
        let mut input = AirportInput::new("Flying From", "City or Airport");
        input.focus();
        type_text(&mut input, "lon");
        assert!(input.is_open());
        assert_eq!(input.suggestions()[0].code, "LHR");
    }

    #[test]
    fn test_enter_selects_highlighted() {
        let mut input = AirportInput::new("Flying To", "Destination");
        input.focus();
        type_text(&mut input, "usa");
        input.handle_key_event(key(KeyCode::Down)).unwrap();
        assert_eq!(input.highlighted(), 1);

        let action = input.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(action, None);
        assert_eq!(input.value, "Los Angeles (LAX)");
        assert!(!input.is_open());
    }

    #[test]
    fn test_free_text_is_kept() {
        let mut input = AirportInput::new("Flying To", "Destination");
        input.focus();
        type_text(&mut input, "Nowhere Special");
        assert!(!input.is_open());
        assert_eq!(
            input.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::FocusNext)
        );
        assert_eq!(input.value, "Nowhere Special");
    }

    #[test]
    fn test_blur_and_esc_close_list() {
        let mut input = AirportInput::new("Flying From", "City or Airport");
        input.focus();
        type_text(&mut input, "par");
        assert!(input.is_open());
        input.handle_key_event(key(KeyCode::Esc)).unwrap();
        assert!(!input.is_open());

        input.handle_key_event(key(KeyCode::Char('i'))).unwrap();
        assert!(input.is_open());
        input.blur();
        assert!(!input.is_open());
        assert!(!input.focused);
    }

    #[test]
    fn test_highlight_is_clamped() {
        let mut input = AirportInput::new("Flying From", "City or Airport");
        input.focus();
        type_text(&mut input, "dubai");
        for _ in 0..5 {
            input.handle_key_event(key(KeyCode::Down)).unwrap();
        }
        assert_eq!(input.highlighted(), input.suggestions().len() - 1);
    }

    #[test]
    fn test_ctrl_u_clears_value() {
        let mut input = AirportInput::new("Flying From", "City or Airport");
        input.focus();
        type_text(&mut input, "lon");
        input
            .handle_key_event(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(input.value, "");
        assert!(!input.is_open());
    }
}
