//! Calendar date picker
//!
//! Closed, it shows the chosen date. Open, it shows a month grid with a
//! keyboard cursor. Days before the minimum (today when unset) are dimmed and
//! cannot be picked.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::dropdown_below;
use crate::model::calendar::{is_selectable, step_clamped, GridCell, MonthView, WEEKDAY_HEADERS};
use crate::model::search::{display_date, format_date};
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const CALENDAR_WIDTH: u16 = 24;
const CALENDAR_HEIGHT: u16 = 11;

pub struct DatePicker {
    label: &'static str,
    pub value: Option<NaiveDate>,
    min: Option<NaiveDate>,
    today: NaiveDate,
    pub disabled: bool,
    pub focused: bool,
    open: bool,
    view: MonthView,
    cursor: NaiveDate,
}

impl DatePicker {
    pub fn new(label: &'static str, value: Option<NaiveDate>, today: NaiveDate) -> Self {
        let cursor = value.unwrap_or(today);
        Self {
            label,
            value,
            min: None,
            today,
            disabled: false,
            focused: false,
            open: false,
            view: MonthView::containing(cursor),
            cursor,
        }
    }

    pub fn set_min(&mut self, min: Option<NaiveDate>) {
        self.min = min;
    }

    #[cfg(test)]
    pub fn min(&self) -> Option<NaiveDate> {
        self.min
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    #[cfg(test)]
    pub fn view(&self) -> MonthView {
        self.view
    }

    #[cfg(test)]
    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    fn lower_bound(&self) -> NaiveDate {
        self.min.unwrap_or(self.today)
    }

    /// Open the grid on the month of the current value (or the minimum)
    pub fn open(&mut self) {
        if self.disabled {
            return;
        }
        self.cursor = self.value.unwrap_or(self.today).max(self.lower_bound());
        self.view = MonthView::containing(self.cursor);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Pick `day` of the displayed month.
    ///
    /// Returns the canonical `YYYY-MM-DD` string, or `None` when the day is
    /// out of range or before the minimum.
    pub fn select_day(&mut self, day: u32) -> Option<String> {
        let date = self.view.date(day)?;
        if !is_selectable(date, self.min, self.today) {
            return None;
        }
        self.value = Some(date);
        self.cursor = date;
        self.open = false;
        Some(format_date(date))
    }

    fn move_cursor(&mut self, days: i64) {
        self.cursor = step_clamped(self.cursor, days, self.lower_bound());
        self.view = MonthView::containing(self.cursor);
    }

    fn change_month(&mut self, forward: bool) {
        self.view = if forward {
            self.view.next()
        } else {
            self.view.prev()
        };
        let day = self.cursor.day().min(self.view.days_in_month());
        if let Some(date) = self.view.date(day) {
            self.cursor = date.max(self.lower_bound());
        }
    }

    fn draw_calendar(&self, frame: &mut Frame, anchor: Rect, bounds: Rect) {
        let area = dropdown_below(anchor, bounds, CALENDAR_WIDTH, CALENDAR_HEIGHT);
        if area.height < 4 {
            return;
        }

        let mut lines = vec![
            Line::from(Span::styled(
                format!("‹ {} ›", self.view.title()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(
                WEEKDAY_HEADERS
                    .iter()
                    .map(|h| Span::styled(format!("{:>3}", h), Style::default().fg(Color::DarkGray)))
                    .collect::<Vec<_>>(),
            ),
        ];

        let cells = self.view.grid();
        for week in cells.chunks(7) {
            let spans: Vec<Span> = week
                .iter()
                .map(|cell| match cell {
                    GridCell::Blank => Span::raw("   "),
                    GridCell::Day(day) => {
                        let date = self.view.date(*day);
                        Span::styled(format!("{:>3}", day), self.day_style(date))
                    }
                })
                .collect();
            lines.push(Line::from(spans));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(format!(" {} ", self.label)),
        );
        frame.render_widget(Clear, area);
        frame.render_widget(paragraph, area);
    }

    fn day_style(&self, date: Option<NaiveDate>) -> Style {
        let Some(date) = date else {
            return Style::default();
        };
        if !is_selectable(date, self.min, self.today) {
            return Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT);
        }
        let mut style = Style::default().fg(Color::White);
        if Some(date) == self.value {
            style = style.bg(Color::Blue).add_modifier(Modifier::BOLD);
        }
        if date == self.today {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if date == self.cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }

    /// Render the grid overlay when open
    pub fn draw_dropdown(&self, frame: &mut Frame, anchor: Rect, bounds: Rect) {
        if self.open {
            self.draw_calendar(frame, anchor, bounds);
        }
    }
}

impl Component for DatePicker {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.disabled {
            return Ok(None);
        }
        if !self.open {
            return Ok(match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                    self.open();
                    None
                }
                _ => None,
            });
        }

        match key.code {
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Up => self.move_cursor(-7),
            KeyCode::Down => self.move_cursor(7),
            KeyCode::PageUp => self.change_month(false),
            KeyCode::PageDown => self.change_month(true),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if MonthView::containing(self.cursor) == self.view {
                    self.select_day(self.cursor.day());
                }
            }
            KeyCode::Esc => self.close(),
            _ => {}
        }
        Ok(None)
    }

    fn blur(&mut self) {
        self.focused = false;
        self.open = false;
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let border = if self.focused && !self.disabled {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let content = if self.disabled {
            Line::from(Span::styled("—", Style::default().fg(Color::DarkGray)))
        } else {
            match self.value {
                Some(date) => Line::from(vec![
                    Span::styled("▦ ", Style::default().fg(Color::Cyan)),
                    Span::styled(
                        display_date(date),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                None => Line::from(Span::styled(
                    "Select date",
                    Style::default().fg(Color::DarkGray),
                )),
            }
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
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_select_day_emits_canonical_string() {
        let today = date(2026, 10, 19);
        let mut picker = DatePicker::new("Departing", Some(date(2026, 10, 20)), today);
        picker.open();
        assert_eq!(picker.select_day(25), Some("2026-10-25".to_string()));
        assert_eq!(picker.value, Some(date(2026, 10, 25)));
        assert!(!picker.is_open());
    }

    #[test]
    fn test_days_before_min_are_rejected() {
        let today = date(2026, 10, 19);
        let mut picker = DatePicker::new("Returning", Some(date(2026, 10, 27)), today);
        picker.set_min(Some(date(2026, 10, 22)));
        picker.open();
        assert_eq!(picker.select_day(21), None);
        assert_eq!(picker.select_day(22), Some("2026-10-22".to_string()));
    }

    #[test]
    fn test_unset_min_defaults_to_today() {
        let today = date(2026, 10, 19);
        let mut picker = DatePicker::new("Departing", None, today);
        picker.open();
        assert_eq!(picker.select_day(18), None);
        assert_eq!(picker.select_day(19), Some("2026-10-19".to_string()));
    }

    #[test]
    fn test_cursor_is_clamped_to_min() {
        let today = date(2026, 10, 19);
        let mut picker = DatePicker::new("Departing", Some(date(2026, 10, 20)), today);
        picker.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert!(picker.is_open());
        picker.handle_key_event(key(KeyCode::Up)).unwrap();
        assert_eq!(picker.cursor(), today);

        picker.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(picker.value, Some(today));
    }

    #[test]
    fn test_page_down_rolls_the_year() {
        let today = date(2026, 12, 10);
        let mut picker = DatePicker::new("Departing", Some(date(2026, 12, 31)), today);
        picker.open();
        picker.handle_key_event(key(KeyCode::PageDown)).unwrap();
        assert_eq!(picker.view(), MonthView::new(2027, 1));
        assert_eq!(picker.cursor(), date(2027, 1, 31));

        picker.handle_key_event(key(KeyCode::PageUp)).unwrap();
        picker.handle_key_event(key(KeyCode::PageUp)).unwrap();
        assert_eq!(picker.view(), MonthView::new(2026, 11));
        // Whole month is before today; the cursor stays on the bound
        assert_eq!(picker.cursor(), today);
        picker.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert!(picker.is_open());
    }

    #[test]
    fn test_disabled_picker_ignores_input() {
        let today = date(2026, 10, 19);
        let mut picker = DatePicker::new("Returning", Some(date(2026, 10, 27)), today);
        picker.disabled = true;
        picker.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert!(!picker.is_open());
    }

    #[test]
    fn test_blur_closes_grid() {
        let today = date(2026, 10, 19);
        let mut picker = DatePicker::new("Departing", Some(date(2026, 10, 20)), today);
        picker.focused = true;
        picker.open();
        picker.blur();
        assert!(!picker.is_open());
        assert!(!picker.focused);
    }
}
