//! Search step: trip type, cabin, travelers, airports and dates
//!
//! The field widgets own their input state. After every key the form copies
//! their values into the wizard's `SearchCriteria`, so the criteria always
//! mirror what is on screen.

use crate::action::Action;
use crate::component::Component;
use crate::components::airport_input::AirportInput;
use crate::components::date_picker::DatePicker;
use crate::components::passenger_picker::PassengerPicker;
use crate::model::search::{SearchCriteria, TripType};
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Focusable fields, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    TripType,
    Cabin,
    Travelers,
    Origin,
    Destination,
    Departure,
    Return,
    Submit,
}

impl SearchField {
    const ORDER: [SearchField; 8] = [
        SearchField::TripType,
        SearchField::Cabin,
        SearchField::Travelers,
        SearchField::Origin,
        SearchField::Destination,
        SearchField::Departure,
        SearchField::Return,
        SearchField::Submit,
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    fn offset(&self, delta: isize) -> SearchField {
        let len = Self::ORDER.len() as isize;
        let next = (self.index() as isize + delta).rem_euclid(len);
        Self::ORDER[next as usize]
    }
}

/// Field rectangles from the last draw, used to anchor drop-downs
#[derive(Default, Clone, Copy)]
struct FieldAreas {
    travelers: Rect,
    origin: Rect,
    destination: Rect,
    departure: Rect,
    return_date: Rect,
}

pub struct SearchFormComponent {
    focus: SearchField,
    origin: AirportInput,
    destination: AirportInput,
    departure: DatePicker,
    return_date: DatePicker,
    travelers: PassengerPicker,
    /// Inline validation message
    pub error: Option<String>,
    areas: FieldAreas,
}

impl SearchFormComponent {
    pub fn new(criteria: &SearchCriteria, today: NaiveDate) -> Self {
        let mut origin = AirportInput::new("Flying From", "City or Airport");
        origin.set_value(&criteria.origin);
        let mut destination = AirportInput::new("Flying To", "Destination");
        destination.set_value(&criteria.destination);

        let mut form = Self {
            focus: SearchField::Origin,
            origin,
            destination,
            departure: DatePicker::new("Departing", criteria.departure_date, today),
            return_date: DatePicker::new("Returning", criteria.return_date, today),
            travelers: PassengerPicker::new(criteria.passengers),
            error: None,
            areas: FieldAreas::default(),
        };
        form.origin.focused = true;
        form.refresh_return_constraints(criteria.trip_type);
        form
    }

    #[cfg(test)]
    pub fn focus(&self) -> SearchField {
        self.focus
    }

    /// Whether typed characters go into a text field
    pub fn is_editing_text(&self) -> bool {
        matches!(self.focus, SearchField::Origin | SearchField::Destination)
    }

    fn is_focusable(field: SearchField, criteria: &SearchCriteria) -> bool {
        !(field == SearchField::Return && criteria.trip_type == TripType::OneWay)
    }

    pub fn focus_next(&mut self, criteria: &SearchCriteria) {
        self.move_focus(1, criteria);
    }

    pub fn focus_prev(&mut self, criteria: &SearchCriteria) {
        self.move_focus(-1, criteria);
    }

    fn move_focus(&mut self, delta: isize, criteria: &SearchCriteria) {
        let mut next = self.focus.offset(delta);
        while !Self::is_focusable(next, criteria) {
            next = next.offset(delta);
        }
        self.set_focus(next);
    }

    pub fn set_focus(&mut self, field: SearchField) {
        self.blur_focused();
        self.focus = field;
        match field {
            SearchField::Origin => self.origin.focus(),
            SearchField::Destination => self.destination.focus(),
            SearchField::Departure => self.departure.focused = true,
            SearchField::Return => self.return_date.focused = true,
            SearchField::Travelers => self.travelers.focused = true,
            SearchField::TripType | SearchField::Cabin | SearchField::Submit => {}
        }
    }

    fn blur_focused(&mut self) {
        match self.focus {
            SearchField::Origin => self.origin.blur(),
            SearchField::Destination => self.destination.blur(),
            SearchField::Departure => self.departure.blur(),
            SearchField::Return => self.return_date.blur(),
            SearchField::Travelers => self.travelers.blur(),
            SearchField::TripType | SearchField::Cabin | SearchField::Submit => {}
        }
    }

    /// Close every drop-down, e.g. on a click elsewhere. Focus stays put.
    pub fn close_dropdowns(&mut self) {
        let focus = self.focus;
        self.blur_focused();
        match focus {
            SearchField::Origin => self.origin.focused = true,
            SearchField::Destination => self.destination.focused = true,
            SearchField::Departure => self.departure.focused = true,
            SearchField::Return => self.return_date.focused = true,
            SearchField::Travelers => self.travelers.focused = true,
            SearchField::TripType | SearchField::Cabin | SearchField::Submit => {}
        }
    }

    #[cfg(test)]
    pub fn has_open_dropdown(&self) -> bool {
        self.origin.is_open()
            || self.destination.is_open()
            || self.departure.is_open()
            || self.return_date.is_open()
            || self.travelers.is_open()
    }

    fn refresh_return_constraints(&mut self, trip_type: TripType) {
        self.return_date.set_min(self.departure.value);
        self.return_date.disabled = trip_type == TripType::OneWay;
        if self.return_date.disabled {
            self.return_date.close();
        }
    }

    /// Copy widget values into the criteria
    fn sync(&mut self, criteria: &mut SearchCriteria) {
        criteria.origin = self.origin.value.clone();
        criteria.destination = self.destination.value.clone();
        criteria.departure_date = self.departure.value;
        // Left as-is when departure moves past it; the form warns instead.
        criteria.return_date = self.return_date.value;
        criteria.passengers = self.travelers.passengers;
        self.refresh_return_constraints(criteria.trip_type);
    }

    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        criteria: &mut SearchCriteria,
    ) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Tab => return Ok(Some(Action::FocusNext)),
            KeyCode::BackTab => return Ok(Some(Action::FocusPrev)),
            _ => {}
        }
        self.error = None;

        let action = match self.focus {
            SearchField::TripType => match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                    criteria.trip_type = criteria.trip_type.toggle();
                    None
                }
                KeyCode::Enter => Some(Action::FocusNext),
                _ => None,
            },
            SearchField::Cabin => match key.code {
                KeyCode::Left => {
                    criteria.cabin_class = criteria.cabin_class.prev();
                    None
                }
                KeyCode::Right | KeyCode::Char(' ') => {
                    criteria.cabin_class = criteria.cabin_class.next();
                    None
                }
                KeyCode::Enter => Some(Action::FocusNext),
                _ => None,
            },
            SearchField::Travelers => self.travelers.handle_key_event(key)?,
            SearchField::Origin => self.origin.handle_key_event(key)?,
            SearchField::Destination => self.destination.handle_key_event(key)?,
            SearchField::Departure => self.departure.handle_key_event(key)?,
            SearchField::Return => self.return_date.handle_key_event(key)?,
            SearchField::Submit => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SubmitSearch),
                _ => None,
            },
        };

        self.sync(criteria);
        Ok(action)
    }

    pub fn draw_with_criteria(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        criteria: &SearchCriteria,
    ) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let headline = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    "Unlock ",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "40-60% Off",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    " International Flights",
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                "We access \"blind\" inventory from 500+ airlines. Stop paying retail prices.",
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(headline, chunks[0]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Find Your Flight ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(chunks[1]);
        frame.render_widget(block, chunks[1]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(inner);

        // Trip type, cabin, travelers
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(30),
                Constraint::Min(0),
                Constraint::Length(24),
                Constraint::Length(22),
            ])
            .split(rows[0]);
        self.draw_trip_type(frame, top[0], criteria.trip_type);
        self.draw_cabin(frame, top[2], criteria);
        self.travelers.draw(frame, top[3])?;

        // Airports and dates
        let fields = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(30),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
            ])
            .split(rows[1]);
        self.origin.draw(frame, fields[0])?;
        self.destination.draw(frame, fields[1])?;
        self.departure.draw(frame, fields[2])?;
        self.return_date.draw(frame, fields[3])?;

        self.draw_message(frame, rows[2], criteria);
        self.draw_footer(frame, rows[3]);

        self.areas = FieldAreas {
            travelers: top[3],
            origin: fields[0],
            destination: fields[1],
            departure: fields[2],
            return_date: fields[3],
        };

        // Drop-downs last so they overlap the rows below
        let bounds = frame.area();
        self.travelers.draw_dropdown(frame, self.areas.travelers, bounds);
        self.origin.draw_dropdown(frame, self.areas.origin, bounds);
        self.destination
            .draw_dropdown(frame, self.areas.destination, bounds);
        self.departure.draw_dropdown(frame, self.areas.departure, bounds);
        self.return_date
            .draw_dropdown(frame, self.areas.return_date, bounds);

        Ok(())
    }

    fn focus_style(&self, field: SearchField) -> Style {
        if self.focus == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    fn draw_trip_type(&self, frame: &mut Frame, area: Rect, trip_type: TripType) {
        let option = |t: TripType| {
            let selected = t == trip_type;
            let marker = if selected { "(•) " } else { "( ) " };
            let style = if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Span::styled(format!("{}{}  ", marker, t.label()), style)
        };
        let paragraph = Paragraph::new(Line::from(vec![
            option(TripType::Roundtrip),
            option(TripType::OneWay),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.focus_style(SearchField::TripType))
                .title(" Trip "),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_cabin(&self, frame: &mut Frame, area: Rect, criteria: &SearchCriteria) {
        let paragraph = Paragraph::new(Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                criteria.cabin_class.selector_label(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.focus_style(SearchField::Cabin))
                .title(" Cabin "),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_message(&self, frame: &mut Frame, area: Rect, criteria: &SearchCriteria) {
        let line = if let Some(error) = &self.error {
            Line::from(Span::styled(
                format!(" ✖ {}", error),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
        } else if criteria.return_precedes_departure() {
            Line::from(Span::styled(
                " ⚠ Return date is before the departure date. Pick a new return date.",
                Style::default().fg(Color::Yellow),
            ))
        } else {
            Line::from("")
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(22), Constraint::Min(0)])
            .split(area);

        let focused = self.focus == SearchField::Submit;
        let button_style = if focused {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        };
        let button = Paragraph::new(Line::from(Span::styled("  FIND FLIGHTS  ", button_style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.focus_style(SearchField::Submit)),
            );
        frame.render_widget(button, cols[0]);

        let trust = Paragraph::new(vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  ✔ ", Style::default().fg(Color::Green)),
                Span::styled("FREE CANCELLATION*", Style::default().fg(Color::Gray)),
                Span::styled("   ✔ ", Style::default().fg(Color::Green)),
                Span::styled("PRICE MATCH PROMISE", Style::default().fg(Color::Gray)),
                Span::styled("   F2 ", Style::default().fg(Color::Cyan)),
                Span::styled(
                    "Why are our prices so low?",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]),
        ]);
        frame.render_widget(trust, cols[1]);
    }
}

impl Component for SearchFormComponent {
    fn blur(&mut self) {
        self.close_dropdowns();
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs the criteria, so we use draw_with_criteria
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(form: &mut SearchFormComponent, criteria: &mut SearchCriteria, code: KeyCode) -> Option<Action> {
        let action = form.handle_key(key(code), criteria).unwrap();
        // Apply focus actions the way the App does
        match action {
            Some(Action::FocusNext) => {
                form.focus_next(criteria);
                None
            }
            Some(Action::FocusPrev) => {
                form.focus_prev(criteria);
                None
            }
            other => other,
        }
    }

    fn type_text(form: &mut SearchFormComponent, criteria: &mut SearchCriteria, text: &str) {
        for c in text.chars() {
            press(form, criteria, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_typing_updates_criteria() {
        let mut criteria = SearchCriteria::with_today(today());
        let mut form = SearchFormComponent::new(&criteria, today());
        assert_eq!(form.focus(), SearchField::Origin);

        type_text(&mut form, &mut criteria, "lon");
        press(&mut form, &mut criteria, KeyCode::Enter);
        assert_eq!(criteria.origin, "London (LHR)");

        press(&mut form, &mut criteria, KeyCode::Tab);
        assert_eq!(form.focus(), SearchField::Destination);
        type_text(&mut form, &mut criteria, "Somewhere");
        assert_eq!(criteria.destination, "Somewhere");
    }

    #[test]
    fn test_focus_change_closes_dropdown() {
        let mut criteria = SearchCriteria::with_today(today());
        let mut form = SearchFormComponent::new(&criteria, today());
        type_text(&mut form, &mut criteria, "par");
        assert!(form.has_open_dropdown());

        press(&mut form, &mut criteria, KeyCode::Tab);
        assert!(!form.has_open_dropdown());
    }

    #[test]
    fn test_close_dropdowns_keeps_focus() {
        let mut criteria = SearchCriteria::with_today(today());
        let mut form = SearchFormComponent::new(&criteria, today());
        type_text(&mut form, &mut criteria, "tok");
        form.close_dropdowns();
        assert!(!form.has_open_dropdown());
        assert_eq!(form.focus(), SearchField::Origin);
    }

    #[test]
    fn test_one_way_skips_return_field() {
        let mut criteria = SearchCriteria::with_today(today());
        let mut form = SearchFormComponent::new(&criteria, today());
        form.set_focus(SearchField::TripType);
        press(&mut form, &mut criteria, KeyCode::Right);
        assert_eq!(criteria.trip_type, TripType::OneWay);

        form.set_focus(SearchField::Departure);
        press(&mut form, &mut criteria, KeyCode::Tab);
        assert_eq!(form.focus(), SearchField::Submit);
        press(&mut form, &mut criteria, KeyCode::BackTab);
        assert_eq!(form.focus(), SearchField::Departure);
    }

    #[test]
    fn test_return_min_tracks_departure_without_reconciling() {
        let mut criteria = SearchCriteria::with_today(today());
        let mut form = SearchFormComponent::new(&criteria, today());
        let original_return = criteria.return_date;

        form.set_focus(SearchField::Departure);
        press(&mut form, &mut criteria, KeyCode::Enter);
        // Two weeks later, past the stored return date
        press(&mut form, &mut criteria, KeyCode::Down);
        press(&mut form, &mut criteria, KeyCode::Down);
        press(&mut form, &mut criteria, KeyCode::Enter);

        assert_eq!(
            criteria.departure_date,
            NaiveDate::from_ymd_opt(2026, 11, 3)
        );
        assert_eq!(criteria.return_date, original_return);
        assert!(criteria.return_precedes_departure());
        assert_eq!(form.return_date.min(), criteria.departure_date);
    }

    #[test]
    fn test_cabin_and_submit() {
        let mut criteria = SearchCriteria::with_today(today());
        let mut form = SearchFormComponent::new(&criteria, today());
        form.set_focus(SearchField::Cabin);
        press(&mut form, &mut criteria, KeyCode::Right);
        press(&mut form, &mut criteria, KeyCode::Right);
        assert_eq!(criteria.cabin_class.name(), "Business");

        form.set_focus(SearchField::Submit);
        assert_eq!(
            press(&mut form, &mut criteria, KeyCode::Enter),
            Some(Action::SubmitSearch)
        );
    }
}
