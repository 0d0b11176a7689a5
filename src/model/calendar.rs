//! Month grid arithmetic for the date pickers

use chrono::{Datelike, Duration, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Column headers, Sunday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// One cell of a 7-column month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Blank,
    Day(u32),
}

/// A year/month being displayed. `month` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
}

impl MonthView {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Weekday index of the 1st, Sunday = 0
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next().first_day();
        (next - self.first_day()).num_days() as u32
    }

    /// Following month, rolling into January of the next year
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// Preceding month, rolling into December of the previous year
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Leading blanks followed by one cell per day
    pub fn grid(&self) -> Vec<GridCell> {
        let blanks = self.first_weekday() as usize;
        std::iter::repeat(GridCell::Blank)
            .take(blanks)
            .chain((1..=self.days_in_month()).map(GridCell::Day))
            .collect()
    }

    /// "April 2026"
    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

/// Whether `date` may be picked given an optional lower bound.
///
/// With no bound, `today` is the bound.
pub fn is_selectable(date: NaiveDate, min: Option<NaiveDate>, today: NaiveDate) -> bool {
    date >= min.unwrap_or(today)
}

/// Move `date` by `days` but never before `min`
pub fn step_clamped(date: NaiveDate, days: i64, min: NaiveDate) -> NaiveDate {
    let moved = date + Duration::days(days);
    moved.max(min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_thirty_day_month_starting_wednesday() {
        // April 2026 starts on a Wednesday
        let view = MonthView::new(2026, 4);
        assert_eq!(view.first_weekday(), 3);
        assert_eq!(view.days_in_month(), 30);

        let grid = view.grid();
        assert_eq!(grid.len(), 33);
        assert_eq!(&grid[..3], &[GridCell::Blank; 3]);
        assert_eq!(grid[3], GridCell::Day(1));
        assert_eq!(grid[32], GridCell::Day(30));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthView::new(2024, 2).days_in_month(), 29);
        assert_eq!(MonthView::new(2026, 2).days_in_month(), 28);
        assert_eq!(MonthView::new(2026, 12).days_in_month(), 31);
        assert_eq!(MonthView::new(2026, 11).days_in_month(), 30);
    }

    #[test]
    fn test_month_starting_sunday_has_no_blanks() {
        // February 2026 starts on a Sunday
        let grid = MonthView::new(2026, 2).grid();
        assert_eq!(grid[0], GridCell::Day(1));
        assert_eq!(grid.len(), 28);
    }

    #[test]
    fn test_navigation_rolls_year() {
        assert_eq!(MonthView::new(2026, 12).next(), MonthView::new(2027, 1));
        assert_eq!(MonthView::new(2026, 1).prev(), MonthView::new(2025, 12));
        assert_eq!(MonthView::new(2026, 6).next(), MonthView::new(2026, 7));
        assert_eq!(MonthView::new(2026, 6).prev(), MonthView::new(2026, 5));
    }

    #[test]
    fn test_selectable_against_min_or_today() {
        let today = date(2026, 10, 19);
        assert!(!is_selectable(date(2026, 10, 18), None, today));
        assert!(is_selectable(today, None, today));

        let min = Some(date(2026, 11, 1));
        assert!(!is_selectable(date(2026, 10, 31), min, today));
        assert!(is_selectable(date(2026, 11, 1), min, today));
    }

    #[test]
    fn test_step_clamped() {
        let min = date(2026, 10, 19);
        assert_eq!(step_clamped(date(2026, 10, 20), -7, min), min);
        assert_eq!(step_clamped(date(2026, 10, 20), 7, min), date(2026, 10, 27));
    }

    #[test]
    fn test_title() {
        assert_eq!(MonthView::new(2026, 4).title(), "April 2026");
    }
}
