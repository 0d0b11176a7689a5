//! Flight search criteria entered on the first wizard step

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical date format used by the date pickers
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Cabin class offered in the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CabinClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    #[cfg(test)]
    pub fn all() -> [CabinClass; 4] {
        [
            CabinClass::Economy,
            CabinClass::PremiumEconomy,
            CabinClass::Business,
            CabinClass::First,
        ]
    }

    /// Name used in copy and in the text-generation prompt
    pub fn name(&self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::PremiumEconomy => "Premium Economy",
            CabinClass::Business => "Business",
            CabinClass::First => "First",
        }
    }

    /// Shorter label for the class selector
    pub fn selector_label(&self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::PremiumEconomy => "Premium Econ",
            CabinClass::Business => "Business Class",
            CabinClass::First => "First Class",
        }
    }

    /// Fare multiplier relative to an economy market fare
    pub fn price_multiplier(&self) -> f64 {
        match self {
            CabinClass::Economy => 1.0,
            CabinClass::PremiumEconomy => 1.7,
            CabinClass::Business => 3.2,
            CabinClass::First => 5.5,
        }
    }

    pub fn next(&self) -> CabinClass {
        match self {
            CabinClass::Economy => CabinClass::PremiumEconomy,
            CabinClass::PremiumEconomy => CabinClass::Business,
            CabinClass::Business => CabinClass::First,
            CabinClass::First => CabinClass::Economy,
        }
    }

    pub fn prev(&self) -> CabinClass {
        match self {
            CabinClass::Economy => CabinClass::First,
            CabinClass::PremiumEconomy => CabinClass::Economy,
            CabinClass::Business => CabinClass::PremiumEconomy,
            CabinClass::First => CabinClass::Business,
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Roundtrip or one-way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TripType {
    #[default]
    Roundtrip,
    OneWay,
}

impl TripType {
    pub fn label(&self) -> &'static str {
        match self {
            TripType::Roundtrip => "Roundtrip",
            TripType::OneWay => "One-way",
        }
    }

    pub fn toggle(&self) -> TripType {
        match self {
            TripType::Roundtrip => TripType::OneWay,
            TripType::OneWay => TripType::Roundtrip,
        }
    }
}

/// Which passenger counter a delta applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerKind {
    Adult,
    Child,
}

/// Passenger counts. Adults never drop below 1, children never below 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passengers {
    pub adults: u32,
    pub children: u32,
}

impl Default for Passengers {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
        }
    }
}

impl Passengers {
    /// Apply a signed delta to one counter, clamping at its minimum
    pub fn adjust(&mut self, kind: PassengerKind, delta: i32) {
        let (count, min) = match kind {
            PassengerKind::Adult => (&mut self.adults, 1),
            PassengerKind::Child => (&mut self.children, 0),
        };
        let next = (*count as i64 + delta as i64).max(min);
        *count = next.min(u32::MAX as i64) as u32;
    }

    pub fn total(&self) -> u32 {
        self.adults + self.children
    }

    /// "1 Traveler" / "3 Travelers"
    pub fn label(&self) -> String {
        let total = self.total();
        if total > 1 {
            format!("{} Travelers", total)
        } else {
            format!("{} Traveler", total)
        }
    }
}

/// Everything the search step collects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub origin: String,
    pub destination: String,
    pub departure_date: Option<NaiveDate>,
    /// Ignored when `trip_type` is one-way
    pub return_date: Option<NaiveDate>,
    pub passengers: Passengers,
    pub cabin_class: CabinClass,
    pub trip_type: TripType,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self::with_today(Local::now().date_naive())
    }
}

impl SearchCriteria {
    /// Defaults relative to `today`: depart tomorrow, return a week after that
    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            departure_date: Some(today + Duration::days(1)),
            return_date: Some(today + Duration::days(8)),
            passengers: Passengers::default(),
            cabin_class: CabinClass::default(),
            trip_type: TripType::default(),
        }
    }

    /// Whether origin, destination and departure date are all present
    pub fn has_required_fields(&self) -> bool {
        !self.origin.trim().is_empty()
            && !self.destination.trim().is_empty()
            && self.departure_date.is_some()
    }

    /// Return date, only meaningful on roundtrips
    pub fn effective_return_date(&self) -> Option<NaiveDate> {
        match self.trip_type {
            TripType::Roundtrip => self.return_date,
            TripType::OneWay => None,
        }
    }

    /// True when a roundtrip's stored return date is earlier than departure.
    ///
    /// The stored value is left as-is; this only drives a warning in the form.
    pub fn return_precedes_departure(&self) -> bool {
        match (self.departure_date, self.effective_return_date()) {
            (Some(depart), Some(ret)) => ret < depart,
            _ => false,
        }
    }
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Format a date for display, e.g. "Oct 12, 2026"
pub fn display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
