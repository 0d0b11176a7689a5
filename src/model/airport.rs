//! Airport catalog and the autocomplete filter over it

/// Maximum number of suggestions shown under an airport field
pub const MAX_SUGGESTIONS: usize = 5;

/// Static airport reference record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Airport {
    pub code: &'static str,
    pub city: &'static str,
    pub name: &'static str,
    pub country: &'static str,
}

impl Airport {
    const fn new(
        code: &'static str,
        city: &'static str,
        name: &'static str,
        country: &'static str,
    ) -> Self {
        Self {
            code,
            city,
            name,
            country,
        }
    }

    /// Value written into the field when this airport is picked
    pub fn display_value(&self) -> String {
        format!("{} ({})", self.city, self.code)
    }

    fn matches(&self, needle: &str) -> bool {
        [self.city, self.code, self.name, self.country]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

pub static AIRPORTS: [Airport; 27] = [
    Airport::new("JFK", "New York", "John F. Kennedy Intl", "USA"),
    Airport::new("LHR", "London", "Heathrow", "UK"),
    Airport::new("DXB", "Dubai", "Dubai Intl", "UAE"),
    Airport::new("HND", "Tokyo", "Haneda", "Japan"),
    Airport::new("CDG", "Paris", "Charles de Gaulle", "France"),
    Airport::new("SIN", "Singapore", "Changi", "Singapore"),
    Airport::new("LAX", "Los Angeles", "Los Angeles Intl", "USA"),
    Airport::new("FRA", "Frankfurt", "Frankfurt", "Germany"),
    Airport::new("AMS", "Amsterdam", "Schiphol", "Netherlands"),
    Airport::new("ICN", "Seoul", "Incheon", "South Korea"),
    Airport::new("BKK", "Bangkok", "Suvarnabhumi", "Thailand"),
    Airport::new("SFO", "San Francisco", "San Francisco Intl", "USA"),
    Airport::new("IST", "Istanbul", "Istanbul", "Turkey"),
    Airport::new("MAD", "Madrid", "Barajas", "Spain"),
    Airport::new("FCO", "Rome", "Fiumicino", "Italy"),
    Airport::new("SYD", "Sydney", "Kingsford Smith", "Australia"),
    Airport::new("YYZ", "Toronto", "Pearson", "Canada"),
    Airport::new("BCN", "Barcelona", "El Prat", "Spain"),
    Airport::new("MUC", "Munich", "Munich", "Germany"),
    Airport::new("ZRH", "Zurich", "Zurich", "Switzerland"),
    Airport::new("LGA", "New York", "LaGuardia", "USA"),
    Airport::new("EWR", "New York", "Newark Liberty", "USA"),
    Airport::new("ORD", "Chicago", "O'Hare", "USA"),
    Airport::new("MIA", "Miami", "Miami Intl", "USA"),
    Airport::new("ATL", "Atlanta", "Hartsfield-Jackson", "USA"),
    Airport::new("DFW", "Dallas", "Dallas/Fort Worth", "USA"),
    Airport::new("DEN", "Denver", "Denver Intl", "USA"),
];

/// Airports whose city, code, name or country contains `query`.
///
/// Case-insensitive, catalog order, at most [`MAX_SUGGESTIONS`]. An empty
/// query yields nothing rather than the whole catalog.
pub fn filter_airports<'a>(query: &str, catalog: &'a [Airport]) -> Vec<&'a Airport> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|airport| airport.matches(&needle))
        .take(MAX_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(query: &str) -> Vec<&'static str> {
        filter_airports(query, &AIRPORTS)
            .into_iter()
            .map(|a| a.code)
            .collect()
    }

    #[test]
    fn test_lon_finds_heathrow_first() {
        let results = codes("lon");
        assert_eq!(results.first(), Some(&"LHR"));
        assert!(results.contains(&"BCN"));
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        assert!(filter_airports("", &AIRPORTS).is_empty());
    }

    #[test]
    fn test_results_capped_at_five_in_catalog_order() {
        let results = codes("usa");
        assert_eq!(results, vec!["JFK", "LAX", "SFO", "LGA", "EWR"]);
    }

    #[test]
    fn test_matches_every_field() {
        assert_eq!(codes("HND"), vec!["HND"]);
        assert_eq!(codes("schiphol"), vec!["AMS"]);
        assert_eq!(codes("south korea"), vec!["ICN"]);
        assert_eq!(codes("ToRoNtO"), vec!["YYZ"]);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_airports("xyzzy", &AIRPORTS).is_empty());
    }

    #[test]
    fn test_display_value() {
        assert_eq!(AIRPORTS[1].display_value(), "London (LHR)");
    }
}
