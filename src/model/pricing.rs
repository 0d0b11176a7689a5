//! Synthetic price comparison shown after the analysis step
//!
//! The market fare is invented from a small hub table, scaled by cabin and
//! jittered by ±5%. "Our" fare is always 55% of that market fare.

use super::search::CabinClass;
use rand::Rng;

/// Share of the market fare we quote
pub const OUR_PRICE_RATIO: f64 = 0.55;

/// Gap between the carrier fare and the online-travel-agency reference fare
pub const OTA_DISCOUNT: u32 = 40;

const DEFAULT_AIRLINE: &str = "Major Carrier";
const DEFAULT_BASE: f64 = 1100.0;

/// Known hubs: destination keywords, carrier label, economy base fare
const HUBS: &[(&[&str], &str, f64)] = &[
    (&["london", "lhr"], "British Airways", 980.0),
    (&["paris", "cdg"], "Air France", 1050.0),
    (&["tokyo", "hnd"], "JAL", 1500.0),
    (&["dubai", "dxb"], "Emirates", 1300.0),
    (&["frankfurt", "fra"], "Lufthansa", 1150.0),
];

/// Carrier label and economy base fare for a destination.
///
/// First matching hub wins; unknown destinations get a generic carrier.
pub fn market_base(destination: &str) -> (&'static str, f64) {
    let dest = destination.to_lowercase();
    HUBS.iter()
        .find(|(keywords, _, _)| keywords.iter().any(|k| dest.contains(k)))
        .map(|(_, airline, base)| (*airline, *base))
        .unwrap_or((DEFAULT_AIRLINE, DEFAULT_BASE))
}

/// Market fare before jitter
pub fn unjittered_market(destination: &str, cabin: CabinClass) -> f64 {
    let (_, base) = market_base(destination);
    base * cabin.price_multiplier()
}

/// floor(market × 0.55)
pub fn our_price(market: u32) -> u32 {
    (market as f64 * OUR_PRICE_RATIO).floor() as u32
}

/// Derived comparison for one analysis run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceComparison {
    pub airline: String,
    pub market: u32,
    pub ours: u32,
}

impl PriceComparison {
    pub fn generate_with_rng<R: Rng + ?Sized>(
        destination: &str,
        cabin: CabinClass,
        rng: &mut R,
    ) -> Self {
        let jitter = rng.gen_range(0.95..1.05);
        Self::with_jitter(destination, cabin, jitter)
    }

    /// Build a comparison using an explicit jitter factor
    pub fn with_jitter(destination: &str, cabin: CabinClass, jitter: f64) -> Self {
        let (airline, _) = market_base(destination);
        let market = (unjittered_market(destination, cabin) * jitter).floor() as u32;
        Self {
            airline: airline.to_string(),
            market,
            ours: our_price(market),
        }
    }

    /// Reference fare attributed to online travel agencies
    pub fn ota_price(&self) -> u32 {
        self.market.saturating_sub(OTA_DISCOUNT)
    }

    /// Percentage saved against the market fare, rounded down
    pub fn savings_percent(&self) -> u32 {
        if self.market == 0 {
            return 0;
        }
        ((self.market - self.ours) as f64 / self.market as f64 * 100.0).floor() as u32
    }
}

/// Thousands-separated dollar amount, e.g. "$3,136"
pub fn format_price(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("${}", out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_london_business_base() {
        assert_eq!(market_base("London (LHR)"), ("British Airways", 980.0));
        assert_eq!(
            unjittered_market("london", CabinClass::Business),
            980.0 * 3.2
        );
    }

    #[test]
    fn test_hub_matching_is_case_insensitive_substring() {
        assert_eq!(market_base("PARIS (CDG)").0, "Air France");
        assert_eq!(market_base("Tokyo (HND)").0, "JAL");
        assert_eq!(market_base("dxb").0, "Emirates");
        assert_eq!(market_base("Frankfurt").0, "Lufthansa");
        assert_eq!(market_base("Reykjavik"), ("Major Carrier", 1100.0));
    }

    #[test]
    fn test_first_matching_hub_wins() {
        assert_eq!(market_base("London or Paris").0, "British Airways");
    }

    #[test]
    fn test_cabin_multipliers_without_jitter() {
        let dest = "Somewhere";
        assert_eq!(PriceComparison::with_jitter(dest, CabinClass::Economy, 1.0).market, 1100);
        assert_eq!(
            PriceComparison::with_jitter(dest, CabinClass::PremiumEconomy, 1.0).market,
            1870
        );
        assert_eq!(PriceComparison::with_jitter(dest, CabinClass::First, 1.0).market, 6050);
    }

    #[test]
    fn test_our_price_is_floor_of_55_percent() {
        let mut rng = StdRng::seed_from_u64(7);
        for cabin in CabinClass::all() {
            for _ in 0..50 {
                let cmp = PriceComparison::generate_with_rng("London", cabin, &mut rng);
                assert_eq!(cmp.ours, (cmp.market as f64 * 0.55).floor() as u32);
            }
        }
    }

    #[test]
    fn test_jitter_stays_within_five_percent() {
        let mut rng = StdRng::seed_from_u64(42);
        let base = unjittered_market("Dubai", CabinClass::Business);
        for _ in 0..200 {
            let cmp = PriceComparison::generate_with_rng("Dubai", CabinClass::Business, &mut rng);
            assert!(cmp.market as f64 >= (base * 0.95).floor());
            assert!((cmp.market as f64) < base * 1.05);
        }
    }

    #[test]
    fn test_ota_price_and_savings() {
        let cmp = PriceComparison::with_jitter("London", CabinClass::Economy, 1.0);
        assert_eq!(cmp.market, 980);
        assert_eq!(cmp.ours, 539);
        assert_eq!(cmp.ota_price(), 940);
        assert_eq!(cmp.savings_percent(), 45);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(999), "$999");
        assert_eq!(format_price(3136), "$3,136");
        assert_eq!(format_price(1234567), "$1,234,567");
    }
}
