//! Live deal ticker entries and their periodic shuffle
//!
//! Prices and expiry labels drift every refresh to look like live inventory.

use super::catalog::{DealSeed, DEAL_SEEDS};
use rand::Rng;

/// Ticker prices never fall below this
pub const PRICE_FLOOR: u32 = 199;

/// One ticker entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightDeal {
    pub id: u32,
    pub route: String,
    pub price: u32,
    pub market_price: u32,
    pub trip_label: String,
    pub expires: String,
}

impl FlightDeal {
    fn from_seed<R: Rng + ?Sized>(seed: &DealSeed, rng: &mut R) -> Self {
        // 40-80% markup
        let markup = rng.gen_range(1.4..1.8);
        Self {
            id: seed.id,
            route: seed.route.to_string(),
            price: seed.price,
            market_price: (seed.price as f64 * markup).floor() as u32,
            trip_label: seed.trip_label.to_string(),
            expires: seed.expires.to_string(),
        }
    }
}

/// The full ticker strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealBoard {
    pub deals: Vec<FlightDeal>,
}

impl DealBoard {
    pub fn seeded() -> Self {
        Self::seeded_with_rng(&mut rand::thread_rng())
    }

    pub fn seeded_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            deals: DEAL_SEEDS.iter().map(|s| FlightDeal::from_seed(s, rng)).collect(),
        }
    }

    /// Update one or two random deals
    pub fn refresh(&mut self) {
        self.refresh_with_rng(&mut rand::thread_rng());
    }

    pub fn refresh_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.deals.is_empty() {
            return;
        }
        let updates = rng.gen_range(1..=2);
        for _ in 0..updates {
            let index = rng.gen_range(0..self.deals.len());
            let deal = &mut self.deals[index];

            if rng.gen_bool(0.6) {
                // Mostly downward drift
                let change: i64 = rng.gen_range(-4..=2);
                let price = (deal.price as i64 + change).max(PRICE_FLOOR as i64);
                deal.price = price as u32;
                deal.market_price = deal
                    .market_price
                    .max((deal.price as f64 * 1.5).floor() as u32);
            } else {
                let minutes = rng.gen_range(1..=59);
                deal.expires = format!("{}m left", minutes);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_seeded_market_prices_carry_markup() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = DealBoard::seeded_with_rng(&mut rng);
        assert_eq!(board.deals.len(), DEAL_SEEDS.len());
        for deal in &board.deals {
            assert!(deal.market_price >= (deal.price as f64 * 1.4).floor() as u32);
            assert!((deal.market_price as f64) < deal.price as f64 * 1.8);
        }
    }

    #[test]
    fn test_refresh_respects_price_floor() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut board = DealBoard::seeded_with_rng(&mut rng);
        board.deals[0].price = PRICE_FLOOR;

        let before: Vec<u32> = board.deals.iter().map(|d| d.price).collect();
        for _ in 0..500 {
            board.refresh_with_rng(&mut rng);
            assert!(board.deals.iter().all(|d| d.price >= PRICE_FLOOR));
        }
        let after: Vec<u32> = board.deals.iter().map(|d| d.price).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn test_price_change_lifts_market_price() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut board = DealBoard::seeded_with_rng(&mut rng);
        // Lowest seeded markup, so every price change must raise the market
        for deal in &mut board.deals {
            deal.market_price = (deal.price as f64 * 1.41).floor() as u32;
        }

        let mut price_changes = 0;
        for _ in 0..300 {
            let before = board.clone();
            board.refresh_with_rng(&mut rng);
            for (old, new) in before.deals.iter().zip(&board.deals) {
                if old.price != new.price {
                    price_changes += 1;
                    assert!(
                        new.market_price >= (new.price as f64 * 1.5).floor() as u32,
                        "{}: market {} for price {}",
                        new.route,
                        new.market_price,
                        new.price
                    );
                }
            }
        }
        assert!(price_changes > 0);
    }

    #[test]
    fn test_refresh_changes_at_most_two_deals() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut board = DealBoard::seeded_with_rng(&mut rng);
        for _ in 0..100 {
            let before = board.clone();
            board.refresh_with_rng(&mut rng);
            let changed = before
                .deals
                .iter()
                .zip(&board.deals)
                .filter(|(a, b)| a != b)
                .count();
            assert!(changed <= 2);
        }
    }

    #[test]
    fn test_expiry_labels_are_minutes() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut board = DealBoard::seeded_with_rng(&mut rng);
        for _ in 0..200 {
            board.refresh_with_rng(&mut rng);
        }
        for deal in &board.deals {
            assert!(deal.expires.ends_with(" left"));
        }
    }
}
