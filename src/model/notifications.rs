//! "Just booked" notification feed

use super::catalog::{BookingNotice, BOOKING_NOTICES};
use rand::Rng;
use std::time::{Duration, Instant};

/// Delay before the first notice
pub const FIRST_NOTICE_DELAY: Duration = Duration::from_secs(5);

/// How long a notice stays on screen
pub const NOTICE_VISIBLE_FOR: Duration = Duration::from_secs(6);

/// Pick the repeat interval, 15-25 seconds
pub fn random_interval<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::from_millis(rng.gen_range(15_000..25_000))
}

/// Currently displayed notice, if any
#[derive(Debug, Clone, Default)]
pub struct BookingFeed {
    current: Option<(BookingNotice, Instant)>,
}

impl BookingFeed {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Show a random notice starting at `now`
    pub fn show_random<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Instant) -> BookingNotice {
        let notice = BOOKING_NOTICES[rng.gen_range(0..BOOKING_NOTICES.len())];
        self.current = Some((notice, now));
        notice
    }

    /// Notice to draw at `now`; expired notices are cleared
    pub fn visible(&mut self, now: Instant) -> Option<&BookingNotice> {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|(_, shown)| now.saturating_duration_since(*shown) >= NOTICE_VISIBLE_FOR);
        if expired {
            self.current = None;
        }
        self.current.as_ref().map(|(notice, _)| notice)
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_notice_hides_after_six_seconds() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut feed = BookingFeed::new();
        let start = Instant::now();

        let shown = feed.show_random(&mut rng, start);
        assert_eq!(feed.visible(start + Duration::from_secs(5)), Some(&shown));
        assert!(feed.visible(start + NOTICE_VISIBLE_FOR).is_none());
        assert!(!feed.is_visible());
    }

    #[test]
    fn test_dismiss() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut feed = BookingFeed::new();
        feed.show_random(&mut rng, Instant::now());
        feed.dismiss();
        assert!(feed.visible(Instant::now()).is_none());
    }

    #[test]
    fn test_interval_range() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let interval = random_interval(&mut rng);
            assert!(interval >= Duration::from_secs(15));
            assert!(interval < Duration::from_secs(25));
        }
    }
}
