//! Static marketing content: destinations, testimonials, badges, seeds

/// Featured destination with a "from" price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub city: &'static str,
    pub country: &'static str,
    pub price: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub route: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

/// Seed for the live deal ticker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealSeed {
    pub id: u32,
    pub route: &'static str,
    pub price: u32,
    pub trip_label: &'static str,
    pub expires: &'static str,
}

/// A "just booked" notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingNotice {
    pub name: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    pub saved: u32,
}

pub const TOP_DESTINATIONS: [Destination; 6] = [
    Destination { city: "London", country: "United Kingdom", price: 349 },
    Destination { city: "Tokyo", country: "Japan", price: 689 },
    Destination { city: "Paris", country: "France", price: 399 },
    Destination { city: "Dubai", country: "UAE", price: 549 },
    Destination { city: "Rome", country: "Italy", price: 429 },
    Destination { city: "Bali", country: "Indonesia", price: 719 },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Jenkins",
        route: "New York to London",
        text: "I was skeptical about the 50% off claim, but the agent found me a business class seat for the price of economy. Unbelievable service.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        route: "SFO to Tokyo",
        text: "Saved $1,200 on my family trip to Japan. The phone call was quick, professional, and they handled everything.",
        rating: 5,
    },
    Testimonial {
        name: "Elena Rodriguez",
        route: "Miami to Madrid",
        text: "Best travel hack I've found. Don't book online yourself, let these guys find the unpublished rates.",
        rating: 5,
    },
];

pub const TRUST_BADGES: [&str; 4] = [
    "ATOL Protected",
    "4.9/5 TrustScore",
    "10k+ Happy Flyers",
    "24/7 Support",
];

pub const DEAL_SEEDS: [DealSeed; 6] = [
    DealSeed { id: 1, route: "NYC to London", price: 349, trip_label: "Roundtrip", expires: "2h left" },
    DealSeed { id: 2, route: "LAX to Tokyo", price: 689, trip_label: "Roundtrip", expires: "45m left" },
    DealSeed { id: 3, route: "MIA to Paris", price: 459, trip_label: "Roundtrip", expires: "5h left" },
    DealSeed { id: 4, route: "CHI to Dubai", price: 699, trip_label: "Business Class", expires: "1h left" },
    DealSeed { id: 5, route: "SFO to Singapore", price: 799, trip_label: "Roundtrip", expires: "3h left" },
    DealSeed { id: 6, route: "BOS to Rome", price: 429, trip_label: "Roundtrip", expires: "1h left" },
];

pub const BOOKING_NOTICES: [BookingNotice; 5] = [
    BookingNotice { name: "James D.", from: "Chicago", to: "London", saved: 420 },
    BookingNotice { name: "Amanda K.", from: "Los Angeles", to: "Bali", saved: 550 },
    BookingNotice { name: "Robert S.", from: "New York", to: "Paris", saved: 380 },
    BookingNotice { name: "Emily W.", from: "Miami", to: "Rome", saved: 310 },
    BookingNotice { name: "David L.", from: "San Francisco", to: "Tokyo", saved: 600 },
];

/// Long-form copy shown under the search form
pub const SEO_SECTIONS: [(&str, &str); 3] = [
    (
        "How do we find cheaper international fares?",
        "Airlines release a share of long-haul seats to consolidators at contracted rates that never appear on public booking sites. Our agents search that inventory by phone and lock the fare for you.",
    ),
    (
        "Is business class really this affordable?",
        "Premium cabins are the hardest seats for airlines to sell close to departure. Unsold business and first class inventory is often released through private channels at a fraction of the published fare.",
    ),
    (
        "Why do you ask for a phone number?",
        "Consolidator fares can only be ticketed through an agent. A travel expert calls to confirm the itinerary, passenger names and the final price before anything is booked.",
    ),
];

/// Small print shown at the bottom of the marketing sections
pub const DISCLAIMER: &str = "*Savings claims based on comparison with major public OTA rates for same-day bookings on select international routes. Prices subject to availability and change without notice.";
