//! Seed implementation of the provider directory port.
//!
//! Serves a fixed roster of Metro Manila providers straight from memory.
//! This is the directory the server boots with until the real partner
//! directory is wired in, and it doubles as a convenient fixture for
//! integration tests.

use serbisyo_app::ports::ProviderDirectory;
use serbisyo_domain::error::SerbisyoError;
use serbisyo_domain::geo::Coordinates;
use serbisyo_domain::id::ProviderId;
use serbisyo_domain::provider::Provider;
use serbisyo_domain::time::{self, Timestamp};

/// Provider directory backed by an in-memory roster.
#[derive(Debug, Clone)]
pub struct SeedProviderDirectory {
    providers: Vec<Provider>,
}

impl SeedProviderDirectory {
    /// Directory with an explicit roster, mainly for tests.
    #[must_use]
    pub fn with_providers(providers: Vec<Provider>) -> Self {
        Self { providers }
    }
}

impl Default for SeedProviderDirectory {
    /// The built-in roster: a dozen providers spread over Metro Manila,
    /// covering every catalog category. One provider deliberately has no
    /// coordinates so distance-less handling stays exercised end to end.
    fn default() -> Self {
        Self {
            providers: vec![
                seed(
                    "Lumina Electrical Works",
                    "Electrical",
                    at(14.5547, 121.0244),
                    joined(2021, 3, 15),
                ),
                seed(
                    "Kuryente Bros",
                    "Electrical",
                    at(14.6760, 121.0437),
                    joined(2022, 7, 1),
                ),
                seed(
                    "Mang Tonyo Tubero Services",
                    "Plumbing",
                    at(14.5764, 121.0851),
                    joined(2020, 11, 20),
                ),
                seed(
                    "AquaFix Plumbing",
                    "Plumbing",
                    at(14.5176, 121.0509),
                    joined(2023, 1, 9),
                ),
                seed(
                    "ChillPro Aircon Care",
                    "Aircon",
                    at(14.5794, 121.0359),
                    joined(2021, 8, 30),
                ),
                seed(
                    "North Breeze Aircon",
                    "Aircon",
                    at(14.6507, 120.9830),
                    joined(2022, 4, 18),
                ),
                seed(
                    "Linis Tahanan Cleaners",
                    "Cleaning",
                    at(14.5995, 120.9842),
                    joined(2019, 6, 5),
                ),
                seed(
                    "SparkleHome Deep Clean",
                    "Cleaning",
                    at(14.4793, 121.0198),
                    joined(2023, 5, 22),
                ),
                seed(
                    "Narra Woodcraft",
                    "Carpentry",
                    at(14.6507, 121.1029),
                    joined(2020, 2, 14),
                ),
                seed(
                    "HandyFix Appliance Center",
                    "Appliance Repair",
                    at(14.6019, 121.0355),
                    joined(2021, 12, 3),
                ),
                seed(
                    "SafeNest Pest Solutions",
                    "Pest Control",
                    at(14.4445, 120.9939),
                    joined(2022, 9, 27),
                ),
                seed("Pinta Perfect", "Painting", None, joined(2023, 3, 8)),
            ],
        }
    }
}

fn seed(
    name: &str,
    category: &str,
    location: Option<Coordinates>,
    member_since: Timestamp,
) -> Provider {
    Provider {
        id: ProviderId::new(),
        name: name.to_string(),
        category: category.to_string(),
        location,
        member_since,
    }
}

fn at(lat: f64, lng: f64) -> Option<Coordinates> {
    Some(Coordinates::new(lat, lng))
}

fn joined(year: i32, month: u32, day: u32) -> Timestamp {
    time::date(year, month, day).unwrap_or_else(time::now)
}

impl ProviderDirectory for SeedProviderDirectory {
    async fn all(&self) -> Result<Vec<Provider>, SerbisyoError> {
        Ok(self.providers.clone())
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<Provider>, SerbisyoError> {
        Ok(self
            .providers
            .iter()
            .filter(|provider| provider.category.eq_ignore_ascii_case(category))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: ProviderId) -> Result<Option<Provider>, SerbisyoError> {
        Ok(self
            .providers
            .iter()
            .find(|provider| provider.id == id)
            .cloned())
    }
}
