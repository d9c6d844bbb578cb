//! Service providers and distance-aware views over them.
//!
//! A [`Provider`] is the directory record for a tradesperson or crew. Its
//! location is optional: providers onboard before sharing coordinates, and
//! every distance computation has to cope with that gap rather than reject
//! the record.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{SerbisyoError, ValidationError};
use crate::geo::{self, Coordinates};
use crate::id::ProviderId;
use crate::time::Timestamp;

/// A registered service provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: ProviderId,
    pub name: String,
    /// Catalog category label this provider serves, e.g. `"Plumbing"`.
    pub category: String,
    /// Last known coordinates, if the provider has shared any.
    pub location: Option<Coordinates>,
    pub member_since: Timestamp,
}

impl Provider {
    /// Create a builder for constructing a [`Provider`].
    #[must_use]
    pub fn builder() -> ProviderBuilder {
        ProviderBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SerbisyoError::Validation`] when `name` or `category` is
    /// empty.
    pub fn validate(&self) -> Result<(), SerbisyoError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.category.is_empty() {
            return Err(ValidationError::EmptyCategory.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Provider`].
#[derive(Debug, Default)]
pub struct ProviderBuilder {
    id: Option<ProviderId>,
    name: Option<String>,
    category: Option<String>,
    location: Option<Coordinates>,
    member_since: Option<Timestamp>,
}

impl ProviderBuilder {
    #[must_use]
    pub fn id(mut self, id: ProviderId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: Coordinates) -> Self {
        self.location = Some(location);
        self
    }

    #[must_use]
    pub fn member_since(mut self, member_since: Timestamp) -> Self {
        self.member_since = Some(member_since);
        self
    }

    /// Consume the builder, validate, and return a [`Provider`].
    ///
    /// A fresh random id and the current time are filled in when not set;
    /// the location stays [`None`] unless given.
    ///
    /// # Errors
    ///
    /// Returns [`SerbisyoError::Validation`] if `name` or `category` is
    /// missing or empty.
    pub fn build(self) -> Result<Provider, SerbisyoError> {
        let provider = Provider {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            location: self.location,
            member_since: self.member_since.unwrap_or_else(crate::time::now),
        };
        provider.validate()?;
        Ok(provider)
    }
}

/// A provider annotated with its distance from a search origin.
///
/// Both distance fields are [`None`] when either side of the computation
/// lacks coordinates. Such entries still appear in listings; they just sort
/// after everything with a known distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyProvider {
    pub provider: Provider,
    pub distance_km: Option<f64>,
    /// Human-readable rendering of `distance_km`, e.g. `"3.4 km"`.
    pub distance_label: Option<String>,
}

impl NearbyProvider {
    /// Annotate `provider` with its distance from `origin`.
    ///
    /// The distance is only computed when both the origin and the
    /// provider's location are known.
    #[must_use]
    pub fn from_origin(provider: Provider, origin: Option<Coordinates>) -> Self {
        let distance_km = match (origin, provider.location) {
            (Some(from), Some(to)) => Some(from.distance_km(to)),
            _ => None,
        };
        let distance_label = distance_km.map(geo::format_distance);
        Self {
            provider,
            distance_km,
            distance_label,
        }
    }
}

/// Return a copy of `providers` ordered by ascending distance.
///
/// Entries without a distance go last, and the sort is stable: ties and
/// distance-less entries keep their input order. The input slice is left
/// untouched.
#[must_use]
pub fn sort_by_distance(providers: &[NearbyProvider]) -> Vec<NearbyProvider> {
    let mut sorted = providers.to_vec();
    sorted.sort_by(|a, b| match (a.distance_km, b.distance_km) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}
