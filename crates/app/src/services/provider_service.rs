//! Provider service — use-cases for finding service providers.

use serbisyo_domain::error::{NotFoundError, SerbisyoError};
use serbisyo_domain::geo::Coordinates;
use serbisyo_domain::id::ProviderId;
use serbisyo_domain::provider::{self, NearbyProvider, Provider};

use crate::ports::ProviderDirectory;

/// Use-cases over the provider directory.
///
/// Generic over the [`ProviderDirectory`] port so binaries can plug in the
/// seed directory, a remote client, or a test stub.
pub struct ProviderService<D> {
    directory: D,
}

impl<D: ProviderDirectory> ProviderService<D> {
    /// Create a new service backed by the given directory.
    pub fn new(directory: D) -> Self {
        Self { directory }
    }

    /// Every provider in the directory.
    ///
    /// # Errors
    ///
    /// Propagates any [`SerbisyoError`] from the directory.
    pub async fn list_providers(&self) -> Result<Vec<Provider>, SerbisyoError> {
        self.directory.all().await
    }

    /// One provider by id.
    ///
    /// # Errors
    ///
    /// Returns [`SerbisyoError::NotFound`] when the directory has no
    /// provider with that id, and propagates directory failures.
    pub async fn get_provider(&self, id: ProviderId) -> Result<Provider, SerbisyoError> {
        self.directory.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Provider",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Providers near an origin, closest first.
    ///
    /// Restricts to `category` when given, otherwise considers the whole
    /// directory. Each provider is annotated with its distance from
    /// `origin`; providers (or requests) without coordinates keep their
    /// directory order at the end of the list.
    ///
    /// # Errors
    ///
    /// Propagates any [`SerbisyoError`] from the directory.
    #[tracing::instrument(skip(self))]
    pub async fn find_nearby(
        &self,
        category: Option<&str>,
        origin: Option<Coordinates>,
    ) -> Result<Vec<NearbyProvider>, SerbisyoError> {
        let providers = match category {
            Some(category) => self.directory.find_by_category(category).await?,
            None => self.directory.all().await?,
        };
        let annotated: Vec<NearbyProvider> = providers
            .into_iter()
            .map(|provider| NearbyProvider::from_origin(provider, origin))
            .collect();
        Ok(provider::sort_by_distance(&annotated))
    }
}
