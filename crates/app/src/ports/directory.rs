//! Provider directory port — read access to the provider roster.

use std::future::Future;

use serbisyo_domain::error::SerbisyoError;
use serbisyo_domain::id::ProviderId;
use serbisyo_domain::provider::Provider;

/// Read access to the provider directory.
///
/// The directory is owned by another system; this port only exposes the
/// lookups the discovery use-cases need. Implementations must be safe to
/// share across tasks.
pub trait ProviderDirectory: Send + Sync {
    /// Every provider known to the directory.
    fn all(&self) -> impl Future<Output = Result<Vec<Provider>, SerbisyoError>> + Send;

    /// Providers serving the given catalog category, compared
    /// case-insensitively.
    fn find_by_category(
        &self,
        category: &str,
    ) -> impl Future<Output = Result<Vec<Provider>, SerbisyoError>> + Send;

    /// Look up a single provider, [`None`] when the id is unknown.
    fn get_by_id(
        &self,
        id: ProviderId,
    ) -> impl Future<Output = Result<Option<Provider>, SerbisyoError>> + Send;
}
