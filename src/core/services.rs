use crate::core::GhError;
use crate::profile::NormalizedProfile;
use crate::window::RequestWindow;

/// Which upstream capability a [`ProfileSource`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// Combined GraphQL query with a bearer credential.
    Authenticated,
    /// Unauthenticated REST listing of public repositories (degraded mode).
    PublicFallback,
}

/// A trait for upstreams that can produce a [`NormalizedProfile`] for a request window.
///
/// There are two implementations, chosen once from configuration: the GraphQL
/// client when a credential is present and the public REST listing otherwise.
/// Tests can plug in their own to count or script upstream calls.
pub trait ProfileSource: Send + Sync {
    /// Fetches and normalizes the profile for `window`.
    ///
    /// # Errors
    /// Returns one of the upstream variants of [`GhError`] when the call fails or the
    /// body does not have the expected shape.
    fn fetch_profile<'a>(
        &'a self,
        window: &'a RequestWindow,
    ) -> core::pin::Pin<
        Box<dyn core::future::Future<Output = Result<NormalizedProfile, GhError>> + Send + 'a>,
    >;

    /// The capability this source uses.
    fn mode(&self) -> SourceMode;
}
