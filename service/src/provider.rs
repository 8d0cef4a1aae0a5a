//! Catalog [`Provider`] definitions.

use std::{fmt, sync::Arc};

use tokio::sync::{Mutex, RwLock};
use tracing as log;

use crate::{domain::Property, query::FetchAll, Query, Service};

/// Shared front-facing handle over the [`Property`] catalog.
///
/// Keeps the last fetched catalog together with its loading/error state,
/// and deduplicates concurrent refetches: however many consumers ask at
/// once, at most one store roundtrip is in flight per [`Provider`].
///
/// Cheap to [`Clone`]: all clones observe the same state.
#[derive(Clone, Debug)]
pub struct Provider<S> {
    /// [`Service`] executing the actual catalog queries.
    service: Service<S>,

    /// State shared between the clones of this [`Provider`].
    shared: Arc<Shared>,
}

/// State shared between [`Provider`] clones.
#[derive(Debug, Default)]
struct Shared {
    /// Last observed catalog and [`Phase`].
    state: RwLock<State>,

    /// Serialization point of refetches.
    ///
    /// Holds the generation number of the last completed refetch. A waiter
    /// observing a generation bump while acquiring the guard knows its
    /// catalog was just refetched and skips its own roundtrip.
    refetch_guard: Mutex<u64>,
}

/// Inner state of a [`Provider`].
#[derive(Debug, Default)]
struct State {
    /// Last fetched catalog.
    properties: Vec<Property>,

    /// Current [`Phase`] of the catalog.
    phase: Phase,

    /// Indicator whether at least one fetch has completed.
    fetched: bool,

    /// Number of completed refetches.
    generation: u64,
}

/// Phase of a [`Provider`]'s catalog.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Phase {
    /// No fetch has happened yet.
    #[default]
    Unfetched,

    /// A fetch is in flight.
    Fetching,

    /// The catalog is populated.
    Ready,

    /// The last fetch failed with the carried message.
    Failed(String),
}

/// Point-in-time view of a [`Provider`]'s state.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// Last fetched catalog, possibly empty before the first fetch.
    pub properties: Vec<Property>,

    /// Indicator whether a fetch is in flight.
    pub loading: bool,

    /// Message of the last failed fetch, if it failed.
    pub error: Option<String>,
}

impl<S> Provider<S> {
    /// Creates a new [`Provider`] on top of the provided [`Service`].
    #[must_use]
    pub fn new(service: Service<S>) -> Self {
        Self {
            service,
            shared: Arc::new(Shared::default()),
        }
    }

    /// Returns the underlying [`Service`] of this [`Provider`].
    #[must_use]
    pub fn service(&self) -> &Service<S> {
        &self.service
    }

    /// Returns a [`Snapshot`] of the current state of this [`Provider`].
    pub async fn snapshot(&self) -> Snapshot {
        let state = self.shared.state.read().await;
        Snapshot {
            properties: state.properties.clone(),
            loading: state.phase == Phase::Fetching,
            error: match &state.phase {
                Phase::Failed(message) => Some(message.clone()),
                Phase::Unfetched | Phase::Fetching | Phase::Ready => None,
            },
        }
    }
}

impl<S> Provider<S>
where
    Service<S>: Query<FetchAll, Ok = Vec<Property>>,
    <Service<S> as Query<FetchAll>>::Err: fmt::Display,
{
    /// Fetches the catalog once.
    ///
    /// Free after the first completed fetch. Use [`Provider::refetch`] to
    /// go through a warm catalog.
    pub async fn ensure_fetched(&self) {
        if self.shared.state.read().await.fetched {
            return;
        }
        self.refetch(false).await;
    }

    /// Refetches the catalog, deduplicating concurrent calls.
    ///
    /// Resolves once some refetch has completed since this call started:
    /// a caller losing the race to a concurrent one performs no roundtrip
    /// of its own and observes the winner's state.
    pub async fn refetch(&self, force: bool) {
        let seen = self.shared.state.read().await.generation;

        let mut generation = self.shared.refetch_guard.lock().await;
        if *generation != seen {
            // A concurrent refetch completed while the guard was held.
            return;
        }
        if !force && self.shared.state.read().await.fetched {
            return;
        }

        self.shared.state.write().await.phase = Phase::Fetching;

        let result = self.service.execute(FetchAll { force }).await;

        let mut state = self.shared.state.write().await;
        *generation += 1;
        state.generation = *generation;
        match result {
            Ok(props) => {
                state.properties = props;
                state.phase = Phase::Ready;
                state.fetched = true;
            }
            Err(e) => {
                log::error!(error = %e, "catalog refetch failed");
                state.phase = Phase::Failed(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod spec {
    use super::Provider;
    use crate::{infra::store::mock::Mock, sample, Config, Service};

    fn provider(store: Mock) -> Provider<Mock> {
        Provider::new(Service::new(Config::default(), store))
    }

    #[tokio::test]
    async fn first_fetch_populates_the_snapshot() {
        let store = Mock::with_properties(sample::properties());
        let provider = provider(store);

        provider.ensure_fetched().await;

        let snapshot = provider.snapshot().await;
        assert_eq!(snapshot.properties.len(), sample::properties().len());
        assert!(!snapshot.loading);
        assert_eq!(snapshot.error, None);
    }

    #[tokio::test]
    async fn ensure_fetched_is_free_when_warm() {
        let store = Mock::with_properties(sample::properties());
        let provider = provider(store.clone());

        provider.ensure_fetched().await;
        provider.ensure_fetched().await;

        assert_eq!(store.fetch_all_calls(), 1);
    }

    #[tokio::test]
    async fn concurrent_refetches_deduplicate() {
        let store = Mock::with_properties(sample::properties());
        let provider = provider(store.clone());

        let ((), ()) =
            tokio::join!(provider.refetch(true), provider.refetch(true));

        assert_eq!(store.fetch_all_calls(), 1);
        assert!(!provider.snapshot().await.properties.is_empty());
    }

    #[tokio::test]
    async fn sequential_forced_refetches_hit_the_store() {
        let store = Mock::with_properties(sample::properties());
        let provider = provider(store.clone());

        provider.ensure_fetched().await;
        provider.refetch(true).await;

        assert_eq!(store.fetch_all_calls(), 2);
    }

    #[tokio::test]
    async fn store_outage_yields_the_sample_catalog_not_an_error() {
        let store = Mock::default();
        store.set_failing(true);
        let provider = provider(store);

        provider.ensure_fetched().await;

        let snapshot = provider.snapshot().await;
        assert_eq!(
            snapshot.properties.len(),
            sample::properties().len(),
        );
        assert_eq!(snapshot.error, None);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = Mock::with_properties(sample::properties());
        let provider = provider(store.clone());
        let twin = provider.clone();

        provider.ensure_fetched().await;
        twin.ensure_fetched().await;

        assert_eq!(store.fetch_all_calls(), 1);
        assert!(!twin.snapshot().await.properties.is_empty());
    }
}
