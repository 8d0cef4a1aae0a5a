//! [`Query`] fetching the whole [`Property`] catalog.

use std::convert::Infallible;

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::Property,
    infra::{store, Store},
    sample, Service,
};

use super::Query;

/// [`Query`] fetching the whole [`Property`] catalog, newest first.
///
/// Cache-first: a warm [`Catalog`] is served without a store roundtrip
/// unless `force` is set. A failed or empty store fetch falls back to the
/// sample catalog, so this [`Query`] never errors.
///
/// [`Catalog`]: crate::cache::Catalog
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchAll {
    /// Indicator whether the cache must be bypassed and the catalog
    /// refetched from the store.
    pub force: bool,
}

impl<S> Query<FetchAll> for Service<S>
where
    S: Store<
        Select<By<Vec<Property>, ()>>,
        Ok = Vec<Property>,
        Err = Traced<store::Error>,
    >,
{
    type Ok = Vec<Property>;
    type Err = Infallible;

    async fn execute(&self, query: FetchAll) -> Result<Self::Ok, Self::Err> {
        if self.config().force_sample_catalog {
            let props = sample::properties();
            self.catalog().replace_fallback(props.clone()).await;
            return Ok(props);
        }

        if !query.force {
            if let Some(cached) = self.catalog().entries().await {
                return Ok(cached);
            }
        }

        match self.store().execute(Select(By::new(()))).await {
            Ok(props) if !props.is_empty() => {
                self.catalog().replace_live(props.clone()).await;
                Ok(props)
            }
            Ok(_) => {
                log::warn!(
                    reason = "empty",
                    "no `Property` documents in the store, \
                     serving the sample catalog",
                );
                let props = sample::properties();
                self.catalog().replace_fallback(props.clone()).await;
                Ok(props)
            }
            Err(e) => {
                log::warn!(
                    reason = "error",
                    error = %e,
                    "failed to fetch `Property` documents, \
                     serving the sample catalog",
                );
                let props = sample::properties();
                self.catalog().replace_fallback(props.clone()).await;
                Ok(props)
            }
        }
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        cache, infra::store::mock::Mock, query::FetchAll, sample, Config,
        Query as _, Service,
    };

    fn service(store: Mock) -> Service<Mock> {
        Service::new(Config::default(), store)
    }

    #[tokio::test]
    async fn serves_live_catalog_from_store() {
        let store = Mock::with_properties(sample::properties());
        let svc = service(store);

        let props = svc.execute(FetchAll::default()).await.unwrap();

        assert_eq!(props.len(), sample::properties().len());
        assert!(!svc.catalog().state().await.is_fallback());
    }

    #[tokio::test]
    async fn warm_cache_skips_the_store() {
        let store = Mock::with_properties(sample::properties());
        let svc = service(store.clone());

        let _ = svc.execute(FetchAll::default()).await.unwrap();
        let _ = svc.execute(FetchAll::default()).await.unwrap();

        assert_eq!(store.fetch_all_calls(), 1);
    }

    #[tokio::test]
    async fn force_bypasses_warm_cache() {
        let store = Mock::with_properties(sample::properties());
        let svc = service(store.clone());

        let _ = svc.execute(FetchAll::default()).await.unwrap();
        let _ = svc.execute(FetchAll { force: true }).await.unwrap();

        assert_eq!(store.fetch_all_calls(), 2);
    }

    #[tokio::test]
    async fn falls_back_on_store_error() {
        let store = Mock::with_properties(sample::properties());
        store.set_failing(true);
        let svc = service(store);

        let props = svc.execute(FetchAll::default()).await.unwrap();

        assert!(!props.is_empty());
        assert!(svc.catalog().state().await.is_fallback());
    }

    #[tokio::test]
    async fn falls_back_on_empty_store() {
        let svc = service(Mock::default());

        let props = svc.execute(FetchAll::default()).await.unwrap();

        assert_eq!(props.len(), sample::properties().len());
        assert!(svc.catalog().state().await.is_fallback());
    }

    #[tokio::test]
    async fn forced_sample_catalog_never_touches_the_store() {
        let store = Mock::with_properties(sample::properties());
        let svc = Service::new(
            Config {
                force_sample_catalog: true,
            },
            store.clone(),
        );

        let props = svc.execute(FetchAll { force: true }).await.unwrap();

        assert_eq!(store.fetch_all_calls(), 0);
        assert!(!props.is_empty());
        assert!(matches!(
            svc.catalog().state().await,
            cache::State::Fallback(_),
        ));
    }
}
