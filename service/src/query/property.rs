//! [`Query`] fetching a single [`Property`].

use std::convert::Infallible;

use common::operations::{By, Select};
use tracerr::Traced;
use tracing as log;

use crate::{
    cache,
    domain::{property, Property},
    infra::{store, Store},
    sample, Service,
};

use super::Query;

/// [`Query`] fetching a single [`Property`] by its ID.
///
/// Cache-first: a cached entry is served without a store roundtrip, and a
/// store-fetched one joins an existing live cache. In fallback mode only
/// the sample catalog is searched. Resolves to [`None`] both for an
/// unknown ID and for a store failure, so this [`Query`] never errors.
#[derive(Clone, Debug)]
pub struct ById(pub property::Id);

impl<S> Query<ById> for Service<S>
where
    S: Store<
        Select<By<Option<Property>, property::Id>>,
        Ok = Option<Property>,
        Err = Traced<store::Error>,
    >,
{
    type Ok = Option<Property>;
    type Err = Infallible;

    async fn execute(&self, ById(id): ById) -> Result<Self::Ok, Self::Err> {
        if self.config().force_sample_catalog {
            return Ok(sample::properties()
                .into_iter()
                .find(|p| p.id == id));
        }

        let state = self.catalog().state().await;
        if let Some(found) =
            state.entries().and_then(|e| e.iter().find(|p| p.id == id))
        {
            return Ok(Some(found.clone()));
        }
        if state.is_fallback() {
            // The store was already unreachable or empty, so a miss in the
            // sample catalog is final.
            return Ok(None);
        }

        match self.store().execute(Select(By::new(id.clone()))).await {
            Ok(Some(found)) => {
                if let cache::State::Live(mut props) =
                    self.catalog().state().await
                {
                    props.push(found.clone());
                    self.catalog().replace_live(props).await;
                }
                Ok(Some(found))
            }
            Ok(None) => Ok(None),
            Err(e) => {
                log::warn!(
                    error = %e,
                    "failed to fetch the `Property` document, \
                     searching the sample catalog",
                );
                Ok(sample::properties().into_iter().find(|p| p.id == id))
            }
        }
    }
}

#[cfg(test)]
mod spec {
    use crate::{
        infra::store::mock::Mock,
        query::{ById, FetchAll},
        sample, Config, Query as _, Service,
    };

    fn service(store: Mock) -> Service<Mock> {
        Service::new(Config::default(), store)
    }

    #[tokio::test]
    async fn serves_cached_entry_without_store_roundtrip() {
        let store = Mock::with_properties(sample::properties());
        let svc = service(store.clone());
        let _ = svc.execute(FetchAll::default()).await.unwrap();

        // A failing store proves the cache is the source.
        store.set_failing(true);
        let id = sample::properties()[0].id.clone();
        let found = svc.execute(ById(id.clone())).await.unwrap();

        assert_eq!(found.map(|p| p.id), Some(id));
    }

    #[tokio::test]
    async fn fetches_miss_from_store_and_joins_live_cache() {
        let mut props = sample::properties();
        let extra = props.pop().unwrap();
        let store = Mock::with_properties(props.clone());
        let svc = service(store.clone());
        let _ = svc.execute(FetchAll::default()).await.unwrap();

        // Inserted behind the warm cache's back.
        store.set_failing(false);
        let _ = {
            use common::operations::Insert;
            use crate::infra::Store as _;

            store
                .execute(Insert(crate::domain::property::Draft {
                    details: extra.details.clone(),
                    created_at: extra.created_at,
                    updated_at: extra.updated_at,
                }))
                .await
                .unwrap()
        };
        let inserted_id = store
            .properties()
            .await
            .into_iter()
            .find(|p| p.title == extra.title)
            .map(|p| p.id)
            .unwrap();

        let found =
            svc.execute(ById(inserted_id.clone())).await.unwrap();
        assert!(found.is_some());

        let cached = svc.catalog().entries().await.unwrap();
        assert!(cached.iter().any(|p| p.id == inserted_id));
        assert!(!svc.catalog().state().await.is_fallback());
    }

    #[tokio::test]
    async fn unknown_id_resolves_to_none() {
        let store = Mock::with_properties(sample::properties());
        let svc = service(store);

        let found = svc.execute(ById("no-such".into())).await.unwrap();

        assert_eq!(found, None);
    }

    #[tokio::test]
    async fn store_failure_searches_the_sample_catalog() {
        let store = Mock::default();
        store.set_failing(true);
        let svc = service(store);

        let id = sample::properties()[0].id.clone();
        let found = svc.execute(ById(id.clone())).await.unwrap();

        assert_eq!(found.map(|p| p.id), Some(id));
    }

    #[tokio::test]
    async fn fallback_mode_searches_the_sample_catalog_only() {
        let store = Mock::default();
        store.set_failing(true);
        let svc = service(store.clone());
        let _ = svc.execute(FetchAll::default()).await.unwrap();

        // Even with the store healthy again, fallback mode stays local.
        store.set_failing(false);
        let found = svc.execute(ById("no-such".into())).await.unwrap();

        assert_eq!(found, None);
    }
}
