//! [`Command`] creating a new [`Property`].

use common::operations::Insert;
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{property, Property},
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] creating a new [`Property`].
#[derive(Clone, Debug, From)]
pub struct CreateProperty {
    /// [`property::Details`] of the new [`Property`].
    pub details: property::Details,
}

impl<S> Command<CreateProperty> for Service<S>
where
    S: Store<
        Insert<property::Draft>,
        Ok = Property,
        Err = Traced<store::Error>,
    >,
{
    type Ok = property::Id;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateProperty,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let now = property::CreationDateTime::now();
        let created = self
            .store()
            .execute(Insert(property::Draft {
                details: cmd.details,
                created_at: now,
                updated_at: now.coerce(),
            }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // The store decides the insertion position, so the whole catalog is
        // refetched on the next read.
        self.catalog().invalidate().await;

        Ok(created.id)
    }
}

/// Error of [`CreateProperty`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),
}

#[cfg(test)]
mod spec {
    use crate::{
        cache,
        command::CreateProperty,
        infra::store::mock::Mock,
        query::FetchAll,
        sample, Command as _, Config, Service,
    };

    #[tokio::test]
    async fn inserts_and_invalidates_the_cache() {
        let props = sample::properties();
        let details = props[0].details.clone();
        let store = Mock::with_properties(props);
        let svc = Service::new(Config::default(), store.clone());
        let _ = svc.execute(FetchAll::default()).await.unwrap();

        let id = svc
            .execute(CreateProperty {
                details: details.clone(),
            })
            .await
            .unwrap();

        assert!(store.properties().await.iter().any(|p| p.id == id));
        assert!(matches!(
            svc.catalog().state().await,
            cache::State::Unfetched,
        ));
    }

    #[tokio::test]
    async fn propagates_store_errors() {
        let store = Mock::default();
        store.set_failing(true);
        let svc = Service::new(Config::default(), store);

        let res = svc
            .execute(CreateProperty {
                details: sample::properties()[0].details.clone(),
            })
            .await;

        assert!(res.is_err());
    }
}
