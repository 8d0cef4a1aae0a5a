//! [`Query`] listing the captured [`Lead`]s.

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::Lead,
    infra::{store, Store},
    Service,
};

use super::Query;

/// [`Query`] listing all the captured [`Lead`]s, newest first.
///
/// Admin read path: unlike the catalog queries, store errors propagate
/// here, as there is nothing sensible to fall back to.
#[derive(Clone, Copy, Debug, Default)]
pub struct ListLeads;

impl<S> Query<ListLeads> for Service<S>
where
    S: Store<
        Select<By<Vec<Lead>, ()>>,
        Ok = Vec<Lead>,
        Err = Traced<store::Error>,
    >,
{
    type Ok = Vec<Lead>;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, _: ListLeads) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        self.store()
            .execute(Select(By::new(())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))
    }
}

/// Error of [`ListLeads`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),
}

#[cfg(test)]
mod spec {
    use common::operations::Insert;

    use crate::{
        domain::lead,
        infra::{store::mock::Mock, Store as _},
        query::ListLeads,
        Config, Service,
    };

    #[tokio::test]
    async fn lists_captured_leads_newest_first() {
        let store = Mock::default();
        for name in ["First", "Second"] {
            let _ = store
                .execute(Insert(lead::Draft {
                    name: lead::Name::new(name).unwrap(),
                    phone: lead::Phone::default(),
                    email: None,
                    message: None,
                    property_id: None,
                    created_at: lead::CreationDateTime::now(),
                }))
                .await
                .unwrap();
        }
        let svc = Service::new(Config::default(), store);

        let leads = svc.execute(ListLeads).await.unwrap();

        assert_eq!(leads.len(), 2);
        assert!(leads
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
    }

    #[tokio::test]
    async fn dangling_property_reference_still_lists() {
        use crate::{
            command::DeleteProperty,
            query::ById,
            sample,
        };

        let store = Mock::with_properties(sample::properties());
        let svc = Service::new(Config::default(), store.clone());
        let victim = sample::properties()[0].id.clone();

        let _ = store
            .execute(Insert(lead::Draft {
                name: lead::Name::new("Jane Prospect").unwrap(),
                phone: lead::Phone::default(),
                email: None,
                message: None,
                property_id: Some(victim.clone()),
                created_at: lead::CreationDateTime::now(),
            }))
            .await
            .unwrap();
        svc.execute(DeleteProperty(victim.clone())).await.unwrap();

        let leads = svc.execute(ListLeads).await.unwrap();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].property_id, Some(victim.clone()));

        // The weak reference resolves to "no property", not an error.
        let resolved = svc.execute(ById(victim)).await.unwrap();
        assert_eq!(resolved, None);
    }

    #[tokio::test]
    async fn propagates_store_errors() {
        let store = Mock::default();
        store.set_failing(true);
        let svc = Service::new(Config::default(), store);

        assert!(svc.execute(ListLeads).await.is_err());
    }
}
