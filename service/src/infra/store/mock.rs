//! In-memory [`Store`] used by tests.

use std::sync::{
    atomic::{AtomicBool, AtomicUsize, Ordering},
    Arc,
};

use common::operations::{By, Delete, Insert, Select, Update};
use tokio::sync::RwLock;
use tracerr::Traced;

use crate::{
    domain::{lead, property, Lead, Property},
    infra::store::{self, Store},
};

/// In-memory [`Store`] mock.
///
/// Every operation suspends once before touching the data, the way a real
/// network client would, so concurrency tests exercise actual interleaving.
#[derive(Clone, Debug, Default)]
pub(crate) struct Mock(Arc<Inner>);

/// State shared between [`Mock`] clones.
#[derive(Debug, Default)]
struct Inner {
    /// Stored [`Property`] documents.
    properties: RwLock<Vec<Property>>,

    /// Stored [`Lead`] documents.
    leads: RwLock<Vec<Lead>>,

    /// Indicator whether every operation should fail.
    failing: AtomicBool,

    /// Source of the IDs assigned on insertion.
    next_id: AtomicUsize,

    /// Number of executed whole-catalog fetches.
    fetch_all_calls: AtomicUsize,
}

impl Mock {
    /// Creates a new [`Mock`] prefilled with the given `props`.
    pub(crate) fn with_properties(props: Vec<Property>) -> Self {
        let mock = Self::default();
        *mock.0.properties.try_write().expect("fresh lock") = props;
        mock
    }

    /// Makes every following operation of this [`Mock`] fail (or succeed
    /// again).
    pub(crate) fn set_failing(&self, failing: bool) {
        self.0.failing.store(failing, Ordering::SeqCst);
    }

    /// Returns the number of whole-catalog fetches executed so far.
    pub(crate) fn fetch_all_calls(&self) -> usize {
        self.0.fetch_all_calls.load(Ordering::SeqCst)
    }

    /// Returns the stored [`Property`] documents.
    pub(crate) async fn properties(&self) -> Vec<Property> {
        self.0.properties.read().await.clone()
    }

    /// Returns the stored [`Lead`] documents.
    pub(crate) async fn leads(&self) -> Vec<Lead> {
        self.0.leads.read().await.clone()
    }

    /// Suspends once and fails if this [`Mock`] is failing.
    async fn roundtrip(&self) -> Result<(), Traced<store::Error>> {
        tokio::task::yield_now().await;
        if self.0.failing.load(Ordering::SeqCst) {
            return Err(tracerr::new!(store::Error::BadStatus(503)));
        }
        Ok(())
    }

    /// Returns a fresh store-assigned ID.
    fn assign_id(&self) -> String {
        format!("mock-{}", self.0.next_id.fetch_add(1, Ordering::SeqCst))
    }
}

impl Store<Select<By<Vec<Property>, ()>>> for Mock {
    type Ok = Vec<Property>;
    type Err = Traced<store::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Property>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let _ = self.0.fetch_all_calls.fetch_add(1, Ordering::SeqCst);
        self.roundtrip().await?;
        let mut props = self.0.properties.read().await.clone();
        props.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(props)
    }
}

impl Store<Select<By<Option<Property>, property::Id>>> for Mock {
    type Ok = Option<Property>;
    type Err = Traced<store::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Property>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.roundtrip().await?;
        let id = by.into_inner();
        Ok(self
            .0
            .properties
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }
}

impl Store<Insert<property::Draft>> for Mock {
    type Ok = Property;
    type Err = Traced<store::Error>;

    async fn execute(
        &self,
        Insert(draft): Insert<property::Draft>,
    ) -> Result<Self::Ok, Self::Err> {
        self.roundtrip().await?;
        let prop = Property {
            id: self.assign_id().into(),
            details: draft.details,
            created_at: draft.created_at,
            updated_at: draft.updated_at,
        };
        self.0.properties.write().await.push(prop.clone());
        Ok(prop)
    }
}

impl Store<Update<By<Property, (property::Id, property::Patch)>>> for Mock {
    type Ok = ();
    type Err = Traced<store::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<Property, (property::Id, property::Patch)>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.roundtrip().await?;
        let (id, patch) = by.into_inner();
        let mut props = self.0.properties.write().await;
        if let Some(prop) = props.iter_mut().find(|p| p.id == id) {
            apply(patch, prop);
        }
        Ok(())
    }
}

impl Store<Delete<By<Property, property::Id>>> for Mock {
    type Ok = ();
    type Err = Traced<store::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Property, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.roundtrip().await?;
        let id = by.into_inner();
        self.0.properties.write().await.retain(|p| p.id != id);
        Ok(())
    }
}

impl Store<Insert<lead::Draft>> for Mock {
    type Ok = Lead;
    type Err = Traced<store::Error>;

    async fn execute(
        &self,
        Insert(draft): Insert<lead::Draft>,
    ) -> Result<Self::Ok, Self::Err> {
        self.roundtrip().await?;
        let lead = Lead {
            id: Some(self.assign_id().into()),
            name: draft.name,
            phone: draft.phone,
            email: draft.email,
            message: draft.message,
            property_id: draft.property_id,
            created_at: draft.created_at,
        };
        self.0.leads.write().await.push(lead.clone());
        Ok(lead)
    }
}

impl Store<Select<By<Vec<Lead>, ()>>> for Mock {
    type Ok = Vec<Lead>;
    type Err = Traced<store::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Lead>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.roundtrip().await?;
        let mut leads = self.0.leads.read().await.clone();
        leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(leads)
    }
}

/// Applies the given `patch` to the given `prop` the way the real store
/// does server-side.
fn apply(patch: property::Patch, prop: &mut Property) {
    let property::Patch {
        title,
        label,
        description,
        region,
        kind,
        for_rent,
        for_sale,
        is_featured,
        price,
        currency,
        bedrooms,
        bathrooms,
        area,
        amenities,
        main_image,
        gallery_images,
        coordinates,
        updated_at,
    } = patch;

    let details = &mut prop.details;
    if let Some(v) = title {
        details.title = v;
    }
    if let Some(v) = label {
        details.label = v;
    }
    if let Some(v) = description {
        details.description = v;
    }
    if let Some(v) = region {
        details.region = v;
    }
    if let Some(v) = kind {
        details.kind = v;
    }
    if let Some(v) = for_rent {
        details.for_rent = v;
    }
    if let Some(v) = for_sale {
        details.for_sale = v;
    }
    if let Some(v) = is_featured {
        details.is_featured = v;
    }
    if let Some(v) = price {
        details.price = v;
    }
    if let Some(v) = currency {
        details.currency = v;
    }
    if let Some(v) = bedrooms {
        details.bedrooms = v;
    }
    if let Some(v) = bathrooms {
        details.bathrooms = v;
    }
    if let Some(v) = area {
        details.area = v;
    }
    if let Some(v) = amenities {
        details.amenities = v;
    }
    if let Some(v) = main_image {
        details.main_image = v;
    }
    if let Some(v) = gallery_images {
        details.gallery_images = v;
    }
    if let Some(v) = coordinates {
        details.coordinates = Some(v);
    }
    if let Some(v) = updated_at {
        prop.updated_at = v;
    }
}
