//! REST document [`Store`] implementation.

use std::sync::Arc;

use common::operations::{By, Delete, Insert, Select, Update};
use reqwest::header;
use secrecy::{ExposeSecret as _, SecretString};
use serde::de::DeserializeOwned;
use smart_default::SmartDefault;
use tracerr::Traced;

use crate::{
    domain::{lead, property, Lead, Property},
    infra::store::{
        self,
        documents::{LeadDocument, PropertyDocument},
        Store,
    },
};

/// [`Rest`] client configuration.
#[derive(Debug, SmartDefault)]
pub struct Config {
    /// Base URL of the store REST API.
    #[default = "http://127.0.0.1:8090/rest/v1"]
    pub base_url: String,

    /// API key sent along with every request.
    #[default(SecretString::from(String::new()))]
    pub api_key: SecretString,

    /// Collection holding `Property` documents.
    #[default = "properties"]
    pub properties_collection: String,

    /// Collection holding `Lead` documents.
    #[default = "leads"]
    pub leads_collection: String,
}

/// Client of a PostgREST-flavored document [`Store`].
///
/// Cheap to [`Clone`]: clones share the HTTP connection pool and the
/// [`Config`].
#[derive(Clone, Debug)]
pub struct Rest {
    /// Underlying HTTP client.
    http: reqwest::Client,

    /// Configuration of this client.
    config: Arc<Config>,
}

impl Rest {
    /// Creates a new [`Rest`] client with the provided [`Config`].
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }

    /// Returns the URL of the given `collection`.
    fn collection_url(&self, collection: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        format!("{base}/{collection}")
    }

    /// Attaches the authentication headers to the given request.
    fn authorized(
        &self,
        req: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        let key = self.config.api_key.expose_secret();
        req.header("apikey", key)
            .header(header::AUTHORIZATION, format!("Bearer {key}"))
    }

    /// Sends the given request and decodes its reply as a `T`.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, Traced<store::Error>> {
        use store::Error as E;

        let resp = self
            .authorized(req)
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> E))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(tracerr::new!(E::BadStatus(status.as_u16())));
        }

        let raw = resp
            .text()
            .await
            .map_err(tracerr::from_and_wrap!(=> E))?;
        serde_json::from_str(&raw).map_err(tracerr::from_and_wrap!(=> E))
    }

    /// Sends the given request, dropping its reply body.
    async fn send(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<(), Traced<store::Error>> {
        use store::Error as E;

        let resp = self
            .authorized(req)
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> E))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(tracerr::new!(E::BadStatus(status.as_u16())));
        }
        Ok(())
    }
}

impl Store<Select<By<Vec<Property>, ()>>> for Rest {
    type Ok = Vec<Property>;
    type Err = Traced<store::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Property>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .http
            .get(self.collection_url(&self.config.properties_collection))
            .query(&[("select", "*"), ("order", "createdAt.desc")]);
        let docs: Vec<PropertyDocument> = self.fetch_json(req).await?;
        Ok(docs.into_iter().map(Property::from).collect())
    }
}

impl Store<Select<By<Option<Property>, property::Id>>> for Rest {
    type Ok = Option<Property>;
    type Err = Traced<store::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Property>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id_filter = format!("eq.{}", by.into_inner());
        let req = self
            .http
            .get(self.collection_url(&self.config.properties_collection))
            .query(&[("select", "*"), ("id", id_filter.as_str())]);
        let docs: Vec<PropertyDocument> = self.fetch_json(req).await?;
        Ok(docs.into_iter().next().map(Property::from))
    }
}

impl Store<Insert<property::Draft>> for Rest {
    type Ok = Property;
    type Err = Traced<store::Error>;

    async fn execute(
        &self,
        Insert(draft): Insert<property::Draft>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .http
            .post(self.collection_url(&self.config.properties_collection))
            .header("Prefer", "return=representation")
            .json(&draft);
        let docs: Vec<PropertyDocument> = self.fetch_json(req).await?;
        docs.into_iter().next().map(Property::from).ok_or_else(|| {
            tracerr::new!(store::Error::MissingRepresentation)
        })
    }
}

impl Store<Update<By<Property, (property::Id, property::Patch)>>> for Rest {
    type Ok = ();
    type Err = Traced<store::Error>;

    async fn execute(
        &self,
        Update(by): Update<By<Property, (property::Id, property::Patch)>>,
    ) -> Result<Self::Ok, Self::Err> {
        let (id, patch) = by.into_inner();
        let id_filter = format!("eq.{id}");
        let req = self
            .http
            .patch(self.collection_url(&self.config.properties_collection))
            .query(&[("id", id_filter.as_str())])
            .json(&patch);
        self.send(req).await
    }
}

impl Store<Delete<By<Property, property::Id>>> for Rest {
    type Ok = ();
    type Err = Traced<store::Error>;

    async fn execute(
        &self,
        Delete(by): Delete<By<Property, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id_filter = format!("eq.{}", by.into_inner());
        let req = self
            .http
            .delete(self.collection_url(&self.config.properties_collection))
            .query(&[("id", id_filter.as_str())]);
        self.send(req).await
    }
}

impl Store<Insert<lead::Draft>> for Rest {
    type Ok = Lead;
    type Err = Traced<store::Error>;

    async fn execute(
        &self,
        Insert(draft): Insert<lead::Draft>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .http
            .post(self.collection_url(&self.config.leads_collection))
            .header("Prefer", "return=representation")
            .json(&draft);
        let docs: Vec<LeadDocument> = self.fetch_json(req).await?;
        docs.into_iter().next().map(Lead::from).ok_or_else(|| {
            tracerr::new!(store::Error::MissingRepresentation)
        })
    }
}

impl Store<Select<By<Vec<Lead>, ()>>> for Rest {
    type Ok = Vec<Lead>;
    type Err = Traced<store::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Lead>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        let req = self
            .http
            .get(self.collection_url(&self.config.leads_collection))
            .query(&[("select", "*"), ("order", "createdAt.desc")]);
        let docs: Vec<LeadDocument> = self.fetch_json(req).await?;
        Ok(docs.into_iter().map(Lead::from).collect())
    }
}
