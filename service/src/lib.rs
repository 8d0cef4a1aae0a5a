//! Service contains the business logic of the application.

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod cache;
pub mod command;
pub mod domain;
pub mod infra;
pub mod provider;
pub mod query;
pub mod read;
pub mod sample;

pub use self::{command::Command, provider::Provider, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// Indicator whether the sample catalog should be served without ever
    /// touching the property store.
    ///
    /// Intended for demo deployments with no store provisioned.
    pub force_sample_catalog: bool,
}

/// Domain service.
///
/// Generic over the document store `S` it reads from and writes to, and
/// cheap to [`Clone`]: all clones share the same process-wide
/// [`cache::Catalog`].
#[derive(Clone, Debug)]
pub struct Service<S> {
    /// Configuration of this [`Service`].
    config: Config,

    /// Document store of this [`Service`].
    store: S,

    /// Process-wide [`Property`] cache of this [`Service`].
    ///
    /// [`Property`]: domain::Property
    catalog: cache::Catalog,
}

impl<S> Service<S> {
    /// Creates a new [`Service`] with the provided parameters.
    pub fn new(config: Config, store: S) -> Self {
        Self {
            config,
            store,
            catalog: cache::Catalog::default(),
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the document store of this [`Service`].
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the process-wide [`cache::Catalog`] of this [`Service`].
    #[must_use]
    pub fn catalog(&self) -> &cache::Catalog {
        &self.catalog
    }
}
