//! Document [`Store`]-related implementations.

mod documents;
#[cfg(test)]
pub(crate) mod mock;
pub mod rest;

use derive_more::{Display, Error as StdError, From};

pub use self::rest::Rest;

/// Document store operation.
pub use common::Handler as Store;

/// [`Store`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Store replied with a non-success HTTP status.
    #[display("store replied with {_0} HTTP status")]
    #[from(ignore)]
    BadStatus(#[error(not(source))] u16),

    /// Store reply cannot be decoded.
    #[display("failed to decode store reply: {_0}")]
    Decode(serde_json::Error),

    /// Store returned no representation of an inserted document.
    #[display("store returned no representation of the inserted document")]
    MissingRepresentation,

    /// Underlying HTTP transport failure.
    #[display("HTTP transport error: {_0}")]
    Transport(reqwest::Error),
}
