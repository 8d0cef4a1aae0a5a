//! Domain definitions.

pub mod lead;
pub mod property;

pub use self::{lead::Lead, property::Property};
