//! Infrastructure layer.

pub mod store;

pub use self::store::{Rest, Store};
