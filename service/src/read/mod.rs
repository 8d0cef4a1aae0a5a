//! Read entities definitions.

pub mod property;

pub use self::property::Filter;
