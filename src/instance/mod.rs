//! Problem instances.
//!
//! An [`Instance`] is a capacity plus an ordered list of [`Item`]s. It is
//! read-only once built; every strategy works on its own copy of the items.
//!
//! The [`loader`](parse_instance) turns the plain-text format into an
//! instance and rejects malformed or negative input with an
//! [`InstanceError`], so the strategies only ever see validated data.

mod loader;
mod types;

pub use loader::{load_instance, parse_instance, InstanceError};
pub use types::{Instance, Item};
