//! In-memory content store for Tabula
//!
//! Provides [`MemoryStore`], a `BTreeMap`-backed implementation of the
//! `ContentStore` trait. It serves as the default store in embedded use and
//! as the fixture backend in tests; durable backends live behind the same
//! trait.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;

pub use memory::MemoryStore;
