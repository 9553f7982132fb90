//! Kinpath Core - Family dataset model
//!
//! This crate holds the people and relationships that every other Kinpath
//! crate reads. It knows how to load a family file from disk, which entries
//! are usable, and which ones get skipped.
//!
//! # Example
//!
//! ```no_run
//! use kinpath_core::FamilyDataset;
//!
//! let dataset = FamilyDataset::load("family.json").unwrap();
//! for person in dataset.people() {
//!     println!("{} {}", person.id, person.name);
//! }
//! ```

mod dataset;
mod error;
mod person;
mod relationship;

pub use dataset::{FamilyDataset, LoadReport};
pub use error::{DatasetError, Result};
pub use person::{Person, PersonId};
pub use relationship::{Relationship, RelationshipKind};
