//! Core types for the prodcat product table.
//!
//! The three base tables (users, categories, products) are joined once into
//! [`join::EnrichedProduct`] rows. A [`filter::FilterState`] then selects the
//! visible subset. Nothing here touches a terminal or the filesystem except
//! [`tables::Tables::from_dir`].

pub mod catalog;
pub mod error;
pub mod filter;
pub mod join;
pub mod model;
pub mod tables;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use filter::{FilterState, OwnerFilter, SortColumn};
pub use join::{EnrichedProduct, enrich};
pub use tables::Tables;
