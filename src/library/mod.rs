//! Video catalog: the catalog file, the filter engine and the store.
//!
//! # Data Flow
//!
//! ```text
//! catalog.json ──load──> CatalogStore ──criteria──> filter_videos ──> derived view
//! ```

pub mod catalog;
pub mod filter;
pub mod store;

pub use catalog::{CatalogError, CatalogFile};
pub use filter::{filter_indices, filter_videos, matches, matches_query};
pub use store::CatalogStore;
