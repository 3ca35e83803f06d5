//! Launch Dataset
//!
//! The immutable, in-memory table of launch records:
//!
//! - **types**: `LaunchRecord`, `Outcome`, `SiteSelection`, `PayloadRange`, `LaunchDataset`
//! - **loader**: CSV reader with header-based column mapping
//! - **error**: Error types
//!
//! The dataset is built once at startup and shared read-only afterwards.

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::{load_dataset, ColumnNames, DatasetLoader, LoadReport, LoadedDataset};
pub use types::{LaunchDataset, LaunchRecord, Outcome, PayloadRange, SiteSelection, ALL_SITES};
