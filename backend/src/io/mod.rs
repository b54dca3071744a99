//! Dataset loading utilities.
//!
//! Sources hand back raw bytes; [`read_rows`] turns them into validated
//! [`RawRow`](crate::api::RawRow)s and [`calculate_checksum`] fingerprints
//! them for memoization.

pub mod checksum;
pub mod loaders;

pub use checksum::calculate_checksum;
pub use loaders::{read_rows, DatasetSource, FileSource, InMemorySource, CSV_COLUMNS};
