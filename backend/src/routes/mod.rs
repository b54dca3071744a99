pub mod dashboard;
pub mod episodes;
pub mod summary;
