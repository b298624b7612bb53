pub mod rest;
pub mod types;

pub use rest::SectionsClient;
pub use types::{CreateSectionRequest, Section, UpdateSectionRequest};
