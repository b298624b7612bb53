//! Typed clients for the v3 resource endpoints.
//!
//! Every client borrows a [`Requester`](crate::core::traits::Requester), so the
//! same code runs against [`KatapultClient`](crate::KatapultClient) or a test
//! double.

pub mod connections;
pub mod jobs;
pub mod nodes;
pub mod photos;
pub mod scope;
pub mod sections;
pub mod traces;

#[cfg(test)]
pub(crate) mod testing;

pub use connections::ConnectionsClient;
pub use jobs::JobsClient;
pub use nodes::NodesClient;
pub use photos::PhotosClient;
pub use scope::JobScope;
pub use sections::SectionsClient;
pub use traces::TracesClient;
