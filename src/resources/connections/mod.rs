pub mod rest;
pub mod types;

pub use rest::ConnectionsClient;
pub use types::{Connection, CreateConnectionRequest, UpdateConnectionRequest};
