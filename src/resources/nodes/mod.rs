pub mod rest;
pub mod types;

pub use rest::NodesClient;
pub use types::{CreateNodeRequest, Node, UpdateNodeRequest};
