pub mod rest;
pub mod types;

pub use rest::TracesClient;
pub use types::{CreateTraceRequest, Trace, UpdateTraceRequest};
