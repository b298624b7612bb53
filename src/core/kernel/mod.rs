//! Transport kernel shared by every resource call.
//!
//! A call flows through four stages:
//!
//! 1. [`rest::execute`] builds the authenticated URL (path segments, caller
//!    query, `api_key` last), sets `Content-Type`/`Accept`, and returns the
//!    status code with the full body
//! 2. an optional [`PacedTransport`] holds the send until the configured
//!    interval has passed since the previous one
//! 3. [`Envelope::parse`] splits the body into `status`, `message`, `type`
//!    and raw `data`/`meta` spans
//! 4. [`decode_response`] classifies the outcome and decodes `data`
//!
//! Nothing here retries, caches, or reacts to rate-limit breaches.
pub mod envelope;
pub mod pacing;
pub mod response;
pub mod rest;
pub mod transport;

// Re-export key types for convenience
pub use envelope::Envelope;
pub use pacing::{PacedTransport, Pacer};
pub use response::{decode_response, Decoded};
pub use rest::{RequestBody, API_KEY_PARAM, JSON_CONTENT_TYPE};
pub use transport::Transport;
