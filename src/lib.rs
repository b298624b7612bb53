//! Async client for the Katapult Pro v3 API.
//!
//! ```no_run
//! # async fn run() -> Result<(), katapultpro::KatapultError> {
//! let client = katapultpro::KatapultClient::builder("api-key")
//!     .rate_limit(katapultpro::DEFAULT_RATE_LIMIT_INTERVAL)
//!     .build()?;
//!
//! let jobs = client.jobs().list(None).await?;
//! let nodes = client.job("job-id").nodes().list().await?;
//! println!("{} jobs, {} nodes, meta {:?}", jobs.len(), nodes.len(), client.last_meta());
//! # Ok(())
//! # }
//! ```
pub mod core;
pub mod resources;

pub use core::client::{ClientBuilder, KatapultClient};
pub use core::config::{ClientConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_RATE_LIMIT_INTERVAL};
pub use core::errors::{ApiError, KatapultError};
pub use core::kernel::{PacedTransport, Pacer, Transport};
pub use core::traits::{Requester, NO_BODY};
pub use core::types::{AttributeMap, EntityAttributeList, Meta, UpdateOptions};

pub use resources::connections::{Connection, CreateConnectionRequest, UpdateConnectionRequest};
pub use resources::jobs::{
    CreateJobRequest, GetJobOptions, Job, JobPath, JobStatus, ListJobsOptions, UpdateJobRequest,
};
pub use resources::nodes::{CreateNodeRequest, Node, UpdateNodeRequest};
pub use resources::photos::{
    AssociatePhotoRequest, CreatePhotoCalibrationAnchorRequest, CreatePhotoElementRequest, Photo,
    PhotoAssociation, PhotoAssociationQuery, PhotoCalibrationAnchor, PhotoElement,
    UpdatePhotoCalibrationAnchorRequest, UpdatePhotoElementRequest, UploadPhotoOptions,
};
pub use resources::sections::{CreateSectionRequest, Section, UpdateSectionRequest};
pub use resources::traces::{CreateTraceRequest, Trace, UpdateTraceRequest};
pub use resources::{
    ConnectionsClient, JobScope, JobsClient, NodesClient, PhotosClient, SectionsClient,
    TracesClient,
};
