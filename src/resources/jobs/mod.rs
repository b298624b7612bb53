pub mod rest;
pub mod types;

pub use rest::JobsClient;
pub use types::{
    CreateJobRequest, GetJobOptions, Job, JobPath, JobStatus, JobStatusResponse, ListJobsOptions,
    UpdateJobRequest, UpdateJobStatusRequest,
};
