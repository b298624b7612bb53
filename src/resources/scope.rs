use crate::core::client::KatapultClient;
use crate::core::errors::KatapultError;
use crate::core::traits::Requester;
use crate::resources::connections::ConnectionsClient;
use crate::resources::jobs::{GetJobOptions, Job, JobStatus, JobsClient, UpdateJobRequest};
use crate::resources::nodes::NodesClient;
use crate::resources::photos::PhotosClient;
use crate::resources::traces::TracesClient;

/// All operations for one job, bound to its id.
///
/// Holds no state besides the id; every call goes through the shared requester.
pub struct JobScope<'a, R: Requester> {
    client: &'a R,
    job_id: String,
}

impl<'a, R: Requester> JobScope<'a, R> {
    pub fn new(client: &'a R, job_id: impl Into<String>) -> Self {
        Self {
            client,
            job_id: job_id.into(),
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub async fn get(&self, options: Option<&GetJobOptions>) -> Result<Job, KatapultError> {
        JobsClient::new(self.client).get(&self.job_id, options).await
    }

    pub async fn update(&self, request: &UpdateJobRequest) -> Result<Job, KatapultError> {
        JobsClient::new(self.client).update(&self.job_id, request).await
    }

    pub async fn status(&self) -> Result<JobStatus, KatapultError> {
        JobsClient::new(self.client).get_status(&self.job_id).await
    }

    pub async fn set_status(&self, status: JobStatus) -> Result<(), KatapultError> {
        JobsClient::new(self.client)
            .update_status(&self.job_id, status)
            .await
    }

    pub fn nodes(&self) -> NodesClient<'a, R> {
        NodesClient::new(self.client, self.job_id.clone())
    }

    pub fn connections(&self) -> ConnectionsClient<'a, R> {
        ConnectionsClient::new(self.client, self.job_id.clone())
    }

    pub fn photos(&self) -> PhotosClient<'a, R> {
        PhotosClient::new(self.client, self.job_id.clone())
    }

    pub fn traces(&self) -> TracesClient<'a, R> {
        TracesClient::new(self.client, self.job_id.clone())
    }
}

impl KatapultClient {
    /// Job-level endpoints (`v3/jobs`)
    pub fn jobs(&self) -> JobsClient<'_, Self> {
        JobsClient::new(self)
    }

    /// Scope every following call to `job_id`
    pub fn job(&self, job_id: impl Into<String>) -> JobScope<'_, Self> {
        JobScope::new(self, job_id)
    }
}
