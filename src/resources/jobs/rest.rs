use crate::core::errors::KatapultError;
use crate::core::traits::{Requester, NO_BODY};
use crate::resources::jobs::types::{
    CreateJobRequest, GetJobOptions, Job, JobStatus, JobStatusResponse, ListJobsOptions,
    UpdateJobRequest, UpdateJobStatusRequest,
};
use reqwest::Method;

/// Thin typed wrapper around `Requester` for the jobs endpoints
pub struct JobsClient<'a, R: Requester> {
    client: &'a R,
}

impl<'a, R: Requester> JobsClient<'a, R> {
    pub const fn new(client: &'a R) -> Self {
        Self { client }
    }

    /// List all jobs accessible to the requester
    pub async fn list(&self, options: Option<&ListJobsOptions>) -> Result<Vec<Job>, KatapultError> {
        let mut params = Vec::new();
        if let Some(opts) = options {
            if opts.include_archived {
                params.push(("includeArchived", "true"));
            }
            if let Some(filter) = opts.metadata_filter.as_deref().filter(|f| !f.is_empty()) {
                params.push(("metadataFilter", filter));
            }
        }

        let jobs: Option<Vec<Job>> = self
            .client
            .request(Method::GET, "v3/jobs", &params, NO_BODY)
            .await?;
        Ok(jobs.unwrap_or_default())
    }

    /// Get full or partial job data; `options.paths` selects fields
    pub async fn get(
        &self,
        job_id: &str,
        options: Option<&GetJobOptions>,
    ) -> Result<Job, KatapultError> {
        let paths = options.and_then(GetJobOptions::joined_paths);
        let mut params = Vec::new();
        if let Some(ref paths) = paths {
            params.push(("paths", paths.as_str()));
        }

        let job: Option<Job> = self
            .client
            .request(Method::GET, &format!("v3/jobs/{}", job_id), &params, NO_BODY)
            .await?;
        Ok(job.unwrap_or_default())
    }

    pub async fn create(&self, request: &CreateJobRequest) -> Result<Job, KatapultError> {
        let job: Option<Job> = self
            .client
            .request(Method::POST, "v3/jobs", &[], Some(request))
            .await?;
        Ok(job.unwrap_or_default())
    }

    pub async fn update(
        &self,
        job_id: &str,
        request: &UpdateJobRequest,
    ) -> Result<Job, KatapultError> {
        let job: Option<Job> = self
            .client
            .request(
                Method::POST,
                &format!("v3/jobs/{}", job_id),
                &[],
                Some(request),
            )
            .await?;
        Ok(job.unwrap_or_default())
    }

    pub async fn get_status(&self, job_id: &str) -> Result<JobStatus, KatapultError> {
        let response: Option<JobStatusResponse> = self
            .client
            .request(
                Method::GET,
                &format!("v3/jobs/{}/status", job_id),
                &[],
                NO_BODY,
            )
            .await?;
        response
            .map(|r| r.status)
            .ok_or_else(|| KatapultError::Decode("Job status response carried no data".to_string()))
    }

    pub async fn update_status(
        &self,
        job_id: &str,
        status: JobStatus,
    ) -> Result<(), KatapultError> {
        let _: Option<serde::de::IgnoredAny> = self
            .client
            .request(
                Method::POST,
                &format!("v3/jobs/{}/status", job_id),
                &[],
                Some(&UpdateJobStatusRequest { status }),
            )
            .await?;
        Ok(())
    }
}
