use crate::core::errors::KatapultError;
use crate::core::traits::{Requester, NO_BODY};
use crate::core::types::UpdateOptions;
use crate::resources::traces::types::{CreateTraceRequest, Trace, UpdateTraceRequest};
use reqwest::Method;
use serde::de::IgnoredAny;

/// Trace endpoints for a single job
pub struct TracesClient<'a, R: Requester> {
    client: &'a R,
    job_id: String,
}

impl<'a, R: Requester> TracesClient<'a, R> {
    pub fn new(client: &'a R, job_id: impl Into<String>) -> Self {
        Self {
            client,
            job_id: job_id.into(),
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    fn trace_path(&self, trace_id: &str) -> String {
        format!("v3/jobs/{}/traces/{}", self.job_id, trace_id)
    }

    pub async fn list(&self) -> Result<Vec<Trace>, KatapultError> {
        let traces: Option<Vec<Trace>> = self
            .client
            .request(
                Method::GET,
                &format!("v3/jobs/{}/traces", self.job_id),
                &[],
                NO_BODY,
            )
            .await?;
        Ok(traces.unwrap_or_default())
    }

    pub async fn get(&self, trace_id: &str) -> Result<Trace, KatapultError> {
        let trace: Option<Trace> = self
            .client
            .request(Method::GET, &self.trace_path(trace_id), &[], NO_BODY)
            .await?;
        Ok(trace.unwrap_or_default())
    }

    pub async fn create(&self, request: &CreateTraceRequest) -> Result<Trace, KatapultError> {
        let trace: Option<Trace> = self
            .client
            .request(
                Method::POST,
                &format!("v3/jobs/{}/traces", self.job_id),
                &[],
                Some(request),
            )
            .await?;
        Ok(trace.unwrap_or_default())
    }

    pub async fn update(
        &self,
        trace_id: &str,
        request: &UpdateTraceRequest,
        options: Option<&UpdateOptions>,
    ) -> Result<Trace, KatapultError> {
        let trace: Option<Trace> = self
            .client
            .request(
                Method::POST,
                &self.trace_path(trace_id),
                &UpdateOptions::query(options),
                Some(request),
            )
            .await?;
        Ok(trace.unwrap_or_default())
    }

    pub async fn delete(&self, trace_id: &str) -> Result<(), KatapultError> {
        let _: Option<IgnoredAny> = self
            .client
            .request(Method::DELETE, &self.trace_path(trace_id), &[], NO_BODY)
            .await?;
        Ok(())
    }
}
