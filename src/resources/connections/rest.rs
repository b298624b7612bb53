use crate::core::errors::KatapultError;
use crate::core::traits::{Requester, NO_BODY};
use crate::core::types::UpdateOptions;
use crate::resources::connections::types::{
    Connection, CreateConnectionRequest, UpdateConnectionRequest,
};
use crate::resources::sections::SectionsClient;
use reqwest::Method;
use serde::de::IgnoredAny;

/// Connection endpoints for a single job
pub struct ConnectionsClient<'a, R: Requester> {
    client: &'a R,
    job_id: String,
}

impl<'a, R: Requester> ConnectionsClient<'a, R> {
    pub fn new(client: &'a R, job_id: impl Into<String>) -> Self {
        Self {
            client,
            job_id: job_id.into(),
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    /// Sections of `connection_id` in this job
    pub fn sections(&self, connection_id: impl Into<String>) -> SectionsClient<'a, R> {
        SectionsClient::new(self.client, self.job_id.clone(), connection_id)
    }

    fn connection_path(&self, connection_id: &str) -> String {
        format!("v3/jobs/{}/connections/{}", self.job_id, connection_id)
    }

    /// List all connections in the job, including their sections
    pub async fn list(&self) -> Result<Vec<Connection>, KatapultError> {
        let connections: Option<Vec<Connection>> = self
            .client
            .request(
                Method::GET,
                &format!("v3/jobs/{}/connections", self.job_id),
                &[],
                NO_BODY,
            )
            .await?;
        Ok(connections.unwrap_or_default())
    }

    pub async fn get(&self, connection_id: &str) -> Result<Connection, KatapultError> {
        let connection: Option<Connection> = self
            .client
            .request(Method::GET, &self.connection_path(connection_id), &[], NO_BODY)
            .await?;
        Ok(connection.unwrap_or_default())
    }

    pub async fn create(
        &self,
        request: &CreateConnectionRequest,
    ) -> Result<Connection, KatapultError> {
        let connection: Option<Connection> = self
            .client
            .request(
                Method::POST,
                &format!("v3/jobs/{}/connections", self.job_id),
                &[],
                Some(request),
            )
            .await?;
        Ok(connection.unwrap_or_default())
    }

    pub async fn update(
        &self,
        connection_id: &str,
        request: &UpdateConnectionRequest,
        options: Option<&UpdateOptions>,
    ) -> Result<Connection, KatapultError> {
        let connection: Option<Connection> = self
            .client
            .request(
                Method::POST,
                &self.connection_path(connection_id),
                &UpdateOptions::query(options),
                Some(request),
            )
            .await?;
        Ok(connection.unwrap_or_default())
    }

    /// Delete the connection together with all of its sections
    pub async fn delete(&self, connection_id: &str) -> Result<(), KatapultError> {
        let _: Option<IgnoredAny> = self
            .client
            .request(
                Method::DELETE,
                &self.connection_path(connection_id),
                &[],
                NO_BODY,
            )
            .await?;
        Ok(())
    }
}
