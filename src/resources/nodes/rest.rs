use crate::core::errors::KatapultError;
use crate::core::traits::{Requester, NO_BODY};
use crate::core::types::UpdateOptions;
use crate::resources::nodes::types::{CreateNodeRequest, Node, UpdateNodeRequest};
use crate::resources::photos::types::{Photo, UploadPhotoOptions, JPEG_CONTENT_TYPE};
use reqwest::Method;
use serde::de::IgnoredAny;

/// Node endpoints for a single job
pub struct NodesClient<'a, R: Requester> {
    client: &'a R,
    job_id: String,
}

impl<'a, R: Requester> NodesClient<'a, R> {
    pub fn new(client: &'a R, job_id: impl Into<String>) -> Self {
        Self {
            client,
            job_id: job_id.into(),
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    fn node_path(&self, node_id: &str) -> String {
        format!("v3/jobs/{}/nodes/{}", self.job_id, node_id)
    }

    pub async fn list(&self) -> Result<Vec<Node>, KatapultError> {
        let nodes: Option<Vec<Node>> = self
            .client
            .request(
                Method::GET,
                &format!("v3/jobs/{}/nodes", self.job_id),
                &[],
                NO_BODY,
            )
            .await?;
        Ok(nodes.unwrap_or_default())
    }

    pub async fn get(&self, node_id: &str) -> Result<Node, KatapultError> {
        let node: Option<Node> = self
            .client
            .request(Method::GET, &self.node_path(node_id), &[], NO_BODY)
            .await?;
        Ok(node.unwrap_or_default())
    }

    pub async fn create(&self, request: &CreateNodeRequest) -> Result<Node, KatapultError> {
        let node: Option<Node> = self
            .client
            .request(
                Method::POST,
                &format!("v3/jobs/{}/nodes", self.job_id),
                &[],
                Some(request),
            )
            .await?;
        Ok(node.unwrap_or_default())
    }

    /// Update a node, creating it under `node_id` unless `only_if_exists` is set
    pub async fn update(
        &self,
        node_id: &str,
        request: &UpdateNodeRequest,
        options: Option<&UpdateOptions>,
    ) -> Result<Node, KatapultError> {
        let node: Option<Node> = self
            .client
            .request(
                Method::POST,
                &self.node_path(node_id),
                &UpdateOptions::query(options),
                Some(request),
            )
            .await?;
        Ok(node.unwrap_or_default())
    }

    /// Upload a JPEG and associate it with the node
    pub async fn upload_photo(
        &self,
        node_id: &str,
        image: Vec<u8>,
        options: Option<&UploadPhotoOptions>,
    ) -> Result<Photo, KatapultError> {
        let photo: Option<Photo> = self
            .client
            .request_with_body(
                Method::POST,
                &format!("{}/photos", self.node_path(node_id)),
                &UploadPhotoOptions::query(options),
                JPEG_CONTENT_TYPE,
                image,
            )
            .await?;
        Ok(photo.unwrap_or_default())
    }

    pub async fn delete(&self, node_id: &str) -> Result<(), KatapultError> {
        let _: Option<IgnoredAny> = self
            .client
            .request(Method::DELETE, &self.node_path(node_id), &[], NO_BODY)
            .await?;
        Ok(())
    }
}
