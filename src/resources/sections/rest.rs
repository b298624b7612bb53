use crate::core::errors::KatapultError;
use crate::core::traits::{Requester, NO_BODY};
use crate::core::types::UpdateOptions;
use crate::resources::photos::types::{Photo, UploadPhotoOptions, JPEG_CONTENT_TYPE};
use crate::resources::sections::types::{CreateSectionRequest, Section, UpdateSectionRequest};
use reqwest::Method;
use serde::de::IgnoredAny;

/// Section endpoints for a single connection
pub struct SectionsClient<'a, R: Requester> {
    client: &'a R,
    job_id: String,
    connection_id: String,
}

impl<'a, R: Requester> SectionsClient<'a, R> {
    pub fn new(client: &'a R, job_id: impl Into<String>, connection_id: impl Into<String>) -> Self {
        Self {
            client,
            job_id: job_id.into(),
            connection_id: connection_id.into(),
        }
    }

    pub fn connection_id(&self) -> &str {
        &self.connection_id
    }

    fn sections_path(&self) -> String {
        format!(
            "v3/jobs/{}/connections/{}/sections",
            self.job_id, self.connection_id
        )
    }

    fn section_path(&self, section_key: &str) -> String {
        format!("{}/{}", self.sections_path(), section_key)
    }

    pub async fn list(&self) -> Result<Vec<Section>, KatapultError> {
        let sections: Option<Vec<Section>> = self
            .client
            .request(Method::GET, &self.sections_path(), &[], NO_BODY)
            .await?;
        Ok(sections.unwrap_or_default())
    }

    pub async fn get(&self, section_key: &str) -> Result<Section, KatapultError> {
        let section: Option<Section> = self
            .client
            .request(Method::GET, &self.section_path(section_key), &[], NO_BODY)
            .await?;
        Ok(section.unwrap_or_default())
    }

    pub async fn create(&self, request: &CreateSectionRequest) -> Result<Section, KatapultError> {
        let section: Option<Section> = self
            .client
            .request(Method::POST, &self.sections_path(), &[], Some(request))
            .await?;
        Ok(section.unwrap_or_default())
    }

    pub async fn update(
        &self,
        section_key: &str,
        request: &UpdateSectionRequest,
        options: Option<&UpdateOptions>,
    ) -> Result<Section, KatapultError> {
        let section: Option<Section> = self
            .client
            .request(
                Method::POST,
                &self.section_path(section_key),
                &UpdateOptions::query(options),
                Some(request),
            )
            .await?;
        Ok(section.unwrap_or_default())
    }

    /// Upload a JPEG and associate it with the section
    pub async fn upload_photo(
        &self,
        section_key: &str,
        image: Vec<u8>,
        options: Option<&UploadPhotoOptions>,
    ) -> Result<Photo, KatapultError> {
        let photo: Option<Photo> = self
            .client
            .request_with_body(
                Method::POST,
                &format!("{}/photos", self.section_path(section_key)),
                &UploadPhotoOptions::query(options),
                JPEG_CONTENT_TYPE,
                image,
            )
            .await?;
        Ok(photo.unwrap_or_default())
    }

    pub async fn delete(&self, section_key: &str) -> Result<(), KatapultError> {
        let _: Option<IgnoredAny> = self
            .client
            .request(Method::DELETE, &self.section_path(section_key), &[], NO_BODY)
            .await?;
        Ok(())
    }
}
