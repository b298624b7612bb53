use crate::core::errors::KatapultError;
use crate::core::traits::{Requester, NO_BODY};
use crate::core::types::UpdateOptions;
use crate::resources::photos::types::{
    AssociatePhotoRequest, CreatePhotoCalibrationAnchorRequest, CreatePhotoElementRequest, Photo,
    PhotoCalibrationAnchor, PhotoElement, UpdatePhotoCalibrationAnchorRequest,
    UpdatePhotoElementRequest, JPEG_CONTENT_TYPE,
};
use reqwest::Method;
use serde::de::IgnoredAny;

/// Photo endpoints for a single job, including photo elements and
/// calibration anchors
pub struct PhotosClient<'a, R: Requester> {
    client: &'a R,
    job_id: String,
}

impl<'a, R: Requester> PhotosClient<'a, R> {
    pub fn new(client: &'a R, job_id: impl Into<String>) -> Self {
        Self {
            client,
            job_id: job_id.into(),
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    fn photos_path(&self) -> String {
        format!("v3/jobs/{}/photos", self.job_id)
    }

    fn photo_path(&self, photo_id: &str) -> String {
        format!("v3/jobs/{}/photos/{}", self.job_id, photo_id)
    }

    pub async fn list(&self) -> Result<Vec<Photo>, KatapultError> {
        let photos: Option<Vec<Photo>> = self
            .client
            .request(Method::GET, &self.photos_path(), &[], NO_BODY)
            .await?;
        Ok(photos.unwrap_or_default())
    }

    pub async fn get(&self, photo_id: &str) -> Result<Photo, KatapultError> {
        let photo: Option<Photo> = self
            .client
            .request(Method::GET, &self.photo_path(photo_id), &[], NO_BODY)
            .await?;
        Ok(photo.unwrap_or_default())
    }

    /// Upload a JPEG to the job without associating it
    pub async fn upload(&self, image: Vec<u8>) -> Result<Photo, KatapultError> {
        let photo: Option<Photo> = self
            .client
            .request_with_body(
                Method::POST,
                &self.photos_path(),
                &[],
                JPEG_CONTENT_TYPE,
                image,
            )
            .await?;
        Ok(photo.unwrap_or_default())
    }

    /// Associate, re-associate, or unassociate a photo with a node or section
    pub async fn associate(
        &self,
        photo_id: &str,
        request: &AssociatePhotoRequest,
    ) -> Result<(), KatapultError> {
        let _: Option<IgnoredAny> = self
            .client
            .request(
                Method::POST,
                &format!("{}/associate", self.photo_path(photo_id)),
                &[],
                Some(request),
            )
            .await?;
        Ok(())
    }

    pub async fn list_elements(&self, photo_id: &str) -> Result<Vec<PhotoElement>, KatapultError> {
        let elements: Option<Vec<PhotoElement>> = self
            .client
            .request(
                Method::GET,
                &format!("{}/photo_elements", self.photo_path(photo_id)),
                &[],
                NO_BODY,
            )
            .await?;
        Ok(elements.unwrap_or_default())
    }

    pub async fn get_element(
        &self,
        photo_id: &str,
        element_id: &str,
    ) -> Result<PhotoElement, KatapultError> {
        let element: Option<PhotoElement> = self
            .client
            .request(
                Method::GET,
                &format!("{}/photo_elements/{}", self.photo_path(photo_id), element_id),
                &[],
                NO_BODY,
            )
            .await?;
        Ok(element.unwrap_or_default())
    }

    pub async fn create_element(
        &self,
        photo_id: &str,
        request: &CreatePhotoElementRequest,
    ) -> Result<PhotoElement, KatapultError> {
        let element: Option<PhotoElement> = self
            .client
            .request(
                Method::POST,
                &format!("{}/photo_elements", self.photo_path(photo_id)),
                &[],
                Some(request),
            )
            .await?;
        Ok(element.unwrap_or_default())
    }

    /// Update an element, creating it under `element_id` unless
    /// `only_if_exists` is set
    pub async fn update_element(
        &self,
        photo_id: &str,
        element_id: &str,
        request: &UpdatePhotoElementRequest,
        options: Option<&UpdateOptions>,
    ) -> Result<PhotoElement, KatapultError> {
        let element: Option<PhotoElement> = self
            .client
            .request(
                Method::POST,
                &format!("{}/photo_elements/{}", self.photo_path(photo_id), element_id),
                &UpdateOptions::query(options),
                Some(request),
            )
            .await?;
        Ok(element.unwrap_or_default())
    }

    pub async fn delete_element(
        &self,
        photo_id: &str,
        element_id: &str,
    ) -> Result<(), KatapultError> {
        let _: Option<IgnoredAny> = self
            .client
            .request(
                Method::DELETE,
                &format!("{}/photo_elements/{}", self.photo_path(photo_id), element_id),
                &[],
                NO_BODY,
            )
            .await?;
        Ok(())
    }

    pub async fn list_calibration_anchors(
        &self,
        photo_id: &str,
    ) -> Result<Vec<PhotoCalibrationAnchor>, KatapultError> {
        let anchors: Option<Vec<PhotoCalibrationAnchor>> = self
            .client
            .request(
                Method::GET,
                &format!("{}/calibration_anchors", self.photo_path(photo_id)),
                &[],
                NO_BODY,
            )
            .await?;
        Ok(anchors.unwrap_or_default())
    }

    pub async fn get_calibration_anchor(
        &self,
        photo_id: &str,
        anchor_id: &str,
    ) -> Result<PhotoCalibrationAnchor, KatapultError> {
        let anchor: Option<PhotoCalibrationAnchor> = self
            .client
            .request(
                Method::GET,
                &format!("{}/calibration_anchors/{}", self.photo_path(photo_id), anchor_id),
                &[],
                NO_BODY,
            )
            .await?;
        Ok(anchor.unwrap_or_default())
    }

    pub async fn create_calibration_anchor(
        &self,
        photo_id: &str,
        request: &CreatePhotoCalibrationAnchorRequest,
    ) -> Result<PhotoCalibrationAnchor, KatapultError> {
        let anchor: Option<PhotoCalibrationAnchor> = self
            .client
            .request(
                Method::POST,
                &format!("{}/calibration_anchors", self.photo_path(photo_id)),
                &[],
                Some(request),
            )
            .await?;
        Ok(anchor.unwrap_or_default())
    }

    pub async fn update_calibration_anchor(
        &self,
        photo_id: &str,
        anchor_id: &str,
        request: &UpdatePhotoCalibrationAnchorRequest,
        options: Option<&UpdateOptions>,
    ) -> Result<PhotoCalibrationAnchor, KatapultError> {
        let anchor: Option<PhotoCalibrationAnchor> = self
            .client
            .request(
                Method::POST,
                &format!("{}/calibration_anchors/{}", self.photo_path(photo_id), anchor_id),
                &UpdateOptions::query(options),
                Some(request),
            )
            .await?;
        Ok(anchor.unwrap_or_default())
    }

    pub async fn delete_calibration_anchor(
        &self,
        photo_id: &str,
        anchor_id: &str,
    ) -> Result<(), KatapultError> {
        let _: Option<IgnoredAny> = self
            .client
            .request(
                Method::DELETE,
                &format!("{}/calibration_anchors/{}", self.photo_path(photo_id), anchor_id),
                &[],
                NO_BODY,
            )
            .await?;
        Ok(())
    }
}
