pub mod rest;
pub mod types;

pub use rest::PhotosClient;
pub use types::{
    AssociatePhotoRequest, CreatePhotoCalibrationAnchorRequest, CreatePhotoElementRequest, Photo,
    PhotoAssociation, PhotoAssociationQuery, PhotoCalibrationAnchor, PhotoElement,
    UpdatePhotoCalibrationAnchorRequest, UpdatePhotoElementRequest, UploadPhotoOptions,
    JPEG_CONTENT_TYPE,
};
