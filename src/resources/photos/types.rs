use crate::core::types::AttributeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Media type used for photo uploads
pub const JPEG_CONTENT_TYPE: &str = "image/jpeg";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// `association_value` body field for photo association.
///
/// Serializes to `"main"`, `true`, or `null`; no other wire value can be built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PhotoAssociation {
    /// Associate as the main photo
    Main,
    /// Associate as a regular photo
    True,
    /// Remove the association
    #[default]
    Unassociate,
}

impl Serialize for PhotoAssociation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Main => serializer.serialize_str("main"),
            Self::True => serializer.serialize_bool(true),
            Self::Unassociate => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for PhotoAssociation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Self::Unassociate),
            Value::Bool(true) => Ok(Self::True),
            Value::String(s) if s == "main" => Ok(Self::Main),
            other => Err(serde::de::Error::custom(format!(
                "invalid association_value: {}",
                other
            ))),
        }
    }
}

/// `association_value` query parameter for node/section photo uploads.
/// The API treats an absent value as `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhotoAssociationQuery {
    Main,
    True,
}

impl PhotoAssociationQuery {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::True => "true",
        }
    }
}

/// Body for `POST v3/jobs/:job_id/photos/:photo_id/associate`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociatePhotoRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,
    #[serde(default)]
    pub association_value: PhotoAssociation,
}

impl AssociatePhotoRequest {
    pub fn node(node_id: impl Into<String>, association_value: PhotoAssociation) -> Self {
        Self {
            node_id: Some(node_id.into()),
            association_value,
            ..Self::default()
        }
    }

    pub fn section(
        connection_id: impl Into<String>,
        section_id: impl Into<String>,
        association_value: PhotoAssociation,
    ) -> Self {
        Self {
            connection_id: Some(connection_id.into()),
            section_id: Some(section_id.into()),
            association_value,
            ..Self::default()
        }
    }
}

/// Optional query parameters for node/section photo uploads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadPhotoOptions {
    pub association_value: Option<PhotoAssociationQuery>,
}

impl UploadPhotoOptions {
    pub(crate) fn query(options: Option<&Self>) -> Vec<(&'static str, &'static str)> {
        options
            .and_then(|opts| opts.association_value)
            .map(|value| vec![("association_value", value.as_str())])
            .unwrap_or_default()
    }
}

/// Measurement element drawn on a photo; fields other than `id` are kept as raw JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoElement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: AttributeMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePhotoElementRequest {
    #[serde(flatten)]
    pub fields: AttributeMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePhotoElementRequest {
    #[serde(flatten)]
    pub fields: AttributeMap,
}

/// Calibration anchor on a photo; fields other than `id` are kept as raw JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoCalibrationAnchor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: AttributeMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePhotoCalibrationAnchorRequest {
    #[serde(flatten)]
    pub fields: AttributeMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePhotoCalibrationAnchorRequest {
    #[serde(flatten)]
    pub fields: AttributeMap,
}
