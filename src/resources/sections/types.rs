use crate::core::types::{AttributeMap, EntityAttributeList};
use serde::{Deserialize, Serialize};

/// Span section within a connection, addressed by `key`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub make_midpoint: bool,
    #[serde(default, skip_serializing_if = "EntityAttributeList::is_empty")]
    pub attributes: EntityAttributeList,
    #[serde(default, skip_serializing_if = "AttributeMap::is_empty")]
    pub add_attributes: AttributeMap,
}

/// Body for `POST .../connections/:connection_id/sections`.
///
/// Set `make_midpoint` to let the server place the section at the span
/// midpoint instead of the given coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSectionRequest {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub make_midpoint: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "EntityAttributeList::is_empty")]
    pub attributes: EntityAttributeList,
    #[serde(default, skip_serializing_if = "AttributeMap::is_empty")]
    pub add_attributes: AttributeMap,
}

impl CreateSectionRequest {
    pub fn midpoint() -> Self {
        Self {
            make_midpoint: true,
            ..Self::default()
        }
    }

    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSectionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove_attributes: Vec<String>,
    #[serde(default, skip_serializing_if = "EntityAttributeList::is_empty")]
    pub attributes: EntityAttributeList,
    #[serde(default, skip_serializing_if = "AttributeMap::is_empty")]
    pub add_attributes: AttributeMap,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_shapes() {
        assert_eq!(
            serde_json::to_value(CreateSectionRequest::midpoint()).unwrap(),
            json!({"make_midpoint": true})
        );
        assert_eq!(
            serde_json::to_value(CreateSectionRequest::at(1.0, 2.0)).unwrap(),
            json!({"latitude": 1.0, "longitude": 2.0})
        );
    }
}
