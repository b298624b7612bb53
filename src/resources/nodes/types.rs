use crate::core::types::{AttributeMap, EntityAttributeList};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "EntityAttributeList::is_empty")]
    pub attributes: EntityAttributeList,
    #[serde(default, skip_serializing_if = "AttributeMap::is_empty")]
    pub add_attributes: AttributeMap,
}

/// Body for `POST v3/jobs/:job_id/nodes`; coordinates are always sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateNodeRequest {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "EntityAttributeList::is_empty")]
    pub attributes: EntityAttributeList,
    #[serde(default, skip_serializing_if = "AttributeMap::is_empty")]
    pub add_attributes: AttributeMap,
}

impl CreateNodeRequest {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ..Self::default()
        }
    }
}

/// Body for `POST v3/jobs/:job_id/nodes/:node_id`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateNodeRequest {
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
