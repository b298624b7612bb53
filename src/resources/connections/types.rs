use crate::core::types::{AttributeMap, EntityAttributeList};
use serde::{Deserialize, Serialize};

/// Connection between two nodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id_2: Option<String>,
    #[serde(default, skip_serializing_if = "EntityAttributeList::is_empty")]
    pub attributes: EntityAttributeList,
    #[serde(default, skip_serializing_if = "AttributeMap::is_empty")]
    pub add_attributes: AttributeMap,
}

/// Body for `POST v3/jobs/:job_id/connections`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateConnectionRequest {
    pub node_id_1: String,
    pub node_id_2: String,
    #[serde(default, skip_serializing_if = "EntityAttributeList::is_empty")]
    pub attributes: EntityAttributeList,
    #[serde(default, skip_serializing_if = "AttributeMap::is_empty")]
    pub add_attributes: AttributeMap,
}

impl CreateConnectionRequest {
    pub fn between(node_id_1: impl Into<String>, node_id_2: impl Into<String>) -> Self {
        Self {
            node_id_1: node_id_1.into(),
            node_id_2: node_id_2.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateConnectionRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id_1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id_2: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub remove_attributes: Vec<String>,
    #[serde(default, skip_serializing_if = "EntityAttributeList::is_empty")]
    pub attributes: EntityAttributeList,
    #[serde(default, skip_serializing_if = "AttributeMap::is_empty")]
    pub add_attributes: AttributeMap,
}
