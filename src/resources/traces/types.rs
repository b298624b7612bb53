use crate::core::types::AttributeMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_type: Option<String>,
    #[serde(default, skip_serializing_if = "AttributeMap::is_empty")]
    pub attributes: AttributeMap,
}

/// Body for `POST v3/jobs/:job_id/traces`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTraceRequest {
    pub trace_type: String,
    #[serde(default, skip_serializing_if = "AttributeMap::is_empty")]
    pub attributes: AttributeMap,
}

impl CreateTraceRequest {
    pub fn new(trace_type: impl Into<String>) -> Self {
        Self {
            trace_type: trace_type.into(),
            attributes: AttributeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTraceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_type: Option<String>,
    #[serde(default, skip_serializing_if = "AttributeMap::is_empty")]
    pub attributes: AttributeMap,
}
