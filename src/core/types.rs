use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Token bucket state returned in the `meta` field of every API response.
///
/// The meaning of `last_refill_time` is defined by the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub token_count: i64,
    #[serde(default)]
    pub last_refill_time: i64,
}

/// Attribute structure shared by nodes, connections, and sections:
/// attribute name -> instance id -> value
pub type EntityAttributeList = BTreeMap<String, BTreeMap<String, Value>>;

/// Flat attribute map used by `add_attributes` and trace attributes
pub type AttributeMap = BTreeMap<String, Value>;

/// Shared `onlyIfExists` option for update-or-create endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Fail instead of creating the entity when the id does not exist
    pub only_if_exists: bool,
}

impl UpdateOptions {
    pub const fn only_if_exists() -> Self {
        Self {
            only_if_exists: true,
        }
    }

    pub(crate) fn query(options: Option<&Self>) -> Vec<(&'static str, &'static str)> {
        match options {
            Some(opts) if opts.only_if_exists => vec![("onlyIfExists", "true")],
            _ => Vec::new(),
        }
    }
}
