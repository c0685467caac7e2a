use serde::{Deserialize, Serialize};

use crate::domain::entities::rows::{lenient_string, Tabular};

/// Key of the only primary-node attribute operators may change.
pub const EDITABLE_KEY: &str = "IP";

pub const KEY_FIELD: &str = "key";
pub const VALUE_FIELD: &str = "value";

/// One attribute of the primary node, as served by the runner table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub key: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub value: String,
}

impl Record {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Tabular for Record {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            KEY_FIELD => Some(&self.key),
            VALUE_FIELD => Some(&self.value),
            _ => None,
        }
    }
}
