use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Read access to a row by column field name, used by the table widget.
pub trait Tabular {
    fn field(&self, name: &str) -> Option<&str>;
}

/// The backend zips its sqlite header with each row, so a column can be
/// absent, null or numeric. Everything is rendered as text.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text,
        Some(other) => other.to_string(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointRow {
    #[serde(default, deserialize_with = "lenient_string")]
    pub endpoint: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub hostname: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub host_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mgmt_ifname: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mgmt_mac: String,
}

impl Tabular for EndpointRow {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "endpoint" => Some(&self.endpoint),
            "hostname" => Some(&self.hostname),
            "host_type" => Some(&self.host_type),
            "mgmt_ifname" => Some(&self.mgmt_ifname),
            "mgmt_mac" => Some(&self.mgmt_mac),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatRow {
    #[serde(default, deserialize_with = "lenient_string")]
    pub host: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub severity: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
}

impl Tabular for ThreatRow {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "host" => Some(&self.host),
            "severity" => Some(&self.severity),
            "message" => Some(&self.message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRow {
    #[serde(default, deserialize_with = "lenient_string")]
    pub host: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tool: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reqid: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub severity: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: String,
}

impl Tabular for RiskRow {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "host" => Some(&self.host),
            "tool" => Some(&self.tool),
            "reqid" => Some(&self.reqid),
            "severity" => Some(&self.severity),
            "message" => Some(&self.message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceRow {
    #[serde(default, deserialize_with = "lenient_string")]
    pub host: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ifname: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ip: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub mac: String,
}

impl Tabular for InterfaceRow {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "host" => Some(&self.host),
            "ifname" => Some(&self.ifname),
            "ip" => Some(&self.ip),
            "mac" => Some(&self.mac),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRow {
    #[serde(default, deserialize_with = "lenient_string")]
    pub host: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub service: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,
}

impl Tabular for ServiceRow {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "host" => Some(&self.host),
            "service" => Some(&self.service),
            "status" => Some(&self.status),
            "description" => Some(&self.description),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostKind {
    Mac,
    Ubuntu,
    Windows,
}

impl HostKind {
    /// Anything that is not a Mac or Ubuntu host is shown as Windows.
    pub fn from_host_type(host_type: &str) -> Self {
        match host_type {
            "MAC" => HostKind::Mac,
            "UBUNTU" => HostKind::Ubuntu,
            _ => HostKind::Windows,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HostKind::Mac => "Mac",
            HostKind::Ubuntu => "Ubuntu",
            HostKind::Windows => "Windows",
        }
    }
}
