use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::record::Record;
use crate::domain::entities::rows::{EndpointRow, InterfaceRow, RiskRow, ServiceRow, ThreatRow};

/// Failure of a single backend request. `resource` is the request path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("request to {resource} failed: {message}")]
    Transport { resource: String, message: String },
    #[error("{resource} answered with status {status}")]
    Status { resource: String, status: u16 },
    #[error("could not decode {resource}: {message}")]
    Decode { resource: String, message: String },
}

impl BackendError {
    pub fn kind(&self) -> &'static str {
        match self {
            BackendError::Transport { .. } => "transport",
            BackendError::Status { .. } => "status",
            BackendError::Decode { .. } => "decode",
        }
    }

    pub fn resource(&self) -> &str {
        match self {
            BackendError::Transport { resource, .. }
            | BackendError::Status { resource, .. }
            | BackendError::Decode { resource, .. } => resource,
        }
    }
}

/// Per-endpoint detail tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointTable {
    Threats,
    Risks,
    Interfaces,
    Services,
}

impl EndpointTable {
    pub fn segment(self) -> &'static str {
        match self {
            EndpointTable::Threats => "threats",
            EndpointTable::Risks => "risks",
            EndpointTable::Interfaces => "interfaces",
            EndpointTable::Services => "services",
        }
    }
}

/// Read side of the backend.
#[async_trait]
pub trait TableSource: Send + Sync {
    async fn runner(&self) -> Result<Vec<Record>, BackendError>;
    async fn endpoints(&self) -> Result<Vec<EndpointRow>, BackendError>;
    async fn threats(&self) -> Result<Vec<ThreatRow>, BackendError>;
    async fn risks(&self) -> Result<Vec<RiskRow>, BackendError>;

    async fn endpoint_threats(&self, endpoint: &str) -> Result<Vec<ThreatRow>, BackendError>;
    async fn endpoint_risks(&self, endpoint: &str) -> Result<Vec<RiskRow>, BackendError>;
    async fn endpoint_interfaces(&self, endpoint: &str)
        -> Result<Vec<InterfaceRow>, BackendError>;
    async fn endpoint_services(&self, endpoint: &str) -> Result<Vec<ServiceRow>, BackendError>;

    async fn table_names(&self) -> Result<Vec<String>, BackendError>;
}

/// Write side of the backend: one attempt per committed record.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    async fn submit(&self, record: &Record) -> Result<(), BackendError>;
}
