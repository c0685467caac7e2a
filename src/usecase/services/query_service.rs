use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::record::Record;
use crate::domain::entities::rows::{EndpointRow, InterfaceRow, RiskRow, ServiceRow, ThreatRow};
use crate::usecase::ports::backend::{BackendError, EndpointTable, TableSource};

pub struct QueryService {
    source: Arc<dyn TableSource>,
}

impl QueryService {
    pub fn new(source: Arc<dyn TableSource>) -> Self {
        Self { source }
    }

    pub async fn load_runner(&self) -> Result<Vec<Record>, BackendError> {
        observe("runner", self.source.runner().await)
    }

    pub async fn load_endpoints(&self) -> Result<Vec<EndpointRow>, BackendError> {
        observe("endpoints", self.source.endpoints().await)
    }

    pub async fn load_threats(&self) -> Result<Vec<ThreatRow>, BackendError> {
        observe("threats", self.source.threats().await)
    }

    pub async fn load_risks(&self) -> Result<Vec<RiskRow>, BackendError> {
        observe("risks", self.source.risks().await)
    }

    pub async fn load_endpoint_threats(
        &self,
        endpoint: &str,
    ) -> Result<Vec<ThreatRow>, BackendError> {
        let result = self.source.endpoint_threats(endpoint).await;
        observe(EndpointTable::Threats.segment(), result)
    }

    pub async fn load_endpoint_risks(&self, endpoint: &str) -> Result<Vec<RiskRow>, BackendError> {
        let result = self.source.endpoint_risks(endpoint).await;
        observe(EndpointTable::Risks.segment(), result)
    }

    pub async fn load_endpoint_interfaces(
        &self,
        endpoint: &str,
    ) -> Result<Vec<InterfaceRow>, BackendError> {
        let result = self.source.endpoint_interfaces(endpoint).await;
        observe(EndpointTable::Interfaces.segment(), result)
    }

    pub async fn load_endpoint_services(
        &self,
        endpoint: &str,
    ) -> Result<Vec<ServiceRow>, BackendError> {
        let result = self.source.endpoint_services(endpoint).await;
        observe(EndpointTable::Services.segment(), result)
    }

    pub async fn list_tables(&self) -> Result<Vec<String>, BackendError> {
        observe("tables", self.source.table_names().await)
    }
}

/// Logs the outcome of a read-load and hands it back unchanged. Failures are
/// never shown to the operator; the caller only keeps what it already had.
fn observe<T>(table: &str, result: Result<Vec<T>, BackendError>) -> Result<Vec<T>, BackendError> {
    match &result {
        Ok(rows) => debug!(table, rows = rows.len(), "table loaded"),
        Err(err) => warn!(
            table,
            kind = err.kind(),
            resource = err.resource(),
            error = %err,
            "table load failed"
        ),
    }
    result
}
