use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::entities::edit::{CellKey, CellMode};
use crate::domain::entities::record::{Record, VALUE_FIELD};
use crate::domain::entities::rows::{EndpointRow, InterfaceRow, RiskRow, ServiceRow, ThreatRow};
use crate::ui::state::table_slice::TableSlice;
use crate::usecase::ports::backend::{BackendError, PersistenceGateway, TableSource};
use crate::usecase::primary_table::{CommitError, PrimaryTable};
use crate::usecase::services::edit_service::EditService;
use crate::usecase::services::query_service::QueryService;

#[derive(Default)]
struct RecordingGateway {
    submitted: Mutex<Vec<Record>>,
    fail: bool,
}

impl RecordingGateway {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn submitted(&self) -> Vec<Record> {
        self.submitted.lock().expect("gateway lock").clone()
    }
}

#[async_trait]
impl PersistenceGateway for RecordingGateway {
    async fn submit(&self, record: &Record) -> Result<(), BackendError> {
        self.submitted
            .lock()
            .expect("gateway lock")
            .push(record.clone());
        if self.fail {
            return Err(BackendError::Status {
                resource: "tables/runner".to_string(),
                status: 500,
            });
        }
        Ok(())
    }
}

/// Serves canned tables after a per-table delay.
struct DelayedSource {
    runner: Vec<Record>,
    runner_delay: Duration,
    endpoints: Vec<EndpointRow>,
    endpoints_delay: Duration,
    offline: bool,
}

impl DelayedSource {
    fn new(runner_delay_ms: u64, endpoints_delay_ms: u64) -> Self {
        Self {
            runner: vec![Record::new("IP", "10.0.0.1"), Record::new("Hostname", "node1")],
            runner_delay: Duration::from_millis(runner_delay_ms),
            endpoints: vec![EndpointRow {
                endpoint: "10.1.1.5".to_string(),
                hostname: "web-1".to_string(),
                host_type: "UBUNTU".to_string(),
                ..EndpointRow::default()
            }],
            endpoints_delay: Duration::from_millis(endpoints_delay_ms),
            offline: false,
        }
    }

    fn offline() -> Self {
        Self {
            offline: true,
            ..Self::new(0, 0)
        }
    }

    fn check(&self, resource: &str) -> Result<(), BackendError> {
        if self.offline {
            return Err(BackendError::Transport {
                resource: resource.to_string(),
                message: "connection refused".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl TableSource for DelayedSource {
    async fn runner(&self) -> Result<Vec<Record>, BackendError> {
        tokio::time::sleep(self.runner_delay).await;
        self.check("api/v1/tables/runner")?;
        Ok(self.runner.clone())
    }

    async fn endpoints(&self) -> Result<Vec<EndpointRow>, BackendError> {
        tokio::time::sleep(self.endpoints_delay).await;
        self.check("api/v1/tables/endpoints")?;
        Ok(self.endpoints.clone())
    }

    async fn threats(&self) -> Result<Vec<ThreatRow>, BackendError> {
        self.check("api/v1/tables/threats")?;
        Ok(Vec::new())
    }

    async fn risks(&self) -> Result<Vec<RiskRow>, BackendError> {
        self.check("api/v1/tables/risks")?;
        Ok(Vec::new())
    }

    async fn endpoint_threats(&self, _endpoint: &str) -> Result<Vec<ThreatRow>, BackendError> {
        Ok(Vec::new())
    }

    async fn endpoint_risks(&self, _endpoint: &str) -> Result<Vec<RiskRow>, BackendError> {
        Ok(Vec::new())
    }

    async fn endpoint_interfaces(
        &self,
        _endpoint: &str,
    ) -> Result<Vec<InterfaceRow>, BackendError> {
        Ok(Vec::new())
    }

    async fn endpoint_services(&self, _endpoint: &str) -> Result<Vec<ServiceRow>, BackendError> {
        Ok(Vec::new())
    }

    async fn table_names(&self) -> Result<Vec<String>, BackendError> {
        self.check("tables")?;
        Ok(vec!["runner".to_string(), "endpoints".to_string()])
    }
}

fn ip_cell() -> CellKey {
    CellKey::new("IP", VALUE_FIELD)
}

fn loaded_table() -> PrimaryTable {
    let mut table = PrimaryTable::new();
    table.load(vec![Record::new("IP", "10.0.0.1"), Record::new("Hostname", "node1")]);
    table
}

#[tokio::test]
async fn committing_ip_updates_cache_before_single_submit() {
    let gateway = Arc::new(RecordingGateway::default());
    let edits = EditService::new(gateway.clone());
    let mut table = loaded_table();

    let switched = edits
        .activate(&mut table, ip_cell())
        .expect("activation should succeed");
    assert!(switched.is_none(), "no other session was open");
    table.input("192.168.1.1");

    let task = edits
        .commit(&mut table)
        .expect("commit should validate")
        .expect("commit should produce a submit task");

    assert_eq!(table.records()[0], Record::new("IP", "192.168.1.1"));
    assert_eq!(table.mode(&ip_cell()), CellMode::Display);
    assert!(gateway.submitted().is_empty(), "submit runs only when spawned");

    task.await;

    assert_eq!(gateway.submitted(), vec![Record::new("IP", "192.168.1.1")]);
}

#[tokio::test]
async fn blank_commit_keeps_editing_and_never_submits() {
    let gateway = Arc::new(RecordingGateway::default());
    let edits = EditService::new(gateway.clone());
    let mut table = loaded_table();
    edits
        .activate(&mut table, ip_cell())
        .expect("activation should succeed");
    table.input("   ");

    let result = edits.commit(&mut table);

    assert!(matches!(result, Err(CommitError::Validation(_))));
    assert_eq!(table.mode(&ip_cell()), CellMode::Editing);
    assert_eq!(table.records()[0], Record::new("IP", "10.0.0.1"));
    assert!(gateway.submitted().is_empty());
}

#[tokio::test]
async fn enter_followed_by_blur_submits_once() {
    let gateway = Arc::new(RecordingGateway::default());
    let edits = EditService::new(gateway.clone());
    let mut table = loaded_table();
    edits
        .activate(&mut table, ip_cell())
        .expect("activation should succeed");
    table.input("10.0.0.2");

    let on_enter = edits.commit(&mut table).expect("enter should commit");
    let on_blur = edits.commit(&mut table).expect("blur should be a no-op");

    assert!(on_blur.is_none());
    on_enter.expect("enter should produce a submit task").await;
    assert_eq!(gateway.submitted().len(), 1);
}

#[tokio::test]
async fn failed_submit_keeps_optimistic_value() {
    let gateway = Arc::new(RecordingGateway::failing());
    let edits = EditService::new(gateway.clone());
    let mut table = loaded_table();
    edits
        .activate(&mut table, ip_cell())
        .expect("activation should succeed");
    table.input("10.0.0.2");

    edits
        .commit(&mut table)
        .expect("commit should validate")
        .expect("commit should produce a submit task")
        .await;

    assert_eq!(gateway.submitted().len(), 1, "single attempt, no retry");
    assert_eq!(
        table.records(),
        &[Record::new("IP", "10.0.0.2"), Record::new("Hostname", "node1")]
    );
}

async fn load_setup(source: DelayedSource) -> (PrimaryTable, TableSlice<EndpointRow>) {
    let queries = QueryService::new(Arc::new(source));
    let mut primary = PrimaryTable::new();
    let mut endpoints = TableSlice::default();

    tokio::join!(
        async {
            if let Ok(records) = queries.load_runner().await {
                primary.load(records);
            }
        },
        async {
            let result = queries.load_endpoints().await;
            endpoints.complete(result);
        }
    );

    (primary, endpoints)
}

#[tokio::test]
async fn independent_loads_settle_regardless_of_completion_order() {
    for (runner_ms, endpoints_ms) in [(40, 5), (5, 40)] {
        let (primary, endpoints) = load_setup(DelayedSource::new(runner_ms, endpoints_ms)).await;

        assert_eq!(
            primary.records(),
            &[Record::new("IP", "10.0.0.1"), Record::new("Hostname", "node1")]
        );
        assert_eq!(endpoints.rows().len(), 1);
        assert_eq!(endpoints.rows()[0].endpoint, "10.1.1.5");
    }
}

#[tokio::test]
async fn offline_backend_leaves_tables_empty_without_errors_surfacing() {
    let (primary, endpoints) = load_setup(DelayedSource::offline()).await;

    assert!(primary.records().is_empty());
    assert!(endpoints.rows().is_empty());
    assert!(!matches!(endpoints, TableSlice::Pending));
    assert_eq!(endpoints.caption(), None);
}

#[tokio::test]
async fn query_service_reports_error_kind() {
    let queries = QueryService::new(Arc::new(DelayedSource::offline()));

    let err = queries
        .load_threats()
        .await
        .expect_err("offline source should fail");

    assert_eq!(err.kind(), "transport");
    assert_eq!(err.resource(), "api/v1/tables/threats");
    assert!(queries.list_tables().await.is_err());
}
