use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use tracing::{debug, info, warn};

use crate::domain::entities::edit::CellKey;
use crate::domain::entities::record::Record;
use crate::usecase::ports::backend::PersistenceGateway;
use crate::usecase::primary_table::{CommitError, PrimaryTable};

/// Future that performs one submit and logs its outcome.
pub type SubmitTask = BoxFuture<'static, ()>;

pub struct EditService {
    gateway: Arc<dyn PersistenceGateway>,
}

impl EditService {
    pub fn new(gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self { gateway }
    }

    /// Runs the commit path on `table`. The cache already shows the new value
    /// when this returns; the returned task still has to be spawned.
    pub fn commit(&self, table: &mut PrimaryTable) -> Result<Option<SubmitTask>, CommitError> {
        match table.commit() {
            Ok(outcome) => Ok(outcome.into_record().map(|record| self.submit(record))),
            Err(err) => {
                debug!(error = %err, "commit rejected");
                Err(err)
            }
        }
    }

    /// Activates `cell`, committing any other open session first.
    pub fn activate(
        &self,
        table: &mut PrimaryTable,
        cell: CellKey,
    ) -> Result<Option<SubmitTask>, CommitError> {
        let outcome = table.activate(cell)?;
        Ok(outcome.committed.map(|record| self.submit(record)))
    }

    /// Single attempt. A failure is only logged and the optimistic cache
    /// update stays in place.
    pub fn submit(&self, record: Record) -> SubmitTask {
        let gateway = self.gateway.clone();
        async move {
            match gateway.submit(&record).await {
                Ok(()) => info!(key = %record.key, "record persisted"),
                Err(err) => warn!(
                    key = %record.key,
                    kind = err.kind(),
                    resource = err.resource(),
                    error = %err,
                    "record submit failed; keeping local value"
                ),
            }
        }
        .boxed()
    }
}
