use std::sync::Arc;

use anyhow::Result;

use crate::config::AppConfig;
use crate::infra::http::client::HttpBackend;
use crate::usecase::ports::backend::{PersistenceGateway, TableSource};
use crate::usecase::services::edit_service::EditService;
use crate::usecase::services::query_service::QueryService;

/// Root context handed to every view.
#[derive(Clone)]
pub struct Services {
    pub queries: Arc<QueryService>,
    pub edits: Arc<EditService>,
}

impl Services {
    pub fn new(source: Arc<dyn TableSource>, gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self {
            queries: Arc::new(QueryService::new(source)),
            edits: Arc::new(EditService::new(gateway)),
        }
    }

    pub fn http(config: &AppConfig) -> Result<Self> {
        let backend = Arc::new(HttpBackend::new(config)?);
        Ok(Self::new(backend.clone(), backend))
    }
}
