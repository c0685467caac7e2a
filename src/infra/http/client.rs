use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::config::AppConfig;
use crate::domain::entities::record::Record;
use crate::domain::entities::rows::{EndpointRow, InterfaceRow, RiskRow, ServiceRow, ThreatRow};
use crate::infra::http::routes;
use crate::usecase::ports::backend::{
    BackendError, EndpointTable, PersistenceGateway, TableSource,
};

/// REST backend served by the lydian api server.
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("failed to build http client")?;
        let base_url = Url::parse(&config.api_base_url)
            .with_context(|| format!("invalid backend url: {}", config.api_base_url))?;
        Ok(Self { client, base_url })
    }

    pub fn url(&self, path: &str) -> String {
        routes::join(self.base_url.as_str(), path)
    }

    async fn get_rows<T>(&self, path: &str) -> Result<Vec<T>, BackendError>
    where
        T: DeserializeOwned,
    {
        self.fetch_rows(path, self.url(path)).await
    }

    async fn get_endpoint_rows<T>(
        &self,
        endpoint: &str,
        table: EndpointTable,
    ) -> Result<Vec<T>, BackendError>
    where
        T: DeserializeOwned,
    {
        let Some(url) = routes::endpoint_table(&self.base_url, endpoint, table) else {
            return Err(BackendError::Transport {
                resource: format!("endpoints/{}", table.segment()),
                message: format!("{} cannot carry a request path", self.base_url),
            });
        };
        let path = url.path().trim_start_matches('/').to_string();
        self.fetch_rows(&path, url.to_string()).await
    }

    async fn fetch_rows<T>(&self, path: &str, url: String) -> Result<Vec<T>, BackendError>
    where
        T: DeserializeOwned,
    {
        trace!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| transport(path, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                resource: path.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|err| BackendError::Decode {
                resource: path.to_string(),
                message: err.to_string(),
            })
    }
}

fn transport(path: &str, err: reqwest::Error) -> BackendError {
    BackendError::Transport {
        resource: path.to_string(),
        message: err.to_string(),
    }
}

#[async_trait]
impl TableSource for HttpBackend {
    async fn runner(&self) -> Result<Vec<Record>, BackendError> {
        self.get_rows(routes::RUNNER).await
    }

    async fn endpoints(&self) -> Result<Vec<EndpointRow>, BackendError> {
        self.get_rows(routes::ENDPOINTS).await
    }

    async fn threats(&self) -> Result<Vec<ThreatRow>, BackendError> {
        self.get_rows(routes::THREATS).await
    }

    async fn risks(&self) -> Result<Vec<RiskRow>, BackendError> {
        self.get_rows(routes::RISKS).await
    }

    async fn endpoint_threats(&self, endpoint: &str) -> Result<Vec<ThreatRow>, BackendError> {
        self.get_endpoint_rows(endpoint, EndpointTable::Threats).await
    }

    async fn endpoint_risks(&self, endpoint: &str) -> Result<Vec<RiskRow>, BackendError> {
        self.get_endpoint_rows(endpoint, EndpointTable::Risks).await
    }

    async fn endpoint_interfaces(
        &self,
        endpoint: &str,
    ) -> Result<Vec<InterfaceRow>, BackendError> {
        self.get_endpoint_rows(endpoint, EndpointTable::Interfaces).await
    }

    async fn endpoint_services(&self, endpoint: &str) -> Result<Vec<ServiceRow>, BackendError> {
        self.get_endpoint_rows(endpoint, EndpointTable::Services).await
    }

    async fn table_names(&self) -> Result<Vec<String>, BackendError> {
        self.get_rows(routes::TABLE_NAMES).await
    }
}

#[async_trait]
impl PersistenceGateway for HttpBackend {
    /// The server parses the body as a query string, so the record goes out
    /// form-encoded. The response body is ignored.
    async fn submit(&self, record: &Record) -> Result<(), BackendError> {
        let path = routes::RUNNER_WRITE;
        let response = self
            .client
            .post(self.url(path))
            .form(record)
            .send()
            .await
            .map_err(|err| transport(path, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status {
                resource: path.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
