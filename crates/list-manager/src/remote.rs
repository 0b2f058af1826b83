//! Remote Collection Service
//!
//! Abstract list/create/update/delete interface for one entity collection,
//! plus the REST implementation used by the console.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::{ListError, ListResult};
use crate::record::{DraftRecord, Record, RecordId};
use crate::schema::EntitySchema;

/// CRUD access to one remote collection
///
/// Futures are not `Send`: in the browser every request runs on the UI's
/// single event loop.
#[async_trait(?Send)]
pub trait RemoteCollection {
    /// Fetch the full collection
    async fn list(&self) -> ListResult<Vec<Record>>;

    /// Persist a draft; the returned record carries the assigned id
    async fn create(&self, draft: &DraftRecord) -> ListResult<Record>;

    /// Replace the record with `record.id` by the full record
    async fn update(&self, record: &Record) -> ListResult<()>;

    /// Delete by id
    async fn delete(&self, id: RecordId) -> ListResult<()>;
}

/// JSON-over-HTTP collection at `{base_url}{endpoint}`
#[derive(Debug, Clone)]
pub struct HttpCollection {
    client: Client,
    base_url: String,
    endpoint: String,
}

impl HttpCollection {
    pub fn new(base_url: &str, schema: &EntitySchema) -> Self {
        Self::with_client(Client::new(), base_url, schema)
    }

    pub fn with_client(client: Client, base_url: &str, schema: &EntitySchema) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoint: format!("/{}", schema.endpoint.trim_matches('/')),
        }
    }

    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, self.endpoint)
    }

    pub fn record_url(&self, id: RecordId) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    async fn send(&self, method: &'static str, url: &str, request: RequestBuilder) -> ListResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| ListError::request_failed(method, url, e))?;
        response
            .error_for_status()
            .map_err(|e| ListError::request_failed(method, url, e))
    }

    async fn decode<T: DeserializeOwned>(method: &'static str, url: &str, response: Response) -> ListResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| ListError::request_failed(method, url, e))
    }
}

#[async_trait(?Send)]
impl RemoteCollection for HttpCollection {
    async fn list(&self) -> ListResult<Vec<Record>> {
        let url = self.collection_url();
        let response = self.send("GET", &url, self.client.get(&url)).await?;
        Self::decode("GET", &url, response).await
    }

    async fn create(&self, draft: &DraftRecord) -> ListResult<Record> {
        let url = self.collection_url();
        let response = self.send("POST", &url, self.client.post(&url).json(draft)).await?;
        Self::decode("POST", &url, response).await
    }

    async fn update(&self, record: &Record) -> ListResult<()> {
        let url = self.record_url(record.id);
        self.send("PUT", &url, self.client.put(&url).json(record)).await?;
        Ok(())
    }

    async fn delete(&self, id: RecordId) -> ListResult<()> {
        let url = self.record_url(id);
        self.send("DELETE", &url, self.client.delete(&url)).await?;
        Ok(())
    }
}
