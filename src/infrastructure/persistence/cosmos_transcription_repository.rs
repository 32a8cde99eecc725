use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use tracing::instrument;

use crate::application::ports::{ConfigurationError, RepositoryError, TranscriptionRepository};
use crate::domain::TranscriptionRecord;
use crate::infrastructure::connection_string::ConnectionString;

type HmacSha256 = Hmac<Sha256>;

const API_VERSION: &str = "2018-12-31";
const MAX_ITEM_COUNT: &str = "1000";
const CONTINUATION_HEADER: &str = "x-ms-continuation";

/// Reads every document of one Cosmos DB container through the SQL REST API.
pub struct CosmosTranscriptionRepository {
    client: reqwest::Client,
    endpoint: String,
    master_key: Vec<u8>,
    database: String,
    collection: String,
}

#[derive(Deserialize)]
struct DocumentsPage {
    #[serde(rename = "Documents", default)]
    documents: Vec<TranscriptionRecord>,
}

impl CosmosTranscriptionRepository {
    pub fn new(
        endpoint: &str,
        account_key: &str,
        database: &str,
        collection: &str,
    ) -> Result<Self, ConfigurationError> {
        let master_key = BASE64
            .decode(account_key.trim())
            .map_err(|e| ConfigurationError(format!("cosmos account key is not base64: {}", e)))?;

        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            master_key,
            database: database.to_string(),
            collection: collection.to_string(),
        })
    }

    pub fn from_connection_string(
        connection_string: &str,
        database: &str,
        collection: &str,
    ) -> Result<Self, ConfigurationError> {
        let parsed = ConnectionString::parse(connection_string)
            .map_err(|e| ConfigurationError(format!("cosmos: {}", e)))?;
        let endpoint = parsed
            .require("AccountEndpoint")
            .map_err(|e| ConfigurationError(format!("cosmos: {}", e)))?;
        let key = parsed
            .require("AccountKey")
            .map_err(|e| ConfigurationError(format!("cosmos: {}", e)))?;

        Self::new(endpoint, key, database, collection)
    }

    /// Resource link as signed: raw ids, unencoded.
    fn collection_link(&self) -> String {
        format!("dbs/{}/colls/{}", self.database, self.collection)
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/dbs/{}/colls/{}/docs",
            self.endpoint,
            urlencoding::encode(&self.database),
            urlencoding::encode(&self.collection)
        )
    }

    /// Master-key token: HMAC-SHA256 over verb, resource type, resource link and date.
    fn authorization(
        &self,
        verb: &str,
        resource_type: &str,
        resource_link: &str,
        date: &str,
    ) -> Result<String, RepositoryError> {
        let payload = format!(
            "{}\n{}\n{}\n{}\n\n",
            verb.to_lowercase(),
            resource_type.to_lowercase(),
            resource_link,
            date.to_lowercase()
        );

        let mut mac = HmacSha256::new_from_slice(&self.master_key)
            .map_err(|e| RepositoryError::QueryFailed(format!("signing key: {}", e)))?;
        mac.update(payload.as_bytes());
        let signature = BASE64.encode(mac.finalize().into_bytes());

        Ok(urlencoding::encode(&format!("type=master&ver=1.0&sig={}", signature)).into_owned())
    }
}

#[async_trait]
impl TranscriptionRepository for CosmosTranscriptionRepository {
    #[instrument(skip(self), fields(database = %self.database, collection = %self.collection))]
    async fn list_all(&self) -> Result<Vec<TranscriptionRecord>, RepositoryError> {
        let link = self.collection_link();
        let url = self.documents_url();

        let mut records = Vec::new();
        let mut continuation: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let date = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();
            let token = self.authorization("GET", "docs", &link, &date)?;

            let mut request = self
                .client
                .get(&url)
                .header("authorization", token)
                .header("x-ms-date", &date)
                .header("x-ms-version", API_VERSION)
                .header("x-ms-max-item-count", MAX_ITEM_COUNT)
                .header("accept", "application/json");
            if let Some(token) = &continuation {
                request = request.header(CONTINUATION_HEADER, token);
            }

            let response = request
                .send()
                .await
                .map_err(|e| RepositoryError::ConnectionFailed(format!("request: {}", e)))?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "unknown error".to_string());
                return Err(RepositoryError::QueryFailed(format!(
                    "status {}: {}",
                    status, body
                )));
            }

            let next = response
                .headers()
                .get(CONTINUATION_HEADER)
                .and_then(|v| v.to_str().ok())
                .filter(|v| !v.is_empty())
                .map(String::from);

            let page: DocumentsPage = response
                .json()
                .await
                .map_err(|e| RepositoryError::InvalidResponse(format!("parse documents: {}", e)))?;

            pages += 1;
            records.extend(page.documents);

            match next {
                Some(token) => continuation = Some(token),
                None => break,
            }
        }

        tracing::debug!(records = records.len(), pages, "Cosmos documents read");

        Ok(records)
    }
}
