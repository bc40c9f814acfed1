//! Remote key-value bucket over HTTP
//!
//! Layout under `{base_url}/{bucket}/`:
//! - `registry`: the class registry
//! - `results/{token}`: results of one student, `token` being the hex-encoded
//!   identity key
//!
//! `GET` answering 404 means nothing is stored yet. Writes are whole-document
//! `PUT`s with JSON bodies.

use crate::adapter::PersistenceAdapter;
use crate::error::PersistenceError;
use async_trait::async_trait;
use guidance_catalog::{IdentityKey, Registry, ResultSet};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Remote bucket settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Service root, e.g. `https://kv.example.org`
    pub base_url: String,
    /// Bucket name
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// Bearer token
    #[serde(default)]
    pub api_key: Option<String>,
    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_bucket() -> String {
    "guidance".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl RemoteConfig {
    /// Settings for `base_url` with default bucket and timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            bucket: default_bucket(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Use bucket `bucket`
    #[must_use]
    pub fn with_bucket(mut self, bucket: impl Into<String>) -> Self {
        self.bucket = bucket.into();
        self
    }

    /// Authenticate with `api_key`
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Per-request timeout
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Timeout as a duration
    #[inline]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// HTTP bucket adapter
#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: reqwest::Client,
    root: String,
    api_key: Option<String>,
}

impl RemoteStore {
    /// Build a client for `config`
    ///
    /// # Errors
    /// - `PersistenceError::RemoteTransport` if the HTTP client cannot be built
    pub fn new(config: &RemoteConfig) -> Result<Self, PersistenceError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            client,
            root: format!(
                "{}/{}",
                config.base_url.trim_end_matches('/'),
                config.bucket.trim_matches('/')
            ),
            api_key: config.api_key.clone(),
        })
    }

    /// URL of the registry document
    #[must_use]
    pub fn registry_url(&self) -> String {
        format!("{}/registry", self.root)
    }

    /// URL of the results document of `key`
    #[must_use]
    pub fn results_url(&self, key: &IdentityKey) -> String {
        format!("{}/results/{}", self.root, key.token())
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<Option<T>, PersistenceError> {
        let response = self.authorize(self.client.get(&url)).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(%url, "remote document absent");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(PersistenceError::RemoteStatus {
                status: status.as_u16(),
                url,
            });
        }
        Ok(Some(response.json().await?))
    }

    async fn put_json<T: Serialize + Sync>(&self, url: String, body: &T) -> Result<(), PersistenceError> {
        let response = self.authorize(self.client.put(&url)).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PersistenceError::RemoteStatus {
                status: status.as_u16(),
                url,
            });
        }
        tracing::debug!(%url, "remote document written");
        Ok(())
    }
}

#[async_trait]
impl PersistenceAdapter for RemoteStore {
    async fn load_registry(&self) -> Result<Registry, PersistenceError> {
        Ok(self.get_json(self.registry_url()).await?.unwrap_or_default())
    }

    async fn save_registry(&self, registry: &Registry) -> Result<(), PersistenceError> {
        self.put_json(self.registry_url(), registry).await
    }

    async fn load_results(&self, key: &IdentityKey) -> Result<Option<ResultSet>, PersistenceError> {
        self.get_json(self.results_url(key)).await
    }

    async fn save_results(
        &self,
        key: &IdentityKey,
        results: &ResultSet,
    ) -> Result<(), PersistenceError> {
        self.put_json(self.results_url(key), results).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guidance_catalog::StudentIdentity;

    #[test]
    fn urls_use_bucket_and_token() {
        let store = RemoteStore::new(&RemoteConfig::new("http://kv.local/").with_bucket("school")).unwrap();
        assert_eq!(store.registry_url(), "http://kv.local/school/registry");
        let key = StudentIdentity::new("A", "1").unwrap().key();
        assert_eq!(store.results_url(&key), "http://kv.local/school/results/412d31");
    }

    #[test]
    fn config_defaults_from_toml_like_json() {
        let config: RemoteConfig = serde_json::from_str(r#"{"base_url":"http://kv"}"#).unwrap();
        assert_eq!(config.bucket, "guidance");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.api_key.is_none());
    }

    #[tokio::test]
    async fn unreachable_remote_is_a_remote_error() {
        // Nothing listens on port 9 of the loopback interface.
        let store = RemoteStore::new(&RemoteConfig::new("http://127.0.0.1:9").with_timeout_secs(2)).unwrap();
        let err = store.load_registry().await.unwrap_err();
        assert!(err.is_remote());
    }
}
