//! Ollama 本地 Embedding（/api/embeddings 格式）

use anyhow::{Context, Result};
use async_trait::async_trait;
use embed_types::{Configuration, EmbeddingClient};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::common::normalize_for_embedding;
use crate::error::LoadError;
use crate::registry::ProviderSpec;

pub const PROVIDER_NAME: &str = "ollama";
pub const MODEL: &str = "llama2";
/// llama2 的输出维度
pub const DIMENSION: usize = 4096;

pub const BASE_URL_KEY: &str = "ollama_base_url";
pub const TIMEOUT_KEY: &str = "ollama_request_timeout_secs";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct OllamaEmbeddings {
    client: Client,
    base_url: String,
    model: String,
    dimension: usize,
}

#[derive(Debug, Serialize)]
struct OllamaEmbedRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct OllamaEmbedResponse {
    embedding: Vec<f32>,
}

impl OllamaEmbeddings {
    /// 创建客户端（不发起网络请求）
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LoadError> {
        let url = Url::parse(base_url).map_err(|e| LoadError::construction(PROVIDER_NAME, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(LoadError::construction(
                PROVIDER_NAME,
                format!("unsupported URL scheme '{}' in {}", url.scheme(), base_url),
            ));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(LoadError::construction(
                PROVIDER_NAME,
                format!("base URL must not carry a query or fragment: {}", base_url),
            ));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LoadError::construction(PROVIDER_NAME, e))?;

        tracing::info!(
            "Created OllamaEmbeddings: model={}, dimension={}, base_url={}",
            MODEL,
            DIMENSION,
            base_url
        );

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: MODEL.to_string(),
            dimension: DIMENSION,
        })
    }

    /// 从配置创建：`ollama_base_url` 必需，`ollama_request_timeout_secs` 可选
    pub fn from_config(config: &Configuration) -> Result<Self, LoadError> {
        let base_url = config
            .require_str(BASE_URL_KEY)
            .map_err(|e| LoadError::from_config(PROVIDER_NAME, e))?;

        let timeout_secs = match config
            .get_u64(TIMEOUT_KEY)
            .map_err(|e| LoadError::from_config(PROVIDER_NAME, e))?
        {
            Some(0) => {
                return Err(LoadError::InvalidConfiguration {
                    provider: PROVIDER_NAME.to_string(),
                    key: TIMEOUT_KEY.to_string(),
                    reason: "must be greater than zero".to_string(),
                })
            }
            Some(secs) => secs,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Self::new(base_url, Duration::from_secs(timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// 注册表条目
pub(crate) fn spec() -> ProviderSpec {
    ProviderSpec::new("Ollama", MODEL, DIMENSION, |config: &Configuration| {
        Ok(Box::new(OllamaEmbeddings::from_config(config)?) as Box<dyn EmbeddingClient>)
    })
    .require(BASE_URL_KEY)
}

#[async_trait]
impl EmbeddingClient for OllamaEmbeddings {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let normalized = normalize_for_embedding(text);

        let request = OllamaEmbedRequest {
            model: &self.model,
            prompt: &normalized,
        };

        let url = format!("{}/api/embeddings", self.base_url);
        tracing::debug!("Ollama embed request: url={}, chars={}", url, normalized.len());

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to send Ollama embedding request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Ollama embed API error ({}): {}", status, error_text);
            anyhow::bail!("Ollama embed API error ({}): {}", status, error_text);
        }

        let embed_response: OllamaEmbedResponse = response
            .json()
            .await
            .context("Failed to parse Ollama response")?;

        if embed_response.embedding.is_empty() {
            anyhow::bail!("No embedding returned from Ollama");
        }

        Ok(embed_response.embedding)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn provider(&self) -> &str {
        PROVIDER_NAME
    }
}
