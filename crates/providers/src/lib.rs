//! Embedding 供应商注册表与客户端
//!
//! 通过供应商名称和配置构造 embedding 客户端，返回客户端及其固定向量维度。

mod common;
mod error;
mod registry;

// 各供应商模块（feature gated）
#[cfg(feature = "ollama")]
pub mod ollama;

pub use embed_types::{
    ConfigError, Configuration, EmbeddingClient, InfoLogger, NoopLogger, TracingLogger,
};
pub use error::LoadError;
pub use registry::{load_embedding_model, LoadedEmbedding, ProviderRegistry, ProviderSpec};
