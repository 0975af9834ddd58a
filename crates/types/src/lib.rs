//! Embedding 供应商的公共类型
//!
//! 本 crate 只依赖基础库，供 provider 实现和上层 CLI 共享。

mod client;
mod config;
mod logger;

pub use client::EmbeddingClient;
pub use config::{ConfigError, Configuration};
pub use logger::{InfoLogger, NoopLogger, TracingLogger};
