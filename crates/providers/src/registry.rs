//! 供应商注册表
//!
//! 供应商名称到 [`ProviderSpec`] 的映射。新增供应商只需注册，
//! 不需要改动分发逻辑。

use embed_types::{Configuration, EmbeddingClient, InfoLogger, NoopLogger};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::LoadError;

/// 构造结果：客户端和固定向量维度
pub type LoadedEmbedding = (Box<dyn EmbeddingClient>, usize);

type Constructor =
    Arc<dyn Fn(&Configuration) -> Result<Box<dyn EmbeddingClient>, LoadError> + Send + Sync>;

/// 单个供应商的构造信息
#[derive(Clone)]
pub struct ProviderSpec {
    label: String,
    model: String,
    dimension: usize,
    required_keys: Vec<String>,
    constructor: Constructor,
}

impl ProviderSpec {
    /// - `label`: 日志中显示的名称（如 "Ollama"）
    /// - `model`: 模型名称
    /// - `dimension`: 该模型的固定输出维度
    /// - `constructor`: 从配置构造客户端
    pub fn new<F>(
        label: impl Into<String>,
        model: impl Into<String>,
        dimension: usize,
        constructor: F,
    ) -> Self
    where
        F: Fn(&Configuration) -> Result<Box<dyn EmbeddingClient>, LoadError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            label: label.into(),
            model: model.into(),
            dimension,
            required_keys: Vec::new(),
            constructor: Arc::new(constructor),
        }
    }

    /// 声明必需的配置项（构造前按声明顺序检查）
    pub fn require(mut self, key: impl Into<String>) -> Self {
        self.required_keys.push(key.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn required_keys(&self) -> &[String] {
        &self.required_keys
    }
}

impl fmt::Debug for ProviderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderSpec")
            .field("label", &self.label)
            .field("model", &self.model)
            .field("dimension", &self.dimension)
            .field("required_keys", &self.required_keys)
            .finish_non_exhaustive()
    }
}

/// 供应商注册表
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: BTreeMap<String, ProviderSpec>,
}

impl ProviderRegistry {
    /// 空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 内置供应商（feature gated）
    pub fn builtin() -> Self {
        #[allow(unused_mut)]
        let mut registry = Self::new();

        #[cfg(feature = "ollama")]
        registry.register(crate::ollama::PROVIDER_NAME, crate::ollama::spec());

        registry
    }

    /// 注册供应商，返回被替换的旧条目
    pub fn register(
        &mut self,
        name: impl Into<String>,
        spec: ProviderSpec,
    ) -> Option<ProviderSpec> {
        self.providers.insert(name.into(), spec)
    }

    pub fn get(&self, name: &str) -> Option<&ProviderSpec> {
        self.providers.get(name)
    }

    /// 已注册的供应商名称（有序）
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProviderSpec)> {
        self.providers.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// 创建 Embedding 客户端
    ///
    /// 每次调用都构造新的客户端。`logger` 为空时使用本次调用内的 [`NoopLogger`]；
    /// logger 返回的错误只记录 warn，不影响构造结果。
    pub fn construct(
        &self,
        name: &str,
        config: &Configuration,
        logger: Option<&dyn InfoLogger>,
    ) -> Result<LoadedEmbedding, LoadError> {
        let spec = self
            .providers
            .get(name)
            .ok_or_else(|| LoadError::UnsupportedProvider {
                name: name.to_string(),
            })?;

        tracing::debug!(
            "Resolving embedding provider: name={}, model={}, dimension={}",
            name,
            spec.model,
            spec.dimension
        );

        if let Some(key) = spec
            .required_keys
            .iter()
            .find(|key| !config.contains_key(key))
        {
            return Err(LoadError::MissingConfiguration {
                provider: name.to_string(),
                key: key.clone(),
            });
        }

        let client = (spec.constructor)(config)?;

        let noop = NoopLogger;
        let logger: &dyn InfoLogger = match logger {
            Some(logger) => logger,
            None => &noop,
        };
        if let Err(err) = logger.info(&format!("Embedding: Using {}", spec.label)) {
            tracing::warn!("Embedding logger failed for provider {}: {:#}", name, err);
        }

        Ok((client, spec.dimension))
    }
}

/// 使用内置注册表创建 Embedding 客户端
pub fn load_embedding_model(
    name: &str,
    config: &Configuration,
    logger: Option<&dyn InfoLogger>,
) -> Result<LoadedEmbedding, LoadError> {
    ProviderRegistry::builtin().construct(name, config, logger)
}
