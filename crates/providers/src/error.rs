use embed_types::ConfigError;
use thiserror::Error;

/// 构造 embedding 客户端时的错误
///
/// 全部原样返回给调用方，不做重试。
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported embedding provider: '{name}'")]
    UnsupportedProvider { name: String },

    #[error("embedding provider '{provider}' requires configuration key '{key}'")]
    MissingConfiguration { provider: String, key: String },

    #[error("invalid configuration '{key}' for embedding provider '{provider}': {reason}")]
    InvalidConfiguration {
        provider: String,
        key: String,
        reason: String,
    },

    #[error("failed to construct '{provider}' embedding client: {source}")]
    ClientConstruction {
        provider: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl LoadError {
    /// 将配置读取错误归到对应的供应商
    pub fn from_config(provider: &str, err: ConfigError) -> Self {
        match err {
            ConfigError::Missing { key } => Self::MissingConfiguration {
                provider: provider.to_string(),
                key,
            },
            ConfigError::WrongType { key, expected } => Self::InvalidConfiguration {
                provider: provider.to_string(),
                key,
                reason: format!("expected a {}", expected),
            },
        }
    }

    pub fn construction(
        provider: &str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::ClientConstruction {
            provider: provider.to_string(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_from_config_missing() {
        let err = LoadError::from_config(
            "ollama",
            ConfigError::Missing {
                key: "ollama_base_url".to_string(),
            },
        );

        assert!(matches!(
            &err,
            LoadError::MissingConfiguration { provider, key }
                if provider == "ollama" && key == "ollama_base_url"
        ));
        assert_eq!(
            err.to_string(),
            "embedding provider 'ollama' requires configuration key 'ollama_base_url'"
        );
    }

    #[test]
    fn test_from_config_wrong_type() {
        let err = LoadError::from_config(
            "ollama",
            ConfigError::WrongType {
                key: "ollama_base_url".to_string(),
                expected: "string",
            },
        );

        assert!(matches!(err, LoadError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("expected a string"));
    }

    #[test]
    fn test_construction_keeps_source() {
        let err = LoadError::construction("ollama", "connection refused");

        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "failed to construct 'ollama' embedding client: connection refused"
        );
    }
}
