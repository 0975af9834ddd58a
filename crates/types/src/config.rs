use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// 配置读取错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing configuration key '{key}'")]
    Missing { key: String },

    #[error("configuration key '{key}' must be a {expected}")]
    WrongType { key: String, expected: &'static str },
}

/// 供应商配置（只读键值映射）
///
/// 每次调用各自构造，默认值是新的空映射。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    values: BTreeMap<String, Value>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// 链式添加配置项
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 获取必需的字符串配置
    pub fn require_str(&self, key: &str) -> Result<&str, ConfigError> {
        match self.values.get(key) {
            None => Err(ConfigError::Missing {
                key: key.to_string(),
            }),
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(_) => Err(ConfigError::WrongType {
                key: key.to_string(),
                expected: "string",
            }),
        }
    }

    /// 获取可选的非负整数配置
    pub fn get_u64(&self, key: &str) -> Result<Option<u64>, ConfigError> {
        match self.values.get(key) {
            None => Ok(None),
            Some(v) => v.as_u64().map(Some).ok_or_else(|| ConfigError::WrongType {
                key: key.to_string(),
                expected: "non-negative integer",
            }),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
