use anyhow::{Context, Result};
use embed_provider::ProviderRegistry;
use embed_types::Configuration;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 覆盖 provider 的环境变量
pub const PROVIDER_ENV: &str = "EMBED_PROVIDER";

const CONFIG_FILE: &str = "config.toml";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Embedding 供应商名称（默认: "ollama"）
    #[serde(default = "default_provider")]
    pub provider: String,

    /// 供应商配置项（如 ollama_base_url）
    #[serde(default)]
    pub settings: Configuration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            settings: Configuration::new(),
        }
    }
}

fn default_provider() -> String {
    "ollama".to_string()
}

impl AppConfig {
    /// `init` 写入的模板配置
    pub fn template() -> Self {
        Self {
            provider: default_provider(),
            settings: Configuration::new().with("ollama_base_url", "http://localhost:11434"),
        }
    }

    /// 全局目录：~/.embed/
    pub fn global_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".embed")
    }

    /// 本地目录：./.embed/
    pub fn local_dir() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".embed")
    }

    /// 根据 local 标志获取配置文件路径
    pub fn config_path(local: bool) -> PathBuf {
        if local {
            Self::local_dir().join(CONFIG_FILE)
        } else {
            Self::global_dir().join(CONFIG_FILE)
        }
    }

    /// 配置文件路径：显式路径 > 本地配置 > 全局配置
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }

        let local = Self::config_path(true);
        if local.exists() {
            local
        } else {
            Self::config_path(false)
        }
    }

    /// 加载配置；文件不存在时使用默认值
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = Self::resolve_path(explicit);

        if !path.exists() {
            if explicit.is_some() {
                anyhow::bail!("Configuration not found at: {}", path.display());
            }
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&path)
    }

    /// 从指定路径加载配置文件
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        tracing::debug!("Loaded app config from: {}", path.display());
        tracing::debug!("Provider: {}", config.provider);

        Ok(config)
    }

    /// 应用覆盖项
    /// - `provider`: 命令行指定的供应商，优先于 EMBED_PROVIDER
    /// - 所选供应商的每个必需配置项可由同名大写环境变量覆盖（如 OLLAMA_BASE_URL）
    pub fn apply_overrides<F>(
        &mut self,
        registry: &ProviderRegistry,
        provider: Option<&str>,
        lookup: F,
    ) where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = provider
            .map(str::to_string)
            .or_else(|| lookup(PROVIDER_ENV))
        {
            self.provider = name;
        }

        let Some(spec) = registry.get(&self.provider) else {
            return;
        };

        for key in spec.required_keys() {
            if let Some(value) = lookup(&key.to_uppercase()) {
                tracing::debug!("Override {} from environment", key);
                self.settings.insert(key.clone(), value);
            }
        }
    }

    /// 使用进程环境变量覆盖
    pub fn apply_env(&mut self, registry: &ProviderRegistry, provider: Option<&str>) {
        self.apply_overrides(registry, provider, |name| std::env::var(name).ok());
    }

    /// 保存配置
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_parse_app_config() {
        let toml_str = r#"
provider = "ollama"

[settings]
ollama_base_url = "http://ollama:11434"
ollama_request_timeout_secs = 60
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.provider, "ollama");
        assert_eq!(
            config.settings.require_str("ollama_base_url"),
            Ok("http://ollama:11434")
        );
        assert_eq!(
            config.settings.get_u64("ollama_request_timeout_secs"),
            Ok(Some(60))
        );
    }

    #[test]
    fn test_default_values() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.provider, "ollama");
        assert!(config.settings.is_empty());
    }

    #[test]
    fn test_env_overrides_required_keys() {
        let registry = ProviderRegistry::builtin();
        let mut config = AppConfig::template();

        config.apply_overrides(
            &registry,
            None,
            lookup_from(&[
                ("OLLAMA_BASE_URL", "http://gpu-box:11434"),
                ("OLLAMA_REQUEST_TIMEOUT_SECS", "5"),
            ]),
        );

        assert_eq!(
            config.settings.require_str("ollama_base_url"),
            Ok("http://gpu-box:11434")
        );
        assert!(!config.settings.contains_key("ollama_request_timeout_secs"));
    }

    #[test]
    fn test_provider_flag_beats_env() {
        let registry = ProviderRegistry::builtin();

        let mut config = AppConfig::default();
        config.apply_overrides(&registry, None, lookup_from(&[(PROVIDER_ENV, "other")]));
        assert_eq!(config.provider, "other");

        let mut config = AppConfig::default();
        config.apply_overrides(
            &registry,
            Some("ollama"),
            lookup_from(&[(PROVIDER_ENV, "other")]),
        );
        assert_eq!(config.provider, "ollama");
    }

    #[test]
    fn test_unknown_provider_keeps_settings() {
        let registry = ProviderRegistry::builtin();
        let mut config = AppConfig::default();

        config.apply_overrides(
            &registry,
            Some("not-a-real-provider"),
            lookup_from(&[("OLLAMA_BASE_URL", "http://ignored:11434")]),
        );

        assert_eq!(config.provider, "not-a-real-provider");
        assert!(config.settings.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        AppConfig::template().save_to(&path).unwrap();
        let loaded = AppConfig::load(Some(path.as_path())).unwrap();

        assert_eq!(loaded, AppConfig::template());
    }

    #[test]
    fn test_explicit_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(AppConfig::load(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_invalid_toml_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "provider = [").unwrap();

        let err = AppConfig::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
