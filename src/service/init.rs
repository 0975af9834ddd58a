use anyhow::Result;
use std::path::Path;

use crate::config::AppConfig;
use crate::ui::Output;

/// 显式初始化（带用户反馈）
/// local: true 表示在本地目录初始化，false 表示在全局目录初始化；
/// 指定 `explicit` 时写入该路径
pub fn initialize(local: bool, force: bool, explicit: Option<&Path>) -> Result<()> {
    let output = Output::new();
    let config_path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| AppConfig::config_path(local));

    // 如果配置文件已存在且未指定 --force，保留原文件
    if config_path.exists() && !force {
        output.resource_action("Found", "config", &config_path);
        output.note("use --force to overwrite");
        return Ok(());
    }

    AppConfig::template().save_to(&config_path)?;
    output.resource_action("Creating", "config", &config_path);
    output.note("OLLAMA_BASE_URL overrides ollama_base_url at runtime");

    output.finish("initialization");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        initialize(false, false, Some(path.as_path())).unwrap();

        assert_eq!(
            AppConfig::load_from_path(&path).unwrap(),
            AppConfig::template()
        );
    }

    #[test]
    fn test_initialize_keeps_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "provider = \"custom\"\n").unwrap();

        initialize(false, false, Some(path.as_path())).unwrap();
        assert_eq!(AppConfig::load_from_path(&path).unwrap().provider, "custom");

        initialize(false, true, Some(path.as_path())).unwrap();
        assert_eq!(
            AppConfig::load_from_path(&path).unwrap(),
            AppConfig::template()
        );
    }
}
