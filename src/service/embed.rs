use anyhow::{Context, Result};
use embed_provider::ProviderRegistry;
use embed_types::TracingLogger;
use std::path::Path;

use crate::config::AppConfig;
use crate::ui::Output;

/// 用配置的供应商编码文本
pub async fn embed_text(
    text: &str,
    provider: Option<&str>,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let output = Output::new();
    let registry = ProviderRegistry::builtin();

    let mut config = AppConfig::load(config_path)?;
    config.apply_env(&registry, provider);

    let (client, dimension) = registry
        .construct(&config.provider, &config.settings, Some(&TracingLogger))
        .with_context(|| format!("Failed to load embedding provider: {}", config.provider))?;

    output.provider_info(&config.provider, client.model(), dimension);
    output.status("Embedding", &format!("{} chars", text.chars().count()));

    let vector = client.embed(text).await?;

    if json {
        println!("{}", serde_json::to_string(&vector)?);
    } else {
        output.vector_preview(&vector);
    }

    Ok(())
}
