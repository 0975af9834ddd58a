use embed_provider::ProviderRegistry;

use crate::ui::Output;

/// 列出已注册的供应商
pub fn list_providers(registry: &ProviderRegistry) {
    let output = Output::new();

    if registry.is_empty() {
        output.note("no embedding providers enabled in this build");
        return;
    }

    for (name, spec) in registry.iter() {
        output.provider_item(name, spec.model(), spec.dimension(), spec.required_keys());
    }
}
