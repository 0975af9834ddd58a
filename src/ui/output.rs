use console::Style;
use std::path::Path;

/// 向量预览显示的分量数
const PREVIEW_COMPONENTS: usize = 8;

/// 命令行输出格式化工具
/// 提供统一的 Cargo 风格输出
pub struct Output {
    green: Style,
    bold: Style,
    dim: Style,
}

impl Output {
    pub fn new() -> Self {
        Self {
            green: Style::new().green().bold(),
            bold: Style::new().bold(),
            dim: Style::new().dim(),
        }
    }

    /// 显示状态消息（如 "Loading provider", "Embedding text" 等）
    /// 格式: "     Loading provider ..."（动词右对齐到 12 字符）
    pub fn status(&self, action: &str, target: &str) {
        eprintln!("{:>12} {}", self.green.apply_to(action), target);
    }

    /// 显示供应商信息
    /// 格式: "    Provider ollama (llama2/4096d)"
    pub fn provider_info(&self, name: &str, model: &str, dimension: usize) {
        eprintln!(
            "{:>12} {} {}",
            self.green.apply_to("Provider"),
            name,
            self.dim.apply_to(format!("({}/{}d)", model, dimension))
        );
    }

    /// 显示创建/查找资源消息
    /// 格式: "    Creating config at /path/to/config"
    pub fn resource_action(&self, action: &str, resource: &str, path: &Path) {
        eprintln!(
            "{:>12} {} at {}",
            self.green.apply_to(action),
            resource,
            path.display()
        );
    }

    /// 显示完成消息
    /// 格式: "    Finished action"
    pub fn finish(&self, action: &str) {
        eprintln!("{:>12} {}", self.green.apply_to("Finished"), action);
    }

    /// 显示注意事项（右对齐）
    pub fn note(&self, message: &str) {
        eprintln!("{:>12} {}", self.dim.apply_to("Note"), message);
    }

    /// 显示供应商列表项
    /// 格式: "ollama llama2/4096d  requires: ollama_base_url"
    pub fn provider_item(&self, name: &str, model: &str, dimension: usize, required: &[String]) {
        let required = if required.is_empty() {
            String::new()
        } else {
            format!("  requires: {}", required.join(", "))
        };

        println!(
            "{} {}{}",
            self.bold.apply_to(name),
            self.dim.apply_to(format!("{}/{}d", model, dimension)),
            self.dim.apply_to(required)
        );
    }

    /// 显示向量预览
    /// 格式: "[0.0123, -0.4567, ...] (4096 values)"
    pub fn vector_preview(&self, vector: &[f32]) {
        println!(
            "{} {}",
            format_preview(vector, PREVIEW_COMPONENTS),
            self.dim.apply_to(format!("({} values)", vector.len()))
        );
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}

fn format_preview(vector: &[f32], limit: usize) -> String {
    let mut parts: Vec<String> = vector
        .iter()
        .take(limit)
        .map(|v| format!("{:.4}", v))
        .collect();
    if vector.len() > limit {
        parts.push("...".to_string());
    }
    format!("[{}]", parts.join(", "))
}
