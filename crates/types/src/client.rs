use anyhow::Result;
use async_trait::async_trait;

/// Embedding 客户端的统一接口
///
/// 任何供应商（本地、远程）构造出的客户端都实现这个 trait，
/// 由调用方持有，工厂不保留引用。
#[async_trait]
pub trait EmbeddingClient: Send + Sync {
    /// 编码单个文本
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// 批量编码文本（默认逐条请求，保持输入顺序）
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed(text).await?);
        }
        Ok(results)
    }

    /// 获取向量维度
    fn dimension(&self) -> usize;

    /// 模型名称
    fn model(&self) -> &str;

    /// 供应商名称
    fn provider(&self) -> &str;
}
