use anyhow::Result;

/// 信息日志能力
///
/// 工厂只需要 `info`；返回的错误不会中断构造。
pub trait InfoLogger: Send + Sync {
    fn info(&self, message: &str) -> Result<()>;
}

/// 丢弃所有消息
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl InfoLogger for NoopLogger {
    fn info(&self, _message: &str) -> Result<()> {
        Ok(())
    }
}

/// 转发到 tracing
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl InfoLogger for TracingLogger {
    fn info(&self, message: &str) -> Result<()> {
        tracing::info!("{}", message);
        Ok(())
    }
}
