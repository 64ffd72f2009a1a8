//! Ingest Commands

/// 摄取请求体命令
///
/// `body` 为逐块到达的数据流，不会整体缓存在内存中
#[derive(Debug)]
pub struct IngestBody<S> {
    /// 客户端声明的 Content-Length
    pub declared_length: Option<u64>,
    pub body: S,
}

impl<S> IngestBody<S> {
    pub fn new(declared_length: Option<u64>, body: S) -> Self {
        Self {
            declared_length,
            body,
        }
    }
}
