//! Ingest Command Handlers

use bytes::Bytes;
use futures_util::{Stream, StreamExt};
use std::fmt::Display;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::application::commands::IngestBody;
use crate::application::error::ApplicationError;
use crate::application::ports::{Spool, SpoolError, SpoolPort};
use crate::domain::ingestion::{BodyLimit, ByteSize, Elapsed, IngestReceipt};

// ============================================================================
// IngestBody
// ============================================================================

/// IngestBody Handler
///
/// 把请求体逐块写入一个新建的 spool，结束后无论成败都删除它
pub struct IngestBodyHandler {
    spool_port: Arc<dyn SpoolPort>,
    limit: BodyLimit,
    read_timeout: Duration,
}

impl IngestBodyHandler {
    pub fn new(spool_port: Arc<dyn SpoolPort>, limit: BodyLimit, read_timeout: Duration) -> Self {
        Self {
            spool_port,
            limit,
            read_timeout,
        }
    }

    #[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
    pub async fn handle<S, E>(
        &self,
        command: IngestBody<S>,
    ) -> Result<IngestReceipt, ApplicationError>
    where
        S: Stream<Item = Result<Bytes, E>>,
        E: Display,
    {
        tracing::debug!("begin");

        let start_time = Instant::now();

        // 超限请求在创建文件之前就拒绝
        if let Some(declared) = command.declared_length {
            self.limit.check_declared(declared)?;
            tracing::debug!("expecting body length of {}", ByteSize::new(declared));
        }

        let mut spool = self.spool_port.create().await?;
        if let Some(path) = spool.location() {
            tracing::trace!(path = %path.display(), "Spool created");
        }

        let copied = self.copy_body(command.body, &mut spool).await;
        let discarded = spool.discard().await;

        let bytes_written = match (copied, discarded) {
            (Ok(bytes), Ok(())) => bytes,
            (Ok(_), Err(e)) => {
                tracing::error!(error = %e, "Spool could not be removed");
                return Err(e.into());
            }
            (Err(e), discarded) => {
                if let Err(discard_err) = discarded {
                    tracing::error!(error = %discard_err, "Spool could not be removed");
                }
                return Err(e);
            }
        };

        let receipt = IngestReceipt {
            bytes_written: ByteSize::new(bytes_written),
            elapsed: Elapsed::new(start_time.elapsed()),
        };

        tracing::debug!(
            "end, wrote {} (server-side took {})",
            receipt.bytes_written,
            receipt.elapsed
        );

        Ok(receipt)
    }

    /// 流式拷贝，返回写入的字节数
    async fn copy_body<S, E>(
        &self,
        body: S,
        spool: &mut Box<dyn Spool>,
    ) -> Result<u64, ApplicationError>
    where
        S: Stream<Item = Result<Bytes, E>>,
        E: Display,
    {
        let mut body = std::pin::pin!(body);
        let mut written: u64 = 0;

        loop {
            let next = tokio::time::timeout(self.read_timeout, body.next())
                .await
                .map_err(|_| ApplicationError::ReadTimeout(self.read_timeout))?;

            let Some(chunk) = next else {
                break;
            };
            let chunk = chunk.map_err(|e| ApplicationError::body_read(e.to_string()))?;

            written += chunk.len() as u64;
            self.limit.check_received(written)?;

            spool
                .write_all(&chunk)
                .await
                .map_err(|e| SpoolError::WriteFailed(e.to_string()))?;
        }

        spool
            .flush()
            .await
            .map_err(|e| SpoolError::WriteFailed(e.to_string()))?;

        Ok(written)
    }
}
