//! Temp File Spool - 临时文件实现
//!
//! 实现 SpoolPort trait

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::task::{Context, Poll};
use tempfile::TempPath;
use tokio::fs::{self, File};
use tokio::io::AsyncWrite;

use crate::application::ports::{Spool, SpoolError, SpoolPort};

/// 临时文件名前缀
pub const SPOOL_PREFIX: &str = "ingest_";

/// 在指定目录下为每个请求创建临时文件
pub struct TempFileSpooler {
    /// 临时文件目录
    dir: PathBuf,
}

impl TempFileSpooler {
    /// 使用指定目录（不存在时创建）
    pub async fn new(dir: impl AsRef<Path>) -> Result<Self, SpoolError> {
        let dir = dir.as_ref().to_path_buf();

        fs::create_dir_all(&dir)
            .await
            .map_err(|e| SpoolError::CreateFailed(e.to_string()))?;

        Ok(Self { dir })
    }

    /// 使用系统临时目录
    pub fn system() -> Self {
        Self {
            dir: std::env::temp_dir(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl SpoolPort for TempFileSpooler {
    async fn create(&self) -> Result<Box<dyn Spool>, SpoolError> {
        let dir = self.dir.clone();

        // tempfile 是阻塞 API
        let named = tokio::task::spawn_blocking(move || {
            tempfile::Builder::new()
                .prefix(SPOOL_PREFIX)
                .tempfile_in(dir)
        })
        .await
        .map_err(|e| SpoolError::CreateFailed(e.to_string()))?
        .map_err(|e| SpoolError::CreateFailed(e.to_string()))?;

        let (file, path) = named.into_parts();

        Ok(Box::new(TempFileSpool {
            file: File::from_std(file),
            path,
        }))
    }
}

/// 单个请求的临时文件
///
/// `path` 在 drop 时删除文件，字段顺序保证先关闭句柄再删除
pub struct TempFileSpool {
    file: File,
    path: TempPath,
}

impl AsyncWrite for TempFileSpool {
    fn poll_write(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        Pin::new(&mut self.file).poll_write(cx, buf)
    }

    fn poll_flush(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.file).poll_flush(cx)
    }

    fn poll_shutdown(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.file).poll_shutdown(cx)
    }
}

#[async_trait]
impl Spool for TempFileSpool {
    fn location(&self) -> Option<&Path> {
        Some(&*self.path)
    }

    async fn discard(self: Box<Self>) -> Result<(), SpoolError> {
        let TempFileSpool { file, path } = *self;
        drop(file);

        let display = path.display().to_string();

        // 删除大文件可能很慢；即使调用方被取消，阻塞任务也会完成删除
        tokio::task::spawn_blocking(move || path.close())
            .await
            .map_err(|e| SpoolError::RemoveFailed(format!("{}: {}", display, e)))?
            .map_err(|e| SpoolError::RemoveFailed(format!("{}: {}", display, e)))
    }
}
