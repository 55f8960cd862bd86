//! File-backed order sink.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::application::ports::{OrderSinkPort, SinkError, WriteMode};
use crate::domain::order_entry::OrderLine;

/// Writes order lines to a text file, one line per order.
#[derive(Debug, Clone)]
pub struct FileOrderSink {
    path: PathBuf,
}

impl FileOrderSink {
    /// Create a sink targeting `path`. Nothing is touched until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, e: &std::io::Error) -> SinkError {
        SinkError::Write {
            path: self.path.display().to_string(),
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl OrderSinkPort for FileOrderSink {
    async fn write(&self, lines: &[OrderLine], mode: WriteMode) -> Result<(), SinkError> {
        let mut options = OpenOptions::new();
        match mode {
            WriteMode::Overwrite => options.write(true).create(true).truncate(true),
            WriteMode::Append => options.append(true).create(true),
        };

        let mut file = options
            .open(&self.path)
            .await
            .map_err(|e| self.write_error(&e))?;

        let content: String = lines.iter().map(|line| format!("{line}\n")).collect();
        file.write_all(content.as_bytes())
            .await
            .map_err(|e| self.write_error(&e))?;
        file.flush().await.map_err(|e| self.write_error(&e))?;

        tracing::debug!(path = %self.path.display(), mode = ?mode, lines = lines.len(), "Order lines written");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
