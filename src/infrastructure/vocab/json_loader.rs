//! Vocabulary Loader - 词汇文档加载
//!
//! 从磁盘读取词汇 JSON 文档并反序列化为领域模型。
//! 除读取文件外没有任何副作用。

use std::path::Path;
use thiserror::Error;

use crate::application::PipelineError;
use crate::domain::VocabularyDocument;

/// 词汇文档加载错误
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Vocabulary file not found: {0}")]
    NotFound(String),

    #[error("Failed to read {path}: {message}")]
    IoError { path: String, message: String },

    #[error("Invalid JSON in {path}: {message}")]
    ParseError { path: String, message: String },
}

impl From<LoadError> for PipelineError {
    fn from(err: LoadError) -> Self {
        PipelineError::Load(err.to_string())
    }
}

/// 加载词汇文档
///
/// 文件缺失、不可读或 JSON 非法都是致命错误，发生在任何合成之前。
pub async fn load_vocabulary(path: impl AsRef<Path>) -> Result<VocabularyDocument, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }

    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| LoadError::IoError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let document: VocabularyDocument =
        serde_json::from_str(&raw).map_err(|e| LoadError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    tracing::debug!(path = %path.display(), "Vocabulary document loaded");

    Ok(document)
}
