//! 应用层错误定义
//!
//! 批处理管线的统一错误类型。没有任何局部恢复：
//! 每个错误都上抛到顶层并终止本次运行。

use thiserror::Error;

use crate::application::ports::{AudioStorageError, TtsError};

/// 批处理管线错误
#[derive(Debug, Error)]
pub enum PipelineError {
    /// 词汇文档加载失败（缺失、不可读、JSON 非法）
    #[error("Vocabulary load error: {0}")]
    Load(String),

    /// 单条文本的后端合成失败，整个批次中止，不写清单
    #[error("TTS backend error for \"{text}\": {source}")]
    Backend {
        text: String,
        #[source]
        source: TtsError,
    },

    /// 输出目录或清单不可写
    #[error("Write error: {0}")]
    Write(#[from] AudioStorageError),

    /// 内部错误
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PipelineError {
    /// 创建 Backend 错误
    pub fn backend(text: impl Into<String>, source: TtsError) -> Self {
        Self::Backend {
            text: text.into(),
            source,
        }
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
