//! Audio Storage Port - 出站端口
//!
//! 定义音频产物与清单持久化的抽象接口

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::Manifest;

/// 音频存储错误
#[derive(Debug, Error)]
pub enum AudioStorageError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Audio Storage Port - 出站端口
///
/// 管理音频文件与清单文件的写入。重复运行会覆盖同名产物。
#[async_trait]
pub trait AudioStoragePort: Send + Sync {
    /// 获取音频文件路径
    fn audio_path(&self, filename: &str) -> PathBuf;

    /// 获取清单文件路径
    fn manifest_path(&self) -> PathBuf;

    /// 保存音频数据
    async fn save_audio(&self, filename: &str, data: &[u8]) -> Result<PathBuf, AudioStorageError>;

    /// 原子写入清单（先写临时文件再 rename）
    ///
    /// 清单写入是整个批次的提交点，只有全部合成成功后才会调用。
    async fn write_manifest(&self, manifest: &Manifest) -> Result<PathBuf, AudioStorageError>;

    /// 检查音频文件是否存在
    async fn audio_exists(&self, filename: &str) -> bool;
}
