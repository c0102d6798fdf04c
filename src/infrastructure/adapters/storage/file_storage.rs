//! File Storage - 文件系统音频存储实现
//!
//! 实现 AudioStoragePort trait

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{AudioStorageError, AudioStoragePort};
use crate::domain::{Manifest, MANIFEST_FILE};

/// 文件系统音频存储
///
/// 所有产物（音频文件 + manifest.json）落在同一个输出目录下。
pub struct FileAudioStorage {
    /// 输出目录
    base_dir: PathBuf,
}

impl FileAudioStorage {
    /// 创建新的文件存储
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, AudioStorageError> {
        let base_dir = base_dir.as_ref().to_path_buf();

        // 确保目录存在
        fs::create_dir_all(&base_dir)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        Ok(Self { base_dir })
    }

    /// 获取输出目录
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[async_trait]
impl AudioStoragePort for FileAudioStorage {
    fn audio_path(&self, filename: &str) -> PathBuf {
        self.base_dir.join(filename)
    }

    fn manifest_path(&self) -> PathBuf {
        self.base_dir.join(MANIFEST_FILE)
    }

    async fn save_audio(&self, filename: &str, data: &[u8]) -> Result<PathBuf, AudioStorageError> {
        let audio_path = self.audio_path(filename);

        fs::write(&audio_path, data)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        tracing::debug!(
            "Saved audio: file={}, size={} bytes",
            audio_path.display(),
            data.len()
        );

        Ok(audio_path)
    }

    async fn write_manifest(&self, manifest: &Manifest) -> Result<PathBuf, AudioStorageError> {
        let json = manifest
            .to_pretty_json()
            .map_err(|e| AudioStorageError::SerializationError(e.to_string()))?;

        // 先写临时文件再 rename，避免中断留下半截清单
        let manifest_path = self.manifest_path();
        let tmp_path = self.base_dir.join(format!("{}.tmp", MANIFEST_FILE));

        fs::write(&tmp_path, json.as_bytes())
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;
        fs::rename(&tmp_path, &manifest_path)
            .await
            .map_err(|e| AudioStorageError::IoError(e.to_string()))?;

        tracing::debug!(
            "Wrote manifest: file={}, entries={}",
            manifest_path.display(),
            manifest.len()
        );

        Ok(manifest_path)
    }

    async fn audio_exists(&self, filename: &str) -> bool {
        self.audio_path(filename).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assign_filenames;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_save_audio_and_exists() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let data = b"fake mp3 data";
        let path = storage.save_audio("0000_556de6.mp3", data).await.unwrap();
        assert!(path.exists());
        assert!(storage.audio_exists("0000_556de6.mp3").await);
        assert!(!storage.audio_exists("9999_000000.mp3").await);

        let read_back = fs::read(&path).await.unwrap();
        assert_eq!(read_back, data);
    }

    #[tokio::test]
    async fn test_save_audio_overwrites() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        storage.save_audio("a.mp3", b"first").await.unwrap();
        let path = storage.save_audio("a.mp3", b"second").await.unwrap();

        let read_back = fs::read(&path).await.unwrap();
        assert_eq!(read_back, b"second");
    }

    #[tokio::test]
    async fn test_write_manifest_atomic_and_literal_hangul() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let manifest = Manifest::from_entries(&assign_filenames(vec!["학생".to_string()]));
        let path = storage.write_manifest(&manifest).await.unwrap();

        assert_eq!(path, temp_dir.path().join("manifest.json"));
        // 临时文件不残留
        assert!(!temp_dir.path().join("manifest.json.tmp").exists());

        let raw = fs::read_to_string(&path).await.unwrap();
        assert!(raw.contains("학생"));
        assert!(!raw.contains("\\u"));
    }

    #[tokio::test]
    async fn test_write_manifest_overwrites_previous() {
        let temp_dir = tempdir().unwrap();
        let storage = FileAudioStorage::new(temp_dir.path()).await.unwrap();

        let first = Manifest::from_entries(&assign_filenames(vec![
            "물".to_string(),
            "학생".to_string(),
        ]));
        storage.write_manifest(&first).await.unwrap();

        let second = Manifest::from_entries(&assign_filenames(vec!["고양이".to_string()]));
        storage.write_manifest(&second).await.unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(storage.manifest_path()).await.unwrap())
                .unwrap();
        let object = parsed.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("고양이"));
    }

    #[tokio::test]
    async fn test_new_creates_missing_directory() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("audio").join("tts");

        let storage = FileAudioStorage::new(&nested).await.unwrap();
        assert!(nested.exists());
        assert_eq!(storage.base_dir(), nested.as_path());
    }
}
