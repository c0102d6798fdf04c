//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 词汇文档配置
    #[serde(default)]
    pub vocab: VocabConfig,

    /// TTS 引擎配置
    #[serde(default)]
    pub tts: TtsConfig,

    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,

    /// 批处理配置
    #[serde(default)]
    pub batch: BatchSettings,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            vocab: VocabConfig::default(),
            tts: TtsConfig::default(),
            storage: StorageConfig::default(),
            batch: BatchSettings::default(),
            log: LogConfig::default(),
        }
    }
}

/// 词汇文档配置
#[derive(Debug, Clone, Deserialize)]
pub struct VocabConfig {
    /// 词汇 JSON 文档路径
    #[serde(default = "default_vocab_path")]
    pub path: PathBuf,
}

fn default_vocab_path() -> PathBuf {
    PathBuf::from("data/vocab.json")
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            path: default_vocab_path(),
        }
    }
}

/// TTS 引擎配置
#[derive(Debug, Clone, Deserialize)]
pub struct TtsConfig {
    /// TTS 服务基础 URL
    #[serde(default = "default_tts_url")]
    pub url: String,

    /// 音色标识
    #[serde(default = "default_voice")]
    pub voice: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_tts_timeout")]
    pub timeout_secs: u64,
}

fn default_tts_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_voice() -> String {
    "ko-KR-SunHiNeural".to_string()
}

fn default_tts_timeout() -> u64 {
    120
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            url: default_tts_url(),
            voice: default_voice(),
            timeout_secs: default_tts_timeout(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// 音频输出目录（音频文件和 manifest.json 都写到这里）
    #[serde(default = "default_audio_dir")]
    pub audio_dir: PathBuf,
}

fn default_audio_dir() -> PathBuf {
    PathBuf::from("audio/tts")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            audio_dir: default_audio_dir(),
        }
    }
}

/// 批处理配置
#[derive(Debug, Clone, Deserialize)]
pub struct BatchSettings {
    /// 最大并发合成数（TTS 后端限流）
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent: usize,
}

fn default_max_concurrent() -> usize {
    5
}

impl Default for BatchSettings {
    fn default() -> Self {
        Self {
            max_concurrent: default_max_concurrent(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.vocab.path, PathBuf::from("data/vocab.json"));
        assert_eq!(config.tts.url, "http://localhost:8000");
        assert_eq!(config.tts.voice, "ko-KR-SunHiNeural");
        assert_eq!(config.storage.audio_dir, PathBuf::from("audio/tts"));
        assert_eq!(config.batch.max_concurrent, 5);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [tts]
            voice = "ko-KR-InJoonNeural"
            "#,
        )
        .unwrap();

        assert_eq!(config.tts.voice, "ko-KR-InJoonNeural");
        assert_eq!(config.tts.url, "http://localhost:8000");
        assert_eq!(config.batch.max_concurrent, 5);
    }
}
