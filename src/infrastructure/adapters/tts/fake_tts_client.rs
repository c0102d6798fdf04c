//! Fake TTS Client - 用于测试的 TTS 客户端
//!
//! 不实际调用 TTS 服务：按 (音色, 文本) 确定性地生成字节，
//! 可注入指定文本的失败，并记录观测到的峰值并发数。

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{SynthesisRequest, SynthesisResponse, TtsEnginePort, TtsError};

/// Fake TTS Client 配置
#[derive(Debug, Clone, Default)]
pub struct FakeTtsClientConfig {
    /// 模拟的合成延迟（毫秒），0 表示立即返回
    pub latency_ms: u64,
    /// 合成这些文本时返回错误
    pub failing_texts: HashSet<String>,
}

impl FakeTtsClientConfig {
    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn with_failing_text(mut self, text: impl Into<String>) -> Self {
        self.failing_texts.insert(text.into());
        self
    }
}

/// Fake TTS Client
///
/// 用于测试：输出字节是 (音色, 文本) 的纯函数
pub struct FakeTtsClient {
    config: FakeTtsClientConfig,
    /// 当前在途调用数
    in_flight: AtomicUsize,
    /// 观测到的峰值并发数
    peak: AtomicUsize,
}

impl FakeTtsClient {
    pub fn new(config: FakeTtsClientConfig) -> Self {
        Self {
            config,
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    /// 观测到的峰值并发调用数
    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, TtsError> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(current, Ordering::SeqCst);

        if self.config.latency_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.config.latency_ms)).await;
        }

        let result = if self.config.failing_texts.contains(&request.text) {
            Err(TtsError::ServiceError(format!(
                "injected failure for \"{}\"",
                request.text
            )))
        } else {
            Ok(SynthesisResponse {
                audio_data: format!("FAKE-MP3:{}:{}", request.voice, request.text).into_bytes(),
            })
        };

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_output_is_deterministic() {
        let client = FakeTtsClient::new(FakeTtsClientConfig::default());
        let request = SynthesisRequest {
            text: "학생".to_string(),
            voice: "ko-KR-SunHiNeural".to_string(),
        };

        let first = client.synthesize(request.clone()).await.unwrap();
        let second = client.synthesize(request).await.unwrap();
        assert_eq!(first.audio_data, second.audio_data);
        assert!(!first.audio_data.is_empty());
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let client =
            FakeTtsClient::new(FakeTtsClientConfig::default().with_failing_text("고양이"));

        let ok = client
            .synthesize(SynthesisRequest {
                text: "학생".to_string(),
                voice: "v".to_string(),
            })
            .await;
        assert!(ok.is_ok());

        let err = client
            .synthesize(SynthesisRequest {
                text: "고양이".to_string(),
                voice: "v".to_string(),
            })
            .await;
        assert!(matches!(err, Err(TtsError::ServiceError(_))));
    }
}
