//! Batch Pipeline - 批量合成管线
//!
//! Loader → Extractor → Synthesizer (fan-out) → Manifest writer 的编排。
//! 合成调用在 semaphore 限流下并发分发（协作式，不跨 OS 线程）；
//! 聚合点等待全部任务完成后再传播首个错误，全部成功才写清单。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::application::error::PipelineError;
use crate::application::ports::{AudioStoragePort, SynthesisRequest, TtsEnginePort};
use crate::domain::{assign_filenames, extract_texts, Manifest, ManifestEntry, VocabularyDocument};

/// 批处理配置
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// 音色标识
    pub voice: String,
    /// 最大并发合成数
    pub max_concurrent: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            voice: "ko-KR-SunHiNeural".to_string(),
            max_concurrent: 5,
        }
    }
}

/// 一次成功运行的汇总
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// 生成的音频文件数
    pub generated: usize,
    /// 写入的音频总字节数
    pub total_bytes: u64,
    /// 运行耗时
    pub elapsed: Duration,
}

/// 批量合成管线
///
/// 一次性任务：每次运行完整重建输出目录下的音频与清单。
pub struct BatchPipeline {
    config: BatchConfig,
    tts_engine: Arc<dyn TtsEnginePort>,
    storage: Arc<dyn AudioStoragePort>,
}

impl BatchPipeline {
    pub fn new(
        config: BatchConfig,
        tts_engine: Arc<dyn TtsEnginePort>,
        storage: Arc<dyn AudioStoragePort>,
    ) -> Self {
        Self {
            config,
            tts_engine,
            storage,
        }
    }

    /// 执行批量合成
    ///
    /// 任何一条合成或写入失败都会使整个批次失败，清单不会落盘；
    /// 已分发的任务不会被主动取消，聚合点等它们全部结束。
    pub async fn run(&self, document: &VocabularyDocument) -> Result<BatchReport, PipelineError> {
        let started = Instant::now();

        let texts = extract_texts(document);
        let entries = assign_filenames(texts);
        let total = entries.len();

        tracing::info!(
            total,
            voice = %self.config.voice,
            max_concurrent = self.config.max_concurrent,
            "Generating TTS files"
        );

        // semaphore 限流并发；completed 只用于进度日志
        let semaphore = Semaphore::new(self.config.max_concurrent);
        let completed = AtomicUsize::new(0);

        let jobs = entries
            .iter()
            .map(|entry| self.synthesize_one(entry, total, &semaphore, &completed));

        // 等待所有任务结束后再检查错误，总字节数在聚合点折叠
        let results = futures_util::future::join_all(jobs).await;
        let mut total_bytes = 0u64;
        for result in results {
            total_bytes += result?;
        }

        // 提交点：全部合成成功后才写清单
        let manifest = Manifest::from_entries(&entries);
        let manifest_path = self.storage.write_manifest(&manifest).await?;
        tracing::debug!(path = %manifest_path.display(), entries = manifest.len(), "Manifest written");

        Ok(BatchReport {
            generated: total,
            total_bytes,
            elapsed: started.elapsed(),
        })
    }

    /// 合成单条文本并写入音频文件，返回写入的字节数
    async fn synthesize_one(
        &self,
        entry: &ManifestEntry,
        total: usize,
        semaphore: &Semaphore,
        completed: &AtomicUsize,
    ) -> Result<u64, PipelineError> {
        let _permit = semaphore
            .acquire()
            .await
            .map_err(|e| PipelineError::internal(format!("concurrency gate closed: {}", e)))?;

        let request = SynthesisRequest {
            text: entry.text.clone(),
            voice: self.config.voice.clone(),
        };
        let response = self
            .tts_engine
            .synthesize(request)
            .await
            .map_err(|source| PipelineError::backend(&entry.text, source))?;

        self.storage
            .save_audio(&entry.filename, &response.audio_data)
            .await?;

        let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!("[{}/{}] {} -> \"{}\"", done, total, entry.filename, entry.text);

        Ok(response.audio_data.len() as u64)
    }
}
