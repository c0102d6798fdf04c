//! Vocatts - 韩语词汇 TTS 批量生成
//!
//! 流程：加载配置 → 读取词汇文档 → 批量合成（并发限流）→ 写清单。
//! 任一环节失败则整个运行以非零退出码终止，不产出清单。

use std::sync::Arc;

use vocatts::application::{BatchConfig, BatchPipeline, TtsEnginePort};
use vocatts::config::{load_config, print_config};
use vocatts::infrastructure::adapters::{FileAudioStorage, HttpTtsClient, HttpTtsClientConfig};
use vocatts::infrastructure::vocab::load_vocabulary;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},vocatts={}", config.log.level, config.log.level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));
    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(env_filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    tracing::info!("Vocatts - 词汇 TTS 批量生成");
    print_config(&config);

    // 读取词汇文档
    let document = load_vocabulary(&config.vocab.path).await?;

    // 创建 HTTP TTS 引擎
    let tts_config = HttpTtsClientConfig {
        base_url: config.tts.url.clone(),
        timeout_secs: config.tts.timeout_secs,
    };
    let tts_engine = Arc::new(HttpTtsClient::new(tts_config)?);

    if !tts_engine.health_check().await {
        tracing::warn!("TTS service health check failed, continuing anyway");
    }

    // 创建文件存储（输出目录不存在则创建）
    let storage = Arc::new(FileAudioStorage::new(&config.storage.audio_dir).await?);

    // 执行批量合成
    let batch_config = BatchConfig {
        voice: config.tts.voice.clone(),
        max_concurrent: config.batch.max_concurrent,
    };
    let pipeline = BatchPipeline::new(batch_config, tts_engine, storage);
    let report = pipeline.run(&document).await?;

    tracing::info!(
        "Done! {} files, {:.1} KB, {:.1}s",
        report.generated,
        report.total_bytes as f64 / 1024.0,
        report.elapsed.as_secs_f64()
    );

    Ok(())
}
