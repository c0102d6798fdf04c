//! Vocatts - 韩语学习应用的 TTS 资源批量生成器
//!
//! 一次性的离线构建工具：从词汇 JSON 文档中提取所有唯一的韩文文本，
//! 逐条调用外部语音合成服务生成音频文件，并输出 文本 → 文件名 的
//! 查询清单（manifest.json）。
//!
//! 领域层 (domain/):
//! - vocabulary: 词汇文档模型与文本提取
//! - manifest: 文件名分配与查询清单
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TtsEngine, AudioStorage）
//! - Pipeline: 批量合成管线（semaphore 限流 fan-out，全成功才提交清单）
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: HTTP TTS Client, Fake TTS Client, File Storage
//! - Vocab: 词汇 JSON 文档加载

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
