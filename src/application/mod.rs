//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TtsEngine、AudioStorage）
//! - pipeline: 批量合成管线编排
//! - error: 应用层错误定义

pub mod error;
pub mod pipeline;
pub mod ports;

// Re-exports
pub use error::PipelineError;
pub use pipeline::{BatchConfig, BatchPipeline, BatchReport};
pub use ports::{
    AudioStorageError, AudioStoragePort, SynthesisRequest, SynthesisResponse, TtsEnginePort,
    TtsError,
};
