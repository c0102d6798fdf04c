//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod vocab;

pub use adapters::{
    FakeTtsClient, FakeTtsClientConfig, FileAudioStorage, HttpTtsClient, HttpTtsClientConfig,
};
pub use vocab::{load_vocabulary, LoadError};
