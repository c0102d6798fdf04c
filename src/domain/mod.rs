//! Domain Layer - 领域层
//!
//! 批处理任务的纯领域逻辑，不涉及 I/O：
//! - vocabulary: 词汇文档模型与文本提取
//! - manifest: 文件名分配与查询清单

pub mod manifest;
pub mod vocabulary;

pub use manifest::{
    assign_filenames, audio_filename, Manifest, ManifestEntry, AUDIO_EXT, MANIFEST_FILE,
};
pub use vocabulary::{extract_texts, VocabularyDocument};
