//! Vocabulary Adapter - 词汇文档读取

mod json_loader;

pub use json_loader::{load_vocabulary, LoadError};
