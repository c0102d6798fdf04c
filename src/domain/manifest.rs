//! Manifest - 文件名分配与查询清单
//!
//! 音频文件名是 (排序后的索引, 文本 content hash) 的纯函数：
//! `{4位零填充索引}_{md5前6位hex}.mp3`，既稳定又便于人工排查。
//! 清单是 文本 → 文件名 的有序映射，每次运行整体重新生成。

use serde::Serialize;
use std::collections::BTreeMap;

/// 音频文件扩展名
pub const AUDIO_EXT: &str = "mp3";

/// 清单文件名（位于输出目录下）
pub const MANIFEST_FILE: &str = "manifest.json";

/// 计算音频文件名
///
/// 索引来自排序后文本集合中的位置。注意：集合内容变化时索引会移位，
/// 清单每次运行整体重写，因此这不影响正确性。
pub fn audio_filename(index: usize, text: &str) -> String {
    let digest = md5::compute(text.as_bytes());
    let hash = format!("{:x}", digest);
    format!("{:04}_{}.{}", index, &hash[..6], AUDIO_EXT)
}

/// 清单条目：一条文本及其分配到的文件名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub text: String,
    pub filename: String,
}

/// 为排序后的文本集合分配文件名
pub fn assign_filenames(texts: Vec<String>) -> Vec<ManifestEntry> {
    texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| ManifestEntry {
            filename: audio_filename(index, &text),
            text,
        })
        .collect()
}

/// 查询清单：文本 → 文件名
///
/// BTreeMap 保证序列化时按文本字典序输出。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Manifest(BTreeMap<String, String>);

impl Manifest {
    /// 由完整的条目集合构建清单
    pub fn from_entries(entries: &[ManifestEntry]) -> Self {
        Self(
            entries
                .iter()
                .map(|entry| (entry.text.clone(), entry.filename.clone()))
                .collect(),
        )
    }

    /// 查询某条文本对应的文件名
    pub fn get(&self, text: &str) -> Option<&str> {
        self.0.get(text).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    /// 序列化为 pretty JSON（2 空格缩进）
    ///
    /// serde_json 不会转义非 ASCII 字符，韩文 key 原样保留。
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_filename_known_value() {
        // md5("학생") = 556de60aecb19a6aac292d3e20cf73e1
        assert_eq!(audio_filename(0, "학생"), "0000_556de6.mp3");
        assert_eq!(audio_filename(7, "학생"), "0007_556de6.mp3");
    }

    #[test]
    fn test_audio_filename_is_deterministic() {
        assert_eq!(audio_filename(42, "고양이"), audio_filename(42, "고양이"));
        assert_eq!(audio_filename(3, "고양이"), "0003_af8b4e.mp3");
    }

    #[test]
    fn test_audio_filename_index_padding() {
        assert_eq!(audio_filename(1234, "annyeong"), "1234_48e6ad.mp3");
    }

    #[test]
    fn test_assign_filenames_sequential_indices() {
        let entries = assign_filenames(vec!["물".to_string(), "학생".to_string()]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].text, "물");
        assert_eq!(entries[0].filename, "0000_3558e1.mp3");
        assert_eq!(entries[1].text, "학생");
        assert_eq!(entries[1].filename, "0001_556de6.mp3");
    }

    #[test]
    fn test_manifest_from_entries() {
        let entries = assign_filenames(vec!["물".to_string(), "학생".to_string()]);
        let manifest = Manifest::from_entries(&entries);

        assert_eq!(manifest.len(), 2);
        assert_eq!(manifest.get("물"), Some("0000_3558e1.mp3"));
        assert_eq!(manifest.get("학생"), Some("0001_556de6.mp3"));
        assert_eq!(manifest.get("없음"), None);
    }

    #[test]
    fn test_manifest_pretty_json_preserves_hangul() {
        let entries = assign_filenames(vec!["학생".to_string()]);
        let manifest = Manifest::from_entries(&entries);
        let json = manifest.to_pretty_json().unwrap();

        // 韩文不转义，2 空格缩进
        assert!(json.contains("\"학생\": \"0000_556de6.mp3\""));
        assert!(json.starts_with("{\n  "));
        assert!(!json.contains("\\u"));
    }
}
