//! Vocabulary Document - 词汇文档模型与文本提取
//!
//! 词汇 JSON 文档的类型化模型。文档由外部维护，这里只读取约定好的
//! 字段；所有小节和字段都是可选的，缺失时静默跳过（不是错误）。

use serde::Deserialize;
use std::collections::BTreeSet;

/// 词汇文档
///
/// 顶层小节：action / describe / flashcards / intro。
/// 未知字段会被忽略，以兼容文档 schema 的演进。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VocabularyDocument {
    /// 动作句型数据
    #[serde(default)]
    pub action: ActionSection,

    /// 描述句型数据
    #[serde(default)]
    pub describe: DescribeSection,

    /// 闪卡扩展词汇
    #[serde(default)]
    pub flashcards: FlashcardSection,

    /// 自我介绍句型数据
    #[serde(default)]
    pub intro: IntroSection,
}

/// 动作句型小节
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionSection {
    #[serde(default)]
    pub subjects: Vec<WordEntry>,

    #[serde(default)]
    pub times: Vec<WordEntry>,

    #[serde(default)]
    pub places: Vec<PlaceEntry>,

    #[serde(default)]
    pub objects: Vec<WordEntry>,

    #[serde(default)]
    pub verbs: Vec<VerbEntry>,
}

/// 描述句型小节
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DescribeSection {
    #[serde(default)]
    pub subjects: Vec<WordEntry>,

    #[serde(default)]
    pub adjectives: Vec<WordEntry>,

    #[serde(default)]
    pub adverbs: Vec<WordEntry>,
}

/// 闪卡小节
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlashcardSection {
    #[serde(default)]
    pub categories: Vec<FlashcardCategory>,
}

/// 闪卡分类
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlashcardCategory {
    #[serde(default)]
    pub cards: Vec<WordEntry>,
}

/// 自我介绍小节
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntroSection {
    #[serde(default)]
    pub topics: Vec<WordEntry>,

    #[serde(default)]
    pub nouns: Vec<WordEntry>,
}

/// 通用词条：只关心韩文字段 `kr`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WordEntry {
    /// 韩文文本
    pub kr: Option<String>,
}

/// 地点词条
///
/// 除基本形之外还可携带助词变形（에 / 에서），变形各自有独立的 `kr`。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceEntry {
    pub kr: Option<String>,

    /// 「~에」变形
    #[serde(rename = "formE")]
    pub form_e: Option<WordEntry>,

    /// 「~에서」变形
    #[serde(rename = "formEseo")]
    pub form_eseo: Option<WordEntry>,
}

/// 动词词条：三个时态各自是一条可朗读文本
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerbEntry {
    pub past: Option<String>,
    pub present: Option<String>,
    pub future: Option<String>,
}

/// 从词汇文档中提取所有唯一的韩文文本
///
/// 遍历固定的小节/字段集合，去重、丢弃空串，按字典序返回。
/// 排序保证下游的文件名索引是确定性的。
pub fn extract_texts(document: &VocabularyDocument) -> Vec<String> {
    let mut texts = BTreeSet::new();

    {
        let mut add = |value: Option<&str>| {
            if let Some(text) = value {
                if !text.is_empty() {
                    texts.insert(text.to_string());
                }
            }
        };

        let action = &document.action;
        for entry in &action.subjects {
            add(entry.kr.as_deref());
        }
        for entry in &action.times {
            add(entry.kr.as_deref());
        }
        for place in &action.places {
            add(place.kr.as_deref());
            if let Some(form) = &place.form_e {
                add(form.kr.as_deref());
            }
            if let Some(form) = &place.form_eseo {
                add(form.kr.as_deref());
            }
        }
        for entry in &action.objects {
            add(entry.kr.as_deref());
        }
        for verb in &action.verbs {
            add(verb.past.as_deref());
            add(verb.present.as_deref());
            add(verb.future.as_deref());
        }

        let describe = &document.describe;
        for entry in &describe.subjects {
            add(entry.kr.as_deref());
        }
        for entry in &describe.adjectives {
            add(entry.kr.as_deref());
        }
        for entry in &describe.adverbs {
            add(entry.kr.as_deref());
        }

        for category in &document.flashcards.categories {
            for card in &category.cards {
                add(card.kr.as_deref());
            }
        }

        let intro = &document.intro;
        for entry in &intro.topics {
            add(entry.kr.as_deref());
        }
        for entry in &intro.nouns {
            add(entry.kr.as_deref());
        }
    }

    texts.into_iter().collect()
}
