use serde::{Deserialize, Serialize};

/// 文本片段的字符样式分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleTag {
    /// 数字、英文字母、小数点（西文字体）
    Numeric,
    /// 其余文本，沿用段落的中文字体
    Text,
}

/// 带样式标记的文本片段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledRun {
    pub text: String,
    pub style_tag: StyleTag,
}

impl StyledRun {
    pub fn new(text: &str, style_tag: StyleTag) -> Self {
        StyledRun {
            text: text.to_string(),
            style_tag,
        }
    }

    pub fn numeric(text: &str) -> Self {
        Self::new(text, StyleTag::Numeric)
    }

    pub fn text(text: &str) -> Self {
        Self::new(text, StyleTag::Text)
    }
}

/// 按顺序拼接所有片段的文本
pub fn join_runs(runs: &[StyledRun]) -> String {
    runs.iter().map(|run| run.text.as_str()).collect()
}
