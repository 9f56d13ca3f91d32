use serde::{Deserialize, Serialize};

/// 一次生成操作所需的全部表单内容
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRequest {
    pub title: String,
    pub category: String,
    pub source: String,
    pub publish_date: String,
    pub body: String,
}

impl DocumentRequest {
    pub fn new(
        title: &str,
        category: &str,
        source: &str,
        publish_date: &str,
        body: &str,
    ) -> Self {
        DocumentRequest {
            title: title.to_string(),
            category: category.to_string(),
            source: source.to_string(),
            publish_date: publish_date.to_string(),
            body: body.to_string(),
        }
    }

    /// 返回为空的字段名（去除首尾空白后判断）
    ///
    /// 顺序与表单中字段的顺序一致
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("category", &self.category),
            ("source", &self.source),
            ("publish_date", &self.publish_date),
            ("body", &self.body),
        ]
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// 正文中需要输出的段落：按行切分、去除首尾空白、忽略空行
    pub fn body_paragraphs(&self) -> Vec<&str> {
        self.body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}
