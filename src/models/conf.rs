use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::docx::{PageSetup, StyleSheet};

/// 生成配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conf {
    /// 输出根目录，日期子目录建在其下
    pub output_root: PathBuf,
    /// 文件扩展名
    pub extension: String,
    /// 纸张与页边距
    pub page: PageSetup,
    /// 样式表
    pub style_sheet: StyleSheet,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            output_root: PathBuf::from("."),
            extension: "docx".to_string(),
            page: PageSetup::default(),
            style_sheet: StyleSheet::default(),
        }
    }
}

impl Conf {
    pub fn with_output_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.output_root = root.into();
        self
    }
}
