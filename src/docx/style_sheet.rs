//! 公文样式表
//!
//! 标题、副标题（栏目/来源/日期）、正文三种段落样式，以及数字字母所用的字符样式。
//! 所有取值固定，不支持自定义模板。

use serde::{Deserialize, Serialize};
use crate::utils::{convert_cm_to_twip, convert_mm_to_twip, convert_point_to_twip};

/// 样式角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleRole {
    Title,
    Subtitle,
    Content,
    NumericInline,
}

impl StyleRole {
    pub const ALL: [StyleRole; 4] = [
        StyleRole::Title,
        StyleRole::Subtitle,
        StyleRole::Content,
        StyleRole::NumericInline,
    ];

    /// 段落样式还是字符样式
    pub fn is_paragraph(&self) -> bool {
        !matches!(self, StyleRole::NumericInline)
    }
}

/// 单个角色的字体与段落格式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleStyle {
    pub style_id: String,
    pub name: String,
    pub font: String,
    /// 字号（磅），`None` 表示继承
    pub size_pt: Option<f32>,
    /// 固定行距（磅）
    pub line_spacing_pt: Option<f32>,
    /// 段后间距（磅）
    pub space_after_pt: Option<f32>,
    /// 首行缩进的字符数
    pub first_line_indent_chars: Option<u32>,
}

impl RoleStyle {
    fn paragraph(style_id: &str, name: &str, font: &str, size_pt: f32) -> Self {
        RoleStyle {
            style_id: style_id.to_string(),
            name: name.to_string(),
            font: font.to_string(),
            size_pt: Some(size_pt),
            line_spacing_pt: Some(28.0),
            space_after_pt: Some(0.0),
            first_line_indent_chars: None,
        }
    }

    fn character(style_id: &str, name: &str, font: &str) -> Self {
        RoleStyle {
            style_id: style_id.to_string(),
            name: name.to_string(),
            font: font.to_string(),
            size_pt: None,
            line_spacing_pt: None,
            space_after_pt: None,
            first_line_indent_chars: None,
        }
    }

    pub fn line_spacing_twips(&self) -> Option<i32> {
        self.line_spacing_pt.map(convert_point_to_twip)
    }

    pub fn space_after_twips(&self) -> Option<u32> {
        self.space_after_pt.map(|pt| convert_point_to_twip(pt).max(0) as u32)
    }

    /// 首行缩进换算为 twip：字符数 × 字号
    pub fn first_line_indent_twips(&self) -> Option<i32> {
        match (self.first_line_indent_chars, self.size_pt) {
            (Some(chars), Some(size)) => Some(convert_point_to_twip(chars as f32 * size)),
            _ => None,
        }
    }
}

/// 样式表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    pub title: RoleStyle,
    pub subtitle: RoleStyle,
    pub content: RoleStyle,
    pub numeric_inline: RoleStyle,
    /// 百分号字体，不随段落样式变化
    pub percent_font: String,
    /// 页脚页码字体
    pub page_number_font: String,
    /// 页脚页码字号（小五）
    pub page_number_size_pt: f32,
}

impl Default for StyleSheet {
    fn default() -> Self {
        let mut content = RoleStyle::paragraph("CustomContent", "Custom Content", "仿宋_GB2312", 16.0);
        content.first_line_indent_chars = Some(2);

        StyleSheet {
            // 二号
            title: RoleStyle::paragraph("CustomTitle", "Custom Title", "方正小标宋简体", 22.0),
            // 三号
            subtitle: RoleStyle::paragraph("CustomSubtitle", "Custom Subtitle", "黑体", 16.0),
            content,
            numeric_inline: RoleStyle::character(
                "CustomNumberLetter",
                "Custom Number Letter",
                "Times New Roman",
            ),
            percent_font: "仿宋_GB2312".to_string(),
            page_number_font: "Times New Roman".to_string(),
            page_number_size_pt: 9.0,
        }
    }
}

impl StyleSheet {
    pub fn get(&self, role: StyleRole) -> &RoleStyle {
        match role {
            StyleRole::Title => &self.title,
            StyleRole::Subtitle => &self.subtitle,
            StyleRole::Content => &self.content,
            StyleRole::NumericInline => &self.numeric_inline,
        }
    }
}

/// 纸张与页边距
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_top_cm: f32,
    pub margin_bottom_cm: f32,
    pub margin_left_cm: f32,
    pub margin_right_cm: f32,
    pub header_cm: f32,
    pub footer_cm: f32,
}

impl Default for PageSetup {
    fn default() -> Self {
        // A4
        PageSetup {
            width_mm: 210.0,
            height_mm: 297.0,
            margin_top_cm: 3.7,
            margin_bottom_cm: 3.5,
            margin_left_cm: 2.8,
            margin_right_cm: 2.6,
            header_cm: 1.27,
            footer_cm: 1.27,
        }
    }
}

/// 以 twip 表示的页面设置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTwips {
    pub width: u32,
    pub height: u32,
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
    pub header: i32,
    pub footer: i32,
}

impl PageSetup {
    pub fn to_twips(&self) -> PageTwips {
        PageTwips {
            width: convert_mm_to_twip(self.width_mm).max(0) as u32,
            height: convert_mm_to_twip(self.height_mm).max(0) as u32,
            top: convert_cm_to_twip(self.margin_top_cm),
            bottom: convert_cm_to_twip(self.margin_bottom_cm),
            left: convert_cm_to_twip(self.margin_left_cm),
            right: convert_cm_to_twip(self.margin_right_cm),
            header: convert_cm_to_twip(self.header_cm),
            footer: convert_cm_to_twip(self.footer_cm),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_indent_is_two_characters() {
        let sheet = StyleSheet::default();
        assert_eq!(sheet.content.first_line_indent_twips(), Some(640));
        assert_eq!(sheet.title.first_line_indent_twips(), None);
    }

    #[test]
    fn paragraph_roles_use_exact_28pt_leading() {
        let sheet = StyleSheet::default();
        for role in [StyleRole::Title, StyleRole::Subtitle, StyleRole::Content] {
            assert_eq!(sheet.get(role).line_spacing_twips(), Some(560));
            assert_eq!(sheet.get(role).space_after_twips(), Some(0));
        }
        assert_eq!(sheet.numeric_inline.line_spacing_twips(), None);
        assert!(!StyleRole::NumericInline.is_paragraph());
    }

    #[test]
    fn style_ids_are_distinct() {
        let sheet = StyleSheet::default();
        let mut ids: Vec<&str> = StyleRole::ALL
            .iter()
            .map(|role| sheet.get(*role).style_id.as_str())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn a4_page_twips() {
        let page = PageSetup::default().to_twips();
        assert_eq!((page.width, page.height), (11906, 16838));
        assert_eq!((page.top, page.bottom, page.left, page.right), (2098, 1984, 1587, 1474));
    }
}
