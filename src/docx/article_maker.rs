//! 文章排版
//!
//! 按固定顺序生成文档：页面设置、样式登记、页脚页码、标题、
//! 栏目/来源/发布日期、空行、正文段落。

use docx_rs::{
    AlignmentType, FieldCharType, Footer, InstrPAGE, InstrText, LineSpacing, LineSpacingType,
    Paragraph, ParagraphProperty, Run, RunFonts, RunProperty, SpecialIndentType, Style, StyleType,
};
use log::{debug, info};

use crate::models::{Conf, DocumentRequest, StyleTag, StyledRun};
use crate::parser::tokenize;
use crate::utils::convert_point_to_half_point;
use super::docx_adapter::DocxAdapter;
use super::style_sheet::{RoleStyle, StyleRole, StyleSheet};

/// 元数据行的固定前缀
pub const CATEGORY_LABEL: &str = "栏目";
pub const SOURCE_LABEL: &str = "来源";
pub const PUBLISH_DATE_LABEL: &str = "发布日期";

/// 四种字体槽位都使用同一字体
fn all_slots(font: &str) -> RunFonts {
    RunFonts::new().ascii(font).hi_ansi(font).east_asia(font)
}

fn line_spacing(role: &RoleStyle) -> Option<LineSpacing> {
    let line = role.line_spacing_twips()?;
    let mut spacing = LineSpacing::new()
        .line(line)
        .line_rule(LineSpacingType::Exact);
    if let Some(after) = role.space_after_twips() {
        spacing = spacing.after(after);
    }
    Some(spacing)
}

/// 根据角色构建 docx-rs 样式
pub fn build_style(role: StyleRole, sheet: &StyleSheet) -> Style {
    let role_style = sheet.get(role);

    if !role.is_paragraph() {
        // 只替换西文字体，中文仍用段落字体
        let mut style = Style::new(&role_style.style_id, StyleType::Character).name(&role_style.name);
        style.run_property = RunProperty::new().fonts(
            RunFonts::new()
                .ascii(&role_style.font)
                .hi_ansi(&role_style.font),
        );
        return style;
    }

    let mut style = Style::new(&role_style.style_id, StyleType::Paragraph)
        .name(&role_style.name)
        .based_on("Normal");

    let mut run_property = RunProperty::new().fonts(all_slots(&role_style.font));
    if let Some(size) = role_style.size_pt {
        run_property = run_property.size(convert_point_to_half_point(size));
    }
    style.run_property = run_property;

    let mut paragraph_property = ParagraphProperty::new();
    if let Some(spacing) = line_spacing(role_style) {
        paragraph_property = paragraph_property.line_spacing(spacing);
    }
    if let Some(indent) = role_style.first_line_indent_twips() {
        paragraph_property =
            paragraph_property.indent(None, Some(SpecialIndentType::FirstLine(indent)), None, None);
    }
    style.paragraph_property = paragraph_property;

    style
}

/// 登记全部样式，已存在的不重复创建
pub fn register_styles(adapter: &mut DocxAdapter, sheet: &StyleSheet) {
    for role in StyleRole::ALL {
        let style_id = sheet.get(role).style_id.clone();
        adapter.register_style(&style_id, || build_style(role, sheet));
    }
}

/// 页脚：居中的 PAGE 域
pub fn page_number_footer(sheet: &StyleSheet) -> Footer {
    let run = Run::new()
        .add_field_char(FieldCharType::Begin, false)
        .add_instr_text(InstrText::PAGE(InstrPAGE::new()))
        .add_field_char(FieldCharType::End, false)
        .size(convert_point_to_half_point(sheet.page_number_size_pt))
        .fonts(all_slots(&sheet.page_number_font));

    Footer::new().add_paragraph(Paragraph::new().align(AlignmentType::Center).add_run(run))
}

/// 单个片段转换为 docx-rs 的运行
///
/// 数字字母使用字符样式；百分号固定用正文仿宋；其余文本显式指定段落字体
pub fn styled_run_to_docx(run: &StyledRun, paragraph_role: &RoleStyle, sheet: &StyleSheet) -> Run {
    let docx_run = Run::new().add_text(&run.text);
    match run.style_tag {
        StyleTag::Numeric => docx_run.style(&sheet.numeric_inline.style_id),
        StyleTag::Text if run.text == "%" => docx_run.fonts(all_slots(&sheet.percent_font)),
        StyleTag::Text => docx_run.fonts(all_slots(&paragraph_role.font)),
    }
}

/// 生成一个带格式的段落
pub fn formatted_paragraph(text: &str, role: StyleRole, sheet: &StyleSheet, center: bool) -> Paragraph {
    let role_style = sheet.get(role);
    let mut paragraph = Paragraph::new().style(&role_style.style_id);

    if center {
        paragraph = paragraph.align(AlignmentType::Center);
    }

    // 样式中的行距同时写到段落上
    if let Some(spacing) = line_spacing(role_style) {
        paragraph = paragraph.line_spacing(spacing);
    }

    for run in tokenize(text) {
        paragraph = paragraph.add_run(styled_run_to_docx(&run, role_style, sheet));
    }

    paragraph
}

/// 空行段落
pub fn spacer_paragraph(role: StyleRole, sheet: &StyleSheet) -> Paragraph {
    let role_style = sheet.get(role);
    let mut paragraph = Paragraph::new().style(&role_style.style_id);
    if let Some(spacing) = line_spacing(role_style) {
        paragraph = paragraph.line_spacing(spacing);
    }
    paragraph
}

/// 元数据行文本，例如 `栏目: 要闻`
pub fn metadata_lines(request: &DocumentRequest) -> [String; 3] {
    [
        format!("{}: {}", CATEGORY_LABEL, request.category.trim()),
        format!("{}: {}", SOURCE_LABEL, request.source.trim()),
        format!("{}: {}", PUBLISH_DATE_LABEL, request.publish_date.trim()),
    ]
}

/// 按固定模板排版整篇文章
pub fn assemble_article(request: &DocumentRequest, conf: &Conf) -> DocxAdapter {
    let sheet = &conf.style_sheet;
    let mut adapter = DocxAdapter::new();

    adapter.set_page_properties(&conf.page.to_twips());
    register_styles(&mut adapter, sheet);
    adapter.set_footer(page_number_footer(sheet));

    adapter.add_paragraph(formatted_paragraph(request.title.trim(), StyleRole::Title, sheet, true));

    for line in metadata_lines(request) {
        adapter.add_paragraph(formatted_paragraph(&line, StyleRole::Subtitle, sheet, false));
    }

    adapter.add_paragraph(spacer_paragraph(StyleRole::Subtitle, sheet));

    let body = request.body_paragraphs();
    debug!("【assemble_article】正文段落数: {}", body.len());
    for line in body {
        adapter.add_paragraph(formatted_paragraph(line, StyleRole::Content, sheet, false));
    }

    info!(
        "【assemble_article】排版完成: {}，共 {} 个段落",
        request.title.trim(),
        adapter.paragraph_count()
    );
    adapter
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> DocumentRequest {
        DocumentRequest::new(
            "2024年GDP增长5.2%",
            "要闻",
            "国家统计局",
            "2024-01-17",
            "初步核算，全年国内生产总值1260582亿元。\n\n   \n按不变价格计算，比上年增长5.2%。\n",
        )
    }

    #[test]
    fn layout_has_title_metadata_spacer_and_body() {
        let adapter = assemble_article(&sample_request(), &Conf::default());
        // 标题 + 3 行元数据 + 空行 + 2 段正文
        assert_eq!(adapter.paragraph_count(), 7);
        assert_eq!(adapter.style_count(), 4);
    }

    #[test]
    fn register_styles_twice_keeps_four() {
        let sheet = StyleSheet::default();
        let mut adapter = DocxAdapter::new();
        register_styles(&mut adapter, &sheet);
        register_styles(&mut adapter, &sheet);
        assert_eq!(adapter.style_count(), 4);
        for role in StyleRole::ALL {
            assert!(adapter.has_style(&sheet.get(role).style_id));
        }
    }

    #[test]
    fn metadata_lines_carry_labels() {
        let lines = metadata_lines(&sample_request());
        assert_eq!(lines[0], "栏目: 要闻");
        assert_eq!(lines[1], "来源: 国家统计局");
        assert_eq!(lines[2], "发布日期: 2024-01-17");
    }

    #[test]
    fn assembled_article_packs() {
        let adapter = assemble_article(&sample_request(), &Conf::default());
        let bytes = adapter.to_bytes().unwrap();
        assert!(!bytes.is_empty());
    }
}
