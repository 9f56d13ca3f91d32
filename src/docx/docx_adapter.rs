use docx_rs::*;
use log::debug;
use std::collections::HashMap;
use std::fs::File;
use std::io::{Cursor, Write};
use std::path::Path;
use thiserror::Error;
use super::style_sheet::PageTwips;

/// DOCX适配器错误
#[derive(Error, Debug)]
pub enum DocxAdapterError {
    #[error("IO错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("DOCX打包错误: {0}")]
    PackError(String),

    #[error("无效的文件路径: {0}")]
    InvalidPath(String),
}

/// DOCX适配器结果
pub type DocxAdapterResult<T> = Result<T, DocxAdapterError>;

/// DOCX适配器
///
/// 包装 docx-rs 的 `Docx`，负责样式登记、页面设置、页脚和最终打包
pub struct DocxAdapter {
    docx: Docx,
    styles: HashMap<String, Style>,
    style_order: Vec<String>,
    paragraph_count: usize,
}

impl Default for DocxAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxAdapter {
    /// 创建新的 DOCX 适配器
    pub fn new() -> Self {
        DocxAdapter {
            docx: Docx::new(),
            styles: HashMap::new(),
            style_order: Vec::new(),
            paragraph_count: 0,
        }
    }

    /// 登记样式，同名样式已存在时直接返回已有的
    ///
    /// 返回值的第二项表示本次是否新建
    pub fn register_style<F>(&mut self, style_id: &str, build: F) -> (&Style, bool)
    where
        F: FnOnce() -> Style,
    {
        let created = !self.styles.contains_key(style_id);
        if created {
            debug!("【DocxAdapter】登记样式: {}", style_id);
            self.styles.insert(style_id.to_string(), build());
            self.style_order.push(style_id.to_string());
        }
        (&self.styles[style_id], created)
    }

    /// 是否已登记某样式
    pub fn has_style(&self, style_id: &str) -> bool {
        self.styles.contains_key(style_id)
    }

    /// 已登记样式数量
    pub fn style_count(&self) -> usize {
        self.style_order.len()
    }

    /// 设置纸张大小和页边距
    pub fn set_page_properties(&mut self, page: &PageTwips) {
        let docx = std::mem::replace(&mut self.docx, Docx::new());
        self.docx = docx
            .page_size(page.width, page.height)
            .page_margin(
                PageMargin::new()
                    .top(page.top)
                    .right(page.right)
                    .bottom(page.bottom)
                    .left(page.left)
                    .header(page.header)
                    .footer(page.footer),
            );
    }

    /// 设置页脚
    pub fn set_footer(&mut self, footer: Footer) {
        let docx = std::mem::replace(&mut self.docx, Docx::new());
        self.docx = docx.footer(footer);
    }

    /// 添加段落
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        let docx = std::mem::replace(&mut self.docx, Docx::new());
        self.docx = docx.add_paragraph(paragraph);
        self.paragraph_count += 1;
    }

    /// 已添加的正文段落数量
    pub fn paragraph_count(&self) -> usize {
        self.paragraph_count
    }

    /// 生成包含全部样式的 docx-rs 文档
    fn finish(&self) -> Docx {
        let mut docx = self.docx.clone();
        for style_id in &self.style_order {
            docx = docx.add_style(self.styles[style_id].clone());
        }
        docx
    }

    /// 打包为写入器
    pub fn pack<W: Write + std::io::Seek>(&self, writer: W) -> DocxAdapterResult<()> {
        self.finish()
            .build()
            .pack(writer)
            .map_err(|e| DocxAdapterError::PackError(e.to_string()))
    }

    /// 打包为字节
    pub fn to_bytes(&self) -> DocxAdapterResult<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        self.pack(&mut cursor)?;
        Ok(cursor.into_inner())
    }

    /// 获取 Base64 编码的文档
    pub fn to_base64(&self) -> DocxAdapterResult<String> {
        Ok(base64::encode(self.to_bytes()?))
    }

    /// 保存文档
    pub fn save(&self, filepath: &Path) -> DocxAdapterResult<()> {
        let bytes = self.to_bytes()?;
        let mut file = File::create(filepath)?;
        file.write_all(&bytes)?;
        file.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_style_is_idempotent() {
        let mut adapter = DocxAdapter::new();
        let (_, created) = adapter.register_style("CustomTitle", || {
            Style::new("CustomTitle", StyleType::Paragraph).name("Custom Title")
        });
        assert!(created);

        let mut rebuilt = false;
        let (_, created) = adapter.register_style("CustomTitle", || {
            rebuilt = true;
            Style::new("CustomTitle", StyleType::Paragraph)
        });
        assert!(!created);
        assert!(!rebuilt);
        assert_eq!(adapter.style_count(), 1);
        assert!(adapter.has_style("CustomTitle"));
    }

    #[test]
    fn packs_to_zip_bytes() {
        let mut adapter = DocxAdapter::new();
        adapter.add_paragraph(Paragraph::new().add_run(Run::new().add_text("hello")));
        let bytes = adapter.to_bytes().unwrap();
        // ZIP 本地文件头
        assert_eq!(&bytes[..2], b"PK");
        assert_eq!(adapter.paragraph_count(), 1);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = DocxAdapter::new();
        let result = adapter.save(&dir.path().join("missing").join("a.docx"));
        assert!(matches!(result, Err(DocxAdapterError::IoError(_))));
    }
}
