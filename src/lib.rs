pub mod models;
pub mod utils;
pub mod parser;
pub mod docx;
pub mod api;
pub mod ui;

pub use models::{
    StyledRun,
    StyleTag,
    DocumentRequest,
    Conf
};

pub use parser::tokenize;

pub use docx::{
    DocxAdapter,
    DocxAdapterError,
    PageSetup,
    StyleRole,
    StyleSheet,
    assemble_article
};

pub use api::{
    GenerateError,
    GenerateResult,
    validate,
    generate_document,
    export_to_base64
};

pub use ui::{
    ArticleForm,
    FormState,
    Notifier,
    ConsoleNotifier,
    prompt_form
};

/// 排版文章并返回 docx 字节
///
/// # Arguments
///
/// * `request` - 表单内容
/// * `conf` - 配置对象
///
/// # Returns
///
/// 校验失败或打包失败时返回错误
pub fn render(request: &DocumentRequest, conf: &Conf) -> GenerateResult<Vec<u8>> {
    validate(request)?;
    Ok(assemble_article(request, conf).to_bytes()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let request = DocumentRequest::new("标题", "栏目", "来源", "2024-01-01", "正文 100%");
        let bytes = render(&request, &Conf::default()).unwrap();
        assert!(!bytes.is_empty());
    }
}
