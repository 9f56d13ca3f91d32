//! 生成入口
//!
//! 与界面无关的纯数据接口：校验、排版、保存

use chrono::{DateTime, TimeZone};
use log::{error, warn};
use std::path::PathBuf;
use thiserror::Error;

use crate::docx::{assemble_article, save_to_dated_dir, DocxAdapterError};
use crate::models::{Conf, DocumentRequest};

/// 生成错误
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("请填写所有字段（缺少: {}）", .missing.join(", "))]
    Validation { missing: Vec<&'static str> },

    #[error("保存文档时出错: {0}")]
    Persistence(#[from] DocxAdapterError),
}

impl GenerateError {
    pub fn is_validation(&self) -> bool {
        matches!(self, GenerateError::Validation { .. })
    }
}

pub type GenerateResult<T> = Result<T, GenerateError>;

/// 校验请求，任一字段为空即返回错误
pub fn validate(request: &DocumentRequest) -> GenerateResult<()> {
    let missing = request.missing_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        warn!("【validate】缺少字段: {:?}", missing);
        Err(GenerateError::Validation { missing })
    }
}

/// 生成文档并保存到当天目录，返回文件路径
pub fn generate_document<Tz: TimeZone>(
    request: &DocumentRequest,
    conf: &Conf,
    now: &DateTime<Tz>,
) -> GenerateResult<PathBuf>
where
    Tz::Offset: std::fmt::Display,
{
    validate(request)?;
    let adapter = assemble_article(request, conf);
    save_to_dated_dir(&adapter, &request.title, conf, now).map_err(|e| {
        error!("【generate_document】保存失败: {:?}", e);
        GenerateError::from(e)
    })
}

/// 生成文档的 Base64 编码，不写文件
pub fn export_to_base64(request: &DocumentRequest, conf: &Conf) -> GenerateResult<String> {
    validate(request)?;
    let adapter = assemble_article(request, conf);
    Ok(adapter.to_base64()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_lists_missing_fields() {
        let request = DocumentRequest::new("标题", "", "来源", "", "正文");
        let err = validate(&request).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "请填写所有字段（缺少: category, publish_date）");
    }

    #[test]
    fn base64_export_skips_filesystem() {
        let request = DocumentRequest::new("标题", "栏目", "来源", "2024-01-01", "正文");
        let encoded = export_to_base64(&request, &Conf::default()).unwrap();
        let bytes = base64::decode(encoded).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
