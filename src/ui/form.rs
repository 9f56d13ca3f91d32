use chrono::{DateTime, Local};
use log::error;
use std::path::PathBuf;

use crate::api::{generate_document, GenerateError};
use crate::models::{Conf, DocumentRequest};
use super::notifier::Notifier;

/// 表单字段的当前值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub category: String,
    pub source: String,
    pub publish_date: String,
    pub body: String,
}

impl FormState {
    /// 读取一次表单，生成请求
    pub fn to_request(&self) -> DocumentRequest {
        DocumentRequest::new(
            self.title.trim(),
            self.category.trim(),
            self.source.trim(),
            self.publish_date.trim(),
            self.body.trim(),
        )
    }

    pub fn fill(&mut self, request: &DocumentRequest) {
        self.title = request.title.clone();
        self.category = request.category.clone();
        self.source = request.source.clone();
        self.publish_date = request.publish_date.clone();
        self.body = request.body.clone();
    }

    /// 清空全部字段
    pub fn clear(&mut self) {
        *self = FormState::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == FormState::default()
    }
}

/// 文章表单：持有字段值，点击“生成”时执行一次完整的生成流程
pub struct ArticleForm<N: Notifier> {
    pub state: FormState,
    conf: Conf,
    notifier: N,
}

impl<N: Notifier> ArticleForm<N> {
    pub fn new(conf: Conf, notifier: N) -> Self {
        ArticleForm {
            state: FormState::default(),
            conf,
            notifier,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// 以当前时间生成
    pub fn generate(&mut self) -> Option<PathBuf> {
        self.generate_at(&Local::now())
    }

    /// 生成并保存文档
    ///
    /// 成功后清空表单；保存失败时保留已填写的内容
    pub fn generate_at(&mut self, now: &DateTime<Local>) -> Option<PathBuf> {
        let request = self.state.to_request();

        match generate_document(&request, &self.conf, now) {
            Ok(path) => {
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                self.notifier.saved(&file_name);
                self.state.clear();
                Some(path)
            }
            Err(e @ GenerateError::Validation { .. }) => {
                self.notifier.validation_failed(&e.to_string());
                None
            }
            Err(e @ GenerateError::Persistence(_)) => {
                error!("【ArticleForm】{:?}", e);
                self.notifier.save_failed(&e.to_string());
                None
            }
        }
    }
}
