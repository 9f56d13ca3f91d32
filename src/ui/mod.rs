//! 表单层
//!
//! 界面状态只在这里维护，排版与保存都是对 `DocumentRequest` 的纯函数调用

pub mod form;
pub mod notifier;
pub mod prompt;

pub use form::{ArticleForm, FormState};
pub use notifier::{ConsoleNotifier, Notifier};
pub use prompt::prompt_form;
