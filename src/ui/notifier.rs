use log::{error, info, warn};

/// 用户通知
///
/// 只有三类：字段缺失、保存失败、保存成功
pub trait Notifier {
    fn validation_failed(&mut self, message: &str);
    fn save_failed(&mut self, message: &str);
    fn saved(&mut self, file_name: &str);
}

/// 终端通知，信息打印到标准输出 / 标准错误
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn validation_failed(&mut self, message: &str) {
        warn!("【通知】{}", message);
        eprintln!("错误: {}", message);
    }

    fn save_failed(&mut self, message: &str) {
        error!("【通知】{}", message);
        eprintln!("错误: {}", message);
    }

    fn saved(&mut self, file_name: &str) {
        info!("【通知】已保存 {}", file_name);
        println!("成功: 文档已保存为 {}", file_name);
    }
}
