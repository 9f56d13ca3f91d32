use chrono::{DateTime, TimeZone};
use log::{debug, info};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::models::Conf;
use crate::utils::{date_dir_name, timestamp};
use super::docx_adapter::{DocxAdapter, DocxAdapterError, DocxAdapterResult};

/// 输出文件名：`<标题>_<YYYYMMDDHHMMSS>.<扩展名>`
pub fn output_file_name<Tz: TimeZone>(title: &str, extension: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}.{}", title.trim(), timestamp(now), extension)
}

/// 当天的输出目录：`<输出根目录>/<YYYY-MM-DD>`
pub fn output_dir<Tz: TimeZone>(root: &Path, now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    root.join(date_dir_name(now))
}

/// 文件名必须是单独一段路径，不能含分隔符、`..` 或 NUL
pub fn check_file_name(file_name: &str) -> DocxAdapterResult<()> {
    let has_bad_char = file_name.contains(['/', '\\', '\0']);
    let mut components = Path::new(file_name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if has_bad_char || !single_normal {
        return Err(DocxAdapterError::InvalidPath(file_name.to_string()));
    }
    Ok(())
}

/// 保存文档到当天目录，目录不存在时创建
///
/// 标题原样用作文件名，含非法字符时返回错误
pub fn save_to_dated_dir<Tz: TimeZone>(
    adapter: &DocxAdapter,
    title: &str,
    conf: &Conf,
    now: &DateTime<Tz>,
) -> DocxAdapterResult<PathBuf>
where
    Tz::Offset: std::fmt::Display,
{
    let file_name = output_file_name(title, &conf.extension, now);
    check_file_name(&file_name)?;

    let dir = output_dir(&conf.output_root, now);
    fs::create_dir_all(&dir)?;
    debug!("【save_to_dated_dir】输出目录: {}", dir.display());

    let path = dir.join(&file_name);
    adapter.save(&path)?;
    info!("【save_to_dated_dir】文档已保存: {}", path.display());

    Ok(path)
}
