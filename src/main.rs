use article_docx::{
    export_to_base64, prompt_form, ArticleForm, Conf, ConsoleNotifier, DocumentRequest, FormState,
};
use clap::Parser;
use log::{debug, error};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// 公文格式文章生成器
#[derive(Parser, Debug)]
#[command(name = "article-docx", version, about = "生成公文格式的 docx 文章")]
struct Cli {
    /// 标题
    #[arg(long)]
    title: Option<String>,

    /// 栏目
    #[arg(long)]
    category: Option<String>,

    /// 来源
    #[arg(long)]
    source: Option<String>,

    /// 发布日期
    #[arg(long)]
    date: Option<String>,

    /// 正文
    #[arg(long, conflicts_with = "body_file")]
    body: Option<String>,

    /// 从文件读取正文
    #[arg(long)]
    body_file: Option<PathBuf>,

    /// 从 JSON 文件读取全部字段，命令行参数优先
    #[arg(long)]
    request: Option<PathBuf>,

    /// 输出根目录，日期子目录建在其下
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// 输出 Base64 编码的文档到标准输出，不写文件
    #[arg(long)]
    base64: bool,

    /// 日志详细程度（-v, -vv）
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn has_field_source(&self) -> bool {
        self.request.is_some()
            || self.title.is_some()
            || self.category.is_some()
            || self.source.is_some()
            || self.date.is_some()
            || self.body.is_some()
            || self.body_file.is_some()
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// 按 JSON 文件 → 命令行参数的顺序填充表单
fn fill_form(cli: &Cli, state: &mut FormState) -> Result<(), String> {
    if let Some(path) = &cli.request {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("读取请求文件失败 {}: {}", path.display(), e))?;
        let request: DocumentRequest = serde_json::from_str(&text)
            .map_err(|e| format!("解析请求文件失败 {}: {}", path.display(), e))?;
        state.fill(&request);
    }

    if let Some(title) = &cli.title {
        state.title = title.clone();
    }
    if let Some(category) = &cli.category {
        state.category = category.clone();
    }
    if let Some(source) = &cli.source {
        state.source = source.clone();
    }
    if let Some(date) = &cli.date {
        state.publish_date = date.clone();
    }
    if let Some(body) = &cli.body {
        state.body = body.clone();
    }
    if let Some(path) = &cli.body_file {
        state.body = fs::read_to_string(path)
            .map_err(|e| format!("读取正文文件失败 {}: {}", path.display(), e))?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("命令行参数: {:?}", cli);

    let conf = Conf::default().with_output_root(&cli.output_dir);
    let mut form = ArticleForm::new(conf.clone(), ConsoleNotifier);

    let filled = if cli.has_field_source() {
        fill_form(&cli, &mut form.state)
    } else {
        let stdin = io::stdin();
        prompt_form(&mut stdin.lock(), &mut io::stdout(), &mut form.state)
            .map_err(|e| format!("读取输入失败: {}", e))
    };

    if let Err(message) = filled {
        error!("{}", message);
        eprintln!("错误: {}", message);
        return ExitCode::FAILURE;
    }

    if cli.base64 {
        return match export_to_base64(&form.state.to_request(), &conf) {
            Ok(encoded) => {
                println!("{}", encoded);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("错误: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    match form.generate() {
        Some(_) => ExitCode::SUCCESS,
        None => ExitCode::FAILURE,
    }
}
