use std::io::{self, BufRead, Write};

use super::form::FormState;

/// 正文输入结束标记
pub const BODY_TERMINATOR: &str = ".";

fn read_field<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> io::Result<String> {
    write!(output, "{}: ", label)?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// 在终端依次询问五个字段
///
/// 正文可以有多行，以单独一行 `.` 或输入结束为止
pub fn prompt_form<R: BufRead, W: Write>(input: &mut R, output: &mut W, state: &mut FormState) -> io::Result<()> {
    state.title = read_field(input, output, "标题")?;
    state.category = read_field(input, output, "栏目")?;
    state.source = read_field(input, output, "来源")?;
    state.publish_date = read_field(input, output, "发布日期")?;

    writeln!(output, "正文（单独一行 {} 结束）:", BODY_TERMINATOR)?;
    output.flush()?;

    let mut body = Vec::new();
    for line in input.lines() {
        let line = line?;
        if line.trim() == BODY_TERMINATOR {
            break;
        }
        body.push(line);
    }
    state.body = body.join("\n");

    Ok(())
}
