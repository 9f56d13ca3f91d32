use lazy_static::lazy_static;
use regex::Regex;
use crate::models::{StyledRun, StyleTag};

lazy_static! {
    // 数字（可带一个小数点和百分号）、单独的小数点、百分号、英文字母串
    static ref TOKEN_RE: Regex = Regex::new(r"\d+\.?\d*%?|\.|%|[a-zA-Z]+").unwrap();
    static ref NUMBER_RE: Regex = Regex::new(r"^[\d.]+$").unwrap();
    static ref LETTERS_RE: Regex = Regex::new(r"^[a-zA-Z]+$").unwrap();
}

/// 按匹配规则切分一行文本，匹配部分与匹配之间的原文都保留，顺序不变
///
/// 空片段会被丢弃
pub fn split_segments(line: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in TOKEN_RE.find_iter(line) {
        if m.start() > last {
            segments.push(&line[last..m.start()]);
        }
        segments.push(m.as_str());
        last = m.end();
    }

    if last < line.len() {
        segments.push(&line[last..]);
    }

    segments
}

/// 判断单个片段是否使用西文字体
pub fn classify(segment: &str) -> StyleTag {
    if segment == "." || NUMBER_RE.is_match(segment) || LETTERS_RE.is_match(segment) {
        StyleTag::Numeric
    } else {
        StyleTag::Text
    }
}

/// 把一行文本切分为带样式的片段
///
/// 百分号单独成段并保持中文字体，两侧的数字使用西文字体。
/// 空白片段作为 `Text` 保留，拼接所有片段即得到原文。
pub fn tokenize(line: &str) -> Vec<StyledRun> {
    let mut runs = Vec::new();

    for segment in split_segments(line) {
        if segment.contains('%') {
            let mut parts = segment.split('%').peekable();
            while let Some(part) = parts.next() {
                if !part.is_empty() {
                    runs.push(StyledRun::numeric(part));
                }
                if parts.peek().is_some() {
                    runs.push(StyledRun::text("%"));
                }
            }
            continue;
        }

        runs.push(StyledRun::new(segment, classify(segment)));
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::join_runs;

    #[test]
    fn percent_keeps_body_font() {
        assert_eq!(
            tokenize("45.6%增长"),
            vec![
                StyledRun::numeric("45.6"),
                StyledRun::text("%"),
                StyledRun::text("增长"),
            ]
        );
    }

    #[test]
    fn latin_letters_are_numeric() {
        assert_eq!(tokenize("ABC"), vec![StyledRun::numeric("ABC")]);
    }

    #[test]
    fn punctuation_only_is_single_text_run() {
        assert_eq!(tokenize("。"), vec![StyledRun::text("。")]);
        assert_eq!(tokenize("，、；！"), vec![StyledRun::text("，、；！")]);
    }

    #[test]
    fn numbers_at_both_boundaries() {
        assert_eq!(
            tokenize("2024年增长12"),
            vec![
                StyledRun::numeric("2024"),
                StyledRun::text("年增长"),
                StyledRun::numeric("12"),
            ]
        );
    }

    #[test]
    fn lone_percent_and_decimal_point() {
        assert_eq!(
            tokenize("%与."),
            vec![
                StyledRun::text("%"),
                StyledRun::text("与"),
                StyledRun::numeric("."),
            ]
        );
    }

    #[test]
    fn dotted_version_splits_at_second_point() {
        assert_eq!(
            tokenize("1.5.3"),
            vec![
                StyledRun::numeric("1.5"),
                StyledRun::numeric("."),
                StyledRun::numeric("3"),
            ]
        );
    }

    #[test]
    fn whitespace_between_words_is_kept() {
        let runs = tokenize("GDP 增长 5%");
        assert_eq!(
            runs,
            vec![
                StyledRun::numeric("GDP"),
                StyledRun::text(" 增长 "),
                StyledRun::numeric("5"),
                StyledRun::text("%"),
            ]
        );

        let runs = tokenize("hello world");
        assert_eq!(runs[1], StyledRun::text(" "));
    }

    #[test]
    fn empty_line_has_no_runs() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn reconstruction_is_lossless() {
        let samples = [
            "今年一季度GDP同比增长5.3%，高于预期0.3个百分点。",
            "  leading and trailing  ",
            "100%%50",
            "第3.14.15条，Version 2.0 发布",
            "٣٤ 数字 ５６ full-width",
            "%%%",
            "...",
            "Rust 1.75 与 C++ 20",
        ];
        for sample in samples {
            assert_eq!(join_runs(&tokenize(sample)), sample, "sample: {}", sample);
        }
    }
}
