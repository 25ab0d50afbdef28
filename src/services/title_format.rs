//! 标题排版优化
//!
//! 在中文（CJK 统一表意文字 U+4E00–U+9FA5）与英文字母、数字之间补一个空格，
//! 再把连续空白压成单个空格。标点、其他 CJK 区块和全角字符不参与加空格。

use regex::Regex;
use std::sync::OnceLock;

static CJK_THEN_LATIN: OnceLock<Regex> = OnceLock::new();
static LATIN_THEN_CJK: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_RUN: OnceLock<Regex> = OnceLock::new();

/// 优化标题排版
///
/// 对任意输入幂等；空字符串原样返回。
/// 例如 "从0到10000粉丝" -> "从 0 到 10000 粉丝"
pub fn optimize_title(title: &str) -> String {
    if title.is_empty() {
        return String::new();
    }

    let cjk_then_latin = CJK_THEN_LATIN
        .get_or_init(|| Regex::new(r"([\u{4e00}-\u{9fa5}])([A-Za-z0-9])").expect("正则编译失败"));
    let latin_then_cjk = LATIN_THEN_CJK
        .get_or_init(|| Regex::new(r"([A-Za-z0-9])([\u{4e00}-\u{9fa5}])").expect("正则编译失败"));
    let whitespace_run =
        WHITESPACE_RUN.get_or_init(|| Regex::new(r"\s+").expect("正则编译失败"));

    // 规则 1: 中文与英文/数字之间添加空格
    let spaced = cjk_then_latin.replace_all(title, "$1 $2");
    let spaced = latin_then_cjk.replace_all(&spaced, "$1 $2");

    // 规则 2: 去除多余的空格，只保留一个
    whitespace_run.replace_all(&spaced, " ").trim().to_string()
}
