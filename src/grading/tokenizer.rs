use once_cell::sync::Lazy;
use std::collections::HashSet;

/// 停用词表（冠词、连词、常见代词与助动词）
pub const STOPWORDS: [&str; 38] = [
    "the", "a", "an", "and", "or", "but", "if", "then", "so", "of", "to", "in", "on", "for",
    "with", "at", "by", "from", "that", "this", "it", "as", "was", "were", "are", "is", "be",
    "been", "being", "they", "their", "them", "he", "she", "we", "you", "your", "i",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOPWORDS.into_iter().collect());

pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}

/// 规范化为过滤后的词列表
///
/// 小写化，`[a-z0-9\s]` 以外的字符替换为空格，按空白切分并去掉停用词。
/// 保留重复词与原始顺序。
pub fn normalize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| !is_stopword(token))
        .map(str::to_string)
        .collect()
}

/// 规范化为词集合（用于成员判断）
pub fn token_set(text: &str) -> HashSet<String> {
    normalize(text).into_iter().collect()
}

/// 作答长度（字符数），用于判定与反馈的长度门槛
///
/// 首尾的空白与 U+FEFF（从文件或剪贴板粘贴时常带入的 BOM）都不计入
pub fn answer_len(answer: &str) -> usize {
    answer
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .chars()
        .count()
}
