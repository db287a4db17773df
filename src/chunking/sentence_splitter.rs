use once_cell::sync::Lazy;
use regex::Regex;

// 段落分隔：两个换行之间只允许空白
static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("paragraph pattern is valid"));

// 句子：以一个或多个 . ! ? 结尾；段落末尾允许没有终止符
static SENTENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+|[^.!?]+$").expect("sentence pattern is valid"));

// 非单词、非空白字符，计数前替换为空格
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s]").expect("word pattern is valid"));

/// 按空行分割段落
///
/// # 参数
/// - `text`: 原始文章文本
///
/// # 返回
/// 去除首尾空白后的非空段落列表
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// 将段落分割为句子，终止符保留在句尾
pub fn split_sentences(paragraph: &str) -> Vec<String> {
    SENTENCE
        .find_iter(paragraph)
        .map(|m| m.as_str().trim())
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_string)
        .collect()
}

/// 统计词数
///
/// 标点替换为空格后按空白切分；纯词法，结果可复现
pub fn count_words(text: &str) -> usize {
    NON_WORD.replace_all(text, " ").split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_paragraphs() {
        let text = "First para.\nStill first.\n\nSecond para.\n   \n\n\nThird.";
        let paragraphs = split_paragraphs(text);
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0], "First para.\nStill first.");
        assert_eq!(paragraphs[2], "Third.");
    }

    #[test]
    fn test_split_paragraphs_empty() {
        assert!(split_paragraphs("").is_empty());
        assert!(split_paragraphs("  \n\n \n ").is_empty());
    }

    #[test]
    fn test_split_sentences() {
        let sentences = split_sentences("One. Two! Three? Four");
        assert_eq!(sentences, vec!["One.", "Two!", "Three?", "Four"]);
    }

    #[test]
    fn test_split_sentences_keeps_terminator_runs() {
        let sentences = split_sentences("Wait... Really?! Yes.");
        assert_eq!(sentences, vec!["Wait...", "Really?!", "Yes."]);
    }

    #[test]
    fn test_split_sentences_decimal_point() {
        // 小数点同样被视为句子边界，这是纯词法规则的已知局限
        let sentences = split_sentences("It cost 2.5 dollars.");
        assert_eq!(sentences, vec!["It cost 2.", "5 dollars."]);
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("The cat sat."), 3);
        assert_eq!(count_words("street-by-street map"), 4);
        assert_eq!(count_words("10 p.m. shift"), 4);
        assert_eq!(count_words("  ...  "), 0);
        assert_eq!(count_words(""), 0);
    }
}
