use crate::grading::tokenizer::answer_len;

/// 评语中单条评分标准的最大长度
const MAX_ITEM_CHARS: usize = 90;

/// 单类评语最多列出的条目数
const MAX_ITEMS: usize = 2;

pub const EXPAND_HINT: &str = "Expand with 2-3 complete sentences.";
pub const DEFAULT_FEEDBACK: &str = "Good start. Add a concrete detail from the passage.";

/// Feedback Builder
/// 根据评分标准得分拼装简短评语
pub struct FeedbackBuilder {
    strong_threshold: f64,
    gap_threshold: f64,
    min_answer_chars: usize,
}

impl FeedbackBuilder {
    pub fn new() -> Self {
        Self {
            strong_threshold: 0.6,
            gap_threshold: 0.5,
            min_answer_chars: 25,
        }
    }

    /// 生成评语
    ///
    /// # 参数
    /// - `answer`: 学生原始作答
    /// - `rubric`: 评分标准
    /// - `rubric_scores`: 与 `rubric` 一一对应的得分
    ///
    /// # 返回
    /// 依次包含 Strong / Add / Expand 子句；都不适用时返回默认鼓励语
    pub fn build(&self, answer: &str, rubric: &[String], rubric_scores: &[f64]) -> String {
        let mut parts = Vec::new();

        let strengths = self.pick(rubric, rubric_scores, |score| score >= self.strong_threshold);
        if !strengths.is_empty() {
            parts.push(format!("Strong: {}.", strengths.join("; ")));
        }

        let gaps = self.pick(rubric, rubric_scores, |score| score < self.gap_threshold);
        if !gaps.is_empty() {
            parts.push(format!("Add: {}.", gaps.join("; ")));
        }

        if answer_len(answer) < self.min_answer_chars {
            parts.push(EXPAND_HINT.to_string());
        }

        if parts.is_empty() {
            DEFAULT_FEEDBACK.to_string()
        } else {
            parts.join(" ")
        }
    }

    fn pick<F>(&self, rubric: &[String], rubric_scores: &[f64], keep: F) -> Vec<String>
    where
        F: Fn(f64) -> bool,
    {
        rubric
            .iter()
            .enumerate()
            .filter(|(index, _)| keep(rubric_scores.get(*index).copied().unwrap_or(0.0)))
            .take(MAX_ITEMS)
            .map(|(_, item)| shorten(item, MAX_ITEM_CHARS))
            .collect()
    }
}

impl Default for FeedbackBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 截断过长文本，结果（含省略号）不超过 `max` 个字符
pub fn shorten(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rubric(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    const LONG_ANSWER: &str = "This answer is comfortably longer than the limit.";

    #[test]
    fn test_strong_and_gap_clauses() {
        let builder = FeedbackBuilder::new();
        let items = rubric(&["Names the cause", "Names the effect", "Gives an example"]);
        let feedback = builder.build(LONG_ANSWER, &items, &[1.0, 0.2, 0.0]);

        assert_eq!(
            feedback,
            "Strong: Names the cause. Add: Names the effect; Gives an example."
        );
    }

    #[test]
    fn test_at_most_two_items_per_clause() {
        let builder = FeedbackBuilder::new();
        let items = rubric(&["one", "two", "three"]);
        let feedback = builder.build(LONG_ANSWER, &items, &[0.9, 0.8, 0.7]);

        assert_eq!(feedback, "Strong: one; two.");
    }

    #[test]
    fn test_gray_zone_item_is_neither() {
        let builder = FeedbackBuilder::new();
        let items = rubric(&["middle"]);
        let feedback = builder.build(LONG_ANSWER, &items, &[0.55]);

        assert_eq!(feedback, DEFAULT_FEEDBACK);
    }

    #[test]
    fn test_short_answer_adds_expand_hint() {
        let builder = FeedbackBuilder::new();
        let feedback = builder.build("Yes.", &[], &[]);
        assert_eq!(feedback, EXPAND_HINT);

        // 正好 25 个字符不再提示
        let answer = "a".repeat(25);
        assert_eq!(builder.build(&answer, &[], &[]), DEFAULT_FEEDBACK);

        // 粘贴带入的 BOM 不计入长度
        let answer = format!("\u{FEFF}{}", "a".repeat(24));
        assert_eq!(builder.build(&answer, &[], &[]), EXPAND_HINT);
    }

    #[test]
    fn test_shorten() {
        assert_eq!(shorten("short", 90), "short");

        let long = "x".repeat(100);
        let cut = shorten(&long, 90);
        assert_eq!(cut.chars().count(), 90);
        assert!(cut.ends_with("..."));

        let exact = "y".repeat(90);
        assert_eq!(shorten(&exact, 90), exact);
    }

    #[test]
    fn test_long_rubric_item_truncated_in_feedback() {
        let builder = FeedbackBuilder::new();
        let item = format!("Explains {}", "z".repeat(120));
        let feedback = builder.build(LONG_ANSWER, &[item], &[0.0]);

        assert!(feedback.starts_with("Add: Explains "));
        assert!(feedback.ends_with("....")); // 省略号 + 子句句号
    }
}
