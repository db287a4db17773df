use crate::grading::feedback::FeedbackBuilder;
use crate::grading::tokenizer::{answer_len, normalize, token_set};
use crate::grading::types::*;
use std::collections::HashSet;
use tracing::debug;

pub const UNSCORABLE_FEEDBACK: &str = "Unable to score this answer locally.";
pub const UNSCORABLE_EVIDENCE: &str = "Review the passage and focus on the core causes and outcomes.";
pub const GENERIC_EVIDENCE: &str =
    "Revisit the paragraph that explains the cause and the system-level response.";

/// 评分权重
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub overlap: f64,
    pub rubric: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            overlap: 0.55,
            rubric: 0.45,
        }
    }
}

/// Scoring Engine
/// 基于词汇重叠与评分标准覆盖率的本地评分（AI 不可用时的降级方案）
pub struct ScoringEngine {
    weights: ScoringWeights,
    pass_threshold: f64,
    min_answer_chars: usize,
    feedback: FeedbackBuilder,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self {
            weights: ScoringWeights::default(),
            pass_threshold: 0.6,
            min_answer_chars: 25,
            feedback: FeedbackBuilder::new(),
        }
    }

    /// 对一条作答评分
    ///
    /// # 参数
    /// - `answer`: 学生作答
    /// - `ideal_answer`: 参考答案
    /// - `rubric`: 评分标准（可为空）
    ///
    /// # 返回
    /// ScoreResult；参考答案规范化后为空时返回 0 分的兜底结果
    pub fn score(&self, answer: &str, ideal_answer: &str, rubric: &[String]) -> ScoreResult {
        let breakdown = match self.breakdown(answer, ideal_answer, rubric) {
            Some(breakdown) => breakdown,
            None => {
                debug!("ideal answer has no scorable tokens");
                return ScoreResult {
                    score: 0.0,
                    correct: false,
                    feedback: UNSCORABLE_FEEDBACK.to_string(),
                    model_answer: ideal_answer.to_string(),
                    evidence: UNSCORABLE_EVIDENCE.to_string(),
                };
            }
        };

        debug!(
            overlap = breakdown.overlap_score,
            coverage = breakdown.rubric_coverage,
            score = breakdown.total_score,
            "answer scored locally"
        );

        ScoreResult {
            score: breakdown.total_score,
            correct: self.verdict(breakdown.total_score, answer),
            feedback: self.feedback.build(answer, rubric, &breakdown.rubric_scores),
            model_answer: ideal_answer.to_string(),
            evidence: GENERIC_EVIDENCE.to_string(),
        }
    }

    /// 计算评分明细；参考答案没有有效词时返回 None
    pub fn breakdown(
        &self,
        answer: &str,
        ideal_answer: &str,
        rubric: &[String],
    ) -> Option<ScoreBreakdown> {
        let answer_tokens = token_set(answer);
        let ideal_tokens = normalize(ideal_answer);

        if ideal_tokens.is_empty() {
            return None;
        }

        let overlap_score = fraction_present(&ideal_tokens, &answer_tokens);

        let rubric_scores: Vec<f64> = rubric
            .iter()
            .map(|item| {
                let tokens = normalize(item);
                if tokens.is_empty() {
                    0.0
                } else {
                    fraction_present(&tokens, &answer_tokens)
                }
            })
            .collect();

        let rubric_coverage = if rubric_scores.is_empty() {
            0.0
        } else {
            rubric_scores.iter().sum::<f64>() / rubric_scores.len() as f64
        };

        let total_score = (overlap_score * self.weights.overlap
            + rubric_coverage * self.weights.rubric)
            .clamp(0.0, 1.0);

        Some(ScoreBreakdown {
            overlap_score,
            rubric_scores,
            rubric_coverage,
            total_score,
        })
    }

    /// 判定是否正确：分数达标且作答足够长，二者缺一不可
    pub fn verdict(&self, score: f64, answer: &str) -> bool {
        score >= self.pass_threshold && answer_len(answer) > self.min_answer_chars
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// 设置自定义权重
    pub fn set_weights(&mut self, weights: ScoringWeights) {
        self.weights = weights;
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

// tokens 中出现在 vocab 里的比例；重复词按出现次数计
fn fraction_present(tokens: &[String], vocab: &HashSet<String>) -> f64 {
    let matched = tokens.iter().filter(|token| vocab.contains(*token)).count();
    matched as f64 / tokens.len() as f64
}
