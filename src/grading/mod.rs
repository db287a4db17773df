// 评分模块
// 本地词汇评分、AI 回复校验与降级、练习结果汇总

pub mod types;
pub mod tokenizer;
pub mod feedback;
pub mod scoring_engine;
pub mod reply_validator;
pub mod fallback_strategy;
pub mod report;

#[cfg(test)]
mod integration_tests;

// 重新导出主要类型
pub use types::*;
pub use feedback::FeedbackBuilder;
pub use scoring_engine::{ScoringEngine, ScoringWeights};
pub use fallback_strategy::{AiReply, FallbackStrategy};
pub use report::SessionReport;

/// 使用默认权重对作答进行本地评分
pub fn score_answer(answer: &str, ideal_answer: &str, rubric: &[String]) -> ScoreResult {
    ScoringEngine::new().score(answer, ideal_answer, rubric)
}
